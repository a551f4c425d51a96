use thiserror::Error;

/// Errors raised by `Scalar` and `Vec3` operations whose input falls outside
/// the mathematically valid domain, or whose result leaves the finite range.
///
/// Domain checking is fail-fast: no operation returns a NaN or infinite
/// value/derivative pair in place of an error.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("logarithm of non-positive value {value}")]
    LogNonPositive { value: f64 },

    #[error("square root of negative value {value}")]
    SqrtNegative { value: f64 },

    #[error("inverse trigonometric input {value} outside [-1, 1]")]
    InverseTrigRange { value: f64 },

    #[error("tangent undefined at odd multiple of pi/2 (x = {value})")]
    TanAsymptote { value: f64 },

    #[error("negative base {base} raised to non-integer exponent {exponent}")]
    NegativeBasePow { base: f64, exponent: f64 },

    #[error("{op} produced a non-finite value or derivative")]
    NonFinite { op: &'static str },
}

/// Errors raised by the root finder and the quadrature routine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolveError {
    #[error("invalid solver configuration: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("derivative vanished at x = {x} after {iterations} iterations")]
    ZeroDerivative { x: f64, iterations: usize },

    #[error("no convergence within {max_iterations} iterations (|f(x)| = {residual} at x = {x})")]
    Convergence {
        max_iterations: usize,
        x: f64,
        residual: f64,
    },

    #[error("non-finite value encountered at x = {x} after {iterations} iterations")]
    NumericalInstability { x: f64, iterations: usize },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

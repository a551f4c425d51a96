use crate::autodiff::Scalar;
use crate::error::{DomainError, SolveError};
use serde::{Deserialize, Serialize};

/// Iteration parameters for the Newton-Raphson root finder.
///
/// `damping` scales the Newton step; 1.0 is the undamped update.
/// `derivative_floor` is the magnitude below which the derivative counts as
/// vanished, since near a critical point rounding leaves a tiny residue
/// rather than an exact zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NewtonSettings {
    pub max_iterations: usize,
    pub tolerance: f64,
    pub damping: f64,
    pub derivative_floor: f64,
}

impl Default for NewtonSettings {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            tolerance: 1e-9,
            damping: 1.0,
            derivative_floor: 1e-14,
        }
    }
}

/// A converged root estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResult {
    pub root: f64,
    pub residual: f64,
    /// f'(root), as computed by the final evaluation.
    pub derivative: f64,
    pub iterations: usize,
}

/// Finds a root of `f` by Newton-Raphson iteration, with the derivative of
/// each trial point supplied by forward-mode differentiation.
///
/// The convergence criterion is `|f(x)| <= tolerance`; no step-size
/// criterion is applied.
///
/// # Errors
///
/// - `InvalidConfig` for a non-positive tolerance, a zero iteration cap,
///   non-positive damping, a negative derivative floor, or a non-finite
///   initial guess.
/// - `Domain` when `f` itself fails at a trial point.
/// - `NumericalInstability` when an evaluation or the next guess comes out
///   non-finite.
/// - `ZeroDerivative` when the tangent is too flat to step.
/// - `Convergence` when the iteration cap is exhausted.
pub fn find_root<F>(
    f: F,
    initial_guess: f64,
    settings: NewtonSettings,
) -> Result<RootResult, SolveError>
where
    F: Fn(Scalar) -> Result<Scalar, DomainError>,
{
    if settings.max_iterations == 0 {
        return Err(SolveError::InvalidConfig {
            reason: "max_iterations must be greater than zero",
        });
    }
    if !settings.tolerance.is_finite() || settings.tolerance <= 0.0 {
        return Err(SolveError::InvalidConfig {
            reason: "tolerance must be finite and positive",
        });
    }
    if !settings.damping.is_finite() || settings.damping <= 0.0 {
        return Err(SolveError::InvalidConfig {
            reason: "damping must be finite and positive",
        });
    }
    if !settings.derivative_floor.is_finite() || settings.derivative_floor < 0.0 {
        return Err(SolveError::InvalidConfig {
            reason: "derivative_floor must be finite and non-negative",
        });
    }
    if !initial_guess.is_finite() {
        return Err(SolveError::InvalidConfig {
            reason: "initial guess must be finite",
        });
    }

    let mut x = initial_guess;
    let mut iterations = 0usize;

    loop {
        let eval = f(Scalar::variable(x))?;
        if !eval.value.is_finite() || !eval.derivative.is_finite() {
            return Err(SolveError::NumericalInstability { x, iterations });
        }

        if eval.value.abs() <= settings.tolerance {
            return Ok(RootResult {
                root: x,
                residual: eval.value,
                derivative: eval.derivative,
                iterations,
            });
        }

        if iterations >= settings.max_iterations {
            return Err(SolveError::Convergence {
                max_iterations: settings.max_iterations,
                x,
                residual: eval.value,
            });
        }

        if eval.derivative.abs() <= settings.derivative_floor {
            return Err(SolveError::ZeroDerivative { x, iterations });
        }

        let next = x - settings.damping * eval.value / eval.derivative;
        if !next.is_finite() {
            return Err(SolveError::NumericalInstability { x: next, iterations });
        }

        x = next;
        iterations += 1;
    }
}

/// Integrates `f` over `[a, b]` with the composite Simpson rule on `n`
/// subintervals. `n` must be positive and even.
pub fn integrate<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, SolveError>
where
    F: Fn(f64) -> f64,
{
    if n == 0 || n % 2 != 0 {
        return Err(SolveError::InvalidConfig {
            reason: "subinterval count must be positive and even",
        });
    }
    if !a.is_finite() || !b.is_finite() {
        return Err(SolveError::InvalidConfig {
            reason: "integration bounds must be finite",
        });
    }

    let h = (b - a) / n as f64;
    let mut sum = f(a) + f(b);
    for i in 1..n {
        let x = a + h * i as f64;
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * f(x);
    }

    let result = sum * h / 3.0;
    if !result.is_finite() {
        return Err(SolveError::NumericalInstability {
            x: result,
            iterations: n,
        });
    }
    Ok(result)
}

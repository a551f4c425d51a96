//! The `calculus_core` crate provides the numeric engine for CalCulus:
//! forward-mode automatic differentiation with derivative-aware root finding.
//!
//! Key components:
//! - **Autodiff**: `Scalar`, a `(value, derivative)` pair propagated through
//!   every elementary operation by the chain rule.
//! - **Vec3**: a 3-component aggregate over `Scalar` with dot/cross/norm.
//! - **Solver**: Newton-Raphson root finding driven by the AD derivative,
//!   plus composite Simpson quadrature.
//! - **Constants**: the fixed table of mathematical and physical constants.
//! - **Functions**: free-function wrappers that lift plain numbers to
//!   constant scalars.

pub mod autodiff;
pub mod constants;
pub mod error;
pub mod functions;
pub mod solver;
pub mod vec3;

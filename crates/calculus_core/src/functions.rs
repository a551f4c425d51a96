//! Free-function surface over the elementary operations.
//!
//! Each function accepts anything convertible to a [`Scalar`]; a plain `f64`
//! is lifted to a constant (derivative 0) before the operation is applied,
//! so callers can mix seeded variables and bare numbers freely.

use crate::autodiff::Scalar;
use crate::error::DomainError;

pub fn sin(x: impl Into<Scalar>) -> Scalar {
    x.into().sin()
}

pub fn cos(x: impl Into<Scalar>) -> Scalar {
    x.into().cos()
}

pub fn tan(x: impl Into<Scalar>) -> Result<Scalar, DomainError> {
    x.into().tan()
}

pub fn asin(x: impl Into<Scalar>) -> Result<Scalar, DomainError> {
    x.into().asin()
}

pub fn acos(x: impl Into<Scalar>) -> Result<Scalar, DomainError> {
    x.into().acos()
}

pub fn atan(x: impl Into<Scalar>) -> Scalar {
    x.into().atan()
}

pub fn sinh(x: impl Into<Scalar>) -> Result<Scalar, DomainError> {
    x.into().sinh()
}

pub fn cosh(x: impl Into<Scalar>) -> Result<Scalar, DomainError> {
    x.into().cosh()
}

pub fn tanh(x: impl Into<Scalar>) -> Scalar {
    x.into().tanh()
}

pub fn exp(x: impl Into<Scalar>) -> Result<Scalar, DomainError> {
    x.into().exp()
}

pub fn log(x: impl Into<Scalar>) -> Result<Scalar, DomainError> {
    x.into().log()
}

pub fn log10(x: impl Into<Scalar>) -> Result<Scalar, DomainError> {
    x.into().log10()
}

pub fn sqrt(x: impl Into<Scalar>) -> Result<Scalar, DomainError> {
    x.into().sqrt()
}

pub fn cbrt(x: impl Into<Scalar>) -> Result<Scalar, DomainError> {
    x.into().cbrt()
}

pub fn abs(x: impl Into<Scalar>) -> Scalar {
    x.into().abs()
}

pub fn pow(x: impl Into<Scalar>, exponent: f64) -> Result<Scalar, DomainError> {
    x.into().pow(exponent)
}

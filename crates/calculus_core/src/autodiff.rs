use crate::error::DomainError;
use num_traits::{One, Zero};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Forward-mode AD scalar.
/// value: function value at the seed point
/// derivative: derivative with respect to the seeded independent variable
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scalar {
    pub value: f64,
    pub derivative: f64,
}

impl Scalar {
    pub fn new(value: f64, derivative: f64) -> Self {
        Self { value, derivative }
    }

    /// Lifts a plain number into a constant (derivative 0).
    pub fn constant(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// Marks a number as the independent variable (derivative 1).
    pub fn variable(value: f64) -> Self {
        Self::new(value, 1.0)
    }

    pub fn sin(self) -> Self {
        Self::new(self.value.sin(), self.value.cos() * self.derivative)
    }

    pub fn cos(self) -> Self {
        Self::new(self.value.cos(), -self.value.sin() * self.derivative)
    }

    /// Tangent. Raises at an exact asymptote (`cos x == 0`); every
    /// representable input near an odd multiple of pi/2 yields a large but
    /// finite result, which is returned as-is.
    pub fn tan(self) -> Result<Self, DomainError> {
        if self.value.cos() == 0.0 {
            return Err(DomainError::TanAsymptote { value: self.value });
        }
        let t = self.value.tan();
        chain(t, 1.0 + t * t, self.derivative, "tan")
    }

    pub fn asin(self) -> Result<Self, DomainError> {
        let v = self.value;
        if !(-1.0..=1.0).contains(&v) {
            return Err(DomainError::InverseTrigRange { value: v });
        }
        chain(v.asin(), 1.0 / (1.0 - v * v).sqrt(), self.derivative, "asin")
    }

    pub fn acos(self) -> Result<Self, DomainError> {
        let v = self.value;
        if !(-1.0..=1.0).contains(&v) {
            return Err(DomainError::InverseTrigRange { value: v });
        }
        chain(v.acos(), -1.0 / (1.0 - v * v).sqrt(), self.derivative, "acos")
    }

    pub fn atan(self) -> Self {
        let v = self.value;
        Self::new(v.atan(), self.derivative / (1.0 + v * v))
    }

    pub fn sinh(self) -> Result<Self, DomainError> {
        let v = self.value;
        chain(v.sinh(), v.cosh(), self.derivative, "sinh")
    }

    pub fn cosh(self) -> Result<Self, DomainError> {
        let v = self.value;
        chain(v.cosh(), v.sinh(), self.derivative, "cosh")
    }

    pub fn tanh(self) -> Self {
        let t = self.value.tanh();
        Self::new(t, (1.0 - t * t) * self.derivative)
    }

    pub fn exp(self) -> Result<Self, DomainError> {
        let e = self.value.exp();
        chain(e, e, self.derivative, "exp")
    }

    /// Natural logarithm.
    ///
    /// # Errors
    ///
    /// Returns `LogNonPositive` when the value is zero or negative.
    pub fn log(self) -> Result<Self, DomainError> {
        let v = self.value;
        if v <= 0.0 {
            return Err(DomainError::LogNonPositive { value: v });
        }
        chain(v.ln(), 1.0 / v, self.derivative, "log")
    }

    pub fn log10(self) -> Result<Self, DomainError> {
        let v = self.value;
        if v <= 0.0 {
            return Err(DomainError::LogNonPositive { value: v });
        }
        chain(v.log10(), 1.0 / (v * std::f64::consts::LN_10), self.derivative, "log10")
    }

    /// Square root. Negative values are out of domain; at 0 the slope is
    /// unbounded, so a seeded operand raises while a constant passes through
    /// with derivative 0.
    pub fn sqrt(self) -> Result<Self, DomainError> {
        let v = self.value;
        if v < 0.0 {
            return Err(DomainError::SqrtNegative { value: v });
        }
        let s = v.sqrt();
        chain(s, 0.5 / s, self.derivative, "sqrt")
    }

    /// Cube root, defined for negative reals. Only the unbounded slope at 0
    /// can raise.
    pub fn cbrt(self) -> Result<Self, DomainError> {
        let c = self.value.cbrt();
        chain(c, 1.0 / (3.0 * c * c), self.derivative, "cbrt")
    }

    /// Absolute value. The kink at 0 takes derivative 0.
    pub fn abs(self) -> Self {
        let d = if self.value > 0.0 {
            self.derivative
        } else if self.value < 0.0 {
            -self.derivative
        } else {
            0.0
        };
        Self::new(self.value.abs(), d)
    }

    /// Raises to a real power. Integer exponents use the `powi` rule and stay
    /// valid for non-positive bases; a non-integer exponent on a negative
    /// base is out of the real domain.
    pub fn pow(self, exponent: f64) -> Result<Self, DomainError> {
        let v = self.value;
        if exponent.fract() == 0.0 && exponent.abs() <= i32::MAX as f64 {
            let n = exponent as i32;
            if v == 0.0 && n < 0 {
                return Err(DomainError::DivisionByZero);
            }
            if n == 0 {
                return Ok(Self::new(1.0, 0.0));
            }
            chain(v.powi(n), exponent * v.powi(n - 1), self.derivative, "pow")
        } else {
            if v < 0.0 {
                return Err(DomainError::NegativeBasePow { base: v, exponent });
            }
            chain(
                v.powf(exponent),
                exponent * v.powf(exponent - 1.0),
                self.derivative,
                "pow",
            )
        }
    }

    /// Quotient rule division.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` when the divisor's value is 0.
    pub fn div(self, rhs: impl Into<Scalar>) -> Result<Self, DomainError> {
        let rhs = rhs.into();
        if rhs.value == 0.0 {
            return Err(DomainError::DivisionByZero);
        }
        let value = self.value / rhs.value;
        let derivative = (self.derivative * rhs.value - self.value * rhs.derivative)
            / (rhs.value * rhs.value);
        if value.is_finite() && derivative.is_finite() {
            Ok(Self::new(value, derivative))
        } else {
            Err(DomainError::NonFinite { op: "div" })
        }
    }
}

/// Chain rule for a unary operation with the given result value and local
/// slope. A constant operand (derivative part exactly 0) composes to
/// derivative 0 even where the slope is unbounded; any non-finite value or
/// derivative is rejected.
fn chain(value: f64, slope: f64, derivative: f64, op: &'static str) -> Result<Scalar, DomainError> {
    let d = if derivative == 0.0 { 0.0 } else { slope * derivative };
    if value.is_finite() && d.is_finite() {
        Ok(Scalar::new(value, d))
    } else {
        Err(DomainError::NonFinite { op })
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

impl Zero for Scalar {
    fn zero() -> Self {
        Self::constant(0.0)
    }
    fn is_zero(&self) -> bool {
        self.value == 0.0 && self.derivative == 0.0
    }
}

impl One for Scalar {
    fn one() -> Self {
        Self::constant(1.0)
    }
}

impl Add for Scalar {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value, self.derivative + rhs.derivative)
    }
}

impl Add<f64> for Scalar {
    type Output = Self;
    fn add(self, rhs: f64) -> Self {
        self + Self::constant(rhs)
    }
}

impl Add<Scalar> for f64 {
    type Output = Scalar;
    fn add(self, rhs: Scalar) -> Scalar {
        Scalar::constant(self) + rhs
    }
}

impl Sub for Scalar {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value, self.derivative - rhs.derivative)
    }
}

impl Sub<f64> for Scalar {
    type Output = Self;
    fn sub(self, rhs: f64) -> Self {
        self - Self::constant(rhs)
    }
}

impl Sub<Scalar> for f64 {
    type Output = Scalar;
    fn sub(self, rhs: Scalar) -> Scalar {
        Scalar::constant(self) - rhs
    }
}

impl Mul for Scalar {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.value * rhs.value,
            self.value * rhs.derivative + self.derivative * rhs.value,
        )
    }
}

impl Mul<f64> for Scalar {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self * Self::constant(rhs)
    }
}

impl Mul<Scalar> for f64 {
    type Output = Scalar;
    fn mul(self, rhs: Scalar) -> Scalar {
        Scalar::constant(self) * rhs
    }
}

impl Neg for Scalar {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.value, -self.derivative)
    }
}

impl AddAssign for Scalar {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Scalar {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Scalar {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

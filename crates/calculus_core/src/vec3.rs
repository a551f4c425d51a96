use crate::autodiff::Scalar;
use crate::error::DomainError;
use std::ops::{Add, Mul, Sub};

/// A 3-component quantity whose components carry their own derivatives.
/// Every operation reduces to the underlying `Scalar` rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
}

impl Vec3 {
    pub fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
    }

    /// Builds a vector of constants from plain components.
    pub fn from_components(x: f64, y: f64, z: f64) -> Self {
        Self::new(Scalar::constant(x), Scalar::constant(y), Scalar::constant(z))
    }

    pub fn zero() -> Self {
        Self::from_components(0.0, 0.0, 0.0)
    }

    pub fn dot(self, other: Vec3) -> Scalar {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean norm, the square root of the self-dot product.
    ///
    /// # Errors
    ///
    /// Inherits the `sqrt` edge rule: a zero-length vector with a live
    /// derivative in any component has an unbounded norm slope and raises.
    pub fn norm(self) -> Result<Scalar, DomainError> {
        self.dot(self).sqrt()
    }

    /// Scales by the reciprocal of a scalar.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` when the divisor's value is 0.
    pub fn div(self, divisor: impl Into<Scalar>) -> Result<Vec3, DomainError> {
        let divisor = divisor.into();
        Ok(Self::new(
            self.x.div(divisor)?,
            self.y.div(divisor)?,
            self.z.div(divisor)?,
        ))
    }

    /// Unit vector in this direction. A vector of norm 0 normalizes to the
    /// zero vector rather than raising.
    pub fn normalize(self) -> Result<Vec3, DomainError> {
        let norm = self.norm()?;
        if norm.value == 0.0 {
            return Ok(Self::zero());
        }
        self.div(norm)
    }

    pub fn distance(self, other: Vec3) -> Result<Scalar, DomainError> {
        (self - other).norm()
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<Scalar> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: Scalar) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self * Scalar::constant(rhs)
    }
}

impl Mul<Vec3> for Scalar {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * Scalar::constant(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Vec3;
    use crate::autodiff::Scalar;
    use crate::error::DomainError;
    use approx::assert_relative_eq;

    #[test]
    fn componentwise_arithmetic() {
        let a = Vec3::from_components(1.0, 2.0, 3.0);
        let b = Vec3::from_components(4.0, 5.0, 6.0);
        let sum = a + b;
        assert_eq!(sum.x.value, 5.0);
        assert_eq!(sum.y.value, 7.0);
        assert_eq!(sum.z.value, 9.0);
        let diff = b - a;
        assert_eq!(diff.x.value, 3.0);
        let scaled = 2.0 * a;
        assert_eq!(scaled.z.value, 6.0);
    }

    #[test]
    fn dot_and_norm_agree() {
        let a = Vec3::from_components(3.0, 4.0, 0.0);
        assert_relative_eq!(a.dot(a).value, 25.0);
        assert_relative_eq!(a.norm().expect("nonzero vector").value, 5.0);
    }

    #[test]
    fn cross_is_orthogonal_to_both_factors() {
        let a = Vec3::from_components(1.0, 2.0, 3.0);
        let b = Vec3::from_components(-4.0, 0.5, 2.0);
        let c = a.cross(b);
        assert_relative_eq!(c.dot(a).value, 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.dot(b).value, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn derivatives_propagate_through_vector_operations() {
        // v(t) = (t, t^2, 1) at t = 2: |v|^2 = t^2 + t^4 + 1,
        // d|v|^2/dt = 2t + 4t^3 = 36.
        let t = Scalar::variable(2.0);
        let v = Vec3::new(t, t * t, Scalar::constant(1.0));
        let squared = v.dot(v);
        assert_relative_eq!(squared.value, 21.0);
        assert_relative_eq!(squared.derivative, 36.0);

        // d|v|/dt = 36 / (2 sqrt(21)).
        let norm = v.norm().expect("nonzero vector");
        assert_relative_eq!(norm.derivative, 36.0 / (2.0 * 21.0_f64.sqrt()));
    }

    #[test]
    fn cross_product_derivative_follows_product_rule() {
        // a(t) = (t, 0, 0), b = (0, 1, 0): a x b = (0, 0, t).
        let t = Scalar::variable(5.0);
        let a = Vec3::new(t, Scalar::constant(0.0), Scalar::constant(0.0));
        let b = Vec3::from_components(0.0, 1.0, 0.0);
        let c = a.cross(b);
        assert_eq!(c.z.value, 5.0);
        assert_eq!(c.z.derivative, 1.0);
        assert_eq!(c.x.value, 0.0);
        assert_eq!(c.x.derivative, 0.0);
    }

    #[test]
    fn normalize_produces_a_unit_vector() {
        let v = Vec3::from_components(2.0, -2.0, 1.0);
        let unit = v.normalize().expect("nonzero vector");
        assert_relative_eq!(unit.norm().expect("unit vector").value, 1.0, epsilon = 1e-12);
        assert_relative_eq!(unit.x.value, 2.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn normalize_of_zero_vector_is_zero() {
        let unit = Vec3::zero().normalize().expect("zero vector is a fixpoint");
        assert_eq!(unit, Vec3::zero());
    }

    #[test]
    fn division_by_zero_scalar_is_rejected() {
        let v = Vec3::from_components(1.0, 1.0, 1.0);
        assert_eq!(v.div(0.0), Err(DomainError::DivisionByZero));
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vec3::from_components(1.0, 2.0, 2.0);
        let b = Vec3::zero();
        let d_ab = a.distance(b).expect("distinct points").value;
        let d_ba = b.distance(a).expect("distinct points").value;
        assert_relative_eq!(d_ab, 3.0);
        assert_relative_eq!(d_ab, d_ba);
    }
}

//! Quaternion algebra.
//!
//! `q0` is the scalar part and `(q1, q2, q3)` the vector part. A quaternion
//! with `q0 == 0` is *pure* and stands for a [`CartVec3`]; a quaternion of norm
//! one is a *unit* quaternion and stands for a rotation (see
//! [`crate::rotation`]).

use std::ops::{Mul, Neg};

use approx::{AbsDiffEq, RelativeEq};
use config::constants::ToleranceConfig;
use serde::{Deserialize, Serialize};

use crate::core::cart_vec3::CartVec3;
use crate::core::{euclidean_norm, max_abs};
use crate::error::{GeomError, GeomResult};

/// A quaternion `q0 + q1·i + q2·j + q3·k`.
///
/// # Examples
/// ```
/// use quat_geom::Quat;
///
/// let i = Quat::new(0.0, 1.0, 0.0, 0.0);
/// let j = Quat::new(0.0, 0.0, 1.0, 0.0);
/// let k = Quat::new(0.0, 0.0, 0.0, 1.0);
/// assert_eq!(i.multiply(j), k);
/// assert_eq!(j.multiply(i), -k);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quat {
    /// Scalar (real) part.
    pub q0: f64,
    /// Coefficient of `i`.
    pub q1: f64,
    /// Coefficient of `j`.
    pub q2: f64,
    /// Coefficient of `k`.
    pub q3: f64,
}

impl Quat {
    /// The multiplicative identity, which is also the zero rotation.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Creates a quaternion from its scalar part followed by its vector part.
    pub const fn new(q0: f64, q1: f64, q2: f64, q3: f64) -> Self {
        Self { q0, q1, q2, q3 }
    }

    /// Hamilton product `self · other`.
    ///
    /// Associative but not commutative.
    pub fn multiply(self, other: Self) -> Self {
        let (p0, p1, p2, p3) = (self.q0, self.q1, self.q2, self.q3);
        let (q0, q1, q2, q3) = (other.q0, other.q1, other.q2, other.q3);

        Self::new(
            p0 * q0 - p1 * q1 - p2 * q2 - p3 * q3,
            p0 * q1 + p1 * q0 + p2 * q3 - p3 * q2,
            p0 * q2 - p1 * q3 + p2 * q0 + p3 * q1,
            p0 * q3 + p1 * q2 - p2 * q1 + p3 * q0,
        )
    }

    /// Negates the vector part.
    pub fn conjugate(self) -> Self {
        Self::new(self.q0, -self.q1, -self.q2, -self.q3)
    }

    /// Extracts `(q1, q2, q3)`, discarding the scalar part.
    pub fn vector_part(self) -> CartVec3 {
        CartVec3::new(self.q1, self.q2, self.q3)
    }

    /// Euclidean norm over all four components.
    pub fn norm(&self) -> f64 {
        euclidean_norm(&[self.q0, self.q1, self.q2, self.q3])
    }

    /// Returns a new quaternion scaled to unit norm.
    ///
    /// Components are divided by their largest magnitude first, so any finite
    /// nonzero quaternion normalizes.
    ///
    /// # Errors
    /// [`GeomError::ZeroNormQuaternion`] when every component is zero and
    /// [`GeomError::NonFiniteInput`] when a component is `inf` or `NaN`.
    ///
    /// # Examples
    /// ```
    /// use quat_geom::Quat;
    /// let q = Quat::new(2.0, 0.0, 0.0, 0.0).normalize().unwrap();
    /// assert_eq!(q, Quat::IDENTITY);
    /// ```
    pub fn normalize(self) -> GeomResult<Self> {
        let m = max_abs(&[self.q0, self.q1, self.q2, self.q3]).ok_or(GeomError::NonFiniteInput)?;
        if m == 0.0 {
            return Err(GeomError::ZeroNormQuaternion);
        }
        let scaled = Self::new(self.q0 / m, self.q1 / m, self.q2 / m, self.q3 / m);
        let norm = scaled.norm();
        Ok(Self::new(
            scaled.q0 / norm,
            scaled.q1 / norm,
            scaled.q2 / norm,
            scaled.q3 / norm,
        ))
    }

    /// Returns `true` when the scalar part is exactly zero.
    pub fn is_pure(&self) -> bool {
        self.q0 == 0.0
    }

    /// Approximate equality with the default workspace tolerance.
    ///
    /// Compares components, so `q` and `-q` are not equal even though they
    /// encode the same rotation.
    pub fn equals(&self, other: &Self) -> bool {
        self.approx_eq_with(other, &ToleranceConfig::default())
    }

    /// Approximate equality with an explicit tolerance.
    pub fn approx_eq_with(&self, other: &Self, tolerance: &ToleranceConfig) -> bool {
        tolerance.is_close(self.q0, other.q0)
            && tolerance.is_close(self.q1, other.q1)
            && tolerance.is_close(self.q2, other.q2)
            && tolerance.is_close(self.q3, other.q3)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quat {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.multiply(other)
    }
}

impl Neg for Quat {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.q0, -self.q1, -self.q2, -self.q3)
    }
}

impl AbsDiffEq for Quat {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.q0.abs_diff_eq(&other.q0, epsilon)
            && self.q1.abs_diff_eq(&other.q1, epsilon)
            && self.q2.abs_diff_eq(&other.q2, epsilon)
            && self.q3.abs_diff_eq(&other.q3, epsilon)
    }
}

impl RelativeEq for Quat {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.q0.relative_eq(&other.q0, epsilon, max_relative)
            && self.q1.relative_eq(&other.q1, epsilon, max_relative)
            && self.q2.relative_eq(&other.q2, epsilon, max_relative)
            && self.q3.relative_eq(&other.q3, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests;

//! Cartesian 3D vector.
//!
//! `CartVec3` is a plain `Copy` value. Every operation returns a new value,
//! normalization included, so instances can be shared freely across threads.

use std::ops::{Add, Neg};

use approx::{AbsDiffEq, RelativeEq};
use config::constants::ToleranceConfig;
use serde::{Deserialize, Serialize};

use crate::core::quat::Quat;
use crate::core::{euclidean_norm, max_abs};
use crate::error::{GeomError, GeomResult};

/// A point or direction in Euclidean 3-space.
///
/// # Examples
/// ```
/// use quat_geom::CartVec3;
///
/// let v = CartVec3::new(3.0, 0.0, 4.0);
/// assert_eq!(v.norm(), 5.0);
/// assert!(v.normalize().unwrap().equals(&CartVec3::new(0.6, 0.0, 0.8)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartVec3 {
    /// Coordinate along the X axis.
    pub x: f64,
    /// Coordinate along the Y axis.
    pub y: f64,
    /// Coordinate along the Z axis.
    pub z: f64,
}

impl CartVec3 {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit vector along the X axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along the Z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from its three coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Componentwise sum.
    ///
    /// # Examples
    /// ```
    /// use quat_geom::CartVec3;
    /// let s = CartVec3::new(1.0, 2.0, 3.0).add(CartVec3::new(-1.0, 0.5, 1.0));
    /// assert_eq!(s, CartVec3::new(0.0, 2.5, 4.0));
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Multiplies every coordinate by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Approximate equality with the default workspace tolerance.
    ///
    /// Each coordinate pair must satisfy
    /// `|a - b| <= max(rel * max(|a|, |b|), abs)`. Intended for testing, not
    /// for hashing or ordering.
    pub fn equals(&self, other: &Self) -> bool {
        self.approx_eq_with(other, &ToleranceConfig::default())
    }

    /// Approximate equality with an explicit tolerance.
    pub fn approx_eq_with(&self, other: &Self, tolerance: &ToleranceConfig) -> bool {
        tolerance.is_close(self.x, other.x)
            && tolerance.is_close(self.y, other.y)
            && tolerance.is_close(self.z, other.z)
    }

    /// Euclidean norm `sqrt(x² + y² + z²)`, computed without intermediate
    /// overflow or underflow.
    pub fn norm(&self) -> f64 {
        euclidean_norm(&[self.x, self.y, self.z])
    }

    /// Returns a new vector with the same direction and unit norm.
    ///
    /// The coordinates are divided by their largest magnitude before the norm
    /// is taken, so any finite nonzero vector normalizes.
    ///
    /// # Errors
    /// [`GeomError::ZeroLengthVector`] when every coordinate is zero and
    /// [`GeomError::NonFiniteInput`] when a coordinate is `inf` or `NaN`.
    ///
    /// # Examples
    /// ```
    /// use quat_geom::{CartVec3, GeomError};
    /// assert_eq!(CartVec3::ZERO.normalize(), Err(GeomError::ZeroLengthVector));
    /// assert!(CartVec3::new(1.0e200, 0.0, 0.0).normalize().unwrap().equals(&CartVec3::X));
    /// ```
    pub fn normalize(self) -> GeomResult<Self> {
        let m = max_abs(&[self.x, self.y, self.z]).ok_or(GeomError::NonFiniteInput)?;
        if m == 0.0 {
            return Err(GeomError::ZeroLengthVector);
        }
        let scaled = Self::new(self.x / m, self.y / m, self.z / m);
        let norm = scaled.norm();
        Ok(Self::new(scaled.x / norm, scaled.y / norm, scaled.z / norm))
    }

    /// Embeds the vector as the pure quaternion `(0, x, y, z)`.
    pub fn to_pure_quat(self) -> Quat {
        Quat::new(0.0, self.x, self.y, self.z)
    }

    /// Dot product `x₁x₂ + y₁y₂ + z₁z₂`.
    ///
    /// # Examples
    /// ```
    /// use quat_geom::CartVec3;
    /// let d = CartVec3::new(1.0, 2.0, 3.0).dot(CartVec3::new(4.0, 5.0, 6.0));
    /// assert_eq!(d, 32.0);
    /// ```
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product, right-handed.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl Add for CartVec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        CartVec3::add(self, other)
    }
}

impl Neg for CartVec3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl AbsDiffEq for CartVec3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for CartVec3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

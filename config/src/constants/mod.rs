//! Centralized numeric tolerances shared across the quaternion geometry crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Relative tolerance used by approximate equality of vectors and quaternions.
///
/// Two components `a` and `b` are close when
/// `|a - b| <= max(RELATIVE_TOLERANCE * max(|a|, |b|), ABSOLUTE_TOLERANCE)`.
///
/// # Examples
/// ```
/// use config::constants::RELATIVE_TOLERANCE;
/// assert!(RELATIVE_TOLERANCE < 1.0e-6);
/// ```
pub const RELATIVE_TOLERANCE: f64 = 1.0e-9;

/// Absolute tolerance floor for approximate equality.
///
/// Without a floor, a component computed as `1e-17` would never compare equal
/// to an exact `0.0`.
///
/// # Examples
/// ```
/// use config::constants::ABSOLUTE_TOLERANCE;
/// assert!(1.0e-17_f64.abs() <= ABSOLUTE_TOLERANCE);
/// ```
pub const ABSOLUTE_TOLERANCE: f64 = 1.0e-9;

/// Maximum deviation of a norm from `1.0` accepted by the validating
/// rotation wrappers.
///
/// # Examples
/// ```
/// use config::constants::UNIT_NORM_TOLERANCE;
/// let norm: f64 = 1.0 + 1.0e-8;
/// assert!((norm - 1.0).abs() <= UNIT_NORM_TOLERANCE);
/// ```
pub const UNIT_NORM_TOLERANCE: f64 = 1.0e-6;

/// Threshold below which the half-way candidate of a from-to rotation is
/// treated as degenerate (input directions antiparallel).
///
/// # Examples
/// ```
/// use config::constants::ANTIPARALLEL_EPSILON;
/// assert!(ANTIPARALLEL_EPSILON > 0.0);
/// ```
pub const ANTIPARALLEL_EPSILON: f64 = 1.0e-12;

// =============================================================================
// TOLERANCE CONFIGURATION
// =============================================================================

/// Immutable closeness policy that can be shared between crates.
///
/// # Examples
/// ```
/// use config::constants::ToleranceConfig;
/// let config = ToleranceConfig::default();
/// assert!(config.relative > 0.0);
/// assert!(config.is_close(1.0, 1.0 + 1.0e-12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceConfig {
    /// Relative tolerance scaled by the larger magnitude of the operands.
    pub relative: f64,
    /// Absolute tolerance used as a floor near zero.
    pub absolute: f64,
}

impl ToleranceConfig {
    /// Builds a configuration enforcing strict validation of both tolerances.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ToleranceConfig;
    /// let cfg = ToleranceConfig::new(1.0e-6, 0.0).expect("valid config");
    /// assert_eq!(cfg.absolute, 0.0);
    /// ```
    pub fn new(relative: f64, absolute: f64) -> Result<Self, ConfigError> {
        if !relative.is_finite() || relative < 0.0 {
            return Err(ConfigError::InvalidRelative(relative));
        }
        if !absolute.is_finite() || absolute < 0.0 {
            return Err(ConfigError::InvalidAbsolute(absolute));
        }
        if relative == 0.0 && absolute == 0.0 {
            return Err(ConfigError::ExactComparison);
        }
        Ok(Self { relative, absolute })
    }

    /// Returns `true` when `a` and `b` are within this tolerance of each other.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ToleranceConfig;
    /// let cfg = ToleranceConfig::default();
    /// assert!(cfg.is_close(0.0, 1.0e-12));
    /// assert!(!cfg.is_close(1.0, 1.001));
    /// ```
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        diff <= (self.relative * a.abs().max(b.abs())).max(self.absolute)
    }
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            relative: RELATIVE_TOLERANCE,
            absolute: ABSOLUTE_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the relative tolerance is negative or not finite.
    InvalidRelative(f64),
    /// Raised when the absolute tolerance is negative or not finite.
    InvalidAbsolute(f64),
    /// Raised when both tolerances are zero.
    ExactComparison,
    /// Raised when the unit-norm tolerance is not finite and strictly positive.
    InvalidUnitNorm(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRelative(value) => {
                write!(f, "relative tolerance must be finite and >= 0: {value}")
            }
            ConfigError::InvalidAbsolute(value) => {
                write!(f, "absolute tolerance must be finite and >= 0: {value}")
            }
            ConfigError::ExactComparison => {
                write!(f, "relative and absolute tolerance cannot both be zero")
            }
            ConfigError::InvalidUnitNorm(value) => {
                write!(f, "unit-norm tolerance must be finite and > 0: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

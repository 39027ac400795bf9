//! Kernel-level configuration helpers building on the shared `config` crate.
//!
//! The module re-exports the workspace tolerances so geometry components can
//! stay decoupled from literal constants.

use config::constants::{ToleranceConfig, UNIT_NORM_TOLERANCE};

use crate::error::GeomError;

pub use config::constants::ConfigError;

/// Geometry kernel configuration wrapper.
///
/// # Examples
/// ```
/// use quat_geom::config::GeomConfig;
/// let cfg = GeomConfig::default();
/// assert!(cfg.unit_norm_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeomConfig {
    /// Closeness policy used when a checked wrapper verifies its result.
    pub tolerance: ToleranceConfig,
    /// Accepted deviation of a norm from one in the checked wrappers.
    pub unit_norm_tolerance: f64,
}

impl GeomConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Errors
    /// [`GeomError::InvalidTolerance`] wrapping the [`ConfigError`] for the
    /// first rejected value.
    ///
    /// # Examples
    /// ```
    /// use quat_geom::config::GeomConfig;
    /// let cfg = GeomConfig::new(1.0e-12, 1.0e-12, 1.0e-9).unwrap();
    /// assert_eq!(cfg.unit_norm_tolerance, 1.0e-9);
    /// ```
    pub fn new(relative: f64, absolute: f64, unit_norm_tolerance: f64) -> Result<Self, GeomError> {
        let tolerance = ToleranceConfig::new(relative, absolute)?;
        if !unit_norm_tolerance.is_finite() || unit_norm_tolerance <= 0.0 {
            return Err(ConfigError::InvalidUnitNorm(unit_norm_tolerance).into());
        }
        Ok(Self {
            tolerance,
            unit_norm_tolerance,
        })
    }

    /// Returns `true` when `norm` is within the unit-norm tolerance of one.
    pub fn is_unit(&self, norm: f64) -> bool {
        (norm - 1.0).abs() <= self.unit_norm_tolerance
    }
}

impl Default for GeomConfig {
    fn default() -> Self {
        Self {
            tolerance: ToleranceConfig::default(),
            unit_norm_tolerance: UNIT_NORM_TOLERANCE,
        }
    }
}

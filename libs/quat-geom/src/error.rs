//! # Error Types
//!
//! Error types for vector and quaternion operations. Every degenerate input is
//! detected at the operation boundary and reported, never propagated as NaN or
//! infinity.
//!
//! ## Error Policy
//!
//! - Zero-length inputs to normalization fail explicitly
//! - Antiparallel inputs fail only in the strict from-to constructor
//! - Non-finite coordinates fail normalization instead of yielding NaN
//! - Unit-norm preconditions and result accuracy are reported by the
//!   `checked` wrappers only

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during geometry operations.
///
/// ## Example
///
/// ```rust
/// use quat_geom::{CartVec3, GeomError};
///
/// match CartVec3::ZERO.normalize() {
///     Ok(v) => println!("unit vector: {:?}", v),
///     Err(GeomError::ZeroLengthVector) => eprintln!("cannot normalize the origin"),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeomError {
    /// A vector with all coordinates zero was normalized.
    #[error("zero-length vector")]
    ZeroLengthVector,

    /// A quaternion with all components zero was normalized.
    #[error("zero-norm quaternion")]
    ZeroNormQuaternion,

    /// A coordinate or component was `inf` or `NaN`.
    #[error("non-finite input")]
    NonFiniteInput,

    /// The strict from-to constructor received opposite directions.
    #[error("antiparallel inputs: rotation axis undefined")]
    AntiparallelInputs,

    /// A rotation axis handed to a checked constructor is not unit length.
    #[error("rotation axis is not a unit vector (norm {norm})")]
    NonUnitAxis {
        /// Measured Euclidean norm of the axis.
        norm: f64,
    },

    /// A quaternion handed to a checked rotate is not unit norm.
    #[error("rotation quaternion is not unit norm (norm {norm})")]
    NonUnitQuaternion {
        /// Measured Euclidean norm of the quaternion.
        norm: f64,
    },

    /// A verified from-to rotation missed its target by more than the
    /// configured tolerance (nearly opposite inputs).
    #[error("rotation misses target direction by {residual}")]
    InaccurateRotation {
        /// Euclidean distance between the rotated and the target direction.
        residual: f64,
    },

    /// Tolerance configuration was rejected.
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(ConfigError),
}

impl From<ConfigError> for GeomError {
    fn from(err: ConfigError) -> Self {
        GeomError::InvalidTolerance(err)
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for geometry operations.
///
/// ## Example
///
/// ```rust
/// use quat_geom::error::GeomResult;
/// use quat_geom::CartVec3;
///
/// fn unit_diagonal() -> GeomResult<CartVec3> {
///     CartVec3::new(1.0, 1.0, 1.0).normalize()
/// }
/// # assert!(unit_diagonal().is_ok());
/// ```
pub type GeomResult<T> = Result<T, GeomError>;

// =============================================================================
// TESTS
// =============================================================================

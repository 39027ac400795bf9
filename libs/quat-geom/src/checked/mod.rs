//! Validating wrappers around the precondition-based rotation functions.
//!
//! [`crate::rotation::rotation_around`] and [`crate::rotation::rotate`] trust
//! their callers to pass unit-norm inputs. The functions here measure the norm
//! first and return an error instead of producing a non-rotation.
//!
//! [`rotation_from_to`] checks its output instead: the constructed rotation
//! must carry `u` onto `v` within `config.tolerance`.

use tracing::warn;

use crate::config::GeomConfig;
use crate::core::cart_vec3::CartVec3;
use crate::core::quat::Quat;
use crate::error::{GeomError, GeomResult};
use crate::rotation;

/// Validated [`rotation::rotation_around`].
///
/// # Errors
/// [`GeomError::NonUnitAxis`] when `axis` deviates from unit length by more
/// than `config.unit_norm_tolerance`.
///
/// # Examples
/// ```
/// use quat_geom::{checked, config::GeomConfig, CartVec3, GeomError};
///
/// let cfg = GeomConfig::default();
/// assert!(checked::rotation_around(1.0, CartVec3::Z, &cfg).is_ok());
/// assert_eq!(
///     checked::rotation_around(1.0, CartVec3::new(0.0, 0.0, 2.0), &cfg),
///     Err(GeomError::NonUnitAxis { norm: 2.0 })
/// );
/// ```
pub fn rotation_around(angle: f64, axis: CartVec3, config: &GeomConfig) -> GeomResult<Quat> {
    let norm = axis.norm();
    if !config.is_unit(norm) {
        warn!(norm, "rejected non-unit rotation axis");
        return Err(GeomError::NonUnitAxis { norm });
    }
    Ok(rotation::axis_angle(angle, axis))
}

/// Validated [`rotation::rotate`].
///
/// # Errors
/// [`GeomError::NonUnitQuaternion`] when `q` deviates from unit norm by more
/// than `config.unit_norm_tolerance`.
pub fn rotate(v: CartVec3, q: Quat, config: &GeomConfig) -> GeomResult<CartVec3> {
    let norm = q.norm();
    if !config.is_unit(norm) {
        warn!(norm, "rejected non-unit rotation quaternion");
        return Err(GeomError::NonUnitQuaternion { norm });
    }
    Ok(rotation::conjugate_by(v, q))
}

/// Verified [`rotation::rotation_from_to`].
///
/// Builds the rotation, applies it to the direction of `u` and compares the
/// result against the direction of `v` component-wise with
/// `config.tolerance`. Nearly opposite inputs can fail this check (see the
/// accuracy notes on [`rotation::rotation_from_to`]).
///
/// # Errors
/// Everything [`rotation::rotation_from_to`] reports, plus
/// [`GeomError::InaccurateRotation`] when the rotated direction misses the
/// target.
///
/// # Examples
/// ```
/// use quat_geom::{checked, config::GeomConfig, CartVec3, GeomError};
///
/// let cfg = GeomConfig::default();
/// assert!(checked::rotation_from_to(CartVec3::X, CartVec3::Y, &cfg).is_ok());
/// assert!(matches!(
///     checked::rotation_from_to(CartVec3::X, CartVec3::new(-1.0, 1.0e-8, 0.0), &cfg),
///     Err(GeomError::InaccurateRotation { .. })
/// ));
/// ```
pub fn rotation_from_to(u: CartVec3, v: CartVec3, config: &GeomConfig) -> GeomResult<Quat> {
    let q = rotation::rotation_from_to(u, v)?;
    let target = v.normalize()?;
    let rotated = rotation::conjugate_by(u.normalize()?, q);
    if !rotated.approx_eq_with(&target, &config.tolerance) {
        let residual = (rotated + -target).norm();
        warn!(residual, ?u, ?v, "from-to rotation misses target direction");
        return Err(GeomError::InaccurateRotation { residual });
    }
    Ok(q)
}

#[cfg(test)]
mod tests;

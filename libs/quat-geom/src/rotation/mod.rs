//! Rotation construction and application with unit quaternions.
//!
//! A unit quaternion `q` rotates a vector `v` by conjugation:
//! `v' = vector_part(q · pure(v) · conj(q))`.
//!
//! ## Preconditions
//!
//! [`rotation_around`] expects a unit axis and [`rotate`] expects a unit
//! quaternion. Neither checks at runtime in release builds; both carry
//! `debug_assert!`s. Use [`crate::checked`] for validated variants.
//!
//! ## Antiparallel inputs
//!
//! The half-way construction used by [`rotation_from_to`] collapses to the
//! zero quaternion when the two directions are opposite. [`rotation_from_to`]
//! then picks a deterministic axis perpendicular to `u` and returns the 180°
//! rotation about it; [`rotation_from_to_strict`] reports
//! [`GeomError::AntiparallelInputs`] instead.

use config::constants::{ANTIPARALLEL_EPSILON, UNIT_NORM_TOLERANCE};
use tracing::debug;

use crate::core::cart_vec3::CartVec3;
use crate::core::quat::Quat;
use crate::error::{GeomError, GeomResult};

/// Unit quaternion for a rotation of `angle` radians about `axis`.
///
/// `axis` must already be a unit vector. It is not normalized here, and a
/// non-unit axis yields a quaternion that does not encode a rotation.
///
/// # Examples
/// ```
/// use std::f64::consts::FRAC_PI_2;
/// use quat_geom::{rotation, CartVec3};
///
/// let q = rotation::rotation_around(FRAC_PI_2, CartVec3::Z);
/// let r = rotation::rotate(CartVec3::X, q);
/// assert!(r.equals(&CartVec3::Y));
/// ```
pub fn rotation_around(angle: f64, axis: CartVec3) -> Quat {
    debug_assert!(
        (axis.norm() - 1.0).abs() <= UNIT_NORM_TOLERANCE,
        "rotation axis must be a unit vector, got norm {}",
        axis.norm()
    );
    axis_angle(angle, axis)
}

/// Shortest-arc unit quaternion mapping the direction of `u` onto the
/// direction of `v`.
///
/// Opposite directions resolve to a 180° rotation about an axis perpendicular
/// to `u` (see [`perpendicular_axis`]).
///
/// # Accuracy
/// The half-way construction is ill conditioned near opposite inputs. When
/// the angle between `u` and `-v` is `δ`, the scalar part `1 + u·v ≈ δ²/2` is
/// swamped by rounding in the dot product, and the rotated `u` can miss `v`
/// by roughly `1e-16 / δ`. Below `δ ≈ 1e-7` that exceeds the default
/// [`CartVec3::equals`] tolerance. Use [`crate::checked::rotation_from_to`]
/// to have the result verified against a tolerance.
///
/// # Errors
/// [`GeomError::ZeroLengthVector`] when either input has zero length and
/// [`GeomError::NonFiniteInput`] when either has an `inf` or `NaN` coordinate.
///
/// # Examples
/// ```
/// use quat_geom::{rotation, CartVec3};
///
/// let q = rotation::rotation_from_to(CartVec3::X, CartVec3::Y).unwrap();
/// assert!(rotation::rotate(CartVec3::X, q).equals(&CartVec3::Y));
///
/// let flip = rotation::rotation_from_to(CartVec3::X, -CartVec3::X).unwrap();
/// assert!(rotation::rotate(CartVec3::X, flip).equals(&-CartVec3::X));
/// ```
pub fn rotation_from_to(u: CartVec3, v: CartVec3) -> GeomResult<Quat> {
    match half_way(u, v)? {
        HalfWay::Candidate(candidate) => candidate.normalize(),
        HalfWay::Antiparallel(u) => {
            let axis = perpendicular_axis(u)?;
            debug!(
                ?u,
                ?axis,
                "antiparallel from-to rotation, using 180 degree turn about perpendicular axis"
            );
            Ok(axis.to_pure_quat())
        }
    }
}

/// Like [`rotation_from_to`], but opposite directions are an error.
///
/// # Errors
/// [`GeomError::ZeroLengthVector`] when either input has zero length,
/// [`GeomError::NonFiniteInput`] for `inf`/`NaN` coordinates and
/// [`GeomError::AntiparallelInputs`] when the directions are opposite.
pub fn rotation_from_to_strict(u: CartVec3, v: CartVec3) -> GeomResult<Quat> {
    match half_way(u, v)? {
        HalfWay::Candidate(candidate) => candidate.normalize(),
        HalfWay::Antiparallel(_) => Err(GeomError::AntiparallelInputs),
    }
}

/// Rotates `v` by the unit quaternion `q`.
///
/// `q` must have unit norm; for such `q` the result has the same norm as `v`.
pub fn rotate(v: CartVec3, q: Quat) -> CartVec3 {
    debug_assert!(
        (q.norm() - 1.0).abs() <= UNIT_NORM_TOLERANCE,
        "rotation quaternion must be unit norm, got {}",
        q.norm()
    );
    conjugate_by(v, q)
}

/// Deterministic unit axis perpendicular to `u`.
///
/// Crosses `u` with the basis axis it is least aligned with (ties resolved in
/// X, Y, Z order), so the result is well conditioned for any nonzero `u`.
///
/// # Errors
/// [`GeomError::ZeroLengthVector`] when `u` has zero length.
pub fn perpendicular_axis(u: CartVec3) -> GeomResult<CartVec3> {
    let (ax, ay, az) = (u.x.abs(), u.y.abs(), u.z.abs());
    let basis = if ax <= ay && ax <= az {
        CartVec3::X
    } else if ay <= az {
        CartVec3::Y
    } else {
        CartVec3::Z
    };
    u.cross(basis).normalize()
}

pub(crate) fn axis_angle(angle: f64, axis: CartVec3) -> Quat {
    let (sin_half, cos_half) = (angle * 0.5).sin_cos();
    Quat::new(
        cos_half,
        axis.x * sin_half,
        axis.y * sin_half,
        axis.z * sin_half,
    )
}

pub(crate) fn conjugate_by(v: CartVec3, q: Quat) -> CartVec3 {
    q.multiply(v.to_pure_quat())
        .multiply(q.conjugate())
        .vector_part()
}

enum HalfWay {
    /// Unnormalized half-way quaternion `(1 - p0, p1, p2, p3)`.
    Candidate(Quat),
    /// Inputs are opposite; carries the normalized `u`.
    Antiparallel(CartVec3),
}

fn half_way(u: CartVec3, v: CartVec3) -> GeomResult<HalfWay> {
    let u = u.normalize()?;
    let v = v.normalize()?;

    // p0 = -u·v, vector part = u×v
    let p = u.to_pure_quat().multiply(v.to_pure_quat());
    let candidate = Quat::new(1.0 - p.q0, p.q1, p.q2, p.q3);

    if candidate.norm() <= ANTIPARALLEL_EPSILON {
        Ok(HalfWay::Antiparallel(u))
    } else {
        Ok(HalfWay::Candidate(candidate))
    }
}

impl Quat {
    /// See [`rotation_around`].
    pub fn rotation_around(angle: f64, axis: CartVec3) -> Self {
        rotation_around(angle, axis)
    }

    /// See [`rotation_from_to`].
    pub fn rotation_from_to(u: CartVec3, v: CartVec3) -> GeomResult<Self> {
        rotation_from_to(u, v)
    }

    /// See [`rotation_from_to_strict`].
    pub fn rotation_from_to_strict(u: CartVec3, v: CartVec3) -> GeomResult<Self> {
        rotation_from_to_strict(u, v)
    }
}

impl CartVec3 {
    /// Rotates this vector by the unit quaternion `q`. See [`rotate`].
    pub fn rotate(self, q: Quat) -> Self {
        rotate(self, q)
    }
}

//! Lossless conversions to and from `glam`'s double-precision types.
//!
//! `glam::DQuat` stores `(x, y, z, w)` with `w` as the scalar part, so
//! `q0 <-> w` and `(q1, q2, q3) <-> (x, y, z)`.

use glam::{DQuat, DVec3};

use crate::core::cart_vec3::CartVec3;
use crate::core::quat::Quat;

impl From<DVec3> for CartVec3 {
    fn from(v: DVec3) -> Self {
        CartVec3::new(v.x, v.y, v.z)
    }
}

impl From<CartVec3> for DVec3 {
    fn from(v: CartVec3) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

/// # Examples
/// ```
/// use glam::DQuat;
/// use quat_geom::Quat;
///
/// let q: Quat = DQuat::IDENTITY.into();
/// assert_eq!(q, Quat::IDENTITY);
/// ```
impl From<DQuat> for Quat {
    fn from(q: DQuat) -> Self {
        let [x, y, z, w] = q.to_array();
        Quat::new(w, x, y, z)
    }
}

impl From<Quat> for DQuat {
    fn from(q: Quat) -> Self {
        DQuat::from_xyzw(q.q1, q.q2, q.q3, q.q0)
    }
}

//! Spherical coordinates, physics convention.

use serde::{Deserialize, Serialize};

use crate::core::cart_vec3::CartVec3;

/// Spherical coordinate triple `(ρ, θ, ϕ)`.
///
/// `theta` is the polar angle measured from the +Z axis and `phi` the
/// azimuthal angle in the XY plane measured from +X. A non-negative `rho` is
/// expected but not enforced.
///
/// # Examples
/// ```
/// use std::f64::consts::FRAC_PI_2;
/// use quat_geom::{CartVec3, PolarVec3};
///
/// let east = PolarVec3::new(1.0, FRAC_PI_2, 0.0).to_cart();
/// assert!(east.equals(&CartVec3::X));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarVec3 {
    /// Radial distance.
    pub rho: f64,
    /// Polar angle in radians.
    pub theta: f64,
    /// Azimuthal angle in radians.
    pub phi: f64,
}

impl PolarVec3 {
    /// Creates a spherical coordinate triple.
    pub const fn new(rho: f64, theta: f64, phi: f64) -> Self {
        Self { rho, theta, phi }
    }

    /// Converts to Cartesian coordinates.
    ///
    /// `x = ρ sinθ cosϕ`, `y = ρ sinθ sinϕ`, `z = ρ cosθ`. A zero radius maps
    /// to the origin.
    pub fn to_cart(self) -> CartVec3 {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        CartVec3::new(
            self.rho * sin_theta * cos_phi,
            self.rho * sin_theta * sin_phi,
            self.rho * cos_theta,
        )
    }
}

impl From<PolarVec3> for CartVec3 {
    fn from(p: PolarVec3) -> Self {
        p.to_cart()
    }
}

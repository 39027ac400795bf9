//! Quaternion rotation kernel.
//!
//! This crate provides Cartesian ([`CartVec3`]) and spherical ([`PolarVec3`])
//! 3D vectors together with quaternion algebra ([`Quat`]) for building and
//! applying rotations. All types are `Copy` values and every operation returns
//! a new value, so instances can be shared across threads without locking.
//!
//! ```
//! use quat_geom::{rotation, CartVec3, PolarVec3};
//!
//! let u = PolarVec3::new(1.0, 0.4, 2.2).to_cart();
//! let v = CartVec3::new(0.3, -0.7, 0.2);
//! let q = rotation::rotation_from_to(u, v)?;
//! assert!(rotation::rotate(u, q).equals(&v.normalize()?));
//! # Ok::<(), quat_geom::GeomError>(())
//! ```

pub mod checked;
pub mod config;
pub mod core;
pub mod error;
pub mod interop;
pub mod rotation;

pub use crate::core::cart_vec3::CartVec3;
pub use crate::core::polar_vec3::PolarVec3;
pub use crate::core::quat::Quat;
pub use crate::error::{GeomError, GeomResult};

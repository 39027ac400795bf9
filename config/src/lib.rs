//! # Config Crate
//!
//! Centralized numeric tolerances for the quaternion geometry workspace.
//! All closeness thresholds are defined here so that vector equality,
//! unit-norm validation and degenerate-rotation detection agree across crates.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ToleranceConfig, ABSOLUTE_TOLERANCE};
//!
//! let value: f64 = 1.0e-12;
//! assert!(value.abs() < ABSOLUTE_TOLERANCE);
//!
//! let cfg = ToleranceConfig::default();
//! assert!(cfg.is_close(1.0, 1.0 + 1.0e-12));
//! ```

pub mod constants;

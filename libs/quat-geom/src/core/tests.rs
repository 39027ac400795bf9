//! Tests for the shared norm helpers.

use super::*;
use approx::assert_relative_eq;

#[test]
fn max_abs_ignores_sign() {
    assert_eq!(max_abs(&[1.0, -3.0, 2.0]), Some(3.0));
    assert_eq!(max_abs(&[0.0, 0.0]), Some(0.0));
}

#[test]
fn max_abs_rejects_non_finite() {
    assert_eq!(max_abs(&[1.0, f64::NAN]), None);
    assert_eq!(max_abs(&[f64::NEG_INFINITY, 0.0]), None);
}

#[test]
fn norm_is_exact_in_normal_range() {
    assert_eq!(euclidean_norm(&[2.0, 3.0, 6.0]), 7.0);
    assert_eq!(euclidean_norm(&[0.0, 0.0, 0.0]), 0.0);
}

#[test]
fn norm_survives_overflowing_squares() {
    assert_relative_eq!(euclidean_norm(&[3.0e200, 4.0e200]), 5.0e200, max_relative = 1e-15);
    assert!(euclidean_norm(&[f64::MAX, f64::MAX]).is_infinite());
}

#[test]
fn norm_survives_underflowing_squares() {
    assert_relative_eq!(euclidean_norm(&[3.0e-200, 4.0e-200]), 5.0e-200, max_relative = 1e-15);
    assert_eq!(euclidean_norm(&[1.0e-200, 0.0, 0.0]), 1.0e-200);
}

#[test]
fn norm_propagates_nan() {
    assert!(euclidean_norm(&[f64::NAN, 1.0]).is_nan());
}

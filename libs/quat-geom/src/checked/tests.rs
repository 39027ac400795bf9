//! Tests for the validating rotation wrappers.

use super::*;
use std::f64::consts::FRAC_PI_2;

#[test]
fn accepts_unit_axis() {
    let cfg = GeomConfig::default();
    let q = rotation_around(FRAC_PI_2, CartVec3::X, &cfg).unwrap();
    assert_eq!(q, rotation::rotation_around(FRAC_PI_2, CartVec3::X));
}

#[test]
fn rejects_non_unit_axis() {
    let cfg = GeomConfig::default();
    let err = rotation_around(0.3, CartVec3::new(1.0, 1.0, 0.0), &cfg).unwrap_err();
    match err {
        GeomError::NonUnitAxis { norm } => assert!((norm - 2.0_f64.sqrt()).abs() < 1e-15),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(matches!(
        rotation_around(0.3, CartVec3::ZERO, &cfg),
        Err(GeomError::NonUnitAxis { .. })
    ));
}

#[test]
fn tolerance_comes_from_config() {
    let loose = GeomConfig::new(1.0e-9, 1.0e-9, 0.1).unwrap();
    let nearly_unit = CartVec3::new(0.0, 1.05, 0.0);
    assert!(rotation_around(0.3, nearly_unit, &loose).is_ok());
    assert!(rotation_around(0.3, nearly_unit, &GeomConfig::default()).is_err());
}

#[test]
fn rotate_accepts_unit_quaternion() {
    let cfg = GeomConfig::default();
    let q = rotation::rotation_around(FRAC_PI_2, CartVec3::Z);
    let r = rotate(CartVec3::X, q, &cfg).unwrap();
    assert!(r.equals(&CartVec3::Y));
}

#[test]
fn rotate_rejects_non_unit_quaternion() {
    let cfg = GeomConfig::default();
    let q = Quat::new(2.0, 0.0, 0.0, 0.0);
    assert_eq!(
        rotate(CartVec3::X, q, &cfg),
        Err(GeomError::NonUnitQuaternion { norm: 2.0 })
    );
    let nan = Quat::new(f64::NAN, 0.0, 0.0, 0.0);
    assert!(rotate(CartVec3::X, nan, &cfg).is_err());
}

#[test]
fn from_to_accepts_well_conditioned_pairs() {
    let cfg = GeomConfig::default();
    let u = CartVec3::new(0.0, 0.0, 10.0);
    let v = CartVec3::new(3.0, 4.0, 0.0);
    assert_eq!(rotation_from_to(u, v, &cfg), rotation::rotation_from_to(u, v));
    assert!(rotation_from_to(u, -u, &cfg).is_ok());
    assert!(rotation_from_to(CartVec3::new(1.0e200, 0.0, 0.0), CartVec3::Y, &cfg).is_ok());
}

#[test]
fn from_to_flags_nearly_opposite_inputs() {
    let v = CartVec3::new(-1.0, 1.0e-8, 0.0);
    match rotation_from_to(CartVec3::X, v, &GeomConfig::default()) {
        Err(GeomError::InaccurateRotation { residual }) => {
            assert!(residual > 1.0e-9 && residual < 1.0e-7, "residual {residual}");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn from_to_verification_uses_config_tolerance() {
    let loose = GeomConfig::new(1.0e-6, 1.0e-6, 1.0e-6).unwrap();
    let v = CartVec3::new(-1.0, 1.0e-8, 0.0);
    let q = rotation_from_to(CartVec3::X, v, &loose).unwrap();
    assert_eq!(q, rotation::rotation_from_to(CartVec3::X, v).unwrap());
}

#[test]
fn from_to_propagates_input_errors() {
    let cfg = GeomConfig::default();
    assert_eq!(
        rotation_from_to(CartVec3::ZERO, CartVec3::X, &cfg),
        Err(GeomError::ZeroLengthVector)
    );
    assert_eq!(
        rotation_from_to(CartVec3::X, CartVec3::new(0.0, f64::INFINITY, 0.0), &cfg),
        Err(GeomError::NonFiniteInput)
    );
}

//! Tests for quaternion algebra.

use super::*;
use approx::assert_relative_eq;

fn sample_quats() -> [Quat; 3] {
    [
        Quat::new(0.5, -1.0, 2.0, 0.25),
        Quat::new(-1.5, 0.75, 0.1, -2.0),
        Quat::new(3.0, 0.0, -0.5, 1.25),
    ]
}

#[test]
fn basis_products_follow_hamilton_rules() {
    let i = Quat::new(0.0, 1.0, 0.0, 0.0);
    let j = Quat::new(0.0, 0.0, 1.0, 0.0);
    let k = Quat::new(0.0, 0.0, 0.0, 1.0);
    let minus_one = Quat::new(-1.0, 0.0, 0.0, 0.0);

    assert_eq!(i * i, minus_one);
    assert_eq!(j * j, minus_one);
    assert_eq!(k * k, minus_one);
    assert_eq!(i * j * k, minus_one);
    assert_eq!(j * k, i);
    assert_eq!(k * i, j);
}

#[test]
fn multiply_matches_explicit_product() {
    let p = Quat::new(1.0, 2.0, 3.0, 4.0);
    let q = Quat::new(5.0, 6.0, 7.0, 8.0);
    assert_eq!(p.multiply(q), Quat::new(-60.0, 12.0, 30.0, 24.0));
    assert_eq!(q.multiply(p), Quat::new(-60.0, 20.0, 14.0, 32.0));
}

#[test]
fn multiply_is_associative() {
    let [p, q, r] = sample_quats();
    assert_relative_eq!((p * q) * r, p * (q * r), epsilon = 1e-12, max_relative = 1e-12);
}

#[test]
fn multiply_is_not_commutative_for_non_parallel_vector_parts() {
    let [p, q, _] = sample_quats();
    assert!(!(p * q).equals(&(q * p)));
}

#[test]
fn identity_is_neutral() {
    for q in sample_quats() {
        assert_eq!(Quat::IDENTITY * q, q);
        assert_eq!(q * Quat::IDENTITY, q);
    }
    assert_eq!(Quat::default(), Quat::IDENTITY);
}

#[test]
fn conjugate_negates_vector_part() {
    let q = Quat::new(1.0, 2.0, -3.0, 4.0);
    assert_eq!(q.conjugate(), Quat::new(1.0, -2.0, 3.0, -4.0));
    assert_eq!(q.conjugate().conjugate(), q);
}

#[test]
fn product_with_conjugate_is_squared_norm() {
    let q = Quat::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(q * q.conjugate(), Quat::new(30.0, 0.0, 0.0, 0.0));
    assert_relative_eq!(q.norm() * q.norm(), 30.0, max_relative = 1e-12);
}

#[test]
fn vector_part_discards_scalar() {
    let q = Quat::new(9.0, 1.0, 2.0, 3.0);
    assert_eq!(q.vector_part(), CartVec3::new(1.0, 2.0, 3.0));
    assert!(!q.is_pure());
    assert!(q.vector_part().to_pure_quat().is_pure());
}

#[test]
fn normalize_yields_unit_norm() {
    for q in sample_quats() {
        let n = q.normalize().unwrap();
        assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn normalize_preserves_receiver() {
    let q = Quat::new(0.0, 3.0, 0.0, 4.0);
    let n = q.normalize().unwrap();
    assert_eq!(q, Quat::new(0.0, 3.0, 0.0, 4.0));
    assert_relative_eq!(n, Quat::new(0.0, 0.6, 0.0, 0.8), epsilon = 1e-15);
}

#[test]
fn normalize_zero_quaternion_fails() {
    let zero = Quat::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(zero.normalize(), Err(GeomError::ZeroNormQuaternion));
    let nan = Quat::new(f64::NAN, 0.0, 0.0, 0.0);
    assert_eq!(nan.normalize(), Err(GeomError::NonFiniteInput));
}

#[test]
fn normalize_handles_extreme_magnitudes() {
    let h = std::f64::consts::FRAC_1_SQRT_2;
    let big = Quat::new(1.0e200, 1.0e200, 0.0, 0.0).normalize().unwrap();
    assert_relative_eq!(big, Quat::new(h, h, 0.0, 0.0), epsilon = 1e-15);
    assert_relative_eq!(big.norm(), 1.0, epsilon = 1e-15);

    let tiny = Quat::new(0.0, 0.0, -1.0e-200, 0.0).normalize().unwrap();
    assert_eq!(tiny, Quat::new(0.0, 0.0, -1.0, 0.0));
}

#[test]
fn equals_is_componentwise() {
    let q = Quat::new(0.5, 0.5, 0.5, 0.5);
    assert!(q.equals(&Quat::new(0.5 + 1.0e-13, 0.5, 0.5, 0.5)));
    assert!(!q.equals(&-q));
}

#[test]
fn serde_uses_component_names() {
    let q = Quat::new(1.0, 0.0, -1.0, 0.5);
    let json = serde_json::to_string(&q).unwrap();
    assert_eq!(json, r#"{"q0":1.0,"q1":0.0,"q2":-1.0,"q3":0.5}"#);
    let back: Quat = serde_json::from_str(&json).unwrap();
    assert_eq!(back, q);
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f32::consts::FRAC_PI_4;

use prism_math::{Vector2, Vector3, Vector4};

fn approx_eq(a: f32, b: f32) {
    assert!((a - b).abs() <= 1e-5, "{a} vs {b}");
}

#[test]
fn dot_and_length() {
    let v = Vector3::new(3.0f32, 4.0, 0.0);
    assert_eq!(v.dot(Vector3::UNIT_X), 3.0);
    assert_eq!(v.length_squared(), 25.0);
    assert_eq!(v.length(), 5.0);
    assert_eq!(Vector2::new(1.0f32, 2.0).dot(Vector2::new(3.0, 4.0)), 11.0);
    assert_eq!(
        Vector4::new(1.0f32, 2.0, 3.0, 4.0).dot(Vector4::ONE),
        10.0
    );
}

#[test]
fn vector3_dot_ignores_padding_lane() {
    // The fourth lane of the SIMD register must never leak into a 3D dot.
    let a = Vector4::new(1.0f32, 2.0, 3.0, 100.0).truncate();
    let b = Vector3::new(1.0f32, 1.0, 1.0);
    assert_eq!(a.dot(b), 6.0);
}

#[test]
fn cross_follows_left_handed_basis() {
    let x = Vector3::<f32>::UNIT_X;
    let y = Vector3::<f32>::UNIT_Y;
    assert_eq!(x.cross(y), Vector3::UNIT_Z);
    assert_eq!(y.cross(x), -Vector3::UNIT_Z);
    let w = Vector4::new(1.0f32, 0.0, 0.0, 5.0).cross(Vector4::new(0.0, 1.0, 0.0, 5.0));
    assert_eq!(w, Vector4::UNIT_Z);
}

#[test]
fn normalize_zero_vector_is_noop() {
    let mut v = Vector3::<f32>::ZERO;
    v.normalize();
    assert_eq!(v, Vector3::ZERO);
    assert!(!v.length().is_nan());
    assert_eq!(Vector2::<f32>::ZERO.normalized(), Vector2::ZERO);
}

#[test]
fn normalize_produces_unit_length() {
    let v = Vector3::new(1.0f32, 2.0, 2.0).normalized();
    approx_eq(v.length(), 1.0);
    approx_eq(v.x(), 1.0 / 3.0);
}

#[test]
fn normalize_rescales_when_squared_length_overflows() {
    assert_eq!(Vector3::new(1.0e20f32, 0.0, 0.0).normalized(), Vector3::UNIT_X);

    let v = Vector3::new(3.0e30f32, 4.0e30, 0.0).normalized();
    approx_eq(v.length(), 1.0);
    approx_eq(v.x(), 0.6);
    approx_eq(v.y(), 0.8);

    let extreme = Vector2::new(-f32::MAX, f32::MAX).normalized();
    approx_eq(extreme.length(), 1.0);
    assert!(extreme.x() < 0.0 && extreme.y() > 0.0);

    let w = Vector4::new(0.0f32, 0.0, 0.0, 1.0e25).normalized();
    assert_eq!(w, Vector4::new(0.0, 0.0, 0.0, 1.0));
}

#[test]
fn normalize_leaves_underflowing_and_non_finite_vectors_alone() {
    let tiny = Vector3::new(1.0e-23f32, 0.0, 0.0);
    assert_eq!(tiny.normalized(), tiny);

    let infinite = Vector3::new(f32::INFINITY, 1.0, 0.0);
    assert_eq!(infinite.normalized(), infinite);
}

#[test]
fn normalize_returns_self_for_chaining() {
    let mut v = Vector2::new(0.0f32, 3.0);
    let len = v.normalize().length();
    approx_eq(len, 1.0);
}

#[test]
fn distance_and_direction() {
    let a = Vector3::new(1.0f32, 1.0, 1.0);
    let b = Vector3::new(4.0f32, 5.0, 1.0);
    assert_eq!(a.distance(b), 5.0);
    assert_eq!(a.distance_squared(b), 25.0);
    assert!(a.direction_to(b).near_equal(Vector3::new(0.6, 0.8, 0.0)));
    assert_eq!(a.direction_to(a), Vector3::ZERO);
}

#[test]
fn component_wise_operators() {
    let a = Vector4::new(1.0f32, 2.0, 3.0, 4.0);
    let b = Vector4::new(2.0f32, 2.0, 2.0, 2.0);
    assert_eq!(a + b, Vector4::new(3.0, 4.0, 5.0, 6.0));
    assert_eq!(a - b, Vector4::new(-1.0, 0.0, 1.0, 2.0));
    assert_eq!(a * b, Vector4::new(2.0, 4.0, 6.0, 8.0));
    assert_eq!(a / b, Vector4::new(0.5, 1.0, 1.5, 2.0));
    assert_eq!(a * 2.0, Vector4::new(2.0, 4.0, 6.0, 8.0));
    assert_eq!(2.0 * a, a * 2.0);
    assert_eq!(a / 2.0, Vector4::new(0.5, 1.0, 1.5, 2.0));

    let mut c = a;
    c += b;
    c -= b;
    c *= 3.0;
    c /= 3.0;
    assert!(c.near_equal(a));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "divided by zero")]
fn scalar_division_by_zero_is_a_contract_violation() {
    let _ = Vector3::new(1.0f32, 2.0, 3.0) / 0.0;
}

#[test]
fn indexing_and_accessors() {
    let mut v = Vector3::new(1.0f32, 2.0, 3.0);
    assert_eq!(v[0], 1.0);
    assert_eq!(v[2], 3.0);
    v[1] = 7.0;
    assert_eq!(v.y(), 7.0);
    v.set_z(9.0);
    assert_eq!(v.to_array(), [1.0, 7.0, 9.0]);
    assert_eq!(v.as_slice(), &[1.0, 7.0, 9.0]);
    let arr: [f32; 3] = v.into();
    assert_eq!(Vector3::from(arr), v);
}

#[test]
fn min_max_clamp_saturate() {
    let a = Vector3::new(-1.0f32, 0.5, 2.0);
    let b = Vector3::new(0.0f32, 0.0, 3.0);
    assert_eq!(a.min(b), Vector3::new(-1.0, 0.0, 2.0));
    assert_eq!(a.max(b), Vector3::new(0.0, 0.5, 3.0));
    assert_eq!(a.saturate(), Vector3::new(0.0, 0.5, 1.0));
    assert_eq!(
        a.clamp(Vector3::splat(-0.5), Vector3::splat(1.5)),
        Vector3::new(-0.5, 0.5, 1.5)
    );
    assert_eq!(a.abs(), Vector3::new(1.0, 0.5, 2.0));
    assert_eq!(a.min_element(), -1.0);
    assert_eq!(a.max_element(), 2.0);
}

#[test]
fn lerp_endpoints() {
    let a = Vector2::new(0.0f32, 10.0);
    let b = Vector2::new(10.0f32, 20.0);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Vector2::new(5.0, 15.0));
}

#[test]
fn swizzle_reorders_components() {
    let v = Vector4::new(1.0f32, 2.0, 3.0, 4.0);
    assert_eq!(v.swizzle([3, 2, 1, 0]), Vector4::new(4.0, 3.0, 2.0, 1.0));
    assert_eq!(
        Vector3::new(1.0f32, 2.0, 3.0).swizzle([0, 0, 2]),
        Vector3::new(1.0, 1.0, 3.0)
    );
}

#[test]
fn reflect_about_floor() {
    let v = Vector3::new(1.0f32, -1.0, 0.0);
    assert_eq!(v.reflect(Vector3::UP), Vector3::new(1.0, 1.0, 0.0));
}

#[test]
fn pitch_and_yaw() {
    assert_eq!(Vector3::<f32>::ZERO.pitch(), 0.0);
    assert_eq!(Vector3::<f32>::ZERO.yaw(), 0.0);
    approx_eq(Vector3::new(1.0f32, 0.0, 1.0).yaw(), FRAC_PI_4);
    approx_eq(Vector3::new(0.0f32, -1.0, 1.0).pitch(), FRAC_PI_4);
    assert_eq!(Vector3::<f32>::FORWARD.yaw(), 0.0);
}

#[test]
fn widening_and_narrowing() {
    let v2 = Vector2::new(1.0f32, 2.0);
    let v3 = v2.extend(3.0);
    let v4 = v3.extend(4.0);
    assert_eq!(v4, Vector4::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(v4.truncate(), v3);
    assert_eq!(v4.xy(), v2);
    assert_eq!(v3.xy(), v2);
    assert_eq!(Vector4::from_point(v3).w(), 1.0);
    assert_eq!(Vector4::from_direction(v3).w(), 0.0);
    assert_eq!(
        Vector4::new(2.0f32, 4.0, 6.0, 2.0).project(),
        Vector3::new(1.0, 2.0, 3.0)
    );
}

#[test]
fn perpendicular_is_orthogonal() {
    let v = Vector2::new(3.0f32, 4.0);
    assert_eq!(v.dot(v.perpendicular()), 0.0);
}

#[test]
fn directional_constants() {
    assert_eq!(Vector3::<f32>::UP, Vector3::UNIT_Y);
    assert_eq!(Vector3::<f32>::DOWN, -Vector3::UNIT_Y);
    assert_eq!(Vector3::<f32>::RIGHT, Vector3::UNIT_X);
    assert_eq!(Vector3::<f32>::LEFT, -Vector3::UNIT_X);
    assert_eq!(Vector3::<f32>::FORWARD, Vector3::UNIT_Z);
    assert_eq!(Vector3::<f32>::BACKWARD, -Vector3::UNIT_Z);
    assert_eq!(Vector4::<f32>::UNIT_W.w(), 1.0);
}

#[test]
fn predicates() {
    assert!(Vector3::<f32>::ZERO.is_zero());
    assert!(!Vector3::<f32>::UNIT_X.is_zero());
    assert!(Vector3::new(1.0f32, 2.0, 3.0).is_finite());
    assert!(!Vector3::new(f32::NAN, 2.0, 3.0).is_finite());
}

#[cfg(feature = "f64")]
#[test]
fn cast_between_precisions() {
    let v = Vector3::new(1.5f32, -2.0, 0.25);
    let d: Vector3<f64> = v.cast();
    assert_eq!(d, Vector3::new(1.5, -2.0, 0.25));
    assert_eq!(d.cast::<f32>(), v);
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f32::consts::PI;

use prism_math::{clamp, deg_to_rad, rad_to_deg, Scalar};

fn generic_hypot<T: Scalar>(a: T, b: T) -> T {
    (a * a + b * b).sqrt()
}

#[test]
fn constants_are_consistent() {
    assert_eq!(<f32 as Scalar>::ZERO, 0.0);
    assert_eq!(<f32 as Scalar>::NEG_ONE, -1.0);
    assert_eq!(<f32 as Scalar>::HALF * <f32 as Scalar>::TWO, 1.0);
    assert_eq!(<f32 as Scalar>::TWO_PI, 2.0 * PI);
    assert_eq!(<f32 as Scalar>::EPSILON, f32::EPSILON);
}

#[test]
fn angle_conversions() {
    assert!((deg_to_rad(180.0f32) - PI).abs() < 1e-6);
    assert!((rad_to_deg(PI) - 180.0f32).abs() < 1e-4);
    assert!((rad_to_deg(deg_to_rad(33.0f32)) - 33.0).abs() < 1e-4);
}

#[test]
fn clamp_and_saturate() {
    assert_eq!(clamp(5.0f32, 0.0, 1.0), 1.0);
    assert_eq!(clamp(-5.0f32, 0.0, 1.0), 0.0);
    assert_eq!(clamp(0.25f32, 0.0, 1.0), 0.25);
    assert_eq!(Scalar::saturate(1.5f32), 1.0);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "invalid clamp range")]
fn inverted_clamp_range_is_a_contract_violation() {
    let _ = clamp(0.5f32, 1.0, 0.0);
}

#[test]
fn elementary_functions() {
    assert_eq!(Scalar::sqrt(16.0f32), 4.0);
    assert_eq!(Scalar::rsqrt(4.0f32), 0.5);
    assert_eq!(Scalar::recip(8.0f32), 0.125);
    assert_eq!(Scalar::floor(-1.5f32), -2.0);
    assert_eq!(Scalar::ceil(-1.5f32), -1.0);
    assert_eq!(Scalar::round(2.5f32), 3.0);
    assert_eq!(Scalar::trunc(-2.7f32), -2.0);
    assert!((Scalar::fract(2.75f32) - 0.75).abs() < 1e-6);
    let (s, c) = Scalar::sin_cos(PI / 2.0);
    assert!((s - 1.0).abs() < 1e-6 && c.abs() < 1e-6);
    assert!((Scalar::atan2(1.0f32, 1.0) - PI / 4.0).abs() < 1e-6);
    assert!((Scalar::exp(Scalar::ln(5.0f32)) - 5.0).abs() < 1e-5);
    assert_eq!(Scalar::powf(2.0f32, 10.0), 1024.0);
    assert_eq!(Scalar::lerp(2.0f32, 4.0, 0.25), 2.5);
}

#[test]
fn near_equality_is_absolute() {
    assert!(0.0f32.near_zero());
    assert!(1.0e-6f32.near_zero());
    assert!(!1.0e-3f32.near_zero());
    // Large magnitudes do not get a relative allowance.
    assert!(!1.0e6f32.near_equal(1.0e6 + 1.0));
}

#[test]
fn generic_code_works_for_f32() {
    assert_eq!(generic_hypot(3.0f32, 4.0), 5.0);
}

#[cfg(feature = "f64")]
#[test]
fn generic_code_works_for_f64() {
    assert_eq!(generic_hypot(3.0f64, 4.0), 5.0);
    assert_eq!(<f64 as Scalar>::TOLERANCE, f64::EPSILON * 128.0);
    assert!((deg_to_rad(90.0f64) - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn from_and_to_f64() {
    assert_eq!(<f32 as Scalar>::from_f64(0.5), 0.5);
    assert_eq!(<f32 as Scalar>::from_f32(0.25), 0.25);
    assert_eq!(Scalar::to_f64(0.5f32), 0.5);
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use prism_math::Color;

#[test]
fn named_colors() {
    assert_eq!(Color::<f32>::RED.to_array(), [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(Color::<f32>::TRANSPARENT.a(), 0.0);
    assert_eq!(Color::<f32>::default(), Color::TRANSPARENT);
}

#[test]
fn byte_packing_saturates_and_rounds() {
    let c = Color::new(1.5f32, -0.2, 0.5, 1.0);
    assert_eq!(c.to_bytes(), [255, 0, 128, 255]);
    assert_eq!(c.to_rgba8(), 0xFF00_80FF);
    assert_eq!(c.to_argb8(), 0xFFFF_0080);
}

#[test]
fn unpacking_divides_by_255() {
    let c = Color::<f32>::from_rgba8(0x3366_99FF);
    assert_eq!(c.to_bytes(), [0x33, 0x66, 0x99, 0xFF]);
    assert!((c.r() - 0.2).abs() < 1e-6);
    assert_eq!(Color::<f32>::from_argb8(0x80FF_0000).to_bytes(), [255, 0, 0, 128]);
}

#[test]
fn every_byte_survives_a_round_trip() {
    for b in 0..=255u8 {
        let c = Color::<f32>::from_bytes([b, b, b, b]);
        assert_eq!(c.to_bytes(), [b; 4]);
    }
}

#[test]
fn arithmetic_does_not_clamp() {
    let sum = Color::<f32>::WHITE + Color::WHITE;
    assert_eq!(sum.r(), 2.0);
    assert_eq!(sum.saturate(), Color::WHITE);
    assert_eq!((Color::<f32>::WHITE - Color::RED).to_array(), [0.0, 1.0, 1.0, 0.0]);
    assert_eq!((Color::<f32>::WHITE * 0.5).g(), 0.5);
}

#[test]
fn modulate_and_premultiply() {
    let tint = Color::new(0.5f32, 1.0, 0.25, 1.0);
    let c = Color::new(1.0f32, 0.5, 1.0, 0.5);
    assert_eq!(c.modulate(&tint), Color::new(0.5, 0.5, 0.25, 0.5));
    assert_eq!(c * tint, c.modulate(&tint));
    assert_eq!(c.premultiplied(), Color::new(0.5, 0.25, 0.5, 0.5));
}

#[test]
fn lerp_between_colors() {
    let mid = Color::<f32>::BLACK.lerp(&Color::WHITE, 0.5);
    assert!(mid.near_equal(&Color::new(0.5, 0.5, 0.5, 1.0)));
}

#[test]
fn channel_setters() {
    let mut c = Color::<f32>::BLACK;
    c.set_r(0.1);
    c.set_g(0.2);
    c.set_b(0.3);
    c.set_a(0.4);
    assert_eq!(c.as_slice(), &[0.1, 0.2, 0.3, 0.4]);
}

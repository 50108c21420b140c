// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! RGBA colors with byte packing.

use core::ops::{Add, Mul, Sub};

use crate::scalar::Scalar;
use crate::simd::Simd4;

/// Linear RGBA color, one scalar per channel, nominally in `[0, 1]`.
///
/// Arithmetic does not clamp; packing to bytes saturates each channel and
/// rounds to nearest.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C, align(16))]
pub struct Color<T> {
    pub(crate) data: [T; 4],
}

impl<T: Scalar> Color<T> {
    /// Opaque black.
    pub const BLACK: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);
    /// Opaque white.
    pub const WHITE: Self = Self::new(T::ONE, T::ONE, T::ONE, T::ONE);
    /// Opaque red.
    pub const RED: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ONE);
    /// Opaque green.
    pub const GREEN: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ONE);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ONE);
    /// All channels zero.
    pub const TRANSPARENT: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);

    /// Creates `(r, g, b, a)`.
    #[must_use]
    pub const fn new(r: T, g: T, b: T, a: T) -> Self {
        Self { data: [r, g, b, a] }
    }

    /// Builds from `[r, g, b, a]`.
    #[must_use]
    pub const fn from_array(data: [T; 4]) -> Self {
        Self { data }
    }

    /// Channels as `[r, g, b, a]`.
    #[must_use]
    pub fn to_array(self) -> [T; 4] {
        self.data
    }

    /// Contiguous view of `[r, g, b, a]`.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Red.
    #[must_use]
    pub const fn r(&self) -> T {
        self.data[0]
    }

    /// Green.
    #[must_use]
    pub const fn g(&self) -> T {
        self.data[1]
    }

    /// Blue.
    #[must_use]
    pub const fn b(&self) -> T {
        self.data[2]
    }

    /// Alpha.
    #[must_use]
    pub const fn a(&self) -> T {
        self.data[3]
    }

    /// Sets red.
    pub fn set_r(&mut self, value: T) {
        self.data[0] = value;
    }

    /// Sets green.
    pub fn set_g(&mut self, value: T) {
        self.data[1] = value;
    }

    /// Sets blue.
    pub fn set_b(&mut self, value: T) {
        self.data[2] = value;
    }

    /// Sets alpha.
    pub fn set_a(&mut self, value: T) {
        self.data[3] = value;
    }

    fn lanes(self) -> T::Simd {
        T::Simd::from_array(self.data)
    }

    fn from_lanes(lanes: T::Simd) -> Self {
        Self::from_array(lanes.to_array())
    }

    /// Channel-wise `self + (to - self) * t`.
    #[must_use]
    pub fn lerp(&self, to: &Self, t: T) -> Self {
        Self::from_lanes(self.lanes().lerp(to.lanes(), t))
    }

    /// Every channel clamped into `[0, 1]`.
    #[must_use]
    pub fn saturate(&self) -> Self {
        Self::from_lanes(self.lanes().saturate())
    }

    /// Channel-wise product (tinting).
    #[must_use]
    pub fn modulate(&self, rhs: &Self) -> Self {
        Self::from_lanes(self.lanes().mul(rhs.lanes()))
    }

    /// RGB multiplied by alpha; alpha unchanged.
    #[must_use]
    pub fn premultiplied(&self) -> Self {
        let a = self.a();
        Self::new(self.r() * a, self.g() * a, self.b() * a, a)
    }

    /// `true` when every channel is within [`Scalar::TOLERANCE`].
    #[must_use]
    pub fn near_equal(&self, rhs: &Self) -> bool {
        self.lanes().all_near_eq(rhs.lanes())
    }

    /// Saturated channels as bytes `[r, g, b, a]`.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 4] {
        let scale = T::from_f32(255.0);
        self.saturate()
            .data
            .map(|c| (c * scale).round().to_f64() as u8)
    }

    /// From bytes `[r, g, b, a]`, each mapped to `byte / 255`.
    #[must_use]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        let scale = T::from_f32(255.0);
        Self::from_array(bytes.map(|b| T::from_f32(f32::from(b)) / scale))
    }

    /// Packs as `0xRRGGBBAA`.
    #[must_use]
    pub fn to_rgba8(&self) -> u32 {
        u32::from_be_bytes(self.to_bytes())
    }

    /// Unpacks `0xRRGGBBAA`.
    #[must_use]
    pub fn from_rgba8(packed: u32) -> Self {
        Self::from_bytes(packed.to_be_bytes())
    }

    /// Packs as `0xAARRGGBB`.
    #[must_use]
    pub fn to_argb8(&self) -> u32 {
        let [r, g, b, a] = self.to_bytes();
        u32::from_be_bytes([a, r, g, b])
    }

    /// Unpacks `0xAARRGGBB`.
    #[must_use]
    pub fn from_argb8(packed: u32) -> Self {
        let [a, r, g, b] = packed.to_be_bytes();
        Self::from_bytes([r, g, b, a])
    }
}

impl<T: Scalar> Add for Color<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_lanes(self.lanes().add(rhs.lanes()))
    }
}

impl<T: Scalar> Sub for Color<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_lanes(self.lanes().sub(rhs.lanes()))
    }
}

/// Channel-wise product, same as [`Color::modulate`].
impl<T: Scalar> Mul for Color<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.modulate(&rhs)
    }
}

impl<T: Scalar> Mul<T> for Color<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from_lanes(self.lanes().scale(rhs))
    }
}

impl<T: Scalar> From<[T; 4]> for Color<T> {
    fn from(data: [T; 4]) -> Self {
        Self { data }
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! NEON lanes for `f32` (aarch64).
//!
//! Advanced SIMD is mandatory on aarch64, so no runtime detection is needed.

#![allow(unsafe_code, unused_unsafe)]

use core::arch::aarch64::{
    float32x4_t, uint32x4_t, vabsq_f32, vaddq_f32, vandq_u32, vbslq_f32, vceqq_f32, vcgtq_f32,
    vcleq_f32, vcltq_f32, vdivq_f32, vdupq_n_f32, vgetq_lane_f32, vld1q_f32, vld1q_u32,
    vmulq_f32, vmvnq_u32, vnegq_f32, vorrq_u32, vpaddq_f32, vsqrtq_f32, vst1q_f32, vst1q_u32,
    vsubq_f32,
};
use core::fmt;

use super::{Backend, Mask4, Simd4};

/// Four `f32` lanes in a NEON register.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct F32x4(float32x4_t);

/// NEON lane mask: each lane all-ones (set) or all-zeros (clear).
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct MaskF32x4(uint32x4_t);

// SAFETY (module-wide): NEON is part of the aarch64 baseline; loads and
// stores go through pointers of live 4-element arrays.

impl F32x4 {
    /// Wraps a raw register.
    #[inline(always)]
    #[must_use]
    pub const fn from_raw(raw: float32x4_t) -> Self {
        Self(raw)
    }

    /// Returns the raw register.
    #[inline(always)]
    #[must_use]
    pub const fn into_raw(self) -> float32x4_t {
        self.0
    }
}

impl fmt::Debug for F32x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("F32x4").field(&self.to_array()).finish()
    }
}

impl fmt::Debug for MaskF32x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MaskF32x4").field(&self.to_lanes()).finish()
    }
}

impl Mask4 for MaskF32x4 {
    #[inline(always)]
    fn from_lanes(lanes: [bool; 4]) -> Self {
        let bits = lanes.map(|set| if set { u32::MAX } else { 0 });
        unsafe { Self(vld1q_u32(bits.as_ptr())) }
    }

    #[inline(always)]
    fn to_lanes(self) -> [bool; 4] {
        let mut bits = [0_u32; 4];
        unsafe { vst1q_u32(bits.as_mut_ptr(), self.0) };
        bits.map(|b| b != 0)
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { Self(vandq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { Self(vorrq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn not(self) -> Self {
        unsafe { Self(vmvnq_u32(self.0)) }
    }
}

impl Simd4 for F32x4 {
    type Elem = f32;
    type Mask = MaskF32x4;
    const BACKEND: Backend = Backend::Neon;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        unsafe { Self(vdupq_n_f32(value)) }
    }

    #[inline(always)]
    fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_array([x, y, z, w])
    }

    #[inline(always)]
    fn from_array(lanes: [f32; 4]) -> Self {
        unsafe { Self(vld1q_f32(lanes.as_ptr())) }
    }

    #[inline(always)]
    fn to_array(self) -> [f32; 4] {
        let mut out = [0.0_f32; 4];
        unsafe { vst1q_f32(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Self(vaddq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Self(vsubq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Self(vmulq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { Self(vdivq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe { Self(vnegq_f32(self.0)) }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe { Self(vabsq_f32(self.0)) }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe { Self(vsqrtq_f32(self.0)) }
    }

    // vminq/vmaxq propagate NaN; the select form keeps the
    // `if a < b { a } else { b }` lane rule.
    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        unsafe { Self(vbslq_f32(vcltq_f32(self.0, rhs.0), self.0, rhs.0)) }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        unsafe { Self(vbslq_f32(vcgtq_f32(self.0, rhs.0), self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sum(self) -> f32 {
        unsafe {
            // (l0 + l1, l2 + l3, l0 + l1, l2 + l3)
            let pairs = vpaddq_f32(self.0, self.0);
            vgetq_lane_f32::<0>(vpaddq_f32(pairs, pairs))
        }
    }

    #[inline(always)]
    fn cmp_eq(self, rhs: Self) -> MaskF32x4 {
        unsafe { MaskF32x4(vceqq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn cmp_lt(self, rhs: Self) -> MaskF32x4 {
        unsafe { MaskF32x4(vcltq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> MaskF32x4 {
        unsafe { MaskF32x4(vcleq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn cmp_gt(self, rhs: Self) -> MaskF32x4 {
        unsafe { MaskF32x4(vcgtq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: MaskF32x4, on_true: Self, on_false: Self) -> Self {
        unsafe { Self(vbslq_f32(mask.0, on_true.0, on_false.0)) }
    }
}

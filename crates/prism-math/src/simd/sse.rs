// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! SSE2 lanes for `f32` (x86 / x86_64).
//!
//! SSE2 is part of the x86_64 baseline and is required by the module's cfg on
//! 32-bit x86, so the intrinsics below are always available when this module
//! compiles. No runtime CPU detection is performed.

#![allow(unsafe_code, unused_unsafe)]

use core::fmt;

#[cfg(target_arch = "x86")]
use core::arch::x86::{
    __m128, _mm_add_ps, _mm_add_ss, _mm_and_ps, _mm_andnot_ps, _mm_castsi128_ps, _mm_cmpeq_ps,
    _mm_cmple_ps, _mm_cmplt_ps, _mm_cvtss_f32, _mm_div_ps, _mm_loadu_ps, _mm_max_ps, _mm_min_ps,
    _mm_movehl_ps, _mm_movemask_ps, _mm_mul_ps, _mm_or_ps, _mm_set1_epi32, _mm_set1_ps,
    _mm_set_epi32, _mm_setr_ps, _mm_setzero_ps, _mm_shuffle_ps, _mm_sqrt_ps, _mm_storeu_ps,
    _mm_sub_ps, _mm_xor_ps,
};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{
    __m128, _mm_add_ps, _mm_add_ss, _mm_and_ps, _mm_andnot_ps, _mm_castsi128_ps, _mm_cmpeq_ps,
    _mm_cmple_ps, _mm_cmplt_ps, _mm_cvtss_f32, _mm_div_ps, _mm_loadu_ps, _mm_max_ps, _mm_min_ps,
    _mm_movehl_ps, _mm_movemask_ps, _mm_mul_ps, _mm_or_ps, _mm_set1_epi32, _mm_set1_ps,
    _mm_set_epi32, _mm_setr_ps, _mm_setzero_ps, _mm_shuffle_ps, _mm_sqrt_ps, _mm_storeu_ps,
    _mm_sub_ps, _mm_xor_ps,
};

use super::{Backend, Mask4, Simd4};

/// Four `f32` lanes in an SSE register.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct F32x4(__m128);

/// SSE lane mask: each lane all-ones (set) or all-zeros (clear).
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct MaskF32x4(__m128);

// SAFETY (module-wide): every intrinsic used here is SSE/SSE2, which this
// module's cfg guarantees; unaligned load/store variants are used with
// pointers derived from 4-element arrays.

#[inline(always)]
fn sign_mask() -> __m128 {
    unsafe { _mm_set1_ps(-0.0) }
}

#[inline(always)]
fn xyz_mask() -> __m128 {
    unsafe { _mm_castsi128_ps(_mm_set_epi32(0, -1, -1, -1)) }
}

impl F32x4 {
    /// Wraps a raw register.
    #[inline(always)]
    #[must_use]
    pub const fn from_raw(raw: __m128) -> Self {
        Self(raw)
    }

    /// Returns the raw register.
    #[inline(always)]
    #[must_use]
    pub const fn into_raw(self) -> __m128 {
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
        let bit = |set: bool| if set { -1_i32 } else { 0 };
        unsafe {
            Self(_mm_castsi128_ps(_mm_set_epi32(
                bit(lanes[3]),
                bit(lanes[2]),
                bit(lanes[1]),
                bit(lanes[0]),
            )))
        }
    }

    #[inline(always)]
    fn to_lanes(self) -> [bool; 4] {
        let bits = self.bitmask();
        [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0]
    }

    #[inline(always)]
    fn bitmask(self) -> u8 {
        // movemask yields exactly four bits.
        let bits = unsafe { _mm_movemask_ps(self.0) };
        bits as u8
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { Self(_mm_and_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { Self(_mm_or_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn not(self) -> Self {
        unsafe { Self(_mm_xor_ps(self.0, _mm_castsi128_ps(_mm_set1_epi32(-1)))) }
    }
}

impl Simd4 for F32x4 {
    type Elem = f32;
    type Mask = MaskF32x4;
    const BACKEND: Backend = Backend::Sse2;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        unsafe { Self(_mm_set1_ps(value)) }
    }

    #[inline(always)]
    fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        unsafe { Self(_mm_setr_ps(x, y, z, w)) }
    }

    #[inline(always)]
    fn from_array(lanes: [f32; 4]) -> Self {
        unsafe { Self(_mm_loadu_ps(lanes.as_ptr())) }
    }

    #[inline(always)]
    fn to_array(self) -> [f32; 4] {
        let mut out = [0.0_f32; 4];
        unsafe { _mm_storeu_ps(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline(always)]
    fn zero() -> Self {
        unsafe { Self(_mm_setzero_ps()) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Self(_mm_add_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Self(_mm_sub_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Self(_mm_mul_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { Self(_mm_div_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe { Self(_mm_xor_ps(self.0, sign_mask())) }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe { Self(_mm_andnot_ps(sign_mask(), self.0)) }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe { Self(_mm_sqrt_ps(self.0)) }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        unsafe { Self(_mm_min_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        unsafe { Self(_mm_max_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sum(self) -> f32 {
        unsafe {
            // (l0 + l1, l1 + l0, l2 + l3, l3 + l2)
            let pairs = _mm_add_ps(self.0, _mm_shuffle_ps::<0b10_11_00_01>(self.0, self.0));
            // lane 0: (l0 + l1) + (l2 + l3)
            _mm_cvtss_f32(_mm_add_ss(pairs, _mm_movehl_ps(pairs, pairs)))
        }
    }

    #[inline(always)]
    fn dot3(self, rhs: Self) -> f32 {
        unsafe {
            let m = _mm_mul_ps(self.0, rhs.0);
            let m1 = _mm_shuffle_ps::<0b01_01_01_01>(m, m);
            let m2 = _mm_movehl_ps(m, m);
            _mm_cvtss_f32(_mm_add_ss(_mm_add_ss(m, m1), m2))
        }
    }

    #[inline(always)]
    fn cross3(self, rhs: Self) -> Self {
        unsafe {
            let a_yzx = _mm_shuffle_ps::<0b11_00_10_01>(self.0, self.0);
            let a_zxy = _mm_shuffle_ps::<0b11_01_00_10>(self.0, self.0);
            let b_yzx = _mm_shuffle_ps::<0b11_00_10_01>(rhs.0, rhs.0);
            let b_zxy = _mm_shuffle_ps::<0b11_01_00_10>(rhs.0, rhs.0);
            let c = _mm_sub_ps(_mm_mul_ps(a_yzx, b_zxy), _mm_mul_ps(a_zxy, b_yzx));
            Self(_mm_and_ps(c, xyz_mask()))
        }
    }

    #[inline(always)]
    fn cmp_eq(self, rhs: Self) -> MaskF32x4 {
        unsafe { MaskF32x4(_mm_cmpeq_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn cmp_lt(self, rhs: Self) -> MaskF32x4 {
        unsafe { MaskF32x4(_mm_cmplt_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> MaskF32x4 {
        unsafe { MaskF32x4(_mm_cmple_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: MaskF32x4, on_true: Self, on_false: Self) -> Self {
        unsafe {
            Self(_mm_or_ps(
                _mm_and_ps(mask.0, on_true.0),
                _mm_andnot_ps(mask.0, on_false.0),
            ))
        }
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Fixed-width 4-lane vector abstraction.
//!
//! Every higher math type performs its lane-parallel work through [`Simd4`].
//! Two families of implementations exist:
//!
//! - [`Portable4<T>`]: a plain `[T; 4]` emulation, generic over every
//!   [`Scalar`]. Always compiled; it is the reference semantics.
//! - Hardware lanes for `f32`: `sse::F32x4` (SSE2 on x86/x86_64) and
//!   `neon::F32x4` (aarch64). Compiled with the `simd` cargo feature on a
//!   matching target.
//!
//! Which one a scalar uses is fixed at compile time by [`Scalar::Simd`];
//! [`active_backend`] reports the choice.
//!
//! # Equivalence contract
//!
//! Hardware implementations must be observably identical to the portable
//! one for finite inputs. The operation set is written so that this holds
//! bit for bit:
//!
//! - horizontal sums are pairwise: `(l0 + l1) + (l2 + l3)`, and the 3-lane
//!   dot product is `(m0 + m1) + m2`;
//! - `rsqrt` is the exact `1 / sqrt(x)`, never the hardware estimate;
//! - `min`/`max` follow `if a < b { a } else { b }` lane semantics, which is
//!   what `minps`/`maxps` compute;
//! - `mul_add` is an unfused multiply then add.
//!
//! # Comparisons
//!
//! `cmp_*` return per-lane masks. The `all_*` predicates collapse a mask to a
//! single `bool` that is `true` only when **all four lanes** satisfy the
//! predicate. There is no "any lane" comparison shortcut: bounds tests built
//! on these rely on the all-lanes reading.
//!
//! # Failure semantics
//!
//! Nothing here checks for division by zero; lanes follow IEEE-754 and yield
//! infinities or NaN. Callers that want a contract check add one.

use core::fmt;

use crate::scalar::Scalar;

mod portable;

#[cfg(all(
    feature = "simd",
    any(
        target_arch = "x86_64",
        all(target_arch = "x86", target_feature = "sse2")
    )
))]
pub mod sse;

#[cfg(all(feature = "simd", target_arch = "aarch64"))]
pub mod neon;

pub use portable::{Portable4, PortableMask};

/// Hardware 4-lane `f32` type for this target (SSE2).
#[cfg(all(
    feature = "simd",
    any(
        target_arch = "x86_64",
        all(target_arch = "x86", target_feature = "sse2")
    )
))]
pub type F32x4 = sse::F32x4;

/// Hardware 4-lane `f32` type for this target (NEON).
#[cfg(all(feature = "simd", target_arch = "aarch64"))]
pub type F32x4 = neon::F32x4;

/// 4-lane `f32` type for this target (portable emulation).
#[cfg(not(all(
    feature = "simd",
    any(
        target_arch = "x86_64",
        all(target_arch = "x86", target_feature = "sse2"),
        target_arch = "aarch64"
    )
)))]
pub type F32x4 = Portable4<f32>;

/// Identifies the implementation behind a [`Simd4`] type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// `[T; 4]` emulation.
    Portable,
    /// x86 SSE2 (`__m128`).
    Sse2,
    /// aarch64 Advanced SIMD (`float32x4_t`).
    Neon,
}

impl Backend {
    /// Short lowercase name (`"portable"`, `"sse2"`, `"neon"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Portable => "portable",
            Self::Sse2 => "sse2",
            Self::Neon => "neon",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the backend that scalar type `T` is bound to in this build.
#[must_use]
pub const fn active_backend<T: Scalar>() -> Backend {
    <T::Simd as Simd4>::BACKEND
}

/// Per-lane boolean mask produced by [`Simd4`] comparisons.
pub trait Mask4: Copy + fmt::Debug + Send + Sync + 'static {
    /// Builds a mask from explicit lane values.
    fn from_lanes(lanes: [bool; 4]) -> Self;

    /// Returns the lane values.
    fn to_lanes(self) -> [bool; 4];

    /// Packs the lanes into the low four bits (lane `i` → bit `i`).
    fn bitmask(self) -> u8 {
        let lanes = self.to_lanes();
        u8::from(lanes[0])
            | (u8::from(lanes[1]) << 1)
            | (u8::from(lanes[2]) << 2)
            | (u8::from(lanes[3]) << 3)
    }

    /// `true` when every lane is set.
    fn all(self) -> bool {
        self.bitmask() == 0b1111
    }

    /// `true` when at least one lane is set.
    fn any(self) -> bool {
        self.bitmask() != 0
    }

    /// `true` when no lane is set.
    fn none(self) -> bool {
        self.bitmask() == 0
    }

    /// Lane-wise AND.
    #[must_use]
    fn and(self, rhs: Self) -> Self;

    /// Lane-wise OR.
    #[must_use]
    fn or(self, rhs: Self) -> Self;

    /// Lane-wise NOT.
    #[must_use]
    fn not(self) -> Self;
}

/// Uniform 4-lane numeric vector.
///
/// Methods with default bodies describe the reference semantics in terms of
/// [`to_array`](Simd4::to_array)/[`from_array`](Simd4::from_array);
/// hardware implementations override the ones they can do in-register and
/// must keep the results identical.
///
/// This trait deliberately does not rely on `core::ops`; every operation is
/// a named method so the portable and hardware types expose the same
/// surface.
pub trait Simd4: Copy + fmt::Debug + Send + Sync + 'static {
    /// Lane element type.
    type Elem: Scalar;
    /// Mask type returned by comparisons.
    type Mask: Mask4;
    /// Which implementation this is.
    const BACKEND: Backend;

    // Construction

    /// Broadcasts `value` into every lane.
    fn splat(value: Self::Elem) -> Self;

    /// Builds `(x, y, z, w)`.
    fn new(x: Self::Elem, y: Self::Elem, z: Self::Elem, w: Self::Elem) -> Self;

    /// Builds from an array, lane `i` from element `i`.
    fn from_array(lanes: [Self::Elem; 4]) -> Self {
        Self::new(lanes[0], lanes[1], lanes[2], lanes[3])
    }

    /// Returns the lanes as an array.
    fn to_array(self) -> [Self::Elem; 4];

    /// All lanes zero.
    #[must_use]
    fn zero() -> Self {
        Self::splat(Self::Elem::ZERO)
    }

    /// All lanes one.
    #[must_use]
    fn one() -> Self {
        Self::splat(Self::Elem::ONE)
    }

    // Memory

    /// Loads `src[0]` into lane 0; lanes 1..4 are zero.
    ///
    /// # Panics
    /// Panics if `src` is empty.
    fn load1(src: &[Self::Elem]) -> Self {
        let z = Self::Elem::ZERO;
        Self::new(src[0], z, z, z)
    }

    /// Loads `src[..2]` into lanes 0..2; lanes 2..4 are zero.
    ///
    /// # Panics
    /// Panics if `src` has fewer than 2 elements.
    fn load2(src: &[Self::Elem]) -> Self {
        let z = Self::Elem::ZERO;
        Self::new(src[0], src[1], z, z)
    }

    /// Loads `src[..3]` into lanes 0..3; lane 3 is zero.
    ///
    /// # Panics
    /// Panics if `src` has fewer than 3 elements.
    fn load3(src: &[Self::Elem]) -> Self {
        Self::new(src[0], src[1], src[2], Self::Elem::ZERO)
    }

    /// Loads `src[..4]`.
    ///
    /// # Panics
    /// Panics if `src` has fewer than 4 elements.
    fn load4(src: &[Self::Elem]) -> Self {
        Self::new(src[0], src[1], src[2], src[3])
    }

    /// Stores lane 0 into `dst[0]`.
    ///
    /// # Panics
    /// Panics if `dst` is empty.
    fn store1(self, dst: &mut [Self::Elem]) {
        dst[..1].copy_from_slice(&self.to_array()[..1]);
    }

    /// Stores lanes 0..2 into `dst[..2]`.
    ///
    /// # Panics
    /// Panics if `dst` has fewer than 2 elements.
    fn store2(self, dst: &mut [Self::Elem]) {
        dst[..2].copy_from_slice(&self.to_array()[..2]);
    }

    /// Stores lanes 0..3 into `dst[..3]`.
    ///
    /// # Panics
    /// Panics if `dst` has fewer than 3 elements.
    fn store3(self, dst: &mut [Self::Elem]) {
        dst[..3].copy_from_slice(&self.to_array()[..3]);
    }

    /// Stores all lanes into `dst[..4]`.
    ///
    /// # Panics
    /// Panics if `dst` has fewer than 4 elements.
    fn store4(self, dst: &mut [Self::Elem]) {
        dst[..4].copy_from_slice(&self.to_array());
    }

    /// Returns lane `index`.
    ///
    /// # Panics
    /// Panics if `index >= 4`.
    fn lane(self, index: usize) -> Self::Elem {
        self.to_array()[index]
    }

    /// Returns a copy with lane `index` replaced by `value`.
    ///
    /// # Panics
    /// Panics if `index >= 4`.
    #[must_use]
    fn with_lane(self, index: usize, value: Self::Elem) -> Self {
        let mut lanes = self.to_array();
        lanes[index] = value;
        Self::from_array(lanes)
    }

    /// Lane 0.
    fn x(self) -> Self::Elem {
        self.lane(0)
    }

    /// Lane 1.
    fn y(self) -> Self::Elem {
        self.lane(1)
    }

    /// Lane 2.
    fn z(self) -> Self::Elem {
        self.lane(2)
    }

    /// Lane 3.
    fn w(self) -> Self::Elem {
        self.lane(3)
    }

    // Arithmetic

    /// Lane-wise `self + rhs`.
    #[must_use]
    fn add(self, rhs: Self) -> Self;

    /// Lane-wise `self - rhs`.
    #[must_use]
    fn sub(self, rhs: Self) -> Self;

    /// Lane-wise `self * rhs`.
    #[must_use]
    fn mul(self, rhs: Self) -> Self;

    /// Lane-wise `self / rhs`. Not checked for zero divisors.
    #[must_use]
    fn div(self, rhs: Self) -> Self;

    /// Lane-wise negation.
    #[must_use]
    fn neg(self) -> Self;

    /// Lane-wise absolute value.
    #[must_use]
    fn abs(self) -> Self;

    /// Multiplies every lane by `factor`.
    #[must_use]
    fn scale(self, factor: Self::Elem) -> Self {
        self.mul(Self::splat(factor))
    }

    /// Lane-wise `1 / self`.
    #[must_use]
    fn recip(self) -> Self {
        Self::one().div(self)
    }

    /// Lane-wise square root.
    #[must_use]
    fn sqrt(self) -> Self;

    /// Lane-wise `1 / sqrt(self)`, exact.
    #[must_use]
    fn rsqrt(self) -> Self {
        Self::one().div(self.sqrt())
    }

    /// Lane-wise minimum (`if a < b { a } else { b }`).
    #[must_use]
    fn min(self, rhs: Self) -> Self;

    /// Lane-wise maximum (`if a > b { a } else { b }`).
    #[must_use]
    fn max(self, rhs: Self) -> Self;

    /// Lane-wise clamp into `[lo, hi]`.
    #[must_use]
    fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    /// Lane-wise clamp into `[0, 1]`.
    #[must_use]
    fn saturate(self) -> Self {
        self.clamp(Self::zero(), Self::one())
    }

    /// `self * b + c`, rounded twice (not fused).
    #[must_use]
    fn mul_add(self, b: Self, c: Self) -> Self {
        self.mul(b).add(c)
    }

    /// `self + (to - self) * t`.
    #[must_use]
    fn lerp(self, to: Self, t: Self::Elem) -> Self {
        self.add(to.sub(self).scale(t))
    }

    // Reductions

    /// `(l0 + l1) + (l2 + l3)`.
    fn sum(self) -> Self::Elem {
        let l = self.to_array();
        (l[0] + l[1]) + (l[2] + l[3])
    }

    /// 4-lane dot product.
    fn dot4(self, rhs: Self) -> Self::Elem {
        self.mul(rhs).sum()
    }

    /// Dot product of lanes 0..3, `(m0 + m1) + m2`; lane 3 is ignored.
    fn dot3(self, rhs: Self) -> Self::Elem {
        let m = self.mul(rhs).to_array();
        (m[0] + m[1]) + m[2]
    }

    /// Cross product of lanes 0..3. Lane 3 of the result is zero.
    #[must_use]
    fn cross3(self, rhs: Self) -> Self {
        let a = self.to_array();
        let b = rhs.to_array();
        Self::new(
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
            Self::Elem::ZERO,
        )
    }

    /// Smallest lane, `min(min(l0, l1), min(l2, l3))`.
    fn min_element(self) -> Self::Elem {
        let l = self.to_array();
        l[0].min(l[1]).min(l[2].min(l[3]))
    }

    /// Largest lane, `max(max(l0, l1), max(l2, l3))`.
    fn max_element(self) -> Self::Elem {
        let l = self.to_array();
        l[0].max(l[1]).max(l[2].max(l[3]))
    }

    // Comparison

    /// Lane-wise `self == rhs`.
    fn cmp_eq(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `self < rhs`.
    fn cmp_lt(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `self <= rhs`.
    fn cmp_le(self, rhs: Self) -> Self::Mask;

    /// Lane-wise `self > rhs`.
    fn cmp_gt(self, rhs: Self) -> Self::Mask {
        rhs.cmp_lt(self)
    }

    /// Lane-wise `self >= rhs`.
    fn cmp_ge(self, rhs: Self) -> Self::Mask {
        rhs.cmp_le(self)
    }

    /// Takes lanes from `on_true` where `mask` is set, else from `on_false`.
    fn select(mask: Self::Mask, on_true: Self, on_false: Self) -> Self;

    /// `true` when every lane is equal.
    fn all_eq(self, rhs: Self) -> bool {
        self.cmp_eq(rhs).all()
    }

    /// `true` when every lane of `self` is less than `rhs`.
    fn all_lt(self, rhs: Self) -> bool {
        self.cmp_lt(rhs).all()
    }

    /// `true` when every lane of `self` is less than or equal to `rhs`.
    fn all_le(self, rhs: Self) -> bool {
        self.cmp_le(rhs).all()
    }

    /// `true` when every lane of `self` is greater than `rhs`.
    fn all_gt(self, rhs: Self) -> bool {
        self.cmp_gt(rhs).all()
    }

    /// `true` when every lane of `self` is greater than or equal to `rhs`.
    fn all_ge(self, rhs: Self) -> bool {
        self.cmp_ge(rhs).all()
    }

    /// `true` when every lane differs by at most [`Scalar::TOLERANCE`].
    fn all_near_eq(self, rhs: Self) -> bool {
        self.sub(rhs)
            .abs()
            .cmp_le(Self::splat(Self::Elem::TOLERANCE))
            .all()
    }

    // Permutation

    /// Returns `(self[X], self[Y], self[Z], self[W])`.
    ///
    /// Indices are checked at compile time.
    #[must_use]
    fn shuffle<const X: usize, const Y: usize, const Z: usize, const W: usize>(self) -> Self {
        const { assert!(X < 4 && Y < 4 && Z < 4 && W < 4, "shuffle index out of range") };
        let l = self.to_array();
        Self::new(l[X], l[Y], l[Z], l[W])
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Portable `[T; 4]` lanes. Reference semantics for every other backend.

use super::{Backend, Mask4, Simd4};
use crate::scalar::Scalar;

/// Four scalars in a 16-byte aligned array.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C, align(16))]
pub struct Portable4<T>(pub [T; 4]);

/// Per-lane `bool` mask for [`Portable4`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortableMask(pub [bool; 4]);

impl<T: Scalar> Portable4<T> {
    #[inline(always)]
    fn map(self, f: impl Fn(T) -> T) -> Self {
        let [a, b, c, d] = self.0;
        Self([f(a), f(b), f(c), f(d)])
    }

    #[inline(always)]
    fn zip(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        let a = self.0;
        let b = rhs.0;
        Self([f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3])])
    }

    #[inline(always)]
    fn test(self, rhs: Self, f: impl Fn(T, T) -> bool) -> PortableMask {
        let a = self.0;
        let b = rhs.0;
        PortableMask([f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3])])
    }
}

impl Mask4 for PortableMask {
    #[inline(always)]
    fn from_lanes(lanes: [bool; 4]) -> Self {
        Self(lanes)
    }

    #[inline(always)]
    fn to_lanes(self) -> [bool; 4] {
        self.0
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] & b[0], a[1] & b[1], a[2] & b[2], a[3] & b[3]])
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] | b[0], a[1] | b[1], a[2] | b[2], a[3] | b[3]])
    }

    #[inline(always)]
    fn not(self) -> Self {
        let [a, b, c, d] = self.0;
        Self([!a, !b, !c, !d])
    }
}

impl<T: Scalar> Simd4 for Portable4<T> {
    type Elem = T;
    type Mask = PortableMask;
    const BACKEND: Backend = Backend::Portable;

    #[inline(always)]
    fn splat(value: T) -> Self {
        Self([value; 4])
    }

    #[inline(always)]
    fn new(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }

    #[inline(always)]
    fn from_array(lanes: [T; 4]) -> Self {
        Self(lanes)
    }

    #[inline(always)]
    fn to_array(self) -> [T; 4] {
        self.0
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a * b)
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a / b)
    }

    #[inline(always)]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }

    #[inline(always)]
    fn abs(self) -> Self {
        self.map(Scalar::abs)
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        self.map(Scalar::sqrt)
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        self.zip(rhs, Scalar::min)
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        self.zip(rhs, Scalar::max)
    }

    #[inline(always)]
    fn cmp_eq(self, rhs: Self) -> PortableMask {
        self.test(rhs, |a, b| a == b)
    }

    #[inline(always)]
    fn cmp_lt(self, rhs: Self) -> PortableMask {
        self.test(rhs, |a, b| a < b)
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> PortableMask {
        self.test(rhs, |a, b| a <= b)
    }

    #[inline(always)]
    fn select(mask: PortableMask, on_true: Self, on_false: Self) -> Self {
        let m = mask.0;
        let (t, f) = (on_true.0, on_false.0);
        Self([
            if m[0] { t[0] } else { f[0] },
            if m[1] { t[1] } else { f[1] },
            if m[2] { t[2] } else { f[2] },
            if m[3] { t[3] } else { f[3] },
        ])
    }
}

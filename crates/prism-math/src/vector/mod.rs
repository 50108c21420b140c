// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! 2/3/4-component vectors.
//!
//! Storage is a plain `[T; N]`; lane-parallel work goes through the scalar's
//! [`Simd4`](crate::simd::Simd4) type (`load2`/`load3`/`from_array` in,
//! `store2`/`store3`/`to_array` out). Unused lanes are zero on load and
//! ignored on store.
//!
//! Vectors carry no homogeneous-coordinate bookkeeping: a [`Vector4`] used as
//! a position needs `w = 1`, a direction `w = 0`, and callers set it.

mod vector2;
mod vector3;
mod vector4;

pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;

/// Inherent methods and operator impls shared by every vector dimension.
///
/// `$load`/`$store` move between `[T; $n]` and the 4-lane type; `$dot` is the
/// lane reduction used for the dot product.
macro_rules! impl_vector_common {
    ($name:ident, $n:literal, $load:ident, $store:ident, $dot:ident) => {
        impl<T: $crate::scalar::Scalar> $name<T> {
            /// Every component set to `value`.
            #[must_use]
            pub const fn splat(value: T) -> Self {
                Self { data: [value; $n] }
            }

            /// Builds from an array, component `i` from element `i`.
            #[must_use]
            pub const fn from_array(data: [T; $n]) -> Self {
                Self { data }
            }

            /// Components as an array.
            #[must_use]
            pub fn to_array(self) -> [T; $n] {
                self.data
            }

            /// Contiguous read-only view of the components.
            #[must_use]
            pub const fn as_slice(&self) -> &[T] {
                &self.data
            }

            /// Contiguous mutable view of the components.
            pub fn as_mut_slice(&mut self) -> &mut [T] {
                &mut self.data
            }

            #[inline(always)]
            pub(crate) fn lanes(self) -> T::Simd {
                <T::Simd as $crate::simd::Simd4>::$load(&self.data)
            }

            #[inline(always)]
            pub(crate) fn from_lanes(lanes: T::Simd) -> Self {
                let mut data = [T::ZERO; $n];
                $crate::simd::Simd4::$store(lanes, &mut data);
                Self { data }
            }

            /// Dot product.
            #[must_use]
            pub fn dot(self, rhs: Self) -> T {
                $crate::simd::Simd4::$dot(self.lanes(), rhs.lanes())
            }

            /// Squared length.
            #[must_use]
            pub fn length_squared(self) -> T {
                self.dot(self)
            }

            /// Euclidean length.
            #[must_use]
            pub fn length(self) -> T {
                self.length_squared().sqrt()
            }

            /// Distance between two points.
            #[must_use]
            pub fn distance(self, rhs: Self) -> T {
                (rhs - self).length()
            }

            /// Squared distance between two points.
            #[must_use]
            pub fn distance_squared(self, rhs: Self) -> T {
                (rhs - self).length_squared()
            }

            /// Unit vector pointing from `self` toward `target`.
            ///
            /// Coincident points yield the zero vector.
            #[must_use]
            pub fn direction_to(self, target: Self) -> Self {
                (target - self).normalized()
            }

            /// Scales to unit length in place.
            ///
            /// A zero vector is left unchanged: the squared length is tested
            /// against zero before the reciprocal square root is taken. When
            /// the squared length overflows, the vector is first divided by
            /// its largest component magnitude. Vectors with infinite or NaN
            /// components are left unchanged.
            pub fn normalize(&mut self) -> &mut Self {
                let mut len_sq = self.length_squared();
                if len_sq == T::INFINITY {
                    let largest = self.abs().max_element();
                    if largest.is_finite() {
                        *self = Self::from_lanes($crate::simd::Simd4::div(
                            self.lanes(),
                            <T::Simd as $crate::simd::Simd4>::splat(largest),
                        ));
                        len_sq = self.length_squared();
                    }
                }
                if len_sq > T::ZERO && len_sq.is_finite() {
                    let lanes = $crate::simd::Simd4::scale(self.lanes(), len_sq.rsqrt());
                    *self = Self::from_lanes(lanes);
                }
                self
            }

            /// Unit-length copy; the zero vector maps to itself.
            #[must_use]
            pub fn normalized(mut self) -> Self {
                self.normalize();
                self
            }

            /// `self + (to - self) * t`.
            #[must_use]
            pub fn lerp(self, to: Self, t: T) -> Self {
                Self::from_lanes($crate::simd::Simd4::lerp(self.lanes(), to.lanes(), t))
            }

            /// Component-wise minimum.
            #[must_use]
            pub fn min(self, rhs: Self) -> Self {
                Self::from_lanes($crate::simd::Simd4::min(self.lanes(), rhs.lanes()))
            }

            /// Component-wise maximum.
            #[must_use]
            pub fn max(self, rhs: Self) -> Self {
                Self::from_lanes($crate::simd::Simd4::max(self.lanes(), rhs.lanes()))
            }

            /// Component-wise clamp into `[lo, hi]`.
            #[must_use]
            pub fn clamp(self, lo: Self, hi: Self) -> Self {
                Self::from_lanes($crate::simd::Simd4::clamp(
                    self.lanes(),
                    lo.lanes(),
                    hi.lanes(),
                ))
            }

            /// Component-wise clamp into `[0, 1]`.
            #[must_use]
            pub fn saturate(self) -> Self {
                Self::from_lanes($crate::simd::Simd4::saturate(self.lanes()))
            }

            /// Component-wise absolute value.
            #[must_use]
            pub fn abs(self) -> Self {
                Self::from_lanes($crate::simd::Simd4::abs(self.lanes()))
            }

            /// Smallest component.
            #[must_use]
            pub fn min_element(self) -> T {
                self.data
                    .iter()
                    .copied()
                    .fold(T::INFINITY, $crate::scalar::Scalar::min)
            }

            /// Largest component.
            #[must_use]
            pub fn max_element(self) -> T {
                self.data
                    .iter()
                    .copied()
                    .fold(-T::INFINITY, $crate::scalar::Scalar::max)
            }

            /// New vector whose component `i` is `self[indices[i]]`.
            ///
            /// Indices are contract-checked; out-of-range indices still panic
            /// on the slice access when checks are compiled out.
            #[must_use]
            pub fn swizzle(self, indices: [usize; $n]) -> Self {
                $crate::contract_check!(
                    indices.iter().all(|&i| i < $n),
                    "swizzle index out of range: {indices:?}"
                );
                Self {
                    data: indices.map(|i| self.data[i]),
                }
            }

            /// `true` when every component is within [`Scalar::TOLERANCE`]
            /// of `rhs`.
            ///
            /// [`Scalar::TOLERANCE`]: crate::scalar::Scalar::TOLERANCE
            #[must_use]
            pub fn near_equal(self, rhs: Self) -> bool {
                $crate::simd::Simd4::all_near_eq(self.lanes(), rhs.lanes())
            }

            /// `true` when every component is exactly zero.
            #[must_use]
            pub fn is_zero(self) -> bool {
                $crate::simd::Simd4::all_eq(
                    self.lanes(),
                    <T::Simd as $crate::simd::Simd4>::zero(),
                )
            }

            /// `true` when no component is NaN or infinite.
            #[must_use]
            pub fn is_finite(self) -> bool {
                self.data.iter().all(|c| c.is_finite())
            }

            /// Converts the element type.
            #[must_use]
            pub fn cast<U: $crate::scalar::Scalar>(self) -> $name<U> {
                $name {
                    data: self.data.map(|c| U::from_f64(c.to_f64())),
                }
            }
        }

        impl<T: $crate::scalar::Scalar> From<[T; $n]> for $name<T> {
            fn from(data: [T; $n]) -> Self {
                Self { data }
            }
        }

        impl<T: $crate::scalar::Scalar> From<$name<T>> for [T; $n] {
            fn from(v: $name<T>) -> Self {
                v.data
            }
        }

        impl<T: $crate::scalar::Scalar> core::ops::Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &T {
                &self.data[index]
            }
        }

        impl<T: $crate::scalar::Scalar> core::ops::IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                &mut self.data[index]
            }
        }

        impl<T: $crate::scalar::Scalar> core::ops::Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self {
                Self::from_lanes($crate::simd::Simd4::neg(self.lanes()))
            }
        }

        $crate::vector::impl_vector_common!(@binary $name, Add, add, AddAssign, add_assign);
        $crate::vector::impl_vector_common!(@binary $name, Sub, sub, SubAssign, sub_assign);
        $crate::vector::impl_vector_common!(@binary $name, Mul, mul, MulAssign, mul_assign);
        $crate::vector::impl_vector_common!(@binary $name, Div, div, DivAssign, div_assign);

        impl<T: $crate::scalar::Scalar> core::ops::Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self {
                Self::from_lanes($crate::simd::Simd4::scale(self.lanes(), rhs))
            }
        }

        impl<T: $crate::scalar::Scalar> core::ops::MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T: $crate::scalar::Scalar> core::ops::Div<T> for $name<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self {
                $crate::contract_check!(rhs != T::ZERO, "vector divided by zero");
                Self::from_lanes($crate::simd::Simd4::div(
                    self.lanes(),
                    <T::Simd as $crate::simd::Simd4>::splat(rhs),
                ))
            }
        }

        impl<T: $crate::scalar::Scalar> core::ops::DivAssign<T> for $name<T> {
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }

        impl core::ops::Mul<$name<f32>> for f32 {
            type Output = $name<f32>;

            fn mul(self, rhs: $name<f32>) -> $name<f32> {
                rhs * self
            }
        }

        #[cfg(feature = "f64")]
        impl core::ops::Mul<$name<f64>> for f64 {
            type Output = $name<f64>;

            fn mul(self, rhs: $name<f64>) -> $name<f64> {
                rhs * self
            }
        }
    };
    (@binary $name:ident, $op:ident, $method:ident, $assign:ident, $assign_method:ident) => {
        impl<T: $crate::scalar::Scalar> core::ops::$op for $name<T> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self::from_lanes($crate::simd::Simd4::$method(self.lanes(), rhs.lanes()))
            }
        }

        impl<T: $crate::scalar::Scalar> core::ops::$assign for $name<T> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = core::ops::$op::$method(*self, rhs);
            }
        }
    };
}

pub(crate) use impl_vector_common;

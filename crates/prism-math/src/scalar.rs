// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar element abstraction for Prism math.
//!
//! Every vector, matrix, quaternion and color in this crate is generic over a
//! [`Scalar`]. The trait collects the per-type constants (zero, one, machine
//! epsilon, pi, …) and the elementary operations the higher layers need, and
//! it binds each element type to the 4-lane SIMD type that carries it.
//!
//! Contract:
//! - Operations are pure and total; out-of-domain inputs follow IEEE-754
//!   (NaN/infinity) rather than panicking.
//! - Transcendentals are routed through `libm` so results do not depend on the
//!   platform C math library.
//! - `asin`/`acos` clamp their argument into `[-1, 1]` first; dot products of
//!   unit vectors drift slightly past 1.0 and must not turn into NaN.
//! - Near-equality is absolute, never relative: `|a - b| <= TOLERANCE`.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

use crate::simd::Simd4;

/// Floating-point element type usable by every Prism math type.
///
/// Implemented for `f32` (always) and `f64` (cargo feature `f64`). Arithmetic
/// operators are required via the standard operator traits so generic code can
/// use `+`, `-`, `*`, `/` and unary `-` directly.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + Default
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + FromStr
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// 4-lane vector type carrying this scalar, chosen at compile time.
    type Simd: Simd4<Elem = Self>;

    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// `-1`.
    const NEG_ONE: Self;
    /// `2`.
    const TWO: Self;
    /// `0.5`.
    const HALF: Self;
    /// Machine epsilon of the representation.
    const EPSILON: Self;
    /// Absolute tolerance used by every near-equality predicate
    /// (`EPSILON * 128`).
    const TOLERANCE: Self;
    /// Archimedes' constant.
    const PI: Self;
    /// `2π`.
    const TWO_PI: Self;
    /// `π/2`.
    const HALF_PI: Self;
    /// Multiply degrees by this to obtain radians.
    const DEG_TO_RAD: Self;
    /// Multiply radians by this to obtain degrees.
    const RAD_TO_DEG: Self;
    /// Largest finite value.
    const MAX: Self;
    /// Smallest (most negative) finite value.
    const MIN: Self;
    /// Positive infinity.
    const INFINITY: Self;

    /// Converts from `f32`.
    fn from_f32(value: f32) -> Self;
    /// Converts from `f64`, rounding to the nearest representable value.
    fn from_f64(value: f64) -> Self;
    /// Widens to `f64` for interop and diagnostics.
    fn to_f64(self) -> f64;

    /// Square root.
    fn sqrt(self) -> Self;
    /// Absolute value (clears the sign bit, so `-0.0` becomes `+0.0`).
    fn abs(self) -> Self;
    /// Sine of `self` (radians).
    fn sin(self) -> Self;
    /// Cosine of `self` (radians).
    fn cos(self) -> Self;
    /// Tangent of `self` (radians).
    fn tan(self) -> Self;
    /// Arc sine; the argument is clamped into `[-1, 1]`.
    fn asin(self) -> Self;
    /// Arc cosine; the argument is clamped into `[-1, 1]`.
    fn acos(self) -> Self;
    /// Arc tangent.
    fn atan(self) -> Self;
    /// Four-quadrant arc tangent of `self / x`.
    fn atan2(self, x: Self) -> Self;
    /// `e^self`.
    fn exp(self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;
    /// `self^exponent`.
    fn powf(self, exponent: Self) -> Self;
    /// Largest integer value not greater than `self`.
    fn floor(self) -> Self;
    /// Smallest integer value not less than `self`.
    fn ceil(self) -> Self;
    /// Nearest integer value, ties away from zero.
    fn round(self) -> Self;
    /// Integer part (rounds toward zero).
    fn trunc(self) -> Self;
    /// Returns `true` unless `self` is NaN or infinite.
    fn is_finite(self) -> bool;
    /// Returns `true` if `self` is NaN.
    fn is_nan(self) -> bool;

    /// Returns both sine and cosine of `self` (radians).
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// `1 / sqrt(self)`, computed exactly (no hardware estimate).
    fn rsqrt(self) -> Self {
        Self::ONE / self.sqrt()
    }

    /// `1 / self`.
    fn recip(self) -> Self {
        Self::ONE / self
    }

    /// Fractional part, `self - trunc(self)`.
    fn fract(self) -> Self {
        self - self.trunc()
    }

    /// Smaller of two values; returns `other` when the comparison is
    /// unordered, matching the SIMD lane semantics.
    fn min(self, other: Self) -> Self {
        if self < other {
            self
        } else {
            other
        }
    }

    /// Larger of two values; returns `other` when the comparison is
    /// unordered, matching the SIMD lane semantics.
    fn max(self, other: Self) -> Self {
        if self > other {
            self
        } else {
            other
        }
    }

    /// Clamps into `[lo, hi]`. Does not validate the range.
    fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    /// Clamps into `[0, 1]`.
    fn saturate(self) -> Self {
        self.clamp(Self::ZERO, Self::ONE)
    }

    /// Linear interpolation `self + (to - self) * t`.
    fn lerp(self, to: Self, t: Self) -> Self {
        self + (to - self) * t
    }

    /// Degrees to radians.
    fn to_radians(self) -> Self {
        self * Self::DEG_TO_RAD
    }

    /// Radians to degrees.
    fn to_degrees(self) -> Self {
        self * Self::RAD_TO_DEG
    }

    /// `|self - other| <= TOLERANCE`.
    fn near_equal(self, other: Self) -> bool {
        (self - other).abs() <= Self::TOLERANCE
    }

    /// `|self| <= TOLERANCE`.
    fn near_zero(self) -> bool {
        self.abs() <= Self::TOLERANCE
    }
}

#[inline]
fn unit_clamp_f32(value: f32) -> f32 {
    if value < -1.0 {
        -1.0
    } else if value > 1.0 {
        1.0
    } else {
        value
    }
}

impl Scalar for f32 {
    type Simd = crate::simd::F32x4;

    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const NEG_ONE: Self = -1.0;
    const TWO: Self = 2.0;
    const HALF: Self = 0.5;
    const EPSILON: Self = f32::EPSILON;
    const TOLERANCE: Self = f32::EPSILON * 128.0;
    const PI: Self = core::f32::consts::PI;
    const TWO_PI: Self = core::f32::consts::TAU;
    const HALF_PI: Self = core::f32::consts::FRAC_PI_2;
    const DEG_TO_RAD: Self = core::f32::consts::PI / 180.0;
    const RAD_TO_DEG: Self = 180.0 / core::f32::consts::PI;
    const MAX: Self = f32::MAX;
    const MIN: Self = f32::MIN;
    const INFINITY: Self = f32::INFINITY;

    fn from_f32(value: f32) -> Self {
        value
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }

    fn abs(self) -> Self {
        libm::fabsf(self)
    }

    fn sin(self) -> Self {
        libm::sinf(self)
    }

    fn cos(self) -> Self {
        libm::cosf(self)
    }

    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }

    fn tan(self) -> Self {
        libm::tanf(self)
    }

    fn asin(self) -> Self {
        libm::asinf(unit_clamp_f32(self))
    }

    fn acos(self) -> Self {
        libm::acosf(unit_clamp_f32(self))
    }

    fn atan(self) -> Self {
        libm::atanf(self)
    }

    fn atan2(self, x: Self) -> Self {
        libm::atan2f(self, x)
    }

    fn exp(self) -> Self {
        libm::expf(self)
    }

    fn ln(self) -> Self {
        libm::logf(self)
    }

    fn powf(self, exponent: Self) -> Self {
        libm::powf(self, exponent)
    }

    fn floor(self) -> Self {
        libm::floorf(self)
    }

    fn ceil(self) -> Self {
        libm::ceilf(self)
    }

    fn round(self) -> Self {
        libm::roundf(self)
    }

    fn trunc(self) -> Self {
        libm::truncf(self)
    }

    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
}

#[cfg(feature = "f64")]
#[inline]
fn unit_clamp_f64(value: f64) -> f64 {
    if value < -1.0 {
        -1.0
    } else if value > 1.0 {
        1.0
    } else {
        value
    }
}

#[cfg(feature = "f64")]
impl Scalar for f64 {
    type Simd = crate::simd::Portable4<f64>;

    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const NEG_ONE: Self = -1.0;
    const TWO: Self = 2.0;
    const HALF: Self = 0.5;
    const EPSILON: Self = f64::EPSILON;
    const TOLERANCE: Self = f64::EPSILON * 128.0;
    const PI: Self = core::f64::consts::PI;
    const TWO_PI: Self = core::f64::consts::TAU;
    const HALF_PI: Self = core::f64::consts::FRAC_PI_2;
    const DEG_TO_RAD: Self = core::f64::consts::PI / 180.0;
    const RAD_TO_DEG: Self = 180.0 / core::f64::consts::PI;
    const MAX: Self = f64::MAX;
    const MIN: Self = f64::MIN;
    const INFINITY: Self = f64::INFINITY;

    fn from_f32(value: f32) -> Self {
        f64::from(value)
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    fn abs(self) -> Self {
        libm::fabs(self)
    }

    fn sin(self) -> Self {
        libm::sin(self)
    }

    fn cos(self) -> Self {
        libm::cos(self)
    }

    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }

    fn tan(self) -> Self {
        libm::tan(self)
    }

    fn asin(self) -> Self {
        libm::asin(unit_clamp_f64(self))
    }

    fn acos(self) -> Self {
        libm::acos(unit_clamp_f64(self))
    }

    fn atan(self) -> Self {
        libm::atan(self)
    }

    fn atan2(self, x: Self) -> Self {
        libm::atan2(self, x)
    }

    fn exp(self) -> Self {
        libm::exp(self)
    }

    fn ln(self) -> Self {
        libm::log(self)
    }

    fn powf(self, exponent: Self) -> Self {
        libm::pow(self, exponent)
    }

    fn floor(self) -> Self {
        libm::floor(self)
    }

    fn ceil(self) -> Self {
        libm::ceil(self)
    }

    fn round(self) -> Self {
        libm::round(self)
    }

    fn trunc(self) -> Self {
        libm::trunc(self)
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// The range is validated by a contract check (debug builds, or release with
/// `contract_checks_release`).
pub fn clamp<T: Scalar>(value: T, min: T, max: T) -> T {
    crate::contract_check!(min <= max, "invalid clamp range: {min} > {max}");
    value.clamp(min, max)
}

/// Converts degrees to radians.
pub fn deg_to_rad<T: Scalar>(value: T) -> T {
    value.to_radians()
}

/// Converts radians to degrees.
pub fn rad_to_deg<T: Scalar>(value: T) -> T {
    value.to_degrees()
}

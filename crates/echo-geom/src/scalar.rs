// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Numeric domains for the rectangle algebra.
//!
//! The algebra in [`crate::rect`] is written once against [`Coord`] and
//! instantiated for `i32`, `f32` and `f64`. Everything that differs between
//! the domains lives in the trait impls below:
//!
//! - overflow policy: integers saturate at their bounds, floats follow IEEE
//!   (overflow to ±∞);
//! - the failure sentinel written by a failed intersection: integers use the
//!   swapped bounds `min = MAX, max = MIN`, floats use NaN;
//! - the widened type used for area and squared distance (`i64` for `i32`).
//!
//! `min_of`/`max_of` on floats use `f32::min`/`f64::min`, which return the
//! non-NaN operand. This makes the NaN sentinel an identity element for union.
//! Measures must not go through them: `clamp_non_negative` keeps NaN so a
//! distance to the sentinel is NaN, not zero.

use core::cmp::Ordering;
use core::fmt;

use bytes::{Buf, BufMut};

use crate::format::NumberFormat;

/// Arithmetic surface shared by coordinates and their widened measures.
pub trait Scalar: Copy + fmt::Debug + PartialEq + PartialOrd + Send + Sync + 'static {
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// `ONE + ONE`, used by the closed-form distance.
    const TWO: Self;

    /// Addition; saturating for integers.
    fn add_sat(self, rhs: Self) -> Self;
    /// Subtraction; saturating for integers.
    fn sub_sat(self, rhs: Self) -> Self;
    /// Multiplication; saturating for integers.
    fn mul_sat(self, rhs: Self) -> Self;
    /// Absolute value; saturating for integers (`MIN.abs() == MAX`).
    fn abs_sat(self) -> Self;
    /// Halves the value. Integer halving truncates toward zero.
    fn half(self) -> Self;
    /// Smaller of two values. Floats ignore a NaN operand.
    fn min_of(self, other: Self) -> Self;
    /// Larger of two values. Floats ignore a NaN operand.
    fn max_of(self, other: Self) -> Self;
    /// `max(self, 0)`, except that a float NaN stays NaN.
    fn clamp_non_negative(self) -> Self;
}

/// A numeric domain a rectangle can be built over.
pub trait Coord: Scalar {
    /// Type used for area and squared distance so neither overflows early.
    type Wide: Scalar;

    /// `min` component written by a failed intersection.
    const FAILED_MIN: Self;
    /// `max` component written by a failed intersection.
    const FAILED_MAX: Self;
    /// Encoded width in bytes of one coordinate in the flat layout.
    const WIDTH: usize;

    /// Lossless conversion into [`Coord::Wide`].
    fn widen(self) -> Self::Wide;

    /// Returns `true` if `self` is the `min` half of the failure sentinel.
    fn is_failed_min(self) -> bool;

    /// Returns `true` if `self` is the `max` half of the failure sentinel.
    fn is_failed_max(self) -> bool;

    /// Total order used for canonicalisation; floats use `total_cmp`.
    fn cmp_total(self, other: Self) -> Ordering;

    /// Bit pattern used by exact equality and hashing.
    ///
    /// Every NaN maps to the same canonical pattern; `-0.0` and `+0.0` stay
    /// distinct.
    fn canonical_bits(self) -> u64;

    /// Appends the big-endian encoding of `self`.
    fn put<B: BufMut>(self, buf: &mut B);

    /// Reads one big-endian coordinate. Callers check `remaining()` first.
    fn get<B: Buf>(buf: &mut B) -> Self;

    /// Renders `self` through `fmt`.
    fn render(self, fmt: &dyn NumberFormat) -> String;
}

/// Floating-point domains, which additionally support square roots.
pub trait Real: Coord<Wide = Self> {
    /// Square root.
    fn sqrt(self) -> Self;
}

/// One-way promotion from a lower-precision domain into `U`.
///
/// Implemented for `i32 → f32`, `i32 → f64`, `f32 → f64` and the identity on
/// each domain. There is deliberately no demotion.
pub trait Promote<U> {
    /// Converts `self` into the target domain.
    fn promote(self) -> U;
}

impl Scalar for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const TWO: Self = 2;

    fn add_sat(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }

    fn sub_sat(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }

    fn mul_sat(self, rhs: Self) -> Self {
        self.saturating_mul(rhs)
    }

    fn abs_sat(self) -> Self {
        self.saturating_abs()
    }

    fn half(self) -> Self {
        self / 2
    }

    fn min_of(self, other: Self) -> Self {
        Ord::min(self, other)
    }

    fn max_of(self, other: Self) -> Self {
        Ord::max(self, other)
    }

    fn clamp_non_negative(self) -> Self {
        Ord::max(self, 0)
    }
}

impl Scalar for i64 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const TWO: Self = 2;

    fn add_sat(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }

    fn sub_sat(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }

    fn mul_sat(self, rhs: Self) -> Self {
        self.saturating_mul(rhs)
    }

    fn abs_sat(self) -> Self {
        self.saturating_abs()
    }

    fn half(self) -> Self {
        self / 2
    }

    fn min_of(self, other: Self) -> Self {
        Ord::min(self, other)
    }

    fn max_of(self, other: Self) -> Self {
        Ord::max(self, other)
    }

    fn clamp_non_negative(self) -> Self {
        Ord::max(self, 0)
    }
}

macro_rules! float_scalar {
    ($t:ty) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;

            fn add_sat(self, rhs: Self) -> Self {
                self + rhs
            }

            fn sub_sat(self, rhs: Self) -> Self {
                self - rhs
            }

            fn mul_sat(self, rhs: Self) -> Self {
                self * rhs
            }

            fn abs_sat(self) -> Self {
                self.abs()
            }

            fn half(self) -> Self {
                self / 2.0
            }

            fn min_of(self, other: Self) -> Self {
                self.min(other)
            }

            fn max_of(self, other: Self) -> Self {
                self.max(other)
            }

            fn clamp_non_negative(self) -> Self {
                if self < 0.0 {
                    0.0
                } else {
                    self
                }
            }
        }

        impl Real for $t {
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }
        }
    };
}

float_scalar!(f32);
float_scalar!(f64);

impl Coord for i32 {
    type Wide = i64;

    const FAILED_MIN: Self = i32::MAX;
    const FAILED_MAX: Self = i32::MIN;
    const WIDTH: usize = 4;

    fn widen(self) -> i64 {
        i64::from(self)
    }

    fn is_failed_min(self) -> bool {
        self == Self::FAILED_MIN
    }

    fn is_failed_max(self) -> bool {
        self == Self::FAILED_MAX
    }

    fn cmp_total(self, other: Self) -> Ordering {
        self.cmp(&other)
    }

    #[allow(clippy::cast_sign_loss)]
    fn canonical_bits(self) -> u64 {
        u64::from(self as u32)
    }

    fn put<B: BufMut>(self, buf: &mut B) {
        buf.put_i32(self);
    }

    fn get<B: Buf>(buf: &mut B) -> Self {
        buf.get_i32()
    }

    fn render(self, fmt: &dyn NumberFormat) -> String {
        fmt.format_i64(i64::from(self))
    }
}

impl Coord for f32 {
    type Wide = f32;

    const FAILED_MIN: Self = f32::NAN;
    const FAILED_MAX: Self = f32::NAN;
    const WIDTH: usize = 4;

    fn widen(self) -> f32 {
        self
    }

    fn is_failed_min(self) -> bool {
        self.is_nan()
    }

    fn is_failed_max(self) -> bool {
        self.is_nan()
    }

    fn cmp_total(self, other: Self) -> Ordering {
        self.total_cmp(&other)
    }

    fn canonical_bits(self) -> u64 {
        if self.is_nan() {
            // Positive quiet NaN.
            u64::from(0x7fc0_0000_u32)
        } else {
            u64::from(self.to_bits())
        }
    }

    fn put<B: BufMut>(self, buf: &mut B) {
        buf.put_f32(self);
    }

    fn get<B: Buf>(buf: &mut B) -> Self {
        buf.get_f32()
    }

    fn render(self, fmt: &dyn NumberFormat) -> String {
        fmt.format_f64(f64::from(self))
    }
}

impl Coord for f64 {
    type Wide = f64;

    const FAILED_MIN: Self = f64::NAN;
    const FAILED_MAX: Self = f64::NAN;
    const WIDTH: usize = 8;

    fn widen(self) -> f64 {
        self
    }

    fn is_failed_min(self) -> bool {
        self.is_nan()
    }

    fn is_failed_max(self) -> bool {
        self.is_nan()
    }

    fn cmp_total(self, other: Self) -> Ordering {
        self.total_cmp(&other)
    }

    fn canonical_bits(self) -> u64 {
        if self.is_nan() {
            0x7ff8_0000_0000_0000
        } else {
            self.to_bits()
        }
    }

    fn put<B: BufMut>(self, buf: &mut B) {
        buf.put_f64(self);
    }

    fn get<B: Buf>(buf: &mut B) -> Self {
        buf.get_f64()
    }

    fn render(self, fmt: &dyn NumberFormat) -> String {
        fmt.format_f64(self)
    }
}

macro_rules! promote_identity {
    ($($t:ty),*) => {
        $(impl Promote<$t> for $t {
            fn promote(self) -> $t {
                self
            }
        })*
    };
}

promote_identity!(i32, f32, f64);

impl Promote<f32> for i32 {
    // Integers above 2^24 round to the nearest representable f32.
    #[allow(clippy::cast_precision_loss)]
    fn promote(self) -> f32 {
        self as f32
    }
}

impl Promote<f64> for i32 {
    fn promote(self) -> f64 {
        f64::from(self)
    }
}

impl Promote<f64> for f32 {
    fn promote(self) -> f64 {
        f64::from(self)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn integer_arithmetic_saturates() {
        assert_eq!(i32::MAX.add_sat(1), i32::MAX);
        assert_eq!(i32::MIN.sub_sat(1), i32::MIN);
        assert_eq!(i32::MAX.mul_sat(2), i32::MAX);
        assert_eq!(i32::MIN.abs_sat(), i32::MAX);
        assert_eq!(i64::MAX.mul_sat(i64::MAX), i64::MAX);
    }

    #[test]
    fn float_min_max_skip_nan() {
        assert_eq!(f32::NAN.min_of(3.0), 3.0);
        assert_eq!(f64::NAN.max_of(-2.0), -2.0);
        assert!(f32::NAN.min_of(f32::NAN).is_nan());
    }

    #[test]
    fn clamp_keeps_nan() {
        assert!(f32::NAN.clamp_non_negative().is_nan());
        assert!(f64::NAN.clamp_non_negative().is_nan());
        assert_eq!((-2.5_f64).clamp_non_negative(), 0.0);
        assert_eq!(3.0_f32.clamp_non_negative(), 3.0);
        assert_eq!((-7_i64).clamp_non_negative(), 0);
        assert_eq!(4_i32.clamp_non_negative(), 4);
    }

    #[test]
    fn canonical_bits_collapse_nan_and_keep_signed_zero() {
        let quiet = f64::NAN;
        let payload = f64::from_bits(0x7ff8_0000_0000_beef);
        assert_eq!(quiet.canonical_bits(), payload.canonical_bits());
        assert_ne!(0.0_f64.canonical_bits(), (-0.0_f64).canonical_bits());
        assert_ne!((-1_i32).canonical_bits(), 1_i32.canonical_bits());
    }

    #[test]
    fn sentinels_are_recognised() {
        assert!(i32::FAILED_MIN.is_failed_min());
        assert!(i32::FAILED_MAX.is_failed_max());
        assert!(!0_i32.is_failed_min());
        assert!(f32::FAILED_MIN.is_failed_min());
        assert!(!1.0_f64.is_failed_max());
    }

    #[test]
    fn promotion_is_exact_for_small_integers() {
        let p: f32 = 42_i32.promote();
        let q: f64 = (-7_i32).promote();
        let r: f64 = 0.5_f32.promote();
        assert_eq!(p, 42.0);
        assert_eq!(q, -7.0);
        assert_eq!(r, 0.5);
    }
}

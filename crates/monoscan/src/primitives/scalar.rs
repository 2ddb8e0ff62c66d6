//! Numeric value abstraction for arithmetic scans.
//!
//! The ordering-only scans (next warmer, 132 pattern, sliding extrema) need
//! nothing beyond `PartialOrd + Copy`. The histogram and prefix-sum scans
//! also add, subtract and multiply by a width, which is what `Scalar` covers.
//!
//! Integer arithmetic goes through the `num_traits` checked operations, so a
//! result that does not fit the value type is reported as `None` instead of
//! wrapping. Float arithmetic reports `None` when the result is not finite.

// External dependencies
use core::fmt::Debug;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Num};

/// A numeric element type usable by every scan in this crate.
pub trait Scalar: Num + Copy + PartialOrd + Debug {
    /// Convert a length (bar width) into the value domain, `None` if it does not fit.
    fn checked_from_len(n: usize) -> Option<Self>;

    /// `self + rhs`, `None` on overflow.
    fn checked_add_value(self, rhs: Self) -> Option<Self>;

    /// `self - rhs`, `None` on overflow.
    fn checked_sub_value(self, rhs: Self) -> Option<Self>;

    /// `self * rhs`, `None` on overflow.
    fn checked_mul_value(self, rhs: Self) -> Option<Self>;

    /// `false` for NaN and infinities, always `true` for integers.
    fn is_finite_value(self) -> bool;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn checked_from_len(n: usize) -> Option<Self> {
                    <$t>::try_from(n).ok()
                }

                #[inline]
                fn checked_add_value(self, rhs: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &rhs)
                }

                #[inline]
                fn checked_sub_value(self, rhs: Self) -> Option<Self> {
                    CheckedSub::checked_sub(&self, &rhs)
                }

                #[inline]
                fn checked_mul_value(self, rhs: Self) -> Option<Self> {
                    CheckedMul::checked_mul(&self, &rhs)
                }

                #[inline]
                fn is_finite_value(self) -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn checked_from_len(n: usize) -> Option<Self> {
                    Some(n as $t)
                }

                #[inline]
                fn checked_add_value(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs).filter(|v| v.is_finite())
                }

                #[inline]
                fn checked_sub_value(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs).filter(|v| v.is_finite())
                }

                #[inline]
                fn checked_mul_value(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs).filter(|v| v.is_finite())
                }

                #[inline]
                fn is_finite_value(self) -> bool {
                    self.is_finite()
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar_float!(f32, f64);

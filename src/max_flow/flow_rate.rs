//!
//! FlowRate trait for generics of Flow amount
//!
//! u32, u64, usize, i32 and i64 implements FlowRate
//!

use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

///
/// generic integer FlowRate
///
pub trait FlowRate:
    Copy
    + Eq
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
    + Sum
    + Default
    + std::fmt::Debug
    + std::fmt::Display
{
    /// zero value = 0
    fn zero() -> Self;
    /// true if the value is below zero. always false for unsigned types
    fn is_negative(self) -> bool;
    /// maximum value of the type
    fn max_value() -> Self;
    /// addition returning None on overflow
    fn checked_add(self, rhs: Self) -> Option<Self>;
    /// addition clamped at `max_value()`
    fn saturating_add(self, rhs: Self) -> Self;
    /// lossless widening, used in error reports
    fn to_i128(self) -> i128;
}

macro_rules! impl_unsigned_flow_rate {
    ($($t:ty),*) => {
        $(
            impl FlowRate for $t {
                fn zero() -> Self {
                    0
                }
                fn is_negative(self) -> bool {
                    false
                }
                fn max_value() -> Self {
                    <$t>::MAX
                }
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
                fn saturating_add(self, rhs: Self) -> Self {
                    <$t>::saturating_add(self, rhs)
                }
                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

macro_rules! impl_signed_flow_rate {
    ($($t:ty),*) => {
        $(
            impl FlowRate for $t {
                fn zero() -> Self {
                    0
                }
                fn is_negative(self) -> bool {
                    self < 0
                }
                fn max_value() -> Self {
                    <$t>::MAX
                }
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
                fn saturating_add(self, rhs: Self) -> Self {
                    <$t>::saturating_add(self, rhs)
                }
                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_unsigned_flow_rate!(u32, u64, usize);
impl_signed_flow_rate!(i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    fn add<F: FlowRate>(a: F, b: F) -> Option<F> {
        FlowRate::checked_add(a, b)
    }

    #[test]
    fn flow_rate_basic() {
        assert_eq!(<u32 as FlowRate>::zero(), 0);
        assert!(!FlowRate::is_negative(5u64));
        assert!(FlowRate::is_negative(-1i32));
        assert!(!FlowRate::is_negative(0i64));
        assert_eq!(add(3usize, 4), Some(7));
        assert_eq!(add(u32::MAX, 1), None);
        assert_eq!(add(i64::MAX, 1), None);
        assert_eq!(FlowRate::saturating_add(u32::MAX, 3), u32::MAX);
        assert_eq!(<u64 as FlowRate>::max_value(), u64::MAX);
        assert_eq!(FlowRate::to_i128(u64::MAX), u64::MAX as i128);
        assert_eq!(FlowRate::to_i128(-7i32), -7);
    }
}

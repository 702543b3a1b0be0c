// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Comparison Module** - *Lane-wise predicates returning lane masks*
//!
//! Each comparison yields a register of the *same* type as its inputs, with every lane either
//! all ones (true) or all zeros (false). For float registers a true lane is therefore a NaN bit
//! pattern; use `movemask` or `to_bitmask` to read the result as bits.
//!
//! Floats follow IEEE 754 ordering: any comparison involving NaN is false except `cmpneq`.

use core::simd::Select;
use core::simd::cmp::{SimdPartialEq, SimdPartialOrd};
use core::simd::Simd;

use crate::operators::ComparisonOperator;
use crate::simd::register::Register;
use crate::traits::lane::Lane;

/// Lane-wise comparisons.
pub trait SimdCompare: Register {
    /// `self == rhs`
    fn cmpeq(self, rhs: Self) -> Self;
    /// `self != rhs`
    fn cmpneq(self, rhs: Self) -> Self;
    /// `self > rhs`
    fn cmpgt(self, rhs: Self) -> Self;
    /// `self < rhs`
    fn cmplt(self, rhs: Self) -> Self;
    /// `self >= rhs`
    fn cmpge(self, rhs: Self) -> Self;
    /// `self <= rhs`
    fn cmple(self, rhs: Self) -> Self;

    /// Comparison result as one bit per lane, lane `i` in bit `i`.
    fn to_bitmask(self, rhs: Self, op: ComparisonOperator) -> u64;

    /// Dispatches on a `ComparisonOperator`.
    #[inline(always)]
    fn cmp(self, op: ComparisonOperator, rhs: Self) -> Self {
        match op {
            ComparisonOperator::Equals => self.cmpeq(rhs),
            ComparisonOperator::NotEquals => self.cmpneq(rhs),
            ComparisonOperator::LessThan => self.cmplt(rhs),
            ComparisonOperator::LessThanOrEqualTo => self.cmple(rhs),
            ComparisonOperator::GreaterThan => self.cmpgt(rhs),
            ComparisonOperator::GreaterThanOrEqualTo => self.cmpge(rhs),
        }
    }
}

macro_rules! impl_compare {
    ($($ty:ty),*) => {$(
        impl<const N: usize> SimdCompare for Simd<$ty, N>
        where
        {
            #[inline(always)]
            fn cmpeq(self, rhs: Self) -> Self {
                self.simd_eq(rhs).select(Simd::splat(<$ty>::all_ones()), Simd::splat(0 as $ty))
            }

            #[inline(always)]
            fn cmpneq(self, rhs: Self) -> Self {
                self.simd_ne(rhs).select(Simd::splat(<$ty>::all_ones()), Simd::splat(0 as $ty))
            }

            #[inline(always)]
            fn cmpgt(self, rhs: Self) -> Self {
                self.simd_gt(rhs).select(Simd::splat(<$ty>::all_ones()), Simd::splat(0 as $ty))
            }

            #[inline(always)]
            fn cmplt(self, rhs: Self) -> Self {
                self.simd_lt(rhs).select(Simd::splat(<$ty>::all_ones()), Simd::splat(0 as $ty))
            }

            #[inline(always)]
            fn cmpge(self, rhs: Self) -> Self {
                self.simd_ge(rhs).select(Simd::splat(<$ty>::all_ones()), Simd::splat(0 as $ty))
            }

            #[inline(always)]
            fn cmple(self, rhs: Self) -> Self {
                self.simd_le(rhs).select(Simd::splat(<$ty>::all_ones()), Simd::splat(0 as $ty))
            }

            #[inline(always)]
            fn to_bitmask(self, rhs: Self, op: ComparisonOperator) -> u64 {
                let m = match op {
                    ComparisonOperator::Equals => self.simd_eq(rhs),
                    ComparisonOperator::NotEquals => self.simd_ne(rhs),
                    ComparisonOperator::LessThan => self.simd_lt(rhs),
                    ComparisonOperator::LessThanOrEqualTo => self.simd_le(rhs),
                    ComparisonOperator::GreaterThan => self.simd_gt(rhs),
                    ComparisonOperator::GreaterThanOrEqualTo => self.simd_ge(rhs),
                };
                m.to_bitmask()
            }
        }
    )*};
}

impl_compare!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

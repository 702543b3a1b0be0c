// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Arithmetic Module** - *Lane-wise arithmetic and fused multiply-add family*
//!
//! ## Overview
//! Per-lane `add`, `sub`, `mul`, `div`, `rem`, `negate`, the alternating `addsub` / `subadd`
//! pair, and the fused family `fmadd`, `fmsub`, `fnmadd`, `fnmsub`, `fmaddsub`, `fmsubadd`.
//!
//! ## Element semantics
//! - **Floats**: IEEE 754. Fused operations round once, via `StdFloat::mul_add`.
//! - **Integers**: every step wraps. Division by a zero lane panics, as does `MIN / -1` for
//!   signed lanes.
//!
//! ## Remainder
//! `rem` is the truncated remainder `lhs - trunc(lhs / rhs) * rhs`, computed explicitly for every
//! element type. The sign of a non-zero result follows `lhs`.
//!
//! ## Alternating lanes
//! "Even" lanes are 0, 2, 4, ... `addsub` subtracts on even lanes and adds on odd lanes, as do the
//! native `addsub` instructions. `subadd` is the mirror image. `fmaddsub` computes
//! `a * b - c` on even lanes and `a * b + c` on odd lanes. `fmsubadd` is its mirror.

use core::simd::Simd;
use std::simd::StdFloat;

use crate::operators::{ArithmeticOperator, FusedOperator};
use crate::simd::register::Register;
use crate::utils::EVEN_LANES;

/// Lane-wise arithmetic.
pub trait SimdArithmetic: Register {
    /// `self + rhs`
    fn add(self, rhs: Self) -> Self;
    /// `self - rhs`
    fn sub(self, rhs: Self) -> Self;
    /// `self * rhs`
    fn mul(self, rhs: Self) -> Self;
    /// `self / rhs`
    fn div(self, rhs: Self) -> Self;
    /// Truncated remainder `self - trunc(self / rhs) * rhs`.
    fn rem(self, rhs: Self) -> Self;
    /// `-self` (integer lanes: `0 - self`, wrapping).
    fn negate(self) -> Self;

    /// `self * b + c`
    fn fmadd(self, b: Self, c: Self) -> Self;
    /// `self * b - c`
    fn fmsub(self, b: Self, c: Self) -> Self;
    /// `-(self * b) + c`
    fn fnmadd(self, b: Self, c: Self) -> Self;
    /// `-(self * b) - c`
    fn fnmsub(self, b: Self, c: Self) -> Self;

    /// Even lanes `self - rhs`, odd lanes `self + rhs`.
    #[inline(always)]
    fn addsub(self, rhs: Self) -> Self {
        Self::blend(EVEN_LANES, self.sub(rhs), self.add(rhs))
    }

    /// Even lanes `self + rhs`, odd lanes `self - rhs`.
    #[inline(always)]
    fn subadd(self, rhs: Self) -> Self {
        Self::blend(EVEN_LANES, self.add(rhs), self.sub(rhs))
    }

    /// Even lanes `self * b - c`, odd lanes `self * b + c`.
    #[inline(always)]
    fn fmaddsub(self, b: Self, c: Self) -> Self {
        Self::blend(EVEN_LANES, self.fmsub(b, c), self.fmadd(b, c))
    }

    /// Even lanes `self * b + c`, odd lanes `self * b - c`.
    #[inline(always)]
    fn fmsubadd(self, b: Self, c: Self) -> Self {
        Self::blend(EVEN_LANES, self.fmadd(b, c), self.fmsub(b, c))
    }

    /// Dispatches on an `ArithmeticOperator`.
    #[inline(always)]
    fn arithmetic(self, op: ArithmeticOperator, rhs: Self) -> Self {
        match op {
            ArithmeticOperator::Add => self.add(rhs),
            ArithmeticOperator::Subtract => self.sub(rhs),
            ArithmeticOperator::Multiply => self.mul(rhs),
            ArithmeticOperator::Divide => self.div(rhs),
            ArithmeticOperator::Remainder => self.rem(rhs),
        }
    }

    /// Dispatches on a `FusedOperator`, computing `op(self, b, c)`.
    #[inline(always)]
    fn fused(self, op: FusedOperator, b: Self, c: Self) -> Self {
        match op {
            FusedOperator::MulAdd => self.fmadd(b, c),
            FusedOperator::MulSub => self.fmsub(b, c),
            FusedOperator::NegMulAdd => self.fnmadd(b, c),
            FusedOperator::NegMulSub => self.fnmsub(b, c),
            FusedOperator::MulAddSub => self.fmaddsub(b, c),
            FusedOperator::MulSubAdd => self.fmsubadd(b, c),
        }
    }
}

macro_rules! impl_arithmetic_float {
    ($($ty:ty),*) => {$(
        impl<const N: usize> SimdArithmetic for Simd<$ty, N>
        where
        {
            #[inline(always)]
            fn add(self, rhs: Self) -> Self { self + rhs }

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self { self - rhs }

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self { self * rhs }

            #[inline(always)]
            fn div(self, rhs: Self) -> Self { self / rhs }

            #[inline(always)]
            fn rem(self, rhs: Self) -> Self {
                self - (self / rhs).trunc() * rhs
            }

            #[inline(always)]
            fn negate(self) -> Self { -self }

            #[inline(always)]
            fn fmadd(self, b: Self, c: Self) -> Self { self.mul_add(b, c) }

            #[inline(always)]
            fn fmsub(self, b: Self, c: Self) -> Self { self.mul_add(b, -c) }

            #[inline(always)]
            fn fnmadd(self, b: Self, c: Self) -> Self { (-self).mul_add(b, c) }

            #[inline(always)]
            fn fnmsub(self, b: Self, c: Self) -> Self { (-self).mul_add(b, -c) }
        }
    )*};
}

macro_rules! impl_arithmetic_int {
    ($($ty:ty),*) => {$(
        impl<const N: usize> SimdArithmetic for Simd<$ty, N>
        where
        {
            #[inline(always)]
            fn add(self, rhs: Self) -> Self { self + rhs }

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self { self - rhs }

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self { self * rhs }

            #[inline(always)]
            fn div(self, rhs: Self) -> Self { self / rhs }

            // Integer division already truncates.
            #[inline(always)]
            fn rem(self, rhs: Self) -> Self {
                self - (self / rhs) * rhs
            }

            #[inline(always)]
            fn negate(self) -> Self { Simd::splat(0) - self }

            #[inline(always)]
            fn fmadd(self, b: Self, c: Self) -> Self { self * b + c }

            #[inline(always)]
            fn fmsub(self, b: Self, c: Self) -> Self { self * b - c }

            #[inline(always)]
            fn fnmadd(self, b: Self, c: Self) -> Self { c - self * b }

            #[inline(always)]
            fn fnmsub(self, b: Self, c: Self) -> Self { Simd::splat(0) - self * b - c }
        }
    )*};
}

impl_arithmetic_float!(f32, f64);
impl_arithmetic_int!(i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use core::simd::{f32x4, f64x2, f64x4, i32x4, i8x16, u8x16};

    use super::*;

    #[test]
    fn test_add_then_sub_recovers_int() {
        let a = i8x16::from_array(core::array::from_fn(|i| ((i * 17) as i8).wrapping_sub(100)));
        let b = i8x16::splat(120);
        // wraps through overflow and back
        assert_eq!(a.add(b).sub(b), a);
        assert_eq!(u8x16::splat(250).add(u8x16::splat(10)), u8x16::splat(4));
    }

    #[test]
    fn test_truncated_remainder_sign_follows_lhs() {
        let a = f64x4::from_array([7.0, -7.0, 7.0, -7.0]);
        let b = f64x4::from_array([3.0, 3.0, -3.0, -3.0]);
        assert_eq!(a.rem(b).to_array(), [1.0, -1.0, 1.0, -1.0]);

        let a = i32x4::from_array([7, -7, 7, -7]);
        let b = i32x4::from_array([3, 3, -3, -3]);
        assert_eq!(a.rem(b).to_array(), [1, -1, 1, -1]);
    }

    #[test]
    fn test_negate() {
        assert_eq!(i32x4::from_array([1, -2, 0, i32::MIN]).negate().to_array(), [-1, 2, 0, i32::MIN]);
        assert_eq!(u8x16::splat(1).negate(), u8x16::splat(255));
        assert_eq!(f32x4::splat(2.0).negate(), f32x4::splat(-2.0));
    }

    #[test]
    fn test_alternating_lanes() {
        let a = f32x4::splat(10.0);
        let b = f32x4::splat(1.0);
        assert_eq!(a.addsub(b).to_array(), [9.0, 11.0, 9.0, 11.0]);
        assert_eq!(a.subadd(b).to_array(), [11.0, 9.0, 11.0, 9.0]);

        let c = f32x4::splat(0.5);
        assert_eq!(a.fmaddsub(b, c).to_array(), [9.5, 10.5, 9.5, 10.5]);
        assert_eq!(a.fmsubadd(b, c).to_array(), [10.5, 9.5, 10.5, 9.5]);
    }

    #[test]
    fn test_fused_family() {
        let a = i32x4::splat(3);
        let b = i32x4::splat(4);
        let c = i32x4::splat(5);
        assert_eq!(a.fmadd(b, c), i32x4::splat(17));
        assert_eq!(a.fmsub(b, c), i32x4::splat(7));
        assert_eq!(a.fnmadd(b, c), i32x4::splat(-7));
        assert_eq!(a.fnmsub(b, c), i32x4::splat(-17));

        let x = f64x2::splat(3.0);
        let y = f64x2::splat(4.0);
        let z = f64x2::splat(5.0);
        assert_eq!(x.fused(FusedOperator::MulAdd, y, z), f64x2::splat(17.0));
        assert_eq!(x.fused(FusedOperator::MulSub, y, z), f64x2::splat(7.0));
        assert_eq!(x.fused(FusedOperator::NegMulAdd, y, z), f64x2::splat(-7.0));
        assert_eq!(x.fused(FusedOperator::NegMulSub, y, z), f64x2::splat(-17.0));
    }

    #[test]
    fn test_fmadd_rounds_once() {
        // 1 + 2^-30 squared: the 2^-60 term survives only without an intermediate rounding.
        let e = 2f64.powi(-30);
        let a = f64x2::splat(1.0 + e);
        let c = f64x2::splat(-(1.0 + 2.0 * e));
        assert_eq!(a.fmadd(a, c)[0], e * e);
    }

    #[test]
    fn test_operator_dispatch() {
        let a = i32x4::from_array([8, 9, -9, 2]);
        let b = i32x4::from_array([2, 4, 4, 3]);
        assert_eq!(a.arithmetic(ArithmeticOperator::Add, b).to_array(), [10, 13, -5, 5]);
        assert_eq!(a.arithmetic(ArithmeticOperator::Subtract, b).to_array(), [6, 5, -13, -1]);
        assert_eq!(a.arithmetic(ArithmeticOperator::Multiply, b).to_array(), [16, 36, -36, 6]);
        assert_eq!(a.arithmetic(ArithmeticOperator::Divide, b).to_array(), [4, 2, -2, 0]);
        assert_eq!(a.arithmetic(ArithmeticOperator::Remainder, b).to_array(), [0, 1, -1, 2]);
    }

    #[test]
    #[should_panic]
    fn test_integer_division_by_zero_panics() {
        let _ = i32x4::splat(1).div(i32x4::splat(0));
    }
}

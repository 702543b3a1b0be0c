// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Rounding Module** - *Floor, ceil, trunc, round and abs*
//!
//! Results stay in the input representation. Integer registers are already integral so every
//! rounding operation is the identity on them, and `abs` is the identity on unsigned lanes.
//! Signed `abs` wraps, so `abs(MIN) == MIN`.

use core::simd::num::{SimdFloat, SimdInt};
use core::simd::Simd;
use std::simd::StdFloat;

use crate::operators::RoundingMode;
use crate::simd::register::Register;

/// Rounding to integral values and absolute value.
pub trait SimdRounding: Register {
    /// Round toward negative infinity.
    fn floor(self) -> Self;
    /// Round toward positive infinity.
    fn ceil(self) -> Self;
    /// Round toward zero.
    fn trunc(self) -> Self;
    /// Round to nearest, ties to even.
    fn round_nearest(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;

    /// Rounds in the direction selected by `mode`.
    #[inline(always)]
    fn round(self, mode: RoundingMode) -> Self {
        match mode {
            RoundingMode::Nearest => self.round_nearest(),
            RoundingMode::Floor => self.floor(),
            RoundingMode::Ceil => self.ceil(),
            RoundingMode::Truncate => self.trunc(),
        }
    }
}

macro_rules! impl_rounding_float {
    ($($ty:ty),*) => {$(
        impl<const N: usize> SimdRounding for Simd<$ty, N>
        where
        {
            #[inline(always)]
            fn floor(self) -> Self { StdFloat::floor(self) }

            #[inline(always)]
            fn ceil(self) -> Self { StdFloat::ceil(self) }

            #[inline(always)]
            fn trunc(self) -> Self { StdFloat::trunc(self) }

            #[inline(always)]
            fn round_nearest(self) -> Self {
                self.map_lanes(<$ty>::round_ties_even)
            }

            #[inline(always)]
            fn abs(self) -> Self { SimdFloat::abs(self) }
        }
    )*};
}

macro_rules! impl_rounding_signed {
    ($($ty:ty),*) => {$(
        impl<const N: usize> SimdRounding for Simd<$ty, N>
        where
        {
            #[inline(always)]
            fn floor(self) -> Self { self }

            #[inline(always)]
            fn ceil(self) -> Self { self }

            #[inline(always)]
            fn trunc(self) -> Self { self }

            #[inline(always)]
            fn round_nearest(self) -> Self { self }

            #[inline(always)]
            fn abs(self) -> Self { SimdInt::abs(self) }
        }
    )*};
}

macro_rules! impl_rounding_unsigned {
    ($($ty:ty),*) => {$(
        impl<const N: usize> SimdRounding for Simd<$ty, N>
        where
        {
            #[inline(always)]
            fn floor(self) -> Self { self }

            #[inline(always)]
            fn ceil(self) -> Self { self }

            #[inline(always)]
            fn trunc(self) -> Self { self }

            #[inline(always)]
            fn round_nearest(self) -> Self { self }

            #[inline(always)]
            fn abs(self) -> Self { self }
        }
    )*};
}

impl_rounding_float!(f32, f64);
impl_rounding_signed!(i8, i16, i32, i64);
impl_rounding_unsigned!(u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use core::simd::{f32x4, f64x4, i16x8, i32x4, u32x4};

    // Glob import would bring `StdFloat` in and make `floor` / `abs` ambiguous.
    use super::SimdRounding;
    use crate::operators::RoundingMode;

    #[test]
    fn test_float_directions() {
        let v = f64x4::from_array([1.5, -1.5, 2.5, -0.2]);
        assert_eq!(v.floor().to_array(), [1.0, -2.0, 2.0, -1.0]);
        assert_eq!(v.ceil().to_array(), [2.0, -1.0, 3.0, -0.0]);
        assert_eq!(v.trunc().to_array(), [1.0, -1.0, 2.0, -0.0]);
    }

    #[test]
    fn test_nearest_ties_to_even() {
        let v = f32x4::from_array([0.5, 1.5, 2.5, -2.5]);
        assert_eq!(v.round(RoundingMode::Nearest).to_array(), [0.0, 2.0, 2.0, -2.0]);
        assert_eq!(v.round(RoundingMode::Floor).to_array(), [0.0, 1.0, 2.0, -3.0]);
        assert_eq!(v.round(RoundingMode::Truncate).to_array(), [0.0, 1.0, 2.0, -2.0]);
    }

    #[test]
    fn test_integer_rounding_is_identity() {
        let v = i32x4::from_array([-3, 0, 7, i32::MAX]);
        for mode in [RoundingMode::Nearest, RoundingMode::Floor, RoundingMode::Ceil, RoundingMode::Truncate] {
            assert_eq!(v.round(mode), v);
        }
    }

    #[test]
    fn test_abs() {
        assert_eq!(f32x4::from_array([-1.0, 2.0, -0.0, -3.5]).abs().to_array(), [1.0, 2.0, 0.0, 3.5]);
        assert_eq!(i16x8::splat(-9).abs(), i16x8::splat(9));
        assert_eq!(i16x8::splat(i16::MIN).abs(), i16x8::splat(i16::MIN));
        assert_eq!(u32x4::splat(u32::MAX).abs(), u32x4::splat(u32::MAX));
    }
}

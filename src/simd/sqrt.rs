// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Square Root Module** - *sqrt and rsqrt over every lane type*
//!
//! Float registers use the hardware square root. Integer registers have no native instruction,
//! so each lane goes through a float intermediate and comes back with a truncating, saturating
//! conversion:
//!
//! | lanes | intermediate |
//! |-------|--------------|
//! | 8 / 16-bit | `f32` |
//! | 32 / 64-bit | `f64` |
//!
//! Precision is limited by the intermediate's mantissa: 64-bit lanes above 2^53 are rounded
//! before the root is taken. Negative signed lanes produce NaN in the intermediate and so
//! convert back to zero. Integer `rsqrt(0)` saturates to the lane maximum.

use core::simd::num::{SimdFloat, SimdInt, SimdUint};
use core::simd::Simd;
use std::simd::StdFloat;

use crate::simd::register::Register;

/// Square root and reciprocal square root.
pub trait SimdSqrt: Register {
    /// Lane-wise square root.
    fn sqrt(self) -> Self;
    /// Lane-wise `1 / sqrt(x)`.
    fn rsqrt(self) -> Self;
}

macro_rules! impl_sqrt_float {
    ($($ty:ty),*) => {$(
        impl<const N: usize> SimdSqrt for Simd<$ty, N>
        where
        {
            #[inline(always)]
            fn sqrt(self) -> Self { StdFloat::sqrt(self) }

            #[inline(always)]
            fn rsqrt(self) -> Self { Simd::splat(1.0) / StdFloat::sqrt(self) }
        }
    )*};
}

macro_rules! impl_sqrt_int {
    ($via:ty; $($ty:ty),*) => {$(
        impl<const N: usize> SimdSqrt for Simd<$ty, N>
        where
        {
            #[inline(always)]
            fn sqrt(self) -> Self {
                StdFloat::sqrt(self.cast::<$via>()).cast::<$ty>()
            }

            #[inline(always)]
            fn rsqrt(self) -> Self {
                let root = StdFloat::sqrt(self.cast::<$via>());
                (Simd::<$via, N>::splat(1.0) / root).cast::<$ty>()
            }
        }
    )*};
}

impl_sqrt_float!(f32, f64);
impl_sqrt_int!(f32; i8, u8, i16, u16);
impl_sqrt_int!(f64; i32, u32, i64, u64);

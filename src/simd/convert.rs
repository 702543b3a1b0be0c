// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Conversion Module** - *Numeric conversion between lane types*
//!
//! Value-converting counterparts of `cast_bits`.
//!
//! ## Semantics
//! - **`cvt`**: lane-wise `as` conversion. Float to integer truncates toward zero and saturates
//!   at the destination bounds, NaN becomes zero. Integer to integer keeps the low bits
//!   (narrowing wraps, widening sign- or zero-extends by source signedness).
//! - **`cvt_saturating`**: clamps every lane into the destination range, including
//!   integer narrowing (the `packs`/`packus` behaviour).
//! - **`cvt_rounded`**: applies a `RoundingMode` first, then `cvt`.
//! - **`cvt_resize`**: converts the low `min(N, M)` lanes into an `M`-lane register, zero-filling
//!   any extra lanes. This is the shape of the narrow-to-wide hardware converts, which consume
//!   only the low part of their source register.

use core::simd::Simd;

use crate::operators::RoundingMode;
use crate::simd::register::Register;
use crate::simd::rounding::SimdRounding;
use crate::traits::lane::Lane;

/// Numeric conversion between element representations.
pub trait SimdConvert: Register {
    /// The register with the same lane count and element type `U`.
    type Rebind<U: Lane>: Register<Element = U>;

    /// Lane-wise `as` conversion.
    fn cvt<U: Lane>(self) -> Self::Rebind<U>;

    /// Lane-wise conversion clamping to `U`'s range. NaN becomes zero.
    fn cvt_saturating<U: Lane>(self) -> Self::Rebind<U>;

    /// Converts the low lanes into a register of a different lane count.
    fn cvt_resize<U: Lane, const M: usize>(self) -> Simd<U, M>;

    /// Rounds with `mode`, then converts.
    #[inline(always)]
    fn cvt_rounded<U: Lane>(self, mode: RoundingMode) -> Self::Rebind<U>
    where
        Self: SimdRounding,
    {
        self.round(mode).cvt::<U>()
    }
}

impl<T: Lane, const N: usize> SimdConvert for Simd<T, N>
where
{
    type Rebind<U: Lane> = Simd<U, N>;

    #[inline(always)]
    fn cvt<U: Lane>(self) -> Simd<U, N> {
        self.cast::<U>()
    }

    #[inline(always)]
    fn cvt_saturating<U: Lane>(self) -> Simd<U, N> {
        let lanes = self.as_array();
        Simd::from_array(core::array::from_fn(|i| lanes[i].saturate_into::<U>()))
    }

    #[inline(always)]
    fn cvt_resize<U: Lane, const M: usize>(self) -> Simd<U, M>
    where
    {
        let converted = self.cast::<U>();
        let lanes = converted.as_array();
        Simd::from_array(core::array::from_fn(|i| if i < N { lanes[i] } else { U::ZERO }))
    }
}

#[cfg(test)]
mod tests {
    use core::simd::{f32x4, f64x2, i16x8, i32x4, i8x16, u32x4, u8x16};

    use super::*;

    #[test]
    fn test_float_to_int_truncates_toward_zero() {
        let v = f32x4::from_array([1.9, -1.9, 2.5, -0.5]);
        assert_eq!(v.cvt::<i32>().to_array(), [1, -1, 2, 0]);
    }

    #[test]
    fn test_float_to_int_saturates() {
        let v = f32x4::from_array([1e10, -1e10, f32::NAN, 255.9]);
        assert_eq!(v.cvt::<i32>().to_array(), [i32::MAX, i32::MIN, 0, 255]);
        assert_eq!(v.cvt::<u8>().to_array(), [255, 0, 0, 255]);
    }

    #[test]
    fn test_int_narrowing_keeps_low_bits() {
        let v = i32x4::from_array([256, 257, -1, 127]);
        assert_eq!(v.cvt::<u8>().to_array(), [0, 1, 255, 127]);
        assert_eq!(v.cvt_saturating::<u8>().to_array(), [255, 255, 0, 127]);
        assert_eq!(v.cvt_saturating::<i8>().to_array(), [127, 127, -1, 127]);
    }

    #[test]
    fn test_signed_unsigned_round_trip_for_small_values() {
        let v = i32x4::from_array([0, 1, 1000, i32::MAX]);
        let u: u32x4 = v.cvt::<u32>();
        assert_eq!(u.cvt::<i32>(), v);
    }

    #[test]
    fn test_rounded_conversion() {
        let v = f64x2::from_array([2.5, -2.5]);
        assert_eq!(v.cvt_rounded::<i64>(RoundingMode::Nearest).to_array(), [2, -2]);
        assert_eq!(v.cvt_rounded::<i64>(RoundingMode::Floor).to_array(), [2, -3]);
        assert_eq!(v.cvt_rounded::<i64>(RoundingMode::Ceil).to_array(), [3, -2]);
        assert_eq!(v.cvt_rounded::<i64>(RoundingMode::Truncate).to_array(), [2, -2]);
    }

    #[test]
    fn test_resize_widens_low_lanes() {
        let bytes = i8x16::from_array([-1, 2, -3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
        let wide = bytes.cvt_resize::<i32, 4>();
        assert_eq!(wide, i32x4::from_array([-1, 2, -3, 4]));
        let halves = bytes.cvt_resize::<i16, 8>();
        assert_eq!(halves, i16x8::from_array([-1, 2, -3, 4, 5, 6, 7, 8]));
    }

    #[test]
    fn test_resize_narrows_and_zero_fills() {
        let v = i32x4::from_array([1, 2, 300, 4]);
        let bytes: u8x16 = v.cvt_resize::<u8, 16>();
        assert_eq!(&bytes.to_array()[..4], &[1, 2, 44, 4]);
        assert!(bytes.to_array()[4..].iter().all(|&b| b == 0));
    }
}

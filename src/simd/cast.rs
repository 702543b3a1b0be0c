// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Bit Cast Module** - *Reinterpretation between register layouts*
//!
//! `cast_bits` reinterprets the byte image of one register as another register type without any
//! numeric conversion. When the destination is narrower the image is truncated to its low bytes;
//! when it is wider the extra bytes are zero. For numeric conversion see `convert.rs`.

use core::mem::size_of;
use core::ptr;

use crate::simd::register::Register;

/// Bit reinterpretation between any two registers.
pub trait BitCast: Register {
    /// Reinterprets the bytes of `self` as `R`, truncating or zero-extending the byte image.
    #[inline(always)]
    fn cast_bits<R: Register>(self) -> R {
        let mut out = R::zeroed();
        let n = size_of::<Self>().min(size_of::<R>());
        // SAFETY: both types are plain lane arrays with no padding or invalid bit patterns,
        // and `n` does not exceed either size.
        unsafe {
            ptr::copy_nonoverlapping(
                (&self as *const Self).cast::<u8>(),
                (&mut out as *mut R).cast::<u8>(),
                n,
            );
        }
        out
    }
}

impl<R: Register> BitCast for R {}

#[cfg(test)]
mod tests {
    use core::simd::{f32x4, f64x2, i32x4, i32x8, u16x8, u8x16, u64x2};

    use super::*;

    #[test]
    fn test_float_to_int_bits() {
        let v = f32x4::from_array([1.0, -0.0, 2.5, f32::INFINITY]);
        let bits: i32x4 = v.cast_bits();
        assert_eq!(bits[0] as u32, 1.0f32.to_bits());
        assert_eq!(bits[1] as u32, 0x8000_0000);
        assert_eq!(bits[3] as u32, f32::INFINITY.to_bits());
        let back: f32x4 = bits.cast_bits();
        assert_eq!(back.to_array().map(f32::to_bits), v.to_array().map(f32::to_bits));
    }

    #[test]
    fn test_lane_layout_change_is_little_endian_image() {
        let v = u64x2::from_array([0x0102_0304_0506_0708, 0]);
        let bytes: u8x16 = v.cast_bits();
        #[cfg(target_endian = "little")]
        assert_eq!(&bytes.to_array()[..8], &[8, 7, 6, 5, 4, 3, 2, 1]);
        let halves: u16x8 = v.cast_bits();
        #[cfg(target_endian = "little")]
        assert_eq!(halves[0], 0x0708);
    }

    #[test]
    fn test_widening_zero_extends() {
        let v = i32x4::from_array([-1, -1, -1, -1]);
        let wide: i32x8 = v.cast_bits();
        assert_eq!(wide.to_array(), [-1, -1, -1, -1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_narrowing_truncates() {
        let v = i32x8::from_array([1, 2, 3, 4, 5, 6, 7, 8]);
        let narrow: i32x4 = v.cast_bits();
        assert_eq!(narrow.to_array(), [1, 2, 3, 4]);
        let d: f64x2 = narrow.cast_bits();
        let again: i32x4 = d.cast_bits();
        assert_eq!(again, narrow);
    }
}

// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Construction Module** - *Set, mask and memory transfer operations*
//!
//! Register construction from scalars, bit masks and memory.
//!
//! ## Argument order
//! `set` follows the native `set` intrinsics: the **first** argument lands in the **highest**
//! lane. `setr` is memory order: the first argument is lane 0.
//!
//! ## Masks
//! `setmasked` maps bit `i` of the mask word to lane `i` (least-significant bit is lane 0);
//! `movemask` is its inverse, collecting each lane's most significant bit.
//!
//! ## Memory
//! `load` / `store` mirror the aligned intrinsics and are `unsafe`: the pointer must be aligned to
//! the register size and valid for `LANES` elements. `loadu` / `storeu` drop the alignment
//! requirement only. `load_slice` / `store_slice` are the checked counterparts of `loadu` /
//! `storeu`, and `load_aligned_slice` / `store_aligned_slice` of `load` / `store`.

use core::simd::Simd;

use crate::errors::MathError;
use crate::simd::register::Register;
use crate::traits::lane::Lane;
use crate::utils::{confirm_aligned, confirm_equal_len};

/// Construction, masking and memory transfer.
pub trait SimdConstruct: Register {
    /// Builds from lanes given highest-lane first: `values[0]` becomes lane `LANES - 1`.
    fn set(values: Self::Array) -> Self;

    /// Builds from lanes given in memory order: `values[0]` becomes lane 0.
    fn setr(values: Self::Array) -> Self;

    /// Broadcasts one scalar to every lane.
    fn set1(value: Self::Element) -> Self;

    /// All lanes zero.
    fn setzero() -> Self;

    /// Lane `i` is all ones when bit `i` of `bits` is set and all zeros otherwise.
    /// Bits at or above `LANES` are ignored.
    fn setmasked(bits: u64) -> Self;

    /// Collects the most significant bit of each lane, lane `i` into bit `i`.
    fn movemask(self) -> u64;

    /// Aligned load of `LANES` elements.
    ///
    /// # Safety
    /// `src` must be aligned to `size_of::<Self>()` and valid for reads of `LANES` elements.
    unsafe fn load(src: *const Self::Element) -> Self;

    /// Unaligned load of `LANES` elements.
    ///
    /// # Safety
    /// `src` must be valid for reads of `LANES` elements.
    unsafe fn loadu(src: *const Self::Element) -> Self;

    /// Aligned store of `LANES` elements.
    ///
    /// # Safety
    /// `dst` must be aligned to `size_of::<Self>()` and valid for writes of `LANES` elements.
    unsafe fn store(self, dst: *mut Self::Element);

    /// Unaligned store of `LANES` elements.
    ///
    /// # Safety
    /// `dst` must be valid for writes of `LANES` elements.
    unsafe fn storeu(self, dst: *mut Self::Element);

    /// Checked load from a slice of exactly `LANES` elements.
    fn load_slice(src: &[Self::Element]) -> Result<Self, MathError>;

    /// Checked store into a slice of exactly `LANES` elements.
    fn store_slice(self, dst: &mut [Self::Element]) -> Result<(), MathError>;

    /// Checked aligned load: `src` must hold exactly `LANES` elements and start on a
    /// register-size boundary, otherwise `LengthMismatch` or `Misaligned`.
    fn load_aligned_slice(src: &[Self::Element]) -> Result<Self, MathError>;

    /// Checked aligned store, with the same requirements as `load_aligned_slice`.
    fn store_aligned_slice(self, dst: &mut [Self::Element]) -> Result<(), MathError>;

    /// Loads up to `LANES` elements from `src`, filling the missing lanes with `fill`.
    fn load_partial(src: &[Self::Element], fill: Self::Element) -> Self;
}

impl<T: Lane, const N: usize> SimdConstruct for Simd<T, N>
where
{
    #[inline(always)]
    fn set(values: [T; N]) -> Self {
        let mut lanes = values;
        lanes.reverse();
        Simd::from_array(lanes)
    }

    #[inline(always)]
    fn setr(values: [T; N]) -> Self {
        Simd::from_array(values)
    }

    #[inline(always)]
    fn set1(value: T) -> Self {
        Simd::splat(value)
    }

    #[inline(always)]
    fn setzero() -> Self {
        Simd::splat(T::ZERO)
    }

    #[inline(always)]
    fn setmasked(bits: u64) -> Self {
        Simd::from_array(core::array::from_fn(|i| {
            if (bits >> i) & 1 == 1 {
                T::all_ones()
            } else {
                T::ZERO
            }
        }))
    }

    #[inline(always)]
    fn movemask(self) -> u64 {
        let mut bits = 0u64;
        for (i, lane) in self.as_array().iter().enumerate() {
            if lane.sign_bit() {
                bits |= 1 << i;
            }
        }
        bits
    }

    #[inline(always)]
    unsafe fn load(src: *const T) -> Self {
        debug_assert!(src as usize % core::mem::align_of::<Self>() == 0, "unaligned load");
        unsafe { src.cast::<Self>().read() }
    }

    #[inline(always)]
    unsafe fn loadu(src: *const T) -> Self {
        unsafe { src.cast::<Self>().read_unaligned() }
    }

    #[inline(always)]
    unsafe fn store(self, dst: *mut T) {
        debug_assert!(dst as usize % core::mem::align_of::<Self>() == 0, "unaligned store");
        unsafe { dst.cast::<Self>().write(self) }
    }

    #[inline(always)]
    unsafe fn storeu(self, dst: *mut T) {
        unsafe { dst.cast::<Self>().write_unaligned(self) }
    }

    #[inline(always)]
    fn load_slice(src: &[T]) -> Result<Self, MathError> {
        confirm_equal_len("load_slice", src.len(), N)?;
        Ok(Simd::from_slice(src))
    }

    #[inline(always)]
    fn store_slice(self, dst: &mut [T]) -> Result<(), MathError> {
        confirm_equal_len("store_slice", dst.len(), N)?;
        self.copy_to_slice(dst);
        Ok(())
    }

    #[inline(always)]
    fn load_aligned_slice(src: &[T]) -> Result<Self, MathError> {
        confirm_equal_len("load_aligned_slice", src.len(), N)?;
        confirm_aligned("load_aligned_slice", src.as_ptr(), core::mem::align_of::<Self>())?;
        // SAFETY: length and alignment checked above
        Ok(unsafe { Self::load(src.as_ptr()) })
    }

    #[inline(always)]
    fn store_aligned_slice(self, dst: &mut [T]) -> Result<(), MathError> {
        confirm_equal_len("store_aligned_slice", dst.len(), N)?;
        confirm_aligned("store_aligned_slice", dst.as_ptr(), core::mem::align_of::<Self>())?;
        // SAFETY: length and alignment checked above
        unsafe { self.store(dst.as_mut_ptr()) };
        Ok(())
    }

    #[inline(always)]
    fn load_partial(src: &[T], fill: T) -> Self {
        let mut lanes = [fill; N];
        let n = src.len().min(N);
        lanes[..n].copy_from_slice(&src[..n]);
        Simd::from_array(lanes)
    }
}

#[cfg(test)]
mod tests {
    use core::simd::{f32x4, f64x2, i16x8, u8x16};

    use super::*;

    #[test]
    fn test_set_is_highest_lane_first() {
        let v = f32x4::set([4.0, 3.0, 2.0, 1.0]);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
        let r = f32x4::setr([4.0, 3.0, 2.0, 1.0]);
        assert_eq!(r.to_array(), [4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_set1_and_setzero() {
        assert_eq!(i16x8::set1(-3).to_array(), [-3; 8]);
        assert_eq!(u8x16::setzero().to_array(), [0; 16]);
    }

    #[test]
    fn test_setmasked_lsb_is_lane_zero() {
        let v = f64x2::setmasked(0b01);
        assert_eq!(v[0].to_bits(), u64::MAX);
        assert_eq!(v[1].to_bits(), 0);

        let w = i16x8::setmasked(0b1000_0010);
        assert_eq!(w.to_array(), [0, -1, 0, 0, 0, 0, 0, -1]);
    }

    #[test]
    fn test_setmasked_ignores_high_bits() {
        let v = u8x16::setmasked(u64::MAX);
        assert_eq!(v.to_array(), [0xff; 16]);
        assert_eq!(v.movemask(), 0xffff);
    }

    #[test]
    fn test_movemask_inverts_setmasked() {
        for bits in [0u64, 1, 0b1010, 0b0110, 0b1111] {
            assert_eq!(f32x4::setmasked(bits).movemask(), bits);
        }
        let signs = f32x4::setr([-1.0, 2.0, -0.0, 4.0]);
        assert_eq!(signs.movemask(), 0b0101);
    }

    #[test]
    fn test_aligned_load_store() {
        #[repr(align(64))]
        struct Aligned([f32; 16]);

        let src = Aligned(core::array::from_fn(|i| i as f32));
        let v = unsafe { f32x4::load(src.0.as_ptr().add(4)) };
        assert_eq!(v.to_array(), [4.0, 5.0, 6.0, 7.0]);

        let mut dst = Aligned([0.0; 16]);
        unsafe { v.store(dst.0.as_mut_ptr()) };
        assert_eq!(&dst.0[..4], &[4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_unaligned_load_store() {
        let src: [u8; 17] = core::array::from_fn(|i| i as u8);
        let v = unsafe { u8x16::loadu(src.as_ptr().add(1)) };
        assert_eq!(v[0], 1);
        assert_eq!(v[15], 16);
        let mut dst = [0u8; 17];
        unsafe { v.storeu(dst.as_mut_ptr().add(1)) };
        assert_eq!(&dst[1..], &src[1..]);
    }

    #[test]
    fn test_checked_slice_transfer() {
        let v = f32x4::load_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert!(matches!(
            f32x4::load_slice(&[1.0, 2.0]),
            Err(MathError::LengthMismatch(_))
        ));
        let mut out = [0.0f32; 3];
        assert!(v.store_slice(&mut out).is_err());
        let mut out = [0.0f32; 4];
        v.store_slice(&mut out).unwrap();
        assert_eq!(out, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_checked_aligned_transfer() {
        #[repr(align(64))]
        struct Aligned([f32; 16]);

        let src = Aligned(core::array::from_fn(|i| i as f32));
        let v = f32x4::load_aligned_slice(&src.0[4..8]).unwrap();
        assert_eq!(v.to_array(), [4.0, 5.0, 6.0, 7.0]);
        assert!(matches!(
            f32x4::load_aligned_slice(&src.0[1..5]),
            Err(MathError::Misaligned(_))
        ));
        assert!(matches!(
            f32x4::load_aligned_slice(&src.0[..3]),
            Err(MathError::LengthMismatch(_))
        ));

        let mut dst = Aligned([0.0; 16]);
        v.store_aligned_slice(&mut dst.0[..4]).unwrap();
        assert_eq!(&dst.0[..4], &[4.0, 5.0, 6.0, 7.0]);
        assert!(matches!(
            v.store_aligned_slice(&mut dst.0[2..6]),
            Err(MathError::Misaligned(_))
        ));
    }

    #[test]
    fn test_load_partial_fills_tail() {
        let v = f32x4::load_partial(&[7.0, 8.0], 1.0);
        assert_eq!(v.to_array(), [7.0, 8.0, 1.0, 1.0]);
    }
}

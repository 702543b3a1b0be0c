// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Validation and Lane Pattern Helpers*
//!
//! Small helpers shared by the register table, the bulk slice kernels and the
//! matrix/vector layer.

use crate::config::SIMD_ALIGNMENT;
use crate::errors::{MathError, log_length_mismatch};

/// Bitmask with every even lane (0, 2, 4, ...) set, in `setmasked` / `Mask::from_bitmask` order.
///
/// Used by the alternating `addsub` / `subadd` / `fmaddsub` / `fmsubadd` operations.
pub const EVEN_LANES: u64 = 0x5555_5555_5555_5555;

/// Bitmask covering the low `lanes` lanes.
#[inline(always)]
pub const fn low_lanes(lanes: usize) -> u64 {
    if lanes >= 64 { u64::MAX } else { (1u64 << lanes) - 1 }
}

/// Sign of the `(column, row)` cell in the cofactor checkerboard: `true` when the cell is negated.
#[inline(always)]
pub const fn checkerboard_negative(column: usize, row: usize) -> bool {
    (column + row) % 2 == 1
}

/// Validates that two lengths are equal for binary operations.
///
/// # Returns
/// `Ok(())` if lengths are equal, otherwise `MathError::LengthMismatch` with diagnostic details.
#[inline(always)]
pub fn confirm_equal_len(label: &str, a: usize, b: usize) -> Result<(), MathError> {
    if a != b {
        return Err(MathError::LengthMismatch(log_length_mismatch(label, a, b)));
    }
    Ok(())
}

/// Validates a runtime index against a fixed dimension.
#[inline(always)]
pub fn confirm_index(label: &str, index: usize, bound: usize) -> Result<(), MathError> {
    if index >= bound {
        return Err(MathError::OutOfBounds(format!(
            "{}: index {} outside 0..{}",
            label, index, bound
        )));
    }
    Ok(())
}

/// Validates that `ptr` sits on an `align`-byte boundary.
///
/// # Returns
/// `Ok(())` when aligned, otherwise `MathError::Misaligned` naming the address and requirement.
#[inline(always)]
pub fn confirm_aligned<T>(label: &str, ptr: *const T, align: usize) -> Result<(), MathError> {
    let addr = ptr as usize;
    if addr % align != 0 {
        return Err(MathError::Misaligned(format!(
            "{}: address {:#x} not aligned to {} bytes",
            label, addr, align
        )));
    }
    Ok(())
}

/// SIMD Alignment check. Returns true if the slice is properly
/// `SIMD_ALIGNMENT`-byte aligned for the register path, false otherwise.
#[inline(always)]
pub fn is_simd_aligned<T>(slice: &[T]) -> bool {
    if slice.is_empty() {
        true
    } else {
        (slice.as_ptr() as usize) % SIMD_ALIGNMENT == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_lanes() {
        assert_eq!(low_lanes(0), 0);
        assert_eq!(low_lanes(2), 0b11);
        assert_eq!(low_lanes(64), u64::MAX);
    }

    #[test]
    fn test_checkerboard() {
        assert!(!checkerboard_negative(0, 0));
        assert!(checkerboard_negative(1, 0));
        assert!(checkerboard_negative(0, 3));
        assert!(!checkerboard_negative(2, 2));
    }

    #[test]
    fn test_confirm_helpers() {
        assert!(confirm_equal_len("add", 4, 4).is_ok());
        assert!(matches!(
            confirm_equal_len("add", 4, 3),
            Err(MathError::LengthMismatch(_))
        ));
        assert!(matches!(confirm_index("at", 4, 4), Err(MathError::OutOfBounds(_))));
        let words = [0u64; 2];
        assert!(confirm_aligned("load", words.as_ptr(), 8).is_ok());
        assert!(matches!(
            confirm_aligned("load", (words.as_ptr() as *const u8).wrapping_add(1), 8),
            Err(MathError::Misaligned(_))
        ));
    }

    #[test]
    fn test_alignment_of_vec64() {
        let mut v = minarrow::Vec64::<f32>::with_capacity(16);
        v.extend_from_slice(&[1.0; 16]);
        assert!(is_simd_aligned(&v[..]));
        assert!(!is_simd_aligned(&v[1..]));
    }
}

//! # **Lane trait** - *Scalar element descriptor for register lanes*

// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use core::fmt::Debug;
use core::hash::Hash;
use core::simd::{SimdCast, SimdElement};

use num_traits::{Bounded, NumCast, One, PrimInt};

/// Element type of a SIMD register lane.
///
/// Unifies the per-type facts the operation table needs: the bit image of a lane, its
/// signedness and float-ness, and the scalar identities. Implemented for the ten element
/// kinds the table supports: `f32`, `f64`, `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`, `u64`.
///
/// # Implementation Requirements
/// `Bits` must be the unsigned integer of the same width, and `to_lane_bits` /
/// `from_lane_bits` must be exact inverses, preserving NaN payloads and signed zeros.
pub trait Lane:
    SimdElement
    + SimdCast
    + Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + NumCast
    + Bounded
    + Send
    + Sync
    + 'static
{
    /// The unsigned integer type representing the bit pattern of one lane.
    type Bits: PrimInt + Hash + Debug;

    /// Lane width in bits.
    const BITS: u32;
    /// True for `f32` / `f64`.
    const IS_FLOAT: bool;
    /// True for signed integers and floats.
    const IS_SIGNED: bool;
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// Returns the raw bit pattern of the lane.
    fn to_lane_bits(self) -> Self::Bits;

    /// Rebuilds a lane from its raw bit pattern.
    fn from_lane_bits(bits: Self::Bits) -> Self;

    /// The most significant bit of the lane's bit image.
    #[inline(always)]
    fn sign_bit(self) -> bool {
        let bits = self.to_lane_bits();
        (bits >> (Self::BITS as usize - 1)) & Self::Bits::one() == Self::Bits::one()
    }

    /// A lane with every bit set (NaN for float lanes).
    #[inline(always)]
    fn all_ones() -> Self {
        Self::from_lane_bits(Self::Bits::max_value())
    }

    /// True only for float NaN lanes.
    #[inline(always)]
    #[allow(clippy::eq_op)]
    fn is_nan_lane(self) -> bool {
        self != self
    }

    /// Converts into `U`, clamping out-of-range values to `U`'s bounds.
    ///
    /// Fractions truncate toward zero. NaN maps to zero.
    #[inline(always)]
    fn saturate_into<U: Lane>(self) -> U {
        if self.is_nan_lane() {
            return U::ZERO;
        }
        match <U as NumCast>::from(self) {
            Some(v) => v,
            None if self < Self::ZERO => U::min_value(),
            None => U::max_value(),
        }
    }
}

macro_rules! impl_lane_int {
    ($ty:ty, $bits:ty, $signed:expr) => {
        impl Lane for $ty {
            type Bits = $bits;
            const BITS: u32 = <$ty>::BITS;
            const IS_FLOAT: bool = false;
            const IS_SIGNED: bool = $signed;
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline(always)]
            fn to_lane_bits(self) -> $bits {
                self as $bits
            }

            #[inline(always)]
            fn from_lane_bits(bits: $bits) -> Self {
                bits as $ty
            }
        }
    };
}

macro_rules! impl_lane_float {
    ($ty:ty, $bits:ty) => {
        impl Lane for $ty {
            type Bits = $bits;
            const BITS: u32 = <$bits>::BITS;
            const IS_FLOAT: bool = true;
            const IS_SIGNED: bool = true;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline(always)]
            fn to_lane_bits(self) -> $bits {
                <$ty>::to_bits(self)
            }

            #[inline(always)]
            fn from_lane_bits(bits: $bits) -> Self {
                <$ty>::from_bits(bits)
            }
        }
    };
}

impl_lane_int!(i8, u8, true);
impl_lane_int!(i16, u16, true);
impl_lane_int!(i32, u32, true);
impl_lane_int!(i64, u64, true);
impl_lane_int!(u8, u8, false);
impl_lane_int!(u16, u16, false);
impl_lane_int!(u32, u32, false);
impl_lane_int!(u64, u64, false);
impl_lane_float!(f32, u32);
impl_lane_float!(f64, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_round_trip_preserves_special_floats() {
        for v in [0.0f32, -0.0, f32::INFINITY, f32::NEG_INFINITY, 1.5] {
            assert_eq!(f32::from_lane_bits(v.to_lane_bits()).to_bits(), v.to_bits());
        }
        let nan = f64::from_bits(0x7ff8_0000_dead_beef);
        assert_eq!(f64::from_lane_bits(nan.to_lane_bits()).to_bits(), 0x7ff8_0000_dead_beef);
    }

    #[test]
    fn test_sign_bit_and_all_ones() {
        assert!((-1i8).sign_bit());
        assert!(!(127i8).sign_bit());
        assert!((0x80u8).sign_bit());
        assert!((-0.0f32).sign_bit());
        assert_eq!(u16::all_ones(), u16::MAX);
        assert_eq!(i32::all_ones(), -1);
        assert!(f64::all_ones().is_nan());
    }

    #[test]
    fn test_saturate_into() {
        assert_eq!(300i32.saturate_into::<u8>(), 255);
        assert_eq!((-5i32).saturate_into::<u8>(), 0);
        assert_eq!((-200i16).saturate_into::<i8>(), -128);
        assert_eq!(3.9f32.saturate_into::<i32>(), 3);
        assert_eq!((-3.9f64).saturate_into::<i16>(), -3);
        assert_eq!(1e20f64.saturate_into::<i32>(), i32::MAX);
        assert_eq!(f32::NAN.saturate_into::<u16>(), 0);
        assert_eq!(u64::MAX.saturate_into::<i64>(), i64::MAX);
    }
}

// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Register Module** - *Base register trait and native lane descriptors*
//!
//! Every register in the table is a `core::simd::Simd<T, N>`. The pair (`T: Lane`, `N`) is the
//! lane descriptor: element kind plus lane count. `Register` exposes that descriptor to generic
//! code together with the lane-level plumbing every other table trait builds on.

include!(concat!(env!("OUT_DIR"), "/simd_lanes.rs"));

use core::fmt::Debug;
use core::simd::Select;
use core::simd::{Mask, Simd};

use crate::simd::SimdRegister;
use crate::traits::lane::Lane;
use crate::utils::low_lanes;

/// A hardware vector register value: a fixed group of lanes, copied by value, never aliased.
pub trait Register: Copy + Debug + PartialEq + Send + Sync + 'static {
    /// Lane element type.
    type Element: Lane;

    /// Plain array with one slot per lane.
    type Array: Copy + Debug + AsRef<[Self::Element]> + AsMut<[Self::Element]>;

    /// Number of lanes.
    const LANES: usize;

    /// Total register width in bits.
    const WIDTH_BITS: usize = Self::LANES * <Self::Element as Lane>::BITS as usize;

    /// Builds a register from lanes in memory order (index 0 is lane 0).
    fn from_array(values: Self::Array) -> Self;

    /// Copies the lanes out in memory order.
    fn to_array(self) -> Self::Array;

    /// Reads lane `index`. Panics if `index >= LANES`.
    fn lane(self, index: usize) -> Self::Element;

    /// Returns a copy with lane `index` replaced. Panics if `index >= LANES`.
    fn replace_lane(self, index: usize, value: Self::Element) -> Self;

    /// All-zero register.
    fn zeroed() -> Self;

    /// Lane-wise select: lane `i` comes from `on` when bit `i` of `bits` is set, else from `off`.
    fn blend(bits: u64, on: Self, off: Self) -> Self;

    /// Applies `f` to every lane.
    fn map_lanes(self, f: impl Fn(Self::Element) -> Self::Element) -> Self;
}

impl<T: Lane, const N: usize> Register for Simd<T, N>
where
{
    type Element = T;
    type Array = [T; N];
    const LANES: usize = N;

    #[inline(always)]
    fn from_array(values: [T; N]) -> Self {
        Simd::from_array(values)
    }

    #[inline(always)]
    fn to_array(self) -> [T; N] {
        *self.as_array()
    }

    #[inline(always)]
    fn lane(self, index: usize) -> T {
        self[index]
    }

    #[inline(always)]
    fn replace_lane(self, index: usize, value: T) -> Self {
        let mut out = self;
        out[index] = value;
        out
    }

    #[inline(always)]
    fn zeroed() -> Self {
        Simd::splat(T::ZERO)
    }

    #[inline(always)]
    fn blend(bits: u64, on: Self, off: Self) -> Self {
        Mask::<T::Mask, N>::from_bitmask(bits & low_lanes(N)).select(on, off)
    }

    #[inline(always)]
    fn map_lanes(self, f: impl Fn(T) -> T) -> Self {
        let lanes = self.as_array();
        Simd::from_array(core::array::from_fn(|i| f(lanes[i])))
    }
}

/// Binds each lane type to its native-width register and a single-lane register.
///
/// The native register holds as many lanes as fit the target's widest enabled register
/// (`W8`..`W64` from `build.rs`). The single-lane register runs the same table one element at a
/// time, which is how the bulk kernels keep scalar and vector paths bit-identical.
pub trait NativeLane: Lane {
    /// Widest register for this lane type on the build target.
    type Native: SimdRegister<Element = Self>;
    /// One-lane register used by scalar paths.
    type Single: SimdRegister<Element = Self>;
}

macro_rules! impl_native_lane {
    ($ty:ty, $lanes:expr) => {
        impl NativeLane for $ty {
            type Native = Simd<$ty, $lanes>;
            type Single = Simd<$ty, 1>;
        }
    };
}

impl_native_lane!(i8, W8);
impl_native_lane!(u8, W8);
impl_native_lane!(i16, W16);
impl_native_lane!(u16, W16);
impl_native_lane!(i32, W32);
impl_native_lane!(u32, W32);
impl_native_lane!(f32, W32);
impl_native_lane!(i64, W64);
impl_native_lane!(u64, W64);
impl_native_lane!(f64, W64);

/// Native-width `f32` register.
pub type NativeF32 = Simd<f32, W32>;
/// Native-width `f64` register.
pub type NativeF64 = Simd<f64, W64>;
/// Native-width `i8` register.
pub type NativeI8 = Simd<i8, W8>;
/// Native-width `i16` register.
pub type NativeI16 = Simd<i16, W16>;
/// Native-width `i32` register.
pub type NativeI32 = Simd<i32, W32>;
/// Native-width `i64` register.
pub type NativeI64 = Simd<i64, W64>;
/// Native-width `u8` register.
pub type NativeU8 = Simd<u8, W8>;
/// Native-width `u16` register.
pub type NativeU16 = Simd<u16, W16>;
/// Native-width `u32` register.
pub type NativeU32 = Simd<u32, W32>;
/// Native-width `u64` register.
pub type NativeU64 = Simd<u64, W64>;

// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **SIMD Operation Table** - *One generic function surface for every register*
//!
//! Every `(element type, lane count)` register exposes the same catalogue of pure operations,
//! so generic code written once against `SimdRegister` is instantiated per width by the compiler:
//!
//! | Trait | Operations |
//! |-------|------------|
//! | [`Register`] | lane descriptor, array round trip, lane access, `blend` |
//! | [`SimdConstruct`] | `set`, `setr`, `set1`, `setzero`, `setmasked`, `movemask`, `load`, `loadu`, `store`, `storeu` |
//! | [`BitCast`] | `cast_bits` |
//! | [`SimdConvert`] | `cvt`, `cvt_saturating`, `cvt_rounded`, `cvt_resize` |
//! | [`SimdCompare`] | `cmpeq`, `cmpneq`, `cmpgt`, `cmplt`, `cmpge`, `cmple` |
//! | [`SimdArithmetic`] | `add`, `sub`, `mul`, `div`, `rem`, `negate`, `addsub`, `subadd`, fused family |
//! | [`SimdRounding`] | `floor`, `ceil`, `trunc`, `round`, `abs` |
//! | [`SimdSqrt`] | `sqrt`, `rsqrt` |
//!
//! Registers are `core::simd::Simd<T, N>` for the ten lane types in [`Lane`](crate::traits::lane::Lane)
//! and every supported lane count. The native width per lane type is fixed at build time
//! (`W8`, `W16`, `W32`, `W64`); see `build.rs`.
//!
//! ## Safety
//! `load`, `loadu`, `store` and `storeu` are `unsafe` and unchecked, like the intrinsics they
//! mirror. Everything else is safe; the checked slice transfers return `MathError`.
//!
//! ## Bulk kernels
//! [`dispatch`] runs the table over whole slices.

pub mod arithmetic;
pub mod cast;
pub mod compare;
pub mod construct;
pub mod convert;
pub mod dispatch;
pub mod register;
pub mod rounding;
pub mod sqrt;

pub use arithmetic::SimdArithmetic;
pub use cast::BitCast;
pub use compare::SimdCompare;
pub use construct::SimdConstruct;
pub use convert::SimdConvert;
pub use register::{
    NativeF32, NativeF64, NativeI8, NativeI16, NativeI32, NativeI64, NativeLane, NativeU8,
    NativeU16, NativeU32, NativeU64, REGISTER_BITS, Register, W8, W16, W32, W64,
};
pub use rounding::SimdRounding;
pub use sqrt::SimdSqrt;

pub use core::simd::{
    f32x2, f32x4, f32x8, f32x16, f64x2, f64x4, f64x8, i8x16, i8x32, i8x64, i16x8, i16x16, i16x32,
    i32x4, i32x8, i32x16, i64x2, i64x4, i64x8, u8x16, u8x32, u8x64, u16x8, u16x16, u16x32, u32x4,
    u32x8, u32x16, u64x2, u64x4, u64x8,
};

/// The full operation table.
///
/// Implemented for every `Simd<T, N>` with `T` one of the ten lane types and `N` a supported lane
/// count. Bound on this trait to write width-generic register code.
pub trait SimdRegister:
    Register
    + SimdConstruct
    + BitCast
    + SimdConvert
    + SimdCompare
    + SimdArithmetic
    + SimdRounding
    + SimdSqrt
{
}

impl<R> SimdRegister for R where
    R: Register
        + SimdConstruct
        + BitCast
        + SimdConvert
        + SimdCompare
        + SimdArithmetic
        + SimdRounding
        + SimdSqrt
{
}

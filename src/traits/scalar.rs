//! # **Scalar trait** - *Element bound for vectors and matrices*

// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use core::fmt::Debug;

use num_traits::{Num, NumCast};

/// Element type of a [`Vector`](crate::linalg::Vector) or [`Matrix`](crate::linalg::Matrix).
///
/// Implemented for the primitive integer and float types. Zero and one come from `num_traits`,
/// which is how identity construction and determinant expansion obtain the additive and
/// multiplicative identities for the element type.
///
/// The `wrap_*` methods are the arithmetic used inside determinant expansion, where unsigned
/// intermediates routinely pass below zero. They wrap for integers and are the plain IEEE
/// operations for floats.
pub trait Scalar: Num + NumCast + Copy + PartialOrd + Debug + Send + Sync + 'static {
    fn wrap_add(self, rhs: Self) -> Self;
    fn wrap_sub(self, rhs: Self) -> Self;
    fn wrap_mul(self, rhs: Self) -> Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline(always)]
            fn wrap_add(self, rhs: Self) -> Self { self.wrapping_add(rhs) }
            #[inline(always)]
            fn wrap_sub(self, rhs: Self) -> Self { self.wrapping_sub(rhs) }
            #[inline(always)]
            fn wrap_mul(self, rhs: Self) -> Self { self.wrapping_mul(rhs) }
        }
    )*};
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline(always)]
            fn wrap_add(self, rhs: Self) -> Self { self + rhs }
            #[inline(always)]
            fn wrap_sub(self, rhs: Self) -> Self { self - rhs }
            #[inline(always)]
            fn wrap_mul(self, rhs: Self) -> Self { self * rhs }
        }
    )*};
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar_float!(f32, f64);

// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

// At the time of writing this unlocks extra std::simd that the developers
// intend on stabilising but haven't yet.
// This includes custom lane management abstractions, and related features.
#![feature(portable_simd)]

// compile with RUSTFLAGS="-C target-cpu=native" cargo +nightly build

//! # **emu-math** - *Generic registers, vectors and matrices*
//!
//! Two layers:
//! - **`simd`**: one operation table (construct, convert, compare, arithmetic, rounding, sqrt)
//!   for every `Simd<T, N>` register, plus bulk slice kernels that choose between the native
//!   register width and a single-lane path.
//! - **`linalg`**: `Vector<N, T>` and `Matrix<C, R, T, L>` with const-generic dimensions,
//!   elementwise and matrix products, transpose, submatrices and the determinant family.

pub mod operators;

pub mod simd;

#[cfg(feature = "linear_algebra")]
pub mod linalg;

pub mod traits {
    pub mod lane;
    pub mod scalar;
}

pub mod config;

pub mod errors;

pub mod utils;

pub use errors::MathError;
#[cfg(feature = "linear_algebra")]
pub use linalg::{ColumnMajor, Layout, Matrix, MatrixOperand, RowMajor, Vector, VectorOperand};
pub use operators::{ArithmeticOperator, ComparisonOperator, FusedOperator, RoundingMode};
pub use simd::SimdRegister;
pub use traits::lane::Lane;
pub use traits::scalar::Scalar;

// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Linear Algebra Module** - *Fixed-size vectors and matrices*
//!
//! Small, stack-allocated containers whose dimensions are const generics, so shape errors are
//! caught at compile time wherever the index or size is known there.
//!
//! ## Modules
//! - **`vector`**: `Vector<N, T>` with elementwise and broadcast arithmetic, dot and cross products
//! - **`layout`**: `ColumnMajor` / `RowMajor` storage selection for matrices
//! - **`matrix`**: `Matrix<C, R, T, L>` construction, access, transpose, trace and submatrices
//! - **`arithmetic`**: elementwise, broadcast and matrix products
//! - **`compare`**: folded comparisons and tolerance equality
//! - **`determinant`**: Laplace determinant, minors, cofactors, adjugate and inverse
//!
//! ## Indexing
//! Matrix elements are addressed `(column, row)` in every layout. Layout only changes the order
//! in which elements are stored, which is visible through `at_major_index` and
//! `try_from_major_order`.

pub mod arithmetic;
pub mod compare;
pub mod determinant;
pub mod layout;
pub mod matrix;
pub mod vector;

pub use arithmetic::MatrixOperand;
pub use layout::{ColumnMajor, Layout, RowMajor};
pub use matrix::Matrix;
pub use vector::{Vector, VectorOperand};

/// Column vector of length 2.
pub type Vec2<T> = Vector<2, T>;
/// Column vector of length 3.
pub type Vec3<T> = Vector<3, T>;
/// Column vector of length 4.
pub type Vec4<T> = Vector<4, T>;
/// Square column-major 2x2 matrix.
pub type Mat2<T> = Matrix<2, 2, T>;
/// Square column-major 3x3 matrix.
pub type Mat3<T> = Matrix<3, 3, T>;
/// Square column-major 4x4 matrix.
pub type Mat4<T> = Matrix<4, 4, T>;

// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Determinant Module** - *Laplace expansion and the cofactor family*
//!
//! Square-only operations. They are defined on `Matrix<N, N, T, L>` alone, so calling them on a
//! non-square matrix does not compile.
//!
//! ## Laplace expansion
//! The determinant expands along row 0:
//!
//! `det(M) = Σ_i (-1)^i · M(i, 0) · det(M without column i and row 0)`
//!
//! with the 1x1 and 2x2 cases evaluated directly. Sub-determinants are computed over the set of
//! remaining column indices rather than by copying submatrices, so there is one generic
//! recursion for every `N` instead of a chain of shrinking matrix types. The cost is `O(N!)`,
//! intended for the small sizes (up to 4x4) this layer targets.
//!
//! Integer expansion wraps, so unsigned matrices yield the determinant modulo `2^bits`.

use core::ops::Neg;

use num_traits::Float;
use tracing::debug;

use crate::linalg::layout::Layout;
use crate::linalg::matrix::{Matrix, skip_index};
use crate::traits::scalar::Scalar;
use crate::utils::checkerboard_negative;

/// Determinant of the `n`x`n` matrix whose element `(column, row)` is `cell(column, row)`,
/// restricted to rows `row..n` and the columns not set in `used`.
fn laplace<T: Scalar>(cell: &impl Fn(usize, usize) -> T, n: usize, row: usize, used: u64) -> T {
    let remaining = n - row;
    if remaining == 1 {
        let column = (!used).trailing_zeros() as usize;
        return cell(column, row);
    }
    if remaining == 2 {
        let a = (!used).trailing_zeros() as usize;
        let b = (!(used | (1 << a))).trailing_zeros() as usize;
        let ad = cell(a, row).wrap_mul(cell(b, row + 1));
        return ad.wrap_sub(cell(b, row).wrap_mul(cell(a, row + 1)));
    }
    let mut acc = T::zero();
    let mut positive = true;
    for column in 0..n {
        if used & (1 << column) != 0 {
            continue;
        }
        let term = cell(column, row).wrap_mul(laplace(cell, n, row + 1, used | (1 << column)));
        acc = if positive { acc.wrap_add(term) } else { acc.wrap_sub(term) };
        positive = !positive;
    }
    acc
}

impl<const N: usize, T: Scalar, L: Layout> Matrix<N, N, T, L> {
    /// Determinant by Laplace expansion along the first row.
    ///
    /// One for the empty 0x0 matrix.
    pub fn determinant(&self) -> T {
        const { assert!(N <= 64, "determinant supports at most 64x64 matrices") };
        if N == 0 {
            return T::one();
        }
        laplace(&|column, row| self.at(column, row), N, 0, 0)
    }

    /// Determinant of the matrix with `column` and `row` removed.
    pub fn minor(&self, column: usize, row: usize) -> T {
        const { assert!(N <= 64, "minor supports at most 64x64 matrices") };
        assert!(column < N && row < N, "minor ({}, {}) outside {}x{}", column, row, N, N);
        if N == 1 {
            return T::one();
        }
        let cell = |c: usize, r: usize| self.at(skip_index(c, column), skip_index(r, row));
        laplace(&cell, N - 1, 0, 0)
    }

    /// Each element replaced by the determinant of its exclusive submatrix.
    pub fn matrix_of_minors(&self) -> Self {
        Self::from_fn(|column, row| self.minor(column, row))
    }
}

impl<const N: usize, T: Scalar + Neg<Output = T>, L: Layout> Matrix<N, N, T, L> {
    /// Negates the elements where `column + row` is odd.
    pub fn checkerboard(&self) -> Self {
        Self::from_fn(|column, row| {
            let x = self.at(column, row);
            if checkerboard_negative(column, row) { -x } else { x }
        })
    }

    /// Minors with the checkerboard sign pattern applied.
    pub fn matrix_of_cofactors(&self) -> Self {
        self.matrix_of_minors().checkerboard()
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Self {
        self.matrix_of_cofactors().transpose()
    }
}

impl<const N: usize, T: Scalar + Float, L: Layout> Matrix<N, N, T, L> {
    /// `adjugate / determinant`, or `None` when the determinant is zero.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::zero() {
            debug!(size = N, "inverse of singular matrix requested");
            return None;
        }
        let scale = T::one() / det;
        Some(self.adjugate().map(|x| x * scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::layout::RowMajor;

    #[test]
    fn test_two_by_two() {
        let m = Matrix::<2, 2, i32>::from_columns([[1, 3], [2, 4]]);
        assert_eq!(m.determinant(), -2);
        let r: Matrix<2, 2, i32, RowMajor> = m.into_layout();
        assert_eq!(r.determinant(), -2);
    }

    #[test]
    fn test_unsigned_expansion_wraps() {
        let m = Matrix::<2, 2, u32>::from_columns([[1, 3], [2, 4]]);
        assert_eq!(m.determinant(), (-2i32) as u32);
        let m = Matrix::<3, 3, u8>::from_rows([[6, 1, 1], [4, 0, 5], [2, 8, 7]]);
        // signed value: 6*(0-40) - 1*(28-10) + 1*(32-0) = -226
        assert_eq!(m.determinant(), (-226i32).rem_euclid(256) as u8);
        assert_eq!(m.minor(0, 0), (0u8).wrapping_sub(40));
        assert_eq!(Matrix::<4, 4, u16>::identity().determinant(), 1);
    }

    #[test]
    fn test_identity_determinant_is_one() {
        assert_eq!(Matrix::<1, 1, i32>::identity().determinant(), 1);
        assert_eq!(Matrix::<2, 2, i32>::identity().determinant(), 1);
        assert_eq!(Matrix::<3, 3, f32>::identity().determinant(), 1.0);
        assert_eq!(Matrix::<4, 4, f64>::identity().determinant(), 1.0);
        assert_eq!(Matrix::<0, 0, f64>::identity().determinant(), 1.0);
    }

    #[test]
    fn test_repeated_rows_give_zero() {
        let m = Matrix::<3, 3, i64>::from_rows([[1, 2, 3], [4, 5, 6], [1, 2, 3]]);
        assert_eq!(m.determinant(), 0);
        let m = Matrix::<4, 4, i64>::from_columns([[2, 7, 1, 8], [2, 8, 1, 8], [2, 7, 1, 8], [3, 1, 4, 1]]);
        assert_eq!(m.determinant(), 0);
    }

    #[test]
    fn test_three_and_four() {
        let m = Matrix::<3, 3, i32>::from_rows([[6, 1, 1], [4, -2, 5], [2, 8, 7]]);
        assert_eq!(m.determinant(), -306);
        let m = Matrix::<4, 4, i32>::from_rows([[1, 0, 2, -1], [3, 0, 0, 5], [2, 1, 4, -3], [1, 0, 5, 0]]);
        assert_eq!(m.determinant(), 30);
        // upper triangular: product of the diagonal
        let t = Matrix::<4, 4, i32>::from_rows([[2, 9, 9, 9], [0, 3, 9, 9], [0, 0, 4, 9], [0, 0, 0, 5]]);
        assert_eq!(t.determinant(), 120);
    }

    #[test]
    fn test_minor_matches_exclusive_submatrix() {
        let m = Matrix::<4, 4, i32>::try_from_major_order([3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9, 3]).unwrap();
        for c in 0..4 {
            for r in 0..4 {
                let sub: Matrix<3, 3, i32> = m.exclusive_submatrix(c, r);
                assert_eq!(m.minor(c, r), sub.determinant(), "({c}, {r})");
            }
        }
    }

    #[test]
    fn test_cofactors_and_adjugate() {
        let m = Matrix::<3, 3, i32>::from_rows([[1, 2, 3], [0, 4, 5], [1, 0, 6]]);
        let minors = m.matrix_of_minors();
        assert_eq!(minors.at(0, 0), 24);
        assert_eq!(minors.at(1, 0), -5);
        let cof = m.matrix_of_cofactors();
        assert_eq!(cof.at(1, 0), 5);
        assert_eq!(cof.at(0, 1), -12);
        // M * adj(M) = det(M) * I
        let det = m.determinant();
        assert_eq!(det, 22);
        assert_eq!(m * m.adjugate(), Matrix::<3, 3, i32>::identity() * det);
    }

    #[test]
    fn test_checkerboard_pattern() {
        let m = Matrix::<3, 3, i32>::splat(1).checkerboard();
        assert_eq!(m, Matrix::from_rows([[1, -1, 1], [-1, 1, -1], [1, -1, 1]]));
    }

    #[test]
    fn test_inverse() {
        let m = Matrix::<2, 2, f64>::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        let inv = m.inverse().unwrap();
        assert!((m * inv).near_equal(Matrix::<2, 2, f64>::identity(), 1e-12));
        let singular = Matrix::<2, 2, f64>::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        assert!(singular.inverse().is_none());
    }
}

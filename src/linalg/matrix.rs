// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Matrix Module** - *Fixed-size matrices with compile-time dimensions*
//!
//! `Matrix<C, R, T, L>` holds `C` columns and `R` rows of `T`, stored as an array of major
//! vectors chosen by the [`Layout`] `L` (column-major by default).
//!
//! ## Indexing convention
//! Every accessor takes `(column, row)` regardless of layout. Linear "major order" indices walk
//! the storage: for column-major, index `i` is column `i / R`, row `i % R`.
//!
//! ## Checks
//! - Const-indexed accessors (`at_const`, `submatrix`, `exclusive_submatrix`) assert their
//!   indices and output shapes at compile time.
//! - Runtime accessors panic on a bad index like a slice. The `try_*` forms return
//!   `MathError` instead.
//!
//! Submatrices are always fresh copies, never views.

use core::ops::{Index, IndexMut};

use crate::errors::MathError;
use crate::linalg::layout::{ColumnMajor, Layout};
use crate::linalg::vector::Vector;
use crate::traits::scalar::Scalar;
use crate::utils::{confirm_equal_len, confirm_index};

/// Fixed-size `C`-column by `R`-row matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<const C: usize, const R: usize, T: Scalar, L: Layout = ColumnMajor> {
    pub(crate) data: L::Storage<T, C, R>,
}

impl<const C: usize, const R: usize, T: Scalar, L: Layout> Matrix<C, R, T, L> {
    /// Number of columns.
    pub const NUM_COLUMNS: usize = C;
    /// Number of rows.
    pub const NUM_ROWS: usize = R;
    /// Total element count.
    pub const SIZE: usize = C * R;
    /// True when the storage order is column-major.
    pub const IS_COLUMN_MAJOR: bool = L::COLUMN_MAJOR;

    /// Whether the matrix type is square. Known without an instance.
    #[inline(always)]
    pub const fn is_square() -> bool {
        C == R
    }

    /// Element `(column, row)` is `f(column, row)`.
    #[inline(always)]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = L::splat::<T, C, R>(T::zero());
        for column in 0..C {
            for row in 0..R {
                *L::slot_mut::<T, C, R>(&mut data, column, row) = f(column, row);
            }
        }
        Self { data }
    }

    /// Every element set to `value`.
    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self { data: L::splat::<T, C, R>(value) }
    }

    /// Every element zero.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Ones on the main diagonal, zeros elsewhere. Defined for any shape.
    #[inline(always)]
    pub fn identity() -> Self {
        Self::from_fn(|column, row| if column == row { T::one() } else { T::zero() })
    }

    /// Builds from column arrays: `columns[c][r]` is element `(c, r)`.
    #[inline(always)]
    pub fn from_columns(columns: [[T; R]; C]) -> Self {
        Self::from_fn(|column, row| columns[column][row])
    }

    /// Builds from row arrays: `rows[r][c]` is element `(c, r)`.
    #[inline(always)]
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        Self::from_fn(|column, row| rows[row][column])
    }

    /// Builds from exactly `C * R` values given in storage order.
    ///
    /// At most `C * R + 1` values are drawn, so an unbounded iterator is rejected.
    ///
    /// # Errors
    /// `LengthMismatch` when the iterator yields more or fewer than `C * R` values.
    pub fn try_from_major_order(values: impl IntoIterator<Item = T>) -> Result<Self, MathError> {
        let mut out = Self::zero();
        let mut count = 0;
        for value in values.into_iter().take(C * R + 1) {
            if count < C * R {
                let (column, row) = L::major_index_to_cell::<C, R>(count);
                *out.at_mut(column, row) = value;
            }
            count += 1;
        }
        confirm_equal_len("Matrix::try_from_major_order", count, C * R)?;
        Ok(out)
    }

    /// Element `(COL, ROW)`, rejected at compile time when out of range.
    #[inline(always)]
    pub fn at_const<const COL: usize, const ROW: usize>(&self) -> T {
        const {
            assert!(COL < C, "matrix column index out of range");
            assert!(ROW < R, "matrix row index out of range");
        };
        *L::slot::<T, C, R>(&self.data, COL, ROW)
    }

    /// Element `(column, row)`. Panics when out of range.
    #[inline(always)]
    pub fn at(&self, column: usize, row: usize) -> T {
        *L::slot::<T, C, R>(&self.data, column, row)
    }

    /// Mutable element `(column, row)`. Panics when out of range.
    #[inline(always)]
    pub fn at_mut(&mut self, column: usize, row: usize) -> &mut T {
        L::slot_mut::<T, C, R>(&mut self.data, column, row)
    }

    /// Element `(column, row)`, or `OutOfBounds`.
    #[inline(always)]
    pub fn try_at(&self, column: usize, row: usize) -> Result<T, MathError> {
        confirm_index("Matrix::try_at column", column, C)?;
        confirm_index("Matrix::try_at row", row, R)?;
        Ok(self.at(column, row))
    }

    /// Element at linear storage-order `index`. Panics when `index >= C * R`.
    #[inline(always)]
    pub fn at_major_index(&self, index: usize) -> T {
        assert!(index < C * R, "major index {} outside 0..{}", index, C * R);
        let (column, row) = L::major_index_to_cell::<C, R>(index);
        self.at(column, row)
    }

    /// Element at linear storage-order `index`, or `OutOfBounds`.
    #[inline(always)]
    pub fn try_at_major_index(&self, index: usize) -> Result<T, MathError> {
        confirm_index("Matrix::try_at_major_index", index, C * R)?;
        Ok(self.at_major_index(index))
    }

    /// Copies out column `column`.
    #[inline(always)]
    pub fn column(&self, column: usize) -> Vector<R, T> {
        Vector::from_fn(|row| self.at(column, row))
    }

    /// Gathers row `row`, one element from each column.
    #[inline(always)]
    pub fn row(&self, row: usize) -> Vector<C, T> {
        Vector::from_fn(|column| self.at(column, row))
    }

    /// Every column, in order.
    #[inline(always)]
    pub fn columns(&self) -> [Vector<R, T>; C] {
        core::array::from_fn(|column| self.column(column))
    }

    /// Every row, in order.
    #[inline(always)]
    pub fn rows(&self) -> [Vector<C, T>; R] {
        core::array::from_fn(|row| self.row(row))
    }

    /// Overwrites column `column`.
    #[inline(always)]
    pub fn set_column(&mut self, column: usize, values: Vector<R, T>) {
        for row in 0..R {
            *self.at_mut(column, row) = values[row];
        }
    }

    /// Overwrites row `row`.
    #[inline(always)]
    pub fn set_row(&mut self, row: usize, values: Vector<C, T>) {
        for column in 0..C {
            *self.at_mut(column, row) = values[column];
        }
    }

    /// Applies `f` to every element.
    #[inline(always)]
    pub fn map<U: Scalar>(&self, mut f: impl FnMut(T) -> U) -> Matrix<C, R, U, L> {
        Matrix::from_fn(|column, row| f(self.at(column, row)))
    }

    /// Same elements, other storage order.
    #[inline(always)]
    pub fn into_layout<L2: Layout>(self) -> Matrix<C, R, T, L2> {
        Matrix::from_fn(|column, row| self.at(column, row))
    }

    /// Row `r` of the result is column `r` of `self`.
    #[inline(always)]
    pub fn transpose(&self) -> Matrix<R, C, T, L> {
        Matrix::from_fn(|column, row| self.at(row, column))
    }

    /// Sum of `M[i][i]` for `i` in `0..min(C, R)`. Zero for an empty matrix.
    #[inline(always)]
    pub fn trace(&self) -> T {
        (0..C.min(R)).fold(T::zero(), |acc, i| acc + self.at(i, i))
    }

    /// The `OUT_C` by `OUT_R` block starting at `(COL_BEGIN, ROW_BEGIN)`.
    ///
    /// The block must lie inside the matrix, checked at compile time.
    #[inline(always)]
    pub fn submatrix<const COL_BEGIN: usize, const ROW_BEGIN: usize, const OUT_C: usize, const OUT_R: usize>(
        &self,
    ) -> Matrix<OUT_C, OUT_R, T, L> {
        const {
            assert!(COL_BEGIN + OUT_C <= C, "submatrix columns exceed the source matrix");
            assert!(ROW_BEGIN + OUT_R <= R, "submatrix rows exceed the source matrix");
        };
        Matrix::from_fn(|column, row| self.at(COL_BEGIN + column, ROW_BEGIN + row))
    }

    /// The `OUT_C` by `OUT_R` block starting at `(col_begin, row_begin)`, checked at runtime.
    pub fn try_submatrix<const OUT_C: usize, const OUT_R: usize>(
        &self,
        col_begin: usize,
        row_begin: usize,
    ) -> Result<Matrix<OUT_C, OUT_R, T, L>, MathError> {
        let past = |begin: usize, len: usize, bound: usize| begin.checked_add(len).map_or(true, |end| end > bound);
        if past(col_begin, OUT_C, C) || past(row_begin, OUT_R, R) {
            return Err(MathError::OutOfBounds(format!(
                "Matrix::try_submatrix: {}x{} block at ({}, {}) exceeds {}x{}",
                OUT_C, OUT_R, col_begin, row_begin, C, R
            )));
        }
        Ok(Matrix::from_fn(|column, row| self.at(col_begin + column, row_begin + row)))
    }

    /// Copy with column `column` and row `row` removed.
    ///
    /// `OUT_C + 1 == C` and `OUT_R + 1 == R` are checked at compile time. Panics when `column` or
    /// `row` is out of range.
    #[inline(always)]
    pub fn exclusive_submatrix<const OUT_C: usize, const OUT_R: usize>(
        &self,
        column: usize,
        row: usize,
    ) -> Matrix<OUT_C, OUT_R, T, L> {
        const {
            assert!(OUT_C + 1 == C, "exclusive submatrix must drop exactly one column");
            assert!(OUT_R + 1 == R, "exclusive submatrix must drop exactly one row");
        };
        assert!(column < C && row < R, "excluded cell ({}, {}) outside {}x{}", column, row, C, R);
        Matrix::from_fn(|c, r| self.at(skip_index(c, column), skip_index(r, row)))
    }

    /// `exclusive_submatrix` returning `OutOfBounds` for a bad `column` or `row`.
    pub fn try_exclusive_submatrix<const OUT_C: usize, const OUT_R: usize>(
        &self,
        column: usize,
        row: usize,
    ) -> Result<Matrix<OUT_C, OUT_R, T, L>, MathError> {
        confirm_index("Matrix::try_exclusive_submatrix column", column, C)?;
        confirm_index("Matrix::try_exclusive_submatrix row", row, R)?;
        Ok(self.exclusive_submatrix::<OUT_C, OUT_R>(column, row))
    }
}

/// Maps an index of the reduced axis back to the source axis with `skipped` removed.
#[inline(always)]
pub(crate) const fn skip_index(index: usize, skipped: usize) -> usize {
    if index < skipped { index } else { index + 1 }
}

impl<const C: usize, const R: usize, T: Scalar, L: Layout> Default for Matrix<C, R, T, L> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const C: usize, const R: usize, T: Scalar, L: Layout> Index<(usize, usize)> for Matrix<C, R, T, L> {
    type Output = T;

    /// Indexes by `(column, row)`.
    #[inline(always)]
    fn index(&self, (column, row): (usize, usize)) -> &T {
        L::slot::<T, C, R>(&self.data, column, row)
    }
}

impl<const C: usize, const R: usize, T: Scalar, L: Layout> IndexMut<(usize, usize)> for Matrix<C, R, T, L> {
    #[inline(always)]
    fn index_mut(&mut self, (column, row): (usize, usize)) -> &mut T {
        L::slot_mut::<T, C, R>(&mut self.data, column, row)
    }
}

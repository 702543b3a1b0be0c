// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Layout Module** - *Major-axis storage selection*
//!
//! A matrix is stored as an array of *major* vectors. The `Layout` marker picks which axis is
//! major: `ColumnMajor` stores `C` columns of `R` elements, `RowMajor` stores `R` rows of `C`
//! elements. Element access always takes `(column, row)` and the layout normalises it to a
//! storage slot, so algorithms never depend on the storage order.

use core::fmt::Debug;

use crate::linalg::vector::Vector;
use crate::traits::scalar::Scalar;

/// Storage order for [`Matrix`](crate::linalg::Matrix).
pub trait Layout: Copy + Debug + Default + PartialEq + Send + Sync + 'static {
    /// True when columns are the contiguous major vectors.
    const COLUMN_MAJOR: bool;

    /// Backing storage for a `C`-column, `R`-row matrix.
    type Storage<T: Scalar, const C: usize, const R: usize>: Copy + Debug + PartialEq + Send + Sync;

    /// Storage with every element set to `value`.
    fn splat<T: Scalar, const C: usize, const R: usize>(value: T) -> Self::Storage<T, C, R>;

    /// Slot holding element `(column, row)`. Panics when either index is out of range.
    fn slot<T: Scalar, const C: usize, const R: usize>(
        storage: &Self::Storage<T, C, R>,
        column: usize,
        row: usize,
    ) -> &T;

    /// Mutable slot holding element `(column, row)`. Panics when either index is out of range.
    fn slot_mut<T: Scalar, const C: usize, const R: usize>(
        storage: &mut Self::Storage<T, C, R>,
        column: usize,
        row: usize,
    ) -> &mut T;

    /// Maps a linear index in storage order to `(column, row)`.
    fn major_index_to_cell<const C: usize, const R: usize>(index: usize) -> (usize, usize);
}

/// Columns are stored contiguously. The default layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColumnMajor;

/// Rows are stored contiguously.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RowMajor;

impl Layout for ColumnMajor {
    const COLUMN_MAJOR: bool = true;
    type Storage<T: Scalar, const C: usize, const R: usize> = [Vector<R, T>; C];

    #[inline(always)]
    fn splat<T: Scalar, const C: usize, const R: usize>(value: T) -> [Vector<R, T>; C] {
        [Vector::splat(value); C]
    }

    #[inline(always)]
    fn slot<T: Scalar, const C: usize, const R: usize>(
        storage: &[Vector<R, T>; C],
        column: usize,
        row: usize,
    ) -> &T {
        &storage[column][row]
    }

    #[inline(always)]
    fn slot_mut<T: Scalar, const C: usize, const R: usize>(
        storage: &mut [Vector<R, T>; C],
        column: usize,
        row: usize,
    ) -> &mut T {
        &mut storage[column][row]
    }

    #[inline(always)]
    fn major_index_to_cell<const C: usize, const R: usize>(index: usize) -> (usize, usize) {
        (index / R, index % R)
    }
}

impl Layout for RowMajor {
    const COLUMN_MAJOR: bool = false;
    type Storage<T: Scalar, const C: usize, const R: usize> = [Vector<C, T>; R];

    #[inline(always)]
    fn splat<T: Scalar, const C: usize, const R: usize>(value: T) -> [Vector<C, T>; R] {
        [Vector::splat(value); R]
    }

    #[inline(always)]
    fn slot<T: Scalar, const C: usize, const R: usize>(
        storage: &[Vector<C, T>; R],
        column: usize,
        row: usize,
    ) -> &T {
        &storage[row][column]
    }

    #[inline(always)]
    fn slot_mut<T: Scalar, const C: usize, const R: usize>(
        storage: &mut [Vector<C, T>; R],
        column: usize,
        row: usize,
    ) -> &mut T {
        &mut storage[row][column]
    }

    #[inline(always)]
    fn major_index_to_cell<const C: usize, const R: usize>(index: usize) -> (usize, usize) {
        (index % C, index / C)
    }
}

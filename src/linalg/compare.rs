// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Matrix Comparison Module** - *Folded elementwise comparisons*
//!
//! `compare_full` is the general form: a comparator applied to every `(column, row)` pair, with
//! the results folded by a merge function from a start value. Matrices of different shapes are
//! never compared element by element; they yield the caller's mismatch result.
//!
//! `cmp_all` / `cmp_any` are the common folds (AND and OR) over a `ComparisonOperator`.

use num_traits::ToPrimitive;

use crate::config::NEAR_EQUAL_EPSILON;
use crate::linalg::arithmetic::MatrixOperand;
use crate::linalg::layout::Layout;
use crate::linalg::matrix::Matrix;
use crate::operators::ComparisonOperator;
use crate::traits::scalar::Scalar;

impl<const C: usize, const R: usize, T: Scalar, L: Layout> Matrix<C, R, T, L> {
    /// Folds `comparator` over every element pair with `merge`, starting from `start`.
    ///
    /// Returns `shape_mismatch` without comparing when `rhs` has a different shape.
    pub fn compare_full<const C2: usize, const R2: usize, L2: Layout>(
        &self,
        rhs: &Matrix<C2, R2, T, L2>,
        comparator: impl Fn(T, T) -> bool,
        merge: impl Fn(bool, bool) -> bool,
        start: bool,
        shape_mismatch: bool,
    ) -> bool {
        if C != C2 || R != R2 {
            return shape_mismatch;
        }
        let mut acc = start;
        for column in 0..C {
            for row in 0..R {
                acc = merge(acc, comparator(self.at(column, row), rhs.at(column, row)));
            }
        }
        acc
    }

    /// True when `op` holds for every element pair.
    #[inline(always)]
    pub fn cmp_all<O: MatrixOperand<C, R, T>>(&self, op: ComparisonOperator, rhs: O) -> bool {
        (0..C).all(|column| (0..R).all(|row| op.apply(self.at(column, row), rhs.element(column, row))))
    }

    /// True when `op` holds for at least one element pair.
    #[inline(always)]
    pub fn cmp_any<O: MatrixOperand<C, R, T>>(&self, op: ComparisonOperator, rhs: O) -> bool {
        (0..C).any(|column| (0..R).any(|row| op.apply(self.at(column, row), rhs.element(column, row))))
    }

    /// Every element pair differs by at most `epsilon`, compared in `f64`.
    pub fn near_equal<O: MatrixOperand<C, R, T>>(&self, rhs: O, epsilon: f64) -> bool {
        self.cmp_all_with(rhs, |a, b| match (a.to_f64(), b.to_f64()) {
            (Some(a), Some(b)) => a == b || (a - b).abs() <= epsilon,
            _ => false,
        })
    }

    /// `near_equal` at [`NEAR_EQUAL_EPSILON`].
    #[inline(always)]
    pub fn near_equal_default<O: MatrixOperand<C, R, T>>(&self, rhs: O) -> bool {
        self.near_equal(rhs, NEAR_EQUAL_EPSILON)
    }

    /// Elementwise equality with any same-shaped matrix, regardless of layout.
    #[inline(always)]
    pub fn equals<L2: Layout>(&self, rhs: &Matrix<C, R, T, L2>) -> bool {
        self.cmp_all(ComparisonOperator::Equals, *rhs)
    }

    #[inline(always)]
    fn cmp_all_with<O: MatrixOperand<C, R, T>>(&self, rhs: O, f: impl Fn(T, T) -> bool) -> bool {
        (0..C).all(|column| (0..R).all(|row| f(self.at(column, row), rhs.element(column, row))))
    }
}

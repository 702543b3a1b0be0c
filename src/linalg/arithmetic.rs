// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Matrix Arithmetic Module** - *Elementwise, broadcast and matrix products*
//!
//! ## Operand dispatch
//! Elementwise operations accept any [`MatrixOperand`]: a matrix of the same shape (any layout)
//! pairs element for element, and a primitive scalar broadcasts. Which one applies is decided by
//! the operand's type, so a wrongly shaped operand is a type error.
//!
//! ## Operators
//! | Operator | Matrix rhs | Scalar rhs |
//! |----------|------------|------------|
//! | `+ - / %` | elementwise | broadcast |
//! | `*` | matrix product | broadcast |
//!
//! The Hadamard product is `mul_elementwise`.
//!
//! ## Matrix product
//! `lhs * rhs` materialises every row of `lhs` and every column of `rhs`, then fills output
//! `(c, r)` with `dot(lhs.row(r), rhs.column(c))`. `mul_simd` is the register variant for
//! column-major operands: each output column accumulates the left-hand columns with `fmadd`.

use core::ops::{Add, Div, Mul, Neg, Rem, Sub};
use core::simd::Simd;

use crate::linalg::layout::{ColumnMajor, Layout};
use crate::linalg::matrix::Matrix;
use crate::linalg::vector::Vector;
use crate::operators::ArithmeticOperator;
use crate::simd::arithmetic::SimdArithmetic;
use crate::traits::lane::Lane;
use crate::traits::scalar::Scalar;

/// Right-hand operand accepted by elementwise matrix arithmetic.
pub trait MatrixOperand<const C: usize, const R: usize, T>: Copy {
    /// Operand value paired with element `(column, row)` of the left-hand side.
    fn element(&self, column: usize, row: usize) -> T;
}

impl<const C: usize, const R: usize, T: Scalar, L: Layout> MatrixOperand<C, R, T> for Matrix<C, R, T, L> {
    #[inline(always)]
    fn element(&self, column: usize, row: usize) -> T {
        self.at(column, row)
    }
}

macro_rules! impl_scalar_matrix_operand {
    ($($t:ty),*) => {$(
        impl<const C: usize, const R: usize> MatrixOperand<C, R, $t> for $t {
            #[inline(always)]
            fn element(&self, _column: usize, _row: usize) -> $t {
                *self
            }
        }

        impl<const C: usize, const R: usize, L: Layout> Mul<$t> for Matrix<C, R, $t, L> {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: $t) -> Self {
                self.arithmetic(ArithmeticOperator::Multiply, rhs)
            }
        }
    )*};
}

impl_scalar_matrix_operand!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[inline(always)]
fn apply<T: Scalar>(op: ArithmeticOperator, a: T, b: T) -> T {
    match op {
        ArithmeticOperator::Add => a + b,
        ArithmeticOperator::Subtract => a - b,
        ArithmeticOperator::Multiply => a * b,
        ArithmeticOperator::Divide => a / b,
        ArithmeticOperator::Remainder => a % b,
    }
}

impl<const C: usize, const R: usize, T: Scalar, L: Layout> Matrix<C, R, T, L> {
    /// Applies `op` elementwise against a matrix or scalar operand.
    #[inline(always)]
    pub fn arithmetic<O: MatrixOperand<C, R, T>>(&self, op: ArithmeticOperator, rhs: O) -> Self {
        Self::from_fn(|column, row| apply(op, self.at(column, row), rhs.element(column, row)))
    }

    /// Hadamard (elementwise) product, or scalar broadcast.
    #[inline(always)]
    pub fn mul_elementwise<O: MatrixOperand<C, R, T>>(&self, rhs: O) -> Self {
        self.arithmetic(ArithmeticOperator::Multiply, rhs)
    }

    /// Combines paired elements with `f`.
    #[inline(always)]
    pub fn zip_map<O: MatrixOperand<C, R, T>>(&self, rhs: O, mut f: impl FnMut(T, T) -> T) -> Self {
        Self::from_fn(|column, row| f(self.at(column, row), rhs.element(column, row)))
    }

    /// Matrix product with a `C2`-column right-hand side whose row count matches `C`.
    pub fn mul_matrix<const C2: usize, L2: Layout>(&self, rhs: &Matrix<C2, C, T, L2>) -> Matrix<C2, R, T, L> {
        let lhs_rows = self.rows();
        let rhs_columns = rhs.columns();
        Matrix::from_fn(|column, row| lhs_rows[row].dot(&rhs_columns[column]))
    }
}

impl<const K: usize, const R: usize, T: Scalar + Lane> Matrix<K, R, T, ColumnMajor>
where
    Simd<T, R>: SimdArithmetic,
{
    /// Matrix product computed on registers: one `R`-lane register per column.
    ///
    /// Output column `c` is the sum over `k` of `lhs.column(k) * rhs(c, k)`, accumulated with
    /// `fmadd`. Float results may differ from `*` in the last bits because each step rounds once.
    pub fn mul_simd<const C2: usize, L2: Layout>(&self, rhs: &Matrix<C2, K, T, L2>) -> Matrix<C2, R, T, ColumnMajor> {
        let lhs_columns: [Simd<T, R>; K] = core::array::from_fn(|k| self.column(k).to_register());
        let mut out = Matrix::<C2, R, T, ColumnMajor>::zero();
        for c in 0..C2 {
            let mut acc = Simd::<T, R>::splat(T::zero());
            for (k, column) in lhs_columns.iter().enumerate() {
                acc = column.fmadd(Simd::splat(rhs.at(c, k)), acc);
            }
            out.set_column(c, Vector::from_register(acc));
        }
        out
    }
}

macro_rules! impl_matrix_operator {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<const C: usize, const R: usize, T: Scalar, L: Layout, O: MatrixOperand<C, R, T>> $trait<O>
            for Matrix<C, R, T, L>
        {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: O) -> Self {
                self.arithmetic($op, rhs)
            }
        }
    };
}

impl_matrix_operator!(Add, add, ArithmeticOperator::Add);
impl_matrix_operator!(Sub, sub, ArithmeticOperator::Subtract);
impl_matrix_operator!(Div, div, ArithmeticOperator::Divide);
impl_matrix_operator!(Rem, rem, ArithmeticOperator::Remainder);

impl<const K: usize, const R: usize, const C2: usize, T: Scalar, L: Layout, L2: Layout> Mul<Matrix<C2, K, T, L2>>
    for Matrix<K, R, T, L>
{
    type Output = Matrix<C2, R, T, L>;

    #[inline(always)]
    fn mul(self, rhs: Matrix<C2, K, T, L2>) -> Matrix<C2, R, T, L> {
        self.mul_matrix(&rhs)
    }
}

impl<const C: usize, const R: usize, T: Scalar + Neg<Output = T>, L: Layout> Neg for Matrix<C, R, T, L> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

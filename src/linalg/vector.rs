// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Vector Module** - *Fixed-size, compile-time dimensioned vectors*
//!
//! `Vector<N, T>` is a stack value of exactly `N` elements. The size never changes.
//!
//! ## Access
//! - `at_const::<I>()` rejects `I >= N` during monomorphisation, before any code is generated.
//! - `at(i)` / `Index` panic on a bad runtime index like any slice.
//! - `try_at(i)` returns `MathError::OutOfBounds` instead.
//!
//! ## Arithmetic
//! The right-hand side of `+ - * / %` and `arithmetic` is any [`VectorOperand`]: a vector of the
//! same size (elementwise) or a bare scalar (broadcast). The choice is made by the operand's type,
//! so an operand of the wrong size or kind does not compile.

use core::ops::{Add, Div, Index, IndexMut, Mul, Neg, Rem, Sub};
use core::simd::Simd;

use num_traits::{Float, ToPrimitive};

use crate::config::NEAR_EQUAL_EPSILON;
use crate::errors::MathError;
use crate::operators::{ArithmeticOperator, ComparisonOperator};
use crate::traits::lane::Lane;
use crate::traits::scalar::Scalar;
use crate::utils::confirm_index;

/// Fixed-size ordered sequence of `N` elements.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<const N: usize, T> {
    data: [T; N],
}

/// Right-hand operand accepted by vector arithmetic.
///
/// Implemented for same-size vectors and for every primitive numeric scalar.
pub trait VectorOperand<const N: usize, T>: Copy {
    /// Operand value paired with element `index` of the left-hand side.
    fn element(&self, index: usize) -> T;
}

impl<const N: usize, T: Scalar> VectorOperand<N, T> for Vector<N, T> {
    #[inline(always)]
    fn element(&self, index: usize) -> T {
        self.data[index]
    }
}

macro_rules! impl_scalar_vector_operand {
    ($($t:ty),*) => {$(
        impl<const N: usize> VectorOperand<N, $t> for $t {
            #[inline(always)]
            fn element(&self, _index: usize) -> $t {
                *self
            }
        }
    )*};
}

impl_scalar_vector_operand!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<const N: usize, T> Vector<N, T> {
    /// Number of elements.
    pub const SIZE: usize = N;

    /// Wraps an array.
    #[inline(always)]
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Builds element `i` from `f(i)`.
    #[inline(always)]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self { data: core::array::from_fn(f) }
    }

    /// Borrows the elements as an array.
    #[inline(always)]
    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }

    /// Borrows the elements as a slice.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutably borrows the elements as a slice.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Unwraps into the backing array.
    #[inline(always)]
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    /// Iterates the elements by reference.
    #[inline(always)]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<const N: usize, T: Scalar> Vector<N, T> {
    /// Every element set to `value`.
    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Every element zero.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Element `I`, rejected at compile time when `I >= N`.
    #[inline(always)]
    pub fn at_const<const I: usize>(&self) -> T {
        const { assert!(I < N, "vector index out of range") };
        self.data[I]
    }

    /// Element `index`. Panics if `index >= N`.
    #[inline(always)]
    pub fn at(&self, index: usize) -> T {
        self.data[index]
    }

    /// Mutable element `index`. Panics if `index >= N`.
    #[inline(always)]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }

    /// Element `index`, or `OutOfBounds`.
    #[inline(always)]
    pub fn try_at(&self, index: usize) -> Result<T, MathError> {
        confirm_index("Vector::try_at", index, N)?;
        Ok(self.data[index])
    }

    /// Applies `f` to every element.
    #[inline(always)]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Vector<N, U> {
        Vector::from_fn(|i| f(self.data[i]))
    }

    /// Combines paired elements of `self` and `rhs`.
    #[inline(always)]
    pub fn zip_map<U: Scalar, V>(self, rhs: Vector<N, U>, mut f: impl FnMut(T, U) -> V) -> Vector<N, V> {
        Vector::from_fn(|i| f(self.data[i], rhs.data[i]))
    }

    /// Sum of all elements. Zero for an empty vector.
    #[inline(always)]
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    /// Product of all elements. One for an empty vector.
    #[inline(always)]
    pub fn product(&self) -> T {
        self.data.iter().fold(T::one(), |acc, &x| acc * x)
    }

    /// Dot product.
    #[inline(always)]
    pub fn dot(&self, rhs: &Self) -> T {
        self.data.iter().zip(rhs.data.iter()).fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// `dot(self, self)`.
    #[inline(always)]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Smallest element by `PartialOrd`, `None` when empty.
    pub fn min_element(&self) -> Option<T> {
        self.data.iter().copied().reduce(|a, b| if b < a { b } else { a })
    }

    /// Largest element by `PartialOrd`, `None` when empty.
    pub fn max_element(&self) -> Option<T> {
        self.data.iter().copied().reduce(|a, b| if b > a { b } else { a })
    }

    /// Applies `op` against a vector or scalar operand.
    #[inline(always)]
    pub fn arithmetic<O: VectorOperand<N, T>>(self, op: ArithmeticOperator, rhs: O) -> Self {
        Self::from_fn(|i| {
            let (a, b) = (self.data[i], rhs.element(i));
            match op {
                ArithmeticOperator::Add => a + b,
                ArithmeticOperator::Subtract => a - b,
                ArithmeticOperator::Multiply => a * b,
                ArithmeticOperator::Divide => a / b,
                ArithmeticOperator::Remainder => a % b,
            }
        })
    }

    /// True when `op` holds for every element pair.
    #[inline(always)]
    pub fn cmp_all<O: VectorOperand<N, T>>(&self, op: ComparisonOperator, rhs: O) -> bool {
        (0..N).all(|i| op.apply(self.data[i], rhs.element(i)))
    }

    /// True when `op` holds for at least one element pair.
    #[inline(always)]
    pub fn cmp_any<O: VectorOperand<N, T>>(&self, op: ComparisonOperator, rhs: O) -> bool {
        (0..N).any(|i| op.apply(self.data[i], rhs.element(i)))
    }

    /// Every element pair differs by at most `epsilon`, compared in `f64`.
    pub fn near_equal<O: VectorOperand<N, T>>(&self, rhs: O, epsilon: f64) -> bool {
        (0..N).all(|i| {
            match (self.data[i].to_f64(), rhs.element(i).to_f64()) {
                (Some(a), Some(b)) => a == b || (a - b).abs() <= epsilon,
                _ => false,
            }
        })
    }

    /// `near_equal` at [`NEAR_EQUAL_EPSILON`].
    #[inline(always)]
    pub fn near_equal_default<O: VectorOperand<N, T>>(&self, rhs: O) -> bool {
        self.near_equal(rhs, NEAR_EQUAL_EPSILON)
    }
}

impl<T: Scalar> Vector<3, T> {
    /// Cross product.
    #[inline(always)]
    pub fn cross(&self, rhs: &Self) -> Self {
        let [a0, a1, a2] = self.data;
        let [b0, b1, b2] = rhs.data;
        Self::new([a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0])
    }
}

impl<const N: usize, T: Scalar + Float> Vector<N, T> {
    /// Euclidean length.
    #[inline(always)]
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction. Components are NaN for a zero vector.
    #[inline(always)]
    pub fn normalise(self) -> Self {
        let len = self.length();
        self.map(|x| x / len)
    }
}

impl<const N: usize, T: Scalar + Lane> Vector<N, T>
where
{
    /// Loads the elements into a register of the operation table.
    #[inline(always)]
    pub fn to_register(self) -> Simd<T, N> {
        Simd::from_array(self.data)
    }

    /// Builds a vector from a register's lanes.
    #[inline(always)]
    pub fn from_register(register: Simd<T, N>) -> Self {
        Self::new(register.to_array())
    }
}

impl<const N: usize, T: Scalar> Default for Vector<N, T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize, T> From<[T; N]> for Vector<N, T> {
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<const N: usize, T> Index<usize> for Vector<N, T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<const N: usize, T> IndexMut<usize> for Vector<N, T> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

macro_rules! impl_vector_operator {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<const N: usize, T: Scalar, O: VectorOperand<N, T>> $trait<O> for Vector<N, T> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: O) -> Self {
                self.arithmetic($op, rhs)
            }
        }
    };
}

impl_vector_operator!(Add, add, ArithmeticOperator::Add);
impl_vector_operator!(Sub, sub, ArithmeticOperator::Subtract);
impl_vector_operator!(Mul, mul, ArithmeticOperator::Multiply);
impl_vector_operator!(Div, div, ArithmeticOperator::Divide);
impl_vector_operator!(Rem, rem, ArithmeticOperator::Remainder);

impl<const N: usize, T: Scalar + Neg<Output = T>> Neg for Vector<N, T> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

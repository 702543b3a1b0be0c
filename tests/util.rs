#![allow(unused)]

use approx::{abs_diff_eq, relative_eq};
use emu_math::{Layout, Matrix, Scalar};
use minarrow::Vec64;
use num_traits::ToPrimitive;
use rand::Rng;

pub fn assert_close(a: f64, e: f64, tol: f64) {
    if e.is_nan() {
        assert!(a.is_nan(), "expected NaN, got {a}");
        return;
    }
    if e.is_infinite() {
        assert!(
            a.is_infinite() && a.is_sign_positive() == e.is_sign_positive(),
            "expected {e}, got {a}"
        );
        return;
    }
    assert!(
        relative_eq!(a, e, epsilon = tol, max_relative = tol),
        "mismatch: got {a}, expect {e} (tol={tol})"
    );
}

pub fn assert_slice_close(a: &[f64], e: &[f64], tol: f64) {
    assert_eq!(a.len(), e.len(), "len mismatch");
    for (i, (&ai, &ei)) in a.iter().zip(e.iter()).enumerate() {
        if ei.is_nan() {
            assert!(ai.is_nan(), "idx {i}: expected NaN, got {ai}");
            continue;
        }
        assert!(
            abs_diff_eq!(ai, ei, epsilon = tol * 1.0_f64.max(ei.abs())),
            "idx {i}: got {ai}, expect {ei} (tol={tol})"
        );
    }
}

/// Compares two same-shaped matrices element by element in `f64`, across layouts.
pub fn assert_matrix_close<const C: usize, const R: usize, T: Scalar, L: Layout, L2: Layout>(
    a: &Matrix<C, R, T, L>,
    e: &Matrix<C, R, T, L2>,
    tol: f64,
) {
    for column in 0..C {
        for row in 0..R {
            let (got, want) = (a.at(column, row), e.at(column, row));
            let (got, want) = (got.to_f64().unwrap_or(f64::NAN), want.to_f64().unwrap_or(f64::NAN));
            assert!(
                abs_diff_eq!(got, want, epsilon = tol * 1.0_f64.max(want.abs())),
                "({column}, {row}): got {got}, expect {want} (tol={tol})"
            );
        }
    }
}

pub fn random_matrix<const C: usize, const R: usize>(rng: &mut impl Rng) -> Matrix<C, R, f64> {
    Matrix::from_fn(|_, _| rng.random_range(-10.0..10.0))
}

pub fn random_int_matrix<const C: usize, const R: usize>(rng: &mut impl Rng) -> Matrix<C, R, i64> {
    Matrix::from_fn(|_, _| rng.random_range(-9..=9))
}

/// 64-byte aligned copy, so the bulk kernels take the register path.
pub fn aligned<T: Copy>(values: &[T]) -> Vec64<T> {
    let mut v = Vec64::with_capacity(values.len());
    v.extend_from_slice(values);
    v
}

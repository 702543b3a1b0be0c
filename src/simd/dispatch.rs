// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Bulk Kernels Module** - *The operation table applied over slices*
//!
//! Slice-level entry points that run one table operation over every element of their inputs and
//! return freshly allocated, 64-byte aligned buffers.
//!
//! ## Paths
//! - **Register path** (feature `simd`, every input `SIMD_ALIGNMENT`-aligned): full chunks of the
//!   native register width, then one register loaded with the remaining elements and padded with
//!   `ONE` for the tail.
//! - **Scalar path**: the same table operations on the single-lane register of the element type.
//!
//! Both paths call the same table functions, so results are identical. Alternating fused
//! operators keep their meaning by element index: even elements take the even-lane operation.
//!
//! ## Errors
//! Operand slices of unequal length return `MathError::LengthMismatch`.

use minarrow::{Bitmask, Vec64};
use tracing::trace;

use crate::errors::MathError;
use crate::operators::{ArithmeticOperator, ComparisonOperator, FusedOperator, RoundingMode};
use crate::simd::SimdRegister;
use crate::simd::arithmetic::SimdArithmetic;
use crate::simd::compare::SimdCompare;
use crate::simd::construct::SimdConstruct;
use crate::simd::convert::SimdConvert;
use crate::simd::register::{NativeLane, Register};
use crate::simd::rounding::SimdRounding;
use crate::simd::sqrt::SimdSqrt;
use crate::traits::lane::Lane;
use crate::utils::{confirm_equal_len, is_simd_aligned};

/// Chooses between the register and scalar paths.
#[inline(always)]
fn register_path<T>(kernel: &'static str, inputs: &[&[T]]) -> bool {
    let aligned = cfg!(feature = "simd") && inputs.iter().all(|s| is_simd_aligned(s));
    trace!(kernel, aligned, len = inputs.first().map_or(0, |s| s.len()), "bulk kernel path");
    aligned
}

#[inline(always)]
fn output_buffer<T: Lane>(len: usize) -> Vec64<T> {
    let mut out = Vec64::with_capacity(len);
    out.resize(len, T::ZERO);
    out
}

/// Loads a chunk of at most `LANES` elements, padding short chunks with `ONE`.
#[inline(always)]
fn load_chunk<R: SimdRegister>(chunk: &[R::Element]) -> R {
    if chunk.len() == R::LANES {
        // SAFETY: the chunk holds exactly LANES elements.
        unsafe { R::loadu(chunk.as_ptr()) }
    } else {
        R::load_partial(chunk, <R::Element as Lane>::ONE)
    }
}

/// Stores the first `dst.len()` lanes of `v`.
#[inline(always)]
fn store_chunk<R: Register>(v: R, dst: &mut [R::Element])
where
    R: SimdConstruct,
{
    if dst.len() == R::LANES {
        // SAFETY: the destination holds exactly LANES elements.
        unsafe { v.storeu(dst.as_mut_ptr()) }
    } else {
        let n = dst.len();
        dst.copy_from_slice(&v.to_array().as_ref()[..n]);
    }
}

#[inline(always)]
fn unary_chunks<R: SimdRegister>(src: &[R::Element], out: &mut [R::Element], f: impl Fn(R) -> R) {
    for (s, o) in src.chunks(R::LANES).zip(out.chunks_mut(R::LANES)) {
        store_chunk(f(load_chunk::<R>(s)), o);
    }
}

#[inline(always)]
fn binary_chunks<R: SimdRegister>(
    lhs: &[R::Element],
    rhs: &[R::Element],
    out: &mut [R::Element],
    f: impl Fn(R, R) -> R,
) {
    let n = R::LANES;
    for ((a, b), o) in lhs.chunks(n).zip(rhs.chunks(n)).zip(out.chunks_mut(n)) {
        store_chunk(f(load_chunk::<R>(a), load_chunk::<R>(b)), o);
    }
}

fn fused_chunks<R: SimdRegister>(
    a: &[R::Element],
    b: &[R::Element],
    c: &[R::Element],
    out: &mut [R::Element],
    op: FusedOperator,
) {
    let n = R::LANES;
    let chunks = a.chunks(n).zip(b.chunks(n)).zip(c.chunks(n)).zip(out.chunks_mut(n));
    for (i, (((x, y), z), o)) in chunks.enumerate() {
        // A one-lane register has no odd lanes, so resolve alternation by element index.
        let op = if n == 1 && op.is_alternating() { op.at_lane(i) } else { op };
        let v = load_chunk::<R>(x).fused(op, load_chunk::<R>(y), load_chunk::<R>(z));
        store_chunk(v, o);
    }
}

fn compare_chunks<R: SimdRegister>(lhs: &[R::Element], rhs: &[R::Element], op: ComparisonOperator, out: &mut Bitmask) {
    let n = R::LANES;
    for (chunk, (a, b)) in lhs.chunks(n).zip(rhs.chunks(n)).enumerate() {
        let bits = load_chunk::<R>(a).to_bitmask(load_chunk::<R>(b), op);
        let base = chunk * n;
        for l in 0..a.len() {
            if (bits >> l) & 1 == 1 {
                out.set(base + l, true);
            }
        }
    }
}

fn convert_chunks<R: SimdRegister, U: Lane>(src: &[R::Element], out: &mut [U], saturating: bool) {
    let n = R::LANES;
    for (s, o) in src.chunks(n).zip(out.chunks_mut(n)) {
        let v = load_chunk::<R>(s);
        let converted = if saturating { v.cvt_saturating::<U>() } else { v.cvt::<U>() };
        let len = o.len();
        o.copy_from_slice(&converted.to_array().as_ref()[..len]);
    }
}

macro_rules! run_unary {
    ($kernel:expr, $T:ty, $src:expr, $out:expr, |$v:ident| $body:expr) => {
        if register_path($kernel, &[$src]) {
            unary_chunks::<<$T as NativeLane>::Native>($src, $out, |$v| $body);
        } else {
            unary_chunks::<<$T as NativeLane>::Single>($src, $out, |$v| $body);
        }
    };
}

/// Applies `op` lane-wise: `out[i] = lhs[i] op rhs[i]`.
pub fn apply_arithmetic<T: NativeLane>(lhs: &[T], rhs: &[T], op: ArithmeticOperator) -> Result<Vec64<T>, MathError> {
    confirm_equal_len("apply_arithmetic", lhs.len(), rhs.len())?;
    let mut out = output_buffer(lhs.len());
    if register_path("apply_arithmetic", &[lhs, rhs]) {
        binary_chunks::<T::Native>(lhs, rhs, out.as_mut_slice(), |a, b| a.arithmetic(op, b));
    } else {
        binary_chunks::<T::Single>(lhs, rhs, out.as_mut_slice(), |a, b| a.arithmetic(op, b));
    }
    Ok(out)
}

/// Applies a fused operator: `out[i] = op(a[i], b[i], c[i])`.
///
/// For the alternating operators "even" refers to the element index.
pub fn apply_fused<T: NativeLane>(a: &[T], b: &[T], c: &[T], op: FusedOperator) -> Result<Vec64<T>, MathError> {
    confirm_equal_len("apply_fused: b", a.len(), b.len())?;
    confirm_equal_len("apply_fused: c", a.len(), c.len())?;
    let mut out = output_buffer(a.len());
    if register_path("apply_fused", &[a, b, c]) {
        fused_chunks::<T::Native>(a, b, c, out.as_mut_slice(), op);
    } else {
        fused_chunks::<T::Single>(a, b, c, out.as_mut_slice(), op);
    }
    Ok(out)
}

/// Lane-wise comparison, one result bit per element.
pub fn apply_compare<T: NativeLane>(lhs: &[T], rhs: &[T], op: ComparisonOperator) -> Result<Bitmask, MathError> {
    confirm_equal_len("apply_compare", lhs.len(), rhs.len())?;
    let mut out = Bitmask::new_set_all(lhs.len(), false);
    if register_path("apply_compare", &[lhs, rhs]) {
        compare_chunks::<T::Native>(lhs, rhs, op, &mut out);
    } else {
        compare_chunks::<T::Single>(lhs, rhs, op, &mut out);
    }
    Ok(out)
}

/// Square root of every element.
pub fn apply_sqrt<T: NativeLane>(src: &[T]) -> Vec64<T> {
    let mut out = output_buffer(src.len());
    run_unary!("apply_sqrt", T, src, out.as_mut_slice(), |v| v.sqrt());
    out
}

/// Reciprocal square root of every element.
pub fn apply_rsqrt<T: NativeLane>(src: &[T]) -> Vec64<T> {
    let mut out = output_buffer(src.len());
    run_unary!("apply_rsqrt", T, src, out.as_mut_slice(), |v| v.rsqrt());
    out
}

/// Rounds every element with `mode`.
pub fn apply_rounding<T: NativeLane>(src: &[T], mode: RoundingMode) -> Vec64<T> {
    let mut out = output_buffer(src.len());
    run_unary!("apply_rounding", T, src, out.as_mut_slice(), |v| v.round(mode));
    out
}

/// Absolute value of every element.
pub fn apply_abs<T: NativeLane>(src: &[T]) -> Vec64<T> {
    let mut out = output_buffer(src.len());
    run_unary!("apply_abs", T, src, out.as_mut_slice(), |v| v.abs());
    out
}

/// Negates every element (integers wrap).
pub fn apply_negate<T: NativeLane>(src: &[T]) -> Vec64<T> {
    let mut out = output_buffer(src.len());
    run_unary!("apply_negate", T, src, out.as_mut_slice(), |v| v.negate());
    out
}

/// Converts every element with `cvt` semantics, or `cvt_saturating` when `saturating` is set.
pub fn apply_convert<T: NativeLane, U: Lane>(src: &[T], saturating: bool) -> Vec64<U> {
    let mut out = output_buffer::<U>(src.len());
    if register_path("apply_convert", &[src]) {
        convert_chunks::<T::Native, U>(src, out.as_mut_slice(), saturating);
    } else {
        convert_chunks::<T::Single, U>(src, out.as_mut_slice(), saturating);
    }
    out
}

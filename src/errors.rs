// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Checked Entry Point Failures*
//!
//! Almost every contract in this crate is enforced at compile time: matrix shapes are const
//! generics, square-only operations only exist on square matrices, and const-indexed access is
//! asserted during monomorphisation. `MathError` covers the small set of *runtime-checked*
//! entry points: slice loads/stores (length and alignment), `try_*` accessors and the bulk slice kernels.

use thiserror::Error;

/// Error type for runtime-checked operations.
///
/// Each variant carries a contextual message naming the operation and the offending values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// Operand or buffer lengths do not line up.
    #[error("Length mismatch: {0}")]
    LengthMismatch(String),

    /// Runtime index outside the container's fixed dimensions.
    #[error("Out of bounds: {0}")]
    OutOfBounds(String),

    /// Buffer does not satisfy the alignment an aligned register transfer needs.
    #[error("Misaligned buffer: {0}")]
    Misaligned(String),
}

/// Creates a formatted error message for length mismatches between left-hand side (LHS) and right-hand side (RHS) operands.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `lhs` - Length of the left-hand side operand
/// * `rhs` - Length of the right-hand side operand
pub fn log_length_mismatch(fname: &str, lhs: usize, rhs: usize) -> String {
    format!("{} => Length mismatch: LHS {} RHS {}", fname, lhs, rhs)
}

// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Compile-Time Behaviour Parameters*
//!
//! Global constants shared by the register table, the bulk slice kernels and the
//! matrix/vector layer. Lane counts themselves come from `build.rs` (see `simd_lanes.rs`).

/// Byte alignment the bulk slice kernels require before taking the register path.
///
/// Matches the allocation alignment of `minarrow::Vec64`, so buffers produced by the
/// bulk kernels can be fed straight back in without falling back to the scalar path.
pub const SIMD_ALIGNMENT: usize = 64;

/// Absolute tolerance used by `near_equal_default` on vectors and matrices.
pub const NEAR_EQUAL_EPSILON: f64 = 1e-6;

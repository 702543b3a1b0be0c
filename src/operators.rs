// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Contains basic numeric operators for matching and routing purposes

/// Arithmetic operators for numeric computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOperator {
    /// Addition (`lhs + rhs`)
    ///
    /// Integer lanes wrap on overflow.
    Add,
    /// Subtraction (`lhs - rhs`)
    Subtract,
    /// Multiplication (`lhs * rhs`)
    Multiply,
    /// Division (`lhs / rhs`)
    ///
    /// For integers, division by zero panics.
    /// For floating-point, follows IEEE 754 (yields ±Inf or NaN).
    Divide,
    /// Truncated remainder (`lhs - trunc(lhs / rhs) * rhs`)
    ///
    /// The sign of a non-zero result follows `lhs`, as with C's `fmod` and integer `%`.
    /// It is *not* the floored or Euclidean remainder.
    Remainder,
}

/// Comparison operators for binary predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    /// Equality comparison (`lhs == rhs`)
    Equals,
    /// Inequality comparison (`lhs != rhs`)
    NotEquals,
    /// Less-than comparison (`lhs < rhs`)
    LessThan,
    /// Less-than-or-equal comparison (`lhs <= rhs`)
    LessThanOrEqualTo,
    /// Greater-than comparison (`lhs > rhs`)
    GreaterThan,
    /// Greater-than-or-equal comparison (`lhs >= rhs`)
    GreaterThanOrEqualTo,
}

impl ComparisonOperator {
    /// Applies the operator to a pair of scalars.
    #[inline(always)]
    pub fn apply<T: PartialOrd>(self, lhs: T, rhs: T) -> bool {
        match self {
            ComparisonOperator::Equals => lhs == rhs,
            ComparisonOperator::NotEquals => lhs != rhs,
            ComparisonOperator::LessThan => lhs < rhs,
            ComparisonOperator::LessThanOrEqualTo => lhs <= rhs,
            ComparisonOperator::GreaterThan => lhs > rhs,
            ComparisonOperator::GreaterThanOrEqualTo => lhs >= rhs,
        }
    }
}

/// Rounding direction for `round` and rounded conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round to nearest, ties to even (the hardware default rounding mode).
    #[default]
    Nearest,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceil,
    /// Round toward zero.
    Truncate,
}

/// Fused multiply-add family, all of the form `±(a * b) ± c`.
///
/// For floating-point lanes the product is not rounded before the addition.
/// For integer lanes every step wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FusedOperator {
    /// `a * b + c`
    MulAdd,
    /// `a * b - c`
    MulSub,
    /// `-(a * b) + c`
    NegMulAdd,
    /// `-(a * b) - c`
    NegMulSub,
    /// Even lanes `a * b - c`, odd lanes `a * b + c`
    MulAddSub,
    /// Even lanes `a * b + c`, odd lanes `a * b - c`
    MulSubAdd,
}

impl FusedOperator {
    /// Resolves the alternating variants to the non-alternating operator applied at `lane`.
    ///
    /// Used by single-lane paths, where every element would otherwise sit in lane 0.
    #[inline(always)]
    pub fn at_lane(self, lane: usize) -> FusedOperator {
        let even = lane % 2 == 0;
        match self {
            FusedOperator::MulAddSub if even => FusedOperator::MulSub,
            FusedOperator::MulAddSub => FusedOperator::MulAdd,
            FusedOperator::MulSubAdd if even => FusedOperator::MulAdd,
            FusedOperator::MulSubAdd => FusedOperator::MulSub,
            other => other,
        }
    }

    /// True for `MulAddSub` and `MulSubAdd`.
    #[inline(always)]
    pub fn is_alternating(self) -> bool {
        matches!(self, FusedOperator::MulAddSub | FusedOperator::MulSubAdd)
    }
}

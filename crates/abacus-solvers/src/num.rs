// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Solver Numeric Trait
//!
//! Unified numeric bounds for the exercise solvers. `SolverNumeric`
//! specifies the integer capabilities the generic solvers require,
//! including intrinsic traits (`PrimInt`, `Unsigned`), lossless-as-possible
//! conversion to `f64` for density arithmetic, and by-value checked
//! arithmetic traits from `abacus_core`.
//!
//! ## Motivation
//!
//! The solvers should remain generic over integer width while retaining
//! predictable arithmetic semantics. This trait collects the necessary
//! bounds into a single alias, simplifying generic signatures and ensuring
//! consistent overflow handling.
//!
//! The exercises deal exclusively in non-negative quantities (weights,
//! values, amounts), so the alias is bounded on `Unsigned`; signed types
//! are intentionally excluded.

use std::hash::Hash;

use abacus_core::num::{
    constants::{PlusOne, Zero},
    ops::checked_arithmetic,
};
use num_traits::{PrimInt, ToPrimitive, Unsigned};

/// A trait alias for numeric types that can be used in the solvers.
/// This includes unsigned integer types that support checked arithmetic
/// operations. These are usually `u8`, `u16`, `u32`, `u64` and `usize`.
pub trait SolverNumeric:
    PrimInt
    + Unsigned
    + ToPrimitive
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + PlusOne
    + checked_arithmetic::CheckedAddVal
    + checked_arithmetic::CheckedSubVal
    + checked_arithmetic::CheckedMulVal
    + Send
    + Sync
    + Hash
{
}

impl<T> SolverNumeric for T where
    T: PrimInt
        + Unsigned
        + ToPrimitive
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + PlusOne
        + checked_arithmetic::CheckedAddVal
        + checked_arithmetic::CheckedSubVal
        + checked_arithmetic::CheckedMulVal
        + Send
        + Sync
        + Hash
{
}

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

//! # Abacus Core
//!
//! Foundational utilities, numerics, and math primitives for the Abacus
//! exercise-solver ecosystem. This crate consolidates reusable building
//! blocks that underpin the model and solver crates.
//!
//! ## Modules
//!
//! - `math`: Euclidean number theory (`gcd`, `lcm`) with overflow-checked
//!   composition.
//! - `num`: Integer-centric utilities including associated constant traits
//!   (`Zero`, `PlusOne`) and by-value traits for checked arithmetic
//!   (`Option<T>`-returning).
//! - `utils`: Core helpers such as phantom-tagged, strongly typed indices
//!   (`TypedIndex<T>`).
//!
//! ## Purpose
//!
//! These primitives enable robust, generic code in the solver pipelines,
//! reducing accidental bugs (e.g., index mixing, overflow) while keeping
//! runtime overhead minimal.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod num;
pub mod utils;

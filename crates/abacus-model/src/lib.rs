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

//! # Abacus Model
//!
//! **The domain model for the Abacus exercise solvers.**
//!
//! This crate defines the data structures that describe the solvable
//! problems. It serves as the data interchange layer between the problem
//! definition (user input) and the solving crate (`abacus_solvers`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **solving**:
//!
//! * **`index`**: Strongly-typed `ItemIndex` to prevent logical indexing errors.
//! * **`knapsack`**: The `KnapsackInstance` (immutable, optimized for solving)
//!   and `KnapsackInstanceBuilder` (mutable, optimized for configuration).
//! * **`solution`**: The output format for the fractional knapsack, including
//!   the total value and the per-item fractions in original input order.
//! * **`query`**: Ephemeral value types for the Fibonacci queries.
//! * **`loading`**: Whitespace-token parsing of the fixed stdin formats into
//!   the types above.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Item indices are a distinct type, not raw `usize`.
//! 2.  **Memory Layout**: Instance data is stored in Structure of Arrays (SoA)
//!     form (parallel vectors) so the greedy scans stay cache-friendly.
//! 3.  **Fail-Fast**: Builders and loaders validate inputs eagerly so a solver
//!     never observes an invalid instance.

pub mod index;
pub mod knapsack;
pub mod loading;
pub mod query;
pub mod solution;

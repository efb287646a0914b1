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

//! # Abacus Solvers
//!
//! The algorithmic core of the Abacus exercise suite. Every solver is a
//! pure function of its explicit inputs: no shared state, no
//! initialization lifecycle beyond function-local buffers, and therefore
//! safe to call repeatedly and concurrently from independent threads.
//!
//! ## Modules
//!
//! - `num`: The `SolverNumeric` trait alias collecting the unsigned-integer
//!   bounds the generic solvers require.
//! - `fib`: The Fibonacci family, built on Pisano-period cycle detection:
//!   `fib_mod`, `pisano_period`, last digits, and periodic prefix sums.
//! - `knapsack`: The fractional-knapsack greedy solver (descending value
//!   density, fractional final item).
//! - `change`: Greedy coin change over the fixed denominations [10, 5, 1].
//! - `summands`: Maximum number of pairwise distinct summands.
//! - `product`: Maximum pairwise product via index-tracking scans.

pub mod change;
pub mod fib;
pub mod knapsack;
pub mod num;
pub mod product;
pub mod summands;

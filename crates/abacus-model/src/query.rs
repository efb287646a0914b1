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

//! Ephemeral query types for the Fibonacci solvers.
//!
//! These are plain value types that exist only for the duration of one
//! call; nothing is persisted. Their constructors document the numeric
//! preconditions (positive modulus, ordered range bounds) so violations
//! surface at the boundary instead of deep inside a residue scan.

/// A query for `F(index) mod modulus`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FibModuloQuery {
    index: u64,
    modulus: u64,
}

impl FibModuloQuery {
    /// Creates a new query.
    ///
    /// # Panics
    ///
    /// Panics (debug builds) if `modulus` is zero. A zero modulus has no
    /// residue system and the period scan would never terminate.
    #[inline]
    pub fn new(index: u64, modulus: u64) -> Self {
        debug_assert!(
            modulus >= 1,
            "called `FibModuloQuery::new` with a zero modulus"
        );

        Self { index, modulus }
    }

    /// Returns the Fibonacci index `n`.
    #[inline]
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Returns the modulus `m`.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }
}

impl std::fmt::Display for FibModuloQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "F({}) mod {}", self.index, self.modulus)
    }
}

/// A query for the last digit of `F(low) + F(low + 1) + ... + F(high)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FibRangeQuery {
    low: u64,
    high: u64,
}

impl FibRangeQuery {
    /// Creates a new range query.
    ///
    /// # Panics
    ///
    /// Panics (debug builds) if `low > high`.
    #[inline]
    pub fn new(low: u64, high: u64) -> Self {
        debug_assert!(
            low <= high,
            "called `FibRangeQuery::new` with an inverted range: low is {} but high is {}",
            low,
            high
        );

        Self { low, high }
    }

    /// Returns the inclusive lower bound of the range.
    #[inline]
    pub fn low(&self) -> u64 {
        self.low
    }

    /// Returns the inclusive upper bound of the range.
    #[inline]
    pub fn high(&self) -> u64 {
        self.high
    }
}

impl std::fmt::Display for FibRangeQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sum F({}..={}) mod 10", self.low, self.high)
    }
}

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

//! Greedy coin change.
//!
//! The denomination system [10, 5, 1] is canonical: taking as many of the
//! largest coin as fits is optimal, which is what licenses the greedy
//! division loop. Arbitrary denomination systems do not have this property
//! and would require dynamic programming instead.

/// The coin denominations of the money-change exercise, largest first.
pub const DENOMINATIONS: [u64; 3] = [10, 5, 1];

/// Computes the minimum number of coins that change `amount`.
///
/// # Examples
///
/// ```rust
/// # use abacus_solvers::change::min_coins;
/// assert_eq!(min_coins(2), 2);
/// assert_eq!(min_coins(28), 6); // 10 + 10 + 5 + 1 + 1 + 1
/// ```
pub fn min_coins(amount: u64) -> u64 {
    let mut remaining = amount;
    let mut coins = 0;

    for &denomination in DENOMINATIONS.iter() {
        coins += remaining / denomination;
        remaining %= denomination;
    }

    // The unit coin consumes any remainder.
    debug_assert_eq!(remaining, 0);
    coins
}

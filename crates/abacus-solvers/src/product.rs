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

//! Maximum pairwise product.

use crate::num::SolverNumeric;

/// Computes the maximum product of two distinct entries of `numbers`.
///
/// The two largest entries are found by index-tracking scans; the second
/// scan excludes the first winner by *index*, not by value, so duplicated
/// maxima still pair up with each other.
///
/// # Panics
///
/// Panics if `numbers` has fewer than two entries, or if the product
/// overflows `T`.
///
/// # Examples
///
/// ```rust
/// # use abacus_solvers::product::max_pairwise_product;
/// assert_eq!(max_pairwise_product(&[1u64, 2, 3]), 6);
/// assert_eq!(max_pairwise_product(&[7u64, 5, 14, 2, 8, 8, 10, 1, 2, 3]), 140);
/// ```
pub fn max_pairwise_product<T>(numbers: &[T]) -> T
where
    T: SolverNumeric,
{
    assert!(
        numbers.len() >= 2,
        "called `max_pairwise_product` with fewer than two numbers: the len is {}",
        numbers.len()
    );

    let mut first: usize = 0;
    for i in 1..numbers.len() {
        if numbers[i] > numbers[first] {
            first = i;
        }
    }

    let mut second: usize = if first == 0 { 1 } else { 0 };
    for i in 0..numbers.len() {
        if i != first && numbers[i] > numbers[second] {
            second = i;
        }
    }

    numbers[first]
        .checked_mul_val(numbers[second])
        .expect("pairwise product overflows the numeric type")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_input() {
        assert_eq!(max_pairwise_product(&[3u64, 4]), 12);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(max_pairwise_product(&[1u64, 2, 3]), 6);
        assert_eq!(max_pairwise_product(&[7u64, 5, 14, 2, 8, 8, 10, 1, 2, 3]), 140);
    }

    #[test]
    fn test_duplicated_maximum_pairs_with_itself() {
        // Value-based selection would skip the duplicate and return 3 * 9;
        // index-based selection pairs the two nines.
        assert_eq!(max_pairwise_product(&[9u64, 3, 9]), 81);
        assert_eq!(max_pairwise_product(&[100000u64, 100000]), 10_000_000_000);
    }

    #[test]
    fn test_zeros_are_handled() {
        assert_eq!(max_pairwise_product(&[0u64, 0]), 0);
        assert_eq!(max_pairwise_product(&[0u64, 0, 5]), 0);
    }

    #[test]
    fn test_order_does_not_matter() {
        assert_eq!(max_pairwise_product(&[2u64, 9, 5]), 45);
        assert_eq!(max_pairwise_product(&[9u64, 5, 2]), 45);
        assert_eq!(max_pairwise_product(&[5u64, 2, 9]), 45);
    }

    #[test]
    #[should_panic(expected = "fewer than two numbers")]
    fn test_single_entry_panics() {
        let _ = max_pairwise_product(&[1u64]);
    }

    #[test]
    #[should_panic(expected = "overflows the numeric type")]
    fn test_overflow_panics() {
        let _ = max_pairwise_product(&[u64::MAX, 2]);
    }
}

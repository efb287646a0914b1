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

//! Maximum number of pairwise distinct summands.
//!
//! Greedily picking 1, 2, 3, ... maximizes the count; when the leftover
//! would collide with a summand already picked, it is folded into the last
//! pick instead, which keeps all entries distinct without reducing the
//! count.

/// Decomposes `n` into the maximum number of pairwise distinct positive
/// summands, returned in increasing order. `n = 0` yields the empty
/// decomposition.
///
/// # Examples
///
/// ```rust
/// # use abacus_solvers::summands::distinct_summands;
/// assert_eq!(distinct_summands(6), vec![1, 2, 3]);
/// assert_eq!(distinct_summands(8), vec![1, 2, 5]);
/// assert_eq!(distinct_summands(2), vec![2]);
/// ```
pub fn distinct_summands(n: u64) -> Vec<u64> {
    let mut summands = Vec::new();
    let mut remaining = n;
    let mut candidate: u64 = 1;

    while remaining > 0 {
        remaining -= candidate;
        if candidate + 1 > remaining {
            // The leftover cannot become its own summand; fold it into the
            // current pick.
            summands.push(candidate + remaining);
            remaining = 0;
        } else {
            summands.push(candidate);
            candidate += 1;
        }
    }

    summands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_decompositions() {
        assert_eq!(distinct_summands(0), Vec::<u64>::new());
        assert_eq!(distinct_summands(1), vec![1]);
        assert_eq!(distinct_summands(2), vec![2]);
        assert_eq!(distinct_summands(6), vec![1, 2, 3]);
        assert_eq!(distinct_summands(8), vec![1, 2, 5]);
        assert_eq!(distinct_summands(10), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_summands_are_distinct_and_sum_to_n() {
        for n in 0..2000u64 {
            let summands = distinct_summands(n);

            assert_eq!(summands.iter().sum::<u64>(), n, "sum mismatch for {}", n);
            for window in summands.windows(2) {
                assert!(
                    window[0] < window[1],
                    "summands for {} are not strictly increasing: {:?}",
                    n,
                    summands
                );
            }
        }
    }

    #[test]
    fn test_count_is_maximal() {
        // k distinct positive summands need at least 1 + 2 + ... + k = k(k+1)/2,
        // so the count k must satisfy k(k+1)/2 <= n; the greedy result hits
        // that bound exactly.
        for n in 1..2000u64 {
            let k = distinct_summands(n).len() as u64;
            assert!(k * (k + 1) / 2 <= n, "count {} impossible for {}", k, n);
            assert!(
                (k + 1) * (k + 2) / 2 > n,
                "count {} for {} is not maximal",
                k,
                n
            );
        }
    }
}

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

//! # Fibonacci Family
//!
//! Fibonacci computations built on one observation: the sequence of
//! Fibonacci residues modulo `m` is periodic (the *Pisano period*). The
//! residue cycle is detected by watching for the seed pair `(0, 1)` to
//! reappear; `F(n) mod m` for huge `n` then reduces to a lookup at
//! `n mod π(m)`.
//!
//! The scan is bounded at `6·m` residues. That bound is empirical: it
//! holds for every modulus the exercises use, but it is not a proven
//! bound for arbitrary `m`. If the seed pair does not reappear within the
//! bound, the scanned prefix is used as the cycle, matching the behavior
//! callers of the bounded scan have historically relied on.
//!
//! The prefix-sum utilities (`fib_sum_last_digit`,
//! `fib_range_sum_last_digit`) apply the same periodicity to running sums
//! of last digits, where the period is the fixed `π(10) = 60`.

use crate::num::SolverNumeric;
use abacus_core::num::ops::checked_arithmetic::CheckedAddVal;
use abacus_model::query::{FibModuloQuery, FibRangeQuery};
use log::debug;
use smallvec::SmallVec;

/// The Pisano period of modulus 10: the cycle length of Fibonacci last
/// digits.
pub const LAST_DIGIT_PERIOD: u64 = 60;

/// One cycle of Fibonacci residues modulo `modulus`, starting `0, 1`.
///
/// The inline capacity covers the modulus-10 cycle (60 residues), so the
/// last-digit paths never touch the heap. Larger moduli spill over.
fn residue_cycle(modulus: u64) -> SmallVec<[u64; 64]> {
    debug_assert!(
        modulus >= 1,
        "called `residue_cycle` with a zero modulus"
    );

    if modulus == 1 {
        // Every residue is zero; the cycle is the single residue [0]. The
        // seed pair (0, 1) can never be observed, so the scan below would
        // only ever hit its fallback here.
        return smallvec::smallvec![0];
    }

    let bound = (6 * modulus) as usize;
    let mut residues: SmallVec<[u64; 64]> = SmallVec::new();
    residues.push(0);
    residues.push(1);

    for i in 2..bound {
        let next = (residues[i - 2] + residues[i - 1]) % modulus;
        residues.push(next);

        if residues[i - 1] == 0 && next == 1 {
            // The seed pair restarted at position i-1; everything from
            // there on repeats the prefix.
            residues.truncate(i - 1);
            return residues;
        }
    }

    // The seed pair did not reappear within the 6·m scan bound. The bound
    // is empirical, not proven for arbitrary m; fall back to the scanned
    // prefix, minus the trailing pair the scan could not confirm.
    residues.truncate(bound - 2);
    residues
}

/// Computes the Pisano period `π(modulus)`: the length of the cycle with
/// which Fibonacci residues modulo `modulus` repeat.
///
/// # Panics
///
/// Panics (debug builds) if `modulus` is zero.
///
/// # Examples
///
/// ```rust
/// # use abacus_solvers::fib::pisano_period;
/// assert_eq!(pisano_period(2), 3);
/// assert_eq!(pisano_period(10), 60);
/// ```
pub fn pisano_period(modulus: u64) -> u64 {
    let period = residue_cycle(modulus).len() as u64;
    debug!("pisano period for modulus {} is {}", modulus, period);
    period
}

/// Computes `F(n) mod m` for the given query. The result lies in `[0, m)`.
///
/// The full residue cycle is materialized once per call and discarded
/// afterwards; there is no cross-call state.
///
/// # Examples
///
/// ```rust
/// # use abacus_model::query::FibModuloQuery;
/// # use abacus_solvers::fib::fib_mod;
/// assert_eq!(fib_mod(FibModuloQuery::new(10, 2)), 1);
/// assert_eq!(fib_mod(FibModuloQuery::new(239, 1000)), 161);
/// ```
pub fn fib_mod(query: FibModuloQuery) -> u64 {
    let cycle = residue_cycle(query.modulus());
    let period = cycle.len() as u64;
    cycle[(query.index() % period) as usize]
}

/// Computes the last digit of `F(n)`.
#[inline]
pub fn fib_last_digit(n: u64) -> u64 {
    fib_mod(FibModuloQuery::new(n, 10))
}

/// Computes the last digit of `F(0) + F(1) + ... + F(n)`.
///
/// The running sums of last digits repeat with the same period 60 as the
/// last digits themselves, so one cycle prefix plus the full-cycle
/// contribution answers the query for any `n`. Both factors of the
/// full-cycle term are reduced modulo 10 first, so huge `n` cannot
/// overflow the intermediate product.
pub fn fib_sum_last_digit(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }

    let cycle = residue_cycle(10);
    debug_assert_eq!(cycle.len() as u64, LAST_DIGIT_PERIOD);

    let cycle_sum: u64 = cycle.iter().sum::<u64>() % 10;
    let prefix_sum: u64 = cycle[..=(n % LAST_DIGIT_PERIOD) as usize].iter().sum();

    (cycle_sum * (n / LAST_DIGIT_PERIOD % 10) + prefix_sum) % 10
}

/// Computes the last digit of `F(low) + F(low + 1) + ... + F(high)`.
///
/// The range sum is the difference of two prefix sums. Since both
/// prefixes are digits, a negative difference wraps around by adding 10.
/// `low = 0` uses the empty prefix instead of indexing below zero.
///
/// # Examples
///
/// ```rust
/// # use abacus_model::query::FibRangeQuery;
/// # use abacus_solvers::fib::fib_range_sum_last_digit;
/// assert_eq!(fib_range_sum_last_digit(FibRangeQuery::new(3, 7)), 1);
/// assert_eq!(fib_range_sum_last_digit(FibRangeQuery::new(10, 10)), 5);
/// ```
pub fn fib_range_sum_last_digit(query: FibRangeQuery) -> u64 {
    let high_sum = fib_sum_last_digit(query.high());
    let low_sum = if query.low() == 0 {
        0
    } else {
        fib_sum_last_digit(query.low() - 1)
    };

    if high_sum >= low_sum {
        high_sum - low_sum
    } else {
        10 - (low_sum - high_sum)
    }
}

/// Computes `F(n)` by the fast iterative recurrence.
///
/// # Panics
///
/// Panics if `F(n)` does not fit in `u64` (that is, for `n > 93`).
///
/// # Examples
///
/// ```rust
/// # use abacus_solvers::fib::fib;
/// assert_eq!(fib(10), 55);
/// assert_eq!(fib(45), 1134903170);
/// ```
pub fn fib(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }

    let mut previous: u64 = 0;
    let mut current: u64 = 1;
    for _ in 2..=n {
        let next = previous
            .checked_add_val(current)
            .expect("Fibonacci number overflows u64");
        previous = current;
        current = next;
    }
    current
}

/// Computes `F(n) mod m` generically by direct iteration, without cycle
/// detection. Linear in `n`; intended for small indices and as the
/// reference the periodic fast path is validated against.
pub fn fib_mod_direct<T>(n: u64, modulus: T) -> T
where
    T: SolverNumeric,
{
    debug_assert!(
        modulus > T::ZERO,
        "called `fib_mod_direct` with a zero modulus"
    );

    let mut previous = T::ZERO;
    let mut current = T::PLUS_ONE % modulus;
    for _ in 0..n {
        let next = (previous + current) % modulus;
        previous = current;
        current = next;
    }
    previous
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fm(n: u64, m: u64) -> u64 {
        fib_mod(FibModuloQuery::new(n, m))
    }

    #[test]
    fn test_fib_small_values() {
        let expected = [0u64, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, &want) in expected.iter().enumerate() {
            assert_eq!(fib(n as u64), want, "F({})", n);
        }
        assert_eq!(fib(20), 6765);
        assert_eq!(fib(45), 1134903170);
    }

    #[test]
    fn test_fib_largest_representable() {
        assert_eq!(fib(92), 7540113804746346429);
        assert_eq!(fib(93), 12200160415121876738);
    }

    #[test]
    #[should_panic(expected = "overflows u64")]
    fn test_fib_overflow_panics() {
        let _ = fib(94);
    }

    #[test]
    fn test_pisano_periods_known_values() {
        assert_eq!(pisano_period(1), 1);
        assert_eq!(pisano_period(2), 3);
        assert_eq!(pisano_period(3), 8);
        assert_eq!(pisano_period(5), 20);
        assert_eq!(pisano_period(10), 60);
    }

    #[test]
    fn test_fib_mod_seed_values() {
        // F(0) = 0 and F(1) = 1 in every residue system.
        for m in 1..=50u64 {
            assert_eq!(fm(0, m), 0, "F(0) mod {}", m);
        }
        for m in 2..=50u64 {
            assert_eq!(fm(1, m), 1, "F(1) mod {}", m);
        }
    }

    #[test]
    fn test_fib_mod_known_values() {
        assert_eq!(fm(10, 2), 1);
        assert_eq!(fm(239, 1000), 161);
        assert_eq!(fm(2015, 3), 1);
        assert_eq!(fm(2816213588, 239), 151);
    }

    #[test]
    fn test_fib_mod_modulus_one_is_always_zero() {
        for n in [0u64, 1, 2, 17, 1_000_000_007] {
            assert_eq!(fm(n, 1), 0, "F({}) mod 1", n);
        }
    }

    #[test]
    fn test_fib_mod_matches_direct_iteration() {
        for m in 2..=40u64 {
            for n in 0..=120u64 {
                assert_eq!(
                    fm(n, m),
                    fib_mod_direct(n, m),
                    "F({}) mod {} disagrees with direct iteration",
                    n,
                    m
                );
            }
        }
    }

    #[test]
    fn test_fib_mod_periodicity() {
        for m in 2..=40u64 {
            let period = pisano_period(m);
            for n in 0..=80u64 {
                assert_eq!(
                    fm(n, m),
                    fm(n + period, m),
                    "periodicity violated for n = {}, m = {}",
                    n,
                    m
                );
            }
        }
    }

    #[test]
    fn test_fib_last_digit_matches_direct_iteration() {
        for n in 0..=200u64 {
            assert_eq!(fib_last_digit(n), fib_mod_direct(n, 10), "F({}) mod 10", n);
        }
    }

    #[test]
    fn test_fib_sum_last_digit_small_values() {
        assert_eq!(fib_sum_last_digit(0), 0);
        assert_eq!(fib_sum_last_digit(1), 1);
        assert_eq!(fib_sum_last_digit(2), 2);
        assert_eq!(fib_sum_last_digit(3), 4);
        assert_eq!(fib_sum_last_digit(10), 3); // 0+1+1+2+3+5+8+13+21+34+55 = 143
        assert_eq!(fib_sum_last_digit(100), 5);
    }

    #[test]
    fn test_fib_sum_last_digit_matches_direct_iteration() {
        let mut running = 0u64;
        for n in 0..=300u64 {
            running = (running + fib_mod_direct(n, 10)) % 10;
            assert_eq!(fib_sum_last_digit(n), running, "prefix sum up to {}", n);
        }
    }

    #[test]
    fn test_fib_sum_last_digit_huge_index_no_overflow() {
        // Only checks the call completes and stays a digit; the reduced
        // formula must not overflow for indices near u64::MAX.
        assert!(fib_sum_last_digit(u64::MAX) <= 9);
    }

    #[test]
    fn test_fib_range_sum_known_values() {
        assert_eq!(fib_range_sum_last_digit(FibRangeQuery::new(3, 7)), 1);
        assert_eq!(fib_range_sum_last_digit(FibRangeQuery::new(10, 10)), 5);
        assert_eq!(fib_range_sum_last_digit(FibRangeQuery::new(0, 0)), 0);
        assert_eq!(fib_range_sum_last_digit(FibRangeQuery::new(0, 1)), 1);
    }

    #[test]
    fn test_fib_range_sum_matches_direct_iteration() {
        for low in 0..=40u64 {
            for high in low..=40u64 {
                let mut want = 0u64;
                for n in low..=high {
                    want = (want + fib_mod_direct(n, 10)) % 10;
                }
                assert_eq!(
                    fib_range_sum_last_digit(FibRangeQuery::new(low, high)),
                    want,
                    "range sum {}..={}",
                    low,
                    high
                );
            }
        }
    }

    #[test]
    fn test_fib_range_sum_wraparound_subtraction() {
        // S(9) = 8 and S(10) = 3, so the subtraction for 10..=10 goes
        // negative before the wraparound correction.
        assert_eq!(fib_sum_last_digit(9), 8);
        assert_eq!(fib_sum_last_digit(10), 3);
        assert_eq!(fib_range_sum_last_digit(FibRangeQuery::new(10, 10)), 5);
    }
}

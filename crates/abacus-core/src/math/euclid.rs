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

//! # Euclidean Arithmetic
//!
//! Iterative greatest-common-divisor and least-common-multiple over generic
//! unsigned integers. The recursive textbook formulation maps to a plain
//! loop here; each step replaces `(a, b)` with `(b, a mod b)` until the
//! remainder vanishes.

use crate::num::ops::checked_arithmetic::CheckedMulVal;
use num_traits::{PrimInt, Unsigned};

/// Computes the greatest common divisor of `a` and `b`.
///
/// `gcd(a, 0)` is `a` and `gcd(0, 0)` is `0`, following the usual
/// convention that every integer divides zero.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::math::euclid::gcd;
/// assert_eq!(gcd(357u64, 234u64), 3);
/// assert_eq!(gcd(18u64, 35u64), 1);
/// assert_eq!(gcd(0u64, 7u64), 7);
/// ```
#[inline]
pub fn gcd<T>(mut a: T, mut b: T) -> T
where
    T: PrimInt + Unsigned,
{
    while b != T::zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Computes the least common multiple of `a` and `b`, or `None` if the
/// result does not fit in `T`.
///
/// `lcm(0, 0)` is defined as `0` (the division-by-zero case is handled
/// before the quotient is formed). The quotient `a / gcd(a, b)` is taken
/// first so that only a single overflow-checked multiplication remains.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::math::euclid::lcm;
/// assert_eq!(lcm(6u64, 8u64), Some(24));
/// assert_eq!(lcm(0u64, 0u64), Some(0));
/// assert_eq!(lcm(u64::MAX, u64::MAX - 1), None);
/// ```
#[inline]
pub fn lcm<T>(a: T, b: T) -> Option<T>
where
    T: PrimInt + Unsigned + CheckedMulVal,
{
    if a == T::zero() && b == T::zero() {
        return Some(T::zero());
    }
    (a / gcd(a, b)).checked_mul_val(b)
}

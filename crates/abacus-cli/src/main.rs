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

//! Command-line front end for the exercise solvers.
//!
//! Every subcommand reads the tokens of one exercise from standard input in
//! its fixed order and prints the single result to standard output. There
//! is no other I/O: no files, no network, no persisted state.

use abacus_core::math::euclid::{gcd, lcm};
use abacus_model::loading::{
    read_fib_modulo_query, read_fib_range_query, KnapsackLoader, TokenReader,
};
use abacus_solvers::{change, fib, knapsack, product, summands};
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead};

#[derive(Parser, Debug)]
#[clap(version, about = "Solvers for classic algorithmic exercises")]
enum Args {
    /// Reads `n` and then n integers; prints the maximum pairwise product.
    MaxPairwiseProduct,
    /// Reads `a b`; prints the greatest common divisor.
    Gcd,
    /// Reads `a b`; prints the least common multiple.
    Lcm,
    /// Reads `n`; prints F(n).
    Fibonacci,
    /// Reads `n`; prints the last digit of F(n).
    FibonacciLastDigit,
    /// Reads `n m`; prints F(n) mod m.
    FibonacciMod,
    /// Reads `n`; prints the last digit of F(0) + ... + F(n).
    FibonacciSumLastDigit,
    /// Reads `low high`; prints the last digit of F(low) + ... + F(high).
    FibonacciPartialSum,
    /// Reads `amount`; prints the minimum number of coins changing it.
    MoneyChange,
    /// Reads `n`; prints the maximum number of pairwise distinct summands
    /// of n, then the summands themselves.
    MaximumPrizes,
    /// Reads `n capacity` and then n lines of `value weight`; prints the
    /// maximum packable value with 10 decimal digits.
    FractionalKnapsack,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let stdin = io::stdin().lock();

    match args {
        Args::MaxPairwiseProduct => run_max_pairwise_product(stdin),
        Args::Gcd => run_gcd(stdin),
        Args::Lcm => run_lcm(stdin),
        Args::Fibonacci => run_fibonacci(stdin),
        Args::FibonacciLastDigit => run_fibonacci_last_digit(stdin),
        Args::FibonacciMod => run_fibonacci_mod(stdin),
        Args::FibonacciSumLastDigit => run_fibonacci_sum_last_digit(stdin),
        Args::FibonacciPartialSum => run_fibonacci_partial_sum(stdin),
        Args::MoneyChange => run_money_change(stdin),
        Args::MaximumPrizes => run_maximum_prizes(stdin),
        Args::FractionalKnapsack => run_fractional_knapsack(stdin),
    }
}

fn run_max_pairwise_product<R: BufRead>(rdr: R) -> anyhow::Result<()> {
    let mut tokens = TokenReader::new(rdr);
    let n: usize = tokens.next()?;

    let mut numbers = Vec::with_capacity(n);
    for _ in 0..n {
        numbers.push(tokens.next::<u64>()?);
    }

    println!("{}", product::max_pairwise_product(&numbers));
    Ok(())
}

fn run_gcd<R: BufRead>(rdr: R) -> anyhow::Result<()> {
    let mut tokens = TokenReader::new(rdr);
    let a: u64 = tokens.next()?;
    let b: u64 = tokens.next()?;

    println!("{}", gcd(a, b));
    Ok(())
}

fn run_lcm<R: BufRead>(rdr: R) -> anyhow::Result<()> {
    let mut tokens = TokenReader::new(rdr);
    let a: u64 = tokens.next()?;
    let b: u64 = tokens.next()?;

    let result = lcm(a, b).context("least common multiple overflows u64")?;
    println!("{}", result);
    Ok(())
}

fn run_fibonacci<R: BufRead>(rdr: R) -> anyhow::Result<()> {
    let mut tokens = TokenReader::new(rdr);
    let n: u64 = tokens.next()?;

    println!("{}", fib::fib(n));
    Ok(())
}

fn run_fibonacci_last_digit<R: BufRead>(rdr: R) -> anyhow::Result<()> {
    let mut tokens = TokenReader::new(rdr);
    let n: u64 = tokens.next()?;

    println!("{}", fib::fib_last_digit(n));
    Ok(())
}

fn run_fibonacci_mod<R: BufRead>(rdr: R) -> anyhow::Result<()> {
    let query = read_fib_modulo_query(rdr)?;
    println!("{}", fib::fib_mod(query));
    Ok(())
}

fn run_fibonacci_sum_last_digit<R: BufRead>(rdr: R) -> anyhow::Result<()> {
    let mut tokens = TokenReader::new(rdr);
    let n: u64 = tokens.next()?;

    println!("{}", fib::fib_sum_last_digit(n));
    Ok(())
}

fn run_fibonacci_partial_sum<R: BufRead>(rdr: R) -> anyhow::Result<()> {
    let query = read_fib_range_query(rdr)?;
    println!("{}", fib::fib_range_sum_last_digit(query));
    Ok(())
}

fn run_money_change<R: BufRead>(rdr: R) -> anyhow::Result<()> {
    let mut tokens = TokenReader::new(rdr);
    let amount: u64 = tokens.next()?;

    println!("{}", change::min_coins(amount));
    Ok(())
}

fn run_maximum_prizes<R: BufRead>(rdr: R) -> anyhow::Result<()> {
    let mut tokens = TokenReader::new(rdr);
    let n: u64 = tokens.next()?;

    let summands = summands::distinct_summands(n);
    println!("{}", summands.len());
    let line: Vec<String> = summands.iter().map(|s| s.to_string()).collect();
    println!("{}", line.join(" "));
    Ok(())
}

fn run_fractional_knapsack<R: BufRead>(rdr: R) -> anyhow::Result<()> {
    let instance = KnapsackLoader::new()
        .from_bufread::<u64, R>(rdr)
        .context("failed to load the knapsack instance")?;

    let solution = knapsack::maximum_value(&instance);
    println!("{:.10}", solution.total_value());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }
}

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

//! Input loaders for the exercise stdin formats.
//!
//! This module turns whitespace-delimited text streams into validated
//! problem values: a `KnapsackInstance` for the fractional knapsack and the
//! query types for the Fibonacci exercises.
//!
//! Every format is a fixed token order, so the parsing core is a single
//! `TokenReader` that yields one parsed token at a time from any `BufRead`.
//! Lines may contain comments introduced by `#`, which are ignored during
//! tokenization; this keeps test fixtures and hand-written instance files
//! readable.
//!
//! Numeric preconditions (positive weights, positive modulus, ordered range
//! bounds) are checked eagerly here, producing descriptive errors that point
//! directly at the offending token or item, so a solver never observes an
//! invalid instance.

use crate::{
    index::ItemIndex,
    knapsack::{KnapsackInstance, KnapsackInstanceBuilder},
    query::{FibModuloQuery, FibRangeQuery},
};
use num_traits::{PrimInt, Unsigned};
use std::{
    fmt::{Debug, Display},
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// The error type for the input loading process.
#[derive(Debug)]
pub enum LoaderError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input stream ended unexpectedly (e.g., missing tokens).
    UnexpectedEof,
    /// A token could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// The declared item count could not be used as a collection length.
    InvalidCount,
    /// An item with weight zero was declared; its value density is undefined.
    ZeroWeight(ZeroWeightError),
    /// A modulus of zero was declared; no residue system exists for it.
    ZeroModulus,
    /// A range query with `low > high` was declared.
    InvertedRange {
        /// The declared lower bound.
        low: u64,
        /// The declared upper bound.
        high: u64,
    },
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "u64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

/// Details about a zero-weight item declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeroWeightError {
    /// The index of the item that was declared with weight zero.
    pub item_index: ItemIndex,
}

impl std::fmt::Display for ZeroWeightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Item {} has weight zero; its value density is undefined",
            self.item_index.get()
        )
    }
}

impl std::error::Error for ZeroWeightError {}

impl Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => write!(f, "Unexpected end of input while parsing"),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::InvalidCount => {
                write!(f, "The declared item count does not fit the platform")
            }
            Self::ZeroWeight(e) => write!(f, "Instance error: {}", e),
            Self::ZeroModulus => write!(f, "The modulus must be a positive integer"),
            Self::InvertedRange { low, high } => {
                write!(f, "Inverted range: low is {} but high is {}", low, high)
            }
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for LoaderError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<ZeroWeightError> for LoaderError {
    fn from(e: ZeroWeightError) -> Self {
        Self::ZeroWeight(e)
    }
}

/// A loader for fractional-knapsack instances.
///
/// The format this parser expects is as follows (whitespace-separated
/// tokens):
///
/// ```raw
/// n capacity          // number of items, knapsack capacity
/// v_1 w_1             // value and weight of item 1
/// ...
/// v_n w_n             // value and weight of item n
/// ```
///
/// Line structure is not significant; only the token order is. An item with
/// weight zero is rejected eagerly with a `ZeroWeight` error, since its
/// value density would be undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KnapsackLoader;

impl KnapsackLoader {
    /// Creates a new `KnapsackLoader`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Loads an instance from a type implementing `BufRead`.
    pub fn from_bufread<T, R>(&self, rdr: R) -> Result<KnapsackInstance<T>, LoaderError>
    where
        T: PrimInt + Unsigned + FromStr + Display + Debug,
        R: BufRead,
    {
        let mut tokens = TokenReader::new(rdr);

        let n_val: T = tokens.next()?;
        let capacity: T = tokens.next()?;

        let n = n_val.to_usize().ok_or(LoaderError::InvalidCount)?;

        let mut builder = KnapsackInstanceBuilder::new(n);
        builder.set_capacity(capacity);

        for i in 0..n {
            let item = ItemIndex::new(i);
            let value: T = tokens.next()?;
            let weight: T = tokens.next()?;

            if weight == T::zero() {
                return Err(LoaderError::ZeroWeight(ZeroWeightError { item_index: item }));
            }

            builder.set_item_value(item, value);
            builder.set_item_weight(item, weight);
        }

        Ok(builder.build())
    }

    /// Loads an instance from a file path.
    #[inline]
    pub fn from_path<T, P>(&self, path: P) -> Result<KnapsackInstance<T>, LoaderError>
    where
        T: PrimInt + Unsigned + FromStr + Display + Debug,
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads an instance from a generic reader.
    #[inline]
    pub fn from_reader<T, R>(&self, r: R) -> Result<KnapsackInstance<T>, LoaderError>
    where
        T: PrimInt + Unsigned + FromStr + Display + Debug,
        R: Read,
    {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads an instance from a string slice.
    #[inline]
    pub fn from_str<T>(&self, s: &str) -> Result<KnapsackInstance<T>, LoaderError>
    where
        T: PrimInt + Unsigned + FromStr + Display + Debug,
    {
        self.from_reader(s.as_bytes())
    }
}

/// Reads a Fibonacci-modulo query (`n m`) from a reader.
///
/// A zero modulus is rejected here so the period scan downstream can rely
/// on `m >= 1`.
pub fn read_fib_modulo_query<R: BufRead>(rdr: R) -> Result<FibModuloQuery, LoaderError> {
    let mut tokens = TokenReader::new(rdr);
    let index: u64 = tokens.next()?;
    let modulus: u64 = tokens.next()?;

    if modulus == 0 {
        return Err(LoaderError::ZeroModulus);
    }

    Ok(FibModuloQuery::new(index, modulus))
}

/// Reads a Fibonacci range-sum query (`low high`) from a reader.
pub fn read_fib_range_query<R: BufRead>(rdr: R) -> Result<FibRangeQuery, LoaderError> {
    let mut tokens = TokenReader::new(rdr);
    let low: u64 = tokens.next()?;
    let high: u64 = tokens.next()?;

    if low > high {
        return Err(LoaderError::InvertedRange { low, high });
    }

    Ok(FibRangeQuery::new(low, high))
}

/// A helper to read whitespace-delimited tokens from a generic reader.
///
/// This is the parsing core shared by every exercise format: each call to
/// `next` yields one token parsed into the requested type, skipping
/// whitespace and `#` comments.
pub struct TokenReader<R> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> TokenReader<R> {
    /// Creates a new `TokenReader` wrapping the given reader.
    #[inline]
    pub fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    /// Refills the internal line buffer. Returns `Ok(true)` if data read, `Ok(false)` on EOF.
    #[inline]
    fn fill_line(&mut self) -> Result<bool, LoaderError> {
        self.buf.clear();
        self.pos = 0;
        let n = self.rdr.read_line(&mut self.buf).map_err(LoaderError::Io)?;
        Ok(n > 0)
    }

    /// Reads the next token and parses it into `T`.
    /// Automatically skips whitespace and comments starting with '#'.
    pub fn next<T>(&mut self) -> Result<T, LoaderError>
    where
        T: FromStr,
    {
        loop {
            // Refill buffer if empty or consumed
            if self.pos >= self.buf.len() && !self.fill_line()? {
                return Err(LoaderError::UnexpectedEof);
            }

            // Skip whitespace and comments
            while self.pos < self.buf.len() {
                let remainder = &self.buf[self.pos..];

                // Found a comment? Skip to end of line immediately.
                if remainder.starts_with('#') {
                    self.pos = self.buf.len();
                    break;
                }

                let c = remainder.chars().next().unwrap();
                if !c.is_whitespace() {
                    break; // Found start of a token
                }

                self.pos += c.len_utf8();
            }

            // If we consumed the whole line (whitespace/comments), loop to get next line
            if self.pos >= self.buf.len() {
                continue;
            }

            // Find end of token
            let mut end = self.pos;
            while end < self.buf.len() {
                let remainder = &self.buf[end..];

                // Token ends at whitespace or start of a comment
                if remainder.starts_with('#') {
                    break;
                }

                let c = remainder.chars().next().unwrap();
                if c.is_whitespace() {
                    break;
                }
                end += c.len_utf8();
            }

            let token = &self.buf[self.pos..end];
            self.pos = end;

            if token.is_empty() {
                continue;
            }

            return token.parse::<T>().map_err(|_| {
                LoaderError::Parse(ParseTokenError {
                    token: token.to_owned(),
                    type_name: std::any::type_name::<T>(),
                })
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_INSTANCE: &str = r#"
        3 50        # n=3 items, capacity 50
        60 20       # item 0: value 60, weight 20
        100 50      # item 1: value 100, weight 50
        120 30      # item 2: value 120, weight 30
    "#;

    #[test]
    fn test_loads_and_maps_correctly() {
        let loader = KnapsackLoader::new();
        let instance: KnapsackInstance<u64> =
            loader.from_str(SMALL_INSTANCE).expect("Failed to load");

        assert_eq!(instance.num_items(), 3);
        assert_eq!(instance.capacity(), 50);
        assert_eq!(instance.item_values(), &[60, 100, 120]);
        assert_eq!(instance.item_weights(), &[20, 50, 30]);
    }

    #[test]
    fn test_token_order_matters_not_line_structure() {
        let loader = KnapsackLoader::new();
        let instance: KnapsackInstance<u64> = loader
            .from_str("2 10 5 1 7 2")
            .expect("Failed to load flat token stream");

        assert_eq!(instance.num_items(), 2);
        assert_eq!(instance.item_values(), &[5, 7]);
        assert_eq!(instance.item_weights(), &[1, 2]);
    }

    #[test]
    fn test_zero_weight_is_rejected() {
        let data = "1 10  5 0";
        let loader = KnapsackLoader::new();
        let res: Result<KnapsackInstance<u64>, _> = loader.from_str(data);

        match res {
            Err(LoaderError::ZeroWeight(ZeroWeightError { item_index })) => {
                assert_eq!(item_index.get(), 0);
            }
            _ => panic!("Expected ZeroWeight error"),
        }
    }

    #[test]
    fn test_parse_error_structure() {
        let data = "2 50 garbage";
        let loader = KnapsackLoader::new();
        let res: Result<KnapsackInstance<u64>, _> = loader.from_str(data);

        match res {
            Err(LoaderError::Parse(e)) => {
                assert_eq!(e.token, "garbage");
                assert!(e.type_name.contains("u64"));
            }
            _ => panic!("Expected Parse error with context"),
        }
    }

    #[test]
    fn test_truncated_input_reports_eof() {
        let data = "2 50 60"; // declares two items, provides half of one
        let loader = KnapsackLoader::new();
        let res: Result<KnapsackInstance<u64>, _> = loader.from_str(data);
        assert!(matches!(res, Err(LoaderError::UnexpectedEof)));
    }

    #[test]
    fn test_read_fib_modulo_query() {
        let q = read_fib_modulo_query("239 1000".as_bytes()).expect("Failed to read query");
        assert_eq!(q.index(), 239);
        assert_eq!(q.modulus(), 1000);
    }

    #[test]
    fn test_read_fib_modulo_query_rejects_zero_modulus() {
        let res = read_fib_modulo_query("5 0".as_bytes());
        assert!(matches!(res, Err(LoaderError::ZeroModulus)));
    }

    #[test]
    fn test_read_fib_range_query() {
        let q = read_fib_range_query("3 7".as_bytes()).expect("Failed to read query");
        assert_eq!(q.low(), 3);
        assert_eq!(q.high(), 7);
    }

    #[test]
    fn test_read_fib_range_query_rejects_inverted_range() {
        let res = read_fib_range_query("7 3".as_bytes());
        assert!(matches!(
            res,
            Err(LoaderError::InvertedRange { low: 7, high: 3 })
        ));
    }
}

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

use crate::index::ItemIndex;

/// The final solution to a fractional-knapsack instance.
///
/// This struct uses a Structure of Arrays (SoA) layout. Data is indexed
/// directly by `ItemIndex` in the original input order (index `i`
/// corresponds to input item `i`), so a solution can always be traced back
/// to the instance it was derived from.
#[derive(Clone, Debug, PartialEq)]
pub struct KnapsackSolution {
    /// The total value packed into the knapsack.
    total_value: f64,

    /// The fraction of each item that was taken, in `[0.0, 1.0]`.
    /// `fractions[i]` is the fraction taken of item `i`.
    fractions: Vec<f64>,
}

impl KnapsackSolution {
    /// Constructs a new `KnapsackSolution`.
    ///
    /// # Panics
    ///
    /// Panics (debug builds) if any fraction lies outside `[0.0, 1.0]`.
    pub fn new(total_value: f64, fractions: Vec<f64>) -> Self {
        debug_assert!(
            fractions.iter().all(|&f| (0.0..=1.0).contains(&f)),
            "called `KnapsackSolution::new` with a fraction outside [0.0, 1.0]: {:?}",
            fractions
        );

        Self {
            total_value,
            fractions,
        }
    }

    /// Returns the total packed value.
    #[inline]
    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    /// Returns the number of items covered by this solution.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.fractions.len()
    }

    /// Returns the fraction taken of a specific item.
    ///
    /// # Panics
    ///
    /// Panics if `item_index` is out of bounds.
    #[inline]
    pub fn fraction_for_item(&self, item_index: ItemIndex) -> f64 {
        let index = item_index.get();
        debug_assert!(
            index < self.num_items(),
            "called `KnapsackSolution::fraction_for_item` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );

        self.fractions[index]
    }

    /// Returns a slice of the taken fractions for all items.
    #[inline]
    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }
}

impl std::fmt::Display for KnapsackSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Knapsack Solution Summary")?;
        writeln!(f, "   Total Value: {:.10}", self.total_value)?;
        writeln!(f)?;

        if self.num_items() == 0 {
            writeln!(f, "   (No items)")?;
            return Ok(());
        }

        writeln!(f, "   {:<10} | {:<10}", "Item", "Fraction")?;
        writeln!(f, "   {:-<10}-+-{:-<10}", "", "")?;
        for (i, fraction) in self.fractions.iter().enumerate() {
            writeln!(f, "   {:<10} | {:<10.4}", i, fraction)?;
        }

        Ok(())
    }
}

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

//! # Fractional Knapsack (Greedy)
//!
//! Maximizes the packed value when items may be split arbitrarily. The
//! greedy strategy — always consume the remaining item of highest value
//! density, taking a fraction of the last item if the capacity runs out —
//! is provably optimal for this divisible variant by an exchange argument:
//! swapping any unit of a lower-density item for a unit of a higher-density
//! one never decreases the total. (The 0/1 variant has no such guarantee
//! and is not handled here.)
//!
//! Densities are real-valued (`f64`); weights and capacities are integers,
//! so every quantity the loop subtracts is exactly representable and the
//! remaining capacity reaches 0.0 exactly when the knapsack fills.

use crate::num::SolverNumeric;
use abacus_model::{index::ItemIndex, knapsack::KnapsackInstance, solution::KnapsackSolution};
use fixedbitset::FixedBitSet;
use log::debug;

/// Solves the fractional-knapsack instance greedily and returns the
/// per-item fractions along with the total packed value.
///
/// Each call owns its working state (taken-set, density table), so repeated
/// calls with the same instance yield identical solutions.
///
/// # Examples
///
/// ```rust
/// # use abacus_model::index::ItemIndex;
/// # use abacus_model::knapsack::KnapsackInstanceBuilder;
/// # use abacus_solvers::knapsack::maximum_value;
///
/// let mut builder = KnapsackInstanceBuilder::<u64>::new(3);
/// builder.set_capacity(50);
/// builder.set_item_value(ItemIndex::new(0), 60).set_item_weight(ItemIndex::new(0), 20);
/// builder.set_item_value(ItemIndex::new(1), 100).set_item_weight(ItemIndex::new(1), 50);
/// builder.set_item_value(ItemIndex::new(2), 120).set_item_weight(ItemIndex::new(2), 30);
///
/// let solution = maximum_value(&builder.build());
/// assert!((solution.total_value() - 180.0).abs() < 1e-9);
/// ```
pub fn maximum_value<T>(instance: &KnapsackInstance<T>) -> KnapsackSolution
where
    T: SolverNumeric,
{
    let num_items = instance.num_items();

    // The density table is the only derived data; item order stays the
    // input order throughout.
    let densities: Vec<f64> = (0..num_items)
        .map(|i| {
            let item = ItemIndex::new(i);
            debug_assert!(
                instance.item_weight(item) > T::ZERO,
                "called `maximum_value` with a zero-weight item: item {}",
                i
            );
            let value = instance
                .item_value(item)
                .to_f64()
                .expect("item value is not representable as f64");
            let weight = instance
                .item_weight(item)
                .to_f64()
                .expect("item weight is not representable as f64");
            value / weight
        })
        .collect();

    let mut taken = FixedBitSet::with_capacity(num_items);
    let mut fractions = vec![0.0f64; num_items];
    let mut total_value = 0.0f64;
    let mut remaining = instance
        .capacity()
        .to_f64()
        .expect("capacity is not representable as f64");

    while remaining > 0.0 {
        // Select the untaken item with the highest density. The scan tracks
        // the winning *index*, not merely the winning density value: the
        // item itself is what gets consumed, and two items may share a
        // density. Strict comparison makes the lowest index win ties.
        let mut best: Option<usize> = None;
        for i in 0..num_items {
            if taken.contains(i) {
                continue;
            }
            if best.map_or(true, |b| densities[i] > densities[b]) {
                best = Some(i);
            }
        }

        let Some(best) = best else {
            break; // All items consumed; leftover capacity stays unused.
        };

        taken.insert(best);

        let weight = instance
            .item_weight(ItemIndex::new(best))
            .to_f64()
            .expect("item weight is not representable as f64");
        let amount = remaining.min(weight);
        fractions[best] = amount / weight;
        total_value += amount * densities[best];
        remaining -= amount;
    }

    debug!(
        "greedy fill consumed {} of {} items, value {}",
        taken.count_ones(..),
        num_items,
        total_value
    );

    KnapsackSolution::new(total_value, fractions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_model::knapsack::KnapsackInstanceBuilder;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    fn instance(capacity: u64, items: &[(u64, u64)]) -> KnapsackInstance<u64> {
        let mut builder = KnapsackInstanceBuilder::new(items.len());
        builder.set_capacity(capacity);
        for (i, &(value, weight)) in items.iter().enumerate() {
            builder.set_item_value(ii(i), value);
            builder.set_item_weight(ii(i), weight);
        }
        builder.build()
    }

    #[test]
    fn test_reference_instance() {
        // Items (value, weight); densities 3, 2, 4. The greedy fill takes
        // item 2 fully, then item 0 fully, and the capacity is exhausted.
        let instance = instance(50, &[(60, 20), (100, 50), (120, 30)]);
        let solution = maximum_value(&instance);

        assert!((solution.total_value() - 180.0).abs() < 1e-9);
        assert_eq!(solution.fraction_for_item(ii(0)), 1.0);
        assert_eq!(solution.fraction_for_item(ii(1)), 0.0);
        assert_eq!(solution.fraction_for_item(ii(2)), 1.0);
    }

    #[test]
    fn test_single_item_partial_take() {
        let instance = instance(10, &[(500, 30)]);
        let solution = maximum_value(&instance);

        // One third of the item fits: value 500/3.
        assert!((solution.total_value() - 500.0 / 3.0).abs() < 1e-9);
        assert!((solution.fraction_for_item(ii(0)) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_capacity_yields_zero() {
        let instance = instance(0, &[(60, 20), (100, 50)]);
        let solution = maximum_value(&instance);
        assert_eq!(solution.total_value(), 0.0);
        assert_eq!(solution.fractions(), &[0.0, 0.0]);
    }

    #[test]
    fn test_empty_item_list_yields_zero() {
        let instance = instance(100, &[]);
        let solution = maximum_value(&instance);
        assert_eq!(solution.total_value(), 0.0);
        assert_eq!(solution.num_items(), 0);
    }

    #[test]
    fn test_capacity_exceeding_total_weight_takes_everything() {
        let instance = instance(1000, &[(60, 20), (100, 50), (120, 30)]);
        let solution = maximum_value(&instance);
        assert!((solution.total_value() - 280.0).abs() < 1e-9);
        assert_eq!(solution.fractions(), &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_density_ties_prefer_lower_index() {
        // Both items have density 1; only one fits. The scan must settle on
        // the first, keeping the result deterministic.
        let instance = instance(5, &[(5, 5), (5, 5)]);
        let solution = maximum_value(&instance);

        assert!((solution.total_value() - 5.0).abs() < 1e-9);
        assert_eq!(solution.fraction_for_item(ii(0)), 1.0);
        assert_eq!(solution.fraction_for_item(ii(1)), 0.0);
    }

    #[test]
    fn test_selection_is_by_density_not_value() {
        // Item 1 has the largest value but the smallest density; the greedy
        // fill must spend the capacity on item 0 first.
        let instance = instance(10, &[(50, 10), (60, 60)]);
        let solution = maximum_value(&instance);
        assert!((solution.total_value() - 50.0).abs() < 1e-9);
        assert_eq!(solution.fraction_for_item(ii(1)), 0.0);
    }

    #[test]
    fn test_idempotence() {
        let instance = instance(137, &[(60, 20), (100, 50), (120, 30), (7, 3)]);
        let first = maximum_value(&instance);
        let second = maximum_value(&instance);
        assert_eq!(first, second);
    }

    #[test]
    fn test_monotonicity_in_capacity() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..20 {
            let num_items = rng.gen_range(1..12);
            let items: Vec<(u64, u64)> = (0..num_items)
                .map(|_| (rng.gen_range(0..500), rng.gen_range(1..100)))
                .collect();

            let mut previous = 0.0f64;
            for capacity in 0..200u64 {
                let value = maximum_value(&instance(capacity, &items)).total_value();
                assert!(
                    value + 1e-9 >= previous,
                    "value decreased from {} to {} at capacity {}",
                    previous,
                    value,
                    capacity
                );
                previous = value;
            }
        }
    }
}

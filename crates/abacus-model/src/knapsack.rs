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
use num_traits::{PrimInt, Unsigned};

/// The immutable data model for one fractional-knapsack instance.
///
/// This struct holds all pre-validated, queryable data in Structure of
/// Arrays (SoA) layout:
/// - `weights[item]`: the weight of each item (always positive).
/// - `values[item]`: the value of each item (non-negative).
/// - `capacity`: the knapsack capacity.
///
/// Item order is the original input order and is never permuted; solvers
/// that rank items by density do so through side tables, so the indices
/// in a reported solution always refer back to the input.
///
/// Construction:
/// - Use `KnapsackInstanceBuilder` and call `build` to obtain a validated
///   `KnapsackInstance`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnapsackInstance<T>
where
    T: PrimInt + Unsigned,
{
    capacity: T,
    weights: Vec<T>, // len = num_items
    values: Vec<T>,  // len = num_items
}

impl<T> KnapsackInstance<T>
where
    T: PrimInt + Unsigned,
{
    /// Returns the number of items in the instance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use abacus_model::knapsack::KnapsackInstanceBuilder;
    ///
    /// let builder = KnapsackInstanceBuilder::<u64>::new(3);
    /// let instance = builder.build();
    /// assert_eq!(instance.num_items(), 3);
    /// ```
    #[inline]
    pub fn num_items(&self) -> usize {
        self.weights.len()
    }

    /// Returns the knapsack capacity.
    #[inline]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Returns a slice of all item weights.
    #[inline]
    pub fn item_weights(&self) -> &[T] {
        &self.weights
    }

    /// Returns a slice of all item values.
    #[inline]
    pub fn item_values(&self) -> &[T] {
        &self.values
    }

    /// Returns the weight of the specified item.
    ///
    /// # Panics
    ///
    /// Panics if `item_index` is not in `0..num_items()` (debug builds).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use abacus_model::index::ItemIndex;
    /// # use abacus_model::knapsack::KnapsackInstanceBuilder;
    ///
    /// let mut builder = KnapsackInstanceBuilder::<u64>::new(2);
    /// builder.set_item_weight(ItemIndex::new(0), 20);
    /// builder.set_item_weight(ItemIndex::new(1), 50);
    /// let instance = builder.build();
    /// assert_eq!(instance.item_weight(ItemIndex::new(0)), 20);
    /// assert_eq!(instance.item_weight(ItemIndex::new(1)), 50);
    /// ```
    #[inline]
    pub fn item_weight(&self, item_index: ItemIndex) -> T {
        let index = item_index.get();
        debug_assert!(
            index < self.num_items(),
            "called `KnapsackInstance::item_weight` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );

        self.weights[index]
    }

    /// Returns the weight of the specified item without bounds checking.
    ///
    /// # Safety
    ///
    /// This function is unsafe because it does not perform bounds checking on
    /// `item_index`. The caller must ensure that `item_index` is in
    /// `0..num_items()`. Undefined behavior may occur if this precondition is
    /// violated.
    #[inline]
    pub unsafe fn item_weight_unchecked(&self, item_index: ItemIndex) -> T {
        let index = item_index.get();
        debug_assert!(
            index < self.num_items(),
            "called `KnapsackInstance::item_weight_unchecked` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );

        unsafe { *self.weights.get_unchecked(index) }
    }

    /// Returns the value of the specified item.
    ///
    /// # Panics
    ///
    /// Panics if `item_index` is not in `0..num_items()` (debug builds).
    #[inline]
    pub fn item_value(&self, item_index: ItemIndex) -> T {
        let index = item_index.get();
        debug_assert!(
            index < self.num_items(),
            "called `KnapsackInstance::item_value` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );

        self.values[index]
    }

    /// Returns the value of the specified item without bounds checking.
    ///
    /// # Safety
    ///
    /// This function is unsafe because it does not perform bounds checking on
    /// `item_index`. The caller must ensure that `item_index` is in
    /// `0..num_items()`. Undefined behavior may occur if this precondition is
    /// violated.
    #[inline]
    pub unsafe fn item_value_unchecked(&self, item_index: ItemIndex) -> T {
        let index = item_index.get();
        debug_assert!(
            index < self.num_items(),
            "called `KnapsackInstance::item_value_unchecked` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );

        unsafe { *self.values.get_unchecked(index) }
    }
}

impl<T> std::fmt::Display for KnapsackInstance<T>
where
    T: PrimInt + Unsigned + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "KnapsackInstance(num_items: {}, capacity: {})",
            self.num_items(),
            self.capacity
        )
    }
}

/// A mutable builder for `KnapsackInstance`.
///
/// The builder initializes every item with weight `1` and value `0` and the
/// capacity with `0`. Weight `1` (not `0`) is the neutral starting point
/// because a zero weight would make the item's value density undefined; the
/// density invariant `weight > 0` is enforced on every setter call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnapsackInstanceBuilder<T>
where
    T: PrimInt + Unsigned,
{
    capacity: T,
    weights: Vec<T>,
    values: Vec<T>,
}

impl<T> KnapsackInstanceBuilder<T>
where
    T: PrimInt + Unsigned,
{
    /// Creates a new builder for an instance with `num_items` items.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use abacus_model::knapsack::KnapsackInstanceBuilder;
    ///
    /// let builder = KnapsackInstanceBuilder::<u64>::new(3);
    /// let instance = builder.build();
    /// assert_eq!(instance.num_items(), 3);
    /// assert_eq!(instance.capacity(), 0);
    /// ```
    pub fn new(num_items: usize) -> Self {
        Self {
            capacity: T::zero(),
            weights: vec![T::one(); num_items],
            values: vec![T::zero(); num_items],
        }
    }

    /// Returns the number of items in the builder.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.weights.len()
    }

    /// Sets the knapsack capacity.
    #[inline]
    pub fn set_capacity(&mut self, capacity: T) -> &mut Self {
        self.capacity = capacity;
        self
    }

    /// Sets the weight of the specified item.
    ///
    /// # Panics
    ///
    /// Panics (debug builds) if `item_index` is out of bounds or if `weight`
    /// is zero.
    #[inline]
    pub fn set_item_weight(&mut self, item_index: ItemIndex, weight: T) -> &mut Self {
        let index = item_index.get();
        debug_assert!(
            index < self.num_items(),
            "called `KnapsackInstanceBuilder::set_item_weight` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );
        debug_assert!(
            weight > T::zero(),
            "called `KnapsackInstanceBuilder::set_item_weight` with a zero weight for item {}: the value density would be undefined",
            index
        );

        self.weights[index] = weight;
        self
    }

    /// Sets the value of the specified item.
    ///
    /// # Panics
    ///
    /// Panics (debug builds) if `item_index` is out of bounds.
    #[inline]
    pub fn set_item_value(&mut self, item_index: ItemIndex, value: T) -> &mut Self {
        let index = item_index.get();
        debug_assert!(
            index < self.num_items(),
            "called `KnapsackInstanceBuilder::set_item_value` with item index out of bounds: the len is {} but the index is {}",
            self.num_items(),
            index
        );

        self.values[index] = value;
        self
    }

    /// Consumes the builder and produces an immutable `KnapsackInstance`.
    #[inline]
    pub fn build(self) -> KnapsackInstance<T> {
        KnapsackInstance {
            capacity: self.capacity,
            weights: self.weights,
            values: self.values,
        }
    }
}

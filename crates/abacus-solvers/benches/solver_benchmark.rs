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

use abacus_model::index::ItemIndex;
use abacus_model::knapsack::{KnapsackInstance, KnapsackInstanceBuilder};
use abacus_model::query::FibModuloQuery;
use abacus_solvers::fib::{fib_mod, pisano_period};
use abacus_solvers::knapsack::maximum_value;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

/// Builds a reproducible random instance; the seed is fixed so the numbers
/// (and therefore the measured work) are identical across runs.
fn random_instance(num_items: usize, seed: u64) -> KnapsackInstance<u64> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut builder = KnapsackInstanceBuilder::new(num_items);
    builder.set_capacity((num_items as u64) * 25);
    for i in 0..num_items {
        let item = ItemIndex::new(i);
        builder.set_item_value(item, rng.gen_range(0..2_000_000));
        builder.set_item_weight(item, rng.gen_range(1..2_000_000));
    }
    builder.build()
}

fn bench_pisano_period(c: &mut Criterion) {
    let mut group = c.benchmark_group("pisano_period");

    for modulus in [97u64, 1_013, 99_991] {
        group.bench_with_input(
            BenchmarkId::from_parameter(modulus),
            &modulus,
            |b, &modulus| b.iter(|| pisano_period(black_box(modulus))),
        );
    }
    group.finish();
}

fn bench_fib_mod(c: &mut Criterion) {
    c.bench_function("fib_mod_huge_index", |b| {
        b.iter(|| fib_mod(black_box(FibModuloQuery::new(18_446_744_073_709_551_557, 99_991))))
    });
}

fn bench_fractional_knapsack(c: &mut Criterion) {
    let mut group = c.benchmark_group("fractional_knapsack");

    for num_items in [10usize, 100, 1_000] {
        let instance = random_instance(num_items, 0x5eed);

        group.throughput(Throughput::Elements(num_items as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_items),
            &instance,
            |b, instance| b.iter(|| maximum_value(black_box(instance))),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_pisano_period,
    bench_fib_mod,
    bench_fractional_knapsack
);
criterion_main!(benches);

use super::{initial, XorShift, OPS};
use criterion::{black_box, BatchSize, Criterion, Throughput};
use lazyseg::{FenwickTree, LazySegmentTree, RangeAggregateTree, Sum};

/// Alternating range adds and range sums. The Fenwick tree has no range add,
/// so it only answers the query half of the stream.
pub fn run(c: &mut Criterion) {
    let data = initial();
    let mut group = c.benchmark_group("mixed_range_ops");
    group.throughput(Throughput::Elements(OPS as u64));
    group.sample_size(10);

    group.bench_function("lazy_sum_tree", |b| {
        b.iter_batched(
            || LazySegmentTree::<i64, Sum>::from_slice(&data).unwrap(),
            |mut st| {
                let mut rng = XorShift::new(42);
                for i in 0..OPS {
                    let (l, r) = rng.span();
                    if i % 2 == 0 {
                        let delta = (rng.next() % 10) as i64;
                        st.update_range(l..=r, delta).unwrap();
                    } else {
                        black_box(st.query(l..=r).unwrap());
                    }
                }
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("range_aggregate_tree", |b| {
        b.iter_batched(
            || RangeAggregateTree::from_slice(&data).unwrap(),
            |mut tree| {
                let mut rng = XorShift::new(42);
                for i in 0..OPS {
                    let (l, r) = rng.span();
                    if i % 2 == 0 {
                        let delta = (rng.next() % 10) as i64;
                        tree.update_range(l..=r, delta).unwrap();
                    } else {
                        black_box(tree.query_sum(l..=r).unwrap());
                        black_box(tree.query_min(l..=r).unwrap());
                    }
                }
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("fenwick_queries_only", |b| {
        b.iter_batched(
            || FenwickTree::from_slice(&data).unwrap(),
            |ft| {
                let mut rng = XorShift::new(42);
                for _ in 0..OPS / 2 {
                    let (l, r) = rng.span();
                    black_box(ft.range_sum(l..=r).unwrap());
                }
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

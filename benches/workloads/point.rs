use super::{initial, XorShift, LEN, OPS};
use criterion::{black_box, BatchSize, Criterion, Throughput};
use lazyseg::{FenwickTree, LazySegmentTree, Sum, SumIndex};

/// Point adds interleaved with range sums, the workload both structures
/// support, driven through `SumIndex`.
pub fn run(c: &mut Criterion) {
    let data = initial();
    let mut group = c.benchmark_group("point_add_range_sum");
    group.throughput(Throughput::Elements(OPS as u64));
    group.sample_size(10);

    group.bench_function("lazy_sum_tree", |b| {
        b.iter_batched(
            || LazySegmentTree::<i64, Sum>::from_slice(&data).unwrap(),
            |mut st| drive(&mut st),
            BatchSize::LargeInput,
        );
    });

    group.bench_function("fenwick", |b| {
        b.iter_batched(
            || FenwickTree::from_slice(&data).unwrap(),
            |mut ft| drive(&mut ft),
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

fn drive<S: SumIndex<i64>>(index: &mut S) {
    let mut rng = XorShift::new(7);
    for i in 0..OPS {
        if i % 2 == 0 {
            index.add(rng.below(LEN), 1).unwrap();
        } else {
            let (l, r) = rng.span();
            black_box(index.sum(l..=r).unwrap());
        }
    }
}

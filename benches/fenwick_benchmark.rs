use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use lazyseg::{FenwickTree, LazySegmentTree, Sum, SumIndex};

fn bench_fenwick_tree(c: &mut Criterion) {
    let size = 100_000;
    let data: Vec<i64> = (0..size as i64).map(|i| i % 1_000).collect();

    let mut group = c.benchmark_group("FenwickTree");

    group.bench_function("build", |b| {
        b.iter_batched(
            || data.clone(),
            |data| black_box(FenwickTree::from_slice(&data).unwrap()),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("add", |b| {
        b.iter_batched(
            || FenwickTree::from_slice(&data).unwrap(),
            |mut ft| {
                for i in 0..1000 {
                    ft.add(black_box(i * 7 % size), 1).unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("prefix_sum", |b| {
        let ft = FenwickTree::from_slice(&data).unwrap();
        b.iter(|| {
            for i in 0..1000 {
                black_box(ft.prefix_sum(black_box(i * 97 % size)).unwrap());
            }
        });
    });

    // The same point-add workload through the lazy tree.
    group.bench_function("lazy_tree_add", |b| {
        b.iter_batched(
            || LazySegmentTree::<i64, Sum>::from_slice(&data).unwrap(),
            |mut st| {
                for i in 0..1000 {
                    SumIndex::add(&mut st, black_box(i * 7 % size), 1).unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_fenwick_tree);
criterion_main!(benches);

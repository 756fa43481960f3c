use lazyseg::{FenwickTree, LazySegmentTree, Min, RangeAggregateTree, RangeError, Sum, SumIndex};
use std::ops::Bound;

const DATA: [i64; 8] = [1, 3, 5, 7, 9, 11, 13, 15];

#[test]
fn test_reference_scenario() {
    let mut tree = RangeAggregateTree::from_slice(&DATA).unwrap();
    assert_eq!(tree.query_sum(1..=5).unwrap(), 35);
    assert_eq!(tree.query_sum(0..=7).unwrap(), 64);

    tree.update_range(2..=6, 10).unwrap();
    assert_eq!(tree.query_sum(1..=5).unwrap(), 75);

    tree.update_range(0..=3, 5).unwrap();
    tree.update_range(4..=7, -3).unwrap();
    assert_eq!(tree.to_vec(), vec![6, 8, 20, 22, 16, 18, 20, 12]);

    tree.update_point(0, 100).unwrap();
    tree.update_point(7, 200).unwrap();
    let expected: i64 = tree.to_vec().iter().sum();
    assert_eq!(tree.query_sum(0..=7).unwrap(), expected);
    assert_eq!(tree.query_min(..).unwrap(), 8);
}

#[test]
fn test_error_boundary() {
    let mut tree = RangeAggregateTree::from_slice(&DATA).unwrap();
    let n = tree.len();

    assert!(matches!(
        tree.query_sum((Bound::Excluded(usize::MAX), Bound::Included(3))),
        Err(RangeError::InvalidRange { .. })
    ));
    assert_eq!(
        tree.query_sum((Bound::Included(3), Bound::Included(1))),
        Err(RangeError::InvalidRange { start: 3, end: 2, len: 8 })
    );
    assert_eq!(
        tree.query_sum(0..=n),
        Err(RangeError::InvalidRange { start: 0, end: 9, len: 8 })
    );
    assert!(tree.query_min(0..=n).is_err());
    assert!(tree.update_range((Bound::Included(3), Bound::Included(1)), 1).is_err());
    assert_eq!(tree.get(n), Err(RangeError::InvalidIndex { index: 8, len: 8 }));
}

#[test]
fn test_materialize_and_rebuild() {
    let mut tree = RangeAggregateTree::from_slice(&DATA).unwrap();
    tree.update_range(1..7, 4).unwrap();
    tree.update_point(3, -20).unwrap();
    tree.update_range(..=2, -1).unwrap();

    let mut rebuilt = RangeAggregateTree::from_slice(&tree.to_vec()).unwrap();
    let replay = |t: &mut RangeAggregateTree<i64>| {
        t.update_range(2..=5, 3).unwrap();
        t.update_point(6, 0).unwrap();
        let mut answers = Vec::new();
        for start in 0..8 {
            for end in start..8 {
                answers.push((t.query_sum(start..=end).unwrap(), t.query_min(start..=end).unwrap()));
            }
        }
        answers
    };
    assert_eq!(replay(&mut tree), replay(&mut rebuilt));
}

#[test]
fn test_payroll_style_usage() {
    let mut salaries = RangeAggregateTree::from_slice(&[50_000i64, 60_000, 55_000, 70_000, 80_000, 75_000]).unwrap();
    salaries.update_range(1..=3, 5_000).unwrap();
    let raised = salaries.get(0).unwrap() + 10_000;
    salaries.update_point(0, raised).unwrap();

    assert_eq!(salaries.query_sum(..).unwrap(), 60_000 + 65_000 + 60_000 + 75_000 + 80_000 + 75_000);
    assert_eq!(salaries.query_sum(1..=3).unwrap(), 200_000);
    assert_eq!(salaries.query_min(..).unwrap(), 60_000);
}

#[test]
fn test_trees_agree_through_sum_index() {
    fn exercise<S: SumIndex<i64>>(index: &mut S) -> Vec<i64> {
        index.add(0, 7).unwrap();
        index.add(5, -2).unwrap();
        index.add(7, 1).unwrap();
        vec![
            index.sum(..).unwrap(),
            index.sum(1..=5).unwrap(),
            index.sum(5..).unwrap(),
            index.sum(..1).unwrap(),
        ]
    }

    let fenwick = exercise(&mut FenwickTree::from_slice(&DATA).unwrap());
    let lazy = exercise(&mut LazySegmentTree::<i64, Sum>::from_slice(&DATA).unwrap());
    let facade = exercise(&mut RangeAggregateTree::from_slice(&DATA).unwrap());
    assert_eq!(fenwick, vec![70, 33, 38, 8]);
    assert_eq!(fenwick, lazy);
    assert_eq!(fenwick, facade);
}

#[test]
fn test_independent_min_tree() {
    let mut prices = LazySegmentTree::<i32, Min>::from_slice(&[100, 105, 102, 108, 95, 112, 118, 115]).unwrap();
    assert_eq!(prices.query(..4).unwrap(), 100);
    assert_eq!(prices.query(4..).unwrap(), 95);
    prices.update_range(4.., 10).unwrap();
    assert_eq!(prices.query(..).unwrap(), 100);
}

#[test]
fn test_shared_behind_mutex() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let tree = Arc::new(Mutex::new(RangeAggregateTree::from_slice(&[0i64; 64]).unwrap()));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let tree = Arc::clone(&tree);
            thread::spawn(move || {
                for i in 0..16 {
                    let start = (t * 16 + i) % 64;
                    tree.lock().unwrap().update_range(start..64, 1).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let mut tree = tree.lock().unwrap();
    let expected: i64 = (1..=64).sum();
    assert_eq!(tree.query_sum(..).unwrap(), expected);
}

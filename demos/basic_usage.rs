//! Basic usage examples for bstmap.

use std::cmp::Ordering;
use std::collections::HashSet;

use bstmap::{BstMap, CompareFn, TraverseOrder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    example_random_roundtrip();
    example_traversals();
    example_custom_comparator();
}

fn example_random_roundtrip() {
    println!("=== Random insertion vs external sort ===\n");

    let mut rng = StdRng::seed_from_u64(777);
    let size = 1000usize;

    let mut pairs: Vec<(i64, i64)> = Vec::with_capacity(size);
    let mut map: BstMap<i64, i64> = BstMap::with_capacity(size);
    let mut seen: HashSet<i64> = HashSet::new();

    for _ in 0..size {
        let key = rng.gen_range(1..=i64::MAX);
        if !seen.insert(key) {
            continue;
        }
        let value = rng.gen();

        pairs.push((key, value));
        map.insert(key, value);
    }

    pairs.sort_by_key(|&(k, _)| k);
    let traversed: Vec<(i64, i64)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(pairs, traversed);
    println!(
        "{} unique keys, in-order traversal matches the sorted vector",
        pairs.len()
    );

    for &(key, value) in &pairs {
        assert_eq!(map.get(&key), Some(&value));
        assert_eq!(map.get(&-key), None);
    }
    println!("all lookups hit, all negated keys miss");
    println!("approximate memory: {} bytes\n", map.memory_usage());
}

fn example_traversals() {
    println!("=== Traversal orders ===\n");

    let mut map: BstMap<i32, &str> = BstMap::new();
    for (k, v) in [(4, "four"), (2, "two"), (6, "six"), (1, "one"), (3, "three")] {
        map.insert(k, v);
    }

    for order in [
        TraverseOrder::PreOrder,
        TraverseOrder::InOrder,
        TraverseOrder::PostOrder,
    ] {
        let keys: Vec<i32> = map.traverse(order).map(|(k, _)| *k).collect();
        println!("{:?}: {:?}", order, keys);
    }
    println!();
}

fn example_custom_comparator() {
    println!("=== Custom comparator (descending) ===\n");

    let descending = CompareFn(|a: &u32, b: &u32| -> Ordering { b.cmp(a) });
    let mut map = BstMap::with_comparator(descending);

    for k in [15, 8, 23, 4, 42] {
        map.insert(k, k * 10);
    }

    let keys: Vec<u32> = map.iter().map(|(k, _)| *k).collect();
    println!("in-order under reversed comparison: {:?}", keys);
}

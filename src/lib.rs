//! # bstmap - Arena-Backed Ordered Map
//!
//! An ordered map built on an unbalanced binary search tree whose nodes live
//! in a flat, append-only arena and link to each other by 32-bit index.
//!
//! ## Features
//!
//! - **Index-linked nodes**: no pointers, no dangling links, trivially
//!   relocatable storage
//! - **Append-only arena**: value references stay valid for the map's
//!   lifetime (until the next mutable borrow)
//! - **Pluggable ordering**: natural `Ord` by default, or any custom
//!   comparison strategy fixed at construction
//! - **Three traversal orders**: pre-order, in-order (ascending keys),
//!   post-order, all driven by an explicit stack
//!
//! There is no removal and no rebalancing. Insertion order dictates tree
//! shape, so already-sorted input degrades depth to O(n) - the structure
//! trades balance guarantees for simplicity and stable indices.
//!
//! ## Example
//!
//! ```rust
//! use bstmap::BstMap;
//!
//! let mut map = BstMap::new();
//! map.insert(5, "five");
//! map.insert(3, "three");
//! map.insert(8, "eight");
//!
//! assert_eq!(map.get(&5), Some(&"five"));
//!
//! let keys: Vec<i32> = map.iter().map(|(k, _)| *k).collect();
//! assert_eq!(keys, vec![3, 5, 8]);
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compare;
pub mod tree;

pub use compare::{Compare, CompareFn, Natural};
pub use tree::{BstMap, Iter, TraverseOrder};

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;

/// A shared-ownership wrapper around [`BstMap`].
///
/// Readers (`get`, `contains_key`, `to_vec`) take a read lock and may run
/// concurrently with each other; `insert` takes the write lock and excludes
/// everything else. The entry count is kept in an atomic so `len` never
/// blocks on the lock.
pub struct SyncBstMap<K, V, C = Natural> {
    inner: RwLock<BstMap<K, V, C>>,
    len: AtomicUsize,
}

impl<K, V> SyncBstMap<K, V> {
    /// Create a new empty map using the natural ordering of `K`.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BstMap::new()),
            len: AtomicUsize::new(0),
        }
    }
}

impl<K, V, C> SyncBstMap<K, V, C> {
    /// Create a new empty map ordered by the given comparison strategy.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            inner: RwLock::new(BstMap::with_comparator(cmp)),
            len: AtomicUsize::new(0),
        }
    }

    /// Get the number of keys in the map.
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Relaxed)
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Approximate resident bytes of the map.
    pub fn memory_usage(&self) -> usize {
        self.inner.read().memory_usage()
    }
}

impl<K, V, C> SyncBstMap<K, V, C>
where
    C: Compare<K>,
{
    /// Insert a key-value pair.
    ///
    /// Returns the previous value if the key already existed.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        let mut inner = self.inner.write();
        let old = inner.insert(key, value);
        if old.is_none() {
            self.len.fetch_add(1, Ordering::Relaxed);
        }
        old
    }

    /// Get a copy of the value for a key.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.read().get(key).cloned()
    }

    /// Check if a key exists in the map.
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.read().contains_key(key)
    }

    /// Snapshot the map's pairs in the given traversal order.
    pub fn to_vec(&self, order: TraverseOrder) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.inner
            .read()
            .traverse(order)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K, V> Default for SyncBstMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

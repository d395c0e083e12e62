//! Key ordering strategies.
//!
//! The tree is parameterized by a comparison strategy instead of requiring
//! `K: Ord` directly. A single [`Compare::compare`] call yields less-than,
//! equality, and greater-than at once, so the ordering and its equality can
//! never disagree.

use core::cmp::Ordering;

/// A total ordering over keys of type `K`.
///
/// The strategy is chosen at construction time and must not change for the
/// lifetime of a tree: every node was placed according to it, and lookups
/// retrace those placements.
///
/// Implementations must be a total order (irreflexive strict part, transitive,
/// with transitive equivalence). A strategy that violates this produces wrong
/// tree shapes and missed lookups, but never memory unsafety.
pub trait Compare<K: ?Sized> {
    /// Compare two keys.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// The natural ordering of keys that implement [`Ord`].
///
/// This is the default strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<K: Ord + ?Sized> Compare<K> for Natural {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Adapter turning a comparison closure into a [`Compare`] strategy.
///
/// ```rust
/// use bstmap::{BstMap, CompareFn};
///
/// // Largest key first.
/// let mut map = BstMap::with_comparator(CompareFn(|a: &u32, b: &u32| b.cmp(a)));
/// map.insert(1, "one");
/// map.insert(3, "three");
/// map.insert(2, "two");
///
/// let keys: Vec<u32> = map.iter().map(|(k, _)| *k).collect();
/// assert_eq!(keys, vec![3, 2, 1]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CompareFn<F>(pub F);

impl<K: ?Sized, F> Compare<K> for CompareFn<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        (self.0)(a, b)
    }
}

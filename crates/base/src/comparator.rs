//! Orderings between priorities.
//!
//! A comparator answers `Greater` when its first argument has the higher
//! priority.

use std::cmp::Ordering;

pub trait Comparator<K> {
    fn compare(&self, a: &K, b: &K) -> Ordering;

    fn outranks(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    fn ranks_at_least(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) != Ordering::Less
    }
}

/// Larger keys come first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Max;

/// Smaller keys come first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Min;

impl<K: Ord> Comparator<K> for Max {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K: Ord> Comparator<K> for Min {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}

impl<K, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

//! A binary heap whose capacity is fixed when it is created.
//!
//! Elements live in one contiguous buffer, addressed positionally: the
//! children of slot `i` are `2i + 1` and `2i + 2`. Inserting into a full heap
//! or removing from an empty one fails instead of growing or panicking.
//!
//! Ties are resolved asymmetrically. An inserted element climbs past
//! ancestors of equal priority. On removal the right child is preferred when
//! both children are equal, and the element being sifted stops as soon as it
//! is equal to the child it is compared with.

pub mod index;
pub mod levels;

pub use levels::Levels;

use base::comparator::{Comparator, Max};
use base::error::{HeapError, InsertError};
use base::options::HeapOptions;
use base::priority::Prioritized;

#[derive(Debug)]
pub struct BoundedPriorityHeap<T, C = Max> {
    capacity: usize,
    data: Vec<T>,
    comparator: C,
}

impl<T> BoundedPriorityHeap<T> {
    pub fn new(capacity: usize) -> Result<Self, HeapError> {
        Self::with_comparator(capacity, Max)
    }

    pub fn from_options(options: &HeapOptions) -> Result<Self, HeapError> {
        Self::new(options.capacity)
    }
}

impl<T> BoundedPriorityHeap<T>
where
    T: Prioritized,
    T::Key: Ord,
{
    pub fn from_vec(capacity: usize, items: Vec<T>) -> Result<Self, HeapError> {
        Self::from_vec_with_comparator(capacity, items, Max)
    }
}

impl<T, C> BoundedPriorityHeap<T, C> {
    pub fn with_comparator(capacity: usize, comparator: C) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::ZeroCapacity);
        }
        Ok(Self {
            capacity,
            data: Vec::with_capacity(capacity),
            comparator,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    pub fn clear(&mut self) {
        log::debug!("Cleared {} elements from heap.", self.data.len());
        self.data.clear();
    }

    /// The element that `remove_max` would return next.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Live elements in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Live elements grouped by depth in the implicit tree.
    pub fn levels(&self) -> Levels<'_, T> {
        Levels::new(&self.data)
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<T, C> BoundedPriorityHeap<T, C>
where
    T: Prioritized,
    C: Comparator<T::Key>,
{
    /// Builds a heap out of `items` in linear time.
    pub fn from_vec_with_comparator(
        capacity: usize,
        items: Vec<T>,
        comparator: C,
    ) -> Result<Self, HeapError> {
        let mut heap = Self::with_comparator(capacity, comparator)?;
        if items.len() > capacity {
            return Err(HeapError::Full);
        }
        heap.data.extend(items);
        for i in (0..heap.data.len() / 2).rev() {
            heap.sift_down(i);
        }
        Ok(heap)
    }

    pub fn insert(&mut self, item: T) -> Result<(), InsertError<T>> {
        if self.is_full() {
            log::trace!("Insertion rejected, heap is at capacity {}.", self.capacity);
            return Err(InsertError::new(item));
        }
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    pub fn remove_max(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            log::trace!("Removal rejected, heap is empty.");
            return Err(HeapError::Empty);
        }
        let top = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(top)
    }

    /// Removes elements in priority order as the iterator is advanced.
    ///
    /// Elements that are not consumed stay in the heap.
    pub fn ranked(&mut self) -> Ranked<'_, T, C> {
        Ranked { heap: self }
    }

    pub fn into_ranked_vec(mut self) -> Vec<T> {
        self.ranked().collect()
    }

    fn sift_up(&mut self, mut hole: usize) {
        let key = self.data[hole].priority();
        while let Some(parent) = index::parent(hole) {
            if !self
                .comparator
                .ranks_at_least(&key, &self.data[parent].priority())
            {
                break;
            }
            self.data.swap(hole, parent);
            hole = parent;
        }
    }

    fn sift_down(&mut self, mut hole: usize) {
        let len = self.data.len();
        let key = self.data[hole].priority();
        while let Some(left) = index::left(hole, len) {
            let mut child = left;
            let mut child_key = self.data[left].priority();
            if let Some(right) = index::right(hole, len) {
                let right_key = self.data[right].priority();
                if self.comparator.ranks_at_least(&right_key, &child_key) {
                    child = right;
                    child_key = right_key;
                }
            }
            if !self.comparator.outranks(&child_key, &key) {
                break;
            }
            self.data.swap(hole, child);
            hole = child;
        }
    }
}

impl<T: Clone, C: Clone> Clone for BoundedPriorityHeap<T, C> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            capacity: self.capacity,
            data,
            comparator: self.comparator.clone(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a BoundedPriorityHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

pub struct Ranked<'a, T, C> {
    heap: &'a mut BoundedPriorityHeap<T, C>,
}

impl<T, C> Iterator for Ranked<'_, T, C>
where
    T: Prioritized,
    C: Comparator<T::Key>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.remove_max().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T, C> ExactSizeIterator for Ranked<'_, T, C>
where
    T: Prioritized,
    C: Comparator<T::Key>,
{
}

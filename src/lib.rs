//! Fixed-capacity priority heaps and in-place heapsort.
//!
//! `BoundedPriorityHeap` never grows past the capacity it was created with;
//! `heapsort` sorts caller-owned slices without allocating.

pub mod prelude;

pub use base;
pub use heap;
pub use heapsort;

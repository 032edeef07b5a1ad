use serde::{Deserialize, Serialize};
use thiserror::Error;

// heap

#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum HeapError {
    #[error("The heap is full.")]
    Full,
    #[error("The heap is empty.")]
    Empty,
    #[error("The capacity of a heap must be positive.")]
    ZeroCapacity,
}

/// An insertion that was refused because the heap is full.
///
/// The rejected item is handed back to the caller.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The heap is full.")]
pub struct InsertError<T> {
    item: T,
}

impl<T> InsertError<T> {
    pub fn new(item: T) -> Self {
        Self { item }
    }
    pub fn kind(&self) -> HeapError {
        HeapError::Full
    }
    pub fn item(&self) -> &T {
        &self.item
    }
    pub fn into_inner(self) -> T {
        self.item
    }
}

impl<T> From<InsertError<T>> for HeapError {
    fn from(_: InsertError<T>) -> Self {
        HeapError::Full
    }
}

// options

#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum OptionsError {
    #[error("Failed to parse heap options: {reason}")]
    Parse { reason: String },
    #[error("Invalid heap options: {reason}")]
    Invalid { reason: String },
}

pub mod comparator;
pub mod error;
pub mod options;
pub mod priority;

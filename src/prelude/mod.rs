pub use base::comparator::{Comparator, Max, Min};
pub use base::error::{HeapError, InsertError, OptionsError};
pub use base::options::HeapOptions;
pub use base::priority::{Keyed, Prioritized};

pub use heap::{BoundedPriorityHeap, Levels, Ranked};
pub use heapsort::{sort, sort_by, sort_len};

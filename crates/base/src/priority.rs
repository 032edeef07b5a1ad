use serde::{Deserialize, Serialize};

/// An element that carries its own priority.
pub trait Prioritized {
    type Key;

    fn priority(&self) -> Self::Key;
}

macro_rules! self_prioritized {
    ($($t:ty),*) => {
        $(
            impl Prioritized for $t {
                type Key = $t;

                fn priority(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

self_prioritized!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool);

/// A payload stored under an explicit priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Keyed<K, V> {
    pub priority: K,
    pub value: V,
}

impl<K, V> Keyed<K, V> {
    pub fn new(priority: K, value: V) -> Self {
        Self { priority, value }
    }
}

impl<K: Clone, V> Prioritized for Keyed<K, V> {
    type Key = K;

    fn priority(&self) -> K {
        self.priority.clone()
    }
}

use serde::{Deserialize, Serialize};

pub type Priority = i32;

/// Which end of the priority range sits at the front of a queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    /// Lowest priority first.
    Ascending,
    /// Highest priority first.
    Descending,
}

impl Order {
    pub const DEFAULT: Order = Order::Descending;

    /// Does an item at `new` get placed ahead of an item already queued at `existing`?
    ///
    /// Strict, so equal priorities never displace and earlier inserts stay in front.
    #[inline]
    pub fn displaces(self, new: Priority, existing: Priority) -> bool {
        match self {
            Order::Ascending => new < existing,
            Order::Descending => new > existing,
        }
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::DEFAULT
    }
}

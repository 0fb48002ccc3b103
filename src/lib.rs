//! A small priority queue built on a sorted singly linked list.
//!
//! Items are ordered by an integer priority, highest first by default or lowest first with
//! [`Order::Ascending`]. Items with equal priority come out in the order they were inserted.
//!
//! ```
//! use llist_pqueue::{Error, PQueue};
//!
//! let mut q = PQueue::new();
//! q.insert("A", 1);
//! q.insert("B", 5);
//! q.insert("C", 3);
//! assert_eq!(q.to_string(), "B (5): C (3): A (1)");
//! assert_eq!(q.pop(), Ok("B"));
//! assert_eq!(q.len(), 2);
//!
//! q.clear();
//! assert_eq!(q.peek(), Err(Error::EmptyQueue));
//! ```

pub mod error;
pub mod item;
pub mod order;
pub mod pqueue;
pub mod queue;
mod snapshot;

pub use crate::error::{Error, Result};
pub use crate::item::Item;
pub use crate::order::{Order, Priority};
pub use crate::pqueue::{PriorityDequeue, PriorityEnqueue, SharedPQueue};
pub use crate::queue::PQueue;

//! A priority queue kept sorted in a singly linked list.
//!
//! Every insert walks the chain from the head to find its spot, so filling a queue of `n` items
//! costs O(n^2) comparisons. That is fine for the handful of items this is meant for, a heap is
//! the better choice for large queues.

use crate::error::{Error, Result};
use crate::item::Item;
use crate::order::{Order, Priority};
use core::fmt;
use core::iter::FromIterator;
use tracing::{debug, trace};

/// A priority queue ordered by [`Order`], stable among equal priorities.
///
/// Not synchronized, see [`crate::pqueue`] for sharing one between threads.
pub struct PQueue<T> {
    order: Order,
    head: Option<Box<Item<T>>>,
    count: usize,
}

impl<T> PQueue<T> {
    /// Create an empty queue with the default, descending, order.
    pub fn new() -> Self {
        Self::with_order(Order::DEFAULT)
    }

    pub fn with_order(order: Order) -> Self {
        Self {
            order,
            head: None,
            count: 0,
        }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    /// Insert `data`, placing it behind every queued item it does not displace.
    ///
    /// An item only moves ahead of items it strictly beats per the queue's order, so items with
    /// equal priority come back out in the order they went in.
    pub fn insert(&mut self, data: T, priority: Priority) {
        let order = self.order;
        let mut position = 0usize;
        let mut link = &mut self.head;
        while link
            .as_deref()
            .map_or(false, |node| !order.displaces(priority, node.priority()))
        {
            if let Some(node) = link {
                link = &mut node.next;
                position += 1;
            }
        }

        let mut item = Box::new(Item::new(data, priority));
        item.set_next(link.take());
        *link = Some(item);
        self.count += 1;
        trace!(priority, position, len = self.count, "inserted");
    }

    /// Remove the front item and return its data.
    pub fn pop(&mut self) -> Result<T> {
        match self.pop_item() {
            Some(item) => Ok(item.into_data()),
            None => {
                debug!("pop from empty queue");
                Err(Error::EmptyQueue)
            }
        }
    }

    /// The front item's data, leaving it queued.
    pub fn peek(&self) -> Result<&T> {
        match self.peek_item() {
            Some(item) => Ok(item.data()),
            None => {
                debug!("peek at empty queue");
                Err(Error::EmptyQueue)
            }
        }
    }

    /// Remove the front item and return it, detached from the rest of the chain.
    ///
    /// Returns `None` when empty.
    pub fn pop_item(&mut self) -> Option<Item<T>> {
        let mut head = self.head.take()?;
        self.head = head.set_next(None);
        self.count -= 1;
        trace!(priority = head.priority(), len = self.count, "popped");
        Some(*head)
    }

    /// The front item, `None` when empty.
    pub fn peek_item(&self) -> Option<&Item<T>> {
        self.head.as_deref()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Drop every queued item.
    pub fn clear(&mut self) {
        //unlink one at a time, dropping the head would recurse down the whole chain
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.set_next(None);
        }
        self.count = 0;
    }

    /// Iterate the items front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.peek_item(),
            remaining: self.count,
        }
    }
}

impl<T> Default for PQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for PQueue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Renders `data (priority)` for each item front to back, separated by `": "`.
impl<T> fmt::Display for PQueue<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

impl<T> fmt::Debug for PQueue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        struct Items<'a, T>(&'a PQueue<T>);
        impl<'a, T: fmt::Debug> fmt::Debug for Items<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("PQueue")
            .field("order", &self.order)
            .field("items", &Items(self))
            .finish()
    }
}

impl<T> Extend<(T, Priority)> for PQueue<T> {
    fn extend<I: IntoIterator<Item = (T, Priority)>>(&mut self, iter: I) {
        for (data, priority) in iter {
            self.insert(data, priority);
        }
    }
}

impl<T> FromIterator<(T, Priority)> for PQueue<T> {
    fn from_iter<I: IntoIterator<Item = (T, Priority)>>(iter: I) -> Self {
        let mut q = Self::new();
        q.extend(iter);
        q
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Item<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Item<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.next?;
        self.next = item.next();
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a PQueue<T> {
    type Item = &'a Item<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pops `(data, priority)` pairs until the queue is drained.
pub struct IntoIter<T>(PQueue<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = (T, Priority);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_item().map(|item| {
            let priority = item.priority();
            (item.into_data(), priority)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for PQueue<T> {
    type Item = (T, Priority);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

//! Queue traits and the locked wrapper for sharing a queue between threads.
//!
//! `PQueue` itself does no locking, wrap it in a `spin::Mutex` to move items across threads.

extern crate alloc;

use crate::order::{Order, Priority};
use crate::queue::PQueue;
use alloc::sync::Arc;

pub trait PriorityEnqueue<T>: Send {
    fn enqueue(&mut self, priority: Priority, value: T);
}

pub trait PriorityDequeue<T>: Send {
    fn dequeue(&mut self) -> Option<(Priority, T)>;

    /// Dequeue the front item only if it would be ordered strictly ahead of an item at `priority`.
    fn dequeue_ahead_of(&mut self, priority: Priority) -> Option<(Priority, T)>;
}

/// A queue that can be cloned into several threads.
pub type SharedPQueue<T> = Arc<spin::Mutex<PQueue<T>>>;

pub fn shared<T>(order: Order) -> SharedPQueue<T> {
    Arc::new(spin::Mutex::new(PQueue::with_order(order)))
}

impl<T> PriorityEnqueue<T> for PQueue<T>
where
    T: Send,
{
    fn enqueue(&mut self, priority: Priority, value: T) {
        self.insert(value, priority)
    }
}

impl<T> PriorityDequeue<T> for PQueue<T>
where
    T: Send,
{
    fn dequeue(&mut self) -> Option<(Priority, T)> {
        self.pop_item().map(|item| (item.priority(), item.into_data()))
    }

    fn dequeue_ahead_of(&mut self, priority: Priority) -> Option<(Priority, T)> {
        let order = self.order();
        let ahead = self
            .peek_item()
            .map_or(false, |item| order.displaces(item.priority(), priority));
        if ahead {
            self.dequeue()
        } else {
            None
        }
    }
}

impl<T> PriorityEnqueue<T> for Arc<spin::Mutex<PQueue<T>>>
where
    T: Send,
{
    fn enqueue(&mut self, priority: Priority, value: T) {
        self.lock().enqueue(priority, value)
    }
}

impl<T> PriorityDequeue<T> for Arc<spin::Mutex<PQueue<T>>>
where
    T: Send,
{
    fn dequeue(&mut self) -> Option<(Priority, T)> {
        self.lock().dequeue()
    }

    fn dequeue_ahead_of(&mut self, priority: Priority) -> Option<(Priority, T)> {
        self.lock().dequeue_ahead_of(priority)
    }
}

//type erased queues, for holding either end without naming the queue type
impl<T> PriorityEnqueue<T> for Arc<spin::Mutex<dyn PriorityEnqueue<T>>>
where
    T: Send,
{
    fn enqueue(&mut self, priority: Priority, value: T) {
        self.lock().enqueue(priority, value)
    }
}

impl<T> PriorityDequeue<T> for Arc<spin::Mutex<dyn PriorityDequeue<T>>>
where
    T: Send,
{
    fn dequeue(&mut self) -> Option<(Priority, T)> {
        self.lock().dequeue()
    }

    fn dequeue_ahead_of(&mut self, priority: Priority) -> Option<(Priority, T)> {
        self.lock().dequeue_ahead_of(priority)
    }
}

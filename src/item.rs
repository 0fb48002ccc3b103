use crate::order::Priority;
use core::fmt;

/// A queued value along with its priority and the link to the item behind it.
///
/// The payload and priority are fixed when the item is created, only the link is ever rewritten
/// and only by the owning queue.
pub struct Item<T> {
    data: T,
    priority: Priority,
    pub(crate) next: Option<Box<Item<T>>>,
}

impl<T> Item<T> {
    pub fn new(data: T, priority: Priority) -> Self {
        Self {
            data,
            priority,
            next: None,
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// The item behind this one, if any.
    pub fn next(&self) -> Option<&Item<T>> {
        self.next.as_deref()
    }

    pub fn into_data(self) -> T {
        self.data
    }

    /// Replace the link, returning the old one.
    pub(crate) fn set_next(&mut self, next: Option<Box<Item<T>>>) -> Option<Box<Item<T>>> {
        core::mem::replace(&mut self.next, next)
    }
}

impl<T> fmt::Display for Item<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.data, self.priority)
    }
}

//doesn't follow the link, the queue prints the chain
impl<T> fmt::Debug for Item<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Item")
            .field("data", &self.data)
            .field("priority", &self.priority)
            .finish()
    }
}

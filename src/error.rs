use thiserror::Error;

/// Errors from the data returning queue accessors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `pop` or `peek` was called with nothing queued.
    #[error("queue is empty")]
    EmptyQueue,
}

pub type Result<T> = core::result::Result<T, Error>;

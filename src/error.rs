use thiserror::Error;

/// An error returned by the operations of a [`Tree`](crate::Tree).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// A required key argument was absent.
    #[error("key is absent")]
    InvalidArgument,

    /// An extremal query or removal was made against a tree with no entries.
    #[error("tree is empty")]
    EmptyCollection,
}

/// A `Result` whose error type is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

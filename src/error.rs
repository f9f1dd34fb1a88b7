//! Errors returned by the containers in this crate.
//!
//! Looking for a value that isn't stored is never an error: [`contains`] returns `false` and
//! [`remove`] returns `None`. Errors are reserved for operations that demand an element from a
//! container that has none.
//!
//! [`contains`]: crate::avl::Tree::contains
//! [`remove`]: crate::avl::Tree::remove

use thiserror::Error;

/// Everything that can go wrong when operating on a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An element was demanded (a minimum, a maximum, the top of a heap) from an empty container.
    #[error("the container is empty")]
    Empty,
}

/// Shorthand for results whose error is this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

//! An ordered map based on an AVL-balanced binary search tree.
//!
//! [`Map`] is the primary container: lookups, insertions and removals run in `O(log n)`
//! worst-case time because every node's subtrees differ in height by at most one.
//!
//! [`Tree`] wraps a `Map` behind a surface where keys and values may be absent, reporting
//! misuse through [`Error`] instead of `Option`.

#![deny(missing_docs)]

pub mod map;
pub mod tree;

mod error;
mod node;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use error::{Error, Result};
pub use map::Map;
pub use tree::Tree;

//! Shared contracts for collsync.
//!
//! This crate defines the capabilities element types implement and the
//! collection shapes the engine operates on:
//! - [`Synchronize`] — equality-matched elements that copy state onto a persisted twin
//! - [`MapTo`] — one-way projection onto a differently-typed destination
//! - [`Construct`] — default and parent-aware construction of target elements
//! - [`MutableCollection`] / [`CollectionShape`] — the persisted/target collection contract
//! - [`ChildList`] — an owner-tagged list with two type parameters
//!
//! The reconciler and mapper live in `collsync-reconcile` and `collsync-mapper`.

mod collection;
mod contracts;

pub use collection::{ChildList, CollectionShape, ItemType, MutableCollection};
pub use contracts::{Construct, MapTo, NoParent, Synchronize};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Which side of a reconciliation an element was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSide {
    /// The submitted (authoritative) collection.
    Source,
    /// The persisted collection being mutated.
    Target,
}

impl std::fmt::Display for MatchSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Errors surfaced by the reconciler and mapper.
///
/// All of these are programmer or configuration errors; nothing here is
/// transient or worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("target collection type '{collection}' does not have any type parameters")]
    MissingItemType { collection: &'static str },

    #[error(
        "target collection type '{collection}' resolves to item type '{resolved}', expected '{expected}'"
    )]
    ItemTypeMismatch {
        collection: &'static str,
        expected: &'static str,
        resolved: &'static str,
    },

    #[error("{side} element at index {index} is equal to {matches} counterparts")]
    AmbiguousMatch {
        side: MatchSide,
        index: usize,
        matches: usize,
    },
}

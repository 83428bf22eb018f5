//! Collection mapping for collsync.
//!
//! [`Mapper`] projects a source collection onto a target collection of a
//! different element type. Each distinct source element gets a freshly
//! constructed target element ([`Construct`]), optionally linked to a parent,
//! which the source element then fills in ([`MapTo`]).
//!
//! The element type of a target collection is resolved from its shape through
//! an [`ItemTypeRegistry`] owned by the caller and shared between mappers.

mod mapper;
mod registry;

pub use collsync_types::{
    ChildList, CollectionShape, Construct, Error, ItemType, MapTo, MutableCollection, NoParent,
    Result,
};
pub use mapper::Mapper;
pub use registry::ItemTypeRegistry;

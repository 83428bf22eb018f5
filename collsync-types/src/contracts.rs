//! Capabilities implemented by element types.

/// An element matched by equality and synchronized in place.
///
/// `PartialEq` is the only identity signal: a submitted element matches a
/// persisted one when they compare equal. There is no separate key field.
///
/// Equality must be reflexive, symmetric and stable across
/// [`synchronize_to`](Synchronize::synchronize_to). If copying state onto a
/// persisted element could change what it compares equal to, matches later in
/// the same reconciliation pass are no longer well defined.
pub trait Synchronize: PartialEq {
    /// Copies mutable state from `self` onto `persisted`.
    /// Returns true if any field of `persisted` actually changed.
    fn synchronize_to(&self, persisted: &mut Self) -> bool;
}

/// One-way projection of an element's fields onto a target of another type.
pub trait MapTo<T> {
    fn map_to(&self, target: &mut T);
}

/// Placeholder parent for element types that never take one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoParent;

/// Construction of a fresh target element, optionally linked to its owner.
///
/// `P` is the owner type. It may be unsized, so an element can accept any
/// owner implementing a trait by using `dyn Trait` as `P`.
///
/// The default `construct_with_parent` ignores the owner and falls back to
/// [`construct_default`](Construct::construct_default). Element types that
/// need an immediate back-link override it.
pub trait Construct<P: ?Sized = NoParent>: Sized {
    fn construct_default() -> Self;

    fn construct_with_parent(parent: &P) -> Self {
        let _ = parent;
        Self::construct_default()
    }
}

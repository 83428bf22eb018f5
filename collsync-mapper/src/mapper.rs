use std::sync::Arc;

use collsync_types::{
    CollectionShape, Construct, Error, MapTo, MutableCollection, NoParent, Result,
};
use tracing::{debug, trace};

use crate::registry::ItemTypeRegistry;

/// Maps source collections onto constructed target collections.
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    registry: Arc<ItemTypeRegistry>,
}

impl Mapper {
    /// Creates a mapper backed by a shared registry.
    pub fn new(registry: Arc<ItemTypeRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<ItemTypeRegistry> {
        &self.registry
    }

    /// Maps `source` into `target` for element types without a parent.
    ///
    /// Shorthand for [`map_into_with_parent`](Self::map_into_with_parent)
    /// with no parent.
    pub fn map_into<S, T, C>(&self, source: Option<&[S]>, target: Option<&mut C>) -> Result<usize>
    where
        S: MapTo<T> + PartialEq,
        T: Construct + 'static,
        C: MutableCollection<T> + CollectionShape,
    {
        self.map_into_with_parent::<S, T, C, NoParent>(source, target, None)
    }

    /// Appends one constructed and populated `T` per distinct element of `source`.
    ///
    /// A missing `source` or `target` means there is nothing to map and
    /// returns `Ok(0)`. Otherwise the element type of `C` is resolved through
    /// the registry, so a misconfigured shape fails even when `source` is empty.
    ///
    /// Source elements are deduplicated by equality, keeping the first
    /// occurrence. Each target element is built with
    /// [`Construct::construct_with_parent`] when `parent` is given and
    /// [`Construct::construct_default`] otherwise, then filled in by
    /// [`MapTo::map_to`].
    ///
    /// Returns the number of elements appended.
    pub fn map_into_with_parent<S, T, C, P>(
        &self,
        source: Option<&[S]>,
        target: Option<&mut C>,
        parent: Option<&P>,
    ) -> Result<usize>
    where
        S: MapTo<T> + PartialEq,
        T: Construct<P> + 'static,
        C: MutableCollection<T> + CollectionShape,
        P: ?Sized,
    {
        let Some(source) = source else {
            return Ok(0);
        };
        let Some(target) = target else {
            trace!("No target {} to map into", C::shape_name());
            return Ok(0);
        };

        let item_type = self.registry.resolve::<C>()?;
        if !item_type.is::<T>() {
            return Err(Error::ItemTypeMismatch {
                collection: C::shape_name(),
                expected: std::any::type_name::<T>(),
                resolved: item_type.name(),
            });
        }

        let mut distinct: Vec<&S> = Vec::with_capacity(source.len());
        for item in source {
            if !distinct.iter().any(|seen| *seen == item) {
                distinct.push(item);
            }
        }

        for item in &distinct {
            let mut mapped = match parent {
                Some(parent) => T::construct_with_parent(parent),
                None => T::construct_default(),
            };
            item.map_to(&mut mapped);
            target.push_item(mapped);
        }

        debug!(
            "Mapped {} of {} source elements into {}",
            distinct.len(),
            source.len(),
            C::shape_name()
        );
        Ok(distinct.len())
    }

    /// Maps `source` into a new, empty collection of shape `C`.
    pub fn map_new<S, T, C, P>(&self, source: &[S], parent: Option<&P>) -> Result<C>
    where
        S: MapTo<T> + PartialEq,
        T: Construct<P> + 'static,
        C: MutableCollection<T> + CollectionShape + Default,
        P: ?Sized,
    {
        let mut target = C::default();
        self.map_into_with_parent::<S, T, C, P>(Some(source), Some(&mut target), parent)?;
        Ok(target)
    }
}

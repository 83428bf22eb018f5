//! Caller-owned cache of resolved collection element types.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use collsync_types::{CollectionShape, Error, ItemType, Result};
use tracing::debug;

/// Maps a collection shape to the element type it holds.
///
/// Entries are resolved lazily on first use and never invalidated. The
/// registry is safe to share between threads; two threads racing on the same
/// shape both resolve it and the later insert wins, which is harmless because
/// both compute the same value.
#[derive(Debug, Default)]
pub struct ItemTypeRegistry {
    item_types: RwLock<HashMap<TypeId, ItemType>>,
}

impl ItemTypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the element type held by collections of shape `C`.
    ///
    /// The element type is the last type parameter of the shape. Fails with
    /// [`Error::MissingItemType`] if the shape has no type parameters.
    pub fn resolve<C: CollectionShape>(&self) -> Result<ItemType> {
        let key = TypeId::of::<C>();
        if let Some(item_type) = self.read().get(&key) {
            return Ok(*item_type);
        }

        let item_type = C::type_params()
            .last()
            .copied()
            .ok_or(Error::MissingItemType {
                collection: C::shape_name(),
            })?;

        self.write().insert(key, item_type);
        debug!("Resolved item type {} for {}", item_type, C::shape_name());
        Ok(item_type)
    }

    /// Returns true if shape `C` has already been resolved.
    #[must_use]
    pub fn contains<C: CollectionShape>(&self) -> bool {
        self.read().contains_key(&TypeId::of::<C>())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while holding the lock cannot leave the map half-updated.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<TypeId, ItemType>> {
        self.item_types.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<TypeId, ItemType>> {
        self.item_types.write().unwrap_or_else(PoisonError::into_inner)
    }
}

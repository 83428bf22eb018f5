//! Collection contracts shared by the reconciler and mapper.

use std::any::TypeId;
use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;

/// A collection the engine can read, add to, and remove from in place.
///
/// Elements keep their slot (and therefore their identity) unless removed.
pub trait MutableCollection<E> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&E>;

    fn get_mut(&mut self, index: usize) -> Option<&mut E>;

    /// Appends an element at the end.
    fn push_item(&mut self, item: E);

    /// Keeps only the elements for which `keep` returns true, preserving order.
    fn retain_items(&mut self, keep: &mut dyn FnMut(&E) -> bool);
}

impl<E> MutableCollection<E> for Vec<E> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&E> {
        self.as_slice().get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut E> {
        self.as_mut_slice().get_mut(index)
    }

    fn push_item(&mut self, item: E) {
        self.push(item);
    }

    fn retain_items(&mut self, keep: &mut dyn FnMut(&E) -> bool) {
        self.retain(|item| keep(item));
    }
}

impl<E> MutableCollection<E> for VecDeque<E> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&E> {
        VecDeque::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut E> {
        VecDeque::get_mut(self, index)
    }

    fn push_item(&mut self, item: E) {
        self.push_back(item);
    }

    fn retain_items(&mut self, keep: &mut dyn FnMut(&E) -> bool) {
        self.retain(|item| keep(item));
    }
}

/// A runtime descriptor for a type appearing in a collection shape.
#[derive(Debug, Clone, Copy)]
pub struct ItemType {
    id: TypeId,
    name: &'static str,
}

impl ItemType {
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if this descriptor names `T`.
    #[must_use]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for ItemType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ItemType {}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Describes the generic shape of a collection type.
///
/// The element type is taken to be the last entry of
/// [`type_params`](CollectionShape::type_params). A shape with no parameters
/// cannot be mapped into.
pub trait CollectionShape: 'static {
    /// Type parameters of the shape, in declaration order.
    fn type_params() -> Vec<ItemType>;

    fn shape_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<T: 'static> CollectionShape for Vec<T> {
    fn type_params() -> Vec<ItemType> {
        vec![ItemType::of::<T>()]
    }
}

impl<T: 'static> CollectionShape for VecDeque<T> {
    fn type_params() -> Vec<ItemType> {
        vec![ItemType::of::<T>()]
    }
}

/// A list of child elements tagged with the type of their owner.
///
/// The owner type only shows up in the shape: `ChildList<Order, Line>` holds
/// `Line` values, and its last type parameter is `Line`.
pub struct ChildList<P: ?Sized, T> {
    items: Vec<T>,
    _owner: PhantomData<fn() -> Box<P>>,
}

impl<P: ?Sized, T> ChildList<P, T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            _owner: PhantomData,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<P: ?Sized, T> Default for ChildList<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ?Sized, T: Clone> Clone for ChildList<P, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            _owner: PhantomData,
        }
    }
}

impl<P: ?Sized, T: fmt::Debug> fmt::Debug for ChildList<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<P: ?Sized, T> From<Vec<T>> for ChildList<P, T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            _owner: PhantomData,
        }
    }
}

impl<P: ?Sized, T> FromIterator<T> for ChildList<P, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<P: ?Sized, T> MutableCollection<T> for ChildList<P, T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    fn push_item(&mut self, item: T) {
        self.items.push(item);
    }

    fn retain_items(&mut self, keep: &mut dyn FnMut(&T) -> bool) {
        self.items.retain(|item| keep(item));
    }
}

impl<P: ?Sized + 'static, T: 'static> CollectionShape for ChildList<P, T> {
    fn type_params() -> Vec<ItemType> {
        vec![ItemType::of::<P>(), ItemType::of::<T>()]
    }
}

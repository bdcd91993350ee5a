//! Component traits
//!
//! A game declares its own store type holding one [`ComponentStorage`] per
//! component kind, implements [`Storage<T>`] once per kind and
//! [`ComponentStore::remove_all`] once. The generic accessors on
//! [`ComponentStore`] then work for every kind the store knows about, and
//! asking for a kind it does not know is a compile error rather than a failed
//! runtime cast.

use super::{ComponentStorage, Entity};

/// Marker trait for components
pub trait Component: 'static + Send + Sync {}

/// Access to the storage of component kind `T` inside a store
pub trait Storage<T: Component> {
    /// Shared access to the per-kind storage
    fn storage(&self) -> &ComponentStorage<T>;

    /// Mutable access to the per-kind storage
    fn storage_mut(&mut self) -> &mut ComponentStorage<T>;
}

/// A set of per-kind component storages addressed by entity
pub trait ComponentStore {
    /// Remove the entity's components of every kind in one step
    fn remove_all(&mut self, entity: Entity);

    /// Insert or overwrite the entity's component of this kind
    fn add<T: Component>(&mut self, entity: Entity, component: T) -> Option<T>
    where
        Self: Storage<T>,
    {
        <Self as Storage<T>>::storage_mut(self).insert(entity, component)
    }

    /// Remove the entity's component of this kind; no-op when absent
    fn remove<T: Component>(&mut self, entity: Entity) -> Option<T>
    where
        Self: Storage<T>,
    {
        <Self as Storage<T>>::storage_mut(self).remove(entity)
    }

    /// Shared access to the entity's component of this kind
    fn get<T: Component>(&self, entity: Entity) -> Option<&T>
    where
        Self: Storage<T>,
    {
        <Self as Storage<T>>::storage(self).get(entity)
    }

    /// Mutable access to the entity's component of this kind
    fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T>
    where
        Self: Storage<T>,
    {
        <Self as Storage<T>>::storage_mut(self).get_mut(entity)
    }

    /// Whether the entity has a component of this kind
    fn has<T: Component>(&self, entity: Entity) -> bool
    where
        Self: Storage<T>,
    {
        <Self as Storage<T>>::storage(self).contains(entity)
    }
}

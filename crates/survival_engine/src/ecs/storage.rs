//! Component Storage
//!
//! One strongly typed sparse map per component kind, keyed by entity. Stores
//! group several of these behind the [`Storage`](super::Storage) trait instead
//! of keeping type-erased boxes around.

use std::collections::HashMap;

use super::{Component, Entity};

/// Sparse map from entity to a single component kind
#[derive(Debug, Clone)]
pub struct ComponentStorage<T: Component> {
    components: HashMap<Entity, T>,
}

impl<T: Component> Default for ComponentStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Component> ComponentStorage<T> {
    /// Create an empty storage
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
        }
    }

    /// Insert a component, returning the value it replaced
    pub fn insert(&mut self, entity: Entity, component: T) -> Option<T> {
        self.components.insert(entity, component)
    }

    /// Remove the entity's component if present
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        self.components.remove(&entity)
    }

    /// Shared access to the entity's component
    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.components.get(&entity)
    }

    /// Mutable access to the entity's component
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.components.get_mut(&entity)
    }

    /// Whether the entity has a component of this kind
    pub fn contains(&self, entity: Entity) -> bool {
        self.components.contains_key(&entity)
    }

    /// Number of stored components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether no component of this kind is stored
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

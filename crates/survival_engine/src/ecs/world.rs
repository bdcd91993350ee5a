//! ECS World implementation

use super::{Component, ComponentStore, Entity, EntityRegistry, Storage};

/// ECS World containing all entities and components.
///
/// The registry and the store are public fields so a system can walk
/// `entities` while mutating `components` without fighting the borrow checker.
#[derive(Debug, Default)]
pub struct World<S> {
    /// Live entity ids in creation order
    pub entities: EntityRegistry,

    /// Per-kind component storages
    pub components: S,
}

impl<S: ComponentStore + Default> World<S> {
    /// Create an empty world
    pub fn new() -> Self {
        Self::with_store(S::default())
    }
}

impl<S: ComponentStore> World<S> {
    /// Create a world around an existing store
    pub const fn with_store(components: S) -> Self {
        Self {
            entities: EntityRegistry::new(),
            components,
        }
    }

    /// Create a new entity
    pub fn create_entity(&mut self) -> Entity {
        self.entities.create()
    }

    /// Destroy an entity: it leaves the live set and loses every component.
    ///
    /// Returns whether the entity was alive. Idempotent.
    pub fn destroy_entity(&mut self, entity: Entity) -> bool {
        let was_alive = self.entities.destroy(entity);
        self.components.remove_all(entity);
        was_alive
    }

    /// Destroy a batch of entities collected by an earlier pass
    pub fn destroy_entities<I>(&mut self, entities: I) -> usize
    where
        I: IntoIterator<Item = Entity>,
    {
        entities
            .into_iter()
            .filter(|&entity| self.destroy_entity(entity))
            .count()
    }

    /// Add a component to an entity, overwriting any previous one of that kind
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T)
    where
        S: Storage<T>,
    {
        self.components.add(entity, component);
    }

    /// Remove a component from an entity
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T>
    where
        S: Storage<T>,
    {
        self.components.remove(entity)
    }

    /// Get a component from an entity
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T>
    where
        S: Storage<T>,
    {
        self.components.get(entity)
    }

    /// Get a mutable component from an entity
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T>
    where
        S: Storage<T>,
    {
        self.components.get_mut(entity)
    }

    /// Get an iterator over all entities
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.list().iter()
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

//! Entity registry
//!
//! Owns the set of live entity ids. Ids come from a monotonic counter and are
//! never recycled; the live list keeps creation order so every system visits
//! entities in the same sequence.

use super::Entity;

/// Allocates entity ids and tracks which ones are alive
#[derive(Debug, Default)]
pub struct EntityRegistry {
    next_entity_id: u64,
    entities: Vec<Entity>,
}

impl EntityRegistry {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self {
            next_entity_id: 0,
            entities: Vec::new(),
        }
    }

    /// Allocate a new entity and add it to the live set
    pub fn create(&mut self) -> Entity {
        let entity = Entity::new(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.push(entity);
        entity
    }

    /// Remove an entity from the live set.
    ///
    /// Destroying an entity twice, or one that was never created, does nothing.
    /// Returns whether the entity was alive.
    pub fn destroy(&mut self, entity: Entity) -> bool {
        match self.entities.iter().position(|&live| live == entity) {
            Some(index) => {
                // `remove` rather than `swap_remove`: creation order must survive
                self.entities.remove(index);
                true
            }
            None => false,
        }
    }

    /// Live entities in creation order
    pub fn list(&self) -> &[Entity] {
        &self.entities
    }

    /// Owned copy of the live entities, for passes that mutate the registry
    pub fn snapshot(&self) -> Vec<Entity> {
        self.entities.clone()
    }

    /// Whether the entity is currently alive
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether there are no live entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

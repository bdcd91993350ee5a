//! Entity implementation

use std::fmt;

/// Entity identifier.
///
/// Ids are handed out by [`EntityRegistry`](super::EntityRegistry) in strictly
/// increasing order and are never reused, so a stale handle can never alias a
/// newer entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entity {
    id: u64,
}

impl Entity {
    /// Create a new entity with the given ID
    pub(super) const fn new(id: u64) -> Self {
        Self { id }
    }

    /// Get the entity ID
    pub const fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}

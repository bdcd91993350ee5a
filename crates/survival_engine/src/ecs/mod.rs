//! Entity-Component-System implementation
//!
//! Entities are plain ids from an [`EntityRegistry`]; components live in
//! strongly typed per-kind [`ComponentStorage`]s grouped by a game-defined
//! [`ComponentStore`]; systems run in a fixed order through a [`Scheduler`].

pub mod world;
pub mod entity;
pub mod registry;
pub mod storage;
pub mod component;
pub mod system;
pub mod scheduler;

pub use world::World;
pub use entity::Entity;
pub use registry::EntityRegistry;
pub use storage::ComponentStorage;
pub use component::{Component, ComponentStore, Storage};
pub use system::System;
pub use scheduler::{Scheduler, SystemPhase};

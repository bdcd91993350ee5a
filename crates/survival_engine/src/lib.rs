//! # Survival Engine
//!
//! A small engine core for 2D real-time games.
//!
//! ## Features
//!
//! - **ECS Architecture**: entity registry, strongly typed component storage,
//!   phased system scheduling
//! - **Platform Boundary**: games draw through [`render::Canvas`] and read input
//!   through [`application::Platform`]; backends plug in from outside
//! - **Configuration**: TOML/RON config files loaded once at startup
//! - **Asset Loading**: ordered search paths with typed errors
//!
//! ## Quick Start
//!
//! ```rust
//! use survival_engine::prelude::*;
//!
//! #[derive(Debug, Clone, Copy)]
//! struct Position(Vec2);
//! impl Component for Position {}
//!
//! #[derive(Default)]
//! struct Store {
//!     positions: ComponentStorage<Position>,
//! }
//!
//! impl Storage<Position> for Store {
//!     fn storage(&self) -> &ComponentStorage<Position> {
//!         &self.positions
//!     }
//!
//!     fn storage_mut(&mut self) -> &mut ComponentStorage<Position> {
//!         &mut self.positions
//!     }
//! }
//!
//! impl ComponentStore for Store {
//!     fn remove_all(&mut self, entity: Entity) {
//!         self.positions.remove(entity);
//!     }
//! }
//!
//! let mut world = World::<Store>::new();
//! let entity = world.create_entity();
//! world.add_component(entity, Position(Vec2::new(1.0, 2.0)));
//! assert!(world.get_component::<Position>(entity).is_some());
//!
//! world.destroy_entity(entity);
//! assert!(world.get_component::<Position>(entity).is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod ecs;
pub mod assets;
pub mod render;
pub mod input;
pub mod config;
pub mod application;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        application::{AppEvent, Platform},
        foundation::{
            math::{Rect, Vec2},
            time::{Clock, ManualClock, Stopwatch},
        },
        ecs::{
            Component, ComponentStorage, ComponentStore, Entity, EntityRegistry, Scheduler,
            Storage, System, SystemPhase, World,
        },
        render::{Canvas, Color, TextBounds},
        input::{InputManager, KeyCode},
        config::Config,
    };
}

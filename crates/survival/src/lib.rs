//! # Survival
//!
//! Top-down survival game: steer the green circle with WASD or the arrow keys
//! and avoid the red enemies that spawn on the screen edges and chase you.
//! Each contact costs HP; the game is over when HP reaches zero.
//!
//! The simulation runs against any [`Platform`](survival_engine::application::Platform),
//! so the same [`game::Game`] drives the macroquad window and the headless
//! platform used by the tests.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod platform;
pub mod render;
pub mod simulation;
pub mod spawn;
pub mod store;
pub mod systems;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use game::{ExitReason, Game};
pub use simulation::Simulation;

//! Mutable game state shared by every system

use survival_engine::prelude::*;

use crate::components::Health;
use crate::config::{GameConfig, GameplayConfig};
use crate::spawn;
use crate::store::GameWorld;

/// Everything the systems read and write during a frame
#[derive(Debug)]
pub struct Simulation {
    /// Entities and their components
    pub world: GameWorld,

    /// The player entity, created once at startup and never destroyed
    pub player: Entity,

    /// Keys held this frame
    pub input: InputManager,

    /// Gameplay tuning
    pub config: GameplayConfig,

    /// Play area the player is clamped to and enemies spawn on
    pub bounds: Rect,

    /// Latched once the player's HP reaches zero
    pub game_over: bool,
}

impl Simulation {
    /// Create a world holding only the player
    pub fn new(config: &GameConfig) -> Self {
        let bounds = config.bounds();
        let mut world = GameWorld::new();
        let player = spawn::create_player(&mut world, &config.gameplay, bounds);

        Self {
            world,
            player,
            input: InputManager::new(),
            config: config.gameplay.clone(),
            bounds,
            game_over: false,
        }
    }

    /// Player HP, or `None` if the player lost its health component
    pub fn player_hp(&self) -> Option<i32> {
        self.world
            .get_component::<Health>(self.player)
            .map(|health| health.hp)
    }
}

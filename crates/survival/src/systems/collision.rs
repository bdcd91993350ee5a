//! Player-enemy contact

use survival_engine::foundation::math::circles_overlap;
use survival_engine::prelude::*;

use crate::components::{EnemyTag, Health, Shape, Transform};
use crate::simulation::Simulation;

/// Damages the player once per touching enemy and removes those enemies.
///
/// Hits are collected before anything is destroyed. Game over latches the
/// first time HP drops to zero or below.
#[derive(Debug, Default)]
pub struct CollisionSystem;

impl CollisionSystem {
    /// Enemies whose circle overlaps the player's
    pub fn find_hits(state: &Simulation) -> Vec<Entity> {
        let components = &state.world.components;
        let player = state.player;
        let (Some(transform), Some(shape), true) = (
            components.get::<Transform>(player),
            components.get::<Shape>(player),
            components.has::<Health>(player),
        ) else {
            return Vec::new();
        };
        let (center, radius) = (transform.position, shape.radius);

        state
            .world
            .entities()
            .copied()
            .filter(|&entity| components.has::<EnemyTag>(entity))
            .filter(|&entity| {
                match (
                    components.get::<Transform>(entity),
                    components.get::<Shape>(entity),
                ) {
                    (Some(enemy), Some(enemy_shape)) => {
                        circles_overlap(center, radius, enemy.position, enemy_shape.radius)
                    }
                    _ => false,
                }
            })
            .collect()
    }
}

impl System<Simulation> for CollisionSystem {
    fn name(&self) -> &'static str {
        "collision"
    }

    fn run(&mut self, state: &mut Simulation, _delta_time: f32) {
        let hits = Self::find_hits(state);
        if hits.is_empty() {
            return;
        }

        let damage = state.config.collision_damage;
        if let Some(health) = state.world.get_component_mut::<Health>(state.player) {
            for enemy in &hits {
                health.take_damage(damage);
                log::debug!("Enemy {enemy} hit the player, HP now {}", health.hp);
            }
            if health.is_dead() && !state.game_over {
                state.game_over = true;
                log::info!("Player died with {} HP", health.hp);
            }
        }

        state.world.destroy_entities(hits);
    }
}

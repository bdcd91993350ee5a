//! Enemy steering

use survival_engine::foundation::math::direction_or_zero;
use survival_engine::prelude::*;

use crate::components::{EnemyTag, Transform, Velocity};
use crate::simulation::Simulation;

/// Distances at or below this leave the enemy standing still
pub const SEEK_EPSILON: f32 = 1e-4;

/// Points every enemy straight at the player at enemy speed
#[derive(Debug, Default)]
pub struct EnemyAiSystem;

impl System<Simulation> for EnemyAiSystem {
    fn name(&self) -> &'static str {
        "enemy_ai"
    }

    fn run(&mut self, state: &mut Simulation, _delta_time: f32) {
        let speed = state.config.enemy_speed;
        let components = &mut state.world.components;
        let Some(target) = components
            .get::<Transform>(state.player)
            .map(|transform| transform.position)
        else {
            return;
        };

        for &entity in state.world.entities.list() {
            if !components.has::<EnemyTag>(entity) {
                continue;
            }
            let Some(position) = components.get::<Transform>(entity).map(|t| t.position) else {
                continue;
            };
            let Some(velocity) = components.get_mut::<Velocity>(entity) else {
                continue;
            };

            velocity.linear = direction_or_zero(target - position, SEEK_EPSILON) * speed;
        }
    }
}

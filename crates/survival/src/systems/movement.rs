//! Velocity integration and player clamping

use survival_engine::prelude::*;

use crate::components::{PlayerTag, Transform, Velocity};
use crate::simulation::Simulation;

/// Moves every entity with a transform and a velocity by `velocity * dt`.
///
/// The player is then clamped to the play area; enemies are not.
#[derive(Debug, Default)]
pub struct MovementSystem;

impl System<Simulation> for MovementSystem {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn run(&mut self, state: &mut Simulation, delta_time: f32) {
        let components = &mut state.world.components;

        for &entity in state.world.entities.list() {
            let Some(velocity) = components.get::<Velocity>(entity).map(|v| v.linear) else {
                continue;
            };
            let is_player = components.has::<PlayerTag>(entity);
            let Some(transform) = components.get_mut::<Transform>(entity) else {
                continue;
            };

            transform.position += velocity * delta_time;
            if is_player {
                transform.position = state.bounds.clamp_point(transform.position);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::spawn;
    use approx::assert_relative_eq;

    fn position_of(state: &Simulation, entity: Entity) -> Vec2 {
        state
            .world
            .get_component::<Transform>(entity)
            .map(|t| t.position)
            .unwrap()
    }

    #[test]
    fn test_player_moves_by_velocity_times_dt() {
        let mut state = Simulation::new(&GameConfig::default());
        if let Some(velocity) = state.world.get_component_mut::<Velocity>(state.player) {
            velocity.linear = Vec2::new(200.0, 0.0);
        }

        MovementSystem.run(&mut state, 0.5);

        let position = position_of(&state, state.player);
        assert_relative_eq!(position.x, 500.0);
        assert_relative_eq!(position.y, 300.0);
    }

    #[test]
    fn test_entity_moves_from_origin() {
        let mut state = Simulation::new(&GameConfig::default());
        let mover = state.world.create_entity();
        state
            .world
            .add_component(mover, Transform::from_position(Vec2::zeros()));
        state
            .world
            .add_component(mover, Velocity::new(Vec2::new(10.0, 0.0)));

        MovementSystem.run(&mut state, 0.5);

        let position = position_of(&state, mover);
        assert_relative_eq!(position.x, 5.0);
        assert_relative_eq!(position.y, 0.0);
    }

    #[test]
    fn test_player_left_of_screen_is_pulled_back() {
        let mut state = Simulation::new(&GameConfig::default());
        if let Some(transform) = state.world.get_component_mut::<Transform>(state.player) {
            transform.position = Vec2::new(-5.0, 300.0);
        }

        MovementSystem.run(&mut state, 0.016);

        assert_eq!(position_of(&state, state.player), Vec2::new(0.0, 300.0));
    }

    #[test]
    fn test_player_clamped_to_bounds() {
        let mut state = Simulation::new(&GameConfig::default());
        if let Some(transform) = state.world.get_component_mut::<Transform>(state.player) {
            transform.position = Vec2::new(790.0, 300.0);
        }
        if let Some(velocity) = state.world.get_component_mut::<Velocity>(state.player) {
            velocity.linear = Vec2::new(200.0, -2000.0);
        }

        MovementSystem.run(&mut state, 1.0);

        assert_eq!(position_of(&state, state.player), Vec2::new(800.0, 0.0));
    }

    #[test]
    fn test_enemies_are_not_clamped() {
        let mut state = Simulation::new(&GameConfig::default());
        let enemy = spawn::create_enemy(&mut state.world, &state.config, Vec2::new(0.0, 10.0));
        if let Some(velocity) = state.world.get_component_mut::<Velocity>(enemy) {
            velocity.linear = Vec2::new(-100.0, 0.0);
        }

        MovementSystem.run(&mut state, 1.0);

        assert_eq!(position_of(&state, enemy), Vec2::new(-100.0, 10.0));
    }

    #[test]
    fn test_entity_without_velocity_stays_put() {
        let mut state = Simulation::new(&GameConfig::default());
        let marker = state.world.create_entity();
        state
            .world
            .add_component(marker, Transform::from_position(Vec2::new(5.0, 5.0)));

        MovementSystem.run(&mut state, 1.0);

        assert_eq!(position_of(&state, marker), Vec2::new(5.0, 5.0));
    }
}

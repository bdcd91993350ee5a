//! Keyboard to player velocity

use survival_engine::prelude::*;

use crate::components::Velocity;
use crate::simulation::Simulation;

/// Keys that move the player up
pub const UP_KEYS: [KeyCode; 2] = [KeyCode::W, KeyCode::Up];
/// Keys that move the player down
pub const DOWN_KEYS: [KeyCode; 2] = [KeyCode::S, KeyCode::Down];
/// Keys that move the player left
pub const LEFT_KEYS: [KeyCode; 2] = [KeyCode::A, KeyCode::Left];
/// Keys that move the player right
pub const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::D, KeyCode::Right];

/// Every key the game samples each frame
pub const MOVEMENT_KEYS: [KeyCode; 8] = [
    KeyCode::W,
    KeyCode::Up,
    KeyCode::S,
    KeyCode::Down,
    KeyCode::A,
    KeyCode::Left,
    KeyCode::D,
    KeyCode::Right,
];

/// Sets the player's velocity from the held keys.
///
/// Opposite directions do not cancel: down overrides up and right overrides
/// left. Diagonals are not normalized.
#[derive(Debug, Default)]
pub struct InputSystem;

impl System<Simulation> for InputSystem {
    fn name(&self) -> &'static str {
        "input"
    }

    fn run(&mut self, state: &mut Simulation, _delta_time: f32) {
        let speed = state.config.player_speed;
        let input = &state.input;
        let Some(velocity) = state.world.components.get_mut::<Velocity>(state.player) else {
            return;
        };

        velocity.linear = Vec2::zeros();
        if input.is_any_down(&UP_KEYS) {
            velocity.linear.y = -speed;
        }
        if input.is_any_down(&DOWN_KEYS) {
            velocity.linear.y = speed;
        }
        if input.is_any_down(&LEFT_KEYS) {
            velocity.linear.x = -speed;
        }
        if input.is_any_down(&RIGHT_KEYS) {
            velocity.linear.x = speed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn velocity_with(keys: &[KeyCode]) -> Vec2 {
        let mut state = Simulation::new(&GameConfig::default());
        for &key in keys {
            state.input.handle_key_input(key, true);
        }

        InputSystem.run(&mut state, 0.016);

        state
            .world
            .get_component::<Velocity>(state.player)
            .map(|velocity| velocity.linear)
            .unwrap()
    }

    #[test]
    fn test_no_keys_stops_player() {
        assert_eq!(velocity_with(&[]), Vec2::zeros());
    }

    #[test]
    fn test_single_directions() {
        assert_eq!(velocity_with(&[KeyCode::W]), Vec2::new(0.0, -200.0));
        assert_eq!(velocity_with(&[KeyCode::Down]), Vec2::new(0.0, 200.0));
        assert_eq!(velocity_with(&[KeyCode::Left]), Vec2::new(-200.0, 0.0));
        assert_eq!(velocity_with(&[KeyCode::D]), Vec2::new(200.0, 0.0));
    }

    #[test]
    fn test_diagonal_is_not_normalized() {
        assert_eq!(
            velocity_with(&[KeyCode::W, KeyCode::D]),
            Vec2::new(200.0, -200.0)
        );
    }

    #[test]
    fn test_later_direction_wins() {
        assert_eq!(velocity_with(&[KeyCode::W, KeyCode::S]), Vec2::new(0.0, 200.0));
        assert_eq!(
            velocity_with(&[KeyCode::Left, KeyCode::Right]),
            Vec2::new(200.0, 0.0)
        );
    }

    #[test]
    fn test_missing_velocity_is_skipped() {
        let mut state = Simulation::new(&GameConfig::default());
        state.world.remove_component::<Velocity>(state.player);
        state.input.handle_key_input(KeyCode::W, true);

        InputSystem.run(&mut state, 0.016);

        assert!(state.world.get_component::<Velocity>(state.player).is_none());
    }
}

//! Timed enemy spawning

use rand::rngs::StdRng;
use rand::SeedableRng;
use survival_engine::prelude::*;

use crate::simulation::Simulation;
use crate::spawn;

/// Spawns one enemy on a random screen edge every spawn interval.
///
/// The timer resets to zero after a spawn, so overshoot is dropped and at most
/// one enemy appears per frame.
#[derive(Debug)]
pub struct SpawnerSystem {
    timer: f32,
    rng: StdRng,
}

impl SpawnerSystem {
    /// Create a spawner drawing positions from `rng`
    pub const fn new(rng: StdRng) -> Self {
        Self { timer: 0.0, rng }
    }

    /// Create a spawner from an optional fixed seed
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }

    /// Seconds accumulated since the last spawn
    pub const fn timer(&self) -> f32 {
        self.timer
    }
}

impl System<Simulation> for SpawnerSystem {
    fn name(&self) -> &'static str {
        "spawner"
    }

    fn run(&mut self, state: &mut Simulation, delta_time: f32) {
        self.timer += delta_time;
        if self.timer < state.config.spawn_interval {
            return;
        }

        let (edge, position) = spawn::random_edge_point(&mut self.rng, state.bounds);
        let enemy = spawn::create_enemy(&mut state.world, &state.config, position);
        log::debug!("Spawned enemy {enemy} on {edge:?} edge at {position:?}");

        self.timer = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::EnemyTag;
    use crate::config::GameConfig;
    use approx::assert_relative_eq;

    fn enemy_count(state: &Simulation) -> usize {
        state
            .world
            .entities()
            .filter(|&&entity| state.world.components.has::<EnemyTag>(entity))
            .count()
    }

    #[test]
    fn test_spawns_exactly_at_interval() {
        let mut state = Simulation::new(&GameConfig::default());
        let mut spawner = SpawnerSystem::from_seed(Some(1));

        spawner.run(&mut state, 1.0);
        assert_eq!(enemy_count(&state), 0);
        assert_relative_eq!(spawner.timer(), 1.0);

        spawner.run(&mut state, 1.0);
        assert_eq!(enemy_count(&state), 1);
        assert_relative_eq!(spawner.timer(), 0.0);
    }

    #[test]
    fn test_overshoot_is_dropped() {
        let mut state = Simulation::new(&GameConfig::default());
        let mut spawner = SpawnerSystem::from_seed(Some(1));

        spawner.run(&mut state, 5.0);

        assert_eq!(enemy_count(&state), 1);
        assert_relative_eq!(spawner.timer(), 0.0);
    }

    #[test]
    fn test_spawn_lands_on_boundary() {
        let mut state = Simulation::new(&GameConfig::default());
        let mut spawner = SpawnerSystem::from_seed(Some(99));

        spawner.run(&mut state, 2.0);

        let enemy = state
            .world
            .entities()
            .copied()
            .find(|&entity| state.world.components.has::<EnemyTag>(entity))
            .unwrap();
        let position = state
            .world
            .get_component::<crate::components::Transform>(enemy)
            .unwrap()
            .position;
        let on_edge = position.x == 0.0
            || position.x == 800.0
            || position.y == 0.0
            || position.y == 600.0;
        assert!(on_edge, "spawned off the boundary at {position:?}");
    }

    #[test]
    fn test_same_seed_same_positions() {
        let positions = |seed| {
            let mut state = Simulation::new(&GameConfig::default());
            let mut spawner = SpawnerSystem::from_seed(Some(seed));
            for _ in 0..3 {
                spawner.run(&mut state, 2.0);
            }
            let positions: Vec<_> = state
                .world
                .entities()
                .filter_map(|&entity| {
                    state
                        .world
                        .get_component::<crate::components::Transform>(entity)
                        .map(|t| t.position)
                })
                .collect();
            positions
        };

        assert_eq!(positions(7), positions(7));
    }
}

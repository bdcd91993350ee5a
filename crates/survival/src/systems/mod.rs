//! Game systems and their frame order

pub mod input;
pub mod movement;
pub mod enemy_ai;
pub mod spawner;
pub mod collision;

pub use input::InputSystem;
pub use movement::MovementSystem;
pub use enemy_ai::EnemyAiSystem;
pub use spawner::SpawnerSystem;
pub use collision::CollisionSystem;

use survival_engine::prelude::*;

use crate::simulation::Simulation;

/// Build the per-frame schedule: input, movement, enemy AI, spawner, collision
pub fn build_schedule(seed: Option<u64>) -> Scheduler<Simulation> {
    let mut scheduler = Scheduler::new();
    scheduler
        .add_system(SystemPhase::PreUpdate, InputSystem)
        .add_system(SystemPhase::Update, MovementSystem)
        .add_system(SystemPhase::Update, EnemyAiSystem)
        .add_system(SystemPhase::Update, SpawnerSystem::from_seed(seed))
        .add_system(SystemPhase::PostUpdate, CollisionSystem);
    scheduler
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_order() {
        let scheduler = build_schedule(Some(0));

        assert_eq!(
            scheduler.execution_order(),
            vec!["input", "movement", "enemy_ai", "spawner", "collision"]
        );
    }
}

//! Entity factories

use rand::Rng;
use survival_engine::prelude::*;

use crate::components::{EnemyTag, Health, PlayerTag, Shape, Transform, Velocity};
use crate::config::GameplayConfig;
use crate::store::GameWorld;

/// Screen edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// x = left boundary, random y
    Left,
    /// x = right boundary, random y
    Right,
    /// y = top boundary, random x
    Top,
    /// y = bottom boundary, random x
    Bottom,
}

impl Edge {
    /// All edges, indexed by the spawner's random draw
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Point on this edge at `t` (0..1) along it
    pub fn point(self, bounds: Rect, t: f32) -> Vec2 {
        let x = bounds.min.x + t * bounds.width();
        let y = bounds.min.y + t * bounds.height();
        match self {
            Self::Left => Vec2::new(bounds.min.x, y),
            Self::Right => Vec2::new(bounds.max.x, y),
            Self::Top => Vec2::new(x, bounds.min.y),
            Self::Bottom => Vec2::new(x, bounds.max.y),
        }
    }
}

/// Pick a uniformly random edge and a uniformly random point along it
pub fn random_edge_point<R: Rng + ?Sized>(rng: &mut R, bounds: Rect) -> (Edge, Vec2) {
    let edge = Edge::ALL[rng.gen_range(0..Edge::ALL.len())];
    let t = rng.gen_range(0.0..1.0);
    (edge, edge.point(bounds, t))
}

/// Create the player at the center of `bounds`
pub fn create_player(world: &mut GameWorld, config: &GameplayConfig, bounds: Rect) -> Entity {
    let player = world.create_entity();
    let size = Vec2::new(config.player_radius, config.player_radius);

    world.add_component(player, Transform::new(bounds.center(), size));
    world.add_component(player, Velocity::zero());
    world.add_component(player, Shape::circle(config.player_radius, Color::GREEN));
    world.add_component(player, Health::new(config.initial_hp));
    world.add_component(player, PlayerTag);

    log::info!("Created player {player} at {:?}", bounds.center());
    player
}

/// Create an enemy at `position`; the AI system steers it from the next frame
pub fn create_enemy(world: &mut GameWorld, config: &GameplayConfig, position: Vec2) -> Entity {
    let enemy = world.create_entity();
    let size = Vec2::new(config.enemy_radius, config.enemy_radius);

    world.add_component(enemy, Transform::new(position, size));
    world.add_component(enemy, Velocity::zero());
    world.add_component(enemy, Shape::circle(config.enemy_radius, Color::RED));
    world.add_component(enemy, EnemyTag);

    enemy
}

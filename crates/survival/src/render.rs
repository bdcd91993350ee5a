//! Frame rendering
//!
//! Draws the scene, the debug overlay and the game-over banner through any
//! [`Canvas`], so the same code renders to a window or a recorded draw list.

use survival_engine::prelude::*;

use crate::components::{EnemyTag, Shape, Transform};
use crate::simulation::Simulation;

/// Top-left corner of the debug overlay
pub const OVERLAY_ORIGIN: Vec2 = Vec2::new(10.0, 10.0);

/// Debug overlay font size
pub const OVERLAY_FONT_SIZE: u16 = 14;

/// Distance between overlay baselines, as a multiple of the font size
const OVERLAY_LINE_HEIGHT: f32 = 1.25;

/// Game-over banner font size
pub const GAME_OVER_FONT_SIZE: u16 = 50;

/// Game-over banner text
pub const GAME_OVER_TEXT: &str = "GAME OVER";

/// Figures shown in the debug overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayStats {
    /// Live entities, player included
    pub entities: usize,
    /// Live enemies
    pub enemies: usize,
    /// Player HP, 0 if the player has no health
    pub player_hp: i32,
    /// Whole seconds since the game started
    pub elapsed_secs: u32,
}

impl OverlayStats {
    /// Gather the overlay figures from the current state
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn collect(state: &Simulation, elapsed_secs: f32) -> Self {
        let enemies = state
            .world
            .entities()
            .filter(|&&entity| state.world.components.has::<EnemyTag>(entity))
            .count();

        Self {
            entities: state.world.entity_count(),
            enemies,
            player_hp: state.player_hp().unwrap_or(0),
            elapsed_secs: elapsed_secs.max(0.0) as u32,
        }
    }

    /// Overlay lines, top to bottom
    pub fn lines(&self) -> [String; 4] {
        [
            format!("Entities: {}", self.entities),
            format!("Enemies: {}", self.enemies),
            format!("Player HP: {}", self.player_hp),
            format!("Time: {}", self.elapsed_secs),
        ]
    }
}

/// Draw one complete frame
pub fn render_frame<C>(canvas: &mut C, state: &Simulation, elapsed_secs: f32)
where
    C: Canvas + ?Sized,
{
    canvas.clear(Color::BLACK);
    draw_entities(canvas, state);
    draw_overlay(canvas, &OverlayStats::collect(state, elapsed_secs));
    if state.game_over {
        draw_game_over(canvas, state.bounds);
    }
}

/// Draw every entity that has both a transform and a shape, as a circle
pub fn draw_entities<C>(canvas: &mut C, state: &Simulation)
where
    C: Canvas + ?Sized,
{
    let components = &state.world.components;
    for &entity in state.world.entities() {
        if let (Some(transform), Some(shape)) = (
            components.get::<Transform>(entity),
            components.get::<Shape>(entity),
        ) {
            canvas.draw_circle(transform.position, shape.radius, shape.color);
        }
    }
}

/// Draw the debug overlay in the top-left corner
pub fn draw_overlay<C>(canvas: &mut C, stats: &OverlayStats)
where
    C: Canvas + ?Sized,
{
    let line_height = f32::from(OVERLAY_FONT_SIZE) * OVERLAY_LINE_HEIGHT;
    for (row, line) in stats.lines().iter().enumerate() {
        let position = OVERLAY_ORIGIN + Vec2::new(0.0, row as f32 * line_height);
        canvas.draw_text(position, line, OVERLAY_FONT_SIZE, Color::WHITE);
    }
}

/// Draw the game-over banner centered in `bounds`
pub fn draw_game_over<C>(canvas: &mut C, bounds: Rect)
where
    C: Canvas + ?Sized,
{
    let text_bounds = canvas.measure_text(GAME_OVER_TEXT, GAME_OVER_FONT_SIZE);
    let position = text_bounds.centered_on(bounds.center());
    canvas.draw_text(position, GAME_OVER_TEXT, GAME_OVER_FONT_SIZE, Color::RED);
}

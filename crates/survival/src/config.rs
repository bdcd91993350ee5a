//! Game configuration
//!
//! Every field has a default, so a partial `survival.toml` only overrides what
//! it names and a missing file runs the game with stock settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use survival_engine::prelude::*;

/// Default config file, looked up in the working directory
pub const CONFIG_PATH: &str = "survival.toml";

/// Game configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window settings
    pub window: WindowConfig,

    /// Gameplay tuning
    pub gameplay: GameplayConfig,

    /// Asset search paths
    pub assets: AssetConfig,
}

impl Config for GameConfig {}

impl GameConfig {
    /// Play area: the window rectangle anchored at the origin
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.window.width as f32, self.window.height as f32)
    }
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Window width in pixels
    pub width: u32,

    /// Window height in pixels
    pub height: u32,

    /// Frame rate cap; zero disables it
    pub frame_rate_limit: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Top-Down Survival".to_string(),
            width: 800,
            height: 600,
            frame_rate_limit: 60,
        }
    }
}

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Player speed (units per second)
    pub player_speed: f32,

    /// Enemy speed (units per second)
    pub enemy_speed: f32,

    /// Seconds between enemy spawns
    pub spawn_interval: f32,

    /// HP lost per enemy contact
    pub collision_damage: i32,

    /// Player HP at start
    pub initial_hp: i32,

    /// Player collision and draw radius
    pub player_radius: f32,

    /// Enemy collision and draw radius
    pub enemy_radius: f32,

    /// Fixed seed for enemy spawn positions; entropy when absent
    pub seed: Option<u64>,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            player_speed: 200.0,
            enemy_speed: 100.0,
            spawn_interval: 2.0,
            collision_damage: 10,
            initial_hp: 100,
            player_radius: 20.0,
            enemy_radius: 15.0,
            seed: None,
        }
    }
}

/// Asset configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Font files tried in order; the first existing one is used
    pub font_paths: Vec<PathBuf>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            font_paths: vec![
                PathBuf::from("C:/Windows/Fonts/arial.ttf"),
                PathBuf::from("./assets/fonts/arial.ttf"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.frame_rate_limit, 60);
        assert_relative_eq!(config.gameplay.player_speed, 200.0);
        assert_relative_eq!(config.gameplay.enemy_speed, 100.0);
        assert_relative_eq!(config.gameplay.spawn_interval, 2.0);
        assert_eq!(config.gameplay.collision_damage, 10);
        assert_eq!(config.gameplay.initial_hp, 100);
        assert_eq!(config.assets.font_paths.len(), 2);
    }

    #[test]
    fn test_bounds_follow_window_size() {
        let mut config = GameConfig::default();
        config.window.width = 1024;
        config.window.height = 768;

        let bounds = config.bounds();

        assert_eq!(bounds.min, Vec2::zeros());
        assert_eq!(bounds.max, Vec2::new(1024.0, 768.0));
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("survival.toml");
        std::fs::write(&path, "[gameplay]\nenemy_speed = 50.0\nseed = 7\n").unwrap();

        let config = GameConfig::load_from_file(&path).unwrap();

        assert_relative_eq!(config.gameplay.enemy_speed, 50.0);
        assert_eq!(config.gameplay.seed, Some(7));
        assert_relative_eq!(config.gameplay.player_speed, 200.0);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("survival.toml");
        let mut config = GameConfig::default();
        config.window.title = "Arena".to_string();
        config.gameplay.collision_damage = 25;

        config.save_to_file(&path).unwrap();

        assert_eq!(GameConfig::load_from_file(&path).unwrap(), config);
    }
}

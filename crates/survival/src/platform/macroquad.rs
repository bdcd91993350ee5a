//! Windowed platform backed by macroquad
//!
//! macroquad owns the window and the frame presentation (`next_frame`), so the
//! binary drives this backend from inside `#[macroquad::main]`.

use std::collections::VecDeque;

use ::macroquad::prelude as mq;
use survival_engine::assets::{self, Asset, AssetError};
use survival_engine::prelude::*;

use crate::config::AssetConfig;

/// TrueType font usable by macroquad's text functions
pub struct FontAsset(mq::Font);

impl Asset for FontAsset {
    fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        mq::load_ttf_font_from_bytes(bytes)
            .map(Self)
            .map_err(|e| AssetError::InvalidData(e.to_string()))
    }
}

/// The game window
pub struct MacroquadPlatform {
    font: mq::Font,
    events: VecDeque<AppEvent>,
}

impl MacroquadPlatform {
    /// Load the UI font and take over window close handling.
    ///
    /// Fails when none of the configured font paths holds a usable font.
    pub fn new(config: &AssetConfig) -> Result<Self, AssetError> {
        let loaded = assets::load_first::<FontAsset, _>(&config.font_paths)?;
        log::info!("Loaded font from {}", loaded.path.display());

        // Close requests become events instead of exiting the process
        mq::prevent_quit();

        Ok(Self {
            font: loaded.asset.0,
            events: VecDeque::new(),
        })
    }

    /// Collect this frame's window events. Call once per frame before ticking.
    pub fn begin_frame(&mut self) {
        if mq::is_quit_requested() {
            self.events.push_back(AppEvent::WindowCloseRequested);
        }
        self.events.extend(
            mq::get_keys_pressed()
                .into_iter()
                .filter_map(from_mq_key)
                .map(AppEvent::KeyPressed),
        );
    }
}

impl Canvas for MacroquadPlatform {
    fn clear(&mut self, color: Color) {
        mq::clear_background(to_mq_color(color));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        mq::draw_circle(center.x, center.y, radius, to_mq_color(color));
    }

    fn draw_text(&mut self, position: Vec2, text: &str, font_size: u16, color: Color) {
        // macroquad positions text by baseline
        let dims = mq::measure_text(text, Some(&self.font), font_size, 1.0);
        mq::draw_text_ex(
            text,
            position.x.round(),
            (position.y + dims.offset_y).round(),
            mq::TextParams {
                font: Some(&self.font),
                font_size,
                color: to_mq_color(color),
                ..Default::default()
            },
        );
    }

    fn measure_text(&self, text: &str, font_size: u16) -> TextBounds {
        let dims = mq::measure_text(text, Some(&self.font), font_size, 1.0);
        TextBounds {
            width: dims.width,
            height: dims.height,
        }
    }
}

impl Platform for MacroquadPlatform {
    fn poll_event(&mut self) -> Option<AppEvent> {
        self.events.pop_front()
    }

    fn is_key_down(&self, key: KeyCode) -> bool {
        mq::is_key_down(to_mq_key(key))
    }
}

fn to_mq_color(color: Color) -> mq::Color {
    mq::Color::from_rgba(color.r, color.g, color.b, color.a)
}

const fn to_mq_key(key: KeyCode) -> mq::KeyCode {
    match key {
        KeyCode::A => mq::KeyCode::A,
        KeyCode::B => mq::KeyCode::B,
        KeyCode::C => mq::KeyCode::C,
        KeyCode::D => mq::KeyCode::D,
        KeyCode::E => mq::KeyCode::E,
        KeyCode::F => mq::KeyCode::F,
        KeyCode::G => mq::KeyCode::G,
        KeyCode::H => mq::KeyCode::H,
        KeyCode::I => mq::KeyCode::I,
        KeyCode::J => mq::KeyCode::J,
        KeyCode::K => mq::KeyCode::K,
        KeyCode::L => mq::KeyCode::L,
        KeyCode::M => mq::KeyCode::M,
        KeyCode::N => mq::KeyCode::N,
        KeyCode::O => mq::KeyCode::O,
        KeyCode::P => mq::KeyCode::P,
        KeyCode::Q => mq::KeyCode::Q,
        KeyCode::R => mq::KeyCode::R,
        KeyCode::S => mq::KeyCode::S,
        KeyCode::T => mq::KeyCode::T,
        KeyCode::U => mq::KeyCode::U,
        KeyCode::V => mq::KeyCode::V,
        KeyCode::W => mq::KeyCode::W,
        KeyCode::X => mq::KeyCode::X,
        KeyCode::Y => mq::KeyCode::Y,
        KeyCode::Z => mq::KeyCode::Z,
        KeyCode::Space => mq::KeyCode::Space,
        KeyCode::Enter => mq::KeyCode::Enter,
        KeyCode::Escape => mq::KeyCode::Escape,
        KeyCode::Up => mq::KeyCode::Up,
        KeyCode::Down => mq::KeyCode::Down,
        KeyCode::Left => mq::KeyCode::Left,
        KeyCode::Right => mq::KeyCode::Right,
    }
}

fn from_mq_key(key: mq::KeyCode) -> Option<KeyCode> {
    KeyCode::ALL.into_iter().find(|&candidate| to_mq_key(candidate) == key)
}

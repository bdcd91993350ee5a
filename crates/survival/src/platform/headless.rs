//! Scripted platform with no window
//!
//! Events are queued by hand, held keys are toggled by hand and every frame is
//! recorded into a [`DrawList`]. Used by the integration tests and for running
//! the simulation without a display.

use std::collections::VecDeque;

use survival_engine::prelude::*;
use survival_engine::render::DrawList;

/// Platform driven entirely by the caller
#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    events: VecDeque<AppEvent>,
    keys: InputManager,
    frame: DrawList,
}

impl HeadlessPlatform {
    /// Create a platform with no pending events and no keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for the next `poll_event` calls
    pub fn push_event(&mut self, event: AppEvent) {
        self.events.push_back(event);
    }

    /// Hold a key down until released
    pub fn press(&mut self, key: KeyCode) {
        self.keys.handle_key_input(key, true);
    }

    /// Release a held key
    pub fn release(&mut self, key: KeyCode) {
        self.keys.handle_key_input(key, false);
    }

    /// Commands drawn since the last clear
    pub const fn frame(&self) -> &DrawList {
        &self.frame
    }
}

impl Canvas for HeadlessPlatform {
    fn clear(&mut self, color: Color) {
        self.frame.clear_commands();
        self.frame.clear(color);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.frame.draw_circle(center, radius, color);
    }

    fn draw_text(&mut self, position: Vec2, text: &str, font_size: u16, color: Color) {
        self.frame.draw_text(position, text, font_size, color);
    }

    fn measure_text(&self, text: &str, font_size: u16) -> TextBounds {
        self.frame.measure_text(text, font_size)
    }
}

impl Platform for HeadlessPlatform {
    fn poll_event(&mut self) -> Option<AppEvent> {
        self.events.pop_front()
    }

    fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys.is_key_down(key)
    }
}

//! Platform boundary and application events
//!
//! A [`Platform`] is the window the game runs in: it reports events, answers
//! keyboard queries and accepts draw calls through [`Canvas`]. Backends live
//! outside the engine so the simulation can run against a real window or a
//! scripted headless one.

use crate::input::KeyCode;
use crate::render::Canvas;

/// Application events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The user asked to close the window
    WindowCloseRequested,

    /// A key went down this frame
    KeyPressed(KeyCode),
}

/// Window, keyboard and drawing surface consumed by the game loop
pub trait Platform: Canvas {
    /// Next pending event, or `None` once the queue is drained.
    ///
    /// Must return immediately when nothing is pending.
    fn poll_event(&mut self) -> Option<AppEvent>;

    /// Whether the key is currently held
    fn is_key_down(&self, key: KeyCode) -> bool;
}

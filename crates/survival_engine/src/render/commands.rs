//! Recorded draw commands
//!
//! [`DrawList`] is a [`Canvas`] that stores every call instead of drawing it.
//! Headless runs and tests use it to inspect exactly what a frame would show.

use super::{Canvas, Color, TextBounds};
use crate::foundation::math::Vec2;

/// Horizontal advance per character, as a fraction of the font size
const MONOSPACE_ADVANCE: f32 = 0.5;

/// A single drawing operation with fully resolved values
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the frame
    Clear(Color),

    /// Filled circle
    Circle {
        /// Center in screen coordinates
        center: Vec2,
        /// Radius in pixels
        radius: f32,
        /// Fill color
        color: Color,
    },

    /// One line of text
    Text {
        /// Top-left corner in screen coordinates
        position: Vec2,
        /// The string drawn
        text: String,
        /// Font size in pixels
        font_size: u16,
        /// Text color
        color: Color,
    },
}

/// Ordered list of draw commands for one or more frames
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    /// Commands in submission order
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all recorded commands
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded circles as `(center, radius, color)`
    pub fn circles(&self) -> Vec<(Vec2, f32, Color)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }

    /// Recorded text lines, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, position: Vec2, text: &str, font_size: u16, color: Color) {
        self.commands.push(DrawCommand::Text {
            position,
            text: text.to_owned(),
            font_size,
            color,
        });
    }

    /// Monospace approximation; there is no real font behind a draw list.
    fn measure_text(&self, text: &str, font_size: u16) -> TextBounds {
        let size = f32::from(font_size);
        TextBounds {
            width: text.chars().count() as f32 * size * MONOSPACE_ADVANCE,
            height: size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_submission_order() {
        let mut list = DrawList::new();
        list.clear(Color::BLACK);
        list.draw_circle(Vec2::new(1.0, 2.0), 3.0, Color::RED);
        list.draw_text(Vec2::new(10.0, 10.0), "hello", 14, Color::WHITE);

        assert_eq!(list.len(), 3);
        assert_eq!(list.commands[0], DrawCommand::Clear(Color::BLACK));
        assert_eq!(list.circles(), vec![(Vec2::new(1.0, 2.0), 3.0, Color::RED)]);
        assert_eq!(list.texts(), vec!["hello"]);
    }

    #[test]
    fn test_monospace_measure() {
        let list = DrawList::new();
        let bounds = list.measure_text("GAME OVER", 50);

        assert_eq!(bounds.width, 225.0);
        assert_eq!(bounds.height, 50.0);
    }
}

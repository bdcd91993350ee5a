//! 2D rendering boundary
//!
//! The engine never talks to a graphics API directly. Frames are described
//! through the [`Canvas`] trait with fully resolved positions, sizes and
//! colors; a platform backend turns those calls into pixels. Layout (centering
//! text, stacking lines) happens on the engine side, which is why the canvas
//! exposes [`Canvas::measure_text`].

pub mod commands;

pub use commands::{DrawCommand, DrawList};

use crate::foundation::math::Vec2;

/// RGBA color with 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque green
    pub const GREEN: Self = Self::rgb(0, 255, 0);

    /// Create a color from all four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }
}

/// Size of a rendered string, as reported by the backend's font
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextBounds {
    /// Horizontal extent in pixels
    pub width: f32,
    /// Vertical extent in pixels
    pub height: f32,
}

impl TextBounds {
    /// Top-left position that centers text of this size on `center`
    pub fn centered_on(&self, center: Vec2) -> Vec2 {
        Vec2::new(center.x - self.width / 2.0, center.y - self.height / 2.0)
    }
}

/// Immediate-mode drawing surface for one frame
pub trait Canvas {
    /// Fill the whole frame with a color
    fn clear(&mut self, color: Color);

    /// Draw a filled circle centered on `center`
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Draw a single line of text with its top-left corner at `position`
    fn draw_text(&mut self, position: Vec2, text: &str, font_size: u16, color: Color);

    /// Measure a single line of text as it would be drawn
    fn measure_text(&self, text: &str, font_size: u16) -> TextBounds;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_on() {
        let bounds = TextBounds {
            width: 200.0,
            height: 50.0,
        };

        assert_eq!(bounds.centered_on(Vec2::new(400.0, 300.0)), Vec2::new(300.0, 275.0));
    }

    #[test]
    fn test_palette_is_opaque() {
        for color in [Color::BLACK, Color::WHITE, Color::RED, Color::GREEN] {
            assert_eq!(color.a, 255);
        }
        assert_eq!(Color::GREEN, Color::rgba(0, 255, 0, 255));
    }
}

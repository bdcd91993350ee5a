//! Math utilities and types
//!
//! Provides the 2D math types used by components and systems. Vectors are
//! nalgebra types so the usual operators (`+`, `*`, `norm`, ...) are available.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Axis-aligned rectangle described by its minimum and maximum corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner (smallest x and y)
    pub min: Vec2,

    /// Bottom-right corner (largest x and y)
    pub max: Vec2,
}

impl Rect {
    /// Create a rectangle from two corners
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create a rectangle anchored at the origin with the given size
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            min: Vec2::zeros(),
            max: Vec2::new(width, height),
        }
    }

    /// Width of the rectangle
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Whether a point lies inside the rectangle (edges included)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Clamp a point into the rectangle, each axis independently
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
        )
    }
}

/// Circle-circle overlap test on squared distances.
///
/// Touching circles (distance exactly equal to the sum of radii) do not overlap.
pub fn circles_overlap(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    (center_a - center_b).norm_squared() < reach * reach
}

/// Unit vector along `vector`, or zero when its length is not above `epsilon`.
pub fn direction_or_zero(vector: Vec2, epsilon: f32) -> Vec2 {
    let length = vector.norm();
    if length > epsilon {
        vector / length
    } else {
        Vec2::zeros()
    }
}

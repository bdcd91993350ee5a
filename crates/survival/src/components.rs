//! Game-specific components

use survival_engine::prelude::*;

/// Placement of an entity on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Center position in screen coordinates
    pub position: Vec2,

    /// Rotation in radians (carried but unused by the current systems)
    pub rotation: f32,

    /// Nominal size
    pub size: Vec2,
}

impl Component for Transform {}

impl Transform {
    /// Create an unrotated transform
    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            rotation: 0.0,
            size,
        }
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec2) -> Self {
        Self::new(position, Vec2::zeros())
    }
}

/// Velocity component in units per second
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    /// Linear velocity
    pub linear: Vec2,
}

impl Component for Velocity {}

impl Velocity {
    /// Create a velocity component
    pub const fn new(linear: Vec2) -> Self {
        Self { linear }
    }

    /// A velocity that does not move the entity
    pub fn zero() -> Self {
        Self::new(Vec2::zeros())
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Self::zero()
    }
}

/// Kinds of drawable shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Filled circle
    Circle,

    /// Filled rectangle
    Rectangle,
}

/// Visual shape; the radius also drives collision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    /// Shape kind
    pub kind: ShapeKind,

    /// Fill color
    pub color: Color,

    /// Radius for drawing and collision
    pub radius: f32,
}

impl Component for Shape {}

impl Shape {
    /// Create a circle
    pub const fn circle(radius: f32, color: Color) -> Self {
        Self {
            kind: ShapeKind::Circle,
            color,
            radius,
        }
    }
}

/// Health component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    /// Hit points; zero or below means dead
    pub hp: i32,
}

impl Component for Health {}

impl Health {
    /// Create a new health component
    pub const fn new(hp: i32) -> Self {
        Self { hp }
    }

    /// Take damage
    pub fn take_damage(&mut self, damage: i32) {
        self.hp -= damage;
    }

    /// Check if dead
    pub const fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

/// Marks the player entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerTag;

impl Component for PlayerTag {}

/// Marks enemy entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnemyTag;

impl Component for EnemyTag {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_goes_negative() {
        let mut health = Health::new(5);
        health.take_damage(10);

        assert_eq!(health.hp, -5);
        assert!(health.is_dead());
    }

    #[test]
    fn test_health_exactly_zero_is_dead() {
        let mut health = Health::new(10);
        health.take_damage(10);
        assert!(health.is_dead());
    }

    #[test]
    fn test_transform_from_position() {
        let transform = Transform::from_position(Vec2::new(1.0, 2.0));

        assert_eq!(transform.position, Vec2::new(1.0, 2.0));
        assert_eq!(transform.rotation, 0.0);
    }
}

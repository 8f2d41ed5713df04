//! Character state shared by every motion strategy.

use glam::{Quat, Vec3};

/// The player capsule as the control pipeline sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterState {
    /// World position of the capsule center
    pub position: Vec3,
    /// Linear velocity (physics-driven modes only; zero otherwise)
    pub velocity: Vec3,
    /// Facing angle about +Y in radians; 0 faces +Z
    pub heading: f32,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 1.0, 0.0))
    }
}

impl CharacterState {
    /// Spawn at `position`, at rest, facing +Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            heading: 0.0,
        }
    }

    /// Rotation for the rendered capsule.
    pub fn facing(&self) -> Quat {
        Quat::from_rotation_y(self.heading)
    }

    /// Unit vector the character faces, in the XZ plane.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.heading.sin(), 0.0, self.heading.cos())
    }

    /// Speed in the XZ plane.
    pub fn horizontal_speed(&self) -> f32 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z).length()
    }
}

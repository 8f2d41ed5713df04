//! Motion strategies
//!
//! Three interchangeable ways to turn a joystick direction into character
//! motion. Screen-space Y maps to world-space Z in all of them.
//!
//! - [`KinematicIncrement`] - moves the position directly, `speed` per tick
//! - [`PhysicsVelocity`] - commands a physics body's X/Z velocity
//! - [`VelocityWithHeading`] - same velocity command, plus a facing angle
//!
//! The strategy is chosen once at composition time with [`strategy_for`].

use glam::Vec2;

use super::character::CharacterState;
use crate::config::{MotionConfig, MotionMode};

/// What a strategy asks the physics backend to do this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionCommand {
    /// No physics write.
    None,
    /// Set the body's X/Z velocity to `(v.x, v.y)`; Y is untouched.
    PlanarVelocity(Vec2),
}

/// One tick of character motion.
pub trait MotionStrategy {
    /// Which mode this strategy implements.
    fn mode(&self) -> MotionMode;

    /// Apply `direction` to the character and return the physics command.
    ///
    /// `direction` is read, not consumed: the same value may arrive on many
    /// consecutive ticks.
    fn apply(&self, direction: Vec2, character: &mut CharacterState) -> MotionCommand;
}

/// Direct position increments. Per tick, independent of frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicIncrement {
    pub speed: f32,
}

impl MotionStrategy for KinematicIncrement {
    fn mode(&self) -> MotionMode {
        MotionMode::Kinematic
    }

    fn apply(&self, direction: Vec2, character: &mut CharacterState) -> MotionCommand {
        character.position.x += direction.x * self.speed;
        character.position.z += direction.y * self.speed;
        MotionCommand::None
    }
}

/// Velocity assignment for a fixed-rotation physics body.
///
/// Overrides whatever horizontal velocity the engine computed, so there is no
/// residual drift once the stick is released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsVelocity {
    pub speed: f32,
    /// Bridges the joystick's unit range to world speed
    pub scale: f32,
}

impl PhysicsVelocity {
    /// Planar velocity for a direction, as `(x, z)`.
    pub fn planar_velocity(&self, direction: Vec2) -> Vec2 {
        direction * self.speed * self.scale
    }
}

impl MotionStrategy for PhysicsVelocity {
    fn mode(&self) -> MotionMode {
        MotionMode::PhysicsVelocity
    }

    fn apply(&self, direction: Vec2, character: &mut CharacterState) -> MotionCommand {
        let planar = self.planar_velocity(direction);
        character.velocity.x = planar.x;
        character.velocity.z = planar.y;
        MotionCommand::PlanarVelocity(planar)
    }
}

/// Velocity assignment plus a heading that follows the stick.
///
/// An idle stick keeps the last heading instead of snapping back to a default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityWithHeading {
    pub velocity: PhysicsVelocity,
}

impl MotionStrategy for VelocityWithHeading {
    fn mode(&self) -> MotionMode {
        MotionMode::VelocityWithHeading
    }

    fn apply(&self, direction: Vec2, character: &mut CharacterState) -> MotionCommand {
        if direction != Vec2::ZERO {
            character.heading = direction.x.atan2(direction.y);
        }
        self.velocity.apply(direction, character)
    }
}

/// Build the strategy selected by `config.mode`.
pub fn strategy_for(config: &MotionConfig) -> Box<dyn MotionStrategy> {
    let velocity = PhysicsVelocity {
        speed: config.speed,
        scale: config.velocity_scale,
    };
    log::debug!("motion strategy: {:?} (speed {})", config.mode, config.speed);
    match config.mode {
        MotionMode::Kinematic => Box::new(KinematicIncrement { speed: config.speed }),
        MotionMode::PhysicsVelocity => Box::new(velocity),
        MotionMode::VelocityWithHeading => Box::new(VelocityWithHeading { velocity }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_kinematic_maps_screen_y_to_world_z() {
        let strategy = KinematicIncrement { speed: 0.5 };
        let mut character = CharacterState::new(Vec3::ZERO);
        let cmd = strategy.apply(Vec2::new(0.0, 1.0), &mut character);
        assert_eq!(cmd, MotionCommand::None);
        assert_eq!(character.position, Vec3::new(0.0, 0.0, 0.5));
        assert_eq!(character.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_physics_velocity_leaves_position_and_vertical_alone() {
        let strategy = PhysicsVelocity { speed: 0.09, scale: 50.0 };
        let mut character = CharacterState::new(Vec3::new(1.0, 2.0, 3.0));
        character.velocity.y = -7.0;

        let cmd = strategy.apply(Vec2::new(1.0, 0.0), &mut character);
        match cmd {
            MotionCommand::PlanarVelocity(v) => {
                assert!((v.x - 4.5).abs() < 1e-5);
                assert_eq!(v.y, 0.0);
            }
            MotionCommand::None => panic!("expected a velocity command"),
        }
        assert_eq!(character.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(character.velocity.y, -7.0);
    }

    #[test]
    fn test_heading_follows_stick() {
        let strategy = VelocityWithHeading {
            velocity: PhysicsVelocity { speed: 0.09, scale: 50.0 },
        };
        let mut character = CharacterState::default();

        strategy.apply(Vec2::new(0.0, -1.0), &mut character);
        assert!((character.heading.abs() - std::f32::consts::PI).abs() < 1e-5);

        strategy.apply(Vec2::new(-1.0, 0.0), &mut character);
        assert!((character.heading + std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_strategy_for_each_mode() {
        for mode in [
            MotionMode::Kinematic,
            MotionMode::PhysicsVelocity,
            MotionMode::VelocityWithHeading,
        ] {
            let config = MotionConfig {
                mode,
                ..MotionConfig::default()
            };
            assert_eq!(strategy_for(&config).mode(), mode);
        }
    }
}

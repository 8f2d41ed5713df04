//! Player Module
//!
//! Turns joystick direction into capsule motion.
//!
//! # Components
//!
//! - [`CharacterState`] - Position, velocity and heading of the capsule
//! - [`MotionStrategy`] - Kinematic, physics-velocity and velocity-with-heading
//!   integrators behind one trait
//! - [`MovementController`] - Owns the character and runs the chosen strategy
//!   each tick, forwarding velocity commands to a physics body

pub mod character;
pub mod motion_strategy;
pub mod movement_controller;

pub use character::CharacterState;
pub use motion_strategy::{
    KinematicIncrement, MotionCommand, MotionStrategy, PhysicsVelocity, VelocityWithHeading,
    strategy_for,
};
pub use movement_controller::MovementController;

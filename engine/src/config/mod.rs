//! Config Module
//!
//! Centralized configuration for the joystick, motion, camera and physics.

pub mod arena_config;

pub use arena_config::{
    ArenaConfig, CameraConfig, ConfigError, JoystickAnchor, JoystickConfig, MotionConfig,
    MotionMode, PhysicsConfig,
};

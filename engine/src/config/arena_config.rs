//! Arena Configuration
//!
//! Centralized tuning for the joystick, motion integrator, follow camera and
//! the built-in physics world. `Default` matches the values the arena shipped
//! with; a JSON file can override any subset of fields.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Joystick radius in pixels (half of the 100px widget).
pub const DEFAULT_MAX_RADIUS: f32 = 50.0;

/// Kinematic speed per tick, also the base of the physics velocity.
pub const DEFAULT_SPEED: f32 = 0.09;

/// Bridges the joystick's unit range to a usable world speed (0.09 * 50 = 4.5 m/s).
pub const DEFAULT_VELOCITY_SCALE: f32 = 50.0;

/// Camera height above the ground plane.
pub const DEFAULT_CAMERA_HEIGHT: f32 = 20.0;

/// Camera distance behind the character along +Z.
pub const DEFAULT_CAMERA_BACK_OFFSET: f32 = 15.0;

/// Largest physics sub-step in seconds.
pub const DEFAULT_MAX_STEP: f32 = 0.1;

static_assertions::const_assert!(DEFAULT_MAX_RADIUS > 0.0);
static_assertions::const_assert!(DEFAULT_CAMERA_HEIGHT > 0.0);
static_assertions::const_assert!(DEFAULT_MAX_STEP > 0.0);

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur while loading an arena configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON deserialization error.
    JsonError(serde_json::Error),
    /// A value is outside its allowed range.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::JsonError(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}

// ============================================================================
// SECTIONS
// ============================================================================

/// Where the joystick centers itself when a drag starts.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JoystickAnchor {
    /// Re-center at the pointer-down position.
    #[default]
    FollowPointer,
    /// Always center at a fixed screen position.
    Fixed { x: f32, y: f32 },
}

/// Virtual joystick geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoystickConfig {
    /// Radius of the joystick's bounding circle in pixels
    pub max_radius: f32,
    /// Re-centering policy
    pub anchor: JoystickAnchor,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            max_radius: DEFAULT_MAX_RADIUS,
            anchor: JoystickAnchor::FollowPointer,
        }
    }
}

/// Which motion integrator drives the character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionMode {
    /// Direct per-tick position increments, no physics body.
    Kinematic,
    /// Planar velocity commands to a physics body.
    PhysicsVelocity,
    /// Planar velocity commands plus an input-derived heading.
    #[default]
    VelocityWithHeading,
}

impl MotionMode {
    /// Whether this mode needs a physics body.
    pub fn uses_physics(&self) -> bool {
        !matches!(self, MotionMode::Kinematic)
    }
}

/// Motion integrator tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub mode: MotionMode,
    /// Per-tick speed (kinematic) or base speed (physics)
    pub speed: f32,
    /// Multiplier applied on top of `speed` for velocity commands
    pub velocity_scale: f32,
    /// Character spawn position
    pub initial_position: Vec3,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            mode: MotionMode::default(),
            speed: DEFAULT_SPEED,
            velocity_scale: DEFAULT_VELOCITY_SCALE,
            initial_position: Vec3::new(0.0, 1.0, 0.0),
        }
    }
}

/// Follow camera placement and projection.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Fixed world-space Y of the camera
    pub height: f32,
    /// Fixed distance behind the character along +Z
    pub back_offset: f32,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_CAMERA_HEIGHT,
            back_offset: DEFAULT_CAMERA_BACK_OFFSET,
            fov_degrees: 45.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Built-in physics world parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity acceleration (m/s²)
    pub gravity: Vec3,
    /// Y of the static ground plane
    pub ground_height: f32,
    /// Capsule radius (meters)
    pub capsule_radius: f32,
    /// Capsule total height (meters)
    pub capsule_height: f32,
    /// Largest time step integrated at once (seconds)
    pub max_step: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -30.0, 0.0),
            ground_height: -0.5,
            capsule_radius: 0.5,
            capsule_height: 2.0,
            max_step: DEFAULT_MAX_STEP,
        }
    }
}

/// Central configuration for the whole control pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub joystick: JoystickConfig,
    pub motion: MotionConfig,
    pub camera: CameraConfig,
    pub physics: PhysicsConfig,
}

impl ArenaConfig {
    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: ArenaConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is usable.
    ///
    /// A joystick radius of zero is allowed (the joystick saturates), negative
    /// radii are not.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let j = &self.joystick;
        if !j.max_radius.is_finite() || j.max_radius < 0.0 {
            return Err(invalid(format!("joystick.max_radius must be >= 0, got {}", j.max_radius)));
        }
        if let JoystickAnchor::Fixed { x, y } = j.anchor {
            if !x.is_finite() || !y.is_finite() {
                return Err(invalid("joystick.anchor must be finite".into()));
            }
        }

        let m = &self.motion;
        if !m.speed.is_finite() || m.speed < 0.0 {
            return Err(invalid(format!("motion.speed must be >= 0, got {}", m.speed)));
        }
        if !m.velocity_scale.is_finite() || m.velocity_scale < 0.0 {
            return Err(invalid(format!(
                "motion.velocity_scale must be >= 0, got {}",
                m.velocity_scale
            )));
        }
        if !m.initial_position.is_finite() {
            return Err(invalid("motion.initial_position must be finite".into()));
        }

        let c = &self.camera;
        if !c.height.is_finite() || !c.back_offset.is_finite() {
            return Err(invalid("camera offsets must be finite".into()));
        }
        if !(c.fov_degrees > 0.0 && c.fov_degrees < 180.0) {
            return Err(invalid(format!("camera.fov_degrees out of range: {}", c.fov_degrees)));
        }
        if !(c.near > 0.0 && c.near < c.far && c.far.is_finite()) {
            return Err(invalid(format!(
                "camera clip planes must satisfy 0 < near < far, got {} / {}",
                c.near, c.far
            )));
        }

        let p = &self.physics;
        if !p.gravity.is_finite() || !p.ground_height.is_finite() {
            return Err(invalid("physics gravity and ground height must be finite".into()));
        }
        if !(p.capsule_radius > 0.0 && p.capsule_height > 0.0) {
            return Err(invalid("physics capsule dimensions must be positive".into()));
        }
        if !(p.max_step > 0.0 && p.max_step.is_finite()) {
            return Err(invalid(format!("physics.max_step must be positive, got {}", p.max_step)));
        }

        Ok(())
    }
}

fn invalid(msg: String) -> ConfigError {
    ConfigError::Invalid(msg)
}

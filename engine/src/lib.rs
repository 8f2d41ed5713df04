//! Capsule Arena Engine
//!
//! Input-to-motion-and-camera control pipeline for a capsule steered by an
//! on-screen virtual joystick. Rendering, scenery and windowing live outside
//! this library; it only owns state and math.
//!
//! # Modules
//!
//! - [`input`] - Mouse/touch normalization into one pointer stream (+ winit adapter)
//! - [`joystick`] - Virtual joystick state machine and radial clamp
//! - [`player`] - Character state and the interchangeable motion strategies
//! - [`physics`] - Physics backend seam and a minimal built-in body world
//! - [`camera`] - Follow camera
//! - [`config`] - Serde-backed tuning for all of the above
//! - [`session`] - Composition root running one tick at a time
//!
//! # Example
//!
//! ```ignore
//! use capsule_arena_engine::session::ArenaSession;
//! use capsule_arena_engine::config::ArenaConfig;
//!
//! let mut session = ArenaSession::new(ArenaConfig::default());
//!
//! // From the event loop
//! session.on_pointer_down(200.0, 600.0);
//! session.on_pointer_move(230.0, 560.0);
//!
//! // Once per frame
//! let frame = session.tick(delta_time);
//! renderer.set_camera(frame.camera_position, frame.camera_look_at);
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod joystick;
pub mod physics;
pub mod player;
pub mod session;

// Re-export commonly used types at crate level
pub use camera::FollowCamera;
pub use config::{ArenaConfig, MotionMode};
pub use input::{PointerEvent, PointerNormalizer, RawPointerEvent};
pub use joystick::{NormalizedInput, SharedDirection, VirtualJoystick};
pub use player::{CharacterState, MovementController};
pub use session::{ArenaSession, FrameSnapshot};

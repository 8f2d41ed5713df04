//! Joystick Module
//!
//! On-screen virtual joystick: tracks the drag lifecycle, clamps the stick
//! to its bounding circle and emits a normalized direction on every change.
//!
//! # Example
//!
//! ```rust,ignore
//! use capsule_arena_engine::joystick::VirtualJoystick;
//!
//! let mut joystick = VirtualJoystick::default();
//! let direction = joystick.shared_direction();
//! joystick.on_direction_change(|input| log::debug!("stick {:?}", input.direction));
//!
//! joystick.on_pointer_down(200.0, 600.0);
//! joystick.on_pointer_move(250.0, 600.0);
//! assert_eq!(direction.read(), glam::Vec2::new(1.0, 0.0));
//! ```

pub mod state;
pub mod virtual_joystick;

pub use state::{
    JoystickState, NormalizedInput, clamp_offset, is_degenerate_radius, normalize_offset,
};
pub use virtual_joystick::{DirectionListener, JoystickPhase, SharedDirection, VirtualJoystick};

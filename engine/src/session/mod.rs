//! Session Module
//!
//! Composition root for the control pipeline:
//!
//! ```text
//! raw pointer ─► PointerNormalizer ─► VirtualJoystick ─► SharedDirection
//!                                                             │ (read once per tick)
//!                              FollowCamera ◄─ MovementController ◄─► PhysicsBackend
//! ```

pub mod arena_session;

pub use arena_session::{ArenaSession, FrameSnapshot};

//! Input Module
//!
//! Provides platform-agnostic pointer handling for mouse and touch.
//! Raw device events are folded into a single stream of
//! [`PointerEvent`]s (`Down` / `Move` / `Up`) by the [`PointerNormalizer`].
//!
//! # Example
//!
//! ```rust,ignore
//! use capsule_arena_engine::input::{PointerNormalizer, RawPointerEvent, Position, MouseButton};
//!
//! let mut normalizer = PointerNormalizer::new();
//!
//! normalizer.normalize(RawPointerEvent::CursorMoved(Position::new(100.0, 50.0)));
//! if let Some(event) = normalizer.normalize(RawPointerEvent::MousePressed(MouseButton::Left)) {
//!     joystick.handle_pointer(event);
//! }
//! ```

pub mod pointer;
pub mod winit_adapter;

// Re-export commonly used types at module level
pub use pointer::{
    MouseButton, PointerEvent, PointerNormalizer, PointerPhase, Position, RawPointerEvent,
    TouchPhase,
};
pub use winit_adapter::raw_pointer_event;

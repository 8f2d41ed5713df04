//! Camera Module
//!
//! Provides the follow camera for the player capsule.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod controller;

pub use controller::{CameraState, FollowCamera};

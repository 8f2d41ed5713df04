//! Physics module
//!
//! The control pipeline treats rigid-body simulation as an external
//! collaborator. This module defines the seam ([`PhysicsBackend`]) and ships
//! a small built-in world so the physics-driven motion modes run standalone.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//!
//! # Submodules
//!
//! - [`backend`] - Body handles, snapshots, position feeds and the backend trait
//! - [`simple_world`] - Gravity + ground plane world for fixed-rotation capsules

pub mod backend;
pub mod simple_world;

pub use backend::{BodyId, BodySnapshot, PhysicsBackend, PositionFeed};
pub use simple_world::{CapsuleBody, SimpleBodyWorld};

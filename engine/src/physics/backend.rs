//! Physics backend interface
//!
//! The motion integrator never owns a rigid body. It issues velocity
//! commands through [`PhysicsBackend`] and receives authoritative positions
//! through a [`PositionFeed`] the backend pushes into after each step.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec3;

/// Handle to a body inside a physics backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// Authoritative body state published by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BodySnapshot {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// Receiving end of a position subscription.
///
/// The backend writes the newest snapshot; readers see only the latest one.
#[derive(Debug, Clone, Default)]
pub struct PositionFeed(Rc<Cell<Option<BodySnapshot>>>);

impl PositionFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest pushed snapshot, if the backend has published one.
    pub fn latest(&self) -> Option<BodySnapshot> {
        self.0.get()
    }

    /// Publish a snapshot (backend side).
    pub fn push(&self, snapshot: BodySnapshot) {
        self.0.set(Some(snapshot));
    }
}

/// Commands a rigid-body engine must accept from the control pipeline.
pub trait PhysicsBackend {
    /// Overwrite the full velocity of a body.
    fn set_velocity(&mut self, body: BodyId, velocity: Vec3);

    /// Overwrite the X/Z velocity of a body, leaving Y (gravity response) as
    /// the engine computed it.
    fn set_planar_velocity(&mut self, body: BodyId, vx: f32, vz: f32);

    /// Subscribe to a body's position. The feed is filled immediately with
    /// the current state when the body exists, then after every step.
    fn subscribe_position(&mut self, body: BodyId) -> PositionFeed;

    /// Advance the simulation by `dt` seconds and publish positions.
    fn step(&mut self, dt: f32);
}

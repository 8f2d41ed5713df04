//! Minimal rigid-body world
//!
//! Just enough physics to drive a fixed-rotation capsule: gravity, a static
//! ground plane and semi-implicit Euler integration. No body-body collision.
//!
//! # Example
//!
//! ```ignore
//! use capsule_arena_engine::physics::{PhysicsBackend, SimpleBodyWorld};
//! use capsule_arena_engine::config::PhysicsConfig;
//! use glam::Vec3;
//!
//! let mut world = SimpleBodyWorld::new(PhysicsConfig::default());
//! let body = world.add_capsule(Vec3::new(0.0, 1.0, 0.0));
//! let feed = world.subscribe_position(body);
//!
//! world.set_planar_velocity(body, 4.5, 0.0);
//! world.step(1.0 / 60.0);
//! let snapshot = feed.latest().unwrap();
//! ```

use glam::Vec3;

use super::backend::{BodyId, BodySnapshot, PhysicsBackend, PositionFeed};
use crate::config::PhysicsConfig;
use crate::config::arena_config::DEFAULT_MAX_STEP;

/// Sub-steps integrated per `step` call. Frame time beyond
/// `MAX_SUBSTEPS * max_step` is dropped.
pub const MAX_SUBSTEPS: u32 = 8;

/// A fixed-rotation capsule body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleBody {
    /// Center of the capsule in world space (meters)
    pub position: Vec3,
    /// Linear velocity (meters/second)
    pub velocity: Vec3,
    /// Capsule radius (meters)
    pub radius: f32,
    /// Half of the total capsule height (meters)
    pub half_height: f32,
    /// Resting on the ground plane after the last step
    pub grounded: bool,
}

impl CapsuleBody {
    fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            position: self.position,
            velocity: self.velocity,
        }
    }

    /// Integrate one sub-step against gravity and the ground plane.
    fn integrate(&mut self, gravity: Vec3, ground_height: f32, dt: f32) {
        // Semi-implicit Euler: velocity first, then position
        self.velocity += gravity * dt;
        self.position += self.velocity * dt;

        let rest_y = ground_height + self.half_height;
        if self.position.y <= rest_y {
            self.position.y = rest_y;
            if self.velocity.y < 0.0 {
                self.velocity.y = 0.0;
            }
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }
}

/// Gravity + ground-plane world implementing [`PhysicsBackend`].
#[derive(Debug, Clone)]
pub struct SimpleBodyWorld {
    config: PhysicsConfig,
    bodies: Vec<CapsuleBody>,
    feeds: Vec<(BodyId, PositionFeed)>,
}

impl SimpleBodyWorld {
    /// Create an empty world. A non-positive or non-finite `max_step` falls
    /// back to the default.
    pub fn new(mut config: PhysicsConfig) -> Self {
        if !(config.max_step > 0.0 && config.max_step.is_finite()) {
            log::warn!(
                "physics max_step {} is unusable; using {DEFAULT_MAX_STEP}",
                config.max_step
            );
            config.max_step = DEFAULT_MAX_STEP;
        }
        Self {
            config,
            bodies: Vec::new(),
            feeds: Vec::new(),
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Spawn a capsule using the configured dimensions.
    pub fn add_capsule(&mut self, position: Vec3) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(CapsuleBody {
            position,
            velocity: Vec3::ZERO,
            radius: self.config.capsule_radius,
            half_height: self.config.capsule_height * 0.5,
            grounded: false,
        });
        log::debug!("spawned capsule {id:?} at {position}");
        id
    }

    pub fn body(&self, id: BodyId) -> Option<&CapsuleBody> {
        self.bodies.get(id.0 as usize)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    fn body_mut(&mut self, id: BodyId) -> Option<&mut CapsuleBody> {
        let body = self.bodies.get_mut(id.0 as usize);
        if body.is_none() {
            log::warn!("physics command for unknown body {id:?}");
        }
        body
    }

    fn publish(&self) {
        for (id, feed) in &self.feeds {
            if let Some(body) = self.bodies.get(id.0 as usize) {
                feed.push(body.snapshot());
            }
        }
    }
}

impl PhysicsBackend for SimpleBodyWorld {
    fn set_velocity(&mut self, body: BodyId, velocity: Vec3) {
        if let Some(body) = self.body_mut(body) {
            body.velocity = velocity;
        }
    }

    fn set_planar_velocity(&mut self, body: BodyId, vx: f32, vz: f32) {
        if let Some(body) = self.body_mut(body) {
            body.velocity.x = vx;
            body.velocity.z = vz;
        }
    }

    fn subscribe_position(&mut self, body: BodyId) -> PositionFeed {
        let feed = PositionFeed::new();
        if let Some(b) = self.bodies.get(body.0 as usize) {
            feed.push(b.snapshot());
        }
        self.feeds.push((body, feed.clone()));
        feed
    }

    fn step(&mut self, dt: f32) {
        if !(dt > 0.0) || !dt.is_finite() {
            return;
        }
        let gravity = self.config.gravity;
        let ground = self.config.ground_height;
        let max_step = self.config.max_step;

        // Large frames are split so a hitch cannot tunnel through the ground
        let wanted = (dt / max_step).ceil();
        let substeps = if wanted > MAX_SUBSTEPS as f32 {
            log::warn!(
                "physics step of {dt}s exceeds {MAX_SUBSTEPS} sub-steps; simulating {}s",
                max_step * MAX_SUBSTEPS as f32
            );
            MAX_SUBSTEPS
        } else {
            (wanted as u32).max(1)
        };
        let h = dt.min(max_step * substeps as f32) / substeps as f32;

        for _ in 0..substeps {
            for body in &mut self.bodies {
                body.integrate(gravity, ground, h);
            }
        }

        self.publish();
    }
}

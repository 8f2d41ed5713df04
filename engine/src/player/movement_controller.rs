//! Player Movement Controller
//!
//! Owns the [`CharacterState`] and runs the selected [`MotionStrategy`] once
//! per tick.
//!
//! # Regimes
//!
//! - **Kinematic**: the controller writes the position itself.
//! - **Physics** (velocity modes): the controller is linked to a body in a
//!   [`PhysicsBackend`]. It only issues planar velocity commands; position and
//!   vertical velocity come back through the body's [`PositionFeed`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use capsule_arena_engine::player::MovementController;
//! use capsule_arena_engine::config::MotionConfig;
//!
//! let mut controller = MovementController::new(&MotionConfig::default());
//! controller.attach_body(&mut world, body);
//!
//! // Each frame:
//! controller.update(direction.read(), Some(&mut world));
//! world.step(dt);
//! controller.sync_from_physics();
//! ```

use glam::{Vec2, Vec3};

use super::character::CharacterState;
use super::motion_strategy::{MotionCommand, MotionStrategy, strategy_for};
use crate::config::{MotionConfig, MotionMode};
use crate::physics::{BodyId, PhysicsBackend, PositionFeed};

/// Link between the controller and the physics body it steers.
#[derive(Debug, Clone)]
struct BodyLink {
    id: BodyId,
    feed: PositionFeed,
}

/// Character motion driven by a pluggable strategy.
pub struct MovementController {
    strategy: Box<dyn MotionStrategy>,
    character: CharacterState,
    body: Option<BodyLink>,
    /// Set once a physics command had nowhere to go, to log it only once
    warned_unlinked: bool,
}

impl std::fmt::Debug for MovementController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovementController")
            .field("mode", &self.strategy.mode())
            .field("character", &self.character)
            .field("body", &self.body.as_ref().map(|b| b.id))
            .finish()
    }
}

impl MovementController {
    /// Create a controller for the configured mode, spawned at
    /// `config.initial_position`.
    pub fn new(config: &MotionConfig) -> Self {
        Self::with_strategy(strategy_for(config), config.initial_position)
    }

    /// Create a controller with an explicit strategy.
    pub fn with_strategy(strategy: Box<dyn MotionStrategy>, initial_position: Vec3) -> Self {
        Self {
            strategy,
            character: CharacterState::new(initial_position),
            body: None,
            warned_unlinked: false,
        }
    }

    /// Steer `body` from now on and subscribe to its position.
    pub fn attach_body(&mut self, physics: &mut dyn PhysicsBackend, body: BodyId) {
        let feed = physics.subscribe_position(body);
        self.body = Some(BodyLink { id: body, feed });
        self.sync_from_physics();
    }

    /// Body this controller steers, if any.
    pub fn body(&self) -> Option<BodyId> {
        self.body.as_ref().map(|b| b.id)
    }

    pub fn mode(&self) -> MotionMode {
        self.strategy.mode()
    }

    pub fn character(&self) -> &CharacterState {
        &self.character
    }

    /// Copy the latest pushed body snapshot into the character.
    ///
    /// Heading is owned by the strategy and never overwritten here.
    pub fn sync_from_physics(&mut self) {
        let Some(link) = &self.body else {
            return;
        };
        if let Some(snapshot) = link.feed.latest() {
            self.character.position = snapshot.position;
            self.character.velocity = snapshot.velocity;
        }
    }

    /// Run one tick of the strategy.
    ///
    /// Pulls the latest pushed position first, then applies `direction` and
    /// forwards any velocity command to `physics`.
    pub fn update(&mut self, direction: Vec2, physics: Option<&mut dyn PhysicsBackend>) {
        self.sync_from_physics();

        let command = self.strategy.apply(direction, &mut self.character);
        if let MotionCommand::PlanarVelocity(v) = command {
            match (&self.body, physics) {
                (Some(link), Some(physics)) => physics.set_planar_velocity(link.id, v.x, v.y),
                _ => {
                    if !self.warned_unlinked {
                        log::warn!(
                            "{:?} strategy has no physics body; velocity commands are dropped",
                            self.strategy.mode()
                        );
                        self.warned_unlinked = true;
                    }
                }
            }
        }
    }
}

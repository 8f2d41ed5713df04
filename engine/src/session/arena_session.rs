//! Arena session: wires input, joystick, motion, physics and camera together.
//!
//! Everything runs on one thread. Pointer events are applied the moment they
//! arrive; [`ArenaSession::tick`] then reads the latest joystick direction,
//! runs the motion strategy, steps physics and moves the camera, in that order
//! and without interruption.

use glam::{Vec2, Vec3};
use serde::Serialize;

use crate::camera::{CameraState, FollowCamera};
use crate::config::ArenaConfig;
use crate::input::{PointerEvent, PointerNormalizer, RawPointerEvent};
use crate::joystick::{NormalizedInput, SharedDirection, VirtualJoystick};
use crate::physics::{BodyId, PhysicsBackend, SimpleBodyWorld};
use crate::player::{CharacterState, MovementController};

/// State of the pipeline after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub direction: Vec2,
    pub position: Vec3,
    pub velocity: Vec3,
    pub heading: f32,
    pub camera_position: Vec3,
    pub camera_look_at: Vec3,
}

/// One play session of the capsule arena.
#[derive(Debug)]
pub struct ArenaSession<P: PhysicsBackend = SimpleBodyWorld> {
    config: ArenaConfig,
    normalizer: PointerNormalizer,
    joystick: VirtualJoystick,
    direction: SharedDirection,
    controller: MovementController,
    physics: Option<P>,
    camera: FollowCamera,
    tick_count: u64,
}

impl ArenaSession<SimpleBodyWorld> {
    /// Build a session. Physics modes get a [`SimpleBodyWorld`] with one capsule
    /// at the configured spawn point; kinematic mode runs without physics.
    pub fn new(config: ArenaConfig) -> Self {
        if config.motion.mode.uses_physics() {
            let mut world = SimpleBodyWorld::new(config.physics);
            let body = world.add_capsule(config.motion.initial_position);
            Self::with_backend(config, world, body)
        } else {
            Self::assemble(config, None)
        }
    }
}

impl<P: PhysicsBackend> ArenaSession<P> {
    /// Build a session steering `body` inside an existing physics backend.
    ///
    /// Kinematic mode owns the character position, so the body is left alone
    /// and the backend is only stepped.
    pub fn with_backend(config: ArenaConfig, mut backend: P, body: BodyId) -> Self {
        let mut session = Self::assemble(config, None);
        if session.config.motion.mode.uses_physics() {
            session.controller.attach_body(&mut backend, body);
        } else {
            log::info!("kinematic mode: body {body:?} is not steered");
        }
        session.physics = Some(backend);
        session.camera.follow(session.controller.character());
        session
    }

    fn assemble(config: ArenaConfig, physics: Option<P>) -> Self {
        let joystick = VirtualJoystick::new(config.joystick);
        let direction = joystick.shared_direction();
        let controller = MovementController::new(&config.motion);
        let mut camera = FollowCamera::new(&config.camera);
        camera.follow(controller.character());
        log::info!(
            "arena session: {:?} mode, joystick radius {}, anchor {:?}",
            config.motion.mode,
            config.joystick.max_radius,
            config.joystick.anchor
        );
        Self {
            config,
            normalizer: PointerNormalizer::new(),
            joystick,
            direction,
            controller,
            physics,
            camera,
            tick_count: 0,
        }
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Feed a device-specific pointer event.
    pub fn handle_raw(&mut self, raw: RawPointerEvent) -> Option<NormalizedInput> {
        let event = self.normalizer.normalize(raw)?;
        self.handle_pointer(event)
    }

    /// Feed a normalized pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<NormalizedInput> {
        self.joystick.handle_pointer(event)
    }

    pub fn on_pointer_down(&mut self, x: f32, y: f32) -> NormalizedInput {
        self.joystick.on_pointer_down(x, y)
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Option<NormalizedInput> {
        self.joystick.on_pointer_move(x, y)
    }

    pub fn on_pointer_up(&mut self) -> Option<NormalizedInput> {
        self.joystick.on_pointer_up()
    }

    /// Register a callback for every joystick direction change.
    pub fn on_direction_change(&mut self, listener: impl FnMut(NormalizedInput) + 'static) {
        self.joystick.on_direction_change(listener);
    }

    // ------------------------------------------------------------------
    // Simulation
    // ------------------------------------------------------------------

    /// Advance one frame.
    ///
    /// Kinematic motion is per tick and ignores `dt`; physics modes step the
    /// backend by `dt`.
    pub fn tick(&mut self, dt: f32) -> FrameSnapshot {
        let direction = self.direction.read();

        match self.physics.as_mut() {
            Some(physics) => {
                self.controller
                    .update(direction, Some(&mut *physics as &mut dyn PhysicsBackend));
                physics.step(dt);
                self.controller.sync_from_physics();
            }
            None => self.controller.update(direction, None),
        }

        self.camera.follow(self.controller.character());
        self.tick_count += 1;
        self.snapshot()
    }

    /// Current state without advancing.
    pub fn snapshot(&self) -> FrameSnapshot {
        let character = self.controller.character();
        let camera = self.camera.state();
        FrameSnapshot {
            tick: self.tick_count,
            direction: self.direction.read(),
            position: character.position,
            velocity: character.velocity,
            heading: character.heading,
            camera_position: camera.position,
            camera_look_at: camera.look_at,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn joystick(&self) -> &VirtualJoystick {
        &self.joystick
    }

    pub fn direction(&self) -> Vec2 {
        self.direction.read()
    }

    pub fn character(&self) -> &CharacterState {
        self.controller.character()
    }

    pub fn controller(&self) -> &MovementController {
        &self.controller
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    pub fn camera_state(&self) -> CameraState {
        self.camera.state()
    }

    pub fn camera_position(&self) -> Vec3 {
        self.camera.get_position()
    }

    pub fn camera_look_at(&self) -> Vec3 {
        self.camera.get_look_at()
    }

    pub fn physics(&self) -> Option<&P> {
        self.physics.as_ref()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

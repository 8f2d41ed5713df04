//! Virtual joystick state machine
//!
//! Two phases: `Hidden` (initial, between gestures) and `Dragging`.
//!
//! | from     | event | to       | effect                                     |
//! |----------|-------|----------|--------------------------------------------|
//! | Hidden   | down  | Dragging | set origin, show, offset = 0, emit (0,0)   |
//! | Dragging | down  | Dragging | restart gesture at the new origin          |
//! | Dragging | move  | Dragging | clamp offset, emit offset / max_radius     |
//! | Dragging | up    | Hidden   | offset = 0, hide, emit (0,0)               |
//! | Hidden   | move  | Hidden   | ignored                                    |
//! | Hidden   | up    | Hidden   | ignored (release is idempotent)            |
//!
//! Every accepted transition emits synchronously to all listeners and to the
//! [`SharedDirection`] cell. Nothing is buffered: readers only see the latest
//! value.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

use super::state::{JoystickState, NormalizedInput, clamp_offset, normalize_offset};
use crate::config::{JoystickAnchor, JoystickConfig};
use crate::input::{PointerEvent, Position};

/// Drag lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoystickPhase {
    Hidden,
    Dragging,
}

/// Latest joystick direction, readable from anywhere on the same thread.
///
/// Clones share one cell. Reading does not consume the value; the same
/// direction is seen by every tick until the joystick changes it.
#[derive(Debug, Clone, Default)]
pub struct SharedDirection(Rc<Cell<Vec2>>);

impl SharedDirection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current direction.
    pub fn read(&self) -> Vec2 {
        self.0.get()
    }

    pub(crate) fn write(&self, direction: Vec2) {
        self.0.set(direction);
    }
}

/// Callback invoked on every direction change.
pub type DirectionListener = Box<dyn FnMut(NormalizedInput)>;

/// On-screen joystick driven by normalized pointer events.
pub struct VirtualJoystick {
    state: JoystickState,
    anchor: JoystickAnchor,
    last_emitted: NormalizedInput,
    shared: SharedDirection,
    listeners: Vec<DirectionListener>,
}

impl std::fmt::Debug for VirtualJoystick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirtualJoystick")
            .field("state", &self.state)
            .field("anchor", &self.anchor)
            .field("last_emitted", &self.last_emitted)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for VirtualJoystick {
    fn default() -> Self {
        Self::new(JoystickConfig::default())
    }
}

impl VirtualJoystick {
    /// Create a hidden joystick.
    pub fn new(config: JoystickConfig) -> Self {
        let state = JoystickState::new(config.max_radius);
        if state.is_degenerate() {
            log::warn!(
                "joystick radius {} is degenerate; any deflection saturates",
                config.max_radius
            );
        }
        Self {
            state,
            anchor: config.anchor,
            last_emitted: NormalizedInput::ZERO,
            shared: SharedDirection::new(),
            listeners: Vec::new(),
        }
    }

    /// Register a callback for every emitted direction.
    pub fn on_direction_change(&mut self, listener: impl FnMut(NormalizedInput) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Handle to the shared "current direction" value.
    pub fn shared_direction(&self) -> SharedDirection {
        self.shared.clone()
    }

    pub fn state(&self) -> &JoystickState {
        &self.state
    }

    pub fn anchor(&self) -> JoystickAnchor {
        self.anchor
    }

    pub fn phase(&self) -> JoystickPhase {
        if self.state.dragging {
            JoystickPhase::Dragging
        } else {
            JoystickPhase::Hidden
        }
    }

    /// Most recently emitted direction.
    pub fn direction(&self) -> NormalizedInput {
        self.last_emitted
    }

    /// Feed one normalized pointer event.
    ///
    /// Returns the emitted direction when the event caused a transition.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<NormalizedInput> {
        match event {
            PointerEvent::Down(pos) => Some(self.on_pointer_down(pos.x, pos.y)),
            PointerEvent::Move(pos) => self.on_pointer_move(pos.x, pos.y),
            PointerEvent::Up => self.on_pointer_up(),
        }
    }

    /// Start (or restart) a drag.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) -> NormalizedInput {
        let origin = match self.anchor {
            JoystickAnchor::FollowPointer => Position::new(x, y),
            JoystickAnchor::Fixed { x, y } => Position::new(x, y),
        };
        self.state.origin = Some(origin);
        self.state.dragging = true;
        self.state.visible = true;
        self.state.offset = Vec2::ZERO;
        log::debug!("joystick down at ({x}, {y}), origin {origin:?}");
        self.emit(NormalizedInput::ZERO)
    }

    /// Move the stick. Ignored unless dragging.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Option<NormalizedInput> {
        if !self.state.dragging {
            return None;
        }
        let Some(origin) = self.state.origin else {
            log::warn!("joystick dragging without an origin; treating as hidden");
            self.state.release();
            return None;
        };

        let raw = Vec2::new(x, y) - origin.to_vec2();
        let clamped = clamp_offset(raw, self.state.max_radius);
        self.state.offset = clamped;
        let direction = normalize_offset(raw, clamped, self.state.max_radius);
        Some(self.emit(NormalizedInput::new(direction)))
    }

    /// Release the stick. A release without an active drag does nothing.
    pub fn on_pointer_up(&mut self) -> Option<NormalizedInput> {
        if !self.state.dragging {
            return None;
        }
        self.state.release();
        log::debug!("joystick released");
        Some(self.emit(NormalizedInput::ZERO))
    }

    fn emit(&mut self, input: NormalizedInput) -> NormalizedInput {
        self.last_emitted = input;
        self.shared.write(input.direction);
        for listener in &mut self.listeners {
            listener(input);
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_starts_hidden() {
        let joystick = VirtualJoystick::default();
        assert_eq!(joystick.phase(), JoystickPhase::Hidden);
        assert!(!joystick.state().is_visible());
        assert!(joystick.state().origin().is_none());
        assert!(joystick.direction().is_zero());
    }

    #[test]
    fn test_down_recenters_at_pointer() {
        let mut joystick = VirtualJoystick::default();
        let emitted = joystick.on_pointer_down(200.0, 300.0);
        assert!(emitted.is_zero());
        assert_eq!(joystick.phase(), JoystickPhase::Dragging);
        assert_eq!(joystick.state().origin(), Some(Position::new(200.0, 300.0)));
        assert!(joystick.state().is_visible());
    }

    #[test]
    fn test_fixed_anchor_ignores_down_position() {
        let mut joystick = VirtualJoystick::new(JoystickConfig {
            max_radius: 50.0,
            anchor: JoystickAnchor::Fixed { x: 400.0, y: 700.0 },
        });
        joystick.on_pointer_down(10.0, 10.0);
        assert_eq!(joystick.state().origin(), Some(Position::new(400.0, 700.0)));

        let out = joystick.on_pointer_move(425.0, 700.0).unwrap();
        assert_eq!(out.direction, Vec2::new(0.5, 0.0));
    }

    #[test]
    fn test_move_while_hidden_ignored() {
        let mut joystick = VirtualJoystick::default();
        assert!(joystick.on_pointer_move(10.0, 10.0).is_none());
        assert_eq!(joystick.state().offset(), Vec2::ZERO);
    }

    #[test]
    fn test_release_without_drag_is_noop() {
        let mut joystick = VirtualJoystick::default();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        joystick.on_direction_change(move |_| counter.set(counter.get() + 1));

        assert!(joystick.on_pointer_up().is_none());
        assert_eq!(calls.get(), 0);
        assert!(joystick.direction().is_zero());
    }

    #[test]
    fn test_listeners_see_every_transition() {
        let mut joystick = VirtualJoystick::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        joystick.on_direction_change(move |input| sink.borrow_mut().push(input.direction));

        joystick.on_pointer_down(0.0, 0.0);
        joystick.on_pointer_move(25.0, 0.0);
        joystick.on_pointer_move(0.0, -50.0);
        joystick.on_pointer_up();

        assert_eq!(
            *seen.borrow(),
            vec![
                Vec2::ZERO,
                Vec2::new(0.5, 0.0),
                Vec2::new(0.0, -1.0),
                Vec2::ZERO,
            ]
        );
    }

    #[test]
    fn test_shared_direction_tracks_latest() {
        let mut joystick = VirtualJoystick::default();
        let shared = joystick.shared_direction();
        joystick.on_pointer_down(100.0, 100.0);
        joystick.on_pointer_move(100.0, 125.0);
        assert_eq!(shared.read(), Vec2::new(0.0, 0.5));
        // Reading does not consume
        assert_eq!(shared.read(), Vec2::new(0.0, 0.5));
        joystick.on_pointer_up();
        assert_eq!(shared.read(), Vec2::ZERO);
    }

    #[test]
    fn test_missing_origin_treated_as_hidden() {
        let mut joystick = VirtualJoystick::default();
        joystick.state.dragging = true;
        joystick.state.visible = true;
        joystick.state.origin = None;

        assert!(joystick.on_pointer_move(10.0, 10.0).is_none());
        assert_eq!(joystick.phase(), JoystickPhase::Hidden);
        assert!(!joystick.state().is_visible());
    }

    #[test]
    fn test_down_while_dragging_restarts() {
        let mut joystick = VirtualJoystick::default();
        joystick.on_pointer_down(0.0, 0.0);
        joystick.on_pointer_move(40.0, 0.0);
        let out = joystick.on_pointer_down(300.0, 300.0);
        assert!(out.is_zero());
        assert_eq!(joystick.state().offset(), Vec2::ZERO);
        assert_eq!(joystick.state().origin(), Some(Position::new(300.0, 300.0)));
    }

    #[test]
    fn test_handle_pointer_dispatch() {
        let mut joystick = VirtualJoystick::default();
        assert!(joystick.handle_pointer(PointerEvent::Up).is_none());
        assert!(joystick.handle_pointer(PointerEvent::Down(Position::new(5.0, 5.0))).is_some());
        let out = joystick
            .handle_pointer(PointerEvent::Move(Position::new(5.0, 55.0)))
            .unwrap();
        assert_eq!(out.direction, Vec2::new(0.0, 1.0));
    }
}

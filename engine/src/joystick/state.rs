//! Joystick state and the radial clamp.

use glam::Vec2;

use crate::input::Position;

/// Snapshot of the on-screen joystick.
///
/// Invariants:
/// - `|offset| <= max_radius` (for `max_radius > 0`; a degenerate radius keeps
///   `offset` at zero)
/// - `!dragging` implies `offset == Vec2::ZERO`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoystickState {
    /// Screen position of the joystick center, set when a drag starts
    pub(crate) origin: Option<Position>,
    /// Stick displacement from `origin` in pixels
    pub(crate) offset: Vec2,
    pub(crate) dragging: bool,
    pub(crate) visible: bool,
    /// Radius of the joystick's bounding circle in pixels
    pub(crate) max_radius: f32,
}

impl JoystickState {
    /// Create a hidden joystick with the given radius.
    pub fn new(max_radius: f32) -> Self {
        Self {
            origin: None,
            offset: Vec2::ZERO,
            dragging: false,
            visible: false,
            max_radius,
        }
    }

    pub fn origin(&self) -> Option<Position> {
        self.origin
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    /// Screen position of the knob (origin + offset), while visible.
    pub fn knob_position(&self) -> Option<Position> {
        if !self.visible {
            return None;
        }
        self.origin
            .map(|o| Position::new(o.x + self.offset.x, o.y + self.offset.y))
    }

    /// Return to the hidden, centered state. The origin is kept for reference.
    pub(crate) fn release(&mut self) {
        self.offset = Vec2::ZERO;
        self.dragging = false;
        self.visible = false;
    }

    /// A radius that cannot be divided by.
    pub fn is_degenerate(&self) -> bool {
        is_degenerate_radius(self.max_radius)
    }
}

/// Joystick output: offset divided by the joystick radius.
///
/// Each component lies in `[-1, 1]` and the length never exceeds 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedInput {
    pub direction: Vec2,
}

impl NormalizedInput {
    pub const ZERO: Self = Self {
        direction: Vec2::ZERO,
    };

    pub fn new(direction: Vec2) -> Self {
        Self { direction }
    }

    /// No stick deflection.
    pub fn is_zero(&self) -> bool {
        self.direction == Vec2::ZERO
    }
}

/// Zero, negative, NaN or infinite radius.
pub fn is_degenerate_radius(max_radius: f32) -> bool {
    !(max_radius > 0.0) || !max_radius.is_finite()
}

/// Constrain `raw` to `max_radius`, preserving its angle.
///
/// Offsets inside the circle are returned unchanged. A non-positive or
/// non-finite radius collapses every offset to zero.
pub fn clamp_offset(raw: Vec2, max_radius: f32) -> Vec2 {
    if is_degenerate_radius(max_radius) {
        return Vec2::ZERO;
    }
    if raw.length() > max_radius {
        let angle = raw.y.atan2(raw.x);
        Vec2::new(angle.cos(), angle.sin()) * max_radius
    } else {
        raw
    }
}

/// Direction for a clamped offset.
///
/// Divides by the constant radius, never by the offset's own length. With a
/// degenerate radius the stick is treated as fully deflected along the raw
/// angle (zero when there is no raw offset).
pub fn normalize_offset(raw: Vec2, clamped: Vec2, max_radius: f32) -> Vec2 {
    if is_degenerate_radius(max_radius) {
        return raw.normalize_or_zero();
    }
    clamped / max_radius
}

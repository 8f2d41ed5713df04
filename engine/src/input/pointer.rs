//! Pointer Input Module
//!
//! Unifies mouse and touch input into a single stream of pointer events.
//! Decoupled from winit: raw events use generic types and the
//! [`winit_adapter`](super::winit_adapter) module does the translation.

/// Mouse button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Additional mouse buttons (button 4, 5, etc.)
    Other(u16),
}

/// 2D screen position in pixels (origin top-left, Y down).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Create a new position.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert to a glam vector.
    pub fn to_vec2(&self) -> glam::Vec2 {
        glam::Vec2::new(self.x, self.y)
    }

    /// Both coordinates are finite (no NaN / infinity from a broken source).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Lifecycle phase of a single touch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

/// Device-specific pointer input before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawPointerEvent {
    /// A mouse button went down at the last known cursor position.
    MousePressed(MouseButton),
    /// A mouse button was released.
    MouseReleased(MouseButton),
    /// The cursor moved to a new position.
    CursorMoved(Position),
    /// The cursor left the window / page.
    CursorLeft,
    /// A touch point changed.
    Touch {
        id: u64,
        phase: TouchPhase,
        position: Position,
    },
}

/// Kind of a normalized pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// Device-agnostic pointer event consumed by the joystick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Position),
    Move(Position),
    Up,
}

impl PointerEvent {
    /// The event kind.
    pub fn phase(&self) -> PointerPhase {
        match self {
            PointerEvent::Down(_) => PointerPhase::Down,
            PointerEvent::Move(_) => PointerPhase::Move,
            PointerEvent::Up => PointerPhase::Up,
        }
    }

    /// Screen coordinate carried by the event (`None` for `Up`).
    pub fn position(&self) -> Option<Position> {
        match self {
            PointerEvent::Down(pos) | PointerEvent::Move(pos) => Some(*pos),
            PointerEvent::Up => None,
        }
    }
}

/// Folds mouse and touch sources into one pointer stream.
///
/// - Mouse presses report the last known cursor position; presses before any
///   cursor motion are dropped.
/// - Only the first active touch is tracked. Other touch ids are ignored until
///   the primary touch ends.
/// - The cursor leaving the window counts as a release.
#[derive(Debug, Clone, Default)]
pub struct PointerNormalizer {
    /// Last known cursor position in pixels.
    cursor: Option<Position>,
    /// Id of the touch currently driving the pointer.
    primary_touch: Option<u64>,
}

impl PointerNormalizer {
    /// Create a normalizer with no known cursor and no active touch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position, if the cursor has moved inside the window.
    pub fn cursor(&self) -> Option<Position> {
        self.cursor
    }

    /// Id of the primary touch, if one is active.
    pub fn primary_touch(&self) -> Option<u64> {
        self.primary_touch
    }

    /// Translate one raw event. Returns `None` when the event is ignored.
    pub fn normalize(&mut self, raw: RawPointerEvent) -> Option<PointerEvent> {
        match raw {
            RawPointerEvent::MousePressed(_) => self.cursor.map(PointerEvent::Down),
            RawPointerEvent::MouseReleased(_) => Some(PointerEvent::Up),
            RawPointerEvent::CursorMoved(position) => {
                if !position.is_finite() {
                    log::warn!("dropping cursor move with non-finite position {position:?}");
                    return None;
                }
                self.cursor = Some(position);
                Some(PointerEvent::Move(position))
            }
            RawPointerEvent::CursorLeft => {
                self.cursor = None;
                Some(PointerEvent::Up)
            }
            RawPointerEvent::Touch { id, phase, position } => self.normalize_touch(id, phase, position),
        }
    }

    fn normalize_touch(&mut self, id: u64, phase: TouchPhase, position: Position) -> Option<PointerEvent> {
        match phase {
            TouchPhase::Started => {
                if self.primary_touch.is_some() || !position.is_finite() {
                    return None;
                }
                self.primary_touch = Some(id);
                Some(PointerEvent::Down(position))
            }
            TouchPhase::Moved => {
                if self.primary_touch != Some(id) || !position.is_finite() {
                    return None;
                }
                Some(PointerEvent::Move(position))
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.primary_touch != Some(id) {
                    return None;
                }
                self.primary_touch = None;
                Some(PointerEvent::Up)
            }
        }
    }

    /// Forget the cursor and any active touch.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(id: u64, phase: TouchPhase, x: f32, y: f32) -> RawPointerEvent {
        RawPointerEvent::Touch {
            id,
            phase,
            position: Position::new(x, y),
        }
    }

    #[test]
    fn test_mouse_press_uses_last_cursor() {
        let mut normalizer = PointerNormalizer::new();
        assert_eq!(
            normalizer.normalize(RawPointerEvent::CursorMoved(Position::new(120.0, 40.0))),
            Some(PointerEvent::Move(Position::new(120.0, 40.0)))
        );
        assert_eq!(
            normalizer.normalize(RawPointerEvent::MousePressed(MouseButton::Left)),
            Some(PointerEvent::Down(Position::new(120.0, 40.0)))
        );
        assert_eq!(
            normalizer.normalize(RawPointerEvent::MouseReleased(MouseButton::Left)),
            Some(PointerEvent::Up)
        );
    }

    #[test]
    fn test_mouse_press_without_cursor_is_dropped() {
        let mut normalizer = PointerNormalizer::new();
        assert_eq!(normalizer.normalize(RawPointerEvent::MousePressed(MouseButton::Right)), None);
    }

    #[test]
    fn test_cursor_left_releases() {
        let mut normalizer = PointerNormalizer::new();
        normalizer.normalize(RawPointerEvent::CursorMoved(Position::new(1.0, 2.0)));
        assert_eq!(normalizer.normalize(RawPointerEvent::CursorLeft), Some(PointerEvent::Up));
        assert!(normalizer.cursor().is_none());
    }

    #[test]
    fn test_non_finite_cursor_dropped() {
        let mut normalizer = PointerNormalizer::new();
        assert_eq!(
            normalizer.normalize(RawPointerEvent::CursorMoved(Position::new(f32::NAN, 0.0))),
            None
        );
        assert!(normalizer.cursor().is_none());
    }

    #[test]
    fn test_only_first_touch_is_tracked() {
        let mut normalizer = PointerNormalizer::new();
        assert_eq!(
            normalizer.normalize(touch(7, TouchPhase::Started, 10.0, 10.0)),
            Some(PointerEvent::Down(Position::new(10.0, 10.0)))
        );
        // Second finger is ignored for its whole lifetime
        assert_eq!(normalizer.normalize(touch(8, TouchPhase::Started, 50.0, 50.0)), None);
        assert_eq!(normalizer.normalize(touch(8, TouchPhase::Moved, 55.0, 50.0)), None);
        assert_eq!(normalizer.normalize(touch(8, TouchPhase::Ended, 55.0, 50.0)), None);

        assert_eq!(
            normalizer.normalize(touch(7, TouchPhase::Moved, 12.0, 9.0)),
            Some(PointerEvent::Move(Position::new(12.0, 9.0)))
        );
        assert_eq!(
            normalizer.normalize(touch(7, TouchPhase::Cancelled, 12.0, 9.0)),
            Some(PointerEvent::Up)
        );
        assert!(normalizer.primary_touch().is_none());

        // A new touch may now take over
        assert_eq!(
            normalizer.normalize(touch(8, TouchPhase::Started, 30.0, 30.0)),
            Some(PointerEvent::Down(Position::new(30.0, 30.0)))
        );
    }

    #[test]
    fn test_event_phase_and_position() {
        let down = PointerEvent::Down(Position::new(1.0, 2.0));
        assert_eq!(down.phase(), PointerPhase::Down);
        assert_eq!(down.position(), Some(Position::new(1.0, 2.0)));
        assert_eq!(PointerEvent::Up.phase(), PointerPhase::Up);
        assert_eq!(PointerEvent::Up.position(), None);
    }
}

//! winit event translation
//!
//! Maps `winit::event::WindowEvent` into [`RawPointerEvent`]s so the rest of the
//! input pipeline never touches winit types.

use winit::event::{ElementState, WindowEvent};

use super::pointer::{MouseButton, Position, RawPointerEvent, TouchPhase};

/// Translate a window event into a raw pointer event, if it is pointer related.
pub fn raw_pointer_event(event: &WindowEvent) -> Option<RawPointerEvent> {
    match event {
        WindowEvent::MouseInput { state, button, .. } => {
            let button = map_mouse_button(*button);
            Some(match state {
                ElementState::Pressed => RawPointerEvent::MousePressed(button),
                ElementState::Released => RawPointerEvent::MouseReleased(button),
            })
        }
        WindowEvent::CursorMoved { position, .. } => Some(RawPointerEvent::CursorMoved(
            Position::new(position.x as f32, position.y as f32),
        )),
        WindowEvent::CursorLeft { .. } => Some(RawPointerEvent::CursorLeft),
        WindowEvent::Touch(touch) => Some(RawPointerEvent::Touch {
            id: touch.id,
            phase: map_touch_phase(touch.phase),
            position: Position::new(touch.location.x as f32, touch.location.y as f32),
        }),
        _ => None,
    }
}

/// Map a winit mouse button to the engine's button type.
pub fn map_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Back => MouseButton::Other(3),
        winit::event::MouseButton::Forward => MouseButton::Other(4),
        winit::event::MouseButton::Other(n) => MouseButton::Other(n),
    }
}

/// Map a winit touch phase to the engine's touch phase.
pub fn map_touch_phase(phase: winit::event::TouchPhase) -> TouchPhase {
    match phase {
        winit::event::TouchPhase::Started => TouchPhase::Started,
        winit::event::TouchPhase::Moved => TouchPhase::Moved,
        winit::event::TouchPhase::Ended => TouchPhase::Ended,
        winit::event::TouchPhase::Cancelled => TouchPhase::Cancelled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_mouse_button() {
        assert_eq!(map_mouse_button(winit::event::MouseButton::Left), MouseButton::Left);
        assert_eq!(map_mouse_button(winit::event::MouseButton::Back), MouseButton::Other(3));
        assert_eq!(map_mouse_button(winit::event::MouseButton::Other(9)), MouseButton::Other(9));
    }

    #[test]
    fn test_map_touch_phase() {
        assert_eq!(map_touch_phase(winit::event::TouchPhase::Started), TouchPhase::Started);
        assert_eq!(map_touch_phase(winit::event::TouchPhase::Cancelled), TouchPhase::Cancelled);
    }
}

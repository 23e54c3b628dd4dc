//! Mapping from winit events to input events
//!
//! winit reports button presses without a position, so the translator
//! remembers the last cursor position and attaches it to pointer-down
//! events. Positions are converted to logical pixels, the space the scene
//! is laid out in.

use hyperwire_core::{InputEvent, Key, PointerButton};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Stateful translator from winit events to [`InputEvent`]s
pub struct EventTranslator {
    cursor: (f32, f32),
    scale_factor: f64,
}

impl Default for EventTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl EventTranslator {
    pub fn new() -> Self {
        Self {
            cursor: (0.0, 0.0),
            scale_factor: 1.0,
        }
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    /// Translate one window event
    ///
    /// Returns `None` for events the core does not care about.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::CloseRequested),
            WindowEvent::CursorMoved { position, .. } => {
                Some(self.map_cursor_moved(position.x, position.y))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                Some(self.map_mouse_button(*button, *state))
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return None;
                }
                match event.physical_key {
                    PhysicalKey::Code(key) => Self::map_keyboard(key, event.state),
                    PhysicalKey::Unidentified(_) => None,
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(*scale_factor);
                None
            }
            _ => None,
        }
    }

    /// Record a cursor move given in physical pixels
    pub fn map_cursor_moved(&mut self, x: f64, y: f64) -> InputEvent {
        self.cursor = (
            (x / self.scale_factor) as f32,
            (y / self.scale_factor) as f32,
        );
        InputEvent::PointerMove {
            x: self.cursor.0,
            y: self.cursor.1,
        }
    }

    /// Map a mouse button change, pressing at the last cursor position
    pub fn map_mouse_button(&self, button: MouseButton, state: ElementState) -> InputEvent {
        let button = Self::map_button(button);
        match state {
            ElementState::Pressed => InputEvent::PointerDown {
                x: self.cursor.0,
                y: self.cursor.1,
                button,
            },
            ElementState::Released => InputEvent::PointerUp { button },
        }
    }

    /// Map a key press; releases are ignored
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputEvent> {
        if state != ElementState::Pressed {
            return None;
        }
        let key = match key {
            KeyCode::Escape => Key::Escape,
            _ => Key::Other,
        };
        Some(InputEvent::KeyPress(key))
    }

    fn map_button(button: MouseButton) -> PointerButton {
        match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            MouseButton::Middle => PointerButton::Middle,
            MouseButton::Back => PointerButton::Other(3),
            MouseButton::Forward => PointerButton::Other(4),
            MouseButton::Other(n) => PointerButton::Other(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_requested() {
        let mut t = EventTranslator::new();
        assert_eq!(
            t.translate(&WindowEvent::CloseRequested),
            Some(InputEvent::CloseRequested)
        );
    }

    #[test]
    fn test_press_uses_last_cursor_position() {
        let mut t = EventTranslator::new();
        t.map_cursor_moved(120.0, 55.0);
        let event = t.map_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert_eq!(
            event,
            InputEvent::PointerDown { x: 120.0, y: 55.0, button: PointerButton::Primary }
        );
    }

    #[test]
    fn test_release() {
        let t = EventTranslator::new();
        assert_eq!(
            t.map_mouse_button(MouseButton::Right, ElementState::Released),
            InputEvent::PointerUp { button: PointerButton::Secondary }
        );
    }

    #[test]
    fn test_cursor_converted_to_logical_pixels() {
        let mut t = EventTranslator::new();
        t.set_scale_factor(2.0);
        let event = t.map_cursor_moved(200.0, 100.0);
        assert_eq!(event, InputEvent::PointerMove { x: 100.0, y: 50.0 });

        let event = t.map_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert_eq!(
            event,
            InputEvent::PointerDown { x: 100.0, y: 50.0, button: PointerButton::Primary }
        );
    }

    #[test]
    fn test_invalid_scale_factor_ignored() {
        let mut t = EventTranslator::new();
        t.set_scale_factor(0.0);
        let event = t.map_cursor_moved(10.0, 20.0);
        assert_eq!(event, InputEvent::PointerMove { x: 10.0, y: 20.0 });
    }

    #[test]
    fn test_escape_press() {
        assert_eq!(
            EventTranslator::map_keyboard(KeyCode::Escape, ElementState::Pressed),
            Some(InputEvent::KeyPress(Key::Escape))
        );
    }

    #[test]
    fn test_other_keys() {
        for key in [KeyCode::KeyW, KeyCode::Space, KeyCode::KeyR] {
            let event = EventTranslator::map_keyboard(key, ElementState::Pressed);
            assert_eq!(event, Some(InputEvent::KeyPress(Key::Other)), "Key {:?}", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        assert_eq!(
            EventTranslator::map_keyboard(KeyCode::Escape, ElementState::Released),
            None
        );
    }
}

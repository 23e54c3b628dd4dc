//! Input events consumed by the frame loop
//!
//! Windowing-system events are translated into this small vocabulary by
//! `hyperwire_input`, so the driver and widgets stay backend-agnostic.

/// Pointer buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left / primary button
    Primary,
    /// Right / secondary button
    Secondary,
    /// Middle button
    Middle,
    /// Any other button
    Other(u16),
}

/// Keys the core reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// One input event, in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32, button: PointerButton },
    PointerUp { button: PointerButton },
    PointerMove { x: f32, y: f32 },
    KeyPress(Key),
    CloseRequested,
}

impl InputEvent {
    /// True for events that end the frame loop
    pub fn is_exit(&self) -> bool {
        matches!(self, InputEvent::CloseRequested | InputEvent::KeyPress(Key::Escape))
    }
}

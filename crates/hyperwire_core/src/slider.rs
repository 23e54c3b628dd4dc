//! Horizontal slider widget
//!
//! A track rectangle with a draggable knob, bound to a numeric range.
//! The frame loop polls [`Slider::value`] once per frame; the slider never
//! notifies anyone itself.

use crate::event::{InputEvent, PointerButton};
use crate::surface::{Color, Rect, ScreenPoint, Surface};
use std::fmt;

/// Knob width when drawn
const KNOB_WIDTH: f32 = 10.0;
/// How far the drawn knob overhangs the track vertically
const KNOB_OVERHANG: f32 = 5.0;
/// Grab margin added around the drawn knob, so the hit region spans
/// `KNOB_WIDTH / 2 + KNOB_HIT_PADDING` on each side of the knob centre
const KNOB_HIT_PADDING: f32 = 5.0;
/// Gap between the label baseline area and the track
const LABEL_OFFSET: i32 = 25;

const TRACK_COLOR: Color = Color::rgb(100, 100, 100);
const KNOB_COLOR: Color = Color::rgb(200, 200, 200);
const KNOB_ACTIVE_COLOR: Color = Color::WHITE;
const LABEL_COLOR: Color = Color::WHITE;

/// Error type for slider construction
#[derive(Debug, Clone, PartialEq)]
pub enum SliderError {
    /// The track has no usable width, so positions cannot be normalised
    ZeroWidthTrack,
    /// `max` must be greater than `min`
    EmptyRange { min: f32, max: f32 },
    /// The initial value is NaN or infinite
    InvalidInitial(f32),
}

impl fmt::Display for SliderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliderError::ZeroWidthTrack => write!(f, "Slider track has zero width"),
            SliderError::EmptyRange { min, max } => {
                write!(f, "Slider range is empty: [{}, {}]", min, max)
            }
            SliderError::InvalidInitial(value) => {
                write!(f, "Slider initial value is not finite: {}", value)
            }
        }
    }
}

impl std::error::Error for SliderError {}

/// Interactive control for one numeric parameter
#[derive(Clone, Debug)]
pub struct Slider {
    track: Rect,
    min: f32,
    max: f32,
    value: f32,
    dragging: bool,
    label: String,
    precision: usize,
}

impl Slider {
    /// Create a slider over `[min, max]` with its track at `track`
    ///
    /// `initial` is clamped into range. Fails for a zero-width track or an
    /// empty range.
    pub fn new(
        track: Rect,
        min: f32,
        max: f32,
        initial: f32,
        label: impl Into<String>,
    ) -> Result<Self, SliderError> {
        if !(track.width > 0.0 && track.width.is_finite()) {
            return Err(SliderError::ZeroWidthTrack);
        }
        if !(max > min && min.is_finite() && max.is_finite()) {
            return Err(SliderError::EmptyRange { min, max });
        }
        if !initial.is_finite() {
            return Err(SliderError::InvalidInitial(initial));
        }

        Ok(Self {
            track,
            min,
            max,
            value: initial.clamp(min, max),
            dragging: false,
            label: label.into(),
            precision: 2,
        })
    }

    /// Builder: decimals shown in the label
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Current value, always within `[min, max]`
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    pub fn track(&self) -> Rect {
        self.track
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Label text as drawn, e.g. `Speed X: 0.01`
    pub fn label_text(&self) -> String {
        format!("{}: {:.*}", self.label, self.precision, self.value)
    }

    /// Knob center x in pixels
    pub fn knob_x(&self) -> f32 {
        let normalized = (self.value - self.min) / (self.max - self.min);
        self.track.x + normalized * self.track.width
    }

    /// Knob rectangle as drawn
    pub fn knob_rect(&self) -> Rect {
        Rect::new(
            self.knob_x() - KNOB_WIDTH / 2.0,
            self.track.y - KNOB_OVERHANG,
            KNOB_WIDTH,
            self.track.height + 2.0 * KNOB_OVERHANG,
        )
    }

    /// Region that starts a drag when pressed
    pub fn hit_test(&self, x: f32, y: f32) -> bool {
        self.knob_rect().expanded(KNOB_HIT_PADDING).contains(x, y) || self.track.contains(x, y)
    }

    /// Update from one input event
    ///
    /// Returns true if the event changed the slider's state.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown { x, y, button: PointerButton::Primary } => {
                if self.hit_test(x, y) {
                    self.dragging = true;
                    self.set_from_pointer(x);
                    true
                } else {
                    false
                }
            }
            InputEvent::PointerUp { button: PointerButton::Primary } => {
                let was_dragging = self.dragging;
                self.dragging = false;
                was_dragging
            }
            InputEvent::PointerMove { x, .. } if self.dragging => {
                self.set_from_pointer(x);
                true
            }
            _ => false,
        }
    }

    /// Map a pointer x-coordinate onto the range
    ///
    /// x is clamped to the track, normalised to [0, 1], then mapped linearly.
    pub fn set_from_pointer(&mut self, x: f32) {
        if x.is_nan() {
            return;
        }
        let clamped = x.clamp(self.track.x, self.track.right());
        let normalized = (clamped - self.track.x) / self.track.width;
        let value = if normalized >= 1.0 {
            self.max
        } else {
            self.min + normalized * (self.max - self.min)
        };
        self.value = value.clamp(self.min, self.max);
    }

    /// Draw label, track and knob
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let label_pos = ScreenPoint::new(self.track.x as i32, self.track.y as i32 - LABEL_OFFSET);
        surface.draw_text(&self.label_text(), label_pos, LABEL_COLOR);

        surface.draw_rect(self.track, TRACK_COLOR);

        let knob_color = if self.dragging { KNOB_ACTIVE_COLOR } else { KNOB_COLOR };
        surface.draw_rect(self.knob_rect(), knob_color);
    }
}

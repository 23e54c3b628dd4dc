//! Input handling for Hyperwire
//!
//! This crate turns winit window events into the backend-agnostic
//! [`InputEvent`](hyperwire_core::InputEvent)s consumed by the animator and
//! its sliders.

mod event_translator;

pub use event_translator::EventTranslator;

//! Hyperwire - rotating wireframe polytopes
//!
//! Library half of the `hyperwire` binary: configuration loading and the
//! window/render systems the event loop drives.

pub mod config;
pub mod systems;

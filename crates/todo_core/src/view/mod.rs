//! View layer.
//!
//! # Responsibility
//! - Dispatch user intents into the collection service.
//! - Derive render-ready state (filtered rows, progress gauge).
//! - Render frames as text or SVG for the front-end.
//!
//! # Invariants
//! - Views are derived from the single authoritative collection.

pub mod app;
pub mod progress;
pub mod render;

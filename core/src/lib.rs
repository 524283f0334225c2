//! The engine beneath an interactive circle-of-fifths diagram: chord spelling,
//! the rotating slot model and drag-to-rotate gesture handling.
//!
//! Rendering is left to the caller. A UI shell keeps one
//! [CircleOfFifths](app::CircleOfFifths) per diagram, forwards input to it and
//! redraws from its [SlotView](circle::SlotView)s.

pub mod app;
pub mod circle;
pub mod diatonic;
pub mod error;
pub mod gesture;
pub mod geometry;
pub mod harmony;
pub mod info;

pub use app::{CircleOfFifths, Event};
pub use error::CircleError;

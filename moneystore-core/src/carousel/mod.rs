//! Layer carousel
//!
//! Rotates the info layers (date, weather, ...) through the slot normally
//! held by the home layer (time). A tap brings in the next info layer; a
//! timer later brings the home layer back. All state lives in [`Carousel`],
//! which the UI callbacks pass events into.

pub mod events;
pub mod machine;

pub use events::{Action, Event};
pub use machine::Carousel;

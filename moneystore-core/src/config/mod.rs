//! Configuration types
//!
//! Watch settings, stored as postcard binary data.

pub mod settings;

pub use settings::*;

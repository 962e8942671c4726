//! Layer collection
//!
//! An ordered, cursor-addressable sequence of layer handles with cyclic
//! forward and backward navigation.

pub mod collection;
pub mod cursor;
pub mod handle;

pub use collection::{LayerCollection, LayerError};
pub use cursor::Cursor;
pub use handle::LayerHandle;

//! Cyclic layer collection
//!
//! Stores handles to layers owned by the UI toolkit, in insertion order, and
//! a cursor that the navigation queries move as a side effect:
//!
//! ```text
//!   next_layer:      NotStarted -> 0 -> 1 -> ... -> len-1 -> 0 -> ...
//!   previous_layer:  0 -> len-1 -> len-2 -> ... -> 0 -> len-1 -> ...
//! ```
//!
//! Storage is fixed-capacity. Dropping the collection releases only the
//! handle storage; the layers behind the handles are untouched.

use heapless::Vec;

use super::cursor::Cursor;

/// Layer collection errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayerError {
    /// No room left for another handle
    CapacityExceeded,
    /// Index outside `[0, len-1]`
    IndexOutOfRange,
}

/// Ordered, cursor-addressable collection of up to `N` layer handles
///
/// Intended to be driven from a single UI callback context. The collection
/// must not outlive the layers its handles refer to; that is the caller's
/// contract and is not checked.
#[derive(Debug, Clone)]
pub struct LayerCollection<H, const N: usize> {
    /// Handles in insertion order
    layers: Vec<H, N>,
    /// Navigation cursor
    cursor: Cursor,
}

impl<H: Copy, const N: usize> Default for LayerCollection<H, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Copy, const N: usize> LayerCollection<H, N> {
    /// Create an empty collection
    pub const fn new() -> Self {
        Self {
            layers: Vec::new(),
            cursor: Cursor::NotStarted,
        }
    }

    /// Append a handle as the new last element
    ///
    /// The cursor does not move. On failure the collection is unchanged.
    pub fn push(&mut self, layer: H) -> Result<(), LayerError> {
        self.layers.push(layer).map_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::warn!("layer collection full ({} slots)", N);
            LayerError::CapacityExceeded
        })
    }

    /// Insert a handle so that it becomes the element at `index`
    ///
    /// Valid for `index <= len-1`; elements from `index` on shift one
    /// position later. The cursor index is left as is. On failure the
    /// collection is unchanged.
    pub fn insert(&mut self, layer: H, index: usize) -> Result<(), LayerError> {
        if index >= self.layers.len() {
            #[cfg(feature = "defmt")]
            defmt::debug!("insert rejected: index {} of {}", index, self.layers.len());
            return Err(LayerError::IndexOutOfRange);
        }
        if self.layers.is_full() {
            #[cfg(feature = "defmt")]
            defmt::warn!("layer collection full ({} slots)", N);
            return Err(LayerError::CapacityExceeded);
        }

        self.layers
            .insert(index, layer)
            .map_err(|_| LayerError::CapacityExceeded)
    }

    /// Number of handles held
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Check if the collection holds no handles
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Check if another handle would exceed the capacity
    pub fn is_full(&self) -> bool {
        self.layers.is_full()
    }

    /// Maximum number of handles
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Current cursor state
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Index the cursor rests on, `None` before navigation starts
    pub fn current_index(&self) -> Option<usize> {
        self.cursor.index()
    }

    /// Move the cursor to `index`
    ///
    /// Fails with the cursor unchanged unless `index <= len-1`.
    pub fn set_current(&mut self, index: usize) -> Result<(), LayerError> {
        if index >= self.layers.len() {
            return Err(LayerError::IndexOutOfRange);
        }
        self.cursor = Cursor::At(index);
        Ok(())
    }

    /// Put the cursor back into its not-started state
    ///
    /// The next call to [`next_layer`](Self::next_layer) returns the first
    /// element again.
    pub fn reset_cursor(&mut self) {
        self.cursor = Cursor::NotStarted;
    }

    /// Handle at `index`
    pub fn get(&self, index: usize) -> Option<H> {
        self.layers.get(index).copied()
    }

    /// Handle under the cursor, without moving it
    ///
    /// Returns `None` on an empty collection or before navigation starts.
    pub fn current(&self) -> Option<H> {
        self.cursor.index().and_then(|index| self.get(index))
    }

    /// Advance the cursor and return the handle it lands on
    ///
    /// The first call after creation (or [`reset_cursor`](Self::reset_cursor))
    /// returns the first element. Past the last element the cursor wraps to 0.
    pub fn next_layer(&mut self) -> Option<H> {
        let cursor = self.cursor.advanced(self.layers.len())?;
        self.cursor = cursor;
        self.current()
    }

    /// Retreat the cursor and return the handle it lands on
    ///
    /// From index 0, or before navigation starts, the cursor wraps to the
    /// last element. Undoes [`next_layer`](Self::next_layer) for any
    /// started cursor.
    pub fn previous_layer(&mut self) -> Option<H> {
        let cursor = self.cursor.retreated(self.layers.len())?;
        self.cursor = cursor;
        self.current()
    }

    /// Iterate over the handles in order
    pub fn iter(&self) -> impl Iterator<Item = H> + '_ {
        self.layers.iter().copied()
    }

    /// Handles as a slice, in order
    pub fn as_slice(&self) -> &[H] {
        &self.layers
    }
}

impl<H: Copy + PartialEq, const N: usize> LayerCollection<H, N> {
    /// Index of the first occurrence of `layer`
    pub fn position(&self, layer: H) -> Option<usize> {
        self.layers.iter().position(|&l| l == layer)
    }

    /// Check if `layer` is held
    pub fn contains(&self, layer: H) -> bool {
        self.position(layer).is_some()
    }
}

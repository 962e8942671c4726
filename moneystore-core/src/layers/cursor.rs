//! Collection cursor

/// Position of the collection cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cursor {
    /// No element has been visited yet
    #[default]
    NotStarted,
    /// Cursor rests on this index
    At(usize),
}

impl Cursor {
    /// Index the cursor rests on, if any
    pub const fn index(self) -> Option<usize> {
        match self {
            Cursor::NotStarted => None,
            Cursor::At(index) => Some(index),
        }
    }

    /// Check if navigation has started
    pub const fn is_started(self) -> bool {
        matches!(self, Cursor::At(_))
    }

    /// Cursor after a forward step in a collection of `len` elements
    ///
    /// Returns `None` for an empty collection.
    pub const fn advanced(self, len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let next = match self {
            Cursor::NotStarted => 0,
            Cursor::At(index) if index + 1 >= len => 0,
            Cursor::At(index) => index + 1,
        };
        Some(Cursor::At(next))
    }

    /// Cursor after a backward step in a collection of `len` elements
    ///
    /// An unstarted cursor retreats onto the last element.
    pub const fn retreated(self, len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let prev = match self {
            Cursor::NotStarted | Cursor::At(0) => len - 1,
            Cursor::At(index) if index >= len => len - 1,
            Cursor::At(index) => index - 1,
        };
        Some(Cursor::At(prev))
    }
}

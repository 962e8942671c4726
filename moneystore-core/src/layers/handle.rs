//! Opaque layer handle

/// Handle referencing a toolkit-owned layer
///
/// The toolkit allocates, positions and destroys the layer; this crate only
/// compares and copies the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerHandle(pub u32);

impl LayerHandle {
    /// Raw id as handed out by the toolkit
    pub const fn id(self) -> u32 {
        self.0
    }
}

impl From<u32> for LayerHandle {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

//! Events and actions of the layer carousel

/// Events fed into the carousel by the UI callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event<H> {
    /// Wrist tap detected
    Tap,
    /// The swap that brought this layer on screen has finished
    SwapFinished(H),
    /// Return timer fired
    ReturnTimeout,
}

/// What the caller should do in response to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action<H> {
    /// Move `hide` off screen and bring `show` on
    Swap { hide: H, show: H },
    /// Start the timer that will deliver [`Event::ReturnTimeout`]
    ArmReturnTimer,
}

impl<H> Event<H> {
    /// Check if this event comes from the user
    pub fn is_user_event(&self) -> bool {
        matches!(self, Event::Tap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::LayerHandle;

    #[test]
    fn test_event_sources() {
        assert!(Event::<LayerHandle>::Tap.is_user_event());
        assert!(!Event::<LayerHandle>::ReturnTimeout.is_user_event());
        assert!(!Event::SwapFinished(LayerHandle(1)).is_user_event());
    }
}

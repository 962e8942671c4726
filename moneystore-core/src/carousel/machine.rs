//! Carousel state
//!
//! The home layer is on screen until a tap swaps in the next info layer.
//! When that swap finishes the caller is asked to arm the return timer; the
//! timeout swaps the home layer back in. Taps are ignored while the home
//! layer is on its way back.

use super::events::{Action, Event};
use crate::layers::{LayerCollection, LayerError};

/// Tap-driven rotation of info layers around a home layer
#[derive(Debug, Clone)]
pub struct Carousel<H, const N: usize> {
    /// Layer shown at rest (the time)
    home: H,
    /// Layers rotated in by taps, in rotation order
    info: LayerCollection<H, N>,
    /// Layer currently on screen
    showing: H,
    /// Home layer swap in progress
    returning: bool,
    /// Return timer to be armed when the current swap finishes
    return_timer_pending: bool,
}

impl<H: Copy + PartialEq, const N: usize> Carousel<H, N> {
    /// Create a carousel showing `home` with no info layers
    pub const fn new(home: H) -> Self {
        Self {
            home,
            info: LayerCollection::new(),
            showing: home,
            returning: false,
            return_timer_pending: false,
        }
    }

    /// Append an info layer to the rotation
    pub fn add_layer(&mut self, layer: H) -> Result<(), LayerError> {
        self.info.push(layer)
    }

    /// Insert an info layer at `index` in the rotation
    pub fn insert_layer(&mut self, layer: H, index: usize) -> Result<(), LayerError> {
        self.info.insert(layer, index)
    }

    /// Home layer
    pub fn home(&self) -> H {
        self.home
    }

    /// Layer currently on screen
    pub fn showing(&self) -> H {
        self.showing
    }

    /// Check if the home layer is on screen
    pub fn is_home(&self) -> bool {
        self.showing == self.home
    }

    /// Check if the home layer is being swapped back in
    pub fn is_returning(&self) -> bool {
        self.returning
    }

    /// Info layers in rotation order
    pub fn layers(&self) -> &LayerCollection<H, N> {
        &self.info
    }

    /// Process an event and return what the caller should do
    ///
    /// A swap produced by a tap supersedes any return timer still running;
    /// the caller cancels it before starting the swap.
    pub fn handle(&mut self, event: Event<H>) -> Option<Action<H>> {
        if self.returning && event.is_user_event() {
            #[cfg(feature = "defmt")]
            defmt::debug!("carousel: user event ignored while returning home");
            return None;
        }

        match event {
            Event::Tap => self.on_tap(),
            Event::SwapFinished(layer) => self.on_swap_finished(layer),
            Event::ReturnTimeout => self.on_return_timeout(),
        }
    }

    fn on_tap(&mut self) -> Option<Action<H>> {
        let mut show = self.info.next_layer()?;
        if show == self.showing {
            // An insert ahead of the cursor left it on the shown layer
            if self.info.len() < 2 {
                return None;
            }
            show = self.info.next_layer()?;
        }

        let hide = self.showing;
        self.showing = show;
        self.return_timer_pending = true;

        #[cfg(feature = "defmt")]
        defmt::debug!("carousel: tap -> info layer {}", self.info.current_index());

        Some(Action::Swap { hide, show })
    }

    fn on_swap_finished(&mut self, layer: H) -> Option<Action<H>> {
        if layer == self.home {
            self.returning = false;
        }

        if self.return_timer_pending {
            self.return_timer_pending = false;
            return Some(Action::ArmReturnTimer);
        }

        None
    }

    fn on_return_timeout(&mut self) -> Option<Action<H>> {
        if self.is_home() {
            return None;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("carousel: returning home");

        let hide = self.showing;
        self.showing = self.home;
        self.returning = true;
        self.return_timer_pending = false;

        Some(Action::Swap {
            hide,
            show: self.home,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::LayerHandle;

    const TIME: LayerHandle = LayerHandle(0);
    const DATE: LayerHandle = LayerHandle(1);
    const WEATHER: LayerHandle = LayerHandle(2);

    fn watch_face() -> Carousel<LayerHandle, 4> {
        let mut carousel = Carousel::new(TIME);
        carousel.add_layer(DATE).unwrap();
        carousel.add_layer(WEATHER).unwrap();
        carousel
    }

    #[test]
    fn test_starts_home() {
        let carousel = watch_face();
        assert!(carousel.is_home());
        assert_eq!(carousel.showing(), TIME);
        assert!(!carousel.is_returning());
        assert_eq!(carousel.layers().len(), 2);
    }

    #[test]
    fn test_tap_rotates_info_layers() {
        let mut carousel = watch_face();

        assert_eq!(
            carousel.handle(Event::Tap),
            Some(Action::Swap {
                hide: TIME,
                show: DATE
            })
        );
        assert_eq!(
            carousel.handle(Event::Tap),
            Some(Action::Swap {
                hide: DATE,
                show: WEATHER
            })
        );
        // Wraps back to the first info layer
        assert_eq!(
            carousel.handle(Event::Tap),
            Some(Action::Swap {
                hide: WEATHER,
                show: DATE
            })
        );
    }

    #[test]
    fn test_return_timer_armed_once_per_swap() {
        let mut carousel = watch_face();
        carousel.handle(Event::Tap);

        // Both layers of the swap report back; only the first arms the timer
        assert_eq!(
            carousel.handle(Event::SwapFinished(TIME)),
            Some(Action::ArmReturnTimer)
        );
        assert_eq!(carousel.handle(Event::SwapFinished(DATE)), None);
    }

    #[test]
    fn test_timeout_returns_home() {
        let mut carousel = watch_face();
        carousel.handle(Event::Tap);
        carousel.handle(Event::SwapFinished(DATE));

        assert_eq!(
            carousel.handle(Event::ReturnTimeout),
            Some(Action::Swap {
                hide: DATE,
                show: TIME
            })
        );
        assert!(carousel.is_home());
        assert!(carousel.is_returning());

        // Swap back home does not re-arm the timer
        assert_eq!(carousel.handle(Event::SwapFinished(TIME)), None);
        assert!(!carousel.is_returning());
    }

    #[test]
    fn test_tap_ignored_while_returning() {
        let mut carousel = watch_face();
        carousel.handle(Event::Tap);
        carousel.handle(Event::ReturnTimeout);

        assert_eq!(carousel.handle(Event::Tap), None);

        carousel.handle(Event::SwapFinished(TIME));
        assert_eq!(
            carousel.handle(Event::Tap),
            Some(Action::Swap {
                hide: TIME,
                show: WEATHER
            })
        );
    }

    #[test]
    fn test_timeout_at_home_is_noop() {
        let mut carousel = watch_face();
        assert_eq!(carousel.handle(Event::ReturnTimeout), None);
        assert!(!carousel.is_returning());
    }

    #[test]
    fn test_no_info_layers() {
        let mut carousel: Carousel<LayerHandle, 2> = Carousel::new(TIME);
        assert_eq!(carousel.handle(Event::Tap), None);
        assert!(carousel.is_home());
    }

    #[test]
    fn test_single_info_layer_does_not_swap_with_itself() {
        let mut carousel: Carousel<LayerHandle, 2> = Carousel::new(TIME);
        carousel.add_layer(DATE).unwrap();

        assert!(carousel.handle(Event::Tap).is_some());
        assert_eq!(carousel.handle(Event::Tap), None);
        assert_eq!(carousel.showing(), DATE);
    }

    #[test]
    fn test_insert_before_cursor_still_rotates() {
        let mut carousel = watch_face();
        carousel.handle(Event::Tap);
        assert_eq!(carousel.showing(), DATE);

        // DATE moves to the slot right after the info cursor
        carousel.insert_layer(LayerHandle(7), 0).unwrap();

        assert_eq!(
            carousel.handle(Event::Tap),
            Some(Action::Swap {
                hide: DATE,
                show: WEATHER
            })
        );
    }

    #[test]
    fn test_insert_layer_changes_rotation() {
        let mut carousel = watch_face();
        carousel.insert_layer(LayerHandle(7), 0).unwrap();

        assert_eq!(
            carousel.handle(Event::Tap),
            Some(Action::Swap {
                hide: TIME,
                show: LayerHandle(7)
            })
        );
    }
}

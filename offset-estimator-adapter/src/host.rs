use crate::Easing;

/// How the host should move to a new offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollMotion {
    Jump,
    Animate { duration_ms: u64, easing: Easing },
}

/// The host's scroll primitive.
///
/// This is the only surface through which the adapter talks to a UI framework. Implementations
/// wrap whatever the framework exposes (a scroll container, a viewport widget, a terminal pane).
pub trait ScrollHost {
    /// The host's current maximum scroll extent, or `None` until it has produced layout metrics.
    fn current_max_extent(&self) -> Option<f64>;

    /// Moves the viewport to `offset` (pixels from the top of the list).
    fn move_to(&mut self, offset: f64, motion: ScrollMotion);
}

impl<H: ScrollHost + ?Sized> ScrollHost for &mut H {
    fn current_max_extent(&self) -> Option<f64> {
        (**self).current_max_extent()
    }

    fn move_to(&mut self, offset: f64, motion: ScrollMotion) {
        (**self).move_to(offset, motion);
    }
}

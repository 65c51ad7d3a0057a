use crate::{ScrollHost, ScrollMotion, Tween};

/// A framework-neutral [`ScrollHost`] that owns its scroll offset and realizes animated motions
/// with a [`Tween`].
///
/// Useful for hosts without a native animated-scroll primitive (e.g. terminal UIs). Adapters:
/// - call `set_max_extent` whenever layout reports a new scrollable size
/// - call `on_scroll` for user scrolling (cancels any active tween)
/// - call `tick(now_ms)` each frame and apply the returned offset
///
/// Animated motions start on the first `tick` after `move_to`, so the frame loop may stay idle
/// between scroll requests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TweenScrollHost {
    offset: f64,
    max_extent: Option<f64>,
    tween: Option<Tween>,
}

impl TweenScrollHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_extent(mut self, max_extent: f64) -> Self {
        self.max_extent = Some(max_extent);
        self
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn max_extent(&self) -> Option<f64> {
        self.max_extent
    }

    /// `None` marks the host as not laid out yet.
    pub fn set_max_extent(&mut self, max_extent: Option<f64>) {
        self.max_extent = max_extent;
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Call this when the user scrolls. Cancels any active tween.
    pub fn on_scroll(&mut self, offset: f64) {
        self.cancel_animation();
        self.offset = offset.max(0.0);
    }

    /// Advances the active tween.
    ///
    /// Returns the new offset while a tween is running (including the final frame), `None`
    /// otherwise.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let tween = self.tween.as_mut()?;
        tween.start(now_ms);
        let tween = *tween;
        self.offset = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.offset = tween.to;
            self.tween = None;
        }
        Some(self.offset)
    }
}

impl ScrollHost for TweenScrollHost {
    fn current_max_extent(&self) -> Option<f64> {
        self.max_extent
    }

    fn move_to(&mut self, offset: f64, motion: ScrollMotion) {
        // An active tween is replaced by one starting from the last rendered offset.
        self.tween = Tween::for_motion(self.offset, offset, motion);
        if self.tween.is_none() {
            self.offset = offset;
        }
        // Extents only grow from host layout; an overshooting target widens them here.
        if let Some(max) = self.max_extent {
            if offset > max {
                self.max_extent = Some(offset);
            }
        }
    }
}

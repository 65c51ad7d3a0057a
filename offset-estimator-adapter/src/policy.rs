use offset_estimator::OffsetEstimator;

use crate::{Easing, ScrollHost, ScrollMotion};

/// Configuration for [`ScrollTargetPolicy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolicyOptions {
    /// Scrolls spanning more items than this jump instead of animating.
    pub large_scroll_threshold_in_items: usize,
    /// Default animation duration for [`ScrollTargetPolicy::animate_to_index`].
    pub duration_ms: u64,
    /// Default animation curve for [`ScrollTargetPolicy::animate_to_index`].
    pub easing: Easing,
}

impl PolicyOptions {
    pub const DEFAULT_LARGE_SCROLL_THRESHOLD_IN_ITEMS: usize = 50;
    pub const DEFAULT_DURATION_MS: u64 = 300;

    pub fn with_large_scroll_threshold_in_items(mut self, threshold: usize) -> Self {
        self.large_scroll_threshold_in_items = threshold;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for PolicyOptions {
    fn default() -> Self {
        Self {
            large_scroll_threshold_in_items: Self::DEFAULT_LARGE_SCROLL_THRESHOLD_IN_ITEMS,
            duration_ms: Self::DEFAULT_DURATION_MS,
            easing: Easing::EaseInOutCubic,
        }
    }
}

/// What the policy asked the host to do.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCommand {
    /// The applied (clamped) offset.
    pub offset: f64,
    /// Items between this target and the previous one.
    pub distance: usize,
    pub motion: ScrollMotion,
}

/// Turns index targets into host scroll commands.
///
/// The policy asks the estimator for an offset, clamps it against the host's extent and picks a
/// motion: long scrolls jump, short ones animate.
///
/// Every method is a no-op (returning `None`) while the host has no layout metrics, for indexes
/// outside the list, and when the estimate is not a finite number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollTargetPolicy {
    options: PolicyOptions,
}

impl ScrollTargetPolicy {
    pub fn new(options: PolicyOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PolicyOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: PolicyOptions) {
        self.options = options;
    }

    /// Moves the host to `index` without animation.
    pub fn jump_to_index(
        &self,
        estimator: &mut OffsetEstimator,
        host: &mut impl ScrollHost,
        index: usize,
    ) -> Option<ScrollCommand> {
        let (offset, distance) = self.resolve(estimator, &*host, index)?;
        Some(Self::apply(host, offset, distance, ScrollMotion::Jump))
    }

    /// Moves the host to `index`, animating unless the scroll spans more than
    /// `large_scroll_threshold_in_items` items.
    pub fn scroll_to_index(
        &self,
        estimator: &mut OffsetEstimator,
        host: &mut impl ScrollHost,
        index: usize,
        duration_ms: u64,
        easing: Easing,
    ) -> Option<ScrollCommand> {
        let (offset, distance) = self.resolve(estimator, &*host, index)?;
        let motion = if distance > self.options.large_scroll_threshold_in_items {
            ScrollMotion::Jump
        } else {
            ScrollMotion::Animate {
                duration_ms,
                easing,
            }
        };
        Some(Self::apply(host, offset, distance, motion))
    }

    /// [`Self::scroll_to_index`] with the configured default duration and easing.
    pub fn animate_to_index(
        &self,
        estimator: &mut OffsetEstimator,
        host: &mut impl ScrollHost,
        index: usize,
    ) -> Option<ScrollCommand> {
        self.scroll_to_index(
            estimator,
            host,
            index,
            self.options.duration_ms,
            self.options.easing,
        )
    }

    fn resolve(
        &self,
        estimator: &mut OffsetEstimator,
        host: &impl ScrollHost,
        index: usize,
    ) -> Option<(f64, usize)> {
        let Some(max_extent) = host.current_max_extent() else {
            atrace!(index, "ScrollTargetPolicy: host has no layout metrics yet");
            return None;
        };
        let last = estimator.item_count().checked_sub(1)?;
        if index > last {
            atrace!(index, count = estimator.item_count(), "ScrollTargetPolicy: index out of range");
            return None;
        }

        let r = estimator.calculate_scroll_offset(index, max_extent);
        if !r.offset.is_finite() {
            awarn!(index, offset = r.offset, "ScrollTargetPolicy: non-finite offset");
            return None;
        }
        // The last item may deliberately overshoot so the host grows its scrollable region.
        let offset = if index == last || !max_extent.is_finite() {
            r.offset.max(0.0)
        } else {
            r.offset.clamp(0.0, max_extent.max(0.0))
        };
        Some((offset, r.distance))
    }

    fn apply(
        host: &mut impl ScrollHost,
        offset: f64,
        distance: usize,
        motion: ScrollMotion,
    ) -> ScrollCommand {
        atrace!(offset, distance, motion = ?motion, "ScrollTargetPolicy: move_to");
        host.move_to(offset, motion);
        ScrollCommand {
            offset,
            distance,
            motion,
        }
    }
}

use alloc::vec::Vec;

use crate::store::MetricsStore;
use crate::{EstimatorOptions, EstimatorStats, ItemMetrics, ItemState, ScrollOffset};

/// Converts item indexes into pixel offsets for a list whose item heights are learned lazily.
///
/// The estimator owns a [`MetricsStore`] plus the controller-level cursors:
/// - a high-water mark below which every offset is exact,
/// - the previous target (for distance bookkeeping),
/// - the most recent "bottom" target (for scrolling back up from the end).
///
/// Offset queries run in two steps. A catch-up pass walks forward from the high-water mark,
/// turning reported heights into exact cached offsets, and stops at the first unmeasured item.
/// Whatever lies between the new high-water mark and the target is then projected with the
/// running average in `O(1)`. Because the catch-up pass always resumes where the last one ended,
/// the total per-item work over the estimator's lifetime is `O(item_count)`.
///
/// The estimator is UI-agnostic and never fails: out-of-range indexes and bad heights degrade to
/// no-ops (see the individual methods).
#[derive(Clone, Debug)]
pub struct OffsetEstimator {
    options: EstimatorOptions,
    store: MetricsStore,
    last_measured: Option<usize>,
    // Exact offset just past `last_measured`.
    precise_end: f64,
    previous_target: usize,
    bottom_index: Option<usize>,
}

impl OffsetEstimator {
    /// Creates an estimator. A default height that is not finite and positive is replaced with
    /// [`EstimatorOptions::FALLBACK_ITEM_HEIGHT`].
    pub fn new(mut options: EstimatorOptions) -> Self {
        if !EstimatorOptions::is_valid_default_height(options.default_item_height) {
            ewarn!(
                default_item_height = options.default_item_height,
                "OffsetEstimator::new: rejected default height"
            );
            options.default_item_height = EstimatorOptions::FALLBACK_ITEM_HEIGHT;
        }
        edebug!(
            item_count = options.item_count,
            default_item_height = options.default_item_height,
            scroll_offset_start_index = options.scroll_offset_start_index,
            "OffsetEstimator::new"
        );
        Self {
            store: MetricsStore::new(options.item_count, options.default_item_height),
            options,
            last_measured: None,
            precise_end: 0.0,
            previous_target: 0,
            bottom_index: None,
        }
    }

    pub fn options(&self) -> &EstimatorOptions {
        &self.options
    }

    pub fn store(&self) -> &MetricsStore {
        &self.store
    }

    pub fn item_count(&self) -> usize {
        self.store.len()
    }

    pub fn average_item_height(&self) -> f64 {
        self.store.average().average()
    }

    pub fn measured_count(&self) -> usize {
        self.store.average().count()
    }

    /// Largest index such that every index in `0..=mark` has an exact cached offset.
    pub fn high_water_mark(&self) -> Option<usize> {
        self.last_measured
    }

    pub fn previous_target_index(&self) -> usize {
        self.previous_target
    }

    pub fn bottom_index(&self) -> Option<usize> {
        self.bottom_index
    }

    pub fn item(&self, index: usize) -> Option<ItemMetrics> {
        self.store.get(index).copied()
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.store.get(index).is_some_and(ItemMetrics::is_measured)
    }

    pub fn stats(&self) -> EstimatorStats {
        EstimatorStats {
            item_count: self.item_count(),
            average_item_height: self.average_item_height(),
            measured_count: self.measured_count(),
            high_water_mark: self.last_measured,
        }
    }

    /// Replaces the seed height. Only affects the live average while nothing is measured.
    ///
    /// Returns `false` (and changes nothing) when `height` is not finite and positive.
    pub fn set_default_item_height(&mut self, height: f64) -> bool {
        if !EstimatorOptions::is_valid_default_height(height) {
            ewarn!(height, "set_default_item_height: rejected default height");
            return false;
        }
        self.options.default_item_height = height;
        self.store.average_mut().set_default(height);
        true
    }

    /// Reports the measured height of `index`.
    ///
    /// Only the first report per index counts. Returns `false` for redundant reports,
    /// out-of-range indexes and heights that are not finite and non-negative.
    pub fn update_height(&mut self, index: usize, height: f64) -> bool {
        let applied = self.store.update_height(index, height);
        if applied {
            etrace!(index, height, "update_height");
        }
        applied
    }

    /// Applies a batch of measurements. Returns how many were applied.
    pub fn update_heights(&mut self, measurements: impl IntoIterator<Item = (usize, f64)>) -> usize {
        let mut applied = 0usize;
        for (index, height) in measurements {
            if self.update_height(index, height) {
                applied += 1;
            }
        }
        applied
    }

    /// Re-arms `index` so its next report counts again.
    ///
    /// The item's height is retracted from the running average. If the item sat below the
    /// high-water mark, the mark drops to `index - 1` and every calculated item above it is
    /// demoted to [`ItemState::Changed`], so the next catch-up pass recomputes those offsets.
    ///
    /// Returns `false` when `index` is out of range.
    pub fn reset_item(&mut self, index: usize) -> bool {
        let resume = self.store.get(index).map(|m| m.cached_offset);
        if !self.store.reset_item(index) {
            return false;
        }
        if let Some(last) = self.last_measured {
            if index <= last {
                for i in index + 1..=last {
                    if let Some(item) = self.store.get_mut(i) {
                        item.state = ItemState::Changed;
                    }
                }
                self.last_measured = index.checked_sub(1);
                self.precise_end = resume.unwrap_or(0.0);
            }
        }
        edebug!(index, high_water_mark = ?self.last_measured, "reset_item");
        true
    }

    /// Clears every record and counter. Required when the data source changes completely.
    pub fn reset_all(&mut self) {
        self.store.reset_all();
        self.last_measured = None;
        self.precise_end = 0.0;
        self.previous_target = 0;
        self.bottom_index = None;
        edebug!(item_count = self.store.len(), "reset_all");
    }

    /// Computes the scroll offset for `target_index`.
    ///
    /// `current_max_extent` is what the host currently believes the maximum scroll extent to be.
    /// It is only consulted for the last item and for the step directly above a previous bottom
    /// target.
    ///
    /// An out-of-range target yields a zero offset and distance and leaves all state untouched.
    pub fn calculate_scroll_offset(
        &mut self,
        target_index: usize,
        current_max_extent: f64,
    ) -> ScrollOffset {
        let count = self.store.len();
        if target_index >= count {
            ewarn!(target_index, count, "calculate_scroll_offset: out-of-bounds index");
            return ScrollOffset::default();
        }

        let distance = target_index.abs_diff(self.previous_target);
        self.previous_target = target_index;

        if let Some(offset) = self.exact_offset(target_index) {
            return ScrollOffset { offset, distance };
        }

        self.catch_up(target_index);
        if let Some(offset) = self.exact_offset(target_index) {
            return ScrollOffset { offset, distance };
        }

        let max_extent = if current_max_extent.is_finite() {
            current_max_extent.max(0.0)
        } else {
            0.0
        };
        let estimate = self.estimate_offset(target_index);
        let last = count - 1;

        let offset = if target_index == last {
            // Grow the host's extent when the estimate overshoots it, otherwise trust the host.
            let offset = if estimate > max_extent {
                estimate
            } else {
                max_extent
            };
            if let Some(item) = self.store.get_mut(last) {
                item.cached_offset = offset;
            }
            self.bottom_index = Some(target_index);
            offset
        } else if self
            .bottom_index
            .and_then(|b| b.checked_sub(1))
            .is_some_and(|above| above == target_index)
        {
            let gap = count - target_index - 1;
            self.bottom_index = Some(target_index);
            (max_extent - gap as f64 * self.average_item_height()).max(0.0)
        } else {
            estimate
        };

        etrace!(
            target_index,
            distance,
            offset,
            estimate,
            max_extent,
            "calculate_scroll_offset"
        );
        ScrollOffset { offset, distance }
    }

    /// Estimated offset of the last item, without touching distance or bottom bookkeeping.
    ///
    /// This still advances the catch-up pass.
    pub fn estimated_total_offset(&mut self) -> f64 {
        let Some(last) = self.store.len().checked_sub(1) else {
            return 0.0;
        };
        if let Some(offset) = self.exact_offset(last) {
            return offset;
        }
        self.catch_up(last);
        self.exact_offset(last)
            .unwrap_or_else(|| self.estimate_offset(last))
    }

    /// Exports the measured heights as `(index, height)` pairs (useful for persistence).
    pub fn export_measurements(&self) -> Vec<(usize, f64)> {
        let mut out = Vec::with_capacity(self.measured_count());
        self.store.for_each_measured(|i, h| out.push((i, h)));
        out
    }

    /// Replaces all state with the given measurements (useful when restoring a session).
    ///
    /// Performs a full reset first. Returns how many entries were applied.
    pub fn import_measurements(
        &mut self,
        entries: impl IntoIterator<Item = (usize, f64)>,
    ) -> usize {
        self.reset_all();
        let applied = self.update_heights(entries);
        edebug!(applied, "import_measurements");
        applied
    }

    fn exact_offset(&self, index: usize) -> Option<f64> {
        match self.last_measured {
            Some(last) if index <= last => self.store.get(index).map(|m| m.cached_offset),
            _ => None,
        }
    }

    fn catch_up(&mut self, target_index: usize) {
        let start_index = self.options.scroll_offset_start_index;
        let from = self.last_measured.map_or(0, |l| l + 1);
        let mut running = self.precise_end;
        let mut i = from;
        while i <= target_index {
            let Some(item) = self.store.get_mut(i) else {
                break;
            };
            let height = match (item.state, item.measured_height) {
                (ItemState::Initial, _) | (_, None) => break,
                (ItemState::Changed | ItemState::Calculated, Some(h)) => h,
            };
            item.cached_offset = running;
            item.state = ItemState::Calculated;
            if i > start_index {
                running += height;
            }
            self.last_measured = Some(i);
            i += 1;
        }
        self.precise_end = running;
        if i > from {
            etrace!(from, to = i - 1, precise_end = running, "catch-up pass");
        }
    }

    fn estimate_offset(&self, target_index: usize) -> f64 {
        let first_unknown = self
            .last_measured
            .map_or(0, |l| l + 1)
            .max(self.options.scroll_offset_start_index.saturating_add(1));
        let remaining = target_index.saturating_sub(first_unknown);
        self.precise_end + remaining as f64 * self.average_item_height()
    }
}

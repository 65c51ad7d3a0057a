use alloc::vec::Vec;

use crate::average::AverageEstimator;
use crate::{ItemMetrics, ItemState};

/// Fixed-size, index-addressed arena of [`ItemMetrics`].
///
/// Allocated once for the full item count and never resized. Every reported height is forwarded
/// to the embedded [`AverageEstimator`] so the mean always covers exactly the measured items.
#[derive(Clone, Debug)]
pub struct MetricsStore {
    items: Vec<ItemMetrics>,
    average: AverageEstimator,
}

impl MetricsStore {
    pub fn new(item_count: usize, default_item_height: f64) -> Self {
        Self {
            items: alloc::vec![ItemMetrics::default(); item_count],
            average: AverageEstimator::new(default_item_height),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ItemMetrics> {
        self.items.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut ItemMetrics> {
        self.items.get_mut(index)
    }

    pub fn state(&self, index: usize) -> Option<ItemState> {
        self.items.get(index).map(|m| m.state)
    }

    pub fn average(&self) -> &AverageEstimator {
        &self.average
    }

    pub(crate) fn average_mut(&mut self) -> &mut AverageEstimator {
        &mut self.average
    }

    /// Records the first reported height for `index`.
    ///
    /// First write wins: returns `false` (and changes nothing) when `index` is out of range, the
    /// item was already measured, or `height` is not a finite non-negative number.
    pub fn update_height(&mut self, index: usize, height: f64) -> bool {
        if !height.is_finite() || height < 0.0 {
            ewarn!(index, height, "MetricsStore: rejected height");
            return false;
        }
        let Some(item) = self.items.get_mut(index) else {
            ewarn!(index, count = self.items.len(), "MetricsStore: out-of-bounds index");
            return false;
        };
        if item.state != ItemState::Initial {
            return false;
        }
        item.measured_height = Some(height);
        item.state = ItemState::Changed;
        self.average.accumulate(height);
        true
    }

    /// Re-arms `index` to [`ItemState::Initial`], clears its cached offset and retracts its
    /// height (if any) from the average.
    ///
    /// Returns `false` when `index` is out of range.
    pub fn reset_item(&mut self, index: usize) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        if let Some(height) = item.measured_height {
            self.average.retract(height);
        }
        item.clear();
        true
    }

    pub fn reset_all(&mut self) {
        for item in &mut self.items {
            item.clear();
        }
        self.average.reset();
    }

    /// Iterates over `(index, height)` for every measured item, in index order.
    pub fn for_each_measured(&self, mut f: impl FnMut(usize, f64)) {
        for (i, item) in self.items.iter().enumerate() {
            if let Some(h) = item.measured_height {
                f(i, h);
            }
        }
    }
}

/// Lifecycle of a single item's metrics.
///
/// Transitions only move forward (`Initial` → `Changed` → `Calculated`); the only way back to
/// `Initial` is an explicit reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemState {
    /// No height has been reported yet.
    #[default]
    Initial,
    /// A height was reported but the catch-up pass has not assigned an offset yet.
    Changed,
    /// `cached_offset` is exact.
    Calculated,
}

/// Per-index record held by [`crate::MetricsStore`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemMetrics {
    /// First reported height, `None` while unmeasured.
    pub measured_height: Option<f64>,
    /// Start offset of the item from the top of the list (pixels).
    ///
    /// Only exact when `state == ItemState::Calculated`.
    pub cached_offset: f64,
    pub state: ItemState,
}

impl ItemMetrics {
    pub fn is_measured(&self) -> bool {
        self.state != ItemState::Initial
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Read-only telemetry snapshot of an [`crate::OffsetEstimator`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EstimatorStats {
    pub item_count: usize,
    pub average_item_height: f64,
    pub measured_count: usize,
    /// Largest index such that every index in `0..=high_water_mark` is calculated.
    pub high_water_mark: Option<usize>,
}

/// Result of an offset query.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOffset {
    /// Pixels from the top of the list.
    pub offset: f64,
    /// Number of items between this target and the previous one.
    pub distance: usize,
}

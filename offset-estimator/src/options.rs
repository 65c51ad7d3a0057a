/// Configuration for [`crate::OffsetEstimator`].
///
/// `item_count` is fixed for the lifetime of an estimator. When the underlying data source
/// changes completely, build a new estimator (or call `reset_all`).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EstimatorOptions {
    pub item_count: usize,
    /// Seed for the running average, used until the first height is reported.
    pub default_item_height: f64,
    /// Items at or below this index are treated as always on-screen: their heights count towards
    /// the running average but never towards item offsets.
    pub scroll_offset_start_index: usize,
}

impl EstimatorOptions {
    pub const DEFAULT_SCROLL_OFFSET_START_INDEX: usize = 1;
    /// Seed used in place of a default height that is not finite and positive.
    pub const FALLBACK_ITEM_HEIGHT: f64 = 1.0;

    /// Creates options for `item_count` items seeded with `default_item_height`.
    pub fn new(item_count: usize, default_item_height: f64) -> Self {
        Self {
            item_count,
            default_item_height,
            scroll_offset_start_index: Self::DEFAULT_SCROLL_OFFSET_START_INDEX,
        }
    }

    pub fn with_default_item_height(mut self, default_item_height: f64) -> Self {
        self.default_item_height = default_item_height;
        self
    }

    pub fn with_scroll_offset_start_index(mut self, scroll_offset_start_index: usize) -> Self {
        self.scroll_offset_start_index = scroll_offset_start_index;
        self
    }

    /// Whether `height` can seed the running average.
    pub fn is_valid_default_height(height: f64) -> bool {
        height.is_finite() && height > 0.0
    }
}

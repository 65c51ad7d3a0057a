/// Incremental running mean of reported item heights.
///
/// The update is the plain `(average * count + height) / (count + 1)` form rather than Welford's
/// method. Heights are small positive magnitudes and `count` is bounded by the list length, so the
/// accumulated rounding error stays far below a pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AverageEstimator {
    default: f64,
    average: f64,
    count: usize,
}

impl AverageEstimator {
    pub fn new(default: f64) -> Self {
        Self {
            default,
            average: default,
            count: 0,
        }
    }

    pub fn average(&self) -> f64 {
        self.average
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// The seed returned while no height has been accumulated.
    pub fn default_height(&self) -> f64 {
        self.default
    }

    pub fn accumulate(&mut self, height: f64) {
        let n = self.count as f64;
        self.average = (self.average * n + height) / (n + 1.0);
        self.count += 1;
    }

    /// Removes a previously accumulated `height` from the mean.
    ///
    /// Retracting the last sample falls back to the seed.
    pub fn retract(&mut self, height: f64) {
        match self.count {
            0 => {}
            1 => {
                self.count = 0;
                self.average = self.default;
            }
            _ => {
                let n = self.count as f64;
                self.average = (self.average * n - height) / (n - 1.0);
                self.count -= 1;
            }
        }
    }

    /// Replaces the seed.
    ///
    /// The live average only follows when nothing has been accumulated yet; a learned average is
    /// never overwritten.
    pub fn set_default(&mut self, height: f64) {
        self.default = height;
        if self.count == 0 {
            self.average = height;
        }
    }

    /// Drops every sample and reseeds the average with the configured default.
    pub fn reset(&mut self) {
        self.average = self.default;
        self.count = 0;
    }
}

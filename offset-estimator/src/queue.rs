use alloc::collections::VecDeque;

use crate::OffsetEstimator;

/// A single size report from the host's layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasureEvent {
    pub index: usize,
    pub height: f64,
}

/// Outcome of [`MeasurementQueue::drain_into`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrainReport {
    pub applied: usize,
    /// Redundant, out-of-range or invalid reports.
    pub ignored: usize,
}

/// Inbound channel for post-layout size reports.
///
/// Hosts usually learn item sizes from callbacks that fire after a layout pass. Push those
/// reports here as they arrive and drain them into the estimator on the same thread, right before
/// the next offset query. Events are applied one at a time in arrival order.
#[derive(Clone, Debug, Default)]
pub struct MeasurementQueue {
    pending: VecDeque<MeasureEvent>,
}

impl MeasurementQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, index: usize, height: f64) {
        self.pending.push_back(MeasureEvent { index, height });
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn drain_into(&mut self, estimator: &mut OffsetEstimator) -> DrainReport {
        let mut report = DrainReport::default();
        while let Some(event) = self.pending.pop_front() {
            if estimator.update_height(event.index, event.height) {
                report.applied += 1;
            } else {
                report.ignored += 1;
            }
        }
        if report.applied + report.ignored > 0 {
            etrace!(
                applied = report.applied,
                ignored = report.ignored,
                "MeasurementQueue::drain_into"
            );
        }
        report
    }
}

impl Extend<(usize, f64)> for MeasurementQueue {
    fn extend<I: IntoIterator<Item = (usize, f64)>>(&mut self, iter: I) {
        for (index, height) in iter {
            self.push(index, height);
        }
    }
}

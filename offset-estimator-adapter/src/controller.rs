use offset_estimator::{EstimatorOptions, MeasurementQueue, OffsetEstimator};

use crate::{Easing, PolicyOptions, ScrollCommand, ScrollHost, ScrollTargetPolicy};

/// Wires an [`OffsetEstimator`] to a [`ScrollHost`] through a [`ScrollTargetPolicy`].
///
/// The controller owns all three by composition. Size reports can be applied immediately
/// (`on_item_measured`) or queued from post-layout callbacks (`queue_measurement`); queued
/// reports are drained before every scroll request.
#[derive(Clone, Debug)]
pub struct Controller<H> {
    estimator: OffsetEstimator,
    policy: ScrollTargetPolicy,
    host: H,
    pending: MeasurementQueue,
}

impl<H: ScrollHost> Controller<H> {
    pub fn new(options: EstimatorOptions, policy: PolicyOptions, host: H) -> Self {
        Self::from_parts(OffsetEstimator::new(options), ScrollTargetPolicy::new(policy), host)
    }

    pub fn from_parts(estimator: OffsetEstimator, policy: ScrollTargetPolicy, host: H) -> Self {
        Self {
            estimator,
            policy,
            host,
            pending: MeasurementQueue::new(),
        }
    }

    pub fn estimator(&self) -> &OffsetEstimator {
        &self.estimator
    }

    pub fn estimator_mut(&mut self) -> &mut OffsetEstimator {
        &mut self.estimator
    }

    pub fn policy(&self) -> &ScrollTargetPolicy {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut ScrollTargetPolicy {
        &mut self.policy
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_parts(self) -> (OffsetEstimator, ScrollTargetPolicy, H) {
        (self.estimator, self.policy, self.host)
    }

    pub fn on_item_measured(&mut self, index: usize, height: f64) -> bool {
        self.estimator.update_height(index, height)
    }

    pub fn on_items_measured(&mut self, measurements: impl IntoIterator<Item = (usize, f64)>) -> usize {
        self.estimator.update_heights(measurements)
    }

    /// Queues a size report; it is applied before the next scroll request.
    pub fn queue_measurement(&mut self, index: usize, height: f64) {
        self.pending.push(index, height);
    }

    pub fn pending_measurements(&self) -> usize {
        self.pending.len()
    }

    /// Applies queued size reports. Returns how many were applied.
    pub fn flush_measurements(&mut self) -> usize {
        self.pending.drain_into(&mut self.estimator).applied
    }

    pub fn jump_to_index(&mut self, index: usize) -> Option<ScrollCommand> {
        self.flush_measurements();
        self.policy
            .jump_to_index(&mut self.estimator, &mut self.host, index)
    }

    pub fn scroll_to_index(
        &mut self,
        index: usize,
        duration_ms: u64,
        easing: Easing,
    ) -> Option<ScrollCommand> {
        self.flush_measurements();
        self.policy.scroll_to_index(
            &mut self.estimator,
            &mut self.host,
            index,
            duration_ms,
            easing,
        )
    }

    pub fn animate_to_index(&mut self, index: usize) -> Option<ScrollCommand> {
        self.flush_measurements();
        self.policy
            .animate_to_index(&mut self.estimator, &mut self.host, index)
    }

    pub fn reset_item(&mut self, index: usize) -> bool {
        self.estimator.reset_item(index)
    }

    /// Clears every measurement (including queued ones). Call this when the data source changes
    /// completely.
    pub fn reset(&mut self) {
        adebug!(item_count = self.estimator.item_count(), "Controller::reset");
        self.pending.clear();
        self.estimator.reset_all();
    }
}

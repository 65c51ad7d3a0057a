//! A headless offset-estimation engine for virtualized lists with unknown item heights.
//!
//! For host-facing utilities (scroll target policy, tween-driven hosts), see the
//! `offset-estimator-adapter` crate.
//!
//! Given a list of `N` items whose heights are only known once rendered, this crate computes a
//! pixel offset for any target index long before that index has been laid out, and refines the
//! estimate as heights are reported:
//! - exact offsets are cached incrementally behind a high-water mark,
//! - everything past the mark is projected in `O(1)` from a running average.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - measured item heights (first report per index wins)
//! - the current maximum scroll extent when querying offsets
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod average;
mod estimator;
mod options;
mod queue;
mod store;
mod types;

#[cfg(test)]
mod tests;

pub use average::AverageEstimator;
pub use estimator::OffsetEstimator;
pub use options::EstimatorOptions;
pub use queue::{DrainReport, MeasureEvent, MeasurementQueue};
pub use store::MetricsStore;
pub use types::{EstimatorStats, ItemMetrics, ItemState, ScrollOffset};

use crate::*;

use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }

    fn gen_height(&mut self) -> f64 {
        // Whole pixels keep the prefix sums exact.
        self.gen_range_usize(1, 200) as f64
    }

    fn shuffle(&mut self, v: &mut [usize]) {
        for i in (1..v.len()).rev() {
            let j = self.gen_range_usize(0, i + 1);
            v.swap(i, j);
        }
    }
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn expected_offset(heights: &[f64], start_index: usize, index: usize) -> f64 {
    heights
        .iter()
        .enumerate()
        .take(index)
        .filter(|(i, _)| *i > start_index)
        .map(|(_, h)| *h)
        .sum()
}

fn estimator(count: usize, default_height: f64) -> OffsetEstimator {
    OffsetEstimator::new(EstimatorOptions::new(count, default_height))
}

#[test]
fn unmeasured_last_item_projects_with_default_height() {
    let mut e = estimator(10_000, 60.0);
    let r = e.calculate_scroll_offset(9_999, 0.0);
    // Items 0 and 1 are leading items; only 2..=9998 are projected, so 9_997 rows rather
    // than the 9_998 a count from index 1 would give.
    assert_eq!(r.offset, 9_997.0 * 60.0);
    assert_eq!(r.distance, 9_999);
    assert_eq!(e.bottom_index(), Some(9_999));
    assert_eq!(e.item(9_999).unwrap().cached_offset, r.offset);
    assert_eq!(e.item(9_999).unwrap().state, ItemState::Initial);
    assert_eq!(e.high_water_mark(), None);
}

#[test]
fn last_item_trusts_larger_host_extent() {
    let mut e = estimator(100, 10.0);
    let r = e.calculate_scroll_offset(99, 5_000.0);
    assert_eq!(r.offset, 5_000.0);
    assert_eq!(e.item(99).unwrap().cached_offset, 5_000.0);
}

#[test]
fn full_measurement_replaces_estimate_with_exact_offset() {
    let mut e = estimator(10_000, 60.0);
    let before = e.calculate_scroll_offset(9_999, 0.0);
    assert_eq!(before.offset, 599_820.0);

    for i in 0..10_000 {
        assert!(e.update_height(i, 100.0));
    }
    let after = e.calculate_scroll_offset(9_999, before.offset);
    assert_eq!(after.offset, 999_700.0);
    assert_eq!(after.distance, 0);
    assert_eq!(e.high_water_mark(), Some(9_999));
    assert_eq!(e.item(9_999).unwrap().state, ItemState::Calculated);
}

#[test]
fn converged_offsets_match_prefix_sums() {
    let mut rng = Lcg::new(7);
    for start_index in [0usize, 1, 3] {
        let count = 300;
        let heights: Vec<f64> = (0..count).map(|_| rng.gen_height()).collect();
        let mut e = OffsetEstimator::new(
            EstimatorOptions::new(count, 40.0).with_scroll_offset_start_index(start_index),
        );
        let mut order: Vec<usize> = (0..count).collect();
        rng.shuffle(&mut order);
        for &i in &order {
            e.update_height(i, heights[i]);
        }

        e.calculate_scroll_offset(count - 1, 0.0);
        assert_eq!(e.high_water_mark(), Some(count - 1));

        for _ in 0..200 {
            let k = rng.gen_range_usize(0, count);
            let r = e.calculate_scroll_offset(k, 0.0);
            assert!(approx_eq(r.offset, expected_offset(&heights, start_index, k)));
        }
    }
}

#[test]
fn leading_items_never_shift_offsets() {
    let mut e = estimator(20, 10.0);
    e.update_height(0, 500.0);
    e.update_height(1, 500.0);
    for i in 2..20 {
        e.update_height(i, 10.0);
    }
    assert_eq!(e.calculate_scroll_offset(2, 0.0).offset, 0.0);
    assert_eq!(e.calculate_scroll_offset(5, 0.0).offset, 30.0);
    // Leading heights still feed the average.
    assert_eq!(e.measured_count(), 20);
    assert!(approx_eq(e.average_item_height(), (1_000.0 + 18.0 * 10.0) / 20.0));
}

#[test]
fn measuring_index_zero_counts_towards_average_only() {
    let mut e = estimator(10, 50.0);
    assert!(e.update_height(0, 80.0));
    assert_eq!(e.measured_count(), 1);
    assert_eq!(e.average_item_height(), 80.0);

    e.calculate_scroll_offset(5, 0.0);
    assert_eq!(e.high_water_mark(), Some(0));
    assert_eq!(e.item(0).unwrap().cached_offset, 0.0);
}

#[test]
fn repeated_height_reports_are_ignored() {
    let mut e = estimator(10, 50.0);
    assert!(e.update_height(3, 10.0));
    let stats = e.stats();
    assert!(!e.update_height(3, 99.0));
    assert_eq!(e.stats(), stats);
    assert_eq!(e.item(3).unwrap().measured_height, Some(10.0));
    assert_eq!(e.item(3).unwrap().state, ItemState::Changed);
}

#[test]
fn invalid_heights_are_rejected() {
    let mut e = estimator(10, 50.0);
    assert!(!e.update_height(1, f64::NAN));
    assert!(!e.update_height(1, f64::INFINITY));
    assert!(!e.update_height(1, -1.0));
    assert!(!e.is_measured(1));
    assert!(e.update_height(1, 0.0));
    assert!(e.is_measured(1));
    assert_eq!(e.measured_count(), 1);
}

#[test]
fn out_of_range_indexes_are_no_ops() {
    let mut e = estimator(10, 50.0);
    e.calculate_scroll_offset(4, 0.0);

    assert!(!e.update_height(10, 5.0));
    assert!(!e.reset_item(10));
    assert_eq!(e.calculate_scroll_offset(10, 1_000.0), ScrollOffset::default());
    assert_eq!(e.calculate_scroll_offset(usize::MAX, 1_000.0), ScrollOffset::default());
    assert_eq!(e.previous_target_index(), 4);
    assert_eq!(e.measured_count(), 0);
}

#[test]
fn empty_list_yields_zero() {
    let mut e = estimator(0, 50.0);
    assert_eq!(e.calculate_scroll_offset(0, 100.0), ScrollOffset::default());
    assert_eq!(e.estimated_total_offset(), 0.0);
    assert!(!e.update_height(0, 10.0));
}

#[test]
fn distance_tracks_previous_target() {
    let mut e = estimator(100, 10.0);
    assert_eq!(e.calculate_scroll_offset(10, 0.0).distance, 10);
    assert_eq!(e.calculate_scroll_offset(4, 0.0).distance, 6);
    assert_eq!(e.calculate_scroll_offset(4, 0.0).distance, 0);
    assert_eq!(e.previous_target_index(), 4);
}

#[test]
fn fast_path_returns_cached_value_without_mutation() {
    let mut e = estimator(50, 10.0);
    for i in 0..30 {
        e.update_height(i, (i % 7 + 1) as f64 * 3.0);
    }
    let first = e.calculate_scroll_offset(20, 0.0);
    assert_eq!(e.high_water_mark(), Some(20));

    let items: Vec<ItemMetrics> = (0..50).map(|i| e.item(i).unwrap()).collect();
    let stats = e.stats();
    for _ in 0..3 {
        assert_eq!(e.calculate_scroll_offset(20, 123.0).offset, first.offset);
    }
    let after: Vec<ItemMetrics> = (0..50).map(|i| e.item(i).unwrap()).collect();
    assert_eq!(items, after);
    assert_eq!(e.stats(), stats);
}

#[test]
fn catch_up_stops_at_first_unmeasured_item() {
    let mut e = estimator(100, 10.0);
    for i in (0..=5).chain(7..=10) {
        e.update_height(i, 20.0);
    }
    e.calculate_scroll_offset(20, 0.0);
    assert_eq!(e.high_water_mark(), Some(5));
    assert_eq!(e.item(7).unwrap().state, ItemState::Changed);

    e.update_height(6, 20.0);
    e.calculate_scroll_offset(20, 0.0);
    assert_eq!(e.high_water_mark(), Some(10));
}

#[test]
fn catch_up_never_passes_the_target() {
    let mut e = estimator(100, 10.0);
    for i in 0..100 {
        e.update_height(i, 20.0);
    }
    let r = e.calculate_scroll_offset(30, 0.0);
    assert_eq!(e.high_water_mark(), Some(30));
    assert_eq!(r.offset, 28.0 * 20.0);
    assert_eq!(e.item(31).unwrap().state, ItemState::Changed);
}

#[test]
fn tail_is_projected_from_high_water_mark() {
    let mut e = estimator(100, 50.0);
    for i in 0..=10 {
        e.update_height(i, 20.0);
    }
    let r = e.calculate_scroll_offset(50, 0.0);
    assert_eq!(e.high_water_mark(), Some(10));
    // Exact part: items 2..=10. Projected: items 11..=49 at the learned average.
    assert!(approx_eq(r.offset, 9.0 * 20.0 + 39.0 * 20.0));
}

#[test]
fn catch_up_cost_is_bounded_by_target_distance() {
    let mut rng = Lcg::new(42);
    let count = 500;
    let mut e = estimator(count, 30.0);
    for _ in 0..400 {
        for _ in 0..rng.gen_range_usize(0, 8) {
            let i = rng.gen_range_usize(0, count);
            e.update_height(i, rng.gen_height());
        }

        let target = rng.gen_range_usize(0, count);
        let before: Vec<ItemState> = (0..count).map(|i| e.store().state(i).unwrap()).collect();
        let mark_before = e.high_water_mark();
        e.calculate_scroll_offset(target, 0.0);

        let transitioned = (0..count)
            .filter(|&i| e.store().state(i).unwrap() != before[i])
            .count();
        let bound = match mark_before {
            Some(m) => target.saturating_sub(m),
            None => target + 1,
        };
        assert!(transitioned <= bound, "transitioned={transitioned} bound={bound}");
    }
}

#[test]
fn cached_offsets_are_monotonic() {
    let mut rng = Lcg::new(3);
    let count = 400;
    let mut e = estimator(count, 30.0);
    for _ in 0..300 {
        let i = rng.gen_range_usize(0, count);
        e.update_height(i, rng.gen_height());
        if rng.next_u64() % 4 == 0 {
            e.calculate_scroll_offset(rng.gen_range_usize(0, count), 0.0);
        }
        if rng.next_u64() % 23 == 0 {
            e.reset_item(rng.gen_range_usize(0, count));
        }

        let mut prev = None::<f64>;
        for i in 0..count {
            let item = e.item(i).unwrap();
            if item.state != ItemState::Calculated {
                continue;
            }
            if let Some(p) = prev {
                assert!(p <= item.cached_offset);
            }
            prev = Some(item.cached_offset);
        }
    }
}

#[test]
fn average_matches_mean_of_reported_heights() {
    let mut rng = Lcg::new(11);
    let count = 256;
    let heights: Vec<f64> = (0..count).map(|_| rng.gen_height()).collect();
    let mut order: Vec<usize> = (0..count).collect();
    rng.shuffle(&mut order);

    let mut e = estimator(count, 60.0);
    for &i in &order[..100] {
        e.update_height(i, heights[i]);
        e.update_height(i, 1_000.0);
    }
    let mean = order[..100].iter().map(|&i| heights[i]).sum::<f64>() / 100.0;
    assert_eq!(e.measured_count(), 100);
    assert!(approx_eq(e.average_item_height(), mean));
}

#[test]
fn upward_step_from_bottom_anchors_to_host_extent() {
    let mut e = estimator(100, 10.0);
    assert_eq!(e.calculate_scroll_offset(99, 500.0).offset, 970.0);

    assert_eq!(e.calculate_scroll_offset(98, 2_000.0).offset, 1_990.0);
    assert_eq!(e.bottom_index(), Some(98));
    assert_eq!(e.calculate_scroll_offset(97, 2_000.0).offset, 1_980.0);
    assert_eq!(e.bottom_index(), Some(97));

    // A non-adjacent query falls back to the plain projection.
    assert_eq!(e.calculate_scroll_offset(50, 2_000.0).offset, 480.0);
    assert_eq!(e.bottom_index(), Some(97));
}

#[test]
fn non_adjacent_query_after_bottom_uses_projection() {
    let mut e = estimator(100, 10.0);
    e.calculate_scroll_offset(99, 0.0);
    assert_eq!(e.calculate_scroll_offset(90, 2_000.0).offset, 880.0);
}

#[test]
fn upward_step_is_floored_at_zero() {
    let mut e = estimator(100, 10.0);
    e.calculate_scroll_offset(99, 0.0);
    assert_eq!(e.calculate_scroll_offset(98, 0.0).offset, 0.0);
}

#[test]
fn non_finite_host_extent_is_treated_as_zero() {
    let mut e = estimator(100, 10.0);
    assert_eq!(e.calculate_scroll_offset(99, f64::NAN).offset, 970.0);
}

#[test]
fn reset_item_retracts_average_and_lowers_mark() {
    let mut e = estimator(10, 50.0);
    for i in 0..10 {
        e.update_height(i, if i == 3 { 40.0 } else { 10.0 });
    }
    e.calculate_scroll_offset(9, 0.0);
    assert_eq!(e.high_water_mark(), Some(9));
    assert!(approx_eq(e.average_item_height(), 13.0));

    assert!(e.reset_item(3));
    assert_eq!(e.measured_count(), 9);
    assert!(approx_eq(e.average_item_height(), 10.0));
    assert_eq!(e.high_water_mark(), Some(2));
    assert_eq!(e.item(3).unwrap(), ItemMetrics::default());
    for i in 4..10 {
        assert_eq!(e.item(i).unwrap().state, ItemState::Changed);
    }

    assert!(e.update_height(3, 10.0));
    assert_eq!(e.calculate_scroll_offset(9, 0.0).offset, 70.0);
    assert_eq!(e.high_water_mark(), Some(9));
}

#[test]
fn reset_item_above_mark_keeps_exact_prefix() {
    let mut e = estimator(10, 50.0);
    for i in 0..5 {
        e.update_height(i, 10.0);
    }
    e.update_height(7, 10.0);
    e.calculate_scroll_offset(8, 0.0);
    assert_eq!(e.high_water_mark(), Some(4));

    assert!(e.reset_item(7));
    assert_eq!(e.high_water_mark(), Some(4));
    assert_eq!(e.measured_count(), 5);
    assert_eq!(e.calculate_scroll_offset(4, 0.0).offset, 20.0);
}

#[test]
fn reset_all_reseeds_everything() {
    let mut e = estimator(10, 50.0);
    for i in 0..10 {
        e.update_height(i, 10.0);
    }
    e.calculate_scroll_offset(9, 0.0);
    e.calculate_scroll_offset(8, 0.0);

    e.reset_all();
    assert_eq!(e.high_water_mark(), None);
    assert_eq!(e.measured_count(), 0);
    assert_eq!(e.average_item_height(), 50.0);
    assert_eq!(e.previous_target_index(), 0);
    assert_eq!(e.bottom_index(), None);
    assert!((0..10).all(|i| e.item(i).unwrap() == ItemMetrics::default()));
    assert!(e.update_height(4, 10.0));
}

#[test]
fn default_height_only_applies_before_first_measurement() {
    let mut e = estimator(10, 50.0);
    assert!(e.set_default_item_height(30.0));
    assert_eq!(e.average_item_height(), 30.0);

    e.update_height(2, 12.0);
    assert!(e.set_default_item_height(99.0));
    assert_eq!(e.average_item_height(), 12.0);

    e.reset_all();
    assert_eq!(e.average_item_height(), 99.0);
}

#[test]
fn average_estimator_retracts_to_seed() {
    let mut a = AverageEstimator::new(25.0);
    a.accumulate(10.0);
    a.accumulate(20.0);
    assert_eq!(a.average(), 15.0);
    a.retract(20.0);
    assert_eq!(a.average(), 10.0);
    assert_eq!(a.count(), 1);
    a.retract(10.0);
    assert_eq!(a.average(), 25.0);
    assert_eq!(a.count(), 0);
    a.retract(10.0);
    assert_eq!(a.count(), 0);
}

#[test]
fn estimated_total_offset_leaves_bookkeeping_alone() {
    let mut e = estimator(100, 10.0);
    e.calculate_scroll_offset(40, 0.0);
    for i in 0..20 {
        e.update_height(i, 5.0);
    }
    let total = e.estimated_total_offset();
    assert_eq!(e.high_water_mark(), Some(19));
    assert!(approx_eq(total, 18.0 * 5.0 + 79.0 * 5.0));
    assert_eq!(e.previous_target_index(), 40);
    assert_eq!(e.bottom_index(), None);
}

#[test]
fn measurements_can_be_exported_and_restored() {
    let mut e = estimator(50, 20.0);
    for i in [0usize, 1, 2, 3, 10, 30] {
        e.update_height(i, (i + 1) as f64);
    }
    e.calculate_scroll_offset(12, 0.0);
    let exported = e.export_measurements();
    assert_eq!(exported.len(), 6);
    assert_eq!(exported[4], (10, 11.0));

    let mut restored = estimator(50, 20.0);
    restored.update_height(5, 1.0);
    assert_eq!(restored.import_measurements(exported), 6);
    assert!(!restored.is_measured(5));
    assert_eq!(restored.stats().average_item_height, e.average_item_height());
    assert_eq!(
        restored.calculate_scroll_offset(12, 0.0).offset,
        e.calculate_scroll_offset(12, 0.0).offset
    );
}

#[test]
fn queue_drains_in_arrival_order() {
    let mut e = estimator(10, 50.0);
    let mut q = MeasurementQueue::new();
    q.push(2, 10.0);
    q.push(2, 30.0);
    q.extend([(3, 10.0), (42, 10.0), (4, -5.0)]);
    assert_eq!(q.len(), 5);

    let report = q.drain_into(&mut e);
    assert_eq!(report, DrainReport { applied: 2, ignored: 3 });
    assert!(q.is_empty());
    assert_eq!(e.item(2).unwrap().measured_height, Some(10.0));
    assert_eq!(e.measured_count(), 2);
}

#[test]
fn store_reset_item_clears_unmeasured_cached_offset() {
    let mut e = estimator(10, 50.0);
    e.calculate_scroll_offset(9, 0.0);
    assert!(e.item(9).unwrap().cached_offset > 0.0);
    assert!(e.reset_item(9));
    assert_eq!(e.item(9).unwrap(), ItemMetrics::default());
    assert_eq!(e.measured_count(), 0);
}

#[test]
fn invalid_default_height_falls_back_at_construction() {
    for bad in [f64::NAN, f64::INFINITY, 0.0, -10.0] {
        let mut e = estimator(100, bad);
        assert_eq!(e.options().default_item_height, EstimatorOptions::FALLBACK_ITEM_HEIGHT);
        assert_eq!(e.average_item_height(), EstimatorOptions::FALLBACK_ITEM_HEIGHT);
        let r = e.calculate_scroll_offset(50, 1_000.0);
        assert_eq!(r.offset, 48.0);
    }
}

#[test]
fn invalid_default_height_updates_are_rejected() {
    let mut e = estimator(10, 50.0);
    for bad in [f64::NAN, f64::NEG_INFINITY, 0.0, -1.0] {
        assert!(!e.set_default_item_height(bad));
    }
    assert_eq!(e.average_item_height(), 50.0);
    assert_eq!(e.options().default_item_height, 50.0);

    e.reset_all();
    assert_eq!(e.average_item_height(), 50.0);
}

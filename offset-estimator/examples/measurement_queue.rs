use offset_estimator::{EstimatorOptions, MeasurementQueue, OffsetEstimator};

fn main() {
    // Example: post-layout size callbacks push into a queue; the frame loop drains it before
    // querying offsets.
    let mut e = OffsetEstimator::new(EstimatorOptions::new(1_000, 40.0));
    let mut q = MeasurementQueue::new();

    // A relayout may report the same item twice; only the first report counts.
    q.extend([(0, 32.0), (1, 32.0), (2, 56.0), (2, 60.0), (3, 44.0)]);

    let report = q.drain_into(&mut e);
    println!("applied={} ignored={}", report.applied, report.ignored);

    let r = e.calculate_scroll_offset(999, 20_000.0);
    println!("bottom={} stats={:?}", r.offset, e.stats());

    // Persist and restore measured heights.
    let saved = e.export_measurements();
    let mut restored = OffsetEstimator::new(*e.options());
    restored.import_measurements(saved);
    println!("restored stats={:?}", restored.stats());
}

use offset_estimator::{EstimatorOptions, OffsetEstimator};

fn main() {
    let mut e = OffsetEstimator::new(EstimatorOptions::new(10_000, 60.0));

    // Nothing rendered yet: the whole list is projected from the seed height.
    let r = e.calculate_scroll_offset(5_000, 0.0);
    println!("estimate(5000)={} distance={}", r.offset, r.distance);

    // The host lays out the first screenful and reports real heights.
    for i in 0..40 {
        e.update_height(i, 48.0 + (i % 3) as f64 * 8.0);
    }

    let r = e.calculate_scroll_offset(5_000, 0.0);
    println!(
        "refined(5000)={} avg={:.2} measured={} high_water_mark={:?}",
        r.offset,
        e.average_item_height(),
        e.measured_count(),
        e.high_water_mark()
    );

    // Offsets below the high-water mark are exact and cached.
    let r = e.calculate_scroll_offset(20, 0.0);
    println!("exact(20)={} distance={}", r.offset, r.distance);
}

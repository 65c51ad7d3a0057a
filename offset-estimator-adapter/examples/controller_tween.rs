use offset_estimator::EstimatorOptions;
use offset_estimator_adapter::{Controller, PolicyOptions, TweenScrollHost};

fn main() {
    // Example: a frame-driven host without native animation.
    //
    // An adapter would:
    // - report layout extents and measured heights as they arrive
    // - issue scroll-to-index commands
    // - call tick(now_ms) in a frame loop and apply the returned offset
    let mut c = Controller::new(
        EstimatorOptions::new(10_000, 24.0),
        PolicyOptions::default(),
        TweenScrollHost::new().with_max_extent(240_000.0),
    );

    for i in 0..30 {
        c.queue_measurement(i, 20.0 + (i % 4) as f64 * 6.0);
    }

    let cmd = c.animate_to_index(25);
    println!("short scroll: {cmd:?}");

    let mut now_ms = 0u64;
    while let Some(off) = c.host_mut().tick(now_ms) {
        if now_ms % 96 == 0 {
            println!("t={now_ms} off={off:.1}");
        }
        now_ms += 16;
    }

    // Far targets jump straight to the projected offset.
    let cmd = c.animate_to_index(9_999);
    println!("long scroll: {cmd:?} stats={:?}", c.estimator().stats());
}

use carousel::{CarouselConfig, DragRelease, Geometry};
use carousel_adapter::{Controller, IndicatorSource, Spring};

fn main() {
    // Example: a framework-neutral controller settling a release with a spring.
    //
    // An adapter would:
    // - forward layout passes and gesture events
    // - call tick(now_ms) in a frame loop while needs_frame(now_ms) is true
    // - draw frame(now_ms): transforms back-to-front, then the indicator row
    let mut c = Controller::new(CarouselConfig::default(), 9)
        .expect("default config is valid")
        .with_spring(Spring::new(0.5, 0.75))
        .with_indicator_source(IndicatorSource::Live);
    c.on_geometry(Geometry::new(390.0, 300.0));

    c.on_drag_start();
    for (i, translation) in [-30.0, -80.0, -140.0].into_iter().enumerate() {
        c.on_drag_move(translation, i as u64 * 16);
    }
    let release = c.on_drag_end(DragRelease::new(-140.0, -260.0), 48);
    println!(
        "release: {} -> {} offset={}",
        release.from_index, release.to_index, release.released_offset
    );

    let mut now_ms = 48u64;
    while c.needs_frame(now_ms) {
        now_ms += 16;
        let displayed = c.tick(now_ms);
        if now_ms.is_multiple_of(80) {
            let frame = c.frame(now_ms);
            println!(
                "t={now_ms} index={displayed:?} offset={:.1} page={:?}",
                frame.state.drag_offset,
                c.indicator_page(now_ms)
            );
        }
    }

    let frame = c.frame(now_ms);
    println!(
        "done: t={now_ms} state={:?} focal={:?}",
        frame.state,
        frame.transforms.last().map(|t| t.index)
    );
}

// Example: mount, drag, release, then render transforms and the page indicator.
use carousel::{Carousel, CarouselConfig, DragRelease, Geometry};

fn main() {
    let mut c = Carousel::new(CarouselConfig::default(), 7).expect("default config is valid");
    c.set_geometry(Geometry::new(390.0, 300.0));
    println!("mounted: index={} spacing={}", c.rest_index(), c.spacing());

    c.on_drag_start();
    c.on_drag_move(-90.0);
    println!("dragging: offset={} live_index={}", c.drag_offset(), c.live_index());

    // A short drag with a fast flick commits to the next page.
    let release = c.on_drag_end(DragRelease::new(-90.0, -560.0));
    println!("release: {release:?}");

    for t in c.transforms_in_paint_order() {
        println!(
            "item={} x={:.1} scale={:.2} rot={:.1} z={}",
            t.index, t.horizontal_offset, t.scale, t.rotation_degrees, t.z_order
        );
    }

    if let Some(indicator) = c.indicator() {
        println!(
            "indicator: {}x{} active={:?}",
            indicator.width, indicator.height, indicator.active
        );
    }
}

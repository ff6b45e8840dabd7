// Example: snapshot the state mid-drag and restore it into a fresh carousel.
use carousel::{Carousel, CarouselConfig, CarouselState, DragRelease, Geometry};

fn main() {
    let config = CarouselConfig::default().with_velocity_threshold(300.0);
    let geometry = Geometry::new(390.0, 280.0);

    let mut a = Carousel::new(config, 5).expect("valid config");
    a.set_geometry(geometry);
    a.on_drag_move(120.0);
    let snapshot: CarouselState = a.state();
    println!("snapshot={snapshot:?} at_rest={}", snapshot.is_at_rest());

    let mut b = Carousel::new(config, 5).expect("valid config");
    b.restore_state(snapshot);
    b.set_geometry(geometry);
    println!("restored: index={} dragging={}", b.rest_index(), b.is_dragging());

    let release = b.on_drag_end(DragRelease::new(120.0, 130.0));
    println!(
        "release: {} -> {} ({:?})",
        release.from_index, release.to_index, release.step
    );
    if let Some(t) = b.transform_for(release.to_index) {
        println!("focal: {t:?}");
    }
}

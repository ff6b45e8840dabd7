use carousel::{CarouselConfig, Geometry};
use carousel_adapter::CarouselView;

#[derive(Clone, Debug)]
struct Card {
    id: u64,
    title: String,
}

fn cards(ids: impl IntoIterator<Item = u64>) -> Vec<Card> {
    ids.into_iter()
        .map(|id| Card {
            id,
            title: format!("card #{id}"),
        })
        .collect()
}

fn main() {
    // Example: keep the focused card centred when newer cards are prepended.
    //
    // The view captures a focus anchor (the focused item's key) before swapping the items,
    // then maps the key back to its new index.
    let mut view = CarouselView::new(
        CarouselConfig::default(),
        cards(100..105),
        |card: &Card| card.id,
        |card: &Card| card.title.clone(),
    )
    .expect("default config is valid");
    view.controller_mut().on_geometry(Geometry::new(390.0, 300.0));
    println!("before: focused={:?}", view.focused_item().map(|c| c.id));

    let followed = view.set_items(cards((97..100).chain(100..105)));
    println!(
        "after prepend: followed={followed} index={} focused={:?}",
        view.controller().carousel().rest_index(),
        view.focused_item().map(|c| c.id)
    );

    for item in view.render(0) {
        println!(
            "{:>10} scale={:.2} rot={:>6.1} z={}",
            item.content,
            item.transform.scale,
            item.transform.rotation_degrees,
            item.transform.z_order
        );
    }
}

// A host screen: a 300pt-tall carousel of three images, dragged once.
use carousel::{Carousel, CarouselOptions, Size};

fn main() {
    let images = ["image_1", "image_2", "image_3"];
    let opts = CarouselOptions::new(Size::new(390.0, 300.0))
        .with_on_page_change(Some(|page: usize| println!("page -> {page}")));
    let mut c = Carousel::new(opts, images);

    println!(
        "content_extent={} offset={} page={}/{}",
        c.content_extent(),
        c.scroll_offset(),
        c.current_page(),
        c.page_count()
    );

    // The user drags to the right; the platform reports scroll offsets as it goes.
    for offset in [200.0, 230.0, 260.0] {
        c.on_scroll(offset);
        c.for_each_item_in_draw_order(|i, it| {
            println!("  offset={offset} item={i} image={} scale={:.3}", it.image, it.scale);
        });
    }

    // Momentum would carry it to 270; snap instead.
    if let Some(outcome) = c.on_drag_end(270.0, 0.8) {
        println!("snap: {outcome:?}");
        c.on_scroll(outcome.target_offset);
    }
    println!("focused={:?} frame={:?}", c.focused_index(), c.frame_state());
}

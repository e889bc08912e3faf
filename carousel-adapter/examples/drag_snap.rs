// Example: a 60fps adapter loop animating the snap after a drag ends.
use carousel::{CarouselOptions, ItemWidth, ScrollEvent, Size};
use carousel_adapter::{Controller, Easing};

fn main() {
    let opts = CarouselOptions::new(Size::new(390.0, 300.0))
        .with_item_width(ItemWidth::ViewportHeightFraction(0.6))
        .with_indicator_bottom_inset(20.0);
    let mut c = Controller::new(opts, 1..=5).with_snap_animation(240, Easing::EaseInOutCubic);

    // Drag events from the host scroll surface.
    let mut now_ms = 0u64;
    for offset in [360.0, 380.0, 410.0] {
        now_ms += 16;
        c.handle_event(ScrollEvent::Scroll { offset }, now_ms);
    }
    let outcome = c.handle_event(
        ScrollEvent::DragEnd {
            target_offset: 455.0,
            velocity: 1.2,
        },
        now_ms,
    );
    println!("drag end: {outcome:?}");

    while let Some(off) = c.tick(now_ms) {
        let focused = c.carousel().focused_index();
        println!("t={now_ms}ms offset={off:.2} focused={focused:?}");
        now_ms += 16;
    }

    println!(
        "settled: offset={} page={} indicator={:?}",
        c.scroll_offset(),
        c.carousel().current_page(),
        c.carousel().indicator_placement()
    );
}

use crate::*;

use alloc::vec::Vec;
use carousel::{CarouselOptions, ScrollEvent, Size};

fn controller(n: usize) -> Controller<usize> {
    Controller::new(CarouselOptions::new(Size::new(300.0, 300.0)), 0..n)
}

#[test]
fn drag_end_animates_to_the_snapped_item() {
    let mut c = controller(3).with_snap_animation(100, Easing::SmoothStep);
    assert_eq!(c.scroll_offset(), 150.0);

    let outcome = c.on_drag_end(160.0, 0.4, 1_000).unwrap();
    assert_eq!(outcome.page, 2);
    assert!(c.is_animating());
    assert_eq!(c.animation_target(), Some(outcome.target_offset));
    assert_eq!(c.carousel().current_page(), 2);

    let mut last = c.scroll_offset();
    for now_ms in [1_000u64, 1_010, 1_020, 1_040, 1_080, 1_100] {
        let off = c.tick(now_ms).unwrap();
        assert!(off >= last);
        last = off;
    }
    assert!(!c.is_animating());
    assert_eq!(c.tick(1_120), None);
    assert_eq!(c.scroll_offset(), outcome.target_offset);
    assert_eq!(c.carousel().focused_index(), Some(2));
}

#[test]
fn user_scroll_cancels_the_snap_animation() {
    let mut c = controller(5);
    c.on_drag_end(470.0, 0.0, 0).unwrap();
    assert!(c.is_animating());
    c.tick(50);

    c.on_scroll(42.0);
    assert!(!c.is_animating());
    assert_eq!(c.scroll_offset(), 42.0);
    assert_eq!(c.tick(400), None);
    assert_eq!(c.scroll_offset(), 42.0);
}

#[test]
fn events_route_through_the_controller() {
    let mut c = controller(3);
    assert!(
        c.handle_event(ScrollEvent::Scroll { offset: 20.0 }, 0)
            .is_none()
    );
    let outcome = c
        .handle_event(
            ScrollEvent::DragEnd {
                target_offset: -20.0,
                velocity: -2.0,
            },
            0,
        )
        .unwrap();
    assert_eq!(outcome.page, 0);
    assert_eq!(c.animation_target(), Some(0.0));
}

#[test]
fn snap_to_page_and_empty_carousel() {
    let mut c = controller(4);
    assert_eq!(c.start_snap_to_page(3, 0), Some(450.0));
    assert_eq!(c.carousel().current_page(), 3);
    assert!(c.start_snap_to_page(9, 0).is_none());

    let mut empty = controller(0);
    assert!(empty.on_drag_end(100.0, 1.0, 0).is_none());
    assert!(!empty.is_animating());
    assert_eq!(empty.tick(16), None);
}

#[test]
fn tween_samples_endpoints_and_retargets() {
    let mut t = Tween::new(0.0, 300.0, 100, 200, Easing::Linear);
    assert_eq!(t.sample(0), 0.0);
    assert_eq!(t.sample(200), 150.0);
    assert_eq!(t.sample(300), 300.0);
    assert!(t.is_done(300));

    t.retarget(200, 0.0, 100);
    assert_eq!(t.from, 150.0);
    assert_eq!(t.sample(300), 0.0);

    let zero = Tween::new(10.0, 20.0, 0, 0, Easing::EaseInOutCubic);
    assert_eq!(zero.duration_ms, 1);
}

#[test]
fn easings_hit_their_endpoints() {
    for e in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(e.sample(0.0), 0.0);
        assert_eq!(e.sample(1.0), 1.0);
        let samples: Vec<f32> = (0..=10).map(|i| e.sample(i as f32 / 10.0)).collect();
        assert!(samples.windows(2).all(|w| w[1] >= w[0]));
    }
}

use alloc::vec::Vec;

use crate::focus::{FocusFrame, compute_focus_into, rendered_frame};
use crate::snap::{SnapOutcome, compute_snap};
use crate::{
    CarouselOptions, FrameState, IndicatorPlacement, Layout, PageIndicator, Rect, ScrollEvent,
    ScrollState, Size,
};

/// The visual element for one image.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemView<I> {
    pub image: I,
    /// Unscaled layout frame, in content coordinates.
    pub frame: Rect,
    pub scale: f32,
    /// Position in the back-to-front draw order.
    pub z_index: usize,
}

/// A headless focus carousel.
///
/// This type does not hold any UI objects:
/// - Your adapter reports scroll offsets (`on_scroll`) and drag ends (`on_drag_end`).
/// - The carousel keeps item scales, draw order and the page indicator in sync.
/// - Rendering reads `items()` / `for_each_item_in_draw_order` and `rendered_frame`.
///
/// The carousel never animates by itself; `on_drag_end` reports where to come to rest. For
/// tween-driven snapping, see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel<I> {
    options: CarouselOptions,
    layout: Layout,
    items: Vec<ItemView<I>>,
    scroll_offset: f32,
    focus: FocusFrame,
    indicator: PageIndicator,
}

impl<I> Carousel<I> {
    /// Lays out one item view per image and rests on the middle item.
    ///
    /// With a degenerate viewport no item views are created.
    pub fn new(options: CarouselOptions, images: impl IntoIterator<Item = I>) -> Self {
        let images: Vec<I> = images.into_iter().collect();
        let layout = Layout::new(options.viewport, images.len(), options.item_width);

        let items: Vec<ItemView<I>> = images
            .into_iter()
            .zip(layout.frames().iter().copied())
            .map(|(image, frame)| ItemView {
                image,
                frame,
                scale: 1.0,
                z_index: 0,
            })
            .collect();

        cdebug!(
            count = items.len(),
            viewport_width = options.viewport.width,
            viewport_height = options.viewport.height,
            "Carousel::new"
        );

        let indicator = PageIndicator::new(items.len());
        let scroll_offset = layout.initial_offset();
        let mut c = Self {
            options,
            layout,
            items,
            scroll_offset,
            focus: FocusFrame::default(),
            indicator,
        };
        c.update_focus();
        c
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn viewport(&self) -> Size {
        self.layout.viewport()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ItemView<I>] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&ItemView<I>> {
        self.items.get(index)
    }

    pub fn into_images(self) -> Vec<I> {
        self.items.into_iter().map(|it| it.image).collect()
    }

    /// Visits items back to front, so the focused item is visited last.
    pub fn for_each_item_in_draw_order(&self, mut f: impl FnMut(usize, &ItemView<I>)) {
        for &i in &self.focus.draw_order {
            f(i, &self.items[i]);
        }
    }

    /// The on-screen frame of item `index` at the current offset, in content coordinates.
    pub fn rendered_frame(&self, index: usize) -> Option<Rect> {
        let item = self.items.get(index)?;
        Some(rendered_frame(item.frame, item.scale, self.viewport()))
    }

    pub fn focus_frame(&self) -> &FocusFrame {
        &self.focus
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focus.focused
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn content_extent(&self) -> f32 {
        self.layout.content_extent()
    }

    pub fn max_scroll_offset(&self) -> f32 {
        self.layout.max_offset()
    }

    pub fn clamp_scroll_offset(&self, offset: f32) -> f32 {
        self.layout.clamp_offset(offset)
    }

    pub fn indicator(&self) -> PageIndicator {
        self.indicator
    }

    pub fn current_page(&self) -> usize {
        self.indicator.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.indicator.page_count()
    }

    pub fn indicator_placement(&self) -> IndicatorPlacement {
        IndicatorPlacement::new(self.viewport(), self.options.indicator_bottom_inset)
    }

    /// Returns a lightweight snapshot of the current scroll state.
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            content_extent: self.content_extent(),
        }
    }

    /// Returns a combined snapshot of scroll + indicator state.
    pub fn frame_state(&self) -> FrameState {
        FrameState {
            scroll: self.scroll_state(),
            indicator: self.indicator,
        }
    }

    /// Restores a previously captured snapshot.
    ///
    /// The offset is clamped to the current layout and the page to the current item count. The
    /// page-change callback is not fired.
    pub fn restore_frame_state(&mut self, frame: FrameState) {
        if !self.indicator.is_empty() {
            let page = frame
                .indicator
                .current_page()
                .min(self.indicator.page_count() - 1);
            self.indicator.set_current_page(page);
        }
        self.on_scroll(frame.scroll.offset);
    }

    /// Applies a scroll offset from your UI layer (drag, momentum, or animation frame).
    ///
    /// The offset is clamped, then every item's scale and draw order is recomputed. Repeated
    /// calls with the same offset produce the same state.
    pub fn on_scroll(&mut self, offset: f32) {
        let offset = self.layout.clamp_offset(offset);
        ctrace!(offset, "Carousel::on_scroll");
        self.scroll_offset = offset;
        self.update_focus();
    }

    /// Handles the end of a drag gesture.
    ///
    /// `target_offset` is where momentum would naturally come to rest. `velocity` is accepted
    /// for parity with platform callbacks but does not influence the result.
    ///
    /// Updates the page indicator and returns the snap outcome; the caller animates the scroll
    /// position to `outcome.target_offset`. Returns `None` when there is nothing to snap to.
    pub fn on_drag_end(&mut self, target_offset: f32, velocity: f32) -> Option<SnapOutcome> {
        ctrace!(target_offset, velocity, "Carousel::on_drag_end");
        let _ = velocity;
        let outcome = compute_snap(&self.layout, target_offset, self.options.page_width)?;
        self.set_page(outcome.page);
        Some(outcome)
    }

    /// Dispatches a host scroll event to `on_scroll` / `on_drag_end`.
    pub fn handle_event(&mut self, event: ScrollEvent) -> Option<SnapOutcome> {
        match event {
            ScrollEvent::Scroll { offset } => {
                self.on_scroll(offset);
                None
            }
            ScrollEvent::DragEnd {
                target_offset,
                velocity,
            } => self.on_drag_end(target_offset, velocity),
        }
    }

    /// Programmatically snaps to `page` (e.g. a tap on the page indicator).
    ///
    /// Updates the indicator and returns the offset that centers the page, or `None` when the
    /// page does not exist.
    pub fn snap_to_page(&mut self, page: usize) -> Option<SnapOutcome> {
        let target_offset = self.layout.centering_offset(page)?;
        self.set_page(page);
        Some(SnapOutcome {
            coarse_offset: target_offset,
            target_offset,
            page,
        })
    }

    fn set_page(&mut self, page: usize) {
        if !self.indicator.set_current_page(page) {
            return;
        }
        cdebug!(page, "Carousel: page changed");
        if let Some(cb) = &self.options.on_page_change {
            cb(page);
        }
    }

    fn update_focus(&mut self) {
        compute_focus_into(
            &self.layout,
            self.scroll_offset,
            self.options.focus,
            &mut self.focus,
        );
        for (i, item) in self.items.iter_mut().enumerate() {
            item.scale = self.focus.scales[i];
        }
        for (z, &i) in self.focus.draw_order.iter().enumerate() {
            self.items[i].z_index = z;
        }
    }
}

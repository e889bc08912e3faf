use alloc::sync::Arc;

use crate::{ContentMode, FocusScale, ItemWidth, PageWidth, Size};

/// A callback fired when the snap engine moves the page indicator to a new page.
pub type OnPageChangeCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// Options are fixed at construction. Callbacks are stored in `Arc`s so cloning is cheap.
pub struct CarouselOptions {
    /// Viewport bounds. Non-finite or non-positive dimensions make the carousel degenerate
    /// (no item views, every routine a no-op).
    pub viewport: Size,
    pub item_width: ItemWidth,
    pub focus: FocusScale,
    /// Page width used by the coarse step of the snap.
    pub page_width: PageWidth,
    pub corner_radius: f32,
    pub content_mode: ContentMode,
    /// Distance between the page indicator's bottom edge and the viewport's bottom edge.
    pub indicator_bottom_inset: f32,
    pub on_page_change: Option<OnPageChangeCallback>,
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            viewport: self.viewport,
            item_width: self.item_width,
            focus: self.focus,
            page_width: self.page_width,
            corner_radius: self.corner_radius,
            content_mode: self.content_mode,
            indicator_bottom_inset: self.indicator_bottom_inset,
            on_page_change: self.on_page_change.clone(),
        }
    }
}

impl CarouselOptions {
    pub const DEFAULT_CORNER_RADIUS: f32 = 10.0;
    pub const DEFAULT_INDICATOR_BOTTOM_INSET: f32 = 10.0;

    /// Creates options for a viewport of the given size.
    ///
    /// Defaults: half-viewport-width square items, focus scale up to 1.3, coarse snap on the
    /// real item spacing, 10pt corners, aspect-fill images, indicator 10pt above the bottom.
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            item_width: ItemWidth::default(),
            focus: FocusScale::default(),
            page_width: PageWidth::default(),
            corner_radius: Self::DEFAULT_CORNER_RADIUS,
            content_mode: ContentMode::default(),
            indicator_bottom_inset: Self::DEFAULT_INDICATOR_BOTTOM_INSET,
            on_page_change: None,
        }
    }

    pub fn with_item_width(mut self, item_width: ItemWidth) -> Self {
        self.item_width = item_width;
        self
    }

    pub fn with_focus_scale(mut self, focus: FocusScale) -> Self {
        self.focus = focus;
        self
    }

    pub fn with_page_width(mut self, page_width: PageWidth) -> Self {
        self.page_width = page_width;
        self
    }

    pub fn with_corner_radius(mut self, corner_radius: f32) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn with_content_mode(mut self, content_mode: ContentMode) -> Self {
        self.content_mode = content_mode;
        self
    }

    pub fn with_indicator_bottom_inset(mut self, inset: f32) -> Self {
        self.indicator_bottom_inset = inset;
        self
    }

    pub fn with_on_page_change(
        mut self,
        on_page_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_page_change = on_page_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("viewport", &self.viewport)
            .field("item_width", &self.item_width)
            .field("focus", &self.focus)
            .field("page_width", &self.page_width)
            .field("corner_radius", &self.corner_radius)
            .field("content_mode", &self.content_mode)
            .field("indicator_bottom_inset", &self.indicator_bottom_inset)
            .finish_non_exhaustive()
    }
}

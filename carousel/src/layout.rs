use alloc::vec::Vec;

use crate::math;
use crate::{Rect, Size};

/// How wide (and tall, items are square) each item is, relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemWidth {
    ViewportWidthFraction(f32),
    ViewportHeightFraction(f32),
}

impl Default for ItemWidth {
    fn default() -> Self {
        Self::ViewportWidthFraction(0.5)
    }
}

impl ItemWidth {
    pub fn resolve(self, viewport: Size) -> f32 {
        match self {
            Self::ViewportWidthFraction(f) => viewport.width * f,
            Self::ViewportHeightFraction(f) => viewport.height * f,
        }
    }
}

/// Static item geometry for a single-row carousel.
///
/// Items are laid out so that, at the extremes of the scroll range, the first and last items
/// sit centered in the viewport:
///
/// - `frame(i).x = i * item_width + viewport_width / 2 - item_width / 2`
/// - `content_extent = item_width * count + viewport_width - item_width`
///
/// A degenerate layout (invalid viewport or item width) has no frames and a zero scroll range.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    viewport: Size,
    item_width: f32,
    frames: Vec<Rect>,
    content_extent: f32,
}

impl Layout {
    pub fn new(viewport: Size, count: usize, item_width: ItemWidth) -> Self {
        let width = item_width.resolve(viewport);
        if !viewport.is_valid() || !math::is_positive_finite(width) {
            cwarn!(
                viewport_width = viewport.width,
                viewport_height = viewport.height,
                item_width = width,
                count,
                "Layout::new: degenerate geometry, laying out nothing"
            );
            return Self {
                viewport,
                item_width: 0.0,
                frames: Vec::new(),
                content_extent: 0.0,
            };
        }

        let left = viewport.width / 2.0 - width / 2.0;
        let mut frames = Vec::with_capacity(count);
        for i in 0..count {
            frames.push(Rect::new(i as f32 * width + left, 0.0, width, width));
        }

        let content_extent = if count == 0 {
            viewport.width
        } else {
            width * count as f32 + viewport.width - width
        };

        cdebug!(count, item_width = width, content_extent, "Layout::new");
        Self {
            viewport,
            item_width: width,
            frames,
            content_extent,
        }
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn is_degenerate(&self) -> bool {
        self.item_width <= 0.0
    }

    /// Item width, which is also the spacing between neighboring item centers.
    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Rect] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<Rect> {
        self.frames.get(index).copied()
    }

    pub fn center_x(&self, index: usize) -> Option<f32> {
        self.frame(index).map(|f| f.center_x())
    }

    pub fn content_extent(&self) -> f32 {
        self.content_extent
    }

    pub fn max_offset(&self) -> f32 {
        if self.is_degenerate() {
            return 0.0;
        }
        (self.content_extent - self.viewport.width).max(0.0)
    }

    /// Clamps `offset` into `[0, max_offset]`. NaN maps to `0`.
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset())
    }

    /// The offset that puts item `index` in the horizontal center of the viewport.
    pub fn centering_offset(&self, index: usize) -> Option<f32> {
        let center = self.center_x(index)?;
        Some(self.clamp_offset(center - self.viewport.width / 2.0))
    }

    /// The resting offset right after construction: the middle item (`count / 2`) centered.
    ///
    /// For odd counts this equals `(content_extent - viewport_width) / 2`. For even counts that
    /// formula would land between the two middle items, so the right-of-center one is used to
    /// match the page indicator's initial page.
    pub fn initial_offset(&self) -> f32 {
        self.centering_offset(self.len() / 2).unwrap_or(0.0)
    }

    /// The x coordinate of the viewport's horizontal center at `offset`, in content space.
    pub fn viewport_center_x(&self, offset: f32) -> f32 {
        offset + self.viewport.width / 2.0
    }

    /// Index of the item whose center is closest to `x`. Ties resolve to the lowest index.
    pub fn nearest_index(&self, x: f32) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, frame) in self.frames.iter().enumerate() {
            let d = math::abs(frame.center_x() - x);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ if d.is_nan() => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }
}

use alloc::vec::Vec;

use crate::math;
use crate::{Layout, Rect, Size};

/// Parameters of the center-focus falloff.
///
/// `scale = max(1.0, max_scale - distance / viewport_width)`: `max_scale` at the viewport
/// center, decaying linearly to `1.0` one viewport width away, never below `1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocusScale {
    pub max_scale: f32,
}

impl FocusScale {
    pub const DEFAULT_MAX_SCALE: f32 = 1.3;

    pub fn new(max_scale: f32) -> Self {
        Self { max_scale }
    }

    pub fn scale_at(&self, distance: f32, viewport_width: f32) -> f32 {
        if !math::is_positive_finite(viewport_width) || distance.is_nan() {
            return 1.0;
        }
        let scale = self.max_scale - math::abs(distance) / viewport_width;
        if scale.is_nan() { 1.0 } else { scale.max(1.0) }
    }
}

impl Default for FocusScale {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_SCALE)
    }
}

/// [`FocusScale::scale_at`] with the default parameters.
pub fn focus_scale(distance: f32, viewport_width: f32) -> f32 {
    FocusScale::default().scale_at(distance, viewport_width)
}

/// The visual state of every item at one scroll offset.
///
/// This is a pure function of `(offset, layout, focus)`; a render layer applies it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocusFrame {
    pub offset: f32,
    pub scales: Vec<f32>,
    /// The item closest to the viewport center, drawn on top.
    pub focused: Option<usize>,
    /// Back-to-front draw order: every index once, `focused` last.
    pub draw_order: Vec<usize>,
}

impl FocusFrame {
    pub fn scale(&self, index: usize) -> Option<f32> {
        self.scales.get(index).copied()
    }

    /// Position of `index` in the draw order (higher is drawn later, i.e. on top).
    pub fn z_index(&self, index: usize) -> Option<usize> {
        self.draw_order.iter().position(|&i| i == index)
    }
}

/// Computes the focus frame for `offset`, allocating a new [`FocusFrame`].
pub fn compute_focus(layout: &Layout, offset: f32, focus: FocusScale) -> FocusFrame {
    let mut out = FocusFrame::default();
    compute_focus_into(layout, offset, focus, &mut out);
    out
}

/// Same as [`compute_focus`], but reuses `out`'s buffers.
pub fn compute_focus_into(layout: &Layout, offset: f32, focus: FocusScale, out: &mut FocusFrame) {
    out.offset = offset;
    out.scales.clear();
    out.draw_order.clear();

    let viewport_width = layout.viewport().width;
    let center = layout.viewport_center_x(offset);
    for frame in layout.frames() {
        let d = frame.center_x() - center;
        out.scales.push(focus.scale_at(d, viewport_width));
    }

    let focused = layout.nearest_index(center);
    out.focused = focused;
    out.draw_order
        .extend((0..layout.len()).filter(|&i| Some(i) != focused));
    out.draw_order.extend(focused);
}

/// The on-screen frame of an item: `base` scaled about its horizontal center, with its
/// vertical center pinned to the viewport's vertical midpoint.
pub fn rendered_frame(base: Rect, scale: f32, viewport: Size) -> Rect {
    let size = Size::new(base.width * scale, base.height * scale);
    Rect::from_center(base.center_x(), viewport.height / 2.0, size)
}

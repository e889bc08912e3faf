use crate::Layout;
use crate::math;

/// Page width assumed by the coarse snap step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageWidth {
    /// The real spacing between item centers, as laid out.
    #[default]
    ItemSpacing,
    /// A fixed `viewport_width / 2`, regardless of the item width rule.
    HalfViewport,
}

impl PageWidth {
    pub fn resolve(self, layout: &Layout) -> f32 {
        match self {
            Self::ItemSpacing => layout.item_width(),
            Self::HalfViewport => layout.viewport().width / 2.0,
        }
    }
}

/// The result of snapping a drag-end target.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapOutcome {
    /// The target rewritten to a whole multiple of the page width (coarse step).
    pub coarse_offset: f32,
    /// The offset that exactly centers `page`. This is where the carousel comes to rest.
    pub target_offset: f32,
    pub page: usize,
}

/// Rounds `target_offset` to a multiple of `page_width`:
/// `round((target + page_width / 2) / page_width) * page_width`.
///
/// Returns `target_offset` unchanged when `page_width` is not a positive finite number.
pub fn coarse_snap(target_offset: f32, page_width: f32) -> f32 {
    if !math::is_positive_finite(page_width) {
        return target_offset;
    }
    let page = math::round((target_offset + page_width / 2.0) / page_width);
    page * page_width
}

/// Two-phase snap: a coarse rounding to the page grid, then the exact centering offset of
/// the item nearest to the coarse target's viewport center.
///
/// Returns `None` for empty or degenerate layouts.
pub fn compute_snap(
    layout: &Layout,
    target_offset: f32,
    page_width: PageWidth,
) -> Option<SnapOutcome> {
    if layout.is_empty() {
        return None;
    }
    let target = if target_offset.is_finite() {
        target_offset
    } else {
        layout.clamp_offset(target_offset)
    };

    let coarse_offset = coarse_snap(target, page_width.resolve(layout));
    // Past the scroll range, f32 distances to every item collapse to the same value.
    let lookup = layout.clamp_offset(coarse_offset);
    let page = layout.nearest_index(layout.viewport_center_x(lookup))?;
    let target_offset = layout.centering_offset(page)?;
    ctrace!(
        requested = target,
        coarse_offset,
        target_offset,
        page,
        "compute_snap"
    );
    Some(SnapOutcome {
        coarse_offset,
        target_offset,
        page,
    })
}

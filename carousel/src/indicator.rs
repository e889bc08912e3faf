use crate::Size;

/// Discrete page dots: one per item, one highlighted.
///
/// `current_page < page_count` whenever `page_count > 0`; an empty indicator reports page `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageIndicator {
    page_count: usize,
    current_page: usize,
}

impl PageIndicator {
    /// Starts on the middle page (`page_count / 2`).
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            current_page: if page_count == 0 { 0 } else { page_count / 2 },
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }

    /// Sets the highlighted page, clamping out-of-range values.
    ///
    /// Returns `true` when the page changed.
    pub fn set_current_page(&mut self, page: usize) -> bool {
        if self.page_count == 0 {
            return false;
        }
        if page >= self.page_count {
            cwarn!(
                page,
                page_count = self.page_count,
                "PageIndicator: out-of-range page"
            );
            debug_assert!(
                page < self.page_count,
                "PageIndicator: out-of-range page (page={page}, page_count={})",
                self.page_count
            );
        }
        let page = page.min(self.page_count - 1);
        if page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }
}

/// Where the indicator sits inside the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorPlacement {
    pub center_x: f32,
    /// The y coordinate of the indicator's bottom edge.
    pub bottom: f32,
}

impl IndicatorPlacement {
    /// Horizontally centered, `bottom_inset` above the viewport's bottom edge.
    pub fn new(viewport: Size, bottom_inset: f32) -> Self {
        Self {
            center_x: viewport.width / 2.0,
            bottom: viewport.height - bottom_inset,
        }
    }
}

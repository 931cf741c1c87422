use std::ops::Range;

/// Maximum number of numbered page buttons.
pub const PAGE_WINDOW: u32 = 5;

/// Page buttons to show: at most five, centred on `current`, clamped to
/// `[0, total_pages)`.
pub fn page_window(current: u32, total_pages: u32) -> Range<u32> {
    let len = total_pages.min(PAGE_WINDOW);
    let start = current
        .saturating_sub(PAGE_WINDOW / 2)
        .min(total_pages.saturating_sub(PAGE_WINDOW));
    start..start + len
}

/// Pagination controls for the current result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub current: u32,
    pub total_pages: u32,
    pub window: Range<u32>,
}

impl PaginationView {
    pub fn new(current: u32, total_pages: u32) -> Self {
        Self {
            current,
            total_pages,
            window: page_window(current, total_pages),
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current > 0
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.total_pages
    }
}

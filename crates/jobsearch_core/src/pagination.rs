/// Fixed page size for the results list.
pub const PAGE_SIZE: u32 = 10;

/// Page bookkeeping for the results list. `current_page` lives in the filter
/// store; this tracks what the last completed fetch reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub total_pages: u32,
    pub total_results: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            total_pages: 1,
            total_results: 0,
        }
    }
}

impl Pagination {
    /// Clamps a requested page into `1..=total_pages`.
    pub fn clamp(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages.max(1))
    }

    /// Records totals from a completed fetch. Returns the page to refetch when
    /// `current_page` no longer exists.
    pub fn apply_totals(&mut self, current_page: u32, total_pages: u32, total_results: u64) -> Option<u32> {
        self.total_pages = total_pages.max(1);
        self.total_results = total_results;
        (current_page > self.total_pages).then_some(self.total_pages)
    }
}

/// Pagination controller
///
/// Derives the page count from the total record count, computes the
/// window of visible page-number buttons, and validates navigation so
/// the app never requests page 0 or a page past the end.

/// Page-number buttons shown at once
pub const MAX_VISIBLE_PAGES: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current_page: u32,
    page_size: usize,
    total_records: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");
        Self {
            current_page: 1,
            page_size,
            total_records: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_records(&self) -> usize {
        self.total_records
    }

    /// Record the total reported by the catalogue. The dataset is
    /// read-only, so in practice this settles after the first load.
    pub fn set_total_records(&mut self, total: usize) {
        self.total_records = total;
    }

    /// `ceil(total_records / page_size)`; 0 when the catalogue is empty
    pub fn total_pages(&self) -> u32 {
        self.total_records.div_ceil(self.page_size) as u32
    }

    /// Move to `page` if it is a different, in-range page.
    /// Returns whether the current page changed, so the caller knows
    /// whether to issue a fetch. Out-of-range targets are a no-op.
    pub fn go_to(&mut self, page: u32) -> bool {
        if page < 1 || page > self.total_pages() || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current_page.saturating_add(1))
    }

    pub fn prev(&mut self) -> bool {
        if self.current_page <= 1 {
            return false;
        }
        self.go_to(self.current_page - 1)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Contiguous run of at most `MAX_VISIBLE_PAGES` page numbers
    /// centered on the current page. When the centered window would
    /// run past the last page it shifts left to end there instead, so
    /// the numbers are always in `[1, total_pages]`.
    pub fn visible_window(&self) -> Vec<u32> {
        let total = self.total_pages();
        if total == 0 {
            return Vec::new();
        }

        let half = MAX_VISIBLE_PAGES / 2;
        let mut start = self.current_page.saturating_sub(half).max(1);
        let mut end = start + MAX_VISIBLE_PAGES - 1;
        if end > total {
            end = total;
            start = end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
        }
        (start..=end).collect()
    }

    /// `(first, last)` record ordinals shown on the current page, for
    /// the "Showing first to last of total" summary. None when the
    /// catalogue is empty (the summary is hidden).
    pub fn shown_range(&self) -> Option<(usize, usize)> {
        if self.total_records == 0 {
            return None;
        }
        let first = (self.current_page as usize - 1) * self.page_size + 1;
        let last = (self.current_page as usize * self.page_size).min(self.total_records);
        Some((first, last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(current: u32, page_size: usize, total_records: usize) -> Pager {
        let mut p = Pager::new(page_size);
        p.set_total_records(total_records);
        // Walk forward rather than poking the field directly
        for _ in 1..current {
            assert!(p.next());
        }
        p
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(pager(1, 12, 0).total_pages(), 0);
        assert_eq!(pager(1, 12, 1).total_pages(), 1);
        assert_eq!(pager(1, 12, 12).total_pages(), 1);
        assert_eq!(pager(1, 12, 13).total_pages(), 2);
        assert_eq!(pager(1, 12, 40).total_pages(), 4);
    }

    #[test]
    fn test_window_shifts_left_near_the_end() {
        assert_eq!(pager(9, 10, 100).visible_window(), vec![6, 7, 8, 9, 10]);
        assert_eq!(pager(10, 10, 100).visible_window(), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_window_with_few_pages() {
        assert_eq!(pager(1, 10, 30).visible_window(), vec![1, 2, 3]);
        assert_eq!(pager(3, 10, 30).visible_window(), vec![1, 2, 3]);
        assert!(pager(1, 10, 0).visible_window().is_empty());
    }

    #[test]
    fn test_window_centered_in_the_middle() {
        assert_eq!(pager(5, 10, 100).visible_window(), vec![3, 4, 5, 6, 7]);
        assert_eq!(pager(1, 10, 100).visible_window(), vec![1, 2, 3, 4, 5]);
        assert_eq!(pager(2, 10, 100).visible_window(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_navigation_rejects_out_of_range() {
        let mut p = pager(1, 12, 40); // 4 pages

        assert!(!p.go_to(0));
        assert!(!p.go_to(5));
        assert_eq!(p.current_page(), 1);

        assert!(!p.prev());
        assert_eq!(p.current_page(), 1);

        assert!(p.go_to(4));
        assert!(!p.next());
        assert_eq!(p.current_page(), 4);
    }

    #[test]
    fn test_navigation_same_page_is_a_noop() {
        let mut p = pager(2, 12, 40);
        // No fetch should be issued for the page already shown
        assert!(!p.go_to(2));
        assert_eq!(p.current_page(), 2);
    }

    #[test]
    fn test_navigation_before_first_load() {
        // total unknown (0): everything is rejected
        let mut p = Pager::new(12);
        assert!(!p.next());
        assert!(!p.prev());
        assert!(!p.go_to(1));
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn test_shown_range() {
        assert_eq!(pager(1, 12, 40).shown_range(), Some((1, 12)));
        assert_eq!(pager(4, 12, 40).shown_range(), Some((37, 40)));
        assert_eq!(pager(1, 12, 0).shown_range(), None);
    }

    #[test]
    fn test_has_prev_and_next() {
        let p = pager(1, 12, 40);
        assert!(!p.has_prev());
        assert!(p.has_next());

        let p = pager(4, 12, 40);
        assert!(p.has_prev());
        assert!(!p.has_next());
    }
}

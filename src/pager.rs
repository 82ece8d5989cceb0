//! Page Cursor
//!
//! Visibility window over an already-loaded sequence of cards. Pages are
//! revealed cumulatively: on page `n` the first `n * page_size` cards show.

/// Client-side "load more" cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
    total_items: usize,
}

impl Pager {
    pub fn new(page_size: usize, total_items: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_items,
        }
    }

    /// Current page, 1-based
    #[cfg(test)]
    pub fn page(&self) -> usize {
        self.page
    }

    #[cfg(test)]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Number of leading items currently shown
    pub fn visible_count(&self) -> usize {
        (self.page * self.page_size).min(self.total_items)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        index < self.visible_count()
    }

    /// "Load more" is disabled once this holds (including when there is nothing to page)
    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_pages()
    }

    /// Move to the next page. Returns false when already on the last one.
    pub fn advance(&mut self) -> bool {
        if self.is_last_page() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Back to page 1, keeping the item count
    pub fn rewind(&mut self) {
        self.page = 1;
    }

    /// Back to page 1 over a freshly rendered sequence
    pub fn reset(&mut self, total_items: usize) {
        self.page = 1;
        self.total_items = total_items;
    }
}

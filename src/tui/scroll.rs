// Scroll state for list and text panels
//
// Listing pages keep a cursor over the filtered rows; the viewport follows
// the cursor. Text panels (detail pages, blog bodies) scroll freely by
// line. One struct serves both: lists use `follow_cursor`, text panels use
// the scroll_* methods directly.

/// Scroll offset for a single panel
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Line/item index at the top of the viewport
    offset: usize,
    /// Total number of items/lines in content
    total: usize,
    /// Number of items/lines visible
    viewport: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record current content and viewport sizes; call each render frame.
    /// Clamps the offset into the valid range.
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Keep `cursor` visible, moving the window as little as possible
    pub fn follow_cursor(&mut self, cursor: usize) {
        if self.viewport == 0 {
            return;
        }
        if cursor < self.offset {
            self.offset = cursor;
        } else if cursor >= self.offset + self.viewport {
            self.offset = cursor + 1 - self.viewport;
        }
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.offset = (self.offset + 1).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.offset = self.offset.saturating_sub(self.viewport.max(1));
    }

    pub fn page_down(&mut self) {
        self.offset = (self.offset + self.viewport.max(1)).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Visible range as (start, end)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset;
        let end = (self.offset + self.viewport).min(self.total);
        (start, end)
    }

    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_cursor_moves_window_down() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);
        assert_eq!(scroll.offset(), 0);

        scroll.follow_cursor(7);
        assert_eq!(scroll.offset(), 3);
        let (start, end) = scroll.visible_range();
        assert!((start..end).contains(&7));
    }

    #[test]
    fn follow_cursor_moves_window_up() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);
        scroll.follow_cursor(12);
        scroll.follow_cursor(2);
        assert_eq!(scroll.offset(), 2);
    }

    #[test]
    fn offset_clamps_when_content_shrinks() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(30, 5);
        scroll.follow_cursor(29);
        assert_eq!(scroll.offset(), 25);

        // Filters narrowed the list; the window must snap back in range
        scroll.update_dimensions(4, 5);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn page_movement_stays_in_range() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(12, 5);
        scroll.page_down();
        assert_eq!(scroll.offset(), 5);
        scroll.page_down();
        assert_eq!(scroll.offset(), 7); // clamped to max
        scroll.page_up();
        assert_eq!(scroll.offset(), 2);
        scroll.page_up();
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn scrollbar_needed_only_on_overflow() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(3, 5);
        assert!(!scroll.needs_scrollbar());
        scroll.update_dimensions(8, 5);
        assert!(scroll.needs_scrollbar());
    }
}

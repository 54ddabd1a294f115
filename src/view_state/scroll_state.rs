//! Page scroll state
//!
//! The whole report is laid out as one tall document and a window of it is
//! shown in the terminal. This struct tracks where that window sits.

/// Viewport position over the rendered document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// First document row shown at the top of the viewport
    pub offset: u16,
    /// Document height from the last render
    pub content_height: u16,
    /// Viewport height from the last render
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest valid offset for the current sizes.
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Record the sizes seen during render and clamp the offset to them.
    pub fn update_bounds(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset());
    }

    /// One viewport up, keeping a line of overlap.
    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.saturating_sub(1).max(1));
    }

    /// One viewport down, keeping a line of overlap.
    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.saturating_sub(1).max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn is_at_top(&self) -> bool {
        self.offset == 0
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    /// Scroll percentage (0-100)
    pub fn scroll_percentage(&self) -> u8 {
        let max = self.max_offset();
        if max == 0 {
            100
        } else {
            ((self.offset as u32 * 100) / max as u32) as u8
        }
    }
}

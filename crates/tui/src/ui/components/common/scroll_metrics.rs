//! Vertical scroll bookkeeping for the simulated page.
//!
//! Offsets and heights are terminal rows. The offset is always clamped into
//! `0..=max_offset()`, so callers can jump anywhere and read back a legal position.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
    offset: u16,
    content_height: u16,
    viewport_height: u16,
}

impl ScrollMetrics {
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    pub const fn content_height(&self) -> u16 {
        self.content_height
    }

    pub const fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Updates viewport height and clamps current offset.
    pub fn update_viewport_height(&mut self, viewport_height: u16) {
        self.viewport_height = viewport_height;
        self.clamp_offset();
    }

    /// Updates content height and clamps current offset.
    pub fn update_content_height(&mut self, content_height: u16) {
        self.content_height = content_height;
        self.clamp_offset();
    }

    /// Scrolls by relative line count (`+` down, `-` up). Returns whether the offset moved.
    pub fn scroll_lines(&mut self, delta: i16) -> bool {
        let current = i32::from(self.offset);
        let next = (current + i32::from(delta)).clamp(0, i32::from(self.max_offset()));
        self.set_offset(next as u16)
    }

    /// Scrolls by whole viewports.
    pub fn scroll_pages(&mut self, delta_pages: i16) -> bool {
        let delta = i32::from(self.viewport_height).saturating_mul(i32::from(delta_pages));
        let delta = delta.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16;
        self.scroll_lines(delta)
    }

    /// Jumps to `row`, clamped to the last full viewport.
    pub fn scroll_to(&mut self, row: u16) -> bool {
        self.set_offset(row.min(self.max_offset()))
    }

    pub fn scroll_to_top(&mut self) -> bool {
        self.set_offset(0)
    }

    pub fn scroll_to_bottom(&mut self) -> bool {
        self.set_offset(self.max_offset())
    }

    fn set_offset(&mut self, offset: u16) -> bool {
        let moved = offset != self.offset;
        self.offset = offset;
        moved
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}

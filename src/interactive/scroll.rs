//! Scroll-to-top / scroll-to-bottom affordances

/// Which of the two floating jump buttons are showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollAffordance {
    pub show_top: bool,
    pub show_bottom: bool,
}

impl ScrollAffordance {
    /// `offset` is the first visible row, `viewport` the visible height and
    /// `content` the page height, all in rows.
    ///
    /// Top shows once scrolled past `top_threshold`; bottom shows while more
    /// than `bottom_threshold` rows remain below the viewport. Both may show
    /// at once.
    pub fn compute(
        offset: usize,
        viewport: usize,
        content: usize,
        top_threshold: usize,
        bottom_threshold: usize,
    ) -> Self {
        Self {
            show_top: offset > top_threshold,
            show_bottom: offset + viewport < content.saturating_sub(bottom_threshold),
        }
    }
}

/// Largest valid scroll offset
pub fn max_scroll(viewport: usize, content: usize) -> usize {
    content.saturating_sub(viewport)
}

//! Vertical scrolling over a list of pre-rendered lines.

use std::ops::Range;

use crate::line::Line;

/// What the tree view needs from the component that clips and scrolls its
/// rendered rows.
pub trait Viewport {
    fn width(&self) -> usize;

    fn set_width(&mut self, width: usize);

    fn height(&self) -> usize;

    fn set_height(&mut self, height: usize);

    /// Index of the first line shown.
    fn y_offset(&self) -> usize;

    /// Scroll so `offset` is the first line shown, clamped to the content.
    fn set_y_offset(&mut self, offset: usize);

    /// Indices of the lines currently shown.
    fn visible_range(&self) -> Range<usize>;

    /// Scroll the window `n` lines towards the top.
    fn line_up(&mut self, n: usize) {
        let offset = self.y_offset().saturating_sub(n);
        self.set_y_offset(offset);
    }

    /// Scroll the window `n` lines towards the bottom.
    fn line_down(&mut self, n: usize) {
        let offset = self.y_offset().saturating_add(n);
        self.set_y_offset(offset);
    }

    /// Swap the text of one line. Returns false when `index` is out of range.
    fn replace_line(&mut self, index: usize, line: Line) -> bool;

    /// Replace every line.
    fn set_content(&mut self, lines: Vec<Line>);

    fn total_line_count(&self) -> usize;

    /// How far the window is scrolled, between 0.0 and 1.0.
    fn scroll_percent(&self) -> f64;

    /// The lines inside the window.
    fn visible_lines(&self) -> &[Line];
}

/// In-memory [`Viewport`].
#[derive(Debug, Clone, Default)]
pub struct ScrollView {
    width: usize,
    height: usize,
    y_offset: usize,
    lines: Vec<Line>,
}

impl ScrollView {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Every line, shown or not.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    fn max_y_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height)
    }

    fn clamp_offset(&mut self) {
        self.y_offset = self.y_offset.min(self.max_y_offset());
    }
}

impl Viewport for ScrollView {
    fn width(&self) -> usize {
        self.width
    }

    fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    fn height(&self) -> usize {
        self.height
    }

    fn set_height(&mut self, height: usize) {
        self.height = height;
        self.clamp_offset();
    }

    fn y_offset(&self) -> usize {
        self.y_offset
    }

    fn set_y_offset(&mut self, offset: usize) {
        self.y_offset = offset.min(self.max_y_offset());
    }

    fn visible_range(&self) -> Range<usize> {
        let start = self.y_offset.min(self.lines.len());
        let end = self.y_offset.saturating_add(self.height).min(self.lines.len());
        start..end
    }

    fn replace_line(&mut self, index: usize, line: Line) -> bool {
        match self.lines.get_mut(index) {
            Some(slot) => {
                *slot = line;
                true
            }
            None => false,
        }
    }

    fn set_content(&mut self, lines: Vec<Line>) {
        self.lines = lines;
        self.clamp_offset();
    }

    fn total_line_count(&self) -> usize {
        self.lines.len()
    }

    fn scroll_percent(&self) -> f64 {
        if self.height >= self.lines.len() {
            return 1.0;
        }
        let scrollable = (self.lines.len() - self.height) as f64;
        (self.y_offset as f64 / scrollable).clamp(0.0, 1.0)
    }

    fn visible_lines(&self) -> &[Line] {
        &self.lines[self.visible_range()]
    }
}

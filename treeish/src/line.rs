//! Styled rows of text.

use std::fmt;

use crate::text::display_width;
use crate::types::Style;

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub content: String,
    pub style: Style,
}

impl Span {
    pub fn new(content: impl Into<String>, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    pub fn raw(content: impl Into<String>) -> Self {
        Self::new(content, Style::default())
    }

    pub fn width(&self) -> usize {
        display_width(&self.content)
    }
}

/// One rendered row. `Display` prints the text without styling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn raw(content: impl Into<String>) -> Self {
        Self::new(vec![Span::raw(content)])
    }

    /// Width in terminal columns.
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// The text of every span concatenated.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|span| span.content.as_str()).collect()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.content)?;
        }
        Ok(())
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Self::raw(s)
    }
}

use crossterm::style::{Attribute, ContentStyle};

use super::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

/// Colors and attributes of one span of text. Unset colors inherit the
/// terminal's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
    pub text_style: TextStyle,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            foreground: None,
            background: None,
            text_style: TextStyle::new(),
        }
    }

    pub const fn foreground(mut self, color: Rgb) -> Self {
        self.foreground = Some(color);
        self
    }

    pub const fn background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.text_style.italic = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }
}

impl From<Style> for ContentStyle {
    fn from(style: Style) -> Self {
        let mut content = ContentStyle::new();
        content.foreground_color = style.foreground.map(Into::into);
        content.background_color = style.background.map(Into::into);
        let text = style.text_style;
        for (on, attribute) in [
            (text.bold, Attribute::Bold),
            (text.italic, Attribute::Italic),
            (text.underline, Attribute::Underlined),
            (text.dim, Attribute::Dim),
        ] {
            if on {
                content.attributes.set(attribute);
            }
        }
        content
    }
}

/// Styles used when composing a tree row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    /// Metadata prefix.
    pub prefix: Style,
    /// Branch glyphs.
    pub symbol: Style,
    /// Name of an unselected node.
    pub line: Style,
    /// Name of the selected node.
    pub selected: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            prefix: Style::new().dim(),
            symbol: Style::new().foreground(Rgb::new(128, 128, 128)),
            line: Style::new(),
            selected: Style::new()
                .foreground(Rgb::new(255, 255, 255))
                .background(Rgb::new(62, 92, 158))
                .bold(),
        }
    }
}

use crossterm::style::Color as CtColor;

/// A 24-bit terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for CtColor {
    fn from(c: Rgb) -> Self {
        CtColor::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

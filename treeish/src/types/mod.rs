mod color;
mod style;

pub use color::Rgb;
pub use style::{Style, Styles, TextStyle};

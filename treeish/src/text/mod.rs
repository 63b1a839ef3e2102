use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "…";

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` down to at most `max_width` columns, ending in [`ELLIPSIS`] when
/// anything was removed.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let current_width = display_width(s);
    if current_width <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let ellipsis_width = display_width(ELLIPSIS);
    let target_width = max_width.saturating_sub(ellipsis_width);

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str(ELLIPSIS);
    result
}

/// Right-pad `s` with spaces up to `width` columns. Wider input is returned
/// unchanged.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current_width = display_width(s);
    let mut result = String::with_capacity(s.len() + width.saturating_sub(current_width));
    result.push_str(s);
    result.extend(std::iter::repeat_n(' ', width.saturating_sub(current_width)));
    result
}

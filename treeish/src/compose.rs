//! Composition of a node's row: metadata prefix, branch glyphs, name.

use crate::error::{Error, Result};
use crate::line::{Line, Span};
use crate::node::{Hierarchy, Node, NodeId, Tree};
use crate::symbols::{Symbols, single_line_symbols};
use crate::text::{display_width, pad_to_width, truncate_to_width};
use crate::types::Styles;

/// Render the row for `id` within `width` columns.
///
/// The name gets whatever is left after the prefix and glyphs, minus one
/// column so a truncated name never looks like an exact fit. A `width` of 0
/// means the viewport is not sized yet and the name is left as is.
pub fn render_line<T: Node>(
    tree: &Tree<T>,
    id: NodeId,
    width: usize,
    symbols: &Symbols,
    styles: &Styles,
) -> Result<Line> {
    let data = tree.data(id).ok_or(Error::UnknownNode(id))?;
    let state = tree.state(id);

    let prefix = data.prefix();
    let glyphs = single_line_symbols(tree, id, symbols);
    let mut name = data.name(state);

    if width > 0 {
        let lead = display_width(&prefix) + display_width(&glyphs);
        let budget = width.saturating_sub(lead).saturating_sub(1);
        name = pad_to_width(&truncate_to_width(&name, budget), budget);
    }

    let name_style = if state.is_selected() {
        styles.selected
    } else {
        styles.line
    };

    let mut spans = Vec::with_capacity(3);
    if !prefix.is_empty() {
        spans.push(Span::new(prefix, styles.prefix));
    }
    spans.push(Span::new(glyphs, styles.symbol));
    spans.push(Span::new(name, name_style));
    Ok(Line::new(spans))
}

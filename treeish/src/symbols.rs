//! Branch glyphs drawn in front of each node's name.
//!
//! A node at depth `d` gets `d + 1` glyph columns. Column `pos < d` belongs
//! to the ancestor `d - pos` hops up: it shows a vertical connector when that
//! ancestor has more siblings below it, and padding when it was the last
//! one. Column `d` belongs to the node itself and shows a terminator when the
//! node is the last of its siblings, a starter otherwise.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::node::{Hierarchy, NodeId};
use crate::traversal::depth;

/// Glyph table for one drawing style. Every glyph should have the same
/// display width so columns line up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbols {
    /// Vertical continuation through an ancestor column.
    pub connector: String,
    /// A node's own column when it has siblings below.
    pub starter: String,
    /// A node's own column when it is the last sibling.
    pub terminator: String,
    /// Empty column.
    pub padding: String,
}

impl Symbols {
    pub fn new(
        connector: impl Into<String>,
        starter: impl Into<String>,
        terminator: impl Into<String>,
        padding: impl Into<String>,
    ) -> Self {
        Self {
            connector: connector.into(),
            starter: starter.into(),
            terminator: terminator.into(),
            padding: padding.into(),
        }
    }

    pub fn normal() -> Self {
        Self::new("│ ", "├─", "└─", "  ")
    }

    pub fn thick() -> Self {
        Self::new("┃ ", "┣━", "┗━", "  ")
    }

    pub fn rounded() -> Self {
        Self::new("│ ", "├─", "╰─", "  ")
    }

    pub fn double() -> Self {
        Self::new("║ ", "╠═", "╚═", "  ")
    }

    pub fn normal_edge() -> Self {
        Self::new("│ ", "├╴", "└╴", "  ")
    }

    pub fn thick_edge() -> Self {
        Self::new("┃ ", "┣╸", "┗╸", "  ")
    }

    pub fn ascii() -> Self {
        Self::new("| ", "|-", "`-", "  ")
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::normal()
    }
}

/// Named glyph presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SymbolSet {
    #[default]
    Normal,
    Thick,
    Rounded,
    Double,
    NormalEdge,
    ThickEdge,
    Ascii,
}

impl SymbolSet {
    pub const ALL: [SymbolSet; 7] = [
        SymbolSet::Normal,
        SymbolSet::Thick,
        SymbolSet::Rounded,
        SymbolSet::Double,
        SymbolSet::NormalEdge,
        SymbolSet::ThickEdge,
        SymbolSet::Ascii,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SymbolSet::Normal => "normal",
            SymbolSet::Thick => "thick",
            SymbolSet::Rounded => "rounded",
            SymbolSet::Double => "double",
            SymbolSet::NormalEdge => "edge",
            SymbolSet::ThickEdge => "thickedge",
            SymbolSet::Ascii => "ascii",
        }
    }

    pub fn symbols(self) -> Symbols {
        match self {
            SymbolSet::Normal => Symbols::normal(),
            SymbolSet::Thick => Symbols::thick(),
            SymbolSet::Rounded => Symbols::rounded(),
            SymbolSet::Double => Symbols::double(),
            SymbolSet::NormalEdge => Symbols::normal_edge(),
            SymbolSet::ThickEdge => Symbols::thick_edge(),
            SymbolSet::Ascii => Symbols::ascii(),
        }
    }
}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SymbolSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted.is_empty() {
            return Ok(SymbolSet::Normal);
        }
        SymbolSet::ALL
            .into_iter()
            .find(|set| set.name() == wanted)
            .ok_or_else(|| Error::UnknownSymbolSet(s.to_string()))
    }
}

/// Whether column `pos` of a node at `max_depth` is empty.
pub fn has_padding_at_pos<H: Hierarchy + ?Sized>(
    h: &H,
    id: NodeId,
    pos: usize,
    max_depth: usize,
) -> bool {
    if pos > max_depth {
        return true;
    }
    if pos == max_depth {
        return false;
    }
    let mut ancestor = id;
    for _ in 0..max_depth - pos {
        match h.parent(ancestor) {
            Some(parent) => ancestor = parent,
            None => return true,
        }
    }
    h.state(ancestor).is_last_child()
}

/// The glyph for column `pos` of a node at `max_depth`.
pub fn symbol_for_pos<'a, H: Hierarchy + ?Sized>(
    h: &H,
    id: NodeId,
    symbols: &'a Symbols,
    pos: usize,
    max_depth: usize,
) -> &'a str {
    if has_padding_at_pos(h, id, pos, max_depth) {
        return &symbols.padding;
    }
    if pos < max_depth {
        return &symbols.connector;
    }
    if h.state(id).is_last_child() {
        &symbols.terminator
    } else {
        &symbols.starter
    }
}

/// All glyph columns for a node rendered on one line.
pub fn single_line_symbols<H: Hierarchy + ?Sized>(h: &H, id: NodeId, symbols: &Symbols) -> String {
    let node_depth = depth(h, id);
    (0..=node_depth)
        .map(|pos| symbol_for_pos(h, id, symbols, pos, node_depth))
        .collect()
}

/// Glyph columns for a node whose content spans `line_count` lines.
///
/// Ancestor columns repeat on every line. The node's own column starts the
/// branch on the first line and continues it below; the last line closes it
/// when the node is the last sibling.
pub fn multi_line_symbols<H: Hierarchy + ?Sized>(
    h: &H,
    id: NodeId,
    symbols: &Symbols,
    line_count: usize,
) -> Vec<String> {
    if line_count <= 1 {
        return vec![single_line_symbols(h, id, symbols)];
    }

    let max_depth = depth(h, id);
    let ancestors: String = (0..max_depth)
        .map(|pos| symbol_for_pos(h, id, symbols, pos, max_depth))
        .collect();
    let last_child = h.state(id).is_last_child();

    (0..line_count)
        .map(|line| {
            let own = if line == 0 {
                &symbols.starter
            } else if line == line_count - 1 && last_child {
                &symbols.terminator
            } else {
                &symbols.connector
            };
            format!("{ancestors}{own}")
        })
        .collect()
}

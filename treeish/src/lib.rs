//! Interactive tree rendering for text terminals.
//!
//! A [`Tree`] holds the provider's nodes in an arena together with their
//! display state. A [`TreeView`] flattens the expanded part of it into rows,
//! keeps a cursor and a scroll window over those rows, and composes each row
//! from the node's metadata prefix, its branch glyphs and its name.

pub mod compose;
pub mod error;
pub mod event;
pub mod keymap;
pub mod line;
pub mod node;
pub mod symbols;
pub mod text;
pub mod traversal;
pub mod types;
pub mod view;
pub mod viewport;

pub use compose::render_line;
pub use error::{Error, Result};
pub use event::{Event, Key, Modifiers};
pub use keymap::{Action, KeyCombo, KeyMap};
pub use line::{Line, Span};
pub use node::{Hierarchy, Node, NodeId, NodeState, Tree};
pub use symbols::{SymbolSet, Symbols};
pub use types::*;
pub use view::{Render, TreeView};
pub use viewport::{ScrollView, Viewport};

//! Tree view: cursor, selection and scrolling over the visible order.
//!
//! Two render paths exist. A cursor move only changes which node carries
//! `SELECTED`, so just the old and new rows are recomposed and swapped into
//! the viewport. Anything that changes which nodes are visible (expand,
//! collapse, hide, show) or how every row is laid out (width) re-flattens the
//! tree and recomposes every row; no row cached before such a change is
//! reused.

use log::{debug, error, trace};

use crate::compose::render_line;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::keymap::{Action, KeyMap};
use crate::line::Line;
use crate::node::{Hierarchy, Node, NodeId, NodeState, Tree};
use crate::symbols::Symbols;
use crate::traversal::{at, flatten, refresh_sibling_flags, visible_below};
use crate::types::Styles;
use crate::viewport::{ScrollView, Viewport};

/// Which rows an operation recomposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Render {
    /// Nothing changed on screen.
    None,
    /// Only these rows were recomposed.
    Lines(Vec<usize>),
    /// Every row was recomposed.
    Full,
    /// No row was recomposed, but the window was resized or scrolled.
    Scroll,
}

/// An interactive, navigable rendering of a [`Tree`].
///
/// # Example
///
/// ```
/// use treeish::{NodeState, Tree, TreeView};
///
/// let mut tree = Tree::new();
/// let root = tree.add_root("root", NodeState::NONE);
/// tree.add_child(root, "a", NodeState::NONE).unwrap();
/// tree.add_child(root, "b", NodeState::NONE).unwrap();
///
/// let mut view = TreeView::new(tree).unwrap();
/// view.move_down(1).unwrap();
/// assert_eq!(view.cursor(), 1);
/// ```
#[derive(Debug)]
pub struct TreeView<T, V = ScrollView> {
    tree: Tree<T>,
    /// Visible order as of the last structural change.
    visible: Vec<NodeId>,
    viewport: V,
    focused: bool,
    cursor: usize,
    keymap: KeyMap,
    styles: Styles,
    symbols: Symbols,
}

impl<T: Node> TreeView<T> {
    /// Build a focused view with the cursor on the first visible row.
    pub fn new(tree: Tree<T>) -> Result<Self> {
        Self::with_viewport(tree, ScrollView::default())
    }
}

impl<T: Node, V: Viewport> TreeView<T, V> {
    /// Like [`TreeView::new`], rendering into the given viewport.
    pub fn with_viewport(mut tree: Tree<T>, viewport: V) -> Result<Self> {
        if tree.roots().is_empty() {
            return Err(Error::EmptyTree);
        }
        let visible = flatten(&tree, tree.roots());
        let first = *visible.first().ok_or(Error::NothingVisible)?;
        // Selection belongs to the view; drop whatever the provider set.
        let ids: Vec<NodeId> = tree.ids().collect();
        for id in ids {
            tree.remove_state(id, NodeState::SELECTED);
        }
        tree.insert_state(first, NodeState::SELECTED);

        let mut view = Self {
            tree,
            visible,
            viewport,
            focused: true,
            cursor: 0,
            keymap: KeyMap::default(),
            styles: Styles::default(),
            symbols: Symbols::default(),
        };
        view.render_all()?;
        debug!(
            "tree view created: {} nodes, {} visible",
            view.tree.len(),
            view.visible.len()
        );
        Ok(view)
    }

    pub fn with_symbols(mut self, symbols: Symbols) -> Result<Self> {
        self.set_symbols(symbols)?;
        Ok(self)
    }

    pub fn with_styles(mut self, styles: Styles) -> Result<Self> {
        self.set_styles(styles)?;
        Ok(self)
    }

    pub fn with_keymap(mut self, keymap: KeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    pub fn set_symbols(&mut self, symbols: Symbols) -> Result<Render> {
        self.symbols = symbols;
        self.render_all()
    }

    pub fn set_styles(&mut self, styles: Styles) -> Result<Render> {
        self.styles = styles;
        self.render_all()
    }

    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn keymap_mut(&mut self) -> &mut KeyMap {
        &mut self.keymap
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Handle one input event to completion.
    ///
    /// Key presses are ignored while the view is blurred. Resize and focus
    /// changes always apply.
    pub fn update(&mut self, event: &Event) -> Result<Render> {
        match *event {
            Event::Resize { width, height } => {
                let window = (self.viewport.height(), self.viewport.y_offset());
                let render = self.set_width(width.into())?;
                self.set_height(height.into());
                let moved = window != (self.viewport.height(), self.viewport.y_offset());
                Ok(match render {
                    Render::None if moved => Render::Scroll,
                    render => render,
                })
            }
            Event::Focus => self.focus(),
            Event::Blur => self.blur(),
            Event::Key { key, modifiers } => {
                if !self.focused {
                    return Ok(Render::None);
                }
                match self.keymap.action(key, modifiers) {
                    Some(action) => self.apply(action),
                    None => Ok(Render::None),
                }
            }
        }
    }

    /// Run a navigation command.
    pub fn apply(&mut self, action: Action) -> Result<Render> {
        let height = self.viewport.height();
        match action {
            Action::LineUp => self.move_up(1),
            Action::LineDown => self.move_down(1),
            Action::PageUp => self.move_up(height),
            Action::PageDown => self.move_down(height),
            Action::HalfPageUp => self.move_up(height / 2),
            Action::HalfPageDown => self.move_down(height / 2),
            Action::GotoTop => self.goto_top(),
            Action::GotoBottom => self.goto_bottom(),
            Action::ToggleExpand => self.toggle_expand(),
        }
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    /// Move the cursor up `n` rows, stopping at the first one.
    pub fn move_up(&mut self, n: usize) -> Result<Render> {
        if self.cursor == 0 {
            return Ok(Render::None);
        }
        let target = self.cursor.saturating_sub(n);
        self.follow(target);
        self.set_cursor(target)
    }

    /// Move the cursor down `n` rows, stopping at the last one.
    pub fn move_down(&mut self, n: usize) -> Result<Render> {
        let last = self.visible.len().saturating_sub(1);
        if self.cursor == last {
            return Ok(Render::None);
        }
        let target = self.cursor.saturating_add(n).min(last);
        self.follow(target);
        self.set_cursor(target)
    }

    pub fn goto_top(&mut self) -> Result<Render> {
        self.move_up(self.visible.len())
    }

    pub fn goto_bottom(&mut self) -> Result<Render> {
        self.move_down(self.visible.len())
    }

    fn set_cursor(&mut self, row: usize) -> Result<Render> {
        if row == self.cursor {
            return Ok(Render::None);
        }
        let previous_row = self.cursor;
        let previous = self.node_at(previous_row)?;
        let current = self.node_at(row)?;

        self.tree.remove_state(previous, NodeState::SELECTED);
        self.cursor = row;
        if self.focused {
            self.tree.insert_state(current, NodeState::SELECTED);
        }
        trace!("cursor {previous_row} -> {row}");

        self.render_rows(&[previous_row, row])
    }

    /// Shift the window by the distance the cursor is about to travel when
    /// `target` lies outside it.
    fn follow(&mut self, target: usize) {
        if self.viewport.height() == 0 {
            return;
        }
        let window = self.viewport.visible_range();
        if target < window.start {
            self.viewport.line_up(self.cursor.abs_diff(target));
        } else if target >= window.end {
            self.viewport.line_down(self.cursor.abs_diff(target));
        }
        // The shift alone falls short when the cursor was already off screen.
        self.scroll_to_row(target);
    }

    /// Scroll the least amount that puts `row` inside the window.
    fn scroll_to_row(&mut self, row: usize) {
        let height = self.viewport.height();
        if height == 0 {
            return;
        }
        let top = self.viewport.y_offset();
        if row < top {
            self.viewport.set_y_offset(row);
        } else if row >= top + height {
            self.viewport.set_y_offset(row + 1 - height);
        }
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    /// Expand or collapse the node under the cursor. Nodes that cannot be
    /// collapsed are left alone.
    pub fn toggle_expand(&mut self) -> Result<Render> {
        let id = self.node_at(self.cursor)?;
        let mut state = self.tree.state(id);
        if !state.is_collapsible() {
            trace!("toggle ignored on leaf {id}");
            return Ok(Render::None);
        }

        state.toggle(NodeState::COLLAPSED);
        self.tree.set_state(id, state);
        let before = self.visible.len();
        self.restructure()?;

        debug!(
            "{} {id}: {before} -> {} visible rows ({} below)",
            if state.is_collapsed() { "collapsed" } else { "expanded" },
            self.visible.len(),
            visible_below(&self.tree, id),
        );
        self.render_all()
    }

    /// Hide or show a node together with its subtree.
    ///
    /// Hiding every remaining visible node is refused and leaves the tree
    /// unchanged.
    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) -> Result<Render> {
        if !self.tree.contains(id) {
            return Err(Error::UnknownNode(id));
        }
        let previous = self.tree.state(id);
        if previous.is_hidden() == hidden {
            return Ok(Render::None);
        }

        let mut state = previous;
        state.set(NodeState::HIDDEN, hidden);
        self.tree.set_state(id, state);
        if let Err(err) = self.restructure() {
            self.tree.set_state(id, previous);
            return Err(err);
        }

        debug!(
            "{} {id}: {} visible rows",
            if hidden { "hid" } else { "showed" },
            self.visible.len()
        );
        let render = self.render_all()?;
        self.scroll_to_row(self.cursor);
        Ok(render)
    }

    /// Rebuild the visible order and keep the cursor on the same node. When
    /// that node is no longer visible the cursor keeps its row, clamped to
    /// the new order, and the selection moves to whatever node sits there.
    fn restructure(&mut self) -> Result<()> {
        let visible = flatten(&self.tree, self.tree.roots());
        if visible.is_empty() {
            return Err(Error::NothingVisible);
        }

        let previous = self.visible.get(self.cursor).copied();
        if let Some(previous) = previous {
            self.tree.remove_state(previous, NodeState::SELECTED);
        }
        self.visible = visible;
        self.cursor = previous
            .and_then(|id| self.visible.iter().position(|&row| row == id))
            .unwrap_or_else(|| self.cursor.min(self.visible.len() - 1));
        if self.focused {
            let current = self.visible[self.cursor];
            self.tree.insert_state(current, NodeState::SELECTED);
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Viewport
    // -------------------------------------------------------------------------

    /// Resize horizontally. Every row is recomposed since name truncation
    /// depends on the width.
    pub fn set_width(&mut self, width: usize) -> Result<Render> {
        if width == self.viewport.width() {
            return Ok(Render::None);
        }
        debug!("width {} -> {width}", self.viewport.width());
        self.viewport.set_width(width);
        self.render_all()
    }

    /// Resize vertically. Rows are not recomposed; if the cursor ends up
    /// outside the window, the window follows it.
    pub fn set_height(&mut self, height: usize) {
        debug!("height {} -> {height}", self.viewport.height());
        self.viewport.set_height(height);
        self.scroll_to_row(self.cursor);
    }

    pub fn width(&self) -> usize {
        self.viewport.width()
    }

    pub fn height(&self) -> usize {
        self.viewport.height()
    }

    pub fn y_offset(&self) -> usize {
        self.viewport.y_offset()
    }

    /// Scroll the window without moving the cursor.
    pub fn set_y_offset(&mut self, offset: usize) {
        self.viewport.set_y_offset(offset);
    }

    pub fn scroll_percent(&self) -> f64 {
        self.viewport.scroll_percent()
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Accept navigation input again and select the node under the cursor.
    pub fn focus(&mut self) -> Result<Render> {
        if self.focused {
            return Ok(Render::None);
        }
        self.focused = true;
        let current = self.node_at(self.cursor)?;
        self.tree.insert_state(current, NodeState::SELECTED);
        self.render_rows(&[self.cursor])
    }

    /// Ignore navigation input and clear the selection. The cursor stays
    /// where it is.
    pub fn blur(&mut self) -> Result<Render> {
        if !self.focused {
            return Ok(Render::None);
        }
        self.focused = false;
        let ids: Vec<NodeId> = self.tree.ids().collect();
        for id in ids {
            self.tree.remove_state(id, NodeState::SELECTED);
        }
        self.render_rows(&[self.cursor])
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    fn compose(&self, id: NodeId) -> Result<Line> {
        render_line(
            &self.tree,
            id,
            self.viewport.width(),
            &self.symbols,
            &self.styles,
        )
    }

    /// Recompose the given rows in place.
    fn render_rows(&mut self, rows: &[usize]) -> Result<Render> {
        for &row in rows {
            let line = self.compose(self.node_at(row)?)?;
            if !self.viewport.replace_line(row, line) {
                error!("viewport has no line {row} to replace");
                return Err(Error::IndexOutOfRange {
                    index: row,
                    len: self.viewport.total_line_count(),
                });
            }
        }
        Ok(Render::Lines(rows.to_vec()))
    }

    /// Refresh the derived sibling flags and recompose every visible row.
    fn render_all(&mut self) -> Result<Render> {
        let roots = self.tree.roots().to_vec();
        refresh_sibling_flags(&mut self.tree, &roots);
        let lines = self
            .visible
            .iter()
            .map(|&id| self.compose(id))
            .collect::<Result<Vec<_>>>()?;
        self.viewport.set_content(lines);
        Ok(Render::Full)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The node at visible row `row`.
    fn node_at(&self, row: usize) -> Result<NodeId> {
        at(&self.tree, self.tree.roots(), row).ok_or_else(|| {
            error!(
                "no node at visible row {row} ({} visible)",
                self.visible.len()
            );
            Error::IndexOutOfRange {
                index: row,
                len: self.visible.len(),
            }
        })
    }

    /// Row of the cursor in the visible order.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The node under the cursor.
    pub fn current_node(&self) -> NodeId {
        self.visible[self.cursor]
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// The visible order.
    pub fn visible_nodes(&self) -> &[NodeId] {
        &self.visible
    }

    pub fn tree(&self) -> &Tree<T> {
        &self.tree
    }

    pub fn into_tree(self) -> Tree<T> {
        self.tree
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Rows inside the scroll window.
    pub fn visible_lines(&self) -> &[Line] {
        self.viewport.visible_lines()
    }

    /// Rows inside the scroll window as unstyled text, one per line.
    pub fn view(&self) -> String {
        self.visible_lines()
            .iter()
            .map(Line::plain)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

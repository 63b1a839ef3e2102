//! Node model: ids, display state, the provider trait and the node arena.
//!
//! A tree is stored as a flat arena of slots. Each slot holds the provider's
//! data, a non-owning link to its parent, the ordered list of its children
//! and the transient display state. Traversal and rendering code never touch
//! the arena directly; they go through [`Hierarchy`], so the storage can
//! change without touching them.

use std::fmt;

use bitflags::bitflags;

use crate::error::{Error, Result};

bitflags! {
    /// Display-state annotation of a node.
    ///
    /// The flags are independent of each other. `LAST_CHILD` and
    /// `HAS_PREVIOUS_SIBLING` are derived and recomputed before every full
    /// render; never treat them as stable across structural changes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeState: u16 {
        /// The node is under the cursor of a focused view.
        const SELECTED = 1 << 0;
        /// The node has children and can be expanded or collapsed.
        const COLLAPSIBLE = 1 << 1;
        /// The node's children are not part of the visible order.
        const COLLAPSED = 1 << 2;
        /// The node and its whole subtree are left out of the visible order.
        const HIDDEN = 1 << 3;
        /// The node is the last visible entry among its siblings.
        const LAST_CHILD = 1 << 4;
        /// The node is not the first visible entry among its siblings.
        const HAS_PREVIOUS_SIBLING = 1 << 5;
    }
}

impl NodeState {
    /// No flags set.
    pub const NONE: Self = Self::empty();

    pub fn is_selected(self) -> bool {
        self.contains(Self::SELECTED)
    }

    pub fn is_collapsible(self) -> bool {
        self.contains(Self::COLLAPSIBLE)
    }

    /// `COLLAPSED` only counts on a collapsible node.
    pub fn is_collapsed(self) -> bool {
        self.contains(Self::COLLAPSIBLE | Self::COLLAPSED)
    }

    pub fn is_expanded(self) -> bool {
        !self.is_collapsed()
    }

    pub fn is_hidden(self) -> bool {
        self.contains(Self::HIDDEN)
    }

    pub fn is_last_child(self) -> bool {
        self.contains(Self::LAST_CHILD)
    }

    pub fn has_previous_sibling(self) -> bool {
        self.contains(Self::HAS_PREVIOUS_SIBLING)
    }
}

/// Stable identifier of a node inside a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Data supplied by the provider for each node.
///
/// # Example
///
/// ```
/// use treeish::{Node, NodeState};
///
/// struct Dir {
///     name: String,
/// }
///
/// impl Node for Dir {
///     fn name(&self, state: NodeState) -> String {
///         let marker = if state.is_collapsed() { ">" } else { "v" };
///         format!("{marker} {}", self.name)
///     }
/// }
/// ```
pub trait Node {
    /// Display label. Receives the current state so it can reflect it,
    /// e.g. with an expansion marker.
    fn name(&self, state: NodeState) -> String;

    /// Metadata rendered before the branch glyphs, e.g. permission bits.
    fn prefix(&self) -> String {
        String::new()
    }
}

impl Node for String {
    fn name(&self, _state: NodeState) -> String {
        self.clone()
    }
}

impl Node for &str {
    fn name(&self, _state: NodeState) -> String {
        (*self).to_string()
    }
}

/// Read/write access to tree shape and node state.
///
/// Unknown ids behave like detached leaves: no parent, no children, no
/// flags.
pub trait Hierarchy {
    fn parent(&self, id: NodeId) -> Option<NodeId>;

    fn children(&self, id: NodeId) -> &[NodeId];

    fn state(&self, id: NodeId) -> NodeState;

    fn set_state(&mut self, id: NodeId, state: NodeState);

    fn insert_state(&mut self, id: NodeId, flags: NodeState) {
        let state = self.state(id);
        self.set_state(id, state | flags);
    }

    fn remove_state(&mut self, id: NodeId, flags: NodeState) {
        let state = self.state(id);
        self.set_state(id, state - flags);
    }
}

#[derive(Debug, Clone)]
struct Slot<T> {
    data: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    state: NodeState,
}

/// Arena holding every node of one tree.
///
/// # Example
///
/// ```
/// use treeish::{Hierarchy, NodeState, Tree};
///
/// let mut tree = Tree::new();
/// let root = tree.add_root("root", NodeState::NONE);
/// let child = tree.add_child(root, "child", NodeState::NONE).unwrap();
///
/// assert_eq!(tree.parent(child), Some(root));
/// assert!(tree.state(root).is_collapsible());
/// ```
#[derive(Debug, Clone)]
pub struct Tree<T> {
    slots: Vec<Slot<T>>,
    roots: Vec<NodeId>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            roots: Vec::new(),
        }
    }
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level node.
    pub fn add_root(&mut self, data: T, state: NodeState) -> NodeId {
        let id = self.push(data, None, state);
        self.roots.push(id);
        id
    }

    /// Append a child to `parent`, which becomes collapsible.
    pub fn add_child(&mut self, parent: NodeId, data: T, state: NodeState) -> Result<NodeId> {
        if !self.contains(parent) {
            return Err(Error::UnknownNode(parent));
        }
        let id = self.push(data, Some(parent), state);
        let slot = &mut self.slots[parent.0];
        slot.children.push(id);
        slot.state |= NodeState::COLLAPSIBLE;
        Ok(id)
    }

    fn push(&mut self, data: T, parent: Option<NodeId>, state: NodeState) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            data,
            parent,
            children: Vec::new(),
            state,
        });
        id
    }

    /// Top-level nodes in display order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.slots.len()
    }

    /// Total number of nodes, visible or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Every id in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.slots.len()).map(NodeId)
    }

    pub fn data(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id.0).map(|slot| &slot.data)
    }

    pub fn data_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots.get_mut(id.0).map(|slot| &mut slot.data)
    }
}

impl<T: Node> Tree<T> {
    /// The provider's label for `id`, given its current state.
    pub fn name(&self, id: NodeId) -> Option<String> {
        self.slots.get(id.0).map(|slot| slot.data.name(slot.state))
    }

    /// The provider's metadata prefix for `id`.
    pub fn prefix(&self, id: NodeId) -> Option<String> {
        self.slots.get(id.0).map(|slot| slot.data.prefix())
    }
}

impl<T> Hierarchy for Tree<T> {
    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.0).and_then(|slot| slot.parent)
    }

    fn children(&self, id: NodeId) -> &[NodeId] {
        self.slots
            .get(id.0)
            .map(|slot| slot.children.as_slice())
            .unwrap_or(&[])
    }

    fn state(&self, id: NodeId) -> NodeState {
        self.slots
            .get(id.0)
            .map(|slot| slot.state)
            .unwrap_or_default()
    }

    fn set_state(&mut self, id: NodeId, state: NodeState) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            slot.state = state;
        }
    }
}

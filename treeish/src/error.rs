//! Error types for the tree view.

use thiserror::Error;

use crate::node::NodeId;

/// Errors produced while building or driving a tree view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The tree handed to the view has no root nodes.
    #[error("cannot build a tree view from a tree without root nodes")]
    EmptyTree,

    /// Every root is hidden, so there is no row to put the cursor on.
    #[error("tree has no visible nodes")]
    NothingVisible,

    /// A node id that does not belong to this tree.
    #[error("node {0} does not exist in this tree")]
    UnknownNode(NodeId),

    /// A visible row that should exist could not be resolved to a node.
    ///
    /// This means the flattened order and the cursor disagree; it is a bug
    /// in the caller or in the view, never a user error.
    #[error("no visible node at row {index} (visible rows: {len})")]
    IndexOutOfRange {
        /// The requested row.
        index: usize,
        /// Number of visible rows at the time.
        len: usize,
    },

    /// A symbol set name that is not one of the presets.
    #[error("unknown symbol set '{0}'")]
    UnknownSymbolSet(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

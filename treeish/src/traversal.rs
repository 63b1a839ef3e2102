//! Linear order over an expandable tree.
//!
//! The visible order is depth-first with children after their parent. A
//! hidden node contributes nothing, not even its descendants; a collapsed
//! node contributes itself but none of its descendants.

use crate::node::{Hierarchy, NodeId, NodeState};

/// Outcome of walking a sibling sequence looking for a row.
enum Seek {
    Found(NodeId),
    /// Not found; this many visible rows were walked over.
    Passed(usize),
}

/// The `index`-th visible node of `sequence`.
///
/// Equivalent to `flatten(h, sequence).get(index)` but stops as soon as the
/// row is reached instead of building the whole order. An empty sequence or
/// an index past the end yields `None`.
pub fn at<H: Hierarchy + ?Sized>(h: &H, sequence: &[NodeId], index: usize) -> Option<NodeId> {
    match seek(h, sequence, index) {
        Seek::Found(id) => Some(id),
        Seek::Passed(_) => None,
    }
}

fn seek<H: Hierarchy + ?Sized>(h: &H, sequence: &[NodeId], index: usize) -> Seek {
    // `passed <= index` holds on every iteration.
    let mut passed = 0;
    for &id in sequence {
        let state = h.state(id);
        if state.is_hidden() {
            continue;
        }
        if passed == index {
            return Seek::Found(id);
        }
        passed += 1;

        if state.is_expanded() {
            match seek(h, h.children(id), index - passed) {
                found @ Seek::Found(_) => return found,
                Seek::Passed(rows) => passed += rows,
            }
        }
    }
    Seek::Passed(passed)
}

/// Every visible node of `sequence`, in display order.
pub fn flatten<H: Hierarchy + ?Sized>(h: &H, sequence: &[NodeId]) -> Vec<NodeId> {
    let mut out = Vec::new();
    collect_visible(h, sequence, &mut out);
    out
}

fn collect_visible<H: Hierarchy + ?Sized>(h: &H, sequence: &[NodeId], out: &mut Vec<NodeId>) {
    for &id in sequence {
        let state = h.state(id);
        if state.is_hidden() {
            continue;
        }
        out.push(id);
        if state.is_expanded() {
            collect_visible(h, h.children(id), out);
        }
    }
}

/// Number of descendants of `id`, regardless of hidden or collapsed state.
///
/// A reporting helper. [`at`] does not use it; it counts the visible rows it
/// walks instead.
pub fn count_below<H: Hierarchy + ?Sized>(h: &H, id: NodeId) -> usize {
    h.children(id)
        .iter()
        .map(|&child| 1 + count_below(h, child))
        .sum()
}

/// Rows the subtree of `id` adds to the visible order while `id` is expanded.
///
/// Equals [`count_below`] when nothing under `id` is hidden or collapsed.
pub fn visible_below<H: Hierarchy + ?Sized>(h: &H, id: NodeId) -> usize {
    count_visible(h, h.children(id))
}

fn count_visible<H: Hierarchy + ?Sized>(h: &H, sequence: &[NodeId]) -> usize {
    sequence
        .iter()
        .filter(|&&id| !h.state(id).is_hidden())
        .map(|&id| {
            if h.state(id).is_expanded() {
                1 + count_visible(h, h.children(id))
            } else {
                1
            }
        })
        .sum()
}

/// Number of parent hops from `id` to its root. Roots are at depth 0.
pub fn depth<H: Hierarchy + ?Sized>(h: &H, id: NodeId) -> usize {
    let mut depth = 0;
    let mut current = id;
    while let Some(parent) = h.parent(current) {
        depth += 1;
        current = parent;
    }
    depth
}

/// Recompute the derived sibling flags for everything that renders.
///
/// Within each group of siblings only non-hidden nodes count: the first
/// loses `HAS_PREVIOUS_SIBLING`, the last gains `LAST_CHILD`. Nodes with
/// children are marked `COLLAPSIBLE`. Collapsed subtrees are skipped; they
/// are refreshed again once expanded.
pub fn refresh_sibling_flags<H: Hierarchy + ?Sized>(h: &mut H, sequence: &[NodeId]) {
    let visible: Vec<NodeId> = sequence
        .iter()
        .copied()
        .filter(|&id| !h.state(id).is_hidden())
        .collect();
    let last = visible.len().saturating_sub(1);

    for (i, &id) in visible.iter().enumerate() {
        let mut state = h.state(id) - (NodeState::LAST_CHILD | NodeState::HAS_PREVIOUS_SIBLING);
        if i > 0 {
            state |= NodeState::HAS_PREVIOUS_SIBLING;
        }
        if i == last {
            state |= NodeState::LAST_CHILD;
        }
        if !h.children(id).is_empty() {
            state |= NodeState::COLLAPSIBLE;
        }
        h.set_state(id, state);

        if state.is_expanded() {
            let children = h.children(id).to_vec();
            refresh_sibling_flags(h, &children);
        }
    }
}

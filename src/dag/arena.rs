//! Hash-consed storage for decision-DAG nodes.
//!
//! An [`Arena`] owns every internal node ever constructed through it and
//! guarantees structural uniqueness: two calls to [`Arena::intern`] with the
//! same `(depth, negative, positive)` triple return the identical handle.

use std::collections::HashMap;

/// Stable reference into a single [`Arena`]. Cheap to copy, and — within the
/// arena that produced it — comparable by identity: two handles are equal
/// exactly when they denote structurally equal subgraphs.
///
/// Handles from different arenas must never be mixed; the arena has no way
/// to detect this (see the crate-level docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeHandle {
    /// The constant-false terminal.
    Zero,
    /// The constant-true terminal.
    One,
    /// A reference to an interned internal node.
    Internal(InternalId),
}

impl NodeHandle {
    /// `true` for either terminal.
    pub fn is_terminal(self) -> bool {
        matches!(self, NodeHandle::Zero | NodeHandle::One)
    }
}

/// Index of an internal node within its owning [`Arena`]. Opaque outside this
/// crate; never reused across arenas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InternalId(u32);

/// The triple an internal node is keyed on. Two nodes with an equal triple
/// are, by construction, the same node (invariant 1 in the data model).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Node {
    pub(crate) depth: u32,
    pub(crate) negative: NodeHandle,
    pub(crate) positive: NodeHandle,
}

/// Owning container for interned decision-DAG nodes.
///
/// Construction of cycles is impossible: [`Arena::intern`] is the only way
/// to produce a handle, and it only ever accepts handles already produced by
/// this same arena (terminals, or earlier `intern` results).
#[derive(Debug, Default)]
pub struct Arena {
    nodes: Vec<Node>,
    lookup: HashMap<Node, InternalId>,
}

impl Arena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty arena with room for `capacity` internal nodes
    /// without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            nodes: Vec::with_capacity(capacity),
            lookup: HashMap::with_capacity(capacity),
        }
    }

    /// Number of distinct internal nodes currently interned.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if no internal node has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the unique handle for `(depth, negative, positive)`, interning
    /// it if this is the first time the triple has been requested.
    ///
    /// Applies subsumption first: if `negative == positive`, the shared
    /// child is returned directly and nothing is interned (invariant 2).
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn intern(&mut self, depth: u32, negative: NodeHandle, positive: NodeHandle) -> NodeHandle {
        if negative == positive {
            return negative;
        }

        let key = Node { depth, negative, positive };
        if let Some(&id) = self.lookup.get(&key) {
            tracing::trace!(?id, "intern: structural hit");
            return NodeHandle::Internal(id);
        }

        let id = InternalId(self.nodes.len() as u32);
        self.nodes.push(key);
        self.lookup.insert(key, id);
        tracing::trace!(?id, depth, "intern: new node");
        NodeHandle::Internal(id)
    }

    /// Depth of `handle`. `None` for either terminal, which carry no depth.
    pub fn depth(&self, handle: NodeHandle) -> Option<u32> {
        self.node(handle).map(|n| n.depth)
    }

    /// Negative (variable-false) child of `handle`. `None` for either
    /// terminal.
    pub fn negative(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.node(handle).map(|n| n.negative)
    }

    /// Positive (variable-true) child of `handle`. `None` for either
    /// terminal.
    pub fn positive(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.node(handle).map(|n| n.positive)
    }

    pub(crate) fn node(&self, handle: NodeHandle) -> Option<Node> {
        match handle {
            NodeHandle::Internal(InternalId(idx)) => self.nodes.get(idx as usize).copied(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn intern_is_structurally_unique() {
        // Layout: two handles built from the same triple must collapse to
        // the same node (S1 in the spec).
        let mut arena = Arena::new();
        let a = arena.intern(0, NodeHandle::One, NodeHandle::Zero);
        let b = arena.intern(0, NodeHandle::One, NodeHandle::Zero);
        assert_eq!(a, b);
        assert_eq!(arena.len(), 1);
    }

    #[test_log::test]
    fn intern_subsumes_identical_children() {
        let mut arena = Arena::new();
        let child = arena.intern(0, NodeHandle::Zero, NodeHandle::One);
        let subsumed = arena.intern(1, child, child);
        assert_eq!(subsumed, child);
        assert_eq!(arena.len(), 1);
    }

    #[test_log::test]
    fn distinct_triples_get_distinct_handles() {
        let mut arena = Arena::new();
        let a = arena.intern(0, NodeHandle::Zero, NodeHandle::One);
        let b = arena.intern(1, NodeHandle::Zero, NodeHandle::One);
        assert_ne!(a, b);
        assert_eq!(arena.len(), 2);
    }
}

//! Lossy textual serialization of a [`Tree`].
//!
//! Unlike [`crate::dag::printer::print`], this is not meant to round-trip:
//! branches that can never reach a satisfiable leaf are dropped entirely,
//! since they contribute nothing an eventual [`super::predict`] call could
//! ever return `true` for. Literals are emitted as bare integers — the
//! packed `(index, sign)` encoding, not the `[index]`/`[index]'` notation
//! used by the decision-DAG codec.

use super::Tree;

/// Renders `tree` as a "+"-joined list of the literals (and nested
/// sub-expressions) that can still lead to a satisfiable leaf.
pub fn tree_print(tree: &Tree) -> String {
    match tree {
        Tree::Leaf { .. } => String::new(),
        Tree::Inner { children } => children
            .iter()
            .filter(|(_, child)| reaches_satisfiable(child))
            .map(|(&(_, literal), child)| match child {
                Tree::Leaf { .. } => literal.to_string(),
                Tree::Inner { .. } => format!("{literal}({})", tree_print(child)),
            })
            .collect::<Vec<_>>()
            .join("+"),
    }
}

fn reaches_satisfiable(tree: &Tree) -> bool {
    match tree {
        Tree::Leaf { satisfiable } => *satisfiable,
        Tree::Inner { children } => children.values().any(reaches_satisfiable),
    }
}

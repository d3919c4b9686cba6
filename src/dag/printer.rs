//! Textual serialization of decision-DAG nodes.
//!
//! Grammar (mirrored by [`super::parser`]):
//!
//! ```text
//! expr    := term ('+' term)*
//! term    := factor+
//! factor  := '[' index ']' '\''?  |  '(' expr ')' '\''?
//! ```
//!
//! Terminals carry no information on their own and print as the empty
//! string; an internal node emits a term per non-`ZERO` child, guarded by
//! the depth literal (negated for the negative child), joined by `+` and
//! parenthesized only when both children contribute a term.

use std::fmt::Write as _;

use super::arena::{Arena, NodeHandle};

/// Renders `handle` using the crate's infix literal/apostrophe grammar.
///
/// Not injective on its own — `ZERO` and `ONE` both print as `""` — but
/// [`super::parser::parse`] reads every such string back to an equal node
/// within the context it was produced from (see the round-trip property in
/// the crate tests).
pub fn print(arena: &Arena, handle: NodeHandle) -> String {
    let mut out = String::new();
    write_node(arena, handle, &mut out);
    out
}

fn write_node(arena: &Arena, handle: NodeHandle, out: &mut String) {
    let NodeHandle::Internal(_) = handle else { return };
    let node = arena.node(handle).expect("handle produced by this arena");

    let mut negative_term = String::new();
    if node.negative != NodeHandle::Zero {
        let _ = write!(negative_term, "[{}]'", node.depth);
        write_node(arena, node.negative, &mut negative_term);
    }

    let mut positive_term = String::new();
    if node.positive != NodeHandle::Zero {
        let _ = write!(positive_term, "[{}]", node.depth);
        write_node(arena, node.positive, &mut positive_term);
    }

    match (negative_term.is_empty(), positive_term.is_empty()) {
        (false, false) => {
            out.push('(');
            out.push_str(&negative_term);
            out.push('+');
            out.push_str(&positive_term);
            out.push(')');
        }
        (false, true) => out.push_str(&negative_term),
        (true, false) => out.push_str(&positive_term),
        // Subsumption guarantees negative != positive, so both children
        // being ZERO here is unreachable: that triple collapses to ZERO
        // itself at intern time.
        (true, true) => unreachable!("internal node with both children ZERO"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dag::algebra::{conjoin, conjoin_all, disjoin_all, invert, literal};

    #[test_log::test]
    fn terminals_print_as_empty_string() {
        let arena = Arena::new();
        assert_eq!(print(&arena, NodeHandle::One), "");
        assert_eq!(print(&arena, NodeHandle::Zero), "");
    }

    #[test_log::test]
    fn positive_literal_prints_as_bare_bracket() {
        let mut arena = Arena::new();
        let x = literal(&mut arena, 2, true);
        assert_eq!(print(&arena, x), "[2]");
    }

    #[test_log::test]
    fn negative_literal_prints_with_trailing_apostrophe() {
        let mut arena = Arena::new();
        let x = literal(&mut arena, 2, false);
        assert_eq!(print(&arena, x), "[2]'");
    }

    #[test_log::test]
    fn scenario_s3_matches_the_worked_example() {
        let mut arena = Arena::new();
        let a = literal(&mut arena, 0, true);
        let b = literal(&mut arena, 1, true);
        let c = literal(&mut arena, 2, true);
        let d = literal(&mut arena, 3, true);
        let e = literal(&mut arena, 4, true);
        let bcd = conjoin_all(&mut arena, b, c, &[d]);
        let expr = disjoin_all(&mut arena, a, bcd, &[e]);
        assert_eq!(
            print(&arena, expr),
            "([0]'([1]'[4]+[1]([2]'[4]+[2]([3]'[4]+[3])))+[0])"
        );
    }

    #[test_log::test]
    fn conjoined_literals_print_as_a_nested_term() {
        let mut arena = Arena::new();
        let x = literal(&mut arena, 0, true);
        let y = literal(&mut arena, 1, true);
        let and = conjoin(&mut arena, x, y);
        assert_eq!(print(&arena, and), "[0][1]");
        let not_and = invert(&mut arena, and);
        assert_eq!(print(&arena, not_and), "([0]'+[0][1]')");
    }
}

//! Boolean evaluation of decision-DAG nodes against a concrete input.

use crate::errors::IndexOutOfRange;

use super::arena::{Arena, NodeHandle};

/// Evaluates `handle` against `input`, where `input[i]` is the truth value
/// assigned to variable `i`.
///
/// Walks toward the positive child when the variable at the current node's
/// depth is `true`, the negative child otherwise, until a terminal is
/// reached. Fails if any node visited along the way addresses a variable
/// index `input` does not cover.
#[tracing::instrument(level = "trace", skip(arena, input))]
pub fn evaluate(arena: &Arena, handle: NodeHandle, input: &[bool]) -> Result<bool, IndexOutOfRange> {
    let mut current = handle;
    loop {
        match current {
            NodeHandle::Zero => return Ok(false),
            NodeHandle::One => return Ok(true),
            NodeHandle::Internal(_) => {
                let node = arena.node(current).expect("handle produced by this arena");
                let index = node.depth as usize;
                let bit = *input
                    .get(index)
                    .ok_or(IndexOutOfRange { index, len: input.len() })?;
                current = if bit { node.positive } else { node.negative };
            }
        }
    }
}

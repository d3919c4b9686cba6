//! Prediction (classification) of inputs against a built [`Tree`].

use crate::errors::IndexOutOfRange;

use super::{index, sign, Tree};

/// Classifies `input` against `tree`.
///
/// At each [`Tree::Inner`] node, every child whose literal matches `input`
/// is followed; the prediction is the logical OR of what those children
/// predict (an input can be covered by more than one edge). Fails if any
/// literal visited addresses a variable `input` does not cover.
#[tracing::instrument(level = "trace", skip(tree, input))]
pub fn predict(tree: &Tree, input: &[bool]) -> Result<bool, IndexOutOfRange> {
    match tree {
        Tree::Leaf { satisfiable } => Ok(*satisfiable),
        Tree::Inner { children } => {
            for (&(_, literal), child) in children {
                let bit_index = index(literal) as usize;
                let bit = *input
                    .get(bit_index)
                    .ok_or(IndexOutOfRange { index: bit_index, len: input.len() })?;
                if bit == sign(literal) && predict(child, input)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::builder::build;
    use super::*;

    #[test_log::test]
    fn predict_matches_training_labels() {
        let zeros = vec![vec![false, false], vec![false, true]];
        let ones = vec![vec![true, false], vec![true, true]];
        let tree = build(2, &zeros, &ones);
        for zero in &zeros {
            assert_eq!(predict(&tree, zero).unwrap(), false);
        }
        for one in &ones {
            assert_eq!(predict(&tree, one).unwrap(), true);
        }
    }

    #[test_log::test]
    fn predict_reports_out_of_range_index() {
        let tree = Tree::Inner {
            children: [((0usize, super::super::make_literal(3, false)), Tree::Leaf { satisfiable: true })]
                .into_iter()
                .collect(),
        };
        let err = predict(&tree, &[true, true]).unwrap_err();
        assert_eq!(err, IndexOutOfRange { index: 3, len: 2 });
    }
}

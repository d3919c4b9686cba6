//! Builds a [`Tree`] from labeled bit vectors by recursively picking the
//! literal that covers the fewest negative examples.

use std::collections::{BTreeMap, HashMap};

use super::{covers, make_literal, Tree};

/// Builds a generalization tree over `variable_count` boolean variables from
/// negative examples (`zeros`) and positive examples (`ones`).
///
/// At each level, every literal over the `variable_count` variables is
/// scored by how many `zeros` it covers; literals are tried in ascending
/// order of that score (ties broken by the literal's own value), and each
/// positive example is routed down the first literal (in that order) that
/// covers it. Recursion stops, per branch, as soon as either the zero set or
/// the one set assigned to it is empty.
#[tracing::instrument(level = "debug", skip(zeros, ones))]
pub fn build(variable_count: u32, zeros: &[Vec<bool>], ones: &[Vec<bool>]) -> Tree {
    build_rec(variable_count, zeros, ones)
}

fn build_rec(variable_count: u32, zeros: &[Vec<bool>], ones: &[Vec<bool>]) -> Tree {
    if zeros.is_empty() || ones.is_empty() {
        return Tree::Leaf { satisfiable: !ones.is_empty() };
    }

    // Z(l): indices of `zeros` covered by each literal, sorted ascending by
    // (coverage size, literal value).
    let mut by_literal: Vec<(super::Literal, Vec<usize>)> = (0..variable_count)
        .flat_map(|v| [make_literal(v, false), make_literal(v, true)])
        .map(|literal| {
            let covered: Vec<usize> = zeros
                .iter()
                .enumerate()
                .filter(|(_, z)| covers(literal, z))
                .map(|(i, _)| i)
                .collect();
            (literal, covered)
        })
        .collect();
    by_literal.sort_by_key(|(literal, covered)| (covered.len(), *literal));

    // Route each positive example to the first literal (in sorted order)
    // that covers it.
    let mut assigned: HashMap<super::Literal, Vec<usize>> = HashMap::new();
    for (one_idx, one) in ones.iter().enumerate() {
        if let Some((literal, _)) = by_literal.iter().find(|(literal, _)| covers(*literal, one)) {
            assigned.entry(*literal).or_default().push(one_idx);
        }
    }

    let mut children = BTreeMap::new();
    for (literal, zero_indices) in &by_literal {
        let Some(one_indices) = assigned.get(literal) else { continue };

        let child_zeros: Vec<Vec<bool>> = zero_indices.iter().map(|&i| zeros[i].clone()).collect();
        let child_ones: Vec<Vec<bool>> = one_indices.iter().map(|&i| ones[i].clone()).collect();
        let child = build_rec(variable_count, &child_zeros, &child_ones);
        children.insert((zero_indices.len(), *literal), child);
    }

    Tree::Inner { children }
}

//! Node-algebra operators built on top of [`Arena::intern`](super::arena::Arena::intern).

use std::collections::HashMap;

use crate::errors::LengthMismatch;

use super::arena::{Arena, NodeHandle};

/// Returns the node representing variable `index` with the given polarity:
/// `positive = true` evaluates to the input bit directly, `positive = false`
/// evaluates to its negation.
pub fn literal(arena: &mut Arena, index: u32, positive: bool) -> NodeHandle {
    if positive {
        arena.intern(index, NodeHandle::Zero, NodeHandle::One)
    } else {
        arena.intern(index, NodeHandle::One, NodeHandle::Zero)
    }
}

/// Returns the logical negation of `handle`.
///
/// Structural, not evaluative: the result is built by swapping children
/// recursively, memoized per call so shared subgraphs are only visited once.
#[tracing::instrument(level = "trace", skip(arena, cache))]
pub fn invert(arena: &mut Arena, handle: NodeHandle) -> NodeHandle {
    let mut cache = HashMap::new();
    invert_cached(arena, handle, &mut cache)
}

fn invert_cached(
    arena: &mut Arena,
    handle: NodeHandle,
    cache: &mut HashMap<NodeHandle, NodeHandle>,
) -> NodeHandle {
    match handle {
        NodeHandle::Zero => NodeHandle::One,
        NodeHandle::One => NodeHandle::Zero,
        NodeHandle::Internal(_) => {
            if let Some(&cached) = cache.get(&handle) {
                return cached;
            }
            let node = arena.node(handle).expect("handle produced by this arena");
            let negative = invert_cached(arena, node.negative, cache);
            let positive = invert_cached(arena, node.positive, cache);
            let result = arena.intern(node.depth, negative, positive);
            cache.insert(handle, result);
            result
        }
    }
}

/// Which boolean gate a [`join`] call computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gate {
    Disjoin,
    Conjoin,
}

/// Computes the pairwise disjunction (`left + right`) of two nodes.
pub fn disjoin(arena: &mut Arena, left: NodeHandle, right: NodeHandle) -> NodeHandle {
    let mut cache = HashMap::new();
    join(arena, left, right, Gate::Disjoin, &mut cache)
}

/// Computes the pairwise conjunction (`left right`) of two nodes.
pub fn conjoin(arena: &mut Arena, left: NodeHandle, right: NodeHandle) -> NodeHandle {
    let mut cache = HashMap::new();
    join(arena, left, right, Gate::Conjoin, &mut cache)
}

fn canonical_pair(left: NodeHandle, right: NodeHandle) -> (NodeHandle, NodeHandle) {
    if left <= right { (left, right) } else { (right, left) }
}

#[tracing::instrument(level = "trace", skip(arena, cache))]
fn join(
    arena: &mut Arena,
    left: NodeHandle,
    right: NodeHandle,
    gate: Gate,
    cache: &mut HashMap<(NodeHandle, NodeHandle), NodeHandle>,
) -> NodeHandle {
    use NodeHandle::{One, Zero};

    match (left, right, gate) {
        (Zero, Zero, _) => Zero,
        (One, One, _) => One,
        (Zero, One, Gate::Disjoin) | (One, Zero, Gate::Disjoin) => One,
        (Zero, One, Gate::Conjoin) | (One, Zero, Gate::Conjoin) => Zero,
        (Zero, other, Gate::Disjoin) | (other, Zero, Gate::Disjoin) => other,
        (One, other, Gate::Conjoin) | (other, One, Gate::Conjoin) => other,
        (Zero, _, Gate::Conjoin) | (_, Zero, Gate::Conjoin) => Zero,
        (One, _, Gate::Disjoin) | (_, One, Gate::Disjoin) => One,
        _ => {
            let key = canonical_pair(left, right);
            if let Some(&cached) = cache.get(&key) {
                return cached;
            }

            let l = arena.node(left).expect("terminal pairs already handled above");
            let r = arena.node(right).expect("terminal pairs already handled above");

            let (depth, left_neg, left_pos, right_neg, right_pos) = match l.depth.cmp(&r.depth) {
                std::cmp::Ordering::Equal => (l.depth, l.negative, l.positive, r.negative, r.positive),
                std::cmp::Ordering::Less => (l.depth, l.negative, l.positive, right, right),
                std::cmp::Ordering::Greater => (r.depth, left, left, r.negative, r.positive),
            };

            let negative = join(arena, left_neg, right_neg, gate, cache);
            let positive = join(arena, left_pos, right_pos, gate, cache);
            let result = arena.intern(depth, negative, positive);
            cache.insert(key, result);
            result
        }
    }
}

/// Folds [`disjoin`] across `first`, `second` and `rest`; the two explicit
/// leading operands make the "at least two operands" requirement a type
/// error rather than a runtime check.
pub fn disjoin_all(
    arena: &mut Arena,
    first: NodeHandle,
    second: NodeHandle,
    rest: &[NodeHandle],
) -> NodeHandle {
    let mut acc = disjoin(arena, first, second);
    for &operand in rest {
        acc = disjoin(arena, acc, operand);
    }
    acc
}

/// Folds [`conjoin`] across `first`, `second` and `rest`.
pub fn conjoin_all(
    arena: &mut Arena,
    first: NodeHandle,
    second: NodeHandle,
    rest: &[NodeHandle],
) -> NodeHandle {
    let mut acc = conjoin(arena, first, second);
    for &operand in rest {
        acc = conjoin(arena, acc, operand);
    }
    acc
}

/// Pairwise exclusive-or: `left XOR right`.
pub fn exor(arena: &mut Arena, left: NodeHandle, right: NodeHandle) -> NodeHandle {
    let not_left = invert(arena, left);
    let not_right = invert(arena, right);
    let a = conjoin(arena, left, not_right);
    let b = conjoin(arena, not_left, right);
    disjoin(arena, a, b)
}

/// Pairwise exclusive-nor (equivalence): `left XNOR right`.
pub fn exnor(arena: &mut Arena, left: NodeHandle, right: NodeHandle) -> NodeHandle {
    let xor = exor(arena, left, right);
    invert(arena, xor)
}

/// Folds [`exor`] across `first`, `second` and `rest`.
pub fn exor_all(
    arena: &mut Arena,
    first: NodeHandle,
    second: NodeHandle,
    rest: &[NodeHandle],
) -> NodeHandle {
    let mut acc = exor(arena, first, second);
    for &operand in rest {
        acc = exor(arena, acc, operand);
    }
    acc
}

/// Folds [`exnor`] across `first`, `second` and `rest`.
pub fn exnor_all(
    arena: &mut Arena,
    first: NodeHandle,
    second: NodeHandle,
    rest: &[NodeHandle],
) -> NodeHandle {
    let mut acc = exnor(arena, first, second);
    for &operand in rest {
        acc = exnor(arena, acc, operand);
    }
    acc
}

/// Element-wise XOR of two equal-length vectors, reduced by disjunction:
/// "the vectors differ in at least one position".
pub fn exor_vec(
    arena: &mut Arena,
    left: &[NodeHandle],
    right: &[NodeHandle],
) -> Result<NodeHandle, LengthMismatch> {
    reduce_pairwise(arena, left, right, exor, disjoin_all)
}

/// Element-wise XNOR of two equal-length vectors, reduced by conjunction:
/// "the vectors are equal in every position".
pub fn exnor_vec(
    arena: &mut Arena,
    left: &[NodeHandle],
    right: &[NodeHandle],
) -> Result<NodeHandle, LengthMismatch> {
    reduce_pairwise(arena, left, right, exnor, conjoin_all)
}

fn reduce_pairwise(
    arena: &mut Arena,
    left: &[NodeHandle],
    right: &[NodeHandle],
    pairwise: fn(&mut Arena, NodeHandle, NodeHandle) -> NodeHandle,
    fold_all: fn(&mut Arena, NodeHandle, NodeHandle, &[NodeHandle]) -> NodeHandle,
) -> Result<NodeHandle, LengthMismatch> {
    if left.len() != right.len() {
        return Err(LengthMismatch { left: left.len(), right: right.len() });
    }
    if left.is_empty() {
        // The empty product is the neutral element of conjunction; for the
        // disjunctive reduction (exor_vec) an empty input trivially "does
        // not differ anywhere", so ONE is the consistent answer for both.
        return Ok(NodeHandle::One);
    }

    let mut terms: Vec<NodeHandle> = left
        .iter()
        .zip(right.iter())
        .map(|(&l, &r)| pairwise(arena, l, r))
        .collect();

    if terms.len() == 1 {
        return Ok(terms.pop().unwrap());
    }
    let first = terms[0];
    let second = terms[1];
    Ok(fold_all(arena, first, second, &terms[2..]))
}

/// Ripple-carry multiplication of two bit vectors (least significant bit
/// first; `left` and `right` need not be the same length), returning
/// `left.len() + right.len()` result bits, also least-significant-first.
pub fn multiply(
    arena: &mut Arena,
    left: &[NodeHandle],
    right: &[NodeHandle],
) -> Vec<NodeHandle> {
    let width = left.len() + right.len();
    let mut accumulator = vec![NodeHandle::Zero; width];

    for (i, &a) in left.iter().enumerate() {
        let mut carry = NodeHandle::Zero;
        for (j, &b) in right.iter().enumerate() {
            let partial = conjoin(arena, a, b);
            let (sum, next_carry) = full_adder(arena, accumulator[i + j], partial, carry);
            accumulator[i + j] = sum;
            carry = next_carry;
        }
        // propagate the final carry through any remaining higher bits
        let mut k = i + right.len();
        while carry != NodeHandle::Zero && k < width {
            let (sum, next_carry) = half_adder(arena, accumulator[k], carry);
            accumulator[k] = sum;
            carry = next_carry;
            k += 1;
        }
    }

    accumulator
}

fn half_adder(arena: &mut Arena, a: NodeHandle, b: NodeHandle) -> (NodeHandle, NodeHandle) {
    let sum = exor(arena, a, b);
    let carry = conjoin(arena, a, b);
    (sum, carry)
}

fn full_adder(
    arena: &mut Arena,
    a: NodeHandle,
    b: NodeHandle,
    carry_in: NodeHandle,
) -> (NodeHandle, NodeHandle) {
    let (sum1, carry1) = half_adder(arena, a, b);
    let (sum2, carry2) = half_adder(arena, sum1, carry_in);
    let carry_out = disjoin(arena, carry1, carry2);
    (sum2, carry_out)
}

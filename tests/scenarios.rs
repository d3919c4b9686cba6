//! End-to-end scenarios, run against both engines.

use factor_dag::dag::{conjoin, conjoin_all, disjoin_all, evaluate, invert, literal, parse, print};
use factor_dag::dag::{Arena, NodeHandle};
use factor_dag::tree::{build, predict, tree_print};

#[test_log::test]
fn s1_simple_dag_interns_once() {
    let mut arena = Arena::new();
    let a = literal(&mut arena, 0, true);
    let b = literal(&mut arena, 0, true);
    assert_eq!(a, b);
    assert_eq!(arena.len(), 1);
}

#[test_log::test]
fn s2_de_morgan_holds_by_handle_equality() {
    let mut arena = Arena::new();
    let x = literal(&mut arena, 0, true);
    let y = literal(&mut arena, 1, true);

    let lhs = invert(&mut arena, factor_dag::dag::disjoin(&mut arena, x, y));
    let rhs = conjoin(&mut arena, invert(&mut arena, x), invert(&mut arena, y));
    assert_eq!(lhs, rhs);
}

#[test_log::test]
fn s3_printer_matches_the_worked_example() {
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
fn s4_parse_print_round_trip() {
    let mut arena = Arena::new();
    let parsed = parse(&mut arena, "([0][1]')'([2]')").unwrap();

    let lit0 = literal(&mut arena, 0, true);
    let lit1_neg = literal(&mut arena, 1, false);
    let lit2_neg = literal(&mut arena, 2, false);
    let expected = conjoin(&mut arena, invert(&mut arena, conjoin(&mut arena, lit0, lit1_neg)), lit2_neg);

    assert_eq!(parsed, expected);
}

#[test_log::test]
fn s5_k_tree_small_generalisation() {
    // zeros = {010, 011, 000}, ones = {001, 101, 111}, bits listed
    // variable-0 first (most significant).
    let zeros = vec![
        vec![false, true, false],
        vec![false, true, true],
        vec![false, false, false],
    ];
    let ones = vec![
        vec![false, false, true],
        vec![true, false, true],
        vec![true, true, true],
    ];
    let tree = build(3, &zeros, &ones);

    let expected = [false, true, false, false, true, true, true, true];
    for (bits, &want) in (0u8..8).zip(expected.iter()) {
        let input = vec![bits & 0b100 != 0, bits & 0b010 != 0, bits & 0b001 != 0];
        assert_eq!(predict(&tree, &input).unwrap(), want, "input={input:?}");
    }

    assert_eq!(tree_print(&tree), "1+2(5)");
}

#[test_log::test]
fn s6_k_tree_constant_one_feature() {
    let variable_count = 4;
    let zeros: Vec<Vec<bool>> = (0u8..8)
        .map(|bits| {
            let mut v = vec![false];
            v.extend((0..3).map(|i| (bits >> i) & 1 == 1));
            v
        })
        .collect();
    let ones: Vec<Vec<bool>> = (0u8..8)
        .map(|bits| {
            let mut v = vec![true];
            v.extend((0..3).map(|i| (bits >> i) & 1 == 1));
            v
        })
        .collect();
    let tree = build(variable_count, &zeros, &ones);

    assert_eq!(tree_print(&tree), "1");
    for zero in &zeros {
        assert_eq!(predict(&tree, zero).unwrap(), false);
    }
    for one in &ones {
        assert_eq!(predict(&tree, one).unwrap(), true);
    }
}

#[test_log::test]
fn index_out_of_range_is_reported() {
    let mut arena = Arena::new();
    let x = literal(&mut arena, 5, true);
    let err = evaluate(&arena, x, &[true]).unwrap_err();
    assert_eq!(err.index, 5);
    assert_eq!(err.len, 1);
}

#[test_log::test]
fn zero_and_one_are_distinguishable_in_context() {
    let arena = Arena::new();
    assert_eq!(evaluate(&arena, NodeHandle::Zero, &[]).unwrap(), false);
    assert_eq!(evaluate(&arena, NodeHandle::One, &[]).unwrap(), true);
}

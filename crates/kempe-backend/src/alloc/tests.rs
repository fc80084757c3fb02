use kempe_common::{Assignment, Coloring, ProgramPoint, RegisterFile};

use super::check::conflicts;
use super::{backtracking, greedy, AllocError, Allocator, Method};
use crate::interfere::InterferenceGraph;

fn allocator(capacity: usize, points: &[&[&str]]) -> Allocator {
    let registers = RegisterFile::new(capacity).unwrap();
    let points = points
        .iter()
        .map(|point| point.iter().copied().collect::<ProgramPoint>())
        .collect();

    Allocator::new(registers, points)
}

/// Check that the coloring assigns exactly the expected registers, listed
/// in sorted variable order.
fn check(coloring: &Coloring, expected: &[(&str, Option<usize>)]) {
    let actual: Vec<_> = coloring
        .iter()
        .map(|(var, assignment)| (var.name(), assignment.register()))
        .collect();

    assert_eq!(expected, &actual[..]);
}

#[test]
fn greedy_chain() {
    let mut alloc = allocator(2, &[&["a", "b"], &["b", "c"]]);
    let coloring = alloc.color(Method::Greedy);

    assert_eq!(2, alloc.graph().edge_count());
    check(&coloring, &[("a", Some(0)), ("b", Some(1)), ("c", Some(0))]);
}

#[test]
fn single_register_pair() {
    let mut alloc = allocator(1, &[&["a", "b"]]);

    let coloring = alloc.color(Method::Greedy);
    check(&coloring, &[("a", Some(0)), ("b", None)]);

    let coloring = alloc.color(Method::Backtracking);
    assert_eq!(1, coloring.colored_count());
    assert_eq!(1, coloring.spill_count());
    check(&coloring, &[("a", None), ("b", Some(0))]);
}

#[test]
fn triangle() {
    let mut alloc = allocator(3, &[&["a", "b", "c"]]);
    let expected = [("a", Some(0)), ("b", Some(1)), ("c", Some(2))];

    assert_eq!(3, alloc.graph().edge_count());
    check(&alloc.color(Method::Backtracking), &expected);
    check(&alloc.color(Method::Greedy), &expected);
}

#[test]
fn no_points() {
    let mut alloc = allocator(1, &[]);

    assert_eq!(0, alloc.graph().edge_count());
    assert!(alloc.color(Method::Greedy).is_empty());
    assert!(alloc.color(Method::Backtracking).is_empty());
}

#[test]
fn only_empty_points() {
    let mut alloc = allocator(2, &[&[], &[]]);
    assert!(alloc.color(Method::Backtracking).is_empty());
}

#[test]
fn repeated_variable() {
    let repeated = allocator(2, &[&["a", "a", "b"]]);
    let plain = allocator(2, &[&["a", "b"]]);

    assert_eq!(1, repeated.graph().edge_count());
    assert_eq!(plain.graph(), repeated.graph());
}

#[test]
fn spilled_neighbors_do_not_block() {
    // a, b and c form a triangle; with one register only a is colored, so d
    // (next to b and c only) can take the register again.
    let mut alloc = allocator(1, &[&["a", "b", "c"], &["b", "c", "d"]]);
    let coloring = alloc.color(Method::Greedy);

    check(
        &coloring,
        &[("a", Some(0)), ("b", None), ("c", None), ("d", Some(0))],
    );

    let coloring = alloc.color(Method::Backtracking);
    assert_eq!(2, coloring.colored_count());
    assert!(conflicts(alloc.graph(), &coloring).is_empty());
}

#[test]
fn odd_cycle_spills_one() {
    let points: &[&[&str]] = &[&["a", "b"], &["b", "d"], &["d", "e"], &["e", "c"], &["c", "a"]];
    let mut alloc = allocator(2, points);

    let coloring = alloc.color(Method::Backtracking);
    assert_eq!(4, coloring.colored_count());
    assert!(conflicts(alloc.graph(), &coloring).is_empty());

    alloc = allocator(3, points);
    assert_eq!(0, alloc.color(Method::Backtracking).spill_count());
}

#[test]
fn backtracking_beats_greedy() {
    // A crown graph on six variables, named so that sorted order alternates
    // between the two sides. Two registers suffice, but first-fit in sorted
    // order runs out on the last two.
    let points: &[&[&str]] = &[
        &["v1", "v4"],
        &["v1", "v6"],
        &["v3", "v2"],
        &["v3", "v6"],
        &["v5", "v2"],
        &["v5", "v4"],
    ];
    let mut alloc = allocator(2, points);

    let greedy = alloc.color(Method::Greedy);
    check(
        &greedy,
        &[
            ("v1", Some(0)),
            ("v2", Some(0)),
            ("v3", Some(1)),
            ("v4", Some(1)),
            ("v5", None),
            ("v6", None),
        ],
    );

    let backtracking = alloc.color(Method::Backtracking);
    assert_eq!(0, backtracking.spill_count());
    assert!(conflicts(alloc.graph(), &backtracking).is_empty());
}

#[test]
fn dispatch_by_name() {
    let mut alloc = allocator(2, &[&["a", "b"]]);

    let by_name = alloc.register_coloring("greedy").unwrap();
    assert_eq!(alloc.color(Method::Greedy), by_name);

    let by_name = alloc.register_coloring("backtracking").unwrap();
    assert_eq!(alloc.color(Method::Backtracking), by_name);
}

#[test]
fn unknown_method() {
    let mut alloc = allocator(2, &[&["a", "b"]]);

    assert_eq!(
        Err(AllocError::UnknownMethod("kempe".into())),
        alloc.register_coloring("kempe")
    );
    assert_eq!(
        Err(AllocError::UnknownMethod("Greedy".into())),
        alloc.register_coloring("Greedy")
    );
}

#[test]
fn method_names_round_trip() {
    for method in Method::ALL {
        assert_eq!(Ok(method), method.to_string().parse::<Method>());
    }
}

#[test]
fn free_functions_match_allocator() {
    let mut alloc = allocator(2, &[&["a", "b", "c"], &["c", "d"]]);
    let registers = alloc.registers();
    let graph: InterferenceGraph = alloc.graph().clone();

    assert_eq!(greedy(&graph, registers), alloc.color(Method::Greedy));
    assert_eq!(
        backtracking(&graph, registers),
        alloc.color(Method::Backtracking)
    );
}

#[test]
fn every_variable_is_covered() {
    let mut alloc = allocator(1, &[&["x", "y", "z"], &["w"]]);

    for method in Method::ALL {
        let coloring = alloc.color(method);
        assert_eq!(4, coloring.len());

        for var in alloc.graph().variables() {
            assert!(coloring.get(var.name()).is_some());
        }

        assert_eq!(Some(Assignment::Register(0)), coloring.get("w"));
    }
}

#[test]
fn huge_capacity_is_cheap() {
    let mut alloc = allocator(1_000_000_000, &[&["a", "b", "c", "d"], &["d", "e"]]);
    let expected = [
        ("a", Some(0)),
        ("b", Some(1)),
        ("c", Some(2)),
        ("d", Some(3)),
        ("e", Some(0)),
    ];

    check(&alloc.color(Method::Greedy), &expected);
    check(&alloc.color(Method::Backtracking), &expected);
}

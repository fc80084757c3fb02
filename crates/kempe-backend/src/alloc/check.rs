//! Implements a simple "coherence check" to ensure no interfering variables
//! have been assigned the same register.

use kempe_common::{Assignment, Coloring, Variable};

use crate::interfere::InterferenceGraph;

/// Every pair of interfering variables that were given the same register.
pub fn conflicts<'a>(
    graph: &'a InterferenceGraph,
    coloring: &Coloring,
) -> Vec<(&'a Variable, &'a Variable)> {
    graph
        .edges()
        .map(|(u, v)| (graph.variable(u), graph.variable(v)))
        .filter(|(u, v)| {
            match (coloring.get(u.name()), coloring.get(v.name())) {
                (Some(Assignment::Register(a)), Some(Assignment::Register(b))) => a == b,
                _ => false,
            }
        })
        .collect()
}

pub(crate) fn check_consistency(graph: &InterferenceGraph, coloring: &Coloring) {
    assert_eq!(graph.len(), coloring.len(), "coloring does not cover every variable");

    if let Some((u, v)) = conflicts(graph, coloring).first() {
        let reg = coloring.get(u.name()).unwrap();
        panic!("inconsistency: both {u} and {v} were allocated the same, but they interfere (on {reg})");
    }
}

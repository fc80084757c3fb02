use std::collections::BTreeSet;

use kempe_common::{Coloring, RegisterFile};

use crate::interfere::InterferenceGraph;

/// Color the variables one at a time in sorted order, giving each the lowest
/// register not held by a neighbor colored before it. A variable with no such
/// register below the capacity is spilled. Decisions are never revisited.
pub fn greedy(graph: &InterferenceGraph, registers: RegisterFile) -> Coloring {
    let capacity = registers.capacity();
    let mut colors: Vec<Option<usize>> = vec![None; graph.len()];

    for var in 0..graph.len() {
        let taken: BTreeSet<usize> = graph
            .neighbors_of(var)
            .filter_map(|neighbor| colors[neighbor])
            .collect();

        colors[var] = (0..capacity).find(|color| !taken.contains(color));
    }

    graph.coloring(&colors)
}

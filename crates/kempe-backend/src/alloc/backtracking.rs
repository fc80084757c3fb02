//! Maximum partial coloring by exhaustive search.
//!
//! Variables are visited in order of ascending degree (ties keep the sorted
//! order). At each variable the search first tries leaving it spilled, then
//! every register no colored neighbor holds, lowest first. The first complete
//! path to color more variables than any before it is kept.
//!
//! The assignment under construction is a single buffer, written before
//! descending and reset afterwards; it is only copied when a path strictly
//! beats the best so far. Subtrees that cannot beat the best even by coloring
//! every remaining variable are skipped, which does not change the result.

use kempe_common::{Coloring, RegisterFile};

use crate::interfere::InterferenceGraph;

pub fn backtracking(graph: &InterferenceGraph, registers: RegisterFile) -> Coloring {
    let mut order: Vec<usize> = (0..graph.len()).collect();
    order.sort_by_key(|var| graph.degree_of(*var));

    let mut search = Search {
        graph,
        capacity: registers.capacity(),
        order,
        current: vec![None; graph.len()],
        best: vec![None; graph.len()],
        best_count: 0,
    };

    search.visit(0, 0);
    graph.coloring(&search.best)
}

struct Search<'a> {
    graph: &'a InterferenceGraph,
    capacity: usize,
    order: Vec<usize>,

    current: Vec<Option<usize>>,
    best: Vec<Option<usize>>,
    best_count: usize,
}

impl Search<'_> {
    fn visit(&mut self, index: usize, colored: usize) {
        if self.cannot_improve(index, colored) {
            return;
        }

        let Some(&var) = self.order.get(index) else {
            self.best_count = colored;
            self.best.clone_from(&self.current);
            return;
        };

        self.visit(index + 1, colored);

        for color in 0..self.capacity {
            // Later siblings would all be cut off on entry, so stop scanning
            // registers as soon as this level is beaten.
            if self.cannot_improve(index, colored) {
                break;
            }

            if self.is_free(var, color) {
                self.current[var] = Some(color);
                self.visit(index + 1, colored + 1);
                self.current[var] = None;
            }
        }
    }

    /// Whether coloring every variable from `index` on still would not beat
    /// the best path found so far.
    fn cannot_improve(&self, index: usize, colored: usize) -> bool {
        let remaining = self.order.len() - index;
        colored + remaining <= self.best_count
    }

    fn is_free(&self, var: usize, color: usize) -> bool {
        self.graph
            .neighbors_of(var)
            .all(|neighbor| self.current[neighbor] != Some(color))
    }
}

//! The interference graph: one node per variable, and an edge between every
//! pair of variables that are live at the same time.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use kempe_common::{Assignment, Coloring, ProgramPoint, Variable};
use log::trace;
use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    #[error("`{0}` is not a variable of this graph")]
    UnknownVariable(String),
}

/// An undirected graph without self-loops. Nodes are numbered by the sorted
/// order of their names, and every iteration follows that numbering.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InterferenceGraph {
    variables: Vec<Variable>,
    indices: HashMap<Variable, usize>,
    adjacent: Vec<BTreeSet<usize>>,
}

impl InterferenceGraph {
    /// Create a graph without any edges. Duplicate variables are merged.
    pub fn new(variables: impl IntoIterator<Item = Variable>) -> Self {
        let variables: BTreeSet<_> = variables.into_iter().collect();
        let variables: Vec<_> = variables.into_iter().collect();

        let indices = variables
            .iter()
            .enumerate()
            .map(|(i, var)| (var.clone(), i))
            .collect();
        let adjacent = vec![BTreeSet::new(); variables.len()];

        Self {
            variables,
            indices,
            adjacent,
        }
    }

    /// Build the graph of the given program points: every two distinct
    /// variables live at the same point interfere.
    pub fn from_points(points: &[ProgramPoint]) -> Self {
        let mut graph = Self::new(points.iter().flat_map(|point| point.live().cloned()));

        for point in points {
            let live: Vec<usize> = point
                .live()
                .filter_map(|var| graph.index_of(var.name()))
                .collect();

            for (i, u) in live.iter().enumerate() {
                for v in live[i + 1..].iter() {
                    graph.connect(*u, *v);
                }
            }
        }

        trace!(
            "built interference graph with {} variables and {} edges",
            graph.len(),
            graph.edge_count()
        );

        graph
    }

    /// Mark two variables as interfering. Returns whether the edge is new;
    /// an edge from a variable to itself is never added.
    pub fn add_edge(&mut self, u: &str, v: &str) -> Result<bool, GraphError> {
        let u = self.require(u)?;
        let v = self.require(v)?;
        Ok(self.connect(u, v))
    }

    fn connect(&mut self, u: usize, v: usize) -> bool {
        if u == v {
            return false;
        }

        let added = self.adjacent[u].insert(v);
        self.adjacent[v].insert(u);
        added
    }

    fn require(&self, var: &str) -> Result<usize, GraphError> {
        self.index_of(var)
            .ok_or_else(|| GraphError::UnknownVariable(var.into()))
    }

    pub fn index_of(&self, var: &str) -> Option<usize> {
        self.indices.get(var).copied()
    }

    pub fn variable(&self, index: usize) -> &Variable {
        &self.variables[index]
    }

    /// Every variable, in sorted order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// The variables interfering with `var`, in sorted order. Unknown
    /// variables have no neighbors.
    pub fn neighbors(&self, var: &str) -> impl Iterator<Item = &Variable> + '_ {
        self.index_of(var)
            .into_iter()
            .flat_map(|index| self.neighbors_of(index))
            .map(|index| &self.variables[index])
    }

    pub fn neighbors_of(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacent[index].iter().copied()
    }

    pub fn degree(&self, var: &str) -> usize {
        self.index_of(var)
            .map(|index| self.degree_of(index))
            .unwrap_or(0)
    }

    pub fn degree_of(&self, index: usize) -> usize {
        self.adjacent[index].len()
    }

    pub fn max_degree(&self) -> usize {
        self.adjacent.iter().map(BTreeSet::len).max().unwrap_or(0)
    }

    pub fn contains_edge(&self, u: &str, v: &str) -> bool {
        match (self.index_of(u), self.index_of(v)) {
            (Some(u), Some(v)) => self.adjacent[u].contains(&v),
            _ => false,
        }
    }

    /// The number of distinct unordered pairs of interfering variables.
    pub fn edge_count(&self) -> usize {
        self.adjacent.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Every edge once, as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacent.iter().enumerate().flat_map(|(u, adjacent)| {
            adjacent
                .range(u + 1..)
                .map(move |v| (u, *v))
        })
    }

    /// Turn a per-index assignment into a coloring keyed by variable.
    pub(crate) fn coloring(&self, colors: &[Option<usize>]) -> Coloring {
        debug_assert_eq!(self.len(), colors.len());

        self.variables
            .iter()
            .zip(colors)
            .map(|(var, color)| (var.clone(), Assignment::from(*color)))
            .collect()
    }
}

impl fmt::Display for InterferenceGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, adjacent) in self.adjacent.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            write!(f, "[")?;
            for j in 0..self.len() {
                if j > 0 {
                    write!(f, ", ")?;
                }

                write!(f, "{}", u8::from(adjacent.contains(&j)))?;
            }
            write!(f, "]")?;
        }

        Ok(())
    }
}

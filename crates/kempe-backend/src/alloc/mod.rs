pub mod backtracking;
pub mod check;
pub mod greedy;

#[cfg(test)]
mod tests;

pub use backtracking::backtracking;
pub use greedy::greedy;

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use kempe_common::{Coloring, ProgramPoint, RegisterFile};
use log::{debug, info, trace};
use thiserror::Error;

use crate::interfere::InterferenceGraph;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum AllocError {
    #[error("unknown coloring method `{0}`, expected `greedy` or `backtracking`")]
    UnknownMethod(String),
}

/// The coloring strategies on offer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    /// One pass in variable order, taking the first free register.
    Greedy,
    /// Exhaustive search for the coloring with the fewest spills.
    Backtracking,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Greedy, Method::Backtracking];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Backtracking => "backtracking",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = AllocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greedy" => Ok(Self::Greedy),
            "backtracking" => Ok(Self::Backtracking),
            other => Err(AllocError::UnknownMethod(other.into())),
        }
    }
}

/// Owns the liveness of one program and colors its interference graph. The
/// graph is built once, up front; each coloring run produces a fresh
/// [`Coloring`].
#[derive(Debug)]
pub struct Allocator {
    registers: RegisterFile,
    points: Vec<ProgramPoint>,
    graph: InterferenceGraph,
    last_solve_time: Duration,
}

impl Allocator {
    pub fn new(registers: RegisterFile, points: Vec<ProgramPoint>) -> Self {
        let graph = InterferenceGraph::from_points(&points);

        Self {
            registers,
            points,
            graph,
            last_solve_time: Duration::ZERO,
        }
    }

    /// Color using the method with the given name.
    pub fn register_coloring(&mut self, method: &str) -> Result<Coloring, AllocError> {
        let method = method.parse()?;
        Ok(self.color(method))
    }

    pub fn color(&mut self, method: Method) -> Coloring {
        info!("beginning {method} coloring with {} registers", self.registers.capacity());

        let start = Instant::now();
        let coloring = match method {
            Method::Greedy => greedy(&self.graph, self.registers),
            Method::Backtracking => backtracking(&self.graph, self.registers),
        };
        self.last_solve_time = start.elapsed();

        debug!(
            "{method} coloring spilled {} of {} variables, using {} of {} registers",
            coloring.spill_count(),
            coloring.len(),
            coloring.registers_used(),
            self.registers.capacity(),
        );

        if cfg!(debug_assertions) {
            check::check_consistency(&self.graph, &coloring);
        }

        trace!("done {method} coloring in {:?}", self.last_solve_time);
        coloring
    }

    /// How long the most recent coloring run took.
    pub fn last_solve_time(&self) -> Duration {
        self.last_solve_time
    }

    pub fn graph(&self) -> &InterferenceGraph {
        &self.graph
    }

    pub fn registers(&self) -> RegisterFile {
        self.registers
    }

    pub fn points(&self) -> &[ProgramPoint] {
        &self.points
    }
}

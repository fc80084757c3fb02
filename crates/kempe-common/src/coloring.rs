use std::collections::BTreeMap;
use std::fmt;

use crate::points::Variable;

/// Where a variable ended up.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Assignment {
    /// The index of a physical register, below the capacity.
    Register(usize),
    Spilled,
}

impl Assignment {
    pub fn register(&self) -> Option<usize> {
        match self {
            Self::Register(reg) => Some(*reg),
            Self::Spilled => None,
        }
    }

    pub fn is_spilled(&self) -> bool {
        matches!(self, Self::Spilled)
    }
}

impl From<Option<usize>> for Assignment {
    fn from(reg: Option<usize>) -> Self {
        reg.map(Self::Register).unwrap_or(Self::Spilled)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register(reg) => write!(f, "r{reg}"),
            Self::Spilled => write!(f, "spilled"),
        }
    }
}

/// The outcome of one coloring run, covering every variable exactly once.
/// Iteration follows the variables' sorted order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Coloring {
    colors: BTreeMap<Variable, Assignment>,
}

impl Coloring {
    pub fn new() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    pub fn get(&self, var: &str) -> Option<Assignment> {
        self.colors.get(var).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, Assignment)> + '_ {
        self.colors.iter().map(|(var, assignment)| (var, *assignment))
    }

    pub fn colored_count(&self) -> usize {
        self.colors
            .values()
            .filter(|assignment| !assignment.is_spilled())
            .count()
    }

    pub fn spill_count(&self) -> usize {
        self.len() - self.colored_count()
    }

    pub fn spilled(&self) -> impl Iterator<Item = &Variable> + '_ {
        self.colors
            .iter()
            .filter(|(_, assignment)| assignment.is_spilled())
            .map(|(var, _)| var)
    }

    /// Percentage of variables that were spilled, from 0 to 100.
    pub fn spill_percentage(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            100.0 * self.spill_count() as f64 / self.len() as f64
        }
    }

    /// One past the largest register index in use.
    pub fn registers_used(&self) -> usize {
        self.colors
            .values()
            .filter_map(Assignment::register)
            .max()
            .map(|reg| reg + 1)
            .unwrap_or(0)
    }

    /// The colored variables grouped by register, in ascending register order.
    pub fn by_register(&self) -> BTreeMap<usize, Vec<&Variable>> {
        let mut registers: BTreeMap<usize, Vec<&Variable>> = BTreeMap::new();
        for (var, assignment) in self.colors.iter() {
            if let Some(reg) = assignment.register() {
                registers.entry(reg).or_default().push(var);
            }
        }

        registers
    }
}

impl FromIterator<(Variable, Assignment)> for Coloring {
    fn from_iter<I: IntoIterator<Item = (Variable, Assignment)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Assignment, Coloring};
    use crate::points::Variable;

    fn coloring(colors: &[(&str, Option<usize>)]) -> Coloring {
        colors
            .iter()
            .map(|(name, reg)| (Variable::from(*name), Assignment::from(*reg)))
            .collect()
    }

    #[test]
    fn counts() {
        let colors = coloring(&[("a", Some(0)), ("b", None), ("c", Some(2)), ("d", Some(0))]);

        assert_eq!(4, colors.len());
        assert_eq!(3, colors.colored_count());
        assert_eq!(1, colors.spill_count());
        assert_eq!(25.0, colors.spill_percentage());
        assert_eq!(3, colors.registers_used());
        assert_eq!(vec!["b"], colors.spilled().map(|var| var.name()).collect::<Vec<_>>());
    }

    #[test]
    fn group_by_register() {
        let colors = coloring(&[("d", Some(0)), ("a", Some(0)), ("b", Some(1))]);
        let groups = colors.by_register();

        let names: Vec<_> = groups[&0].iter().map(|var| var.name()).collect();
        assert_eq!(vec!["a", "d"], names);
        assert_eq!(1, groups[&1].len());
    }

    #[test]
    fn empty_coloring() {
        let colors = Coloring::new();
        assert_eq!(0, colors.registers_used());
        assert_eq!(0.0, colors.spill_percentage());
        assert_eq!(None, colors.get("a"));
    }
}

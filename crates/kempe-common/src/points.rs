use std::borrow::Borrow;
use std::fmt;

/// A virtual register, identified by its name. Variables order
/// lexicographically by name.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Variable(String);

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Variable {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for Variable {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The set of variables live at one position in program order. Tokens are
/// kept as written, including any repeats.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ProgramPoint {
    live: Vec<Variable>,
}

impl ProgramPoint {
    pub fn new() -> Self {
        Self { live: Vec::new() }
    }

    pub fn add_live(&mut self, var: impl Into<Variable>) {
        self.live.push(var.into());
    }

    pub fn live(&self) -> impl Iterator<Item = &Variable> + '_ {
        self.live.iter()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

impl<V: Into<Variable>> FromIterator<V> for ProgramPoint {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            live: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for ProgramPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- [")?;

        for (i, var) in self.live.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }

            write!(f, "{var}")?;
        }

        write!(f, "]")
    }
}

use std::fmt;
use std::num::{IntErrorKind, NonZeroUsize};

use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CapacityError {
    #[error("register capacity must be at least one")]
    Zero,

    #[error("register capacity `{0}` is not an integer")]
    NotAnInteger(String),

    #[error("register capacity must be positive, but got {0}")]
    NotPositive(String),

    #[error("register capacity {0} is too large")]
    OutOfRange(String),
}

/// The physical registers available for allocation. Only the count matters
/// to the allocator; the register names are for display.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RegisterFile {
    capacity: NonZeroUsize,
}

impl RegisterFile {
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        NonZeroUsize::new(capacity)
            .map(|capacity| Self { capacity })
            .ok_or(CapacityError::Zero)
    }

    /// Parse a capacity as written in an input file.
    pub fn parse(text: &str) -> Result<Self, CapacityError> {
        let text = text.trim();

        match text.parse::<usize>() {
            Ok(0) => Err(CapacityError::NotPositive(text.into())),
            Ok(capacity) => Self::new(capacity),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow) => {
                Err(CapacityError::OutOfRange(text.into()))
            }

            // Negative numbers are integers, just not usable ones.
            Err(_) => match text.parse::<i128>() {
                Ok(_) => Err(CapacityError::NotPositive(text.into())),
                Err(e) if matches!(e.kind(), IntErrorKind::NegOverflow) => {
                    Err(CapacityError::NotPositive(text.into()))
                }
                Err(_) => Err(CapacityError::NotAnInteger(text.into())),
            },
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn names(&self) -> impl Iterator<Item = String> {
        (0..self.capacity()).map(|i| format!("r{i}"))
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in self.names() {
            writeln!(f, "- [{name}]")?;
        }

        Ok(())
    }
}

//! Reads liveness input: a register capacity on the first line, then one
//! program point per line, each a whitespace-separated list of the variables
//! live at that point.

pub mod lex;
pub mod parse;

pub use parse::{parse, Liveness};

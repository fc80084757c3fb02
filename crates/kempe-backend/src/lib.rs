pub mod alloc;
pub mod interfere;

pub use alloc::{backtracking, check, greedy, AllocError, Allocator, Method};
pub use interfere::{GraphError, InterferenceGraph};

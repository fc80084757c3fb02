pub mod coloring;
pub mod message;
pub mod points;
pub mod registers;

pub use coloring::{Assignment, Coloring};
pub use driver::Driver;
pub use points::{ProgramPoint, Variable};
pub use registers::{CapacityError, RegisterFile};

mod driver;

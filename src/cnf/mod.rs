pub mod assignment;
#[allow(clippy::module_inception)]
pub mod cnf;
pub mod dimacs;
pub mod random;

pub use assignment::Assignment;
pub use cnf::{Clause, ClauseSet, Lit};

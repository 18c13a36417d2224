//! DPLL satisfiability checking for CNF formulas.
//!
//! The engine in [`sat::dpll`] runs plain DPLL: unit propagation and
//! pure-literal elimination to fixpoint, then branching on the first literal of
//! the remaining clauses. [`sat::brute`] enumerates every assignment and serves
//! as a reference oracle on small instances.

pub mod bench;
pub mod cnf;
pub mod error;
pub mod sat;
pub mod solver;

pub mod brute;
pub mod dpll;
pub mod propagate;
pub mod pure;

use crate::cnf::Assignment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatResult {
    /// Satisfying literals, sorted by variable.
    Sat(Assignment),
    Unsat,
}

impl SatResult {
    pub fn is_sat(&self) -> bool {
        matches!(self, SatResult::Sat(_))
    }

    pub fn model(&self) -> Option<&Assignment> {
        match self {
            SatResult::Sat(m) => Some(m),
            SatResult::Unsat => None,
        }
    }

    pub fn into_model(self) -> Option<Assignment> {
        match self {
            SatResult::Sat(m) => Some(m),
            SatResult::Unsat => None,
        }
    }
}

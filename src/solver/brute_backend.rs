use crate::cnf::ClauseSet;
use crate::error::SolveError;
use crate::sat::SatResult;
use crate::sat::brute::brute_force_solve;
use crate::solver::{SatBackend, SolverStats};

#[derive(Debug, Clone, Default)]
pub struct BruteForceBackend {
    stats: SolverStats,
}

impl BruteForceBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SatBackend for BruteForceBackend {
    fn solve(&mut self, clauses: &ClauseSet) -> Result<SatResult, SolveError> {
        self.stats.solve_calls += 1;
        brute_force_solve(clauses)
    }

    fn stats(&self) -> SolverStats {
        self.stats
    }

    fn backend_name(&self) -> &'static str {
        "brute"
    }
}

use crate::cnf::ClauseSet;
use crate::error::SolveError;
use crate::sat::SatResult;
use crate::sat::dpll::{SearchLimits, SearchStats, solve_with};
use crate::solver::{SatBackend, SolverStats};

#[derive(Debug, Clone, Default)]
pub struct DpllBackend {
    limits: SearchLimits,
    last_search: SearchStats,
    stats: SolverStats,
}

impl DpllBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: SearchLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn set_limits(&mut self, limits: SearchLimits) {
        self.limits = limits;
    }

    /// Counters of the most recent completed search.
    pub fn last_search(&self) -> SearchStats {
        self.last_search
    }
}

impl SatBackend for DpllBackend {
    fn solve(&mut self, clauses: &ClauseSet) -> Result<SatResult, SolveError> {
        self.stats.solve_calls += 1;
        let (result, search) = solve_with(clauses, &self.limits)?;
        self.last_search = search;
        self.stats.decisions += search.decisions;
        self.stats.conflicts += search.conflicts;
        Ok(result)
    }

    fn stats(&self) -> SolverStats {
        self.stats
    }

    fn backend_name(&self) -> &'static str {
        "dpll"
    }
}

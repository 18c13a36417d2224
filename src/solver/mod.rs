pub mod brute_backend;
pub mod dpll_backend;
pub mod varisat;

use std::str::FromStr;

use crate::cnf::ClauseSet;
use crate::error::SolveError;
use crate::sat::SatResult;
use crate::sat::dpll::SearchLimits;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    pub solve_calls: usize,
    pub decisions: u64,
    pub conflicts: u64,
}

/// A complete decision procedure for a clause set.
pub trait SatBackend {
    fn solve(&mut self, clauses: &ClauseSet) -> Result<SatResult, SolveError>;
    fn stats(&self) -> SolverStats;
    fn backend_name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Dpll,
    Brute,
    Varisat,
}

impl BackendKind {
    pub fn name(self) -> &'static str {
        match self {
            BackendKind::Dpll => "dpll",
            BackendKind::Brute => "brute",
            BackendKind::Varisat => "varisat",
        }
    }

    /// Fresh backend; `limits` only bound the DPLL search.
    pub fn build(self, limits: SearchLimits) -> Box<dyn SatBackend> {
        match self {
            BackendKind::Dpll => Box::new(dpll_backend::DpllBackend::with_limits(limits)),
            BackendKind::Brute => Box::new(brute_backend::BruteForceBackend::new()),
            BackendKind::Varisat => Box::new(self::varisat::VarisatBackend::new()),
        }
    }
}

impl FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dpll" => Ok(BackendKind::Dpll),
            "brute" => Ok(BackendKind::Brute),
            "varisat" => Ok(BackendKind::Varisat),
            _ => anyhow::bail!("unknown backend '{}', expected dpll|brute|varisat", s),
        }
    }
}

use varisat::ExtendFormula;

use crate::cnf::{Assignment, ClauseSet, Lit};
use crate::error::SolveError;
use crate::sat::SatResult;
use crate::solver::{SatBackend, SolverStats};

/// CDCL solver from the `varisat` crate, used to cross-check the DPLL
/// engine on instances too large for brute force.
#[derive(Debug, Clone, Default)]
pub struct VarisatBackend {
    stats: SolverStats,
}

impl VarisatBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

fn to_varisat(lit: Lit) -> varisat::Lit {
    varisat::Lit::from_dimacs(lit.to_dimacs() as isize)
}

impl SatBackend for VarisatBackend {
    fn solve(&mut self, clauses: &ClauseSet) -> Result<SatResult, SolveError> {
        self.stats.solve_calls += 1;
        let vars = clauses.count_variables();
        if vars as usize > varisat::Var::max_count() {
            return Err(SolveError::Backend(format!(
                "variable {} exceeds varisat limit of {}",
                vars,
                varisat::Var::max_count()
            )));
        }
        let mut inner = varisat::Solver::new();
        for _ in 0..vars {
            inner.new_var();
        }
        for clause in clauses {
            let lits = clause.iter().copied().map(to_varisat).collect::<Vec<_>>();
            inner.add_clause(&lits);
        }

        match inner.solve() {
            Ok(true) => {
                let model = inner
                    .model()
                    .ok_or_else(|| SolveError::Backend("varisat returned no model".to_string()))?;
                let lits = model
                    .iter()
                    .filter_map(|l| Lit::from_dimacs(l.to_dimacs() as i64))
                    .collect::<Vec<_>>();
                Ok(SatResult::Sat(Assignment::from(lits).sorted()))
            }
            Ok(false) => Ok(SatResult::Unsat),
            Err(e) => Err(SolveError::Backend(e.to_string())),
        }
    }

    fn stats(&self) -> SolverStats {
        self.stats
    }

    fn backend_name(&self) -> &'static str {
        "varisat"
    }
}

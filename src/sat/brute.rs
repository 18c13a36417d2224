use log::debug;

use crate::cnf::{Assignment, ClauseSet, Lit};
use crate::error::SolveError;
use crate::sat::SatResult;

/// Largest variable count [`brute_force_solve`] accepts.
pub const BRUTE_FORCE_MAX_VARS: u32 = 24;

/// Tries all 2^n sign vectors over variables `1..=n`.
///
/// Candidates come in Cartesian-product order: all positive first, the
/// highest variable flipping fastest. The first candidate that satisfies
/// every clause is returned.
pub fn brute_force_solve(clauses: &ClauseSet) -> Result<SatResult, SolveError> {
    let n = clauses.count_variables();
    if n > BRUTE_FORCE_MAX_VARS {
        return Err(SolveError::TooManyVariables {
            vars: n,
            max: BRUTE_FORCE_MAX_VARS,
        });
    }

    let total = 1u64 << n;
    for index in 0..total {
        let candidate = candidate(n, index);
        if satisfies(clauses, &candidate) {
            debug!("brute force: candidate {} of {} satisfies", index + 1, total);
            return Ok(SatResult::Sat(Assignment::from(candidate)));
        }
    }
    Ok(SatResult::Unsat)
}

fn candidate(n: u32, index: u64) -> Vec<Lit> {
    (1..=n)
        .map(|var| {
            let bit = (index >> (n - var)) & 1;
            Lit::new(var, bit == 0)
        })
        .collect()
}

/// Applies the literals one at a time to a private copy; a stripped clause
/// that becomes empty rejects, an empty clause set accepts.
pub fn satisfies(clauses: &ClauseSet, assignment: &[Lit]) -> bool {
    let mut work = clauses.clone();
    if work.is_empty() {
        return true;
    }
    for &lit in assignment {
        let neg = lit.neg();
        work.remove_satisfied(lit);
        for clause in &mut work.clauses {
            let before = clause.len();
            clause.retain(|&l| l != neg);
            if before > 0 && clause.is_empty() {
                return false;
            }
        }
        if work.is_empty() {
            return true;
        }
    }
    false
}

use std::time::Instant;

use log::{debug, trace};

use crate::cnf::{Assignment, ClauseSet, Lit};
use crate::error::SolveError;
use crate::sat::SatResult;
use crate::sat::propagate::propagate_units;
use crate::sat::pure::eliminate_pure_literals;

/// Bounds on a search. The deadline is checked before every node is
/// expanded; `max_decisions` caps the number of branch decisions made.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    pub deadline: Option<Instant>,
    pub max_decisions: Option<u64>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    fn past_deadline(&self) -> bool {
        matches!(self.deadline, Some(d) if Instant::now() >= d)
    }

    fn allows_decision(&self, stats: &SearchStats) -> bool {
        self.max_decisions.is_none_or(|max| stats.decisions < max)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub decisions: u64,
    pub conflicts: u64,
    pub max_depth: usize,
}

struct Node {
    clauses: ClauseSet,
    partial: Assignment,
}

enum Outcome {
    Finished(SatResult, SearchStats),
    Interrupted(SearchStats),
}

pub fn solve(clauses: &ClauseSet) -> SatResult {
    match search(clauses, &SearchLimits::unlimited()) {
        Outcome::Finished(result, _) => result,
        Outcome::Interrupted(_) => unreachable!("search without limits was interrupted"),
    }
}

pub fn is_sat(clauses: &ClauseSet) -> bool {
    solve(clauses).is_sat()
}

pub fn solve_model(clauses: &ClauseSet) -> Option<Assignment> {
    solve(clauses).into_model()
}

/// Depth-first DPLL over an explicit stack of search nodes.
///
/// The negative child is pushed below the positive one, so nodes are popped
/// in the same order a recursive search would visit them. Each child owns
/// its clause set; nothing is shared between siblings.
pub fn solve_with(
    clauses: &ClauseSet,
    limits: &SearchLimits,
) -> Result<(SatResult, SearchStats), SolveError> {
    match search(clauses, limits) {
        Outcome::Finished(result, stats) => Ok((result, stats)),
        Outcome::Interrupted(stats) => {
            debug!(
                "search interrupted: nodes={} decisions={}",
                stats.nodes, stats.decisions
            );
            Err(SolveError::Interrupted {
                decisions: stats.decisions,
            })
        }
    }
}

fn search(clauses: &ClauseSet, limits: &SearchLimits) -> Outcome {
    let mut stats = SearchStats::default();
    let mut stack = vec![Node {
        clauses: clauses.clone(),
        partial: Assignment::new(),
    }];

    while let Some(node) = stack.pop() {
        if limits.past_deadline() {
            return Outcome::Interrupted(stats);
        }
        stats.nodes += 1;
        stats.max_depth = stats.max_depth.max(node.partial.len());

        match expand(node.clauses, &node.partial) {
            Step::Solved => {
                debug!(
                    "satisfiable: nodes={} decisions={} conflicts={}",
                    stats.nodes, stats.decisions, stats.conflicts
                );
                return Outcome::Finished(SatResult::Sat(node.partial.sorted()), stats);
            }
            Step::Conflict => {
                stats.conflicts += 1;
                trace!("conflict at depth {}", node.partial.len());
            }
            Step::Branch { clauses, var } => {
                if !limits.allows_decision(&stats) {
                    return Outcome::Interrupted(stats);
                }
                stats.decisions += 1;
                trace!("branch on {} at depth {}", var, node.partial.len());
                stack.push(Node {
                    clauses: clauses.clone(),
                    partial: node.partial.extended(Lit::new(var, false)),
                });
                stack.push(Node {
                    clauses,
                    partial: node.partial.extended(Lit::new(var, true)),
                });
            }
        }
    }

    debug!(
        "unsatisfiable: nodes={} decisions={} conflicts={}",
        stats.nodes, stats.decisions, stats.conflicts
    );
    Outcome::Finished(SatResult::Unsat, stats)
}

enum Step {
    Solved,
    Conflict,
    Branch { clauses: ClauseSet, var: u32 },
}

fn expand(clauses: ClauseSet, partial: &[Lit]) -> Step {
    let simplified = eliminate_pure_literals(&propagate_units(&clauses));
    let reduced = simplified.reduce_all(partial);

    if reduced.count_variables() == 0 {
        // only empty clauses can survive without variables
        return if reduced.is_empty() {
            Step::Solved
        } else {
            Step::Conflict
        };
    }
    if reduced.has_empty_clause() {
        return Step::Conflict;
    }

    match reduced.first_literal() {
        Some(lit) => Step::Branch {
            var: lit.var,
            clauses: reduced,
        },
        None => Step::Conflict,
    }
}

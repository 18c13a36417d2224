use indexmap::IndexSet;
use log::trace;

use crate::cnf::{ClauseSet, Lit};

/// Removes clauses satisfied by pure literals until a pass changes nothing.
///
/// Every eliminated literal is recorded as a singleton clause so the search
/// still assigns it.
pub fn eliminate_pure_literals(clauses: &ClauseSet) -> ClauseSet {
    let mut current = clauses.clone();
    let mut passes = 0usize;
    loop {
        let next = elimination_pass(&current);
        passes += 1;
        if next.set_eq(&current) {
            trace!("pure literal elimination settled after {} passes", passes);
            return next;
        }
        current = next;
    }
}

fn elimination_pass(clauses: &ClauseSet) -> ClauseSet {
    let mut next = clauses.clone();
    for lit in pure_literals(clauses) {
        next.remove_satisfied(lit);
        next.add_clause(vec![lit]);
    }
    next
}

/// Literals whose negation never occurs, in order of first appearance.
pub fn pure_literals(clauses: &ClauseSet) -> Vec<Lit> {
    let seen = clauses.literals().collect::<IndexSet<_>>();
    seen.iter()
        .copied()
        .filter(|l| !seen.contains(&l.neg()))
        .collect()
}

use log::trace;

use crate::cnf::{ClauseSet, Lit};

/// Resolves unit clauses until a pass leaves the clause set unchanged.
///
/// Each pass takes the unit literals of its input in clause order, reduces a
/// working copy by each of them and re-appends the unit so it stays visible.
/// A derived empty clause is returned as is; interpreting it is up to the
/// caller.
pub fn propagate_units(clauses: &ClauseSet) -> ClauseSet {
    let mut current = clauses.clone();
    let mut passes = 0usize;
    loop {
        let next = propagation_pass(&current);
        passes += 1;
        if next.set_eq(&current) {
            trace!("unit propagation settled after {} passes", passes);
            return current;
        }
        current = next;
    }
}

fn propagation_pass(clauses: &ClauseSet) -> ClauseSet {
    let units = unit_literals(clauses);
    let mut next = clauses.clone();
    for unit in units {
        next.reduce_in_place(unit);
        next.add_clause(vec![unit]);
    }
    next
}

pub fn unit_literals(clauses: &ClauseSet) -> Vec<Lit> {
    clauses
        .iter()
        .filter(|c| c.len() == 1)
        .map(|c| c[0])
        .collect()
}

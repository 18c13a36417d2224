use std::time::{Duration, Instant};

use dpllsat::cnf::ClauseSet;
use dpllsat::error::SolveError;
use dpllsat::sat::SatResult;
use dpllsat::sat::dpll::{SearchLimits, is_sat, solve, solve_model, solve_with};

fn cs(clauses: &[&[i64]]) -> ClauseSet {
    ClauseSet::from_dimacs(clauses)
}

fn model_of(c: &ClauseSet) -> Vec<i64> {
    solve_model(c).expect("satisfiable").to_dimacs()
}

/// Three pigeons, two holes; variable `(i - 1) * 2 + j` puts pigeon i in hole j.
fn pigeonhole_3_2() -> ClauseSet {
    cs(&[
        &[1, 2],
        &[3, 4],
        &[5, 6],
        &[-1, -3],
        &[-1, -5],
        &[-3, -5],
        &[-2, -4],
        &[-2, -6],
        &[-4, -6],
    ])
}

#[test]
fn single_unit_clause() {
    assert_eq!(model_of(&cs(&[&[1]])), vec![1]);
}

#[test]
fn contradictory_units_are_unsat() {
    let (result, stats) = solve_with(&cs(&[&[1], &[-1]]), &SearchLimits::unlimited())
        .expect("no limits");
    assert_eq!(result, SatResult::Unsat);
    assert_eq!(stats.decisions, 0);
}

#[test]
fn three_clause_instance_has_one_model() {
    assert_eq!(model_of(&cs(&[&[1, 2], &[-1, 2], &[1, -2]])), vec![1, 2]);
}

#[test]
fn all_four_binary_clauses_are_unsat() {
    let c = cs(&[&[1, 2], &[-1, -2], &[1, -2], &[-1, 2]]);
    assert_eq!(solve(&c), SatResult::Unsat);
}

#[test]
fn empty_clause_set_is_sat_with_empty_model() {
    let (result, stats) = solve_with(&cs(&[]), &SearchLimits::unlimited()).expect("no limits");
    assert_eq!(result, SatResult::Sat(Default::default()));
    assert_eq!(stats.decisions, 0);
}

#[test]
fn empty_clause_is_unsat_without_branching() {
    let (result, stats) = solve_with(&cs(&[&[]]), &SearchLimits::unlimited()).expect("no limits");
    assert_eq!(result, SatResult::Unsat);
    assert_eq!(stats.decisions, 0);
    assert_eq!(stats.nodes, 1);
}

#[test]
fn pigeonhole_is_unsat() {
    assert!(!is_sat(&pigeonhole_3_2()));
}

#[test]
fn models_satisfy_and_are_sorted() {
    let cases = [
        cs(&[&[3, -1], &[-3, 2], &[1, 2, -4], &[4, -2]]),
        cs(&[&[-5, 1], &[5, -1], &[2, 3], &[-2, -3], &[4]]),
        cs(&[&[7, 1], &[-7, -1], &[1, 2, 3]]),
    ];
    for c in &cases {
        let model = solve_model(c).expect("satisfiable");
        assert!(c.is_satisfied_by(&model));
        assert!(model.is_consistent());
        assert!(model.windows(2).all(|w| w[0].var < w[1].var));
    }
}

#[test]
fn repeated_solves_agree() {
    let c = cs(&[&[1, -2, 3], &[-1, 2], &[2, -3], &[-1, -3, 4], &[-4, 1]]);
    let first = solve(&c);
    for _ in 0..5 {
        assert_eq!(solve(&c), first);
    }
}

#[test]
fn input_is_not_mutated() {
    let c = cs(&[&[1, 2], &[-1, 2], &[1, -2]]);
    let before = c.clone();
    let _ = solve(&c);
    assert_eq!(c, before);
}

fn limited(max_decisions: u64) -> SearchLimits {
    SearchLimits {
        deadline: None,
        max_decisions: Some(max_decisions),
    }
}

#[test]
fn decision_limit_counts_decisions_made() {
    let c = cs(&[&[1]]);
    let (result, stats) = solve_with(&c, &limited(1)).expect("one decision allowed");
    assert_eq!(result.into_model().expect("satisfiable").to_dimacs(), vec![1]);
    assert_eq!(stats.decisions, 1);

    let err = solve_with(&c, &limited(0)).expect_err("no decisions allowed");
    assert_eq!(err, SolveError::Interrupted { decisions: 0 });
}

#[test]
fn exact_decision_budget_completes() {
    for c in [cs(&[&[1, 2], &[-1, -2], &[1, -2], &[-1, 2]]), pigeonhole_3_2()] {
        let (_, stats) = solve_with(&c, &SearchLimits::unlimited()).expect("no limits");
        let needed = stats.decisions;
        assert!(needed > 0);

        let (result, exact) = solve_with(&c, &limited(needed)).expect("budget suffices");
        assert_eq!(result, SatResult::Unsat);
        assert_eq!(exact, stats);

        let err = solve_with(&c, &limited(needed - 1)).expect_err("one short");
        assert_eq!(
            err,
            SolveError::Interrupted {
                decisions: needed - 1
            }
        );
    }
}

#[test]
fn zero_decision_budget_still_solves_by_propagation() {
    let (result, stats) = solve_with(&cs(&[&[1], &[-1]]), &limited(0)).expect("no branching");
    assert_eq!(result, SatResult::Unsat);
    assert_eq!(stats.decisions, 0);
}

#[test]
fn past_deadline_interrupts_before_any_work() {
    let limits = SearchLimits {
        deadline: Some(Instant::now()),
        max_decisions: None,
    };
    let err = solve_with(&pigeonhole_3_2(), &limits).expect_err("deadline passed");
    assert_eq!(err, SolveError::Interrupted { decisions: 0 });
}

#[test]
fn generous_deadline_completes() {
    let limits = SearchLimits {
        deadline: Some(Instant::now() + Duration::from_secs(60)),
        max_decisions: Some(10_000),
    };
    let (result, stats) = solve_with(&pigeonhole_3_2(), &limits).expect("completes");
    assert_eq!(result, SatResult::Unsat);
    assert!(stats.decisions > 0);
    assert!(stats.conflicts > 0);
    assert!(stats.max_depth <= 6);
}

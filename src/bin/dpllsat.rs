use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;

use dpllsat::cnf::dimacs::{Solution, load_dimacs, write_dimacs, write_solution};
use dpllsat::cnf::random::{RandomCnfConfig, random_kcnf};
use dpllsat::error::SolveError;
use dpllsat::sat::SatResult;
use dpllsat::sat::brute::brute_force_solve;
use dpllsat::sat::dpll::{SearchLimits, solve_with};
use dpllsat::solver::BackendKind;

#[derive(Debug, Parser)]
#[command(name = "dpllsat")]
#[command(about = "DPLL satisfiability checker for DIMACS CNF")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    Solve {
        path: String,
        #[arg(long, default_value = "dpll")]
        backend: String,
        #[arg(long)]
        timeout_ms: Option<u64>,
        #[arg(long)]
        max_decisions: Option<u64>,
    },
    /// Compare DPLL against exhaustive enumeration.
    Check { path: String },
    Profile { path: String },
    Gen {
        #[arg(long)]
        vars: u32,
        #[arg(long)]
        clauses: usize,
        #[arg(long, default_value_t = 3)]
        k: usize,
        #[arg(long, default_value_t = 1)]
        seed: u64,
        #[arg(long)]
        planted: bool,
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Cmd::Solve {
            path,
            backend,
            timeout_ms,
            max_decisions,
        } => solve_cmd(&path, &backend, timeout_ms, max_decisions)?,
        Cmd::Check { path } => check_cmd(&path)?,
        Cmd::Profile { path } => profile_cmd(&path)?,
        Cmd::Gen {
            vars,
            clauses,
            k,
            seed,
            planted,
            out,
        } => gen_cmd(
            RandomCnfConfig {
                vars,
                clauses,
                k,
                seed,
                planted,
            },
            &out,
        )?,
    }
    Ok(())
}

fn solve_cmd(
    path: &str,
    backend: &str,
    timeout_ms: Option<u64>,
    max_decisions: Option<u64>,
) -> Result<()> {
    let problem = load_dimacs(path).with_context(|| format!("failed to load {}", path))?;
    let kind = backend.parse::<BackendKind>()?;
    let start = Instant::now();
    let limits = SearchLimits {
        deadline: timeout_ms.map(|ms| start + Duration::from_millis(ms)),
        max_decisions,
    };

    let mut solver = kind.build(limits);
    let solution = match solver.solve(&problem.clauses) {
        Ok(SatResult::Sat(model)) => Solution::Sat(model),
        Ok(SatResult::Unsat) => Solution::Unsat,
        Err(SolveError::Interrupted { decisions }) => {
            info!("gave up after {} decisions", decisions);
            Solution::Unknown
        }
        Err(e) => return Err(e.into()),
    };
    let stats = solver.stats();
    info!(
        "backend={} vars={} clauses={} decisions={} conflicts={} elapsed_ms={}",
        solver.backend_name(),
        problem.clauses.count_variables(),
        problem.clauses.len(),
        stats.decisions,
        stats.conflicts,
        start.elapsed().as_millis()
    );

    write_solution(&mut std::io::stdout().lock(), &solution)?;
    Ok(())
}

fn check_cmd(path: &str) -> Result<()> {
    let problem = load_dimacs(path).with_context(|| format!("failed to load {}", path))?;
    let clauses = &problem.clauses;

    let (dpll, stats) = solve_with(clauses, &SearchLimits::unlimited())?;
    let brute = brute_force_solve(clauses)?;

    if let SatResult::Sat(model) = &dpll {
        if !clauses.is_satisfied_by(model) {
            bail!("dpll model {} does not satisfy the formula", model);
        }
    }
    if dpll.is_sat() != brute.is_sat() {
        bail!(
            "disagreement: dpll sat={} brute sat={}",
            dpll.is_sat(),
            brute.is_sat()
        );
    }
    println!(
        "CHECK OK: sat={} decisions={} conflicts={}",
        dpll.is_sat(),
        stats.decisions,
        stats.conflicts
    );
    Ok(())
}

fn profile_cmd(path: &str) -> Result<()> {
    let problem = load_dimacs(path).with_context(|| format!("failed to load {}", path))?;
    let clauses = &problem.clauses;
    println!("PROFILE");
    if let Some(h) = problem.header {
        println!("declared_vars={}", h.num_vars);
        println!("declared_clauses={}", h.num_clauses);
    }
    println!("num_vars={}", clauses.count_variables());
    println!("num_clauses={}", clauses.len());
    println!("num_literals={}", clauses.num_literals());
    println!("max_clause_width={}", clauses.max_clause_width());
    println!("has_empty_clause={}", clauses.has_empty_clause());
    Ok(())
}

fn gen_cmd(cfg: RandomCnfConfig, out: &str) -> Result<()> {
    let (clauses, hidden) = random_kcnf(&cfg)?;
    write_dimacs(out, &clauses).with_context(|| format!("failed to write {}", out))?;
    println!(
        "GEN: wrote {} | vars={} clauses={} k={} planted={}",
        out,
        cfg.vars,
        clauses.len(),
        cfg.k,
        hidden.is_some()
    );
    Ok(())
}

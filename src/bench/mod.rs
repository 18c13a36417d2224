use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use log::info;

use crate::cnf::dimacs::load_dimacs;
use crate::error::SolveError;
use crate::sat::SatResult;
use crate::sat::dpll::SearchLimits;
use crate::solver::BackendKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub backend: BackendKind,
    pub timeout: Duration,
    /// Re-check every model against the input clauses.
    pub verify: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Dpll,
            timeout: Duration::from_secs(30),
            verify: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchRow {
    pub path: String,
    pub status: String,
    pub backend: String,
    pub wall_ms: Option<u128>,
    pub decisions: Option<u64>,
    pub conflicts: Option<u64>,
    pub vars: Option<u32>,
    pub clauses: Option<usize>,
    pub file_bytes: Option<u64>,
}

impl BenchRow {
    pub fn csv_header() -> &'static str {
        "path,status,backend,wall_ms,decisions,conflicts,vars,clauses,file_bytes"
    }

    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{}",
            esc_csv(&self.path),
            self.status,
            self.backend,
            opt(self.wall_ms),
            opt(self.decisions),
            opt(self.conflicts),
            opt(self.vars),
            opt(self.clauses),
            opt(self.file_bytes),
        )
    }

    fn empty(path: &Path, cfg: &BenchConfig, file_bytes: Option<u64>) -> Self {
        Self {
            path: path.to_string_lossy().to_string(),
            status: String::new(),
            backend: cfg.backend.name().to_string(),
            wall_ms: None,
            decisions: None,
            conflicts: None,
            vars: None,
            clauses: None,
            file_bytes,
        }
    }
}

/// Solves one file on a worker thread, giving up after `cfg.timeout`.
pub fn run_one(path: &Path, cfg: BenchConfig) -> BenchRow {
    let file_bytes = fs::metadata(path).ok().map(|m| m.len());
    let start = Instant::now();
    let p = path.to_path_buf();
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let row = run_one_inner(&p, cfg, file_bytes, start + cfg.timeout);
        let _ = tx.send(row);
    });

    match rx.recv_timeout(cfg.timeout) {
        Ok(mut row) => {
            row.wall_ms = Some(start.elapsed().as_millis());
            row
        }
        Err(mpsc::RecvTimeoutError::Timeout) => {
            let mut row = BenchRow::empty(path, &cfg, file_bytes);
            row.status = "timeout".to_string();
            row.wall_ms = Some(start.elapsed().as_millis());
            row
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            let mut row = BenchRow::empty(path, &cfg, file_bytes);
            row.status = "internal_error".to_string();
            row.wall_ms = Some(start.elapsed().as_millis());
            row
        }
    }
}

pub fn run_dataset(
    dir: &Path,
    cfg: BenchConfig,
    csv_path: &Path,
    progress: bool,
) -> std::io::Result<Vec<BenchRow>> {
    let paths = discover_paths(dir)?;
    let mut csv = File::create(csv_path)?;
    writeln!(csv, "{}", BenchRow::csv_header())?;
    csv.flush()?;

    let mut rows = Vec::new();
    for path in paths {
        let row = run_one(&path, cfg);
        if progress {
            info!(
                "path={} status={} wall_ms={} decisions={}",
                row.path,
                row.status,
                row.wall_ms.unwrap_or_default(),
                row.decisions.unwrap_or_default()
            );
        }
        writeln!(csv, "{}", row.to_csv_line())?;
        csv.flush()?;
        rows.push(row);
    }

    Ok(rows)
}

fn run_one_inner(
    path: &Path,
    cfg: BenchConfig,
    file_bytes: Option<u64>,
    deadline: Instant,
) -> BenchRow {
    let mut row = BenchRow::empty(path, &cfg, file_bytes);

    let problem = match load_dimacs(path) {
        Ok(v) => v,
        Err(_) => {
            row.status = "parse_error".to_string();
            return row;
        }
    };
    row.vars = Some(problem.clauses.count_variables());
    row.clauses = Some(problem.clauses.len());

    let limits = SearchLimits {
        deadline: Some(deadline),
        max_decisions: None,
    };
    let mut backend = cfg.backend.build(limits);
    let result = backend.solve(&problem.clauses);
    let stats = backend.stats();
    row.decisions = Some(stats.decisions);
    row.conflicts = Some(stats.conflicts);

    row.status = match result {
        Ok(SatResult::Sat(model)) => {
            if cfg.verify && !problem.clauses.is_satisfied_by(&model) {
                "wrong_model".to_string()
            } else {
                "sat".to_string()
            }
        }
        Ok(SatResult::Unsat) => "unsat".to_string(),
        Err(SolveError::Interrupted { .. }) => "timeout".to_string(),
        Err(SolveError::TooManyVariables { .. }) => "too_large".to_string(),
        Err(SolveError::Backend(_)) => "internal_error".to_string(),
    };
    row
}

fn discover_paths(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut out = Vec::<PathBuf>::new();
    collect_paths(dir, &mut out)?;
    out.sort();
    Ok(out)
}

fn collect_paths(dir: &Path, out: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let p = entry?.path();
        if p.is_dir() {
            collect_paths(&p, out)?;
            continue;
        }
        if p.extension().and_then(|x| x.to_str()) == Some("cnf") {
            out.push(p);
        }
    }
    Ok(())
}

fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

fn esc_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

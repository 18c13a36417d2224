use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::warn;

use super::assignment::Assignment;
use super::cnf::{Clause, ClauseSet, Lit};
use crate::error::DimacsError;

/// Contents of a `p cnf <vars> <clauses>` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub num_vars: u32,
    pub num_clauses: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimacsProblem {
    pub header: Option<Header>,
    pub clauses: ClauseSet,
}

/// Verdict as printed by [`write_solution`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    Sat(Assignment),
    Unsat,
    Unknown,
}

pub fn parse_dimacs_str(s: &str) -> Result<DimacsProblem, DimacsError> {
    parse_dimacs_reader(std::io::Cursor::new(s.as_bytes()))
}

pub fn load_dimacs(path: impl AsRef<Path>) -> Result<DimacsProblem, DimacsError> {
    let file = File::open(path)?;
    parse_dimacs_reader(BufReader::new(file))
}

pub fn parse_dimacs_reader<R: BufRead>(r: R) -> Result<DimacsProblem, DimacsError> {
    let mut header = None::<Header>;
    let mut clauses = Vec::<Clause>::new();
    let mut current = Clause::new();

    for (idx, line) in r.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let clean = line.trim();
        if clean.is_empty() || clean.starts_with('c') {
            continue;
        }
        if clean.starts_with('%') {
            break;
        }
        if clean.starts_with('p') {
            header = Some(parse_header(clean, line_no)?);
            continue;
        }

        for token in clean.split_whitespace() {
            let value = token
                .parse::<i64>()
                .map_err(|_| DimacsError::InvalidToken {
                    line: line_no,
                    token: token.to_string(),
                })?;
            if value == 0 {
                clauses.push(std::mem::take(&mut current));
                continue;
            }
            let lit = Lit::from_dimacs(value).ok_or_else(|| DimacsError::InvalidToken {
                line: line_no,
                token: token.to_string(),
            })?;
            current.push(lit);
        }
    }

    // last clause may omit its terminator
    if !current.is_empty() {
        clauses.push(current);
    }

    let clauses = ClauseSet::from(clauses);
    if let Some(h) = header {
        check_header(&h, &clauses);
    }
    Ok(DimacsProblem { header, clauses })
}

fn parse_header(line: &str, line_no: usize) -> Result<Header, DimacsError> {
    let invalid = || DimacsError::InvalidHeader {
        line: line_no,
        text: line.to_string(),
    };
    let parts = line.split_whitespace().collect::<Vec<_>>();
    if parts.len() != 4 || parts[0] != "p" || parts[1] != "cnf" {
        return Err(invalid());
    }
    let num_vars = parts[2].parse::<u32>().map_err(|_| invalid())?;
    let num_clauses = parts[3].parse::<usize>().map_err(|_| invalid())?;
    Ok(Header {
        num_vars,
        num_clauses,
    })
}

fn check_header(header: &Header, clauses: &ClauseSet) {
    if header.num_clauses != clauses.len() {
        warn!(
            "header declares {} clauses, found {}",
            header.num_clauses,
            clauses.len()
        );
    }
    let vars = clauses.count_variables();
    if vars > header.num_vars {
        warn!(
            "header declares {} variables, clauses mention variable {}",
            header.num_vars, vars
        );
    }
}

pub fn to_dimacs(clauses: &ClauseSet) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "p cnf {} {}\n",
        clauses.count_variables(),
        clauses.len()
    ));
    for clause in clauses {
        for &lit in clause {
            out.push_str(&format!("{} ", lit));
        }
        out.push_str("0\n");
    }
    out
}

pub fn write_dimacs(path: impl AsRef<Path>, clauses: &ClauseSet) -> std::io::Result<()> {
    std::fs::write(path, to_dimacs(clauses))
}

pub fn write_solution(writer: &mut impl Write, solution: &Solution) -> std::io::Result<()> {
    let mut writer = BufWriter::new(writer);

    let status = match solution {
        Solution::Sat(_) => "SATISFIABLE",
        Solution::Unsat => "UNSATISFIABLE",
        Solution::Unknown => "UNKNOWN",
    };
    writeln!(writer, "s {status}")?;

    if let Solution::Sat(model) = solution {
        const PER_LINE: usize = 10;
        for chunk in model.chunks(PER_LINE) {
            let line = chunk
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(writer, "v {line}")?;
        }
        writeln!(writer, "v 0")?;
    }
    writer.flush()
}

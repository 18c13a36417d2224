use thiserror::Error;

/// Failure while reading a DIMACS CNF document.
#[derive(Debug, Error)]
pub enum DimacsError {
    #[error("failed to read dimacs input: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid literal '{token}'")]
    InvalidToken { line: usize, token: String },

    #[error("line {line}: invalid problem line '{text}'")]
    InvalidHeader { line: usize, text: String },
}

/// Reasons a solve call ends without a verdict.
///
/// Unsatisfiability is not an error; it is reported as
/// [`SatResult::Unsat`](crate::sat::SatResult::Unsat).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("search interrupted after {decisions} decisions")]
    Interrupted { decisions: u64 },

    #[error("{vars} variables exceed the enumeration limit of {max}")]
    TooManyVariables { vars: u32, max: u32 },

    #[error("backend failure: {0}")]
    Backend(String),
}

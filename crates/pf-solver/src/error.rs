//! Error types for solver operations.

use pf_core::PfError;
use thiserror::Error;

/// Errors that can occur while assembling or solving a conduction step.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Problem setup error: {what}")]
    ProblemSetup { what: String },

    #[error("Singular tridiagonal system: zero pivot at row {row}")]
    SingularSystem { row: usize },

    #[error("Core error: {0}")]
    Core(#[from] PfError),
}

pub type SolverResult<T> = Result<T, SolverError>;

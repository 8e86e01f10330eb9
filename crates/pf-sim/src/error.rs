//! Error types for simulation runs.

use thiserror::Error;

/// Errors encountered while configuring or running a particle simulation.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Solver error: {0}")]
    Solver(#[from] pf_solver::SolverError),

    #[error("Kinetics error: {0}")]
    Kinetics(#[from] pf_kinetics::KineticsError),

    #[error("Core error: {0}")]
    Core(#[from] pf_core::PfError),
}

pub type SimResult<T> = Result<T, SimError>;

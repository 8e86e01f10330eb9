//! Error types for reaction network construction and integration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KineticsError {
    #[error("Duplicate species: {name}")]
    DuplicateSpecies { name: String },

    #[error("Unknown species '{name}' referenced by {context}")]
    UnknownSpecies { name: String, context: String },

    #[error("Invalid yield {value} for '{species}' in reaction '{reaction}'")]
    InvalidYield {
        species: String,
        reaction: String,
        value: f64,
    },

    #[error("Reaction network has no species")]
    NoSpecies,

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Length mismatch: {what} (expected {expected}, got {got})")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
}

pub type KineticsResult<T> = Result<T, KineticsError>;

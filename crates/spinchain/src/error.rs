//! Error types for the spinchain crate.

use thiserror::Error;

/// Errors produced while building spin-chain Hamiltonians.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Model name is not one of the known chain families.
    #[error("unknown model '{0}', expected 'ising' or 'heisenberg'")]
    UnknownModel(String),

    /// Periodic chains need at least two sites.
    #[error("chain needs at least 2 sites, got {sites}")]
    ChainTooShort { sites: usize },
}

/// Result type for Hamiltonian construction.
pub type ModelResult<T> = Result<T, ModelError>;

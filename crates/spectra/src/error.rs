//! Error types for the spectra crate.

use thiserror::Error;

/// Errors produced by the dense spectral solver.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpectraError {
    /// Eigendecomposition needs a square matrix.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// A ground/excited split needs at least two eigenpairs.
    #[error("need at least 2 eigenpairs, got dimension {dim}")]
    TooSmall { dim: usize },
}

/// Result type for spectral operations.
pub type SpectraResult<T> = Result<T, SpectraError>;

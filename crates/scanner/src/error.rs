//! Error types for the scanner crate.

use thiserror::Error;

/// Errors produced by the observable scan.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// A state vector does not match the operator dimension.
    #[error("state vector has length {got}, expected {expected}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Result type for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;

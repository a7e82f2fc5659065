pub mod eig;
pub mod error;

pub use eig::{eig_sorted, ground_and_excited, sort_eigenpairs, Spectrum, C64};
pub use error::{SpectraError, SpectraResult};

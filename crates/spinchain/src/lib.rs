pub mod error;
pub mod hamiltonian;

pub use error::{ModelError, ModelResult};
pub use hamiltonian::{ChainParams, Hamiltonian, SpinModel};

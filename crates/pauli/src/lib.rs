pub mod matrices;
pub mod string;

pub use matrices::{is_hermitian, kron, C64};
pub use string::{pauli_strings, ParsePauliError, Pauli, PauliString};

use crate::matrices::{identity, kron, pauli_x, pauli_y, pauli_z, site_matrix, C64};
use faer::Mat;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Single-site Pauli operator symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pauli {
    I,
    X,
    Y,
    Z,
}

impl Pauli {
    /// The 2×2 matrix of this operator.
    pub fn matrix(self) -> [[C64; 2]; 2] {
        match self {
            Pauli::I => identity(),
            Pauli::X => pauli_x(),
            Pauli::Y => pauli_y(),
            Pauli::Z => pauli_z(),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Pauli::I => 'I',
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'I' => Some(Pauli::I),
            'X' => Some(Pauli::X),
            'Y' => Some(Pauli::Y),
            'Z' => Some(Pauli::Z),
            _ => None,
        }
    }

    /// Base-4 digit in enumeration order I < X < Y < Z.
    fn from_digit(d: usize) -> Self {
        match d & 3 {
            0 => Pauli::I,
            1 => Pauli::X,
            2 => Pauli::Y,
            _ => Pauli::Z,
        }
    }
}

/// A Pauli string could not be parsed from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParsePauliError {
    #[error("invalid Pauli symbol '{0}', expected one of I, X, Y, Z")]
    InvalidSymbol(char),
}

/// Tensor product of single-site Pauli operators, one per site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PauliString {
    sites: Vec<Pauli>,
}

impl PauliString {
    pub fn new(sites: Vec<Pauli>) -> Self {
        Self { sites }
    }

    /// The k-th string of length n in lexicographic product order over
    /// I < X < Y < Z per position: k is read as n base-4 digits with the
    /// most significant digit at site 0.
    pub fn from_index(n: usize, k: usize) -> Self {
        debug_assert!(n == 0 || k >> (2 * n) == 0, "index {} out of range for {} sites", k, n);
        let mut sites = vec![Pauli::I; n];
        let mut rem = k;
        for site in sites.iter_mut().rev() {
            *site = Pauli::from_digit(rem & 3);
            rem >>= 2;
        }
        Self { sites }
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn sites(&self) -> &[Pauli] {
        &self.sites
    }

    pub fn label(&self) -> String {
        self.sites.iter().map(|p| p.symbol()).collect()
    }

    /// Dense 2^n × 2^n operator, built by iterated left-to-right Kronecker
    /// products of the per-site matrices. Recomputed on every call.
    pub fn to_matrix(&self) -> Mat<C64> {
        let mut out = Mat::<C64>::zeros(1, 1);
        out.write(0, 0, C64::new(1.0, 0.0));
        for p in &self.sites {
            out = kron(&out, &site_matrix(p.matrix()));
        }
        out
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.sites {
            write!(f, "{}", p.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for PauliString {
    type Err = ParsePauliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut sites = Vec::with_capacity(s.len());
        for c in s.chars() {
            sites.push(Pauli::from_symbol(c).ok_or(ParsePauliError::InvalidSymbol(c))?);
        }
        Ok(Self { sites })
    }
}

/// All 4^n Pauli strings of length n, in index order.
pub fn pauli_strings(n: usize) -> impl Iterator<Item = PauliString> {
    (0..1usize << (2 * n)).map(move |k| PauliString::from_index(n, k))
}

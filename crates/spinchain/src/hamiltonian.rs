use crate::error::{ModelError, ModelResult};
use faer::Mat;
use pauli::{C64, Pauli, PauliString};

/// Which periodic spin chain to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinModel {
    Ising,
    Heisenberg,
}

impl SpinModel {
    pub fn from_name(name: &str) -> ModelResult<Self> {
        match name {
            "ising" => Ok(SpinModel::Ising),
            "heisenberg" => Ok(SpinModel::Heisenberg),
            other => Err(ModelError::UnknownModel(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpinModel::Ising => "ising",
            SpinModel::Heisenberg => "heisenberg",
        }
    }
}

/// Coupling constants for both chain families.
#[derive(Debug, Clone, Copy)]
pub struct ChainParams {
    /// Ising ZZ coupling J.
    pub j: f64,
    /// Ising transverse field h.
    pub h: f64,
    /// Heisenberg XX coupling.
    pub jx: f64,
    /// Heisenberg ZZ coupling.
    pub jz: f64,
}

impl ChainParams {
    /// The same strength for every coupling and field.
    pub fn uniform(g: f64) -> Self {
        Self {
            j: g,
            h: g,
            jx: g,
            jz: g,
        }
    }
}

/// Weighted sum of Pauli strings, H = Σ_k c_k · P_k.
///
/// Terms keep insertion order; re-inserting an existing string replaces its
/// coefficient. At l = 2 the periodic wrap addresses the same string as the
/// adjacent coupling and collapses to a single term.
#[derive(Debug, Clone, PartialEq)]
pub struct Hamiltonian {
    sites: usize,
    terms: Vec<(PauliString, f64)>,
}

impl Hamiltonian {
    pub fn new(sites: usize) -> Self {
        Self {
            sites,
            terms: Vec::new(),
        }
    }

    /// Transverse-field Ising ring:
    /// −j · Z_i Z_{i+1} for every adjacent pair, −h · X_i for every site,
    /// plus the periodic wrap −j · Z_0 Z_{l−1}.
    pub fn ising(l: usize, j: f64, h: f64) -> ModelResult<Self> {
        if l < 2 {
            return Err(ModelError::ChainTooShort { sites: l });
        }

        let mut ham = Self::new(l);
        for i in 0..l - 1 {
            ham.set(pair(l, i, i + 1, Pauli::Z), -j);
            ham.set(single(l, i, Pauli::X), -h);
        }
        ham.set(single(l, l - 1, Pauli::X), -h);
        ham.set(pair(l, 0, l - 1, Pauli::Z), -j);
        Ok(ham)
    }

    /// XX + ZZ Heisenberg ring:
    /// −jx · X_i X_{i+1} and −jz · Z_i Z_{i+1} for every adjacent pair,
    /// plus the periodic wrap terms on (0, l−1).
    pub fn heisenberg(l: usize, jx: f64, jz: f64) -> ModelResult<Self> {
        if l < 2 {
            return Err(ModelError::ChainTooShort { sites: l });
        }

        let mut ham = Self::new(l);
        for i in 0..l - 1 {
            ham.set(pair(l, i, i + 1, Pauli::X), -jx);
            ham.set(pair(l, i, i + 1, Pauli::Z), -jz);
        }
        ham.set(pair(l, 0, l - 1, Pauli::X), -jx);
        ham.set(pair(l, 0, l - 1, Pauli::Z), -jz);
        Ok(ham)
    }

    pub fn build(model: SpinModel, l: usize, params: ChainParams) -> ModelResult<Self> {
        match model {
            SpinModel::Ising => Self::ising(l, params.j, params.h),
            SpinModel::Heisenberg => Self::heisenberg(l, params.jx, params.jz),
        }
    }

    /// Insert a term; an existing entry for the same string is replaced in
    /// place, keeping its position.
    pub fn set(&mut self, string: PauliString, coeff: f64) {
        debug_assert_eq!(string.len(), self.sites);
        if let Some(term) = self.terms.iter_mut().find(|(s, _)| *s == string) {
            term.1 = coeff;
        } else {
            self.terms.push((string, coeff));
        }
    }

    pub fn coeff(&self, string: &PauliString) -> Option<f64> {
        self.terms
            .iter()
            .find(|(s, _)| s == string)
            .map(|(_, c)| *c)
    }

    pub fn terms(&self) -> &[(PauliString, f64)] {
        &self.terms
    }

    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    pub fn sites(&self) -> usize {
        self.sites
    }

    /// Dense 2^l × 2^l matrix of the operator sum. Hermitian, since every
    /// term is a real multiple of a Pauli string.
    pub fn to_matrix(&self) -> Mat<C64> {
        let dim = 1usize << self.sites;
        let mut out = Mat::<C64>::zeros(dim, dim);
        for (string, coeff) in &self.terms {
            let m = string.to_matrix();
            let c = C64::new(*coeff, 0.0);
            for i in 0..dim {
                for j in 0..dim {
                    let cur = out.read(i, j);
                    out.write(i, j, cur + c * m.read(i, j));
                }
            }
        }
        out
    }
}

fn single(l: usize, site: usize, op: Pauli) -> PauliString {
    let mut sites = vec![Pauli::I; l];
    sites[site] = op;
    PauliString::new(sites)
}

fn pair(l: usize, a: usize, b: usize, op: Pauli) -> PauliString {
    let mut sites = vec![Pauli::I; l];
    sites[a] = op;
    sites[b] = op;
    PauliString::new(sites)
}

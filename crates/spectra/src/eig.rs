use crate::error::{SpectraError, SpectraResult};
use faer::{Mat, Side};
use num_complex::Complex64;

pub type C64 = Complex64;

/// Eigenvalues and eigenvectors of a Hermitian matrix, ascending by
/// eigenvalue.
#[derive(Clone, Debug)]
pub struct Spectrum {
    /// Eigenvalues sorted ascending.
    pub values: Vec<f64>,
    /// Unit-norm eigenvectors; column k belongs to values[k].
    pub vectors: Mat<C64>,
}

impl Spectrum {
    pub fn ground_energy(&self) -> f64 {
        self.values[0]
    }

    /// Spectral gap E_1 − E_0.
    pub fn gap(&self) -> f64 {
        if self.values.len() < 2 {
            return 0.0;
        }
        self.values[1] - self.values[0]
    }

    /// Copy of the k-th eigenvector.
    pub fn state(&self, k: usize) -> Vec<C64> {
        let mut v = Vec::with_capacity(self.vectors.nrows());
        for row in 0..self.vectors.nrows() {
            v.push(self.vectors.read(row, k));
        }
        v
    }

    pub fn ground_state(&self) -> Vec<C64> {
        self.state(0)
    }

    pub fn excited_state(&self) -> Vec<C64> {
        self.state(1)
    }
}

/// Full eigendecomposition of a Hermitian matrix with eigenpairs sorted
/// ascending by eigenvalue. The solver reads the lower triangle; eigenvalues
/// of a Hermitian input are real and its eigenvectors come back with unit
/// 2-norm.
pub fn eig_sorted(h: &Mat<C64>) -> SpectraResult<Spectrum> {
    if h.nrows() != h.ncols() {
        return Err(SpectraError::NotSquare {
            rows: h.nrows(),
            cols: h.ncols(),
        });
    }

    let evd = h.selfadjoint_eigendecomposition(Side::Lower);
    let s = evd.s().column_vector();
    let mut values = Vec::with_capacity(s.nrows());
    for i in 0..s.nrows() {
        values.push(s.read(i).re);
    }

    Ok(sort_eigenpairs(values, evd.u().to_owned()))
}

/// Sort eigenpairs ascending by eigenvalue, permuting the vector columns to
/// match. The sort is stable: degenerate eigenvalues keep their original
/// column order.
pub fn sort_eigenpairs(values: Vec<f64>, vectors: Mat<C64>) -> Spectrum {
    debug_assert_eq!(values.len(), vectors.ncols());

    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut sorted_values = Vec::with_capacity(values.len());
    let mut sorted_vectors = Mat::<C64>::zeros(vectors.nrows(), vectors.ncols());
    for (dst, &src) in order.iter().enumerate() {
        sorted_values.push(values[src]);
        for row in 0..vectors.nrows() {
            sorted_vectors.write(row, dst, vectors.read(row, src));
        }
    }

    Spectrum {
        values: sorted_values,
        vectors: sorted_vectors,
    }
}

/// Ground and first excited eigenvectors of a Hermitian matrix.
pub fn ground_and_excited(h: &Mat<C64>) -> SpectraResult<(Vec<C64>, Vec<C64>)> {
    let spec = eig_sorted(h)?;
    if spec.values.len() < 2 {
        return Err(SpectraError::TooSmall {
            dim: spec.values.len(),
        });
    }
    Ok((spec.ground_state(), spec.excited_state()))
}

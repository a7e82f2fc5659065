use faer::Mat;
use num_complex::Complex64;

pub type C64 = Complex64;

pub fn identity() -> [[C64; 2]; 2] {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    [[o, z], [z, o]]
}

pub fn pauli_x() -> [[C64; 2]; 2] {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    [[z, o], [o, z]]
}

pub fn pauli_y() -> [[C64; 2]; 2] {
    let z = C64::new(0.0, 0.0);
    let i = C64::new(0.0, 1.0);
    let ni = C64::new(0.0, -1.0);
    [[z, ni], [i, z]]
}

pub fn pauli_z() -> [[C64; 2]; 2] {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    let m = C64::new(-1.0, 0.0);
    [[o, z], [z, m]]
}

/// Lift a 2×2 site matrix into a dense matrix.
pub fn site_matrix(m: [[C64; 2]; 2]) -> Mat<C64> {
    let mut out = Mat::<C64>::zeros(2, 2);
    for i in 0..2 {
        for j in 0..2 {
            out.write(i, j, m[i][j]);
        }
    }
    out
}

/// Kronecker product a ⊗ b.
pub fn kron(a: &Mat<C64>, b: &Mat<C64>) -> Mat<C64> {
    let (ar, ac) = (a.nrows(), a.ncols());
    let (br, bc) = (b.nrows(), b.ncols());
    let mut out = Mat::<C64>::zeros(ar * br, ac * bc);
    for i in 0..ar {
        for j in 0..ac {
            let aval = a.read(i, j);
            for k in 0..br {
                for l in 0..bc {
                    out.write(i * br + k, j * bc + l, aval * b.read(k, l));
                }
            }
        }
    }
    out
}

/// True if m equals its conjugate transpose entrywise within tol.
pub fn is_hermitian(m: &Mat<C64>, tol: f64) -> bool {
    if m.nrows() != m.ncols() {
        return false;
    }
    for i in 0..m.nrows() {
        for j in 0..m.ncols() {
            if (m.read(i, j) - m.read(j, i).conj()).norm() > tol {
                return false;
            }
        }
    }
    true
}

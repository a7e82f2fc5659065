use faer::Mat;
use spectra::{eig_sorted, ground_and_excited, sort_eigenpairs, SpectraError, C64};

fn mat_from_rows(rows: &[&[f64]]) -> Mat<C64> {
    let mut m = Mat::<C64>::zeros(rows.len(), rows[0].len());
    for (i, row) in rows.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            m.write(i, j, C64::new(v, 0.0));
        }
    }
    m
}

fn norm2(v: &[C64]) -> f64 {
    v.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt()
}

#[test]
fn sort_is_ascending_and_permutes_columns() {
    let values = vec![3.0, 1.0, 2.0];
    let vectors = mat_from_rows(&[&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]]);

    let spec = sort_eigenpairs(values, vectors);
    assert_eq!(spec.values, vec![1.0, 2.0, 3.0]);

    // Sorted column k must be the basis vector that carried value k's
    // original index: order is [1, 2, 0].
    for (dst, src) in [(0, 1), (1, 2), (2, 0)] {
        for row in 0..3 {
            let expected = if row == src { 1.0 } else { 0.0 };
            let got = spec.vectors.read(row, dst);
            assert!((got - C64::new(expected, 0.0)).norm() < 1e-15);
        }
    }
}

#[test]
fn sort_keeps_degenerate_pairs_in_input_order() {
    // Columns are tagged with a constant so the permutation is visible.
    let values = vec![2.0, 1.0, 1.0];
    let mut vectors = Mat::<C64>::zeros(2, 3);
    for col in 0..3 {
        for row in 0..2 {
            vectors.write(row, col, C64::new(col as f64, 0.0));
        }
    }

    let spec = sort_eigenpairs(values, vectors);
    assert_eq!(spec.values, vec![1.0, 1.0, 2.0]);
    assert!((spec.vectors.read(0, 0).re - 1.0).abs() < 1e-15);
    assert!((spec.vectors.read(0, 1).re - 2.0).abs() < 1e-15);
    assert!((spec.vectors.read(0, 2).re - 0.0).abs() < 1e-15);
}

#[test]
fn pauli_x_eigenpairs() {
    let h = mat_from_rows(&[&[0.0, 1.0], &[1.0, 0.0]]);
    let spec = eig_sorted(&h).unwrap();

    assert!((spec.values[0] + 1.0).abs() < 1e-12, "values = {:?}", spec.values);
    assert!((spec.values[1] - 1.0).abs() < 1e-12, "values = {:?}", spec.values);

    // H v = λ v and unit norm for both eigenpairs.
    for k in 0..2 {
        let v = spec.state(k);
        assert!((norm2(&v) - 1.0).abs() < 1e-12);
        for i in 0..2 {
            let hv: C64 = (0..2).map(|j| h.read(i, j) * v[j]).sum();
            let lv = C64::new(spec.values[k], 0.0) * v[i];
            assert!((hv - lv).norm() < 1e-12);
        }
    }
}

#[test]
fn degenerate_diagonal_spectrum() {
    // diag(−1, 1, 1, −1), the l = 2 Ising matrix at j = 1, h = 0.
    let h = mat_from_rows(&[
        &[-1.0, 0.0, 0.0, 0.0],
        &[0.0, 1.0, 0.0, 0.0],
        &[0.0, 0.0, 1.0, 0.0],
        &[0.0, 0.0, 0.0, -1.0],
    ]);
    let spec = eig_sorted(&h).unwrap();

    let expected = [-1.0, -1.0, 1.0, 1.0];
    for (v, e) in spec.values.iter().zip(expected) {
        assert!((v - e).abs() < 1e-12, "values = {:?}", spec.values);
    }
    assert!((spec.gap() - 0.0).abs() < 1e-12);
}

#[test]
fn ground_and_excited_is_deterministic() {
    let h = mat_from_rows(&[
        &[0.3, 0.1, 0.0],
        &[0.1, -0.2, 0.4],
        &[0.0, 0.4, 0.7],
    ]);

    let (g1, e1) = ground_and_excited(&h).unwrap();
    let (g2, e2) = ground_and_excited(&h).unwrap();

    for (a, b) in g1.iter().zip(&g2) {
        assert_eq!(a, b);
    }
    for (a, b) in e1.iter().zip(&e2) {
        assert_eq!(a, b);
    }
    assert!((norm2(&g1) - 1.0).abs() < 1e-12);
    assert!((norm2(&e1) - 1.0).abs() < 1e-12);
}

#[test]
fn shape_errors() {
    let rect = Mat::<C64>::zeros(2, 3);
    assert_eq!(
        eig_sorted(&rect).unwrap_err(),
        SpectraError::NotSquare { rows: 2, cols: 3 }
    );

    let tiny = mat_from_rows(&[&[1.0]]);
    assert_eq!(
        ground_and_excited(&tiny).unwrap_err(),
        SpectraError::TooSmall { dim: 1 }
    );
}

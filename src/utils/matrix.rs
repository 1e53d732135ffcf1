//! Matrix utility functions.

use faer::Mat;

/// Extract the principal submatrix of `m` on the given row/column indices.
pub fn principal_submatrix(m: &Mat<f64>, indices: &[usize]) -> Mat<f64> {
    Mat::from_fn(indices.len(), indices.len(), |i, j| {
        m[(indices[i], indices[j])]
    })
}

/// Indices in `0..n` that are not in `indices`, in ascending order.
pub fn complement_indices(n: usize, indices: &[usize]) -> Vec<usize> {
    (0..n).filter(|i| !indices.contains(i)).collect()
}

/// Drop row and column `k` from a square matrix.
pub fn drop_row_col(m: &Mat<f64>, k: usize) -> Mat<f64> {
    let keep = complement_indices(m.nrows(), &[k]);
    principal_submatrix(m, &keep)
}

/// Determinant of a square matrix. The empty matrix has determinant 1.
///
/// An exactly singular matrix with finite entries has determinant 0.
pub fn determinant(m: &Mat<f64>) -> f64 {
    let det = match m.nrows() {
        0 => return 1.0,
        1 => m[(0, 0)],
        _ => m.as_ref().determinant(),
    };

    // LU hits 0/0 on a zero pivot and reports NaN
    if det == 0.0 || (det.is_nan() && is_finite(m)) {
        0.0
    } else {
        det
    }
}

/// Whether every entry of `m` is finite.
fn is_finite(m: &Mat<f64>) -> bool {
    (0..m.ncols()).all(|j| (0..m.nrows()).all(|i| m[(i, j)].is_finite()))
}

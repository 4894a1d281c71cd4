use crate::StrError;
use russell_lab::Matrix;

/// Returns the symmetric part of a square matrix
///
/// ```text
/// sym(G) = ½ (G + Gᵀ)
/// ```
pub fn symmetrize(gg: &Matrix) -> Result<Matrix, StrError> {
    let (nrow, ncol) = gg.dims();
    if nrow != ncol {
        return Err("matrix must be square to compute the symmetric part");
    }
    let mut sym = Matrix::new(nrow, nrow);
    for i in 0..nrow {
        for j in 0..nrow {
            sym.set(i, j, (gg.get(i, j) + gg.get(j, i)) / 2.0);
        }
    }
    Ok(sym)
}

/// Maps the (row, col) indices of an ndim×ndim tensor to a flat index
///
/// The unrolling is row-major; the same convention must be used by the
/// consumer of the flat component list.
pub fn component_index(row: usize, col: usize, ndim: usize) -> usize {
    assert!(row < ndim && col < ndim);
    row * ndim + col
}

/// Returns the ndim×ndim identity matrix
pub fn identity(ndim: usize) -> Matrix {
    Matrix::identity(ndim)
}

/// Returns the trace of a square matrix
pub fn trace(tt: &Matrix) -> Result<f64, StrError> {
    let (nrow, ncol) = tt.dims();
    if nrow != ncol {
        return Err("matrix must be square to compute the trace");
    }
    let mut sum = 0.0;
    for i in 0..nrow {
        sum += tt.get(i, i);
    }
    Ok(sum)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{component_index, identity, symmetrize, trace};
    use russell_lab::{approx_eq, mat_approx_eq, Matrix};

    #[test]
    fn symmetrize_works() {
        let gg = Matrix::from(&[[1.0, 2.0], [3.0, 4.0]]);
        let sym = symmetrize(&gg).unwrap();
        mat_approx_eq(&sym, &[[1.0, 2.5], [2.5, 4.0]], 1e-15);
    }

    #[test]
    fn symmetrize_yields_symmetric_matrices() {
        let samples = [
            Matrix::from(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]),
            Matrix::from(&[[-1.0, 0.5, 0.0], [2.0, 3.0, -4.0], [0.1, 0.2, 0.3]]),
        ];
        for gg in &samples {
            let sym = symmetrize(gg).unwrap();
            for i in 0..3 {
                for j in 0..3 {
                    approx_eq(sym.get(i, j), sym.get(j, i), 1e-15);
                }
            }
        }
    }

    #[test]
    fn symmetrize_captures_wrong_input() {
        let gg = Matrix::new(2, 3);
        assert_eq!(
            symmetrize(&gg).err(),
            Some("matrix must be square to compute the symmetric part")
        );
    }

    #[test]
    fn component_index_is_a_bijection() {
        for ndim in [2, 3] {
            let mut seen = vec![false; ndim * ndim];
            for row in 0..ndim {
                for col in 0..ndim {
                    let index = component_index(row, col, ndim);
                    assert!(index < ndim * ndim);
                    assert!(!seen[index]);
                    seen[index] = true;
                }
            }
            assert!(seen.iter().all(|s| *s));
        }
    }

    #[test]
    fn identity_works() {
        let ii = identity(2);
        mat_approx_eq(&ii, &[[1.0, 0.0], [0.0, 1.0]], 1e-15);
    }

    #[test]
    fn trace_works() {
        let tt = Matrix::from(&[[1.0, 2.0], [3.0, 4.0]]);
        approx_eq(trace(&tt).unwrap(), 5.0, 1e-15);
        let rect = Matrix::new(3, 2);
        assert_eq!(trace(&rect).err(), Some("matrix must be square to compute the trace"));
    }
}

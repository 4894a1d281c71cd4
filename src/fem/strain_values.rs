use super::{CellValuesTrait, FieldContext};
use crate::base::PointHistory;
use crate::util::{component_index, symmetrize};
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Computes the strain tensor at the quadrature points of a cell
///
/// The strain is the symmetric gradient of the displacement field,
/// `ε = ½ (∇u + ∇uᵀ)`, written as ndim² components in row-major flat order.
pub struct StrainValues {
    /// Space dimension
    ndim: usize,
}

impl StrainValues {
    /// Allocates a new instance
    pub fn new(ndim: usize) -> Self {
        StrainValues { ndim }
    }
}

impl CellValuesTrait for StrainValues {
    fn name(&self) -> String {
        "Strain".to_string()
    }

    fn n_components(&self) -> Result<usize, StrError> {
        Ok(self.ndim * self.ndim)
    }

    fn calc_vector_values(
        &mut self,
        q_values: &mut Matrix,
        _history: &[PointHistory],
        _uu: &Vector,
        context: &FieldContext,
    ) -> Result<(), StrError> {
        let ndim = self.ndim;
        let (nrow, ncol) = q_values.dims();
        if nrow != context.ngauss() {
            return Err("the number of rows must equal the number of quadrature points");
        }
        if ncol != ndim * ndim {
            return Err("the number of columns must equal the number of tensor components");
        }
        if context.ndim() != ndim {
            return Err("the context space dimension must match the quantity dimension");
        }
        for p in 0..context.ngauss() {
            let eps = symmetrize(context.gradient(p))?;
            for i in 0..ndim {
                for j in 0..ndim {
                    q_values.set(p, component_index(i, j, ndim), eps.get(i, j));
                }
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

use super::{CellValuesTrait, FieldContext};
use crate::base::{LinearElastic, PointHistory};
use crate::util::component_index;
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Computes the stress tensor at the quadrature points of a cell
///
/// The stress follows from the displacement gradient through the linear
/// elastic law held by this quantity; the ndim² components are written in
/// row-major flat order.
pub struct StressValues {
    /// Space dimension
    ndim: usize,

    /// The constitutive law with the material constants
    law: LinearElastic,
}

impl StressValues {
    /// Allocates a new instance
    pub fn new(ndim: usize, law: LinearElastic) -> Self {
        StressValues { ndim, law }
    }
}

impl CellValuesTrait for StressValues {
    fn name(&self) -> String {
        "Stress".to_string()
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
            let sigma = self.law.stress(context.gradient(p))?;
            for i in 0..ndim {
                for j in 0..ndim {
                    q_values.set(p, component_index(i, j, ndim), sigma.get(i, j));
                }
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

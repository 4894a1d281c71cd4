use super::FieldContext;
use crate::base::PointHistory;
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Defines the trait for derived quantities evaluated at quadrature points
///
/// Implementations fill per-quadrature-point values which are then averaged
/// per cell by [crate::fem::CellProcessor]. A quantity supports the scalar
/// mode, the vector mode, or both; calling an unsupported mode returns a
/// "not implemented" error instead of panicking, so callers may recover.
pub trait CellValuesTrait {
    /// Returns the name used to label the output fields
    fn name(&self) -> String;

    /// Returns the number of components filled by the vector mode
    fn n_components(&self) -> Result<usize, StrError> {
        Err("n_components is not implemented for this quantity")
    }

    /// Fills one value per quadrature point (scalar mode)
    ///
    /// `q_values` has dim ngauss; `history` holds the ngauss records of the
    /// current cell; `context` has been re-initialized for the current cell.
    fn calc_scalar_values(
        &mut self,
        _q_values: &mut Vector,
        _history: &[PointHistory],
        _uu: &Vector,
        _context: &FieldContext,
    ) -> Result<(), StrError> {
        Err("the scalar mode is not implemented for this quantity")
    }

    /// Fills n_components values per quadrature point (vector mode)
    ///
    /// `q_values` is an (ngauss, n_components) matrix.
    fn calc_vector_values(
        &mut self,
        _q_values: &mut Matrix,
        _history: &[PointHistory],
        _uu: &Vector,
        _context: &FieldContext,
    ) -> Result<(), StrError> {
        Err("the vector mode is not implemented for this quantity")
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

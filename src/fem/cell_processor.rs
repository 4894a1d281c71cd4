use super::{CellData, CellValuesTrait, FieldContext};
use crate::base::{Dofs, HistoryStore, Partition};
use crate::StrError;
use gemlab::mesh::Mesh;
use russell_lab::{Matrix, Vector};

/// Evaluates derived quantities at quadrature points and averages them per cell
///
/// Traverses the locally owned cells, re-initializes the evaluation context
/// for each one, invokes the quantity hooks at every quadrature point, and
/// reduces the values with an unweighted arithmetic mean. The mean is not
/// weighted by the integration weights (JxW); the result is a representative
/// cell value for visualization, not an integral average.
///
/// Cells not owned by this process are skipped; their result slots keep the
/// zero default.
pub struct CellProcessor<'a> {
    /// Holds the mesh
    mesh: &'a Mesh,

    /// Holds the displacement equation numbers
    dofs: &'a Dofs,

    /// Holds the cell ownership flags
    partition: &'a Partition,

    /// Holds the history records of all quadrature points
    history: &'a HistoryStore,

    /// Evaluation context re-initialized for each cell
    context: FieldContext,
}

impl<'a> CellProcessor<'a> {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `ngauss` -- the number of quadrature points; `None` selects the
    ///   default rule of the cell kind. The history store must have been
    ///   allocated with the same number of points.
    pub fn new(
        mesh: &'a Mesh,
        dofs: &'a Dofs,
        partition: &'a Partition,
        history: &'a HistoryStore,
        ngauss: Option<usize>,
    ) -> Result<Self, StrError> {
        let context = FieldContext::new(mesh, ngauss)?;
        if history.ngauss() != context.ngauss() {
            return Err("the history store must have the same number of quadrature points as the rule");
        }
        if history.ncell() != mesh.cells.len() {
            return Err("the history store must have records for all cells");
        }
        Ok(CellProcessor {
            mesh,
            dofs,
            partition,
            history,
            context,
        })
    }

    /// Evaluates a scalar quantity and returns one value per cell
    ///
    /// # Input
    ///
    /// * `quantity` -- a quantity supporting the scalar mode
    /// * `uu` -- the solution (displacement) vector
    ///
    /// # Output
    ///
    /// Returns a vector with ncell entries holding the average of the
    /// quadrature values of each owned cell (zero for un-owned cells).
    pub fn evaluate_scalar(&mut self, quantity: &mut dyn CellValuesTrait, uu: &Vector) -> Result<Vector, StrError> {
        let ngauss = self.context.ngauss();
        let mut res = Vector::new(self.mesh.cells.len());
        let mut q_values = Vector::new(ngauss);
        for cell in &self.mesh.cells {
            if !self.partition.is_owned(cell.id) {
                continue;
            }
            self.context.reinit(self.mesh, cell, self.dofs, uu)?;
            let records = self.history.records(cell.id)?;
            if records.len() != ngauss {
                return Err("the number of history records of a cell must equal the number of quadrature points");
            }
            q_values.fill(0.0);
            quantity.calc_scalar_values(&mut q_values, records, uu, &self.context)?;
            let sum: f64 = q_values.as_data().iter().sum();
            res[cell.id] = sum / (ngauss as f64);
        }
        Ok(res)
    }

    /// Evaluates a vector quantity and returns one value per cell per component
    ///
    /// # Output
    ///
    /// Returns `n_components` vectors with ncell entries each; entry c of the
    /// result holds the average of component c over the quadrature points of
    /// each owned cell (zero for un-owned cells).
    pub fn evaluate_vector(
        &mut self,
        quantity: &mut dyn CellValuesTrait,
        uu: &Vector,
    ) -> Result<Vec<Vector>, StrError> {
        let ngauss = self.context.ngauss();
        let n_components = quantity.n_components()?;
        let ncell = self.mesh.cells.len();
        let mut res = vec![Vector::new(ncell); n_components];
        let mut q_values = Matrix::new(ngauss, n_components);
        for cell in &self.mesh.cells {
            if !self.partition.is_owned(cell.id) {
                continue;
            }
            self.context.reinit(self.mesh, cell, self.dofs, uu)?;
            let records = self.history.records(cell.id)?;
            if records.len() != ngauss {
                return Err("the number of history records of a cell must equal the number of quadrature points");
            }
            q_values.fill(0.0);
            quantity.calc_vector_values(&mut q_values, records, uu, &self.context)?;
            for i in 0..n_components {
                let mut sum = 0.0;
                for q in 0..ngauss {
                    sum += q_values.get(q, i);
                }
                res[i][cell.id] = sum / (ngauss as f64);
            }
        }
        Ok(res)
    }

    /// Evaluates a scalar quantity and adds the result to the output data
    ///
    /// The field is registered under the quantity's name.
    pub fn add_data_scalar(
        &mut self,
        quantity: &mut dyn CellValuesTrait,
        uu: &Vector,
        cell_data: &mut CellData,
    ) -> Result<(), StrError> {
        let data = self.evaluate_scalar(quantity, uu)?;
        cell_data.add_field(&quantity.name(), data)
    }

    /// Evaluates a vector quantity and adds one field per component to the output data
    ///
    /// The fields are registered under `<name>_1` .. `<name>_C` (1-based).
    pub fn add_data_vector(
        &mut self,
        quantity: &mut dyn CellValuesTrait,
        uu: &Vector,
        cell_data: &mut CellData,
    ) -> Result<(), StrError> {
        let data = self.evaluate_vector(quantity, uu)?;
        let name = quantity.name();
        for (i, component) in data.into_iter().enumerate() {
            let field_name = format!("{}_{}", name, i + 1);
            cell_data.add_field(&field_name, component)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

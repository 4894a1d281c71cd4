use crate::StrError;
use gemlab::mesh::{Cell, Mesh, PointId};

/// Maps displacement degrees of freedom to global equation numbers
///
/// Every mesh point carries ndim displacement components (ux, uy, and uz in
/// 3D) numbered sequentially point by point; i.e., the equation number of
/// component `i` at point `p` is `i + ndim · p`. The solution vector read by
/// [crate::fem::FieldContext] must follow this numbering.
pub struct Dofs {
    /// Space dimension
    ndim: usize,

    /// Total number of points in the mesh
    npoint: usize,
}

impl Dofs {
    /// Allocates a new instance
    pub fn new(mesh: &Mesh) -> Self {
        Dofs {
            ndim: mesh.ndim,
            npoint: mesh.points.len(),
        }
    }

    /// Returns the total number of equations
    pub fn n_equation(&self) -> usize {
        self.ndim * self.npoint
    }

    /// Returns the global equation number of a displacement component at a point
    pub fn eq(&self, point: PointId, dof: usize) -> Result<usize, StrError> {
        if point >= self.npoint {
            return Err("point id is out of range");
        }
        if dof >= self.ndim {
            return Err("dof index must be smaller than the space dimension");
        }
        Ok(dof + self.ndim * point)
    }

    /// Returns the local-to-global map of the displacement equations of a cell
    pub fn local_to_global(&self, cell: &Cell) -> Result<Vec<usize>, StrError> {
        let mut l2g = Vec::with_capacity(self.ndim * cell.points.len());
        for point in &cell.points {
            for dof in 0..self.ndim {
                l2g.push(self.eq(*point, dof)?);
            }
        }
        Ok(l2g)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

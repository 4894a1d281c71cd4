use crate::base::Dofs;
use crate::StrError;
use gemlab::integ::Gauss;
use gemlab::mesh::{Cell, Mesh};
use gemlab::shapes::Scratchpad;
use russell_lab::{Matrix, Vector};

/// Holds the solution values and gradients at the quadrature points of one cell
///
/// The context is allocated once for the (single) cell kind of the mesh and
/// re-initialized for every cell via [FieldContext::reinit]. The accessors
/// return the data of the cell given to the last `reinit` call; the context
/// is not valid across cells.
pub struct FieldContext {
    /// Space dimension
    ndim: usize,

    /// Quadrature rule shared by all cells
    gauss: Gauss,

    /// Scratchpad to compute the interpolation functions and gradients
    pad: Scratchpad,

    /// Solution (displacement) at each quadrature point
    ///
    /// (ngauss) vectors of dim ndim
    values: Vec<Vector>,

    /// Solution gradient ∂uᵢ/∂xⱼ at each quadrature point
    ///
    /// (ngauss) matrices of dims ndim×ndim
    gradients: Vec<Matrix>,

    /// Real coordinates of each quadrature point
    ///
    /// (ngauss) vectors of dim ndim
    coords: Vec<Vector>,
}

impl FieldContext {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `mesh` -- the mesh; all cells must share the same kind so that the
    ///   number of quadrature points is the same for every cell
    /// * `ngauss` -- the number of quadrature points; `None` selects the
    ///   default rule of the cell kind
    pub fn new(mesh: &Mesh, ngauss: Option<usize>) -> Result<Self, StrError> {
        let cell = mesh.cells.first().ok_or("mesh must have at least one cell")?;
        let kind = cell.kind;
        if mesh.cells.iter().any(|c| c.kind != kind) {
            return Err("all cells must share the same kind");
        }
        let ndim = mesh.ndim;
        let gauss = Gauss::new_or_sized(kind, ngauss)?;
        let pad = Scratchpad::new(ndim, kind)?;
        let nq = gauss.npoint();
        Ok(FieldContext {
            ndim,
            gauss,
            pad,
            values: vec![Vector::new(ndim); nq],
            gradients: vec![Matrix::new(ndim, ndim); nq],
            coords: vec![Vector::new(ndim); nq],
        })
    }

    /// Returns the number of quadrature points
    pub fn ngauss(&self) -> usize {
        self.gauss.npoint()
    }

    /// Returns the space dimension
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Binds the context to one cell's geometry and the solution vector
    ///
    /// Must be called before reading values for each cell.
    pub fn reinit(&mut self, mesh: &Mesh, cell: &Cell, dofs: &Dofs, uu: &Vector) -> Result<(), StrError> {
        if cell.kind != self.pad.kind {
            return Err("the cell kind must match the kind used to allocate the context");
        }
        if uu.dim() != dofs.n_equation() {
            return Err("the solution vector must have one entry per equation");
        }
        mesh.set_pad(&mut self.pad, &cell.points);
        let l2g = dofs.local_to_global(cell)?;
        let nnode = self.pad.kind.nnode();
        let ndim = self.ndim;
        for p in 0..self.gauss.npoint() {
            let iota = self.gauss.coords(p);
            self.pad.calc_interp(iota);
            let _det_jac = self.pad.calc_gradient(iota)?;
            self.values[p].fill(0.0);
            self.gradients[p].fill(0.0);
            self.coords[p].fill(0.0);
            for m in 0..nnode {
                let nn_m = self.pad.interp[m];
                for i in 0..ndim {
                    let u_mi = uu[l2g[i + ndim * m]];
                    self.values[p][i] += nn_m * u_mi;
                    self.coords[p][i] += nn_m * self.pad.xxt.get(i, m);
                    for j in 0..ndim {
                        self.gradients[p].add(i, j, u_mi * self.pad.gradient.get(m, j));
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns the solution at a quadrature point (after reinit)
    pub fn value(&self, p: usize) -> &Vector {
        &self.values[p]
    }

    /// Returns the solution gradient at a quadrature point (after reinit)
    pub fn gradient(&self, p: usize) -> &Matrix {
        &self.gradients[p]
    }

    /// Returns the real coordinates of a quadrature point (after reinit)
    pub fn coords(&self, p: usize) -> &Vector {
        &self.coords[p]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

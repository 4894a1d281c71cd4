use crate::util::{identity, symmetrize, trace};
use crate::StrError;
use russell_lab::{mat_add, Matrix};

/// Implements the linear elastic (small strain) constitutive law
///
/// Given a displacement gradient ∇u, the stress is
///
/// ```text
/// σ = λ tr(ε) I + 2μ ε    with    ε = ½ (∇u + ∇uᵀ)
/// ```
///
/// where λ and μ are the Lamé parameters held as immutable configuration.
pub struct LinearElastic {
    /// Lamé's first parameter λ
    pub lambda: f64,

    /// Lamé's second parameter μ (shear modulus)
    pub mu: f64,
}

impl LinearElastic {
    /// Allocates a new instance given the Lamé parameters
    pub fn new(lambda: f64, mu: f64) -> Self {
        LinearElastic { lambda, mu }
    }

    /// Allocates a new instance given Young's modulus and Poisson's ratio
    pub fn from_young_poisson(young: f64, poisson: f64) -> Self {
        LinearElastic {
            lambda: young * poisson / ((1.0 + poisson) * (1.0 - 2.0 * poisson)),
            mu: young / (2.0 * (1.0 + poisson)),
        }
    }

    /// Computes the stress tensor from a displacement gradient
    ///
    /// Returns an ndim×ndim matrix with the same dimension as `grad_u`.
    pub fn stress(&self, grad_u: &Matrix) -> Result<Matrix, StrError> {
        let (nrow, ncol) = grad_u.dims();
        if nrow != ncol {
            return Err("displacement gradient must be a square matrix");
        }
        let eps = symmetrize(grad_u)?;
        let tr_eps = trace(&eps)?;
        let mut sigma = Matrix::new(nrow, nrow);
        mat_add(&mut sigma, self.lambda * tr_eps, &identity(nrow), 2.0 * self.mu, &eps)?;
        Ok(sigma)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

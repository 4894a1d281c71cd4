use gemlab::mesh::Mesh;
use russell_lab::{Matrix, Vector};

/// Generates a displacement field with a constant gradient
///
/// Sets `uᵢ(x) = Σⱼ Gᵢⱼ xⱼ` at every point; hence the displacement gradient
/// equals `grad` everywhere, for any element kind.
/// (only works for a homogeneous mesh; with same element kinds)
#[allow(dead_code)]
pub(crate) fn generate_displacement_field(mesh: &Mesh, grad: &Matrix) -> Vector {
    let ndim = mesh.ndim;
    let npoint = mesh.points.len();
    let mut uu = Vector::new(ndim * npoint);
    for p in 0..npoint {
        for i in 0..ndim {
            for j in 0..ndim {
                uu[i + ndim * p] += grad.get(i, j) * mesh.points[p].coords[j];
            }
        }
    }
    uu
}

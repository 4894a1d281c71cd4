use fempost::base::{Dofs, HistoryStore, LinearElastic, Partition};
use fempost::fem::{CellData, CellProcessor, StrainValues, StressValues};
use fempost::StrError;
use gemlab::mesh::{Mesh, Samples};
use russell_lab::{approx_eq, Matrix, Vector};

// sets u(x) = G x at every point so the displacement gradient is G everywhere
fn displacement_field(mesh: &Mesh, grad: &Matrix) -> Vector {
    let ndim = mesh.ndim;
    let mut uu = Vector::new(ndim * mesh.points.len());
    for point in &mesh.points {
        for i in 0..ndim {
            for j in 0..ndim {
                uu[i + ndim * point.id] += grad.get(i, j) * point.coords[j];
            }
        }
    }
    uu
}

#[test]
fn test_strain_stress_qua4() -> Result<(), StrError> {
    // mesh with one Qua4 (2x2 quadrature rule)
    let mesh = Samples::one_qua4();
    let dofs = Dofs::new(&mesh);
    let partition = Partition::new_all_owned(mesh.cells.len());
    let history = HistoryStore::new(mesh.cells.len(), 4);
    let mut processor = CellProcessor::new(&mesh, &dofs, &partition, &history, None)?;

    // strain of a constant-gradient field: sym(G) = [[1,2.5],[2.5,4]]
    let grad = Matrix::from(&[[1.0, 2.0], [3.0, 4.0]]);
    let uu = displacement_field(&mesh, &grad);
    let mut strain = StrainValues::new(2);
    let res = processor.evaluate_vector(&mut strain, &uu)?;
    assert_eq!(res.len(), 4);
    approx_eq(res[0][0], 1.0, 1e-14);
    approx_eq(res[1][0], 2.5, 1e-14);
    approx_eq(res[2][0], 2.5, 1e-14);
    approx_eq(res[3][0], 4.0, 1e-14);

    // stress of a uniaxial stretching with λ = μ = 1: σ = [[3,0],[0,1]]
    let grad_uni = Matrix::from(&[[1.0, 0.0], [0.0, 0.0]]);
    let uu_uni = displacement_field(&mesh, &grad_uni);
    let mut stress = StressValues::new(2, LinearElastic::new(1.0, 1.0));
    let res = processor.evaluate_vector(&mut stress, &uu_uni)?;
    approx_eq(res[0][0], 3.0, 1e-14);
    approx_eq(res[1][0], 0.0, 1e-14);
    approx_eq(res[2][0], 0.0, 1e-14);
    approx_eq(res[3][0], 1.0, 1e-14);

    // attach both quantities: 4 fields each, 1-based component suffixes
    let mut cell_data = CellData::new(&mesh);
    processor.add_data_vector(&mut strain, &uu, &mut cell_data)?;
    processor.add_data_vector(&mut stress, &uu_uni, &mut cell_data)?;
    assert_eq!(cell_data.n_fields(), 8);
    assert_eq!(
        cell_data.field_names(),
        &["Strain_1", "Strain_2", "Strain_3", "Strain_4", "Stress_1", "Stress_2", "Stress_3", "Stress_4"]
    );
    approx_eq(cell_data.field("Strain_2").unwrap()[0], 2.5, 1e-14);
    approx_eq(cell_data.field("Stress_1").unwrap()[0], 3.0, 1e-14);
    approx_eq(cell_data.field("Stress_4").unwrap()[0], 1.0, 1e-14);

    // write the VTU file for ParaView
    let full_path = "/tmp/fempost/test_strain_stress_qua4.vtu";
    cell_data.write_vtu(full_path)?;
    let contents = std::fs::read_to_string(full_path).map_err(|_| "cannot read file")?;
    assert!(contents.contains("Name=\"Strain_1\""));
    assert!(contents.contains("Name=\"Stress_4\""));
    Ok(())
}

#[test]
fn test_strain_tri3_mesh() -> Result<(), StrError> {
    // all three Tri3 cells see the same constant gradient
    let mesh = Samples::three_tri3();
    let dofs = Dofs::new(&mesh);
    let partition = Partition::new_all_owned(mesh.cells.len());
    let history = HistoryStore::new(mesh.cells.len(), 3);
    let mut processor = CellProcessor::new(&mesh, &dofs, &partition, &history, None)?;
    let grad = Matrix::from(&[[0.1, 0.2], [0.3, 0.4]]);
    let uu = displacement_field(&mesh, &grad);
    let mut strain = StrainValues::new(2);
    let res = processor.evaluate_vector(&mut strain, &uu)?;
    for cell_id in 0..mesh.cells.len() {
        approx_eq(res[0][cell_id], 0.1, 1e-14);
        approx_eq(res[1][cell_id], 0.25, 1e-14);
        approx_eq(res[2][cell_id], 0.25, 1e-14);
        approx_eq(res[3][cell_id], 0.4, 1e-14);
    }
    Ok(())
}

use crate::StrError;
use gemlab::mesh::Mesh;
use russell_lab::Vector;
use std::ffi::OsStr;
use std::fmt::Write;
use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::Path;

/// Collects named per-cell fields and writes them for visualization
///
/// Every field holds exactly one value per cell. The fields are appended by
/// [crate::fem::CellProcessor::add_data_scalar] and
/// [crate::fem::CellProcessor::add_data_vector] (or directly) and serialized
/// with [CellData::write_vtu] for ParaView.
pub struct CellData<'a> {
    /// Holds the mesh
    mesh: &'a Mesh,

    /// Named fields with one value per cell, in insertion order
    fields: Vec<(String, Vector)>,
}

impl<'a> CellData<'a> {
    /// Allocates a new instance
    pub fn new(mesh: &'a Mesh) -> Self {
        CellData {
            mesh,
            fields: Vec::new(),
        }
    }

    /// Adds one named scalar field defined over all cells
    pub fn add_field(&mut self, name: &str, values: Vector) -> Result<(), StrError> {
        if values.dim() != self.mesh.cells.len() {
            return Err("the field must have exactly one value per cell");
        }
        if self.fields.iter().any(|(n, _)| n == name) {
            return Err("a field with the same name has already been added");
        }
        self.fields.push((name.to_string(), values));
        Ok(())
    }

    /// Returns the number of added fields
    pub fn n_fields(&self) -> usize {
        self.fields.len()
    }

    /// Returns the names of the added fields, in insertion order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Returns the values of a field given its name
    pub fn field(&self, name: &str) -> Option<&Vector> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values)
    }

    /// Writes a VTU file with the mesh and the cell fields for ParaView
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_vtu<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let mesh = self.mesh;
        let ndim = mesh.ndim;
        let npoint = mesh.points.len();
        let ncell = mesh.cells.len();
        if ncell < 1 {
            return Err("there are no cells to write");
        }

        // output buffer
        let mut buffer = String::new();

        // header
        write!(
            &mut buffer,
            "<?xml version=\"1.0\"?>\n\
             <VTKFile type=\"UnstructuredGrid\" version=\"0.1\" byte_order=\"LittleEndian\">\n\
             <UnstructuredGrid>\n\
             <Piece NumberOfPoints=\"{}\" NumberOfCells=\"{}\">\n",
            npoint, ncell
        )
        .unwrap();

        // nodes: coordinates
        write!(
            &mut buffer,
            "<Points>\n\
             <DataArray type=\"Float64\" NumberOfComponents=\"3\" format=\"ascii\">\n",
        )
        .unwrap();
        for index in 0..npoint {
            for dim in 0..ndim {
                write!(&mut buffer, "{:?} ", mesh.points[index].coords[dim]).unwrap();
            }
            if ndim == 2 {
                write!(&mut buffer, "0.0 ").unwrap();
            }
        }
        write!(
            &mut buffer,
            "\n</DataArray>\n\
             </Points>\n"
        )
        .unwrap();

        // elements: connectivity
        write!(
            &mut buffer,
            "<Cells>\n\
             <DataArray type=\"Int32\" Name=\"connectivity\" format=\"ascii\">\n"
        )
        .unwrap();
        for cell in &mesh.cells {
            if cell.kind.vtk_type().is_none() {
                return Err("cannot generate VTU file because VTK cell type is not available");
            }
            for p in &cell.points {
                write!(&mut buffer, "{} ", p).unwrap();
            }
        }

        // elements: offsets
        write!(
            &mut buffer,
            "\n</DataArray>\n\
             <DataArray type=\"Int32\" Name=\"offsets\" format=\"ascii\">\n"
        )
        .unwrap();
        let mut offset = 0;
        for cell in &mesh.cells {
            offset += cell.points.len();
            write!(&mut buffer, "{} ", offset).unwrap();
        }

        // elements: types
        write!(
            &mut buffer,
            "\n</DataArray>\n\
             <DataArray type=\"UInt8\" Name=\"types\" format=\"ascii\">\n"
        )
        .unwrap();
        for cell in &mesh.cells {
            if let Some(vtk) = cell.kind.vtk_type() {
                write!(&mut buffer, "{} ", vtk).unwrap();
            }
        }
        write!(
            &mut buffer,
            "\n</DataArray>\n\
             </Cells>\n"
        )
        .unwrap();

        // cell data: one array per field
        write!(&mut buffer, "<CellData Scalars=\"cell_data\">\n").unwrap();
        for (name, values) in &self.fields {
            write!(
                &mut buffer,
                "<DataArray type=\"Float64\" Name=\"{}\" NumberOfComponents=\"1\" format=\"ascii\">\n",
                name
            )
            .unwrap();
            for cell in &mesh.cells {
                write!(&mut buffer, "{:?} ", values[cell.id]).unwrap();
            }
            write!(&mut buffer, "\n</DataArray>\n").unwrap();
        }
        write!(&mut buffer, "</CellData>\n").unwrap();

        // footer
        write!(
            &mut buffer,
            "</Piece>\n\
             </UnstructuredGrid>\n\
             </VTKFile>\n"
        )
        .unwrap();

        // create directory and write file
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        file.write_all(buffer.as_bytes()).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

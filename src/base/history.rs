use crate::StrError;
use gemlab::mesh::CellId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds named scalar values recorded at one quadrature point
///
/// The records are filled by the physics solver (e.g., damage or other
/// internal variables) and read back during post-processing. A missing name
/// means that the value has not been computed yet; readers must fall back to
/// a default instead of failing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PointHistory {
    values: HashMap<String, f64>,
}

impl PointHistory {
    /// Allocates an empty record
    pub fn new() -> Self {
        PointHistory { values: HashMap::new() }
    }

    /// Returns the stored value or a default when the name is absent
    pub fn get(&self, name: &str, default: f64) -> f64 {
        match self.values.get(name) {
            Some(value) => *value,
            None => default,
        }
    }

    /// Stores a value under a name, replacing any previous value
    pub fn set(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), value);
    }
}

/// Stores the history records of all quadrature points of all cells
///
/// The records are laid out as an (ncell, ngauss) array; every cell carries
/// the same number of quadrature points.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryStore {
    /// Number of quadrature points per cell
    ngauss: usize,

    /// All records
    ///
    /// (ncell, ngauss)
    all: Vec<Vec<PointHistory>>,
}

impl HistoryStore {
    /// Allocates empty records for ncell cells with ngauss points each
    pub fn new(ncell: usize, ngauss: usize) -> Self {
        HistoryStore {
            ngauss,
            all: vec![vec![PointHistory::new(); ngauss]; ncell],
        }
    }

    /// Returns the number of quadrature points per cell
    pub fn ngauss(&self) -> usize {
        self.ngauss
    }

    /// Returns the number of cells
    pub fn ncell(&self) -> usize {
        self.all.len()
    }

    /// Returns the ordered records of all quadrature points of a cell
    pub fn records(&self, cell_id: CellId) -> Result<&[PointHistory], StrError> {
        match self.all.get(cell_id) {
            Some(records) => Ok(records),
            None => Err("cell id is out of range"),
        }
    }

    /// Returns the mutable records of all quadrature points of a cell
    pub fn records_mut(&mut self, cell_id: CellId) -> Result<&mut [PointHistory], StrError> {
        match self.all.get_mut(cell_id) {
            Some(records) => Ok(records),
            None => Err("cell id is out of range"),
        }
    }

    /// Reads a JSON file containing the history records
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(input);
        let store = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(store)
    }

    /// Writes a JSON file with the history records
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

use gemlab::mesh::CellId;

/// Holds the cell ownership flags under domain decomposition
///
/// Every process owns a disjoint subset of cells and computes results only
/// for its owned subset; the remaining (ghost) cells are skipped during
/// traversal and their result slots keep the zero default. Any exchange of
/// solution or history values across processes happens outside this crate.
pub struct Partition {
    /// Ownership flag of each cell
    ///
    /// (ncell)
    owned: Vec<bool>,
}

impl Partition {
    /// Allocates a partition from explicit ownership flags
    pub fn new(owned: Vec<bool>) -> Self {
        Partition { owned }
    }

    /// Allocates a partition where all cells are owned (serial runs)
    pub fn new_all_owned(ncell: usize) -> Self {
        Partition { owned: vec![true; ncell] }
    }

    /// Tells whether this process owns a cell or not
    pub fn is_owned(&self, cell_id: CellId) -> bool {
        match self.owned.get(cell_id) {
            Some(flag) => *flag,
            None => false,
        }
    }

    /// Returns the number of owned cells
    pub fn n_owned(&self) -> usize {
        self.owned.iter().filter(|flag| **flag).count()
    }

    /// Returns the total number of cells
    pub fn ncell(&self) -> usize {
        self.owned.len()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

use super::{CellValuesTrait, FieldContext};
use crate::base::PointHistory;
use crate::StrError;
use russell_lab::Vector;

/// Retrieves a recorded scalar history field at the quadrature points of a cell
///
/// Points where the field has not been recorded yet yield zero.
pub struct HistoryValues {
    /// The name of the recorded field
    field: String,
}

impl HistoryValues {
    /// Allocates a new instance given the name of the recorded field
    pub fn new(field: &str) -> Self {
        HistoryValues {
            field: field.to_string(),
        }
    }
}

impl CellValuesTrait for HistoryValues {
    /// Returns the field name with spaces replaced by underscores
    fn name(&self) -> String {
        self.field.replace(' ', "_")
    }

    fn calc_scalar_values(
        &mut self,
        q_values: &mut Vector,
        history: &[PointHistory],
        _uu: &Vector,
        _context: &FieldContext,
    ) -> Result<(), StrError> {
        if q_values.dim() != history.len() {
            return Err("the number of values must equal the number of history records");
        }
        for (q, record) in history.iter().enumerate() {
            q_values[q] = record.get(&self.field, 0.0);
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::HistoryValues;
    use crate::base::PointHistory;
    use crate::fem::{CellValuesTrait, FieldContext};
    use gemlab::mesh::Samples;
    use russell_lab::{approx_eq, Matrix, Vector};

    #[test]
    fn name_replaces_spaces_with_underscores() {
        let quantity = HistoryValues::new("crack width");
        assert_eq!(quantity.name(), "crack_width");
        // idempotent: sanitizing an already sanitized name changes nothing
        let again = HistoryValues::new(&quantity.name());
        assert_eq!(again.name(), "crack_width");
        let multi = HistoryValues::new("a b c");
        assert_eq!(multi.name(), "a_b_c");
    }

    #[test]
    fn vector_mode_is_not_implemented() {
        let mesh = Samples::one_qua4();
        let context = FieldContext::new(&mesh, None).unwrap();
        let mut quantity = HistoryValues::new("damage");
        assert_eq!(
            quantity.n_components().err(),
            Some("n_components is not implemented for this quantity")
        );
        let mut q_values = Matrix::new(4, 1);
        assert_eq!(
            quantity.calc_vector_values(&mut q_values, &[], &Vector::new(8), &context).err(),
            Some("the vector mode is not implemented for this quantity")
        );
    }

    #[test]
    fn calc_scalar_values_works() {
        let mesh = Samples::one_qua4();
        let context = FieldContext::new(&mesh, None).unwrap();
        let mut records = vec![PointHistory::new(); 4];
        records[0].set("damage", 0.1);
        records[2].set("damage", 0.3);
        let mut quantity = HistoryValues::new("damage");
        let mut q_values = Vector::new(4);
        let uu = Vector::new(8);
        quantity.calc_scalar_values(&mut q_values, &records, &uu, &context).unwrap();
        approx_eq(q_values[0], 0.1, 1e-15);
        approx_eq(q_values[1], 0.0, 1e-15); // absent: default
        approx_eq(q_values[2], 0.3, 1e-15);
        approx_eq(q_values[3], 0.0, 1e-15);
    }

    #[test]
    fn calc_scalar_values_captures_wrong_buffer() {
        let mesh = Samples::one_qua4();
        let context = FieldContext::new(&mesh, None).unwrap();
        let records = vec![PointHistory::new(); 4];
        let mut quantity = HistoryValues::new("damage");
        let mut q_values = Vector::new(3);
        assert_eq!(
            quantity.calc_scalar_values(&mut q_values, &records, &Vector::new(8), &context).err(),
            Some("the number of values must equal the number of history records")
        );
    }
}

//! Implements the cell traversal engine, the derived quantities, and the output sink

mod cell_data;
mod cell_processor;
mod cell_values;
mod field_context;
mod history_values;
mod strain_values;
mod stress_values;

pub use cell_data::*;
pub use cell_processor::*;
pub use cell_values::*;
pub use field_context::*;
pub use history_values::*;
pub use strain_values::*;
pub use stress_values::*;

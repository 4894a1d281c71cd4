//! FemPost - cell-based post-processing of finite element solutions
//!
//! This crate extracts derived quantities (strain, stress, and recorded
//! history fields) from a solution field defined over a mesh and packages
//! them as per-cell data for visualization. The values are computed at the
//! quadrature (Gauss) points of each locally owned cell and reduced to one
//! value per cell with an unweighted arithmetic mean.
//!
//! The main components are:
//!
//! * [crate::fem::CellProcessor] -- traverses the owned cells and aggregates
//!   quadrature-point values into per-cell results
//! * [crate::fem::CellValuesTrait] -- the pluggable evaluation strategy
//!   implemented by [crate::fem::StrainValues], [crate::fem::StressValues],
//!   and [crate::fem::HistoryValues]
//! * [crate::fem::FieldContext] -- per-cell solution values and gradients at
//!   the quadrature points
//! * [crate::fem::CellData] -- collects named per-cell fields and writes
//!   ParaView (VTU) files

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod fem;
pub mod util;

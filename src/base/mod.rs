//! Implements the base structures for post-processing a finite element solution

mod dofs;
mod history;
mod linear_elastic;
mod partition;
mod testing;

pub use dofs::*;
pub use history::*;
pub use linear_elastic::*;
pub use partition::*;

#[allow(unused_imports)]
pub(crate) use testing::*;

//! Contains utility functions for tensor components

mod tensor_math;

pub use tensor_math::*;

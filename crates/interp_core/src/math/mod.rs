//! Interpolation kernels, range generation and value remapping.

pub mod interpolators;
pub mod range;
pub mod remap;

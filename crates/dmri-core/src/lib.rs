//! Volumetric interpolation kernels.
//!
//! Point queries against caller-owned voxel grids, plus data-parallel batch
//! wrappers for tracking workloads.

pub mod batch;
pub mod interp;

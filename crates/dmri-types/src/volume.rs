// ─────────────────────────────────────────────────────────────────────
// DMRI Voxel Kernels — Volume Views
// Compiled numerical core for diffusion-MRI tractography pipelines.
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Read-only views over caller-owned voxel grids.
//!
//! The caller allocates the dense array once per analysis session and hands the
//! kernels a borrowed view; nothing here mutates, resizes, or frees grid memory.
//! Axis order is (X, Y, Z) for scalar fields and (X, Y, Z, C) for C-channel
//! fields such as per-voxel direction data.

use ndarray::{s, ArrayView1, ArrayView3, ArrayView4};

use crate::error::{DmriError, DmriResult};

/// Read-only view of a scalar voxel grid with shape (X, Y, Z).
#[derive(Debug, Clone)]
pub struct ScalarGrid<'a> {
    data: ArrayView3<'a, f64>,
}

impl<'a> ScalarGrid<'a> {
    /// Wrap a caller-owned array. All dimensions must be positive.
    pub fn new(data: ArrayView3<'a, f64>) -> DmriResult<Self> {
        let (nx, ny, nz) = data.dim();
        if nx == 0 || ny == 0 || nz == 0 {
            return Err(DmriError::InvalidShape(format!(
                "scalar grid dimensions must all be positive, got ({nx}, {ny}, {nz})"
            )));
        }
        Ok(Self { data })
    }

    /// Grid shape as (X, Y, Z).
    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        let (nx, ny, nz) = self.data.dim();
        [nx, ny, nz]
    }

    /// True iff all indices lie within `[0, dim-1]` on their axis.
    #[inline]
    pub fn in_bounds(&self, ix: isize, iy: isize, iz: isize) -> bool {
        let (nx, ny, nz) = self.data.dim();
        ix >= 0
            && iy >= 0
            && iz >= 0
            && (ix as usize) < nx
            && (iy as usize) < ny
            && (iz as usize) < nz
    }

    /// Bounds-checked voxel read. This layer never clamps or wraps.
    #[inline]
    pub fn voxel(&self, ix: isize, iy: isize, iz: isize) -> DmriResult<f64> {
        if !self.in_bounds(ix, iy, iz) {
            return Err(DmriError::OutOfRange {
                ix,
                iy,
                iz,
                shape: self.dims(),
            });
        }
        Ok(self.data[[ix as usize, iy as usize, iz as usize]])
    }

    /// Unchecked voxel read for callers that have already verified bounds.
    #[inline]
    pub fn get(&self, ix: usize, iy: usize, iz: usize) -> f64 {
        debug_assert!(self.in_bounds(ix as isize, iy as isize, iz as isize));
        self.data[[ix, iy, iz]]
    }
}

/// Read-only view of a C-channel voxel grid with shape (X, Y, Z, C).
///
/// The channel count is fixed for the grid's lifetime.
#[derive(Debug, Clone)]
pub struct VectorGrid<'a> {
    data: ArrayView4<'a, f64>,
}

impl<'a> VectorGrid<'a> {
    /// Wrap a caller-owned array. All dimensions, including the channel
    /// dimension, must be positive.
    pub fn new(data: ArrayView4<'a, f64>) -> DmriResult<Self> {
        let (nx, ny, nz, nc) = data.dim();
        if nx == 0 || ny == 0 || nz == 0 || nc == 0 {
            return Err(DmriError::InvalidShape(format!(
                "vector grid dimensions must all be positive, got ({nx}, {ny}, {nz}, {nc})"
            )));
        }
        Ok(Self { data })
    }

    /// Spatial shape as (X, Y, Z).
    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        let (nx, ny, nz, _) = self.data.dim();
        [nx, ny, nz]
    }

    /// Number of channels stored per voxel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.data.dim().3
    }

    /// True iff all spatial indices lie within `[0, dim-1]` on their axis.
    #[inline]
    pub fn in_bounds(&self, ix: isize, iy: isize, iz: isize) -> bool {
        let (nx, ny, nz, _) = self.data.dim();
        ix >= 0
            && iy >= 0
            && iz >= 0
            && (ix as usize) < nx
            && (iy as usize) < ny
            && (iz as usize) < nz
    }

    /// Bounds-checked view of one voxel's channel vector.
    #[inline]
    pub fn voxel(&self, ix: isize, iy: isize, iz: isize) -> DmriResult<ArrayView1<'a, f64>> {
        if !self.in_bounds(ix, iy, iz) {
            return Err(DmriError::OutOfRange {
                ix,
                iy,
                iz,
                shape: self.dims(),
            });
        }
        Ok(self
            .data
            .slice_move(s![ix as usize, iy as usize, iz as usize, ..]))
    }

    /// Unchecked single-channel read for callers that have already verified
    /// bounds.
    #[inline]
    pub fn get(&self, ix: usize, iy: usize, iz: usize, c: usize) -> f64 {
        debug_assert!(self.in_bounds(ix as isize, iy as isize, iz as isize));
        debug_assert!(c < self.channels());
        self.data[[ix, iy, iz, c]]
    }
}

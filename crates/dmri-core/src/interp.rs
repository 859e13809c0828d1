// ─────────────────────────────────────────────────────────────────────
// DMRI Voxel Kernels — Interpolation
// Compiled numerical core for diffusion-MRI tractography pipelines.
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Nearest-neighbour and trilinear interpolation at continuous coordinates.
//!
//! Coordinates live in grid index space; any world-to-voxel affine is the
//! caller's concern. Boundary conditions are reported through the validity of
//! the result (`None` / `false`), never as `Err`, so high-volume tracking
//! loops can skip invalid points cheaply.
//!
//! Both the scalar and the per-channel paths blend the 8 corner voxels with
//! the same product weights (see [`trilinear_weights`]), so interpolating a
//! C-channel grid matches interpolating each channel as its own scalar grid
//! exactly, not merely within tolerance.

use dmri_math::vec3;
use dmri_types::config::{BoundaryPolicy, InterpConfig};
use dmri_types::volume::{ScalarGrid, VectorGrid};

/// 8-corner trilinear weights for fractional offsets in `[0, 1]`.
///
/// Corner order is `(dx, dy, dz)` with `dz` varying fastest:
/// `(0,0,0), (0,0,1), (0,1,0), (0,1,1), (1,0,0), (1,0,1), (1,1,0), (1,1,1)`.
/// The weighted sum over this order equals nested linear interpolation along
/// z, then y, then x. Offsets of exactly 0 or 1 produce exact 0/1 weights, so
/// integer-valued coordinates reproduce the stored voxel value.
#[inline]
pub fn trilinear_weights(fx: f64, fy: f64, fz: f64) -> [f64; 8] {
    let gx = 1.0 - fx;
    let gy = 1.0 - fy;
    let gz = 1.0 - fz;
    [
        gx * gy * gz,
        gx * gy * fz,
        gx * fy * gz,
        gx * fy * fz,
        fx * gy * gz,
        fx * gy * fz,
        fx * fy * gz,
        fx * fy * fz,
    ]
}

/// Outcome of mapping a query point onto the grid under the active policy.
enum Resolved {
    /// Lower corner of the interpolation cell plus fractional offsets.
    Cell { base: [usize; 3], frac: [f64; 3] },
    /// Out-of-domain query answered with the configured fill value.
    Fill(f64),
    Invalid,
}

/// Lower cell corner and fractional offsets for an in-domain point.
///
/// On the top face of an axis the base shifts down one voxel (offset becomes
/// exactly 1.0) so the neighbourhood stays in bounds; same device as clamping
/// the base index to `n - 2`.
#[inline]
fn cell_for(dims: [usize; 3], point: [f64; 3]) -> ([usize; 3], [f64; 3]) {
    let mut base = [0usize; 3];
    let mut frac = [0.0f64; 3];
    for axis in 0..3 {
        let n = dims[axis];
        let b = if n >= 2 {
            (point[axis].floor() as usize).min(n - 2)
        } else {
            0
        };
        base[axis] = b;
        frac[axis] = point[axis] - b as f64;
    }
    (base, frac)
}

fn resolve_cell(dims: [usize; 3], point: [f64; 3], cfg: &InterpConfig) -> Resolved {
    let in_domain = (0..3).all(|axis| {
        let max = (dims[axis] - 1) as f64;
        // NaN fails both comparisons
        point[axis] >= 0.0 && point[axis] <= max
    });

    match cfg.boundary_policy {
        BoundaryPolicy::Strict => {
            if in_domain {
                let (base, frac) = cell_for(dims, point);
                Resolved::Cell { base, frac }
            } else {
                Resolved::Invalid
            }
        }
        BoundaryPolicy::Clamped => {
            if in_domain {
                let (base, frac) = cell_for(dims, point);
                return Resolved::Cell { base, frac };
            }
            if let Some(fill) = cfg.fill_value {
                return Resolved::Fill(fill);
            }
            if point.iter().any(|x| !x.is_finite()) {
                return Resolved::Invalid;
            }
            let mut clamped = [0.0f64; 3];
            for axis in 0..3 {
                clamped[axis] = point[axis].clamp(0.0, (dims[axis] - 1) as f64);
            }
            let (base, frac) = cell_for(dims, clamped);
            Resolved::Cell { base, frac }
        }
    }
}

/// Outcome of rounding a query point to its nearest voxel.
enum Nearest {
    Index([usize; 3]),
    Fill(f64),
    Invalid,
}

/// Rounds half-up per axis: `floor(x + 0.5)`, so ties at `.5` go toward the
/// higher index.
fn resolve_nearest(dims: [usize; 3], point: [f64; 3], cfg: &InterpConfig) -> Nearest {
    if point.iter().any(|x| !x.is_finite()) {
        return match (cfg.boundary_policy, cfg.fill_value) {
            (BoundaryPolicy::Clamped, Some(fill)) => Nearest::Fill(fill),
            _ => Nearest::Invalid,
        };
    }

    let mut idx = [0usize; 3];
    for axis in 0..3 {
        let rounded = (point[axis] + 0.5).floor() as isize;
        let n = dims[axis] as isize;
        if rounded < 0 || rounded >= n {
            return match cfg.boundary_policy {
                BoundaryPolicy::Strict => Nearest::Invalid,
                BoundaryPolicy::Clamped => match cfg.fill_value {
                    Some(fill) => Nearest::Fill(fill),
                    None => {
                        idx[axis] = rounded.clamp(0, n - 1) as usize;
                        continue;
                    }
                },
            };
        }
        idx[axis] = rounded as usize;
    }
    Nearest::Index(idx)
}

/// Trilinear interpolation of a scalar grid at a continuous coordinate.
///
/// `None` marks an invalid query under the active boundary policy.
pub fn trilinear_scalar(grid: &ScalarGrid<'_>, point: [f64; 3], cfg: &InterpConfig) -> Option<f64> {
    let (base, frac) = match resolve_cell(grid.dims(), point, cfg) {
        Resolved::Cell { base, frac } => (base, frac),
        Resolved::Fill(fill) => return Some(fill),
        Resolved::Invalid => return None,
    };

    let dims = grid.dims();
    let [x0, y0, z0] = base;
    // Upper corner only collapses onto the lower one on a single-voxel axis,
    // where its weight is exactly zero.
    let x1 = (x0 + 1).min(dims[0] - 1);
    let y1 = (y0 + 1).min(dims[1] - 1);
    let z1 = (z0 + 1).min(dims[2] - 1);

    let w = trilinear_weights(frac[0], frac[1], frac[2]);
    Some(
        w[0] * grid.get(x0, y0, z0)
            + w[1] * grid.get(x0, y0, z1)
            + w[2] * grid.get(x0, y1, z0)
            + w[3] * grid.get(x0, y1, z1)
            + w[4] * grid.get(x1, y0, z0)
            + w[5] * grid.get(x1, y0, z1)
            + w[6] * grid.get(x1, y1, z0)
            + w[7] * grid.get(x1, y1, z1),
    )
}

/// Trilinear interpolation of a C-channel grid into a caller-provided buffer.
///
/// Returns the validity of the query; `out` is unspecified when invalid.
/// A buffer whose length differs from the channel count is a caller bug and
/// panics.
pub fn trilinear_vector_into(
    grid: &VectorGrid<'_>,
    point: [f64; 3],
    cfg: &InterpConfig,
    out: &mut [f64],
) -> bool {
    assert_eq!(
        out.len(),
        grid.channels(),
        "output buffer length {} does not match channel count {}",
        out.len(),
        grid.channels()
    );

    let (base, frac) = match resolve_cell(grid.dims(), point, cfg) {
        Resolved::Cell { base, frac } => (base, frac),
        Resolved::Fill(fill) => {
            out.fill(fill);
            return true;
        }
        Resolved::Invalid => return false,
    };

    let dims = grid.dims();
    let [x0, y0, z0] = base;
    let x1 = (x0 + 1).min(dims[0] - 1);
    let y1 = (y0 + 1).min(dims[1] - 1);
    let z1 = (z0 + 1).min(dims[2] - 1);

    let w = trilinear_weights(frac[0], frac[1], frac[2]);
    for (c, slot) in out.iter_mut().enumerate() {
        *slot = w[0] * grid.get(x0, y0, z0, c)
            + w[1] * grid.get(x0, y0, z1, c)
            + w[2] * grid.get(x0, y1, z0, c)
            + w[3] * grid.get(x0, y1, z1, c)
            + w[4] * grid.get(x1, y0, z0, c)
            + w[5] * grid.get(x1, y0, z1, c)
            + w[6] * grid.get(x1, y1, z0, c)
            + w[7] * grid.get(x1, y1, z1, c);
    }
    true
}

/// Allocating convenience wrapper around [`trilinear_vector_into`].
pub fn trilinear_vector(
    grid: &VectorGrid<'_>,
    point: [f64; 3],
    cfg: &InterpConfig,
) -> Option<Vec<f64>> {
    let mut out = vec![0.0; grid.channels()];
    trilinear_vector_into(grid, point, cfg, &mut out).then_some(out)
}

/// Trilinearly blended per-voxel direction, re-normalised to unit length.
///
/// The grid must carry exactly 3 channels. Invalid when the query is out of
/// domain or when the blended direction is the zero vector (opposing corner
/// directions cancelling exactly).
pub fn trilinear_direction(
    grid: &VectorGrid<'_>,
    point: [f64; 3],
    cfg: &InterpConfig,
) -> Option<[f64; 3]> {
    assert_eq!(
        grid.channels(),
        3,
        "direction grids carry 3 channels, got {}",
        grid.channels()
    );
    let mut blended = [0.0f64; 3];
    if !trilinear_vector_into(grid, point, cfg, &mut blended) {
        return None;
    }
    vec3::normalize(blended).ok()
}

/// Nearest-neighbour lookup of a scalar grid.
///
/// Rounds half-up per axis; see [`trilinear_scalar`] for the policy contract.
pub fn nearest_scalar(grid: &ScalarGrid<'_>, point: [f64; 3], cfg: &InterpConfig) -> Option<f64> {
    match resolve_nearest(grid.dims(), point, cfg) {
        Nearest::Index([ix, iy, iz]) => Some(grid.get(ix, iy, iz)),
        Nearest::Fill(fill) => Some(fill),
        Nearest::Invalid => None,
    }
}

/// Nearest-neighbour lookup of a C-channel grid into a caller-provided buffer.
pub fn nearest_vector_into(
    grid: &VectorGrid<'_>,
    point: [f64; 3],
    cfg: &InterpConfig,
    out: &mut [f64],
) -> bool {
    assert_eq!(
        out.len(),
        grid.channels(),
        "output buffer length {} does not match channel count {}",
        out.len(),
        grid.channels()
    );
    match resolve_nearest(grid.dims(), point, cfg) {
        Nearest::Index([ix, iy, iz]) => {
            for (c, slot) in out.iter_mut().enumerate() {
                *slot = grid.get(ix, iy, iz, c);
            }
            true
        }
        Nearest::Fill(fill) => {
            out.fill(fill);
            true
        }
        Nearest::Invalid => false,
    }
}

/// Allocating convenience wrapper around [`nearest_vector_into`].
pub fn nearest_vector(
    grid: &VectorGrid<'_>,
    point: [f64; 3],
    cfg: &InterpConfig,
) -> Option<Vec<f64>> {
    let mut out = vec![0.0; grid.channels()];
    nearest_vector_into(grid, point, cfg, &mut out).then_some(out)
}

// ─────────────────────────────────────────────────────────────────────
// DMRI Voxel Kernels — Property-Based Tests (proptest) for dmri-types
// Compiled numerical core for diffusion-MRI tractography pipelines.
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for the grid views and configuration.
//!
//! Covers: bounds predicates, checked voxel access, construction validation,
//! configuration serialization roundtrip.

use dmri_types::config::{BoundaryPolicy, InterpConfig};
use dmri_types::error::DmriError;
use dmri_types::volume::{ScalarGrid, VectorGrid};
use ndarray::{Array3, Array4};
use proptest::prelude::*;

// ── Grid View Invariants ─────────────────────────────────────────────

proptest! {
    /// in_bounds agrees with the constructed shape on every probe.
    #[test]
    fn in_bounds_matches_shape(
        nx in 1usize..12,
        ny in 1usize..12,
        nz in 1usize..12,
        px in -3isize..14,
        py in -3isize..14,
        pz in -3isize..14,
    ) {
        let data = Array3::from_elem((nx, ny, nz), 0.0);
        let grid = ScalarGrid::new(data.view()).expect("valid grid");

        let expected = px >= 0 && (px as usize) < nx
            && py >= 0 && (py as usize) < ny
            && pz >= 0 && (pz as usize) < nz;
        prop_assert_eq!(grid.in_bounds(px, py, pz), expected);
    }

    /// voxel() succeeds exactly where in_bounds is true, and returns the
    /// stored value.
    #[test]
    fn voxel_access_consistent(
        nx in 1usize..10,
        ny in 1usize..10,
        nz in 1usize..10,
        px in -2isize..12,
        py in -2isize..12,
        pz in -2isize..12,
    ) {
        let data = Array3::from_shape_fn((nx, ny, nz), |(i, j, k)| {
            (i * 100 + j * 10 + k) as f64
        });
        let grid = ScalarGrid::new(data.view()).expect("valid grid");

        match grid.voxel(px, py, pz) {
            Ok(v) => {
                prop_assert!(grid.in_bounds(px, py, pz));
                prop_assert_eq!(v, data[[px as usize, py as usize, pz as usize]]);
            }
            Err(DmriError::OutOfRange { ix, iy, iz, shape }) => {
                prop_assert!(!grid.in_bounds(px, py, pz));
                prop_assert_eq!((ix, iy, iz), (px, py, pz));
                prop_assert_eq!(shape, [nx, ny, nz]);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    /// A vector grid's per-voxel view always has the channel length.
    #[test]
    fn vector_voxel_channel_length(
        nx in 1usize..6,
        ny in 1usize..6,
        nz in 1usize..6,
        nc in 1usize..8,
    ) {
        let data = Array4::from_elem((nx, ny, nz, nc), 1.5);
        let grid = VectorGrid::new(data.view()).expect("valid grid");
        prop_assert_eq!(grid.channels(), nc);

        let v = grid.voxel(0, 0, 0).expect("origin is in bounds");
        prop_assert_eq!(v.len(), nc);
    }
}

// ── Configuration Roundtrip ──────────────────────────────────────────

proptest! {
    /// Valid configurations survive a JSON serialize/deserialize roundtrip.
    #[test]
    fn config_json_roundtrip(
        clamped in any::<bool>(),
        fill in proptest::option::of(-1e6f64..1e6),
    ) {
        let cfg = if clamped {
            InterpConfig {
                boundary_policy: BoundaryPolicy::Clamped,
                fill_value: fill,
            }
        } else {
            InterpConfig::strict()
        };

        let json = serde_json::to_string(&cfg).expect("serialize");
        let back = InterpConfig::from_json_str(&json).expect("parse valid config");
        prop_assert_eq!(back, cfg);
    }
}

#[test]
fn empty_axis_is_rejected() {
    let data = Array3::<f64>::zeros((3, 0, 3));
    assert!(matches!(
        ScalarGrid::new(data.view()),
        Err(DmriError::InvalidShape(_))
    ));
    let data = Array4::<f64>::zeros((3, 3, 3, 0));
    assert!(matches!(
        VectorGrid::new(data.view()),
        Err(DmriError::InvalidShape(_))
    ));
}

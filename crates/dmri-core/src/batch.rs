//! Data-parallel batch queries.
//!
//! Tracking runs issue millions of independent point queries; these wrappers
//! fan a batch of coordinates across the rayon pool against one shared
//! read-only grid. No locking is involved: the grid is immutable for the
//! duration of the query phase.

use rayon::prelude::*;

use dmri_types::config::InterpConfig;
use dmri_types::volume::{ScalarGrid, VectorGrid};

use crate::interp::{nearest_scalar, trilinear_scalar, trilinear_vector};

/// Trilinear interpolation of a scalar grid at every point in the batch.
pub fn trilinear_scalar_batch(
    grid: &ScalarGrid<'_>,
    points: &[[f64; 3]],
    cfg: &InterpConfig,
) -> Vec<Option<f64>> {
    points
        .par_iter()
        .map(|&p| trilinear_scalar(grid, p, cfg))
        .collect()
}

/// Trilinear interpolation of a C-channel grid at every point in the batch.
pub fn trilinear_vector_batch(
    grid: &VectorGrid<'_>,
    points: &[[f64; 3]],
    cfg: &InterpConfig,
) -> Vec<Option<Vec<f64>>> {
    points
        .par_iter()
        .map(|&p| trilinear_vector(grid, p, cfg))
        .collect()
}

/// Nearest-neighbour lookup of a scalar grid at every point in the batch.
pub fn nearest_scalar_batch(
    grid: &ScalarGrid<'_>,
    points: &[[f64; 3]],
    cfg: &InterpConfig,
) -> Vec<Option<f64>> {
    points
        .par_iter()
        .map(|&p| nearest_scalar(grid, p, cfg))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn test_batch_matches_point_queries() {
        let data = Array3::from_shape_fn((8, 8, 8), |(i, j, k)| (i + 2 * j + 4 * k) as f64);
        let grid = ScalarGrid::new(data.view()).expect("valid grid");
        let cfg = InterpConfig::strict();

        let points: Vec<[f64; 3]> = (0..200)
            .map(|i| {
                let t = i as f64 * 0.05;
                [t.sin().abs() * 7.0, t.cos().abs() * 7.0, (t * 0.5).fract() * 9.0]
            })
            .collect();

        let batch = trilinear_scalar_batch(&grid, &points, &cfg);
        assert_eq!(batch.len(), points.len());
        for (p, got) in points.iter().zip(&batch) {
            assert_eq!(*got, trilinear_scalar(&grid, *p, &cfg));
        }
    }
}

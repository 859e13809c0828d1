//! Fixed-length and channel-vector arithmetic.
//!
//! The `[f64; 3]` operations carry no length checks; the slice variants serve
//! runtime-length channel data and check operand shapes eagerly.

use dmri_types::error::{DmriError, DmriResult};

/// 3D vector dot product.
#[inline]
pub fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// 3D cross product a × b.
#[inline]
pub fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Euclidean (L2) norm. A zero vector yields exactly 0 with no division.
#[inline]
pub fn norm(a: [f64; 3]) -> f64 {
    dot(a, a).sqrt()
}

/// Scale to unit length.
///
/// Fails with `DivideByZero` when the squared norm is exactly zero; NaN is
/// never propagated silently.
#[inline]
pub fn normalize(a: [f64; 3]) -> DmriResult<[f64; 3]> {
    let n2 = dot(a, a);
    if n2 == 0.0 {
        return Err(DmriError::DivideByZero);
    }
    let inv = 1.0 / n2.sqrt();
    Ok([a[0] * inv, a[1] * inv, a[2] * inv])
}

/// Dot product over runtime-length vectors (channel data).
///
/// Fails with `ShapeMismatch` when the operands differ in length.
pub fn dot_slice(a: &[f64], b: &[f64]) -> DmriResult<f64> {
    if a.len() != b.len() {
        return Err(DmriError::ShapeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

/// Euclidean norm over a runtime-length vector.
pub fn norm_slice(a: &[f64]) -> f64 {
    a.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Scale a runtime-length vector to unit length in place.
///
/// Fails with `DivideByZero` when the squared norm is exactly zero, leaving
/// the input untouched.
pub fn normalize_slice(a: &mut [f64]) -> DmriResult<()> {
    let n2: f64 = a.iter().map(|x| x * x).sum();
    if n2 == 0.0 {
        return Err(DmriError::DivideByZero);
    }
    let inv = 1.0 / n2.sqrt();
    for x in a.iter_mut() {
        *x *= inv;
    }
    Ok(())
}

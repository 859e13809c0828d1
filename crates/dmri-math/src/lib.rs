//! Vector-arithmetic primitives on the tracking hot path.

pub mod sample;
pub mod vec3;

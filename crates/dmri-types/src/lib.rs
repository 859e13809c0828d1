// ─────────────────────────────────────────────────────────────────────
// DMRI Voxel Kernels — Shared Types
// Compiled numerical core for diffusion-MRI tractography pipelines.
// License: MIT
// ─────────────────────────────────────────────────────────────────────
pub mod config;
pub mod error;
pub mod volume;

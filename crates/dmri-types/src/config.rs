// ─────────────────────────────────────────────────────────────────────
// DMRI Voxel Kernels — Interpolation Config
// Compiled numerical core for diffusion-MRI tractography pipelines.
// License: MIT
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{DmriError, DmriResult};

/// Behaviour when a query's corner neighbourhood extends outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Out-of-domain queries produce an invalid result.
    #[default]
    Strict,
    /// Coordinates are clamped per axis into the interpolable domain before
    /// the cell is resolved; finite coordinates never produce an invalid
    /// result.
    Clamped,
}

/// Interpolator configuration.
///
/// `fill_value` is consulted only under the non-strict policy: when set,
/// out-of-domain (or non-finite) queries return the fill instead of clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterpConfig {
    #[serde(default)]
    pub boundary_policy: BoundaryPolicy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_value: Option<f64>,
}

impl Default for InterpConfig {
    fn default() -> Self {
        Self {
            boundary_policy: BoundaryPolicy::Strict,
            fill_value: None,
        }
    }
}

impl InterpConfig {
    /// Strict boundary handling, no fill. This is the default.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Clamped boundary handling, no fill.
    pub fn clamped() -> Self {
        Self {
            boundary_policy: BoundaryPolicy::Clamped,
            fill_value: None,
        }
    }

    /// Clamped boundary handling that substitutes `fill` for out-of-domain
    /// queries instead of clamping.
    pub fn with_fill(fill: f64) -> Self {
        Self {
            boundary_policy: BoundaryPolicy::Clamped,
            fill_value: Some(fill),
        }
    }

    /// Check semantic constraints that the serde layer cannot express.
    pub fn validate(&self) -> DmriResult<()> {
        if let Some(fill) = self.fill_value {
            if !fill.is_finite() {
                return Err(DmriError::ConfigError(format!(
                    "fill_value must be finite, got {fill}"
                )));
            }
            if self.boundary_policy == BoundaryPolicy::Strict {
                return Err(DmriError::ConfigError(
                    "fill_value has no effect under the strict boundary policy".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> DmriResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse, and validate a configuration from a JSON file.
    pub fn from_json_file(path: &std::path::Path) -> DmriResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

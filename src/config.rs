//! Analysis Configuration
//!
//! Tunables shared by the extractor, the incidence builder and the
//! spectral solver. The defaults reproduce the plain combinatorial setting:
//! edges and triangles, triangles in discovery order, and a fixed zero
//! threshold for eigenvalue classification.

use serde::{Deserialize, Serialize};

use crate::error::{HodgeError, Result};

/// How triangles are indexed once discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriangleOrdering {
    /// Keep the order the triangle source produced them in
    #[default]
    Discovery,
    /// Sort normalized triples lexicographically
    Sorted,
}

/// Configuration for complex extraction and spectral analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HodgeConfig {
    /// Highest boundary level built (`k_max`), 1 or 2
    pub max_dimension: usize,
    /// Triangle index assignment
    pub triangle_ordering: TriangleOrdering,
    /// Floor for treating an eigenvalue or an energy as zero
    pub zero_tolerance: f64,
}

impl Default for HodgeConfig {
    fn default() -> Self {
        Self {
            max_dimension: 2,
            triangle_ordering: TriangleOrdering::Discovery,
            zero_tolerance: 1e-9,
        }
    }
}

impl HodgeConfig {
    /// Parse a JSON document; missing fields fall back to defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| HodgeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=2).contains(&self.max_dimension) {
            return Err(HodgeError::InvalidDimension {
                what: "boundary",
                found: self.max_dimension,
            });
        }
        if !self.zero_tolerance.is_finite() || self.zero_tolerance <= 0.0 {
            return Err(HodgeError::Config(format!(
                "zero_tolerance must be positive and finite, got {}",
                self.zero_tolerance
            )));
        }
        Ok(())
    }

    /// Zero threshold for an `m×m` operator with spectral radius `radius`
    ///
    /// Round-off in a dense symmetric eigensolver grows with the matrix
    /// size and norm, so the configured floor is raised to
    /// `ε_machine · m · radius` when that is larger.
    pub fn tolerance_for(&self, m: usize, radius: f64) -> f64 {
        let scaled = f64::EPSILON * (m.max(1) as f64) * radius.abs();
        self.zero_tolerance.max(scaled)
    }
}

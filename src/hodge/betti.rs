//! Betti Numbers: Topological Invariants
//!
//! The k-th Betti number βₖ counts the number of k-dimensional
//! "holes" of the complex:
//!
//! - β₀: Number of connected components
//! - β₁: Number of independent unfilled loops
//! - β₂: Number of enclosed voids
//!
//! For a 2-complex they follow from the ranks of the boundary operators,
//!
//!   β₀ = N − rank B1,  β₁ = M − rank B1 − rank B2,  β₂ = T − rank B2
//!
//! and β₁ equals the dimension of the harmonic space ker L1.

use super::spectrum::HodgeSpectrum;
use crate::error::{HodgeError, Result};
use crate::incidence::IncidenceMatrices;

/// Betti numbers of a 2-complex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BettiNumbers {
    pub beta_0: usize,  // Connected components
    pub beta_1: usize,  // Loops
    pub beta_2: usize,  // Voids
}

impl BettiNumbers {
    pub fn new(beta_0: usize, beta_1: usize, beta_2: usize) -> Self {
        Self { beta_0, beta_1, beta_2 }
    }

    /// Compute from the boundary operators and their spectrum
    ///
    /// rank B1 and rank B2 are the gradient and curl mode counts of
    /// `spectrum`; β₁ is then the number of harmonic modes.
    pub fn compute(incidence: &IncidenceMatrices, spectrum: &HodgeSpectrum) -> Result<Self> {
        if incidence.n_edges() != spectrum.n_edges() {
            return Err(HodgeError::ShapeMismatch {
                what: "edge dimension of spectrum and incidence",
                expected: spectrum.n_edges(),
                found: incidence.n_edges(),
            });
        }
        let rank_b1 = spectrum.rank_down();
        let rank_b2 = spectrum.rank_up();

        let beta_0 = incidence.n_vertices().saturating_sub(rank_b1);
        let beta_1 = incidence.n_edges().saturating_sub(rank_b1 + rank_b2);
        let beta_2 = incidence.n_triangles().saturating_sub(rank_b2);

        Ok(Self::new(beta_0, beta_1, beta_2))
    }

    /// Total topological complexity
    pub fn total(&self) -> usize {
        self.beta_0 + self.beta_1 + self.beta_2
    }

    /// Euler characteristic χ = β₀ - β₁ + β₂
    pub fn euler_characteristic(&self) -> i64 {
        self.beta_0 as i64 - self.beta_1 as i64 + self.beta_2 as i64
    }
}

//! Hodge Decomposition of Edge Flows
//!
//! Every edge flow splits uniquely and orthogonally as
//!
//!   f = f_grad + f_curl + f_harm
//!
//! with f_grad ∈ im(B1ᵗ), f_curl ∈ im(B2) and f_harm ∈ ker(L1). The
//! gradient and curl parts are projections onto the gradient and curl modes
//! of a `HodgeSpectrum`, so no eigensolve happens per flow. Orthogonality
//! of the two ranges is exactly B1·B2 = 0.

use ndarray::Array1;
use tracing::debug;

use super::spectrum::{EigenmodeKind, HodgeSpectrum};
use crate::error::{HodgeError, Result};

/// The three orthogonal components of an edge flow
#[derive(Debug, Clone)]
pub struct HodgeDecomposition {
    /// Component in im(B1ᵗ): potential differences along edges
    pub gradient: Array1<f64>,
    /// Component in im(B2): circulation around triangles
    pub curl: Array1<f64>,
    /// Remainder in ker(L1): flow around unfilled holes
    pub harmonic: Array1<f64>,
}

impl HodgeDecomposition {
    /// Decompose `flow` against the modes of `spectrum`
    pub fn compute(spectrum: &HodgeSpectrum, flow: &Array1<f64>) -> Result<Self> {
        let m = spectrum.n_edges();
        if flow.len() != m {
            return Err(HodgeError::ShapeMismatch {
                what: "flow length",
                expected: m,
                found: flow.len(),
            });
        }

        let gradient = project(spectrum, EigenmodeKind::Gradient, flow);
        let curl = project(spectrum, EigenmodeKind::Curl, flow);
        let harmonic = flow - &gradient - &curl;

        let decomposition = Self { gradient, curl, harmonic };
        let [g, c, h] = decomposition.energies();
        debug!(gradient = g, curl = c, harmonic = h, "hodge decomposition energies");

        Ok(decomposition)
    }

    /// Squared norms `[gradient, curl, harmonic]`
    pub fn energies(&self) -> [f64; 3] {
        [
            self.gradient.dot(&self.gradient),
            self.curl.dot(&self.curl),
            self.harmonic.dot(&self.harmonic),
        ]
    }

    /// gradient + curl + harmonic
    pub fn reconstruct(&self) -> Array1<f64> {
        &self.gradient + &self.curl + &self.harmonic
    }
}

/// Orthogonal projection of `x` onto the span of one kind of mode
fn project(spectrum: &HodgeSpectrum, kind: EigenmodeKind, x: &Array1<f64>) -> Array1<f64> {
    let mut projection = Array1::<f64>::zeros(x.len());
    for (_, _, u) in spectrum.modes_of(kind) {
        projection.scaled_add(u.dot(x), &u);
    }
    projection
}

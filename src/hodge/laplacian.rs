//! Hodge-1 Laplacian Assembly
//!
//!   L1 = B1ᵗB1 + B2B2ᵗ
//!
//! The down part B1ᵗB1 couples edges through shared vertices, the up part
//! B2B2ᵗ through shared triangles. Both are Gram matrices, so L1 is
//! symmetric positive-semidefinite with integer entries.

use ndarray::Array2;
use tracing::debug;

use crate::error::{HodgeError, Result};
use crate::incidence::IncidenceMatrices;

/// The combinatorial Hodge Laplacian on edges, split into its two parts
#[derive(Debug, Clone)]
pub struct HodgeLaplacian {
    /// B1ᵗB1 (M×M)
    pub down: Array2<i32>,
    /// B2B2ᵗ (M×M)
    pub up: Array2<i32>,
}

impl HodgeLaplacian {
    /// Assemble from a pair of incidence matrices
    pub fn assemble(incidence: &IncidenceMatrices) -> Result<Self> {
        Self::from_operators(&incidence.b1, &incidence.b2)
    }

    /// Assemble from raw operators; they must agree on the edge dimension
    pub fn from_operators(b1: &Array2<i32>, b2: &Array2<i32>) -> Result<Self> {
        if b1.ncols() != b2.nrows() {
            return Err(HodgeError::ShapeMismatch {
                what: "edge dimension of B1 and B2",
                expected: b1.ncols(),
                found: b2.nrows(),
            });
        }

        let down = b1.t().dot(b1);
        let up = b2.dot(&b2.t());

        debug!(n_edges = down.nrows(), "assembled hodge laplacian");

        Ok(Self { down, up })
    }

    /// L1 = down + up
    pub fn matrix(&self) -> Array2<i32> {
        &self.down + &self.up
    }

    /// L1 as floating point, for the eigensolver
    pub fn to_f64(&self) -> Array2<f64> {
        self.matrix().mapv(f64::from)
    }

    pub fn n_edges(&self) -> usize {
        self.down.nrows()
    }

    /// Exact symmetry check on the integer matrix
    pub fn is_symmetric(&self) -> bool {
        let l1 = self.matrix();
        l1 == l1.t()
    }
}

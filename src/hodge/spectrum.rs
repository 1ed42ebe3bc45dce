//! Spectral Decomposition of the Hodge Laplacian
//!
//! L1 is real symmetric, so it has M real eigenvalues and an orthonormal
//! eigenbasis of the edge space. The eigenbasis splits into
//!
//! - harmonic modes: λ = 0, with B1·v = 0 and B2ᵗ·v = 0
//! - gradient modes: λ > 0 in the image of B1ᵗ (B2ᵗ·v = 0)
//! - curl modes:     λ > 0 in the image of B2 (B1·v = 0)
//!
//! A single dense solve of L1 cannot see this split: when a gradient and a
//! curl eigenvalue coincide (L1 = 3·I on a filled triangle) it returns an
//! arbitrary basis of the shared eigenspace. The two parts are solved
//! separately instead. Since B1·B2 = 0, down·up = 0 and every eigenvector
//! of down (or up) with nonzero eigenvalue is an eigenvector of L1 with the
//! same eigenvalue. The harmonic modes are the kernel of up restricted to
//! ker(down).
//!
//! The eigensolver is nalgebra's dense `SymmetricEigen`, O(M³).

use nalgebra::{DMatrix, SymmetricEigen};
use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, warn};

use super::laplacian::HodgeLaplacian;
use crate::config::HodgeConfig;
use crate::error::{HodgeError, Result};
use crate::incidence::IncidenceMatrices;

/// Eigen-decompose a real symmetric matrix, eigenvalues ascending
///
/// Returns the eigenvalues and the matching orthonormal eigenvectors as
/// columns.
pub fn symmetric_eigen(matrix: &Array2<f64>) -> (Array1<f64>, Array2<f64>) {
    let m = matrix.nrows();
    if m == 0 {
        return (Array1::zeros(0), Array2::zeros((0, 0)));
    }

    let dense = DMatrix::from_fn(m, m, |i, j| matrix[[i, j]]);
    let eigen = SymmetricEigen::new(dense);

    let mut order: Vec<usize> = (0..m).collect();
    order.sort_by(|&a, &b| {
        eigen.eigenvalues[a]
            .partial_cmp(&eigen.eigenvalues[b])
            .unwrap_or(Ordering::Equal)
    });

    let eigenvalues = Array1::from_iter(order.iter().map(|&k| eigen.eigenvalues[k]));
    let eigenvectors = Array2::from_shape_fn((m, m), |(i, j)| eigen.eigenvectors[(i, order[j])]);

    (eigenvalues, eigenvectors)
}

/// Role of an eigenvector in the Hodge decomposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EigenmodeKind {
    /// Zero eigenvalue: divergence- and curl-free
    Harmonic,
    /// Nonzero eigenvalue, curl-free
    Gradient,
    /// Nonzero eigenvalue, divergence-free
    Curl,
    /// Carries both energies. A basis from `HodgeSpectrum::compute` never
    /// has one; `classify` reports it for vectors that are not pure.
    Mixed,
}

/// Full eigendecomposition of L1, split by Hodge subspace
#[derive(Debug, Clone)]
pub struct HodgeSpectrum {
    /// Eigenvalues, ascending
    pub eigenvalues: Array1<f64>,
    /// Orthonormal eigenvectors as columns, same order
    pub eigenvectors: Array2<f64>,
    /// Subspace each eigenvector was taken from, same order
    pub kinds: Vec<EigenmodeKind>,
    /// Zero threshold the split was made with
    pub tolerance: f64,
}

impl HodgeSpectrum {
    /// Eigendecompose L1 through its down and up parts
    ///
    /// The zero threshold is `config.tolerance_for(M, ρ)`, with ρ the larger
    /// spectral radius of the two parts (their ranges are orthogonal, so
    /// this is ρ(L1)).
    pub fn compute(laplacian: &HodgeLaplacian, config: &HodgeConfig) -> Self {
        let m = laplacian.n_edges();
        let up = laplacian.up.mapv(f64::from);
        let (down_values, down_vectors) = symmetric_eigen(&laplacian.down.mapv(f64::from));
        let (up_values, up_vectors) = symmetric_eigen(&up);

        let radius = down_values
            .iter()
            .chain(up_values.iter())
            .fold(0.0, |acc: f64, &x| acc.max(x.abs()));
        let tolerance = config.tolerance_for(m, radius);

        let mut modes: Vec<(f64, EigenmodeKind, Array1<f64>)> = Vec::with_capacity(m);
        let mut kernel: Vec<ArrayView1<'_, f64>> = Vec::new();
        for (k, &lambda) in down_values.iter().enumerate() {
            if lambda > tolerance {
                modes.push((lambda, EigenmodeKind::Gradient, down_vectors.column(k).to_owned()));
            } else {
                kernel.push(down_vectors.column(k));
            }
        }
        let mut n_curl = 0;
        for (k, &lambda) in up_values.iter().enumerate() {
            if lambda > tolerance {
                modes.push((lambda, EigenmodeKind::Curl, up_vectors.column(k).to_owned()));
                n_curl += 1;
            }
        }

        // im(up) ⊆ ker(down), so up restricted to ker(down) keeps rank n_curl
        // and its kernel is the harmonic space
        let basis = Array2::from_shape_fn((m, kernel.len()), |(i, j)| kernel[j][i]);
        let restricted = basis.t().dot(&up).dot(&basis);
        let (values, vectors) = symmetric_eigen(&restricted);
        let n_harmonic = kernel.len().saturating_sub(n_curl);
        for k in 0..n_harmonic {
            modes.push((values[k], EigenmodeKind::Harmonic, basis.dot(&vectors.column(k))));
        }

        // Stable: harmonic modes stay ahead of equal-valued neighbours
        modes.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        let eigenvalues = Array1::from_iter(modes.iter().map(|mode| mode.0));
        let eigenvectors = Array2::from_shape_fn((m, modes.len()), |(i, j)| modes[j].2[i]);
        let kinds: Vec<EigenmodeKind> = modes.iter().map(|mode| mode.1).collect();

        if modes.len() != m {
            warn!(n_modes = modes.len(), n_edges = m, tolerance, "incomplete hodge eigenbasis");
        }
        debug!(
            n_modes = modes.len(),
            n_gradient = modes.len() - n_curl - n_harmonic,
            n_curl,
            n_harmonic,
            tolerance,
            "hodge spectrum"
        );

        Self { eigenvalues, eigenvectors, kinds, tolerance }
    }

    pub fn n_modes(&self) -> usize {
        self.eigenvalues.len()
    }

    /// Length of the edge vectors the modes live in
    pub fn n_edges(&self) -> usize {
        self.eigenvectors.nrows()
    }

    /// The k-th eigenvector (k-th smallest eigenvalue)
    pub fn mode(&self, k: usize) -> ArrayView1<'_, f64> {
        self.eigenvectors.column(k)
    }

    /// Modes of one kind, as (index, eigenvalue, eigenvector)
    pub fn modes_of(&self, kind: EigenmodeKind) -> impl Iterator<Item = (usize, f64, ArrayView1<'_, f64>)> + '_ {
        self.kinds
            .iter()
            .enumerate()
            .filter(move |&(_, &k)| k == kind)
            .map(move |(j, _)| (j, self.eigenvalues[j], self.eigenvectors.column(j)))
    }

    pub fn count(&self, kind: EigenmodeKind) -> usize {
        self.kinds.iter().filter(|&&k| k == kind).count()
    }

    /// rank B1, the number of gradient modes
    pub fn rank_down(&self) -> usize {
        self.count(EigenmodeKind::Gradient)
    }

    /// rank B2, the number of curl modes
    pub fn rank_up(&self) -> usize {
        self.count(EigenmodeKind::Curl)
    }

    /// Largest |λ|; zero for an empty spectrum
    pub fn spectral_radius(&self) -> f64 {
        self.eigenvalues.iter().fold(0.0, |acc: f64, &x| acc.max(x.abs()))
    }

    /// All eigenvalues ≥ −tolerance
    pub fn is_positive_semidefinite(&self, tolerance: f64) -> bool {
        self.eigenvalues.iter().all(|&x| x >= -tolerance)
    }

    /// Number of eigenvalues within `tolerance` of zero (β₁)
    pub fn harmonic_dimension(&self, tolerance: f64) -> usize {
        self.eigenvalues.iter().filter(|&&x| x.abs() <= tolerance).count()
    }

    /// Label every eigenvector as harmonic, gradient, curl or mixed
    ///
    /// With gradient energy ‖B1·v‖² and curl energy ‖B2ᵗ·v‖² (which sum to
    /// λ for a unit eigenvector):
    ///
    /// - λ ≤ tol → harmonic
    /// - curl energy ≤ tol → gradient
    /// - gradient energy ≤ tol → curl
    /// - otherwise mixed
    pub fn classify(&self, incidence: &IncidenceMatrices, tolerance: f64) -> Result<Vec<EigenmodeKind>> {
        if incidence.n_edges() != self.n_edges() {
            return Err(HodgeError::ShapeMismatch {
                what: "edge dimension of spectrum and incidence",
                expected: self.n_edges(),
                found: incidence.n_edges(),
            });
        }

        let b1 = incidence.b1.mapv(f64::from);
        let b2t = incidence.b2.t().mapv(f64::from);

        let negative = self.eigenvalues.iter().filter(|&&x| x < -tolerance).count();
        if negative > 0 {
            warn!(negative, tolerance, "eigenvalues below -tolerance; treating as zero");
        }

        let kinds = self
            .eigenvalues
            .iter()
            .zip(self.eigenvectors.columns())
            .map(|(&lambda, v)| {
                if lambda <= tolerance {
                    return EigenmodeKind::Harmonic;
                }
                let gradient_energy = b1.dot(&v).mapv(|x| x * x).sum();
                let curl_energy = b2t.dot(&v).mapv(|x| x * x).sum();
                if curl_energy <= tolerance {
                    EigenmodeKind::Gradient
                } else if gradient_energy <= tolerance {
                    EigenmodeKind::Curl
                } else {
                    EigenmodeKind::Mixed
                }
            })
            .collect();

        Ok(kinds)
    }

    /// Coordinates of a flow in the eigenbasis, Vᵗ·f
    pub fn spectral_coefficients(&self, flow: &Array1<f64>) -> Result<Array1<f64>> {
        if flow.len() != self.n_edges() {
            return Err(HodgeError::ShapeMismatch {
                what: "flow length",
                expected: self.n_edges(),
                found: flow.len(),
            });
        }
        Ok(self.eigenvectors.t().dot(flow))
    }
}

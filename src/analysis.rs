//! End-to-End Analysis of a Planar Complex
//!
//! ```text
//! Graph + TriangleSource ──► SimplicialComplex ──┬──► IncidenceMatrices ──► HodgeLaplacian ──► HodgeSpectrum
//!                                                └──► edge flows (encode_flow / encode_walk)
//! ```
//!
//! `HodgeAnalysis` runs the pipeline once and keeps every stage as an
//! immutable snapshot. Flows, classifications, decompositions and Betti
//! numbers are then computed against the same edge index and the same
//! eigenbasis; none of them solves an eigenproblem again.

use ndarray::{Array1, Array2};
use tracing::info;

use crate::complex::{partition_graph, Graph, SimplicialComplex, TriangleSource, Triangulator};
use crate::config::HodgeConfig;
use crate::error::Result;
use crate::flow;
use crate::hodge::{BettiNumbers, EigenmodeKind, HodgeDecomposition, HodgeLaplacian, HodgeSpectrum};
use crate::incidence::IncidenceMatrices;

/// Per-kind eigenmode counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeCounts {
    pub harmonic: usize,
    pub gradient: usize,
    pub curl: usize,
    pub mixed: usize,
}

impl ModeCounts {
    pub fn tally(kinds: &[EigenmodeKind]) -> Self {
        let mut counts = Self::default();
        for kind in kinds {
            match kind {
                EigenmodeKind::Harmonic => counts.harmonic += 1,
                EigenmodeKind::Gradient => counts.gradient += 1,
                EigenmodeKind::Curl => counts.curl += 1,
                EigenmodeKind::Mixed => counts.mixed += 1,
            }
        }
        counts
    }
}

/// A complex together with its boundary operators and L1 spectrum
#[derive(Debug, Clone)]
pub struct HodgeAnalysis {
    pub config: HodgeConfig,
    pub complex: SimplicialComplex,
    pub incidence: IncidenceMatrices,
    pub laplacian: HodgeLaplacian,
    pub spectrum: HodgeSpectrum,
}

impl HodgeAnalysis {
    /// Extract the complex from a graph and analyse it
    pub fn from_graph<S: TriangleSource + ?Sized>(
        graph: &Graph,
        source: &S,
        config: &HodgeConfig,
    ) -> Result<Self> {
        config.validate()?;
        let complex = SimplicialComplex::extract(graph, source, config.triangle_ordering)?;
        Self::from_complex(complex, config)
    }

    /// Triangulate a 2D point set and analyse the resulting complex
    pub fn from_points<T: Triangulator>(
        points: &Array2<f64>,
        triangulator: &T,
        config: &HodgeConfig,
    ) -> Result<Self> {
        let (graph, faces) = partition_graph(points, triangulator)?;
        Self::from_graph(&graph, &faces, config)
    }

    pub fn from_complex(complex: SimplicialComplex, config: &HodgeConfig) -> Result<Self> {
        config.validate()?;
        let incidence = IncidenceMatrices::build(&complex, config.max_dimension)?;
        let laplacian = HodgeLaplacian::assemble(&incidence)?;
        let spectrum = HodgeSpectrum::compute(&laplacian, config);

        info!(
            n_vertices = complex.n_vertices(),
            n_edges = complex.n_edges(),
            n_triangles = incidence.n_triangles(),
            spectral_radius = spectrum.spectral_radius(),
            "hodge analysis complete"
        );

        Ok(Self {
            config: config.clone(),
            complex,
            incidence,
            laplacian,
            spectrum,
        })
    }

    /// Zero threshold for this Laplacian's size and spectral radius
    pub fn tolerance(&self) -> f64 {
        self.spectrum.tolerance
    }

    pub fn encode_flow(&self, traversals: &[(usize, usize)]) -> Result<Array1<i32>> {
        flow::encode_flow(&self.complex, traversals)
    }

    pub fn encode_walk(&self, walk: &[usize]) -> Result<Array1<i32>> {
        flow::encode_walk(&self.complex, walk)
    }

    pub fn classify(&self) -> Result<Vec<EigenmodeKind>> {
        self.spectrum.classify(&self.incidence, self.tolerance())
    }

    pub fn mode_counts(&self) -> Result<ModeCounts> {
        Ok(ModeCounts::tally(&self.classify()?))
    }

    pub fn decompose(&self, flow: &Array1<i32>) -> Result<HodgeDecomposition> {
        HodgeDecomposition::compute(&self.spectrum, &flow.mapv(f64::from))
    }

    /// Coordinates of an integer flow in the L1 eigenbasis
    pub fn spectral_coefficients(&self, flow: &Array1<i32>) -> Result<Array1<f64>> {
        self.spectrum.spectral_coefficients(&flow.mapv(f64::from))
    }

    pub fn betti_numbers(&self) -> Result<BettiNumbers> {
        BettiNumbers::compute(&self.incidence, &self.spectrum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::{CliqueSearch, RipsTriangulator};
    use crate::config::TriangleOrdering;
    use crate::error::HodgeError;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn annulus_graph() -> Graph {
        // Outer square 0-1-2-3, inner triangle 4-5-6, fully triangulated
        // between them except for the hole in the middle
        let edges = [
            (0, 1), (1, 2), (2, 3), (3, 0),
            (4, 5), (5, 6), (6, 4),
            (0, 4), (1, 4), (1, 5), (2, 5), (2, 6), (3, 6), (0, 6),
        ];
        Graph::from_edges(7, &edges).unwrap()
    }

    #[test]
    fn test_annulus_has_one_harmonic_mode() {
        let analysis =
            HodgeAnalysis::from_graph(&annulus_graph(), &CliqueSearch, &HodgeConfig::default()).unwrap();

        // Clique search also finds the inner triangle (4,5,6), which fills
        // the hole. Use a face list without it instead.
        assert_eq!(analysis.betti_numbers().unwrap(), BettiNumbers::new(1, 0, 0));

        let faces: Vec<[usize; 3]> = analysis
            .complex
            .triangles()
            .iter()
            .map(|t| t.vertices())
            .filter(|&t| t != [4, 5, 6])
            .collect();
        let holed = SimplicialComplex::from_parts(
            7,
            &annulus_graph().edges().iter().map(|e| e.as_pair()).collect::<Vec<_>>(),
            &faces,
            TriangleOrdering::Discovery,
        )
        .unwrap();
        let analysis = HodgeAnalysis::from_complex(holed, &HodgeConfig::default()).unwrap();

        assert_eq!(analysis.betti_numbers().unwrap(), BettiNumbers::new(1, 1, 0));
        assert_eq!(analysis.spectrum.harmonic_dimension(analysis.tolerance()), 1);

        let counts = analysis.mode_counts().unwrap();
        assert_eq!(counts.harmonic, 1);
        assert_eq!(counts.harmonic + counts.gradient + counts.curl + counts.mixed, 14);

        // Walking once around the hole carries harmonic energy
        let flow = analysis.encode_walk(&[4, 5, 6, 4]).unwrap();
        let dec = analysis.decompose(&flow).unwrap();
        assert!(dec.energies()[2] > 1e-3);
    }

    fn counts(graph: &Graph) -> ModeCounts {
        HodgeAnalysis::from_graph(graph, &CliqueSearch, &HodgeConfig::default())
            .unwrap()
            .mode_counts()
            .unwrap()
    }

    #[test]
    fn test_mode_counts_on_filled_faces() {
        let triangle = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        assert_eq!(
            counts(&triangle),
            ModeCounts { harmonic: 0, gradient: 2, curl: 1, mixed: 0 }
        );

        let split_square = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]).unwrap();
        assert_eq!(
            counts(&split_square),
            ModeCounts { harmonic: 0, gradient: 3, curl: 2, mixed: 0 }
        );
    }

    #[test]
    fn test_classification_agrees_with_spectrum() {
        let analysis =
            HodgeAnalysis::from_graph(&annulus_graph(), &CliqueSearch, &HodgeConfig::default()).unwrap();
        assert_eq!(analysis.classify().unwrap(), analysis.spectrum.kinds);

        let betti = analysis.betti_numbers().unwrap();
        let counts = analysis.mode_counts().unwrap();
        assert_eq!(counts.gradient, analysis.complex.n_vertices() - betti.beta_0);
        assert_eq!(counts.curl, analysis.complex.n_triangles() - betti.beta_2);
        assert_eq!(counts.mixed, 0);
    }

    #[test]
    fn test_from_points_with_rips() {
        let points = array![
            [0.0, 0.0],
            [1.0, 0.0],
            [0.5, 0.8]
        ];
        let analysis = HodgeAnalysis::from_points(
            &points,
            &RipsTriangulator { epsilon: 1.1 },
            &HodgeConfig::default(),
        )
        .unwrap();

        assert_eq!(analysis.complex.n_edges(), 3);
        assert_eq!(analysis.complex.n_triangles(), 1);
        assert!(analysis.incidence.is_chain_complex());
        for &lambda in analysis.spectrum.eigenvalues.iter() {
            assert_abs_diff_eq!(lambda, 3.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_edges_only_configuration() {
        let config = HodgeConfig { max_dimension: 1, ..Default::default() };
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        let analysis = HodgeAnalysis::from_graph(&graph, &CliqueSearch, &config).unwrap();

        // Triangle is discovered but not modeled: the loop stays harmonic
        assert_eq!(analysis.complex.n_triangles(), 1);
        assert_eq!(analysis.incidence.n_triangles(), 0);
        assert_eq!(analysis.betti_numbers().unwrap().beta_1, 1);
    }

    #[test]
    fn test_invalid_configuration() {
        let config = HodgeConfig { max_dimension: 0, ..Default::default() };
        let graph = Graph::from_edges(2, &[(0, 1)]).unwrap();
        assert_eq!(
            HodgeAnalysis::from_graph(&graph, &CliqueSearch, &config).unwrap_err(),
            HodgeError::InvalidDimension { what: "boundary", found: 0 }
        );
    }

    #[test]
    fn test_spectral_coefficients_of_encoded_flow() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let analysis =
            HodgeAnalysis::from_graph(&graph, &CliqueSearch, &HodgeConfig::default()).unwrap();
        let flow = analysis.encode_flow(&[(0, 1), (1, 2)]).unwrap();
        let coeffs = analysis.spectral_coefficients(&flow).unwrap();

        let energy: f64 = coeffs.iter().map(|c| c * c).sum();
        assert_abs_diff_eq!(energy, 2.0, epsilon = 1e-10);
    }
}

//! Incidence Module: Boundary Operators of a 2-Complex
//!
//! For an oriented complex with N vertices, M edges and T triangles:
//!
//! - B1 (N×M): ∂[a, b] = [b] − [a], so column j of edge (a, b) holds −1 at
//!   row a (tail) and +1 at row b (head)
//! - B2 (M×T): ∂[v1, v2, v3] = [v1, v2] + [v2, v3] − [v1, v3]
//!
//! ## Boundary of a Boundary
//!
//! Every triangle's boundary is a closed edge cycle, hence
//!
//!   B1 · B2 = 0
//!
//! This identity is what makes the Hodge decomposition of edge flows
//! orthogonal, and it is the primary correctness check of this module.

use ndarray::{Array1, Array2};
use tracing::debug;

use crate::complex::SimplicialComplex;
use crate::error::{HodgeError, Result};

/// Vertex-to-edge boundary operator B1 (N×M)
pub fn vertex_edge_incidence(complex: &SimplicialComplex) -> Array2<i32> {
    let mut b1 = Array2::<i32>::zeros((complex.n_vertices(), complex.n_edges()));

    for (j, edge) in complex.edges().iter().enumerate() {
        b1[[edge.tail, j]] = -1;
        b1[[edge.head, j]] = 1;
    }

    b1
}

/// Edge-to-triangle boundary operator B2 (M×T)
///
/// A complex without triangles gives the empty M×0 matrix.
pub fn edge_triangle_incidence(complex: &SimplicialComplex) -> Array2<i32> {
    let mut b2 = Array2::<i32>::zeros((complex.n_edges(), complex.n_triangles()));

    for (t, triangle) in complex.triangles().iter().enumerate() {
        for (edge, sign) in triangle.boundary() {
            // The extractor only keeps triangles whose sides are all edges
            if let Some(j) = complex.edge_index(&edge) {
                b2[[j, t]] = sign;
            }
        }
    }

    b2
}

/// The pair of boundary operators of a complex
#[derive(Debug, Clone)]
pub struct IncidenceMatrices {
    /// B1, vertices × edges
    pub b1: Array2<i32>,
    /// B2, edges × triangles (M×0 when triangles are not modeled)
    pub b2: Array2<i32>,
    /// Highest boundary level built
    pub max_dimension: usize,
}

impl IncidenceMatrices {
    /// Build B1 and, for `k_max = 2`, B2
    ///
    /// `k_max = 1` stops at edges: B2 is then the empty M×0 operator.
    pub fn build(complex: &SimplicialComplex, k_max: usize) -> Result<Self> {
        if !(1..=2).contains(&k_max) {
            return Err(HodgeError::InvalidDimension {
                what: "boundary",
                found: k_max,
            });
        }

        let b1 = vertex_edge_incidence(complex);
        let b2 = if k_max == 2 {
            edge_triangle_incidence(complex)
        } else {
            Array2::<i32>::zeros((complex.n_edges(), 0))
        };

        debug!(b1 = ?b1.dim(), b2 = ?b2.dim(), k_max, "incidence matrices");

        Ok(Self { b1, b2, max_dimension: k_max })
    }

    /// Assemble from externally supplied operators, checking shapes
    pub fn from_matrices(b1: Array2<i32>, b2: Array2<i32>) -> Result<Self> {
        if b1.ncols() != b2.nrows() {
            return Err(HodgeError::ShapeMismatch {
                what: "edge dimension of B1 and B2",
                expected: b1.ncols(),
                found: b2.nrows(),
            });
        }
        let max_dimension = if b2.ncols() > 0 { 2 } else { 1 };
        Ok(Self { b1, b2, max_dimension })
    }

    pub fn n_vertices(&self) -> usize {
        self.b1.nrows()
    }

    pub fn n_edges(&self) -> usize {
        self.b1.ncols()
    }

    pub fn n_triangles(&self) -> usize {
        self.b2.ncols()
    }

    /// B1 · B2 (N×T); zero for every valid complex
    pub fn boundary_of_boundary(&self) -> Array2<i32> {
        self.b1.dot(&self.b2)
    }

    /// Does ∂∂ = 0 hold exactly?
    pub fn is_chain_complex(&self) -> bool {
        self.boundary_of_boundary().iter().all(|&x| x == 0)
    }

    /// Divergence of an edge flow at each vertex, B1 · f
    pub fn divergence(&self, flow: &Array1<i32>) -> Result<Array1<i32>> {
        self.check_flow(flow.len())?;
        Ok(self.b1.dot(flow))
    }

    /// Circulation of an edge flow around each triangle, B2ᵗ · f
    pub fn circulation(&self, flow: &Array1<i32>) -> Result<Array1<i32>> {
        self.check_flow(flow.len())?;
        Ok(self.b2.t().dot(flow))
    }

    fn check_flow(&self, len: usize) -> Result<()> {
        if len != self.n_edges() {
            return Err(HodgeError::ShapeMismatch {
                what: "flow length",
                expected: self.n_edges(),
                found: len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TriangleOrdering;
    use ndarray::array;

    fn triangle_complex() -> SimplicialComplex {
        SimplicialComplex::from_parts(
            3,
            &[(0, 1), (1, 2), (0, 2)],
            &[[0, 1, 2]],
            TriangleOrdering::Discovery,
        )
        .unwrap()
    }

    #[test]
    fn test_triangle_operators() {
        let inc = IncidenceMatrices::build(&triangle_complex(), 2).unwrap();

        // Columns: (0,1), (0,2), (1,2)
        let expected_b1 = array![
            [-1, -1,  0],
            [ 1,  0, -1],
            [ 0,  1,  1]
        ];
        assert_eq!(inc.b1, expected_b1);
        assert_eq!(inc.b2, array![[1], [-1], [1]]);
        assert_eq!(inc.boundary_of_boundary(), Array2::<i32>::zeros((3, 1)));
        assert!(inc.is_chain_complex());
    }

    #[test]
    fn test_two_triangles_share_an_edge() {
        // Square 0-1-2-3 split by the diagonal (0, 2)
        let complex = SimplicialComplex::from_parts(
            4,
            &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)],
            &[[0, 1, 2], [0, 2, 3]],
            TriangleOrdering::Discovery,
        )
        .unwrap();
        let inc = IncidenceMatrices::build(&complex, 2).unwrap();

        assert_eq!(inc.b2.dim(), (5, 2));
        // The diagonal (0,2) is index 1: the "long side" of [0,1,2] and the
        // first side of [0,2,3], so it enters with opposite signs
        assert_eq!(inc.b2[[1, 0]], -1);
        assert_eq!(inc.b2[[1, 1]], 1);
        assert!(inc.is_chain_complex());
    }

    #[test]
    fn test_no_triangles_gives_empty_b2() {
        let complex = SimplicialComplex::from_parts(
            4,
            &[(0, 1), (1, 2), (2, 3), (3, 0)],
            &[],
            TriangleOrdering::Discovery,
        )
        .unwrap();
        let inc = IncidenceMatrices::build(&complex, 2).unwrap();
        assert_eq!(inc.b2.dim(), (4, 0));
        assert_eq!(inc.boundary_of_boundary().dim(), (4, 0));
    }

    #[test]
    fn test_edges_only() {
        let inc = IncidenceMatrices::build(&triangle_complex(), 1).unwrap();
        assert_eq!(inc.b2.dim(), (3, 0));
        assert_eq!(inc.max_dimension, 1);
    }

    #[test]
    fn test_rejects_dimension() {
        for k in [0, 3] {
            assert_eq!(
                IncidenceMatrices::build(&triangle_complex(), k).unwrap_err(),
                HodgeError::InvalidDimension { what: "boundary", found: k }
            );
        }
    }

    #[test]
    fn test_from_matrices_shape_check() {
        let b1 = Array2::<i32>::zeros((3, 3));
        let b2 = Array2::<i32>::zeros((2, 1));
        assert!(matches!(
            IncidenceMatrices::from_matrices(b1, b2),
            Err(HodgeError::ShapeMismatch { expected: 3, found: 2, .. })
        ));
    }

    #[test]
    fn test_divergence_and_circulation() {
        let inc = IncidenceMatrices::build(&triangle_complex(), 2).unwrap();

        // Loop 0 → 1 → 2 → 0: (0,1) forward, (1,2) forward, (0,2) backward
        let cycle: Array1<i32> = array![1, -1, 1];
        assert_eq!(inc.divergence(&cycle).unwrap(), array![0, 0, 0]);
        assert_eq!(inc.circulation(&cycle).unwrap(), array![3]);

        assert!(inc.divergence(&array![1, 0]).is_err());
    }
}

//! Vietoris-Rips 2-Skeleton at a Fixed Scale
//!
//! The Vietoris-Rips complex VR_ε(X) of a planar point cloud X:
//! - 0-simplices are the points in X
//! - an edge [i, j] exists iff d(i, j) ≤ ε
//! - a triangle [i, j, k] exists iff all three pairwise distances are ≤ ε
//!
//! This is the in-crate stand-in for an external planar triangulation:
//! it produces a graph and a face list without any geometric predicates.

use ndarray::Array2;
use tracing::debug;

use super::graph::Graph;
use super::triangulation::{check_planar, Triangulator};
use crate::error::Result;

/// Rips complex of a 2D point cloud at scale `epsilon`
pub struct VietorisRips {
    /// Distance matrix (precomputed)
    distances: Array2<f64>,
    /// Connection scale
    epsilon: f64,
}

impl VietorisRips {
    /// Build from an `N×2` coordinate array
    pub fn from_points(points: &Array2<f64>, epsilon: f64) -> Result<Self> {
        check_planar(points)?;
        let distances = Self::compute_distance_matrix(points);
        Ok(Self { distances, epsilon })
    }

    /// Euclidean distance matrix
    fn compute_distance_matrix(points: &Array2<f64>) -> Array2<f64> {
        let n = points.nrows();
        let mut dm = Array2::<f64>::zeros((n, n));

        for i in 0..n {
            for j in i + 1..n {
                let dx = points[[i, 0]] - points[[j, 0]];
                let dy = points[[i, 1]] - points[[j, 1]];
                let dist = dx.hypot(dy);
                dm[[i, j]] = dist;
                dm[[j, i]] = dist;
            }
        }

        dm
    }

    /// All edges `(i, j)`, `i < j`, within the scale
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let n = self.n_points();
        let mut edges = Vec::new();

        for i in 0..n {
            for j in i + 1..n {
                if self.distances[[i, j]] <= self.epsilon {
                    edges.push((i, j));
                }
            }
        }

        edges
    }

    /// All triangles `[i, j, k]`, `i < j < k`, within the scale
    pub fn triangles(&self) -> Vec<[usize; 3]> {
        let eps = self.epsilon;
        let n = self.n_points();
        let mut triangles = Vec::new();

        for i in 0..n {
            for j in i + 1..n {
                if self.distances[[i, j]] > eps {
                    continue;
                }
                for k in j + 1..n {
                    if self.distances[[i, k]] <= eps && self.distances[[j, k]] <= eps {
                        triangles.push([i, j, k]);
                    }
                }
            }
        }

        triangles
    }

    /// The full 1-skeleton, isolated edges included
    pub fn graph(&self) -> Result<Graph> {
        let edges = self.edges();
        debug!(n_points = self.n_points(), n_edges = edges.len(), epsilon = self.epsilon, "rips 1-skeleton");
        Graph::from_edges(self.n_points(), &edges)
    }

    pub fn n_points(&self) -> usize {
        self.distances.nrows()
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

/// Triangulator that fills every mutually-close triple at scale `epsilon`
#[derive(Debug, Clone, Copy)]
pub struct RipsTriangulator {
    pub epsilon: f64,
}

impl Triangulator for RipsTriangulator {
    fn triangulate(&self, points: &Array2<f64>) -> Result<Vec<[usize; 3]>> {
        Ok(VietorisRips::from_points(points, self.epsilon)?.triangles())
    }
}

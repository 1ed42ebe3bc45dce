//! Simplicial Complex Extraction
//!
//! Turns a graph plus a triangle source into a canonical, indexed
//! 2-complex. The edge and triangle index maps are built exactly once here
//! and shared by everything downstream (incidence matrices, flow vectors,
//! Laplacian spectra), so all edge-dimensioned objects agree on which row
//! or entry belongs to which edge.

use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::debug;

use super::cliques::TriangleSource;
use super::graph::Graph;
use super::simplex::{Edge, Triangle};
use crate::config::TriangleOrdering;
use crate::error::{HodgeError, Result};

/// An immutable, indexed 2-dimensional simplicial complex
#[derive(Debug, Clone)]
pub struct SimplicialComplex {
    n_vertices: usize,
    /// Distinct edges, sorted by (tail, head)
    edges: Vec<Edge>,
    edge_index: HashMap<Edge, usize>,
    /// Triangles whose three sides are all edges
    triangles: Vec<Triangle>,
    triangle_index: HashMap<Triangle, usize>,
}

impl SimplicialComplex {
    /// Extract from a graph, asking `source` for the 2-simplices
    pub fn extract<S: TriangleSource + ?Sized>(
        graph: &Graph,
        source: &S,
        ordering: TriangleOrdering,
    ) -> Result<Self> {
        let triangles = source.triangles(graph)?;
        Self::assemble(
            graph.n_vertices(),
            graph.edges().iter().copied(),
            triangles,
            ordering,
        )
    }

    /// Extract from raw pairs and triples
    pub fn from_parts(
        n_vertices: usize,
        edges: &[(usize, usize)],
        triangles: &[[usize; 3]],
        ordering: TriangleOrdering,
    ) -> Result<Self> {
        let edges = edges
            .iter()
            .map(|&(u, v)| Edge::new(u, v))
            .collect::<Result<Vec<_>>>()?;
        let triangles = triangles
            .iter()
            .map(|&[a, b, c]| Triangle::new(a, b, c))
            .collect::<Result<Vec<_>>>()?;
        Self::assemble(n_vertices, edges.into_iter(), triangles, ordering)
    }

    fn assemble(
        n_vertices: usize,
        edges: impl Iterator<Item = Edge>,
        discovered: Vec<Triangle>,
        ordering: TriangleOrdering,
    ) -> Result<Self> {
        let check = |vertex: usize| -> Result<()> {
            if vertex >= n_vertices {
                Err(HodgeError::VertexOutOfRange { vertex, n_vertices })
            } else {
                Ok(())
            }
        };

        // Sorted and deduplicated in one pass
        let mut edge_set = BTreeSet::new();
        for edge in edges {
            check(edge.head)?;
            edge_set.insert(edge);
        }
        let edges: Vec<Edge> = edge_set.into_iter().collect();
        let edge_index: HashMap<Edge, usize> =
            edges.iter().enumerate().map(|(i, &e)| (e, i)).collect();

        let mut seen = HashSet::new();
        let mut triangles = Vec::with_capacity(discovered.len());
        let mut dropped = 0usize;
        for triangle in discovered {
            check(triangle.vertices()[2])?;
            if !triangle.edges().iter().all(|e| edge_index.contains_key(e)) {
                dropped += 1;
                continue;
            }
            if seen.insert(triangle) {
                triangles.push(triangle);
            }
        }
        if ordering == TriangleOrdering::Sorted {
            triangles.sort_unstable();
        }
        let triangle_index: HashMap<Triangle, usize> =
            triangles.iter().enumerate().map(|(i, &t)| (t, i)).collect();

        debug!(
            n_vertices,
            n_edges = edges.len(),
            n_triangles = triangles.len(),
            dropped_triangles = dropped,
            "extracted simplicial complex"
        );

        Ok(Self {
            n_vertices,
            edges,
            edge_index,
            triangles,
            triangle_index,
        })
    }

    /// Index of a canonical edge
    pub fn edge_index(&self, edge: &Edge) -> Option<usize> {
        self.edge_index.get(edge).copied()
    }

    /// Index of a canonical triangle
    pub fn triangle_index(&self, triangle: &Triangle) -> Option<usize> {
        self.triangle_index.get(triangle).copied()
    }

    /// Resolve a directed traversal `u → v` to `(edge index, sign)`
    pub fn resolve_traversal(&self, u: usize, v: usize) -> Result<(usize, i32)> {
        let missing = HodgeError::EdgeNotInComplex { tail: u, head: v };
        let edge = Edge::new(u, v).map_err(|_| missing.clone())?;
        let index = self.edge_index(&edge).ok_or(missing)?;
        // Edge::new normalized the pair, so the sign is +1 iff u was the tail
        let sign = if u == edge.tail { 1 } else { -1 };
        Ok((index, sign))
    }

    /// Edges in index order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Triangles in index order
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn n_vertices(&self) -> usize {
        self.n_vertices
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn n_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// χ = V − E + F
    pub fn euler_characteristic(&self) -> i64 {
        self.n_vertices as i64 - self.n_edges() as i64 + self.n_triangles() as i64
    }
}

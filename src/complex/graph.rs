//! Undirected Graph (1-skeleton)
//!
//! Just enough graph to feed the extractor: a vertex count, edges in
//! insertion order, and sorted adjacency for clique enumeration.

use std::collections::BTreeSet;

use super::simplex::{Edge, Triangle};
use crate::error::{HodgeError, Result};

/// Undirected graph over vertices `0..n_vertices`
#[derive(Debug, Clone, Default)]
pub struct Graph {
    n_vertices: usize,
    /// Edges as inserted; may repeat
    edges: Vec<Edge>,
    /// Sorted neighbour sets
    adjacency: Vec<BTreeSet<usize>>,
}

impl Graph {
    pub fn new(n_vertices: usize) -> Self {
        Self {
            n_vertices,
            edges: Vec::new(),
            adjacency: vec![BTreeSet::new(); n_vertices],
        }
    }

    /// Build from an edge list
    pub fn from_edges(n_vertices: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::new(n_vertices);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Partition graph of a triangle list: every triangle adds its three sides
    pub fn from_triangles(n_vertices: usize, triangles: &[[usize; 3]]) -> Result<Self> {
        let mut graph = Self::new(n_vertices);
        for &[a, b, c] in triangles {
            let triangle = Triangle::new(a, b, c)?;
            for edge in triangle.edges() {
                graph.add_edge(edge.tail, edge.head)?;
            }
        }
        Ok(graph)
    }

    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        let edge = Edge::new(u, v)?;
        self.check_vertex(edge.head)?;
        self.adjacency[edge.tail].insert(edge.head);
        self.adjacency[edge.head].insert(edge.tail);
        self.edges.push(edge);
        Ok(())
    }

    pub fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex >= self.n_vertices {
            return Err(HodgeError::VertexOutOfRange {
                vertex,
                n_vertices: self.n_vertices,
            });
        }
        Ok(())
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        u < self.n_vertices && self.adjacency[u].contains(&v)
    }

    /// Sorted neighbours of `v`; none for a vertex outside `0..N`
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.get(v).into_iter().flatten().copied()
    }

    pub fn n_vertices(&self) -> usize {
        self.n_vertices
    }

    /// Edges in insertion order, duplicates included
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of distinct edges
    pub fn n_edges(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_edges_share_adjacency() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 0), (1, 2)]).unwrap();
        assert_eq!(graph.edges().len(), 3);
        assert_eq!(graph.n_edges(), 2);
        assert!(graph.has_edge(1, 0));
        assert!(!graph.has_edge(0, 2));
        assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_out_of_range_vertex_has_no_neighbors() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(graph.neighbors(3).count(), 0);
        assert_eq!(graph.neighbors(usize::MAX).count(), 0);
        assert!(!graph.has_edge(3, 0));
    }

    #[test]
    fn test_rejects_bad_edges() {
        let mut graph = Graph::new(3);
        assert_eq!(graph.add_edge(1, 1), Err(HodgeError::SelfLoopEdge { vertex: 1 }));
        assert_eq!(
            graph.add_edge(0, 3),
            Err(HodgeError::VertexOutOfRange { vertex: 3, n_vertices: 3 })
        );
    }

    #[test]
    fn test_partition_graph_from_triangles() {
        // Two triangles sharing the side (1, 2)
        let graph = Graph::from_triangles(4, &[[0, 1, 2], [3, 2, 1]]).unwrap();
        assert_eq!(graph.n_edges(), 5);
        assert!(graph.has_edge(2, 3));
        assert!(!graph.has_edge(0, 3));
    }
}

//! Triangle Discovery Strategies
//!
//! The extractor does not care where 2-simplices come from. A
//! `TriangleSource` either searches the graph for 3-cliques or hands back
//! a face list produced elsewhere (typically a planar triangulation).

use super::graph::Graph;
use super::simplex::Triangle;
use crate::error::Result;

/// Capability: enumerate the 2-simplices of a graph
pub trait TriangleSource {
    /// Triangles in a deterministic discovery order
    fn triangles(&self, graph: &Graph) -> Result<Vec<Triangle>>;
}

/// Exhaustive 3-clique search over the graph's adjacency
///
/// Walks `u < v < w` with vertices and neighbours in ascending order, so
/// discovery order is lexicographic in the normalized triple.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliqueSearch;

impl TriangleSource for CliqueSearch {
    fn triangles(&self, graph: &Graph) -> Result<Vec<Triangle>> {
        let mut triangles = Vec::new();

        for u in 0..graph.n_vertices() {
            for v in graph.neighbors(u).filter(|&v| v > u) {
                for w in graph.neighbors(v).filter(|&w| w > v) {
                    if graph.has_edge(u, w) {
                        triangles.push(Triangle::new(u, v, w)?);
                    }
                }
            }
        }

        Ok(triangles)
    }
}

/// A precomputed face list, returned in the order given
#[derive(Debug, Clone, Default)]
pub struct FaceList {
    faces: Vec<Triangle>,
}

impl FaceList {
    pub fn from_triples(triples: &[[usize; 3]]) -> Result<Self> {
        let faces = triples
            .iter()
            .map(|&[a, b, c]| Triangle::new(a, b, c))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { faces })
    }

    /// Accept loosely-shaped entries; anything but a triple is rejected
    pub fn from_slices<S: AsRef<[usize]>>(entries: &[S]) -> Result<Self> {
        let faces = entries
            .iter()
            .map(|entry| Triangle::from_slice(entry.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { faces })
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

impl TriangleSource for FaceList {
    fn triangles(&self, _graph: &Graph) -> Result<Vec<Triangle>> {
        Ok(self.faces.clone())
    }
}

//! Oriented Simplices
//!
//! Edges and triangles are stored in canonical orientation: vertices
//! sorted ascending. That orientation is the reference direction for every
//! signed quantity in the crate.
//!
//! - Edge `(a, b)`, `a < b`: tail `a`, head `b`
//! - Triangle `(v1, v2, v3)`, `v1 < v2 < v3`: boundary
//!   `+(v1, v2) + (v2, v3) − (v1, v3)`

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{HodgeError, Result};

/// A 1-simplex in canonical orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub tail: usize,
    pub head: usize,
}

impl Edge {
    /// Normalize an unordered pair, rejecting self-loops
    pub fn new(u: usize, v: usize) -> Result<Self> {
        match u.cmp(&v) {
            std::cmp::Ordering::Less => Ok(Self { tail: u, head: v }),
            std::cmp::Ordering::Greater => Ok(Self { tail: v, head: u }),
            std::cmp::Ordering::Equal => Err(HodgeError::SelfLoopEdge { vertex: u }),
        }
    }

    /// Sign of the directed traversal `u → v` relative to this edge
    ///
    /// `+1` along the reference direction, `-1` against it, `None` if
    /// `(u, v)` is not this edge at all.
    pub fn orientation_of(&self, u: usize, v: usize) -> Option<i32> {
        if (u, v) == (self.tail, self.head) {
            Some(1)
        } else if (v, u) == (self.tail, self.head) {
            Some(-1)
        } else {
            None
        }
    }

    pub fn as_pair(&self) -> (usize, usize) {
        (self.tail, self.head)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.tail, self.head)
    }
}

/// A 2-simplex in canonical orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triangle {
    vertices: [usize; 3],
}

impl Triangle {
    /// Normalize an unordered triple, rejecting repeated vertices
    pub fn new(a: usize, b: usize, c: usize) -> Result<Self> {
        let mut vertices = [a, b, c];
        vertices.sort_unstable();
        if vertices[0] == vertices[1] || vertices[1] == vertices[2] {
            return Err(HodgeError::DegenerateTriangle { vertices: [a, b, c] });
        }
        Ok(Self { vertices })
    }

    /// Build from a slice that must hold exactly three vertices
    pub fn from_slice(vertices: &[usize]) -> Result<Self> {
        match *vertices {
            [a, b, c] => Self::new(a, b, c),
            _ => Err(HodgeError::MalformedTriangle { len: vertices.len() }),
        }
    }

    pub fn vertices(&self) -> [usize; 3] {
        self.vertices
    }

    /// Oriented boundary `[(e1, +1), (e2, +1), (e3, -1)]`
    ///
    /// With `e1 = (v1, v2)`, `e2 = (v2, v3)`, `e3 = (v1, v3)`.
    pub fn boundary(&self) -> [(Edge, i32); 3] {
        let [v1, v2, v3] = self.vertices;
        [
            (Edge { tail: v1, head: v2 }, 1),
            (Edge { tail: v2, head: v3 }, 1),
            (Edge { tail: v1, head: v3 }, -1),
        ]
    }

    /// The three sides, in boundary order
    pub fn edges(&self) -> [Edge; 3] {
        self.boundary().map(|(edge, _)| edge)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [v1, v2, v3] = self.vertices;
        write!(f, "({}, {}, {})", v1, v2, v3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_normalization() {
        assert_eq!(Edge::new(3, 1).unwrap(), Edge { tail: 1, head: 3 });
        assert_eq!(Edge::new(1, 3).unwrap(), Edge::new(3, 1).unwrap());
        assert_eq!(Edge::new(2, 2), Err(HodgeError::SelfLoopEdge { vertex: 2 }));
    }

    #[test]
    fn test_edge_orientation() {
        let e = Edge::new(1, 4).unwrap();
        assert_eq!(e.orientation_of(1, 4), Some(1));
        assert_eq!(e.orientation_of(4, 1), Some(-1));
        assert_eq!(e.orientation_of(1, 2), None);
    }

    #[test]
    fn test_edge_order_is_lexicographic() {
        let mut edges = vec![
            Edge::new(1, 2).unwrap(),
            Edge::new(0, 2).unwrap(),
            Edge::new(0, 1).unwrap(),
        ];
        edges.sort();
        let pairs: Vec<_> = edges.iter().map(Edge::as_pair).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_triangle_boundary_signs() {
        let t = Triangle::new(5, 2, 9).unwrap();
        assert_eq!(t.vertices(), [2, 5, 9]);

        let boundary = t.boundary();
        assert_eq!(boundary[0], (Edge { tail: 2, head: 5 }, 1));
        assert_eq!(boundary[1], (Edge { tail: 5, head: 9 }, 1));
        assert_eq!(boundary[2], (Edge { tail: 2, head: 9 }, -1));
    }

    #[test]
    fn test_triangle_rejections() {
        assert_eq!(
            Triangle::from_slice(&[0, 1]),
            Err(HodgeError::MalformedTriangle { len: 2 })
        );
        assert_eq!(
            Triangle::from_slice(&[0, 1, 2, 3]),
            Err(HodgeError::MalformedTriangle { len: 4 })
        );
        assert_eq!(
            Triangle::new(1, 0, 1),
            Err(HodgeError::DegenerateTriangle { vertices: [1, 0, 1] })
        );
    }
}

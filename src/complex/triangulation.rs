//! Planar Triangulation Interface
//!
//! Triangulating raw coordinates is left to an external library; the
//! complex only consumes the resulting index triples. This module fixes
//! the hand-off: points in, triples out, and the partition graph built
//! from those triples.

use ndarray::Array2;
use tracing::debug;

use super::cliques::FaceList;
use super::graph::Graph;
use crate::error::{HodgeError, Result};

/// A planar triangulation backend
pub trait Triangulator {
    /// Triangles of an `N×2` point set, as triples of row indices
    fn triangulate(&self, points: &Array2<f64>) -> Result<Vec<[usize; 3]>>;
}

/// Reject point sets that are not strictly 2D
pub fn check_planar(points: &Array2<f64>) -> Result<()> {
    if points.ncols() != 2 {
        return Err(HodgeError::InvalidDimension {
            what: "point",
            found: points.ncols(),
        });
    }
    Ok(())
}

/// Triangulate `points` and build the graph whose edges are the triangle sides
///
/// Returns the graph together with the face list, so the triangulation's
/// own faces can be used as the complex's 2-simplices.
pub fn partition_graph<T: Triangulator>(
    points: &Array2<f64>,
    triangulator: &T,
) -> Result<(Graph, FaceList)> {
    check_planar(points)?;

    let triples = triangulator.triangulate(points)?;
    let graph = Graph::from_triangles(points.nrows(), &triples)?;
    let faces = FaceList::from_triples(&triples)?;

    debug!(
        n_points = points.nrows(),
        n_triangles = faces.len(),
        n_edges = graph.n_edges(),
        "partition graph"
    );

    Ok((graph, faces))
}

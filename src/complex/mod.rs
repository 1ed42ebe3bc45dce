//! Complex Module: From Planar Graphs to Indexed 2-Complexes
//!
//! - Oriented edges and triangles (canonical ascending orientation)
//! - A minimal undirected graph (the 1-skeleton)
//! - Pluggable triangle discovery: clique search or a given face list
//! - The triangulation hand-off for 2D point sets, with a Rips stand-in
//! - The extractor producing the shared edge/triangle index
//!
//! ## Conventions
//!
//! Vertices are labelled `0..N`; vertex `v` is row `v` of `B1`. Edges are
//! indexed by lexicographic `(tail, head)`. Triangles keep discovery order
//! unless sorting is requested.

mod simplex;
mod graph;
mod cliques;
mod triangulation;
mod vietoris_rips;
mod extractor;

pub use simplex::{Edge, Triangle};
pub use graph::Graph;
pub use cliques::{TriangleSource, CliqueSearch, FaceList};
pub use triangulation::{Triangulator, partition_graph, check_planar};
pub use vietoris_rips::{VietorisRips, RipsTriangulator};
pub use extractor::SimplicialComplex;

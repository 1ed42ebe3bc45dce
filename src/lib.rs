//! # hodge-flow
//!
//! Discrete Hodge Theory for Edge Flows on Planar Simplicial Complexes
//!
//! ## Overview
//!
//! Trajectories over a planar point set (walks along the edges of its
//! triangulation) can be compared in a basis adapted to the topology of
//! the complex. This crate builds that basis:
//!
//! 1. **Complex extraction**: canonical, indexed edges and triangles from a
//!    graph plus a triangle source (clique search or a triangulation's
//!    face list)
//!
//! 2. **Boundary operators**: the incidence matrices B1 (vertex × edge) and
//!    B2 (edge × triangle), satisfying B1 · B2 = 0
//!
//! 3. **Hodge Laplacian**: L1 = B1ᵗB1 + B2B2ᵗ and its full eigendecomposition,
//!    with eigenmodes classified as gradient, curl or harmonic
//!
//! 4. **Edge flows**: directed walks encoded as signed vectors in the same
//!    edge basis, ready to be projected onto the eigenmodes
//!
//! ## Orientation Convention
//!
//! Vertices are labelled `0..N`. An edge {u, v} is oriented from the
//! smaller to the larger label; a triangle {a, b, c} as its sorted triple.
//! Every signed quantity (B1, B2, flow vectors) uses this orientation.
//!
//! ## Example
//!
//! ```
//! use hodge_flow::{CliqueSearch, Graph, HodgeAnalysis, HodgeConfig};
//!
//! let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
//! let analysis = HodgeAnalysis::from_graph(&graph, &CliqueSearch, &HodgeConfig::default()).unwrap();
//!
//! assert!(analysis.incidence.is_chain_complex());
//! let flow = analysis.encode_flow(&[(0, 1), (2, 0)]).unwrap();
//! assert_eq!(flow.to_vec(), vec![1, -1, 0]);
//! ```
//!
//! ## References
//!
//! - Lim, "Hodge Laplacians on Graphs", SIAM Review 62(3) (2020)
//! - Schaub et al., "Random Walks on Simplicial Complexes and the
//!   Normalized Hodge 1-Laplacian", SIAM Review 62(2) (2020)

pub mod error;
pub mod config;
pub mod complex;
pub mod incidence;
pub mod flow;
pub mod hodge;
pub mod analysis;

pub use error::{HodgeError, Result};
pub use config::{HodgeConfig, TriangleOrdering};

// Re-exports from complex
pub use complex::{
    // Simplices
    Edge,
    Triangle,
    // 1-skeleton and triangle discovery
    Graph,
    TriangleSource,
    CliqueSearch,
    FaceList,
    // Triangulation hand-off
    Triangulator,
    partition_graph,
    VietorisRips,
    RipsTriangulator,
    // Extraction
    SimplicialComplex,
};

// Re-exports from incidence
pub use incidence::{
    IncidenceMatrices,
    vertex_edge_incidence,
    edge_triangle_incidence,
};

// Re-exports from flow
pub use flow::{encode_flow, encode_raw_flow, encode_walk};

// Re-exports from hodge
pub use hodge::{
    HodgeLaplacian,
    HodgeSpectrum,
    EigenmodeKind,
    HodgeDecomposition,
    BettiNumbers,
};

pub use analysis::{HodgeAnalysis, ModeCounts};

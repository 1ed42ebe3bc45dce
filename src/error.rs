//! Error types shared by every stage of the pipeline.
//!
//! All failures are deterministic input-validation errors: they carry the
//! offending value and are returned to the caller immediately, never
//! retried and never accompanied by a partial result.

use thiserror::Error;

/// Errors raised while building or analysing a simplicial complex
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HodgeError {
    /// A point set is not strictly 2D, or a boundary dimension is outside `[1, 2]`
    #[error("invalid {what} dimension: {found}")]
    InvalidDimension { what: &'static str, found: usize },

    /// A flow traversal entry is not a directed pair
    #[error("malformed traversal: expected 2 vertices, got {len}")]
    MalformedTraversal { len: usize },

    /// A traversed pair has no matching edge after normalization
    #[error("edge ({tail}, {head}) is not in the complex")]
    EdgeNotInComplex { tail: usize, head: usize },

    /// An edge whose endpoints coincide
    #[error("self-loop edge on vertex {vertex}")]
    SelfLoopEdge { vertex: usize },

    /// A 2-simplex entry that is not a vertex triple
    #[error("malformed triangle: expected 3 vertices, got {len}")]
    MalformedTriangle { len: usize },

    /// A vertex triple with a repeated vertex
    #[error("degenerate triangle {vertices:?}")]
    DegenerateTriangle { vertices: [usize; 3] },

    /// A vertex label outside `0..n_vertices`
    #[error("vertex {vertex} out of range for {n_vertices} vertices")]
    VertexOutOfRange { vertex: usize, n_vertices: usize },

    /// Operands disagree on a shared dimension
    #[error("shape mismatch in {what}: expected {expected}, found {found}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// Configuration could not be parsed or failed validation
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, HodgeError>;

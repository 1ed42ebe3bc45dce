//! Hodge Module: The Edge Laplacian and Its Spectrum
//!
//! Given B1 and B2 of a 2-complex:
//! - `laplacian`: L1 = B1ᵗB1 + B2B2ᵗ, kept as its down and up parts
//! - `spectrum`: full eigendecomposition and eigenmode classification
//! - `decomposition`: gradient / curl / harmonic split of an edge flow
//! - `betti`: Betti numbers from boundary ranks
//!
//! ## Mathematical Background
//!
//! The edge space R^M splits orthogonally as
//!
//!   R^M = im(B1ᵗ) ⊕ im(B2) ⊕ ker(L1)
//!
//! because B1·B2 = 0. The harmonic part ker(L1) has dimension β₁, one
//! direction per unfilled loop of the complex.

mod laplacian;
mod spectrum;
mod decomposition;
mod betti;

pub use laplacian::HodgeLaplacian;
pub use spectrum::{HodgeSpectrum, EigenmodeKind, symmetric_eigen};
pub use decomposition::HodgeDecomposition;
pub use betti::BettiNumbers;

//! Plume Simulation Core Library
//!
//! Physical parameterisations for a one-dimensional model of a buoyant
//! meltwater plume beneath an ice shelf. Fields are sampled at the
//! Chebyshev collocation points of the plume domain, and spatial gradients
//! are taken spectrally.
//!
//! The entrainment formulation of Jenkins et al. (1991) is provided behind
//! the [`EntrainmentParameterisation`] trait, so alternative formulations
//! can be substituted at the call site.

// Typed fields and shape errors
pub mod core_types;

// Spectral differentiation of collocated fields
pub mod numerics;

// Entrainment parameterisations
pub mod physics;

// Re-export core types
pub use core_types::{FieldError, ScalarField, VectorField};

// Re-export the numerical operator
pub use numerics::Differentiator;

// Re-export parameterisations
pub use physics::{EntrainmentConfig, EntrainmentParameterisation, Jenkins1991Entrainment};

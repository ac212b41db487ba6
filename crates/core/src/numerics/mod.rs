//! Numerical operators for spectrally discretised fields

pub mod chebyshev;

pub use chebyshev::Differentiator;

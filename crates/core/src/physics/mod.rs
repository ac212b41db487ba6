//! Physical parameterisations for the plume model

pub mod config;
pub mod entrainment;

pub use config::EntrainmentConfig;
pub use entrainment::{EntrainmentParameterisation, Jenkins1991Entrainment};

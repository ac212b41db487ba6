//! Field type aliases and field-shape errors.

use nalgebra::{DMatrix, DVector};

/// Scalar field sampled at the collocation points.
///
/// This is a simple alias for `nalgebra::DVector<f64>`, used throughout the
/// crate for buoyancy, tracer, and entrainment-rate fields: one real value
/// per collocation point.
pub type ScalarField = DVector<f64>;

/// Vector field sampled at the collocation points.
///
/// Alias for `nalgebra::DMatrix<f64>` with one row per collocation point and
/// one column per spatial component, so the Euclidean norm over the trailing
/// axis is a row norm.
pub type VectorField = DMatrix<f64>;

/// Errors raised when a field or domain does not match the configured
/// discretisation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// A field's sample count disagrees with the configured resolution
    SizeMismatch {
        /// Which argument was mis-sized
        field: &'static str,
        /// Sample count the discretisation was built with
        expected: usize,
        /// Sample count actually supplied
        found: usize,
    },
    /// Domain bounds do not satisfy `lower < upper`
    InvalidDomain { lower: f64, upper: f64 },
    /// A discretisation with zero collocation points was requested
    EmptyField,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::SizeMismatch {
                field,
                expected,
                found,
            } => write!(
                f,
                "field '{field}' has {found} samples but the discretisation was built with {expected}"
            ),
            FieldError::InvalidDomain { lower, upper } => {
                write!(f, "domain bounds must satisfy lower < upper (got [{lower}, {upper}])")
            }
            FieldError::EmptyField => write!(f, "discretisation requires at least one point"),
        }
    }
}

impl std::error::Error for FieldError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_field() {
        let err = FieldError::SizeMismatch {
            field: "buoyancy",
            expected: 8,
            found: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("buoyancy"));
        assert!(msg.contains('8'));
        assert!(msg.contains('5'));
    }

    #[test]
    fn test_invalid_domain_message() {
        let err = FieldError::InvalidDomain {
            lower: 1.0,
            upper: 0.0,
        };
        assert!(err.to_string().contains("lower < upper"));
    }
}

//! Serialisable configuration for entrainment parameterisations.

use serde::{Deserialize, Serialize};

use crate::core_types::FieldError;
use crate::physics::entrainment::Jenkins1991Entrainment;

/// Configuration for building an entrainment parameterisation.
///
/// Domain bounds default to the unit interval when omitted from the
/// serialised form:
///
/// ```
/// use plume_sim_core::physics::EntrainmentConfig;
///
/// let config: EntrainmentConfig =
///     serde_json::from_str(r#"{ "coefficient": 0.036, "size": 32 }"#).unwrap();
/// assert_eq!(config.lower, 0.0);
/// assert_eq!(config.upper, 1.0);
/// let model = config.build().unwrap();
/// assert_eq!(model.coefficient(), 0.036);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntrainmentConfig {
    /// Entrainment coefficient `E_0`
    pub coefficient: f64,
    /// Number of Chebyshev collocation points
    pub size: usize,
    /// Lower domain bound
    #[serde(default = "default_lower")]
    pub lower: f64,
    /// Upper domain bound
    #[serde(default = "default_upper")]
    pub upper: f64,
}

fn default_lower() -> f64 {
    0.0
}

fn default_upper() -> f64 {
    1.0
}

impl EntrainmentConfig {
    /// Build the Jenkins (1991) parameterisation this config describes.
    ///
    /// # Errors
    /// [`FieldError::EmptyField`] if `size` is zero;
    /// [`FieldError::InvalidDomain`] unless `lower < upper`.
    pub fn build(&self) -> Result<Jenkins1991Entrainment, FieldError> {
        Jenkins1991Entrainment::with_domain(self.coefficient, self.size, self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_bounds_default_to_unit_interval() {
        let config: EntrainmentConfig =
            serde_json::from_str(r#"{ "coefficient": 1.5, "size": 4 }"#).unwrap();
        assert_eq!(config.lower, 0.0);
        assert_eq!(config.upper, 1.0);
    }

    #[test]
    fn test_build_validates_domain() {
        let config = EntrainmentConfig {
            coefficient: 0.036,
            size: 16,
            lower: 2.0,
            upper: 2.0,
        };
        assert!(config.build().is_err());
    }

    #[test]
    fn test_build_produces_configured_model() {
        let config = EntrainmentConfig {
            coefficient: 0.5,
            size: 12,
            lower: -1.0,
            upper: 1.0,
        };
        let model = config.build().unwrap();
        assert_eq!(model.coefficient(), 0.5);
        assert_eq!(model.differentiator().size(), 12);
    }
}

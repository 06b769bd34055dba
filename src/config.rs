//! Discretization and medium settings for line-charge evaluation.

use crate::constants::{
    coulomb_coefficient, DEFAULT_SEGMENT_COUNT, ROD_MODEL_PERMITTIVITY, VACUUM_PERMITTIVITY,
};
use crate::errors::FieldError;
use crate::math::Scalar;

/// Settings applied when building a [`crate::fields::LineChargeField`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineChargeConfig {
    /// Number of equal sub-segments the rod is split into (>= 1).
    pub segment_count: usize,
    /// Permittivity of the surrounding medium in F/m.
    pub permittivity: Scalar,
}

impl Default for LineChargeConfig {
    fn default() -> Self {
        Self { segment_count: DEFAULT_SEGMENT_COUNT, permittivity: ROD_MODEL_PERMITTIVITY }
    }
}

impl LineChargeConfig {
    /// Default discretization with the CODATA vacuum permittivity.
    #[must_use]
    pub fn codata() -> Self {
        Self { permittivity: VACUUM_PERMITTIVITY, ..Self::default() }
    }

    /// Returns a copy with `segment_count` replaced.
    #[must_use]
    pub fn with_segment_count(mut self, segment_count: usize) -> Self {
        self.segment_count = segment_count;
        self
    }

    /// Returns a copy with `permittivity` replaced.
    #[must_use]
    pub fn with_permittivity(mut self, permittivity: Scalar) -> Self {
        self.permittivity = permittivity;
        self
    }

    /// Checks the settings without building anything.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.segment_count < 1 {
            return Err(FieldError::InvalidDiscretization { segment_count: self.segment_count });
        }
        if !self.permittivity.is_finite() {
            return Err(FieldError::NonFiniteInput("permittivity"));
        }
        if self.permittivity <= 0.0 {
            return Err(FieldError::InvalidPermittivity(self.permittivity));
        }
        Ok(())
    }

    /// Coulomb coefficient `1 / (4π ε)` for the configured medium.
    #[must_use]
    pub fn coulomb_coefficient(&self) -> Scalar {
        coulomb_coefficient(self.permittivity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_rod_model() {
        let cfg = LineChargeConfig::default();
        assert_eq!(cfg.segment_count, 100);
        assert_eq!(cfg.permittivity, 8.85e-12);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_segments_rejected() {
        let cfg = LineChargeConfig::default().with_segment_count(0);
        assert_eq!(cfg.validate(), Err(FieldError::InvalidDiscretization { segment_count: 0 }));
    }

    #[test]
    fn bad_permittivity_rejected() {
        let negative = LineChargeConfig::default().with_permittivity(-1.0);
        assert_eq!(negative.validate(), Err(FieldError::InvalidPermittivity(-1.0)));
        let nan = LineChargeConfig::default().with_permittivity(Scalar::NAN);
        assert_eq!(nan.validate(), Err(FieldError::NonFiniteInput("permittivity")));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: LineChargeConfig = serde_json::from_str(r#"{ "segment_count": 250 }"#).unwrap();
        assert_eq!(cfg.segment_count, 250);
        assert_eq!(cfg.permittivity, ROD_MODEL_PERMITTIVITY);
    }
}

use std::fmt;

use crate::errors::FieldError;
use crate::math::{P2, R2, Scalar};

/// Field vector evaluated at a query point, with its magnitude.
///
/// Produced fresh by every query; nothing is cached.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    /// Point the field was evaluated at.
    pub point: P2,
    /// Field vector in N/C.
    pub field: R2,
    /// Euclidean norm of `field`.
    pub magnitude: Scalar,
}

impl FieldSample {
    /// Wraps a field vector, computing its magnitude.
    #[must_use]
    pub fn new(point: P2, field: R2) -> Self {
        Self { point, field, magnitude: field.norm() }
    }

    /// Unit vector along the field.
    ///
    /// Fails with [`FieldError::ZeroField`] when the magnitude is exactly zero,
    /// e.g. at a point where contributions cancel, and with
    /// [`FieldError::FieldOverflow`] when it is not finite.
    pub fn direction(&self) -> Result<R2, FieldError> {
        if self.magnitude == 0.0 {
            return Err(FieldError::ZeroField);
        }
        if !self.magnitude.is_finite() {
            return Err(FieldError::FieldOverflow { point: self.point });
        }
        Ok(self.field / self.magnitude)
    }

    /// Direction scaled to a fixed drawing length, for arrow rendering.
    pub fn arrow(&self, length: Scalar) -> Result<R2, FieldError> {
        self.direction().map(|d| d * length)
    }
}

impl fmt::Display for FieldSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2e} N/C", self.magnitude)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn direction_is_unit_length() {
        let s = FieldSample::new(P2::new(0.0, 0.0), R2::new(3.0, 4.0));
        assert_relative_eq!(s.magnitude, 5.0, epsilon = 1.0e-12);
        let d = s.direction().unwrap();
        assert_relative_eq!(d.norm(), 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(d.x, 0.6, epsilon = 1.0e-12);
        let a = s.arrow(2.0).unwrap();
        assert_relative_eq!(a.y, 1.6, epsilon = 1.0e-12);
    }

    #[test]
    fn zero_field_has_no_direction() {
        let s = FieldSample::new(P2::new(1.0, 1.0), R2::zeros());
        assert_eq!(s.direction(), Err(FieldError::ZeroField));
        assert_eq!(s.arrow(1.0e5), Err(FieldError::ZeroField));
    }

    #[test]
    fn infinite_field_has_no_direction() {
        let s = FieldSample::new(P2::new(0.0, 1.0), R2::new(Scalar::INFINITY, 1.0));
        assert_eq!(s.direction(), Err(FieldError::FieldOverflow { point: P2::new(0.0, 1.0) }));
    }

    #[test]
    fn display_uses_scientific_notation() {
        let s = FieldSample::new(P2::new(0.0, 1.0), R2::new(0.0, 6.358));
        assert_eq!(s.to_string(), "6.36e0 N/C");
    }
}

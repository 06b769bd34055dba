//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::Vector2;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Two-dimensional real vector (field values, displacements).
pub type R2 = Vector2<Scalar>;
/// Position in the plane. Same representation as [`R2`]; the alias documents intent.
pub type P2 = Vector2<Scalar>;

/// Returns `true` when both components are finite.
#[inline]
#[must_use]
pub fn is_finite(v: &R2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_component_is_not_finite() {
        assert!(is_finite(&R2::new(0.0, -3.0)));
        assert!(!is_finite(&R2::new(Scalar::NAN, 0.0)));
        assert!(!is_finite(&R2::new(0.0, Scalar::INFINITY)));
    }
}

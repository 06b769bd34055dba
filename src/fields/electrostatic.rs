use crate::constants::{coulomb_coefficient, VACUUM_PERMITTIVITY};
use crate::errors::FieldError;
use crate::math::{is_finite, P2, R2, Scalar};

/// Point charge in coulombs, located in the plane.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointCharge {
    /// Position in meters.
    pub position: P2,
    /// Charge in coulombs.
    pub charge_c: Scalar,
}

impl PointCharge {
    /// Creates a point charge at `position`.
    #[must_use]
    pub fn new(position: P2, charge_c: Scalar) -> Self {
        Self { position, charge_c }
    }

    /// Whether `point` is numerically on the charge: `|r|³` is zero or subnormal.
    #[inline]
    #[must_use]
    pub fn is_coincident(&self, point: P2) -> bool {
        let r = (point - self.position).norm();
        r * r * r < Scalar::MIN_POSITIVE
    }

    /// Field `k q r / |r|³` at `point`, or `None` when `point` is coincident or the
    /// contribution is not a finite `f64`.
    #[inline]
    #[must_use]
    pub fn field_with_coefficient(&self, point: P2, k: Scalar) -> Option<R2> {
        if self.is_coincident(point) {
            return None;
        }
        let r_vec = point - self.position;
        let r = r_vec.norm();
        let de = r_vec * (k * self.charge_c / (r * r * r));
        is_finite(&de).then_some(de)
    }

    /// Potential `k q / |r|` at `point`, or `None` when `point` is coincident or the
    /// contribution is not a finite `f64`.
    #[inline]
    #[must_use]
    pub fn potential_with_coefficient(&self, point: P2, k: Scalar) -> Option<Scalar> {
        if self.is_coincident(point) {
            return None;
        }
        let phi = k * self.charge_c / (point - self.position).norm();
        phi.is_finite().then_some(phi)
    }
}

fn rejected(c: &PointCharge, node_index: usize, point: P2) -> FieldError {
    if c.is_coincident(point) {
        FieldError::SingularFieldPoint { node_index, point }
    } else {
        FieldError::FieldOverflow { point }
    }
}

/// Sums point-charge fields in iteration order.
///
/// A coincident charge is a [`FieldError::SingularFieldPoint`]; any other
/// non-finite contribution or sum is a [`FieldError::FieldOverflow`].
pub(crate) fn superpose_field<I>(point: P2, charges: I, k: Scalar) -> Result<R2, FieldError>
where
    I: IntoIterator<Item = PointCharge>,
{
    let mut e = R2::zeros();
    for (node_index, c) in charges.into_iter().enumerate() {
        match c.field_with_coefficient(point, k) {
            Some(de) => e += de,
            None => return Err(rejected(&c, node_index, point)),
        }
    }
    if !is_finite(&e) || !e.norm().is_finite() {
        return Err(FieldError::FieldOverflow { point });
    }
    Ok(e)
}

/// Sums point-charge potentials in iteration order, with the same failure rules as the field.
pub(crate) fn superpose_potential<I>(point: P2, charges: I, k: Scalar) -> Result<Scalar, FieldError>
where
    I: IntoIterator<Item = PointCharge>,
{
    let mut phi = 0.0;
    for (node_index, c) in charges.into_iter().enumerate() {
        match c.potential_with_coefficient(point, k) {
            Some(dphi) => phi += dphi,
            None => return Err(rejected(&c, node_index, point)),
        }
    }
    if !phi.is_finite() {
        return Err(FieldError::FieldOverflow { point });
    }
    Ok(phi)
}

/// Electric potential φ at `point` due to discrete point charges in vacuum.
pub fn potential_from_point_charges(point: P2, charges: &[PointCharge]) -> Result<Scalar, FieldError> {
    superpose_potential(point, charges.iter().copied(), coulomb_coefficient(VACUUM_PERMITTIVITY))
}

/// Electric field E at `point` due to discrete point charges in vacuum.
pub fn electric_field_from_point_charges(point: P2, charges: &[PointCharge]) -> Result<R2, FieldError> {
    superpose_field(point, charges.iter().copied(), coulomb_coefficient(VACUUM_PERMITTIVITY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn potential_of_single_point_charge_matches_reference_axis() {
        let q = PointCharge::new(P2::new(0.0, 0.0), 1.0e-9);
        let phi = potential_from_point_charges(P2::new(0.0, 1.0), &[q]).unwrap();
        let ref_val = 1.0 / (4.0 * std::f64::consts::PI * VACUUM_PERMITTIVITY) * 1.0e-9;
        assert_relative_eq!(phi, ref_val, max_relative = 1.0e-12);
    }

    #[test]
    fn field_points_away_from_positive_charge() {
        let q = PointCharge::new(P2::new(1.0, 1.0), 2.0e-9);
        let e = electric_field_from_point_charges(P2::new(3.0, 1.0), &[q]).unwrap();
        let k = coulomb_coefficient(VACUUM_PERMITTIVITY);
        assert_relative_eq!(e.x, k * 2.0e-9 / 4.0, max_relative = 1.0e-12);
        assert_eq!(e.y, 0.0);
    }

    #[test]
    fn equal_charges_cancel_at_midpoint() {
        let charges = [
            PointCharge::new(P2::new(-1.0, 0.0), 1.0e-9),
            PointCharge::new(P2::new(1.0, 0.0), 1.0e-9),
        ];
        let e = electric_field_from_point_charges(P2::new(0.0, 0.0), &charges).unwrap();
        assert_relative_eq!(e.norm(), 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn coincident_point_reports_charge_index() {
        let charges = [
            PointCharge::new(P2::new(0.0, 0.0), 1.0e-9),
            PointCharge::new(P2::new(2.0, 0.0), 1.0e-9),
        ];
        let err = electric_field_from_point_charges(P2::new(2.0, 0.0), &charges).unwrap_err();
        assert_eq!(err, FieldError::SingularFieldPoint { node_index: 1, point: P2::new(2.0, 0.0) });
        assert!(potential_from_point_charges(P2::new(0.0, 0.0), &charges).is_err());
    }

    #[test]
    fn near_coincident_point_is_singular() {
        // |r|³ is subnormal but non-zero, so k q / |r|³ overflows.
        let charges = [PointCharge::new(P2::new(0.0, 0.0), 1.0e-9)];
        let err = electric_field_from_point_charges(P2::new(1.0e-107, 0.0), &charges).unwrap_err();
        assert!(matches!(err, FieldError::SingularFieldPoint { node_index: 0, .. }));
    }

    #[test]
    fn near_coincident_point_is_flagged() {
        let q = PointCharge::new(P2::new(0.0, 0.0), 1.0e-9);
        assert!(q.is_coincident(P2::new(0.0, 0.0)));
        assert!(q.is_coincident(P2::new(1.0e-107, 0.0)));
        assert!(!q.is_coincident(P2::new(1.0e-100, 0.0)));
    }

    #[test]
    fn huge_charge_overflows_instead_of_returning_inf() {
        let charges = [PointCharge::new(P2::new(0.0, 0.0), 1.0e300)];
        let p = P2::new(0.0, 1.0);
        assert_eq!(electric_field_from_point_charges(p, &charges), Err(FieldError::FieldOverflow { point: p }));
        assert_eq!(potential_from_point_charges(p, &charges), Err(FieldError::FieldOverflow { point: p }));
    }

    #[test]
    fn finite_terms_whose_sum_overflows_are_rejected() {
        let k = coulomb_coefficient(VACUUM_PERMITTIVITY);
        let q = Scalar::MAX / k * 0.75;
        let charges = [PointCharge::new(P2::new(0.0, 0.0), q), PointCharge::new(P2::new(0.0, 0.0), q)];
        let p = P2::new(0.0, 1.0);
        assert_eq!(electric_field_from_point_charges(p, &charges), Err(FieldError::FieldOverflow { point: p }));
    }
}

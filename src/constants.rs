//! Baseline physical constants and the Coulomb coefficient.
//!
//! ## Accuracy
//!
//! [`VACUUM_PERMITTIVITY`] follows CODATA 2018 (11 significant figures). Rod
//! evaluation defaults to the three-figure [`ROD_MODEL_PERMITTIVITY`], which the
//! regression baselines are computed with; switch to the CODATA value through
//! [`crate::config::LineChargeConfig::codata`].
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - Mohr, P. J., Newell, D. B., Taylor, B. N., & Tiesinga, E. (2019). CODATA Recommended Values of the Fundamental Physical Constants: 2018.

use std::f64::consts::PI;

use crate::math::Scalar;

/// Vacuum permittivity ε₀ in farads per meter (F/m).
/// Approximate value: 8.8541878128 × 10⁻¹² F/m (11 significant figures).
pub const VACUUM_PERMITTIVITY: Scalar = 8.854_187_812_8e-12;
/// Three-figure ε₀ (8.85 × 10⁻¹² F/m) used by default for line-charge evaluation.
pub const ROD_MODEL_PERMITTIVITY: Scalar = 8.85e-12;
/// Default number of sub-segments a rod is split into.
pub const DEFAULT_SEGMENT_COUNT: usize = 100;

/// Returns Coulomb's coefficient `k = 1 / (4π ε)` for the permittivity `epsilon` (F/m).
#[inline]
#[must_use]
pub fn coulomb_coefficient(epsilon: Scalar) -> Scalar {
    1.0 / (4.0 * PI * epsilon)
}

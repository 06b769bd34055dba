use tracing::{debug, trace};

use crate::config::LineChargeConfig;
use crate::errors::FieldError;
use crate::math::{is_finite, P2, R2, Scalar};

use super::electrostatic::{superpose_field, superpose_potential, PointCharge};
use super::sample::FieldSample;

/// Straight segment between two distinct points of the plane.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SegmentEndpoints"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: P2,
    end: P2,
}

/// Unvalidated wire form of a [`Segment`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SegmentEndpoints {
    start: P2,
    end: P2,
}

#[cfg(feature = "serde")]
impl TryFrom<SegmentEndpoints> for Segment {
    type Error = FieldError;

    fn try_from(raw: SegmentEndpoints) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl Segment {
    /// Creates a segment, rejecting non-finite endpoints and lengths that are not
    /// a positive finite `f64` (coincident endpoints, or a separation that underflows).
    pub fn new(start: P2, end: P2) -> Result<Self, FieldError> {
        if !is_finite(&start) {
            return Err(FieldError::NonFiniteInput("segment start"));
        }
        if !is_finite(&end) {
            return Err(FieldError::NonFiniteInput("segment end"));
        }
        let length = (end - start).norm();
        if !(length > 0.0) {
            return Err(FieldError::DegenerateGeometry);
        }
        if !length.is_finite() {
            return Err(FieldError::NonFiniteInput("segment length"));
        }
        Ok(Self { start, end })
    }

    /// First endpoint.
    #[must_use]
    pub const fn start(&self) -> P2 {
        self.start
    }

    /// Second endpoint.
    #[must_use]
    pub const fn end(&self) -> P2 {
        self.end
    }

    /// Vector from `start` to `end`.
    #[must_use]
    pub fn direction(&self) -> R2 {
        self.end - self.start
    }

    /// Euclidean length in meters.
    #[must_use]
    pub fn length(&self) -> Scalar {
        self.direction().norm()
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> P2 {
        (self.start + self.end) * 0.5
    }
}

/// Uniformly charged rod, evaluated as `segment_count` point charges.
///
/// Each sub-segment `i` contributes a point charge `λ·|dL|` located at its start,
/// `start + i·dL`. This left-endpoint rule never places a node on `end` and biases
/// the result by half a sub-segment relative to a midpoint rule; the bias shrinks
/// as `1 / segment_count`.
///
/// The value is immutable once built and holds no interior state, so a single
/// instance can be shared across threads and queried concurrently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineChargeField {
    segment: Segment,
    charge: Scalar,
    segment_count: usize,
    coulomb_k: Scalar,
}

impl LineChargeField {
    /// Rod from `start` to `end` carrying `charge` coulombs, with the default configuration.
    pub fn new(start: P2, end: P2, charge: Scalar) -> Result<Self, FieldError> {
        Self::from_config(Segment::new(start, end)?, charge, &LineChargeConfig::default())
    }

    /// Same as [`Self::new`] with an explicit number of sub-segments.
    pub fn with_segments(
        start: P2,
        end: P2,
        charge: Scalar,
        segment_count: usize,
    ) -> Result<Self, FieldError> {
        let config = LineChargeConfig::default().with_segment_count(segment_count);
        Self::from_config(Segment::new(start, end)?, charge, &config)
    }

    /// Builds a rod on `segment` using the discretization and medium in `config`.
    pub fn from_config(
        segment: Segment,
        charge: Scalar,
        config: &LineChargeConfig,
    ) -> Result<Self, FieldError> {
        config.validate()?;
        if !charge.is_finite() {
            return Err(FieldError::NonFiniteInput("charge"));
        }
        let field = Self {
            segment,
            charge,
            segment_count: config.segment_count,
            coulomb_k: config.coulomb_coefficient(),
        };
        // A subnormal length or sub-segment makes λ or |dL| meaningless.
        let dl = field.segment_vector().norm();
        if !field.linear_charge_density().is_finite() || !(dl > 0.0) {
            return Err(FieldError::DegenerateGeometry);
        }
        debug!(
            start = ?(segment.start.x, segment.start.y),
            end = ?(segment.end.x, segment.end.y),
            charge,
            segment_count = field.segment_count,
            lambda = field.linear_charge_density(),
            "line charge constructed"
        );
        Ok(field)
    }

    /// Underlying geometry.
    #[must_use]
    pub const fn segment(&self) -> &Segment {
        &self.segment
    }

    /// Total charge in coulombs.
    #[must_use]
    pub const fn charge(&self) -> Scalar {
        self.charge
    }

    /// Number of discretization nodes.
    #[must_use]
    pub const fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Coulomb coefficient `k` of the configured medium.
    #[must_use]
    pub const fn coulomb_coefficient(&self) -> Scalar {
        self.coulomb_k
    }

    /// λ = charge / length, in C/m.
    #[must_use]
    pub fn linear_charge_density(&self) -> Scalar {
        self.charge / self.segment.length()
    }

    /// dL = (end − start) / segment_count.
    #[must_use]
    pub fn segment_vector(&self) -> R2 {
        self.segment.direction() / self.segment_count as Scalar
    }

    /// Discretization nodes in index order, each carrying `λ·|dL|`.
    pub fn nodes(&self) -> impl Iterator<Item = PointCharge> + '_ {
        let dl = self.segment_vector();
        let q_node = self.linear_charge_density() * dl.norm();
        let start = self.segment.start;
        (0..self.segment_count).map(move |i| PointCharge::new(start + dl * i as Scalar, q_node))
    }

    /// Sum of the node charges. Equals [`Self::charge`] up to rounding.
    #[must_use]
    pub fn total_charge(&self) -> Scalar {
        self.nodes().map(|c| c.charge_c).sum()
    }

    /// Electric field vector (N/C) at `point`.
    ///
    /// Fails with [`FieldError::SingularFieldPoint`] when `point` lies on a node (or
    /// close enough that its contribution overflows) and with
    /// [`FieldError::FieldOverflow`] when the result is not a finite `f64`.
    pub fn electric_field(&self, point: P2) -> Result<R2, FieldError> {
        electric_field_from_line_charge(self, point)
    }

    /// Field vector together with its magnitude.
    pub fn sample(&self, point: P2) -> Result<FieldSample, FieldError> {
        self.electric_field(point).map(|field| FieldSample::new(point, field))
    }

    /// Electric potential (V) at `point`, summed over the same nodes as the field.
    pub fn potential(&self, point: P2) -> Result<Scalar, FieldError> {
        if !is_finite(&point) {
            return Err(FieldError::NonFiniteInput("query point"));
        }
        superpose_potential(point, self.nodes(), self.coulomb_k)
    }
}

/// Electric field of `rod` at `point` by left-endpoint summation of Coulomb contributions.
pub fn electric_field_from_line_charge(rod: &LineChargeField, point: P2) -> Result<R2, FieldError> {
    if !is_finite(&point) {
        return Err(FieldError::NonFiniteInput("query point"));
    }
    let e = superpose_field(point, rod.nodes(), rod.coulomb_k)?;
    trace!(x = point.x, y = point.y, ex = e.x, ey = e.y, "line charge field evaluated");
    Ok(e)
}

//! Batch evaluation over point lists and rectangular lattices.

use tracing::{debug, instrument};

use crate::errors::FieldError;
use crate::fields::{FieldSample, LineChargeField};
use crate::math::{P2, Scalar};

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Evaluates `rod` at every point. Each point succeeds or fails on its own.
#[must_use]
pub fn electric_field_at_points(
    rod: &LineChargeField,
    points: &[P2],
) -> Vec<Result<FieldSample, FieldError>> {
    points.iter().map(|p| rod.sample(*p)).collect()
}

/// Field samples on a rectangular lattice, stored row-major (y outer, x inner).
///
/// Lattice points that land on a discretization node hold `None`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGrid {
    /// Column coordinates.
    pub xs: Vec<Scalar>,
    /// Row coordinates.
    pub ys: Vec<Scalar>,
    /// `xs.len() * ys.len()` samples.
    pub samples: Vec<Option<FieldSample>>,
}

impl FieldGrid {
    /// Samples `rod` on an `nx` by `ny` lattice spanning the given ranges (inclusive).
    ///
    /// Only [`FieldError::SingularFieldPoint`] is absorbed into a `None` entry; any
    /// other error (non-finite range, overflow) aborts the whole grid.
    #[instrument(skip(rod), level = "debug")]
    pub fn sample(
        rod: &LineChargeField,
        x_range: (Scalar, Scalar),
        y_range: (Scalar, Scalar),
        nx: usize,
        ny: usize,
    ) -> Result<Self, FieldError> {
        let xs = linspace(x_range.0, x_range.1, nx);
        let ys = linspace(y_range.0, y_range.1, ny);
        let mut samples = Vec::with_capacity(xs.len() * ys.len());
        let mut singular = 0usize;
        for &y in &ys {
            for &x in &xs {
                match rod.sample(P2::new(x, y)) {
                    Ok(s) => samples.push(Some(s)),
                    Err(FieldError::SingularFieldPoint { .. }) => {
                        singular += 1;
                        samples.push(None);
                    }
                    Err(e) => return Err(e),
                }
            }
        }
        debug!(points = samples.len(), singular, "field grid sampled");
        Ok(Self { xs, ys, samples })
    }

    /// Sample at column `ix`, row `iy`.
    #[must_use]
    pub fn get(&self, ix: usize, iy: usize) -> Option<&FieldSample> {
        if ix >= self.xs.len() || iy >= self.ys.len() {
            return None;
        }
        self.samples[iy * self.xs.len() + ix].as_ref()
    }

    /// Largest finite magnitude on the grid, useful for colour scaling.
    #[must_use]
    pub fn max_magnitude(&self) -> Option<Scalar> {
        self.samples
            .iter()
            .flatten()
            .map(|s| s.magnitude)
            .filter(|m| m.is_finite())
            .fold(None, |acc, m| Some(acc.map_or(m, |a: Scalar| a.max(m))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rod() -> LineChargeField {
        LineChargeField::with_segments(P2::new(-1.0, 0.0), P2::new(1.0, 0.0), 1.0e-9, 4).unwrap()
    }

    #[test]
    fn linspace_basic() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    }

    #[test]
    fn batch_reports_failures_per_point() {
        let out = electric_field_at_points(&rod(), &[P2::new(0.0, 1.0), P2::new(-1.0, 0.0)]);
        assert!(out[0].is_ok());
        assert!(matches!(out[1], Err(FieldError::SingularFieldPoint { node_index: 0, .. })));
    }

    #[test]
    fn grid_marks_nodes_as_missing() {
        // Nodes at x = -1, -0.5, 0, 0.5; the lattice hits -1, 0 and 1 on y = 0.
        let grid = FieldGrid::sample(&rod(), (-1.0, 1.0), (-1.0, 1.0), 3, 3).unwrap();
        assert_eq!(grid.samples.len(), 9);
        assert!(grid.get(0, 1).is_none());
        assert!(grid.get(1, 1).is_none());
        assert!(grid.get(2, 1).is_some());
        assert!(grid.get(3, 0).is_none());
        let top = grid.get(1, 2).unwrap();
        assert_relative_eq!(top.point.y, 1.0, epsilon = 1.0e-12);
        assert!(top.field.y > 0.0);
        assert!(grid.max_magnitude().unwrap() >= top.magnitude);
    }

    #[test]
    fn grid_propagates_non_singular_errors() {
        let err = FieldGrid::sample(&rod(), (Scalar::NAN, 1.0), (-1.0, 1.0), 3, 3).unwrap_err();
        assert_eq!(err, FieldError::NonFiniteInput("query point"));

        let huge = LineChargeField::new(P2::new(-1.0, 0.0), P2::new(1.0, 0.0), 1.0e300).unwrap();
        let err = FieldGrid::sample(&huge, (-1.0, 1.0), (0.5, 1.0), 2, 2).unwrap_err();
        assert!(matches!(err, FieldError::FieldOverflow { .. }));
    }
}

//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::{P2, Scalar};

/// Top-level error type for the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// The rod's endpoints coincide, so its length (and charge density) is undefined.
    #[error("degenerate geometry: segment start and end coincide")]
    DegenerateGeometry,
    /// The rod must be split into at least one sub-segment.
    #[error("invalid discretization: segment count must be >= 1, got {segment_count}")]
    InvalidDiscretization {
        /// Rejected segment count.
        segment_count: usize,
    },
    /// The query point lies on a discretization node.
    #[error("singular field point ({}, {}) at discretization node {node_index}", .point.x, .point.y)]
    SingularFieldPoint {
        /// Index of the coincident node.
        node_index: usize,
        /// Query point that triggered the singularity.
        point: P2,
    },
    /// The field or potential at the query point is not representable as a finite `f64`.
    #[error("field at ({}, {}) overflows f64", .point.x, .point.y)]
    FieldOverflow {
        /// Query point whose result overflowed.
        point: P2,
    },
    /// A direction was requested for a field of exactly zero magnitude.
    #[error("field magnitude is zero; direction is undefined")]
    ZeroField,
    /// An input value was NaN or infinite.
    #[error("non-finite input: {0}")]
    NonFiniteInput(&'static str),
    /// Permittivity must be strictly positive.
    #[error("invalid permittivity: {0} F/m")]
    InvalidPermittivity(Scalar),
    /// An interactive operation was attempted before its inputs were collected.
    #[error("not ready: {0}")]
    NotReady(&'static str),
}

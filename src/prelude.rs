//! Convenience re-exports for evaluating line-charge fields.

pub use crate::config::LineChargeConfig;
pub use crate::constants::*;
pub use crate::errors::FieldError;
pub use crate::fields::{
    electric_field_from_line_charge,
    electric_field_from_point_charges,
    potential_from_point_charges,
    FieldSample,
    LineChargeField,
    PointCharge,
    Segment,
};
pub use crate::grid::{electric_field_at_points, linspace, FieldGrid};
pub use crate::interaction::{Event, Response, Session, SessionState};
pub use crate::math::{P2, R2, Scalar};

//! Electrostatic field sources and evaluated field samples.

mod electrostatic;
mod line_charge;
mod sample;

pub use electrostatic::{
    PointCharge,
    potential_from_point_charges,
    electric_field_from_point_charges,
};
pub use line_charge::{electric_field_from_line_charge, LineChargeField, Segment};
pub use sample::FieldSample;

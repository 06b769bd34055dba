#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and the Coulomb coefficient.
pub mod constants;
/// Shared numerical aliases for planar vectors.
pub mod math;
/// Discretization and medium settings.
pub mod config;
/// Point-charge and line-charge field sources.
pub mod fields;
/// Batch evaluation over point lists and lattices.
pub mod grid;
/// Click-driven input state machine for interactive front ends.
pub mod interaction;
/// Error type shared by all modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;

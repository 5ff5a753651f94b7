//! # Flapwing Engine
//!
//! Quasi-steady aerodynamic load calculations for flapping-wing
//! micro-aerial-vehicle design studies.

// Re-export the main types and functions
pub use cli_api::{FlapError, FlapInputs, DEFAULT_INPUTS};
pub use model::{quasi_steady_flap, FlapSummary, TimeSeriesBundle};
pub use sweep::{run_sweep, sweep_values, SweepAxis, SweepPoint};

// Module declarations
pub mod cli_api;
mod added_mass;
mod constants;
mod drag;
mod kinematics;
mod lift;
mod model;
mod power;
mod sweep;

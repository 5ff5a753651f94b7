// Input and error layer - provides the parameter set and error type shared by
// the library surface and the command-line tool
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::f64::consts::PI;

use crate::constants::AIR_DENSITY_SEA_LEVEL;

// Error type for engine operations
#[derive(Debug)]
pub struct FlapError {
    message: String,
}

impl fmt::Display for FlapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for FlapError {}

impl From<String> for FlapError {
    fn from(msg: String) -> Self {
        FlapError { message: msg }
    }
}

impl From<&str> for FlapError {
    fn from(msg: &str) -> Self {
        FlapError { message: msg.to_string() }
    }
}

/// Scalar parameter set for one quasi-steady evaluation
///
/// All fields are SI. The pitch fields are consumed as radians; surfaces that
/// accept degrees (the CLI, the pitch sweep axis) convert before constructing
/// an input set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlapInputs {
    pub air_density: f64,  // kg/m³
    pub wing_area: f64,    // m², planform
    pub chord: f64,        // m, mean chord
    pub frequency: f64,    // Hz, flapping frequency
    pub stroke_amp: f64,   // m, stroke amplitude
    pub pitch_amp: f64,    // rad, pitch amplitude
    pub pitch_phase: f64,  // rad, pitch phase offset relative to stroke
    pub dt: f64,           // s, time step
    pub t_end: f64,        // s, simulation end time
    pub cl_alpha: f64,     // 1/rad, 2-D lift-curve slope
    pub u_ref: f64,        // m/s, reference flow speed
    pub k_added_mass: f64, // dimensionless added-mass scaling
    pub cd0: f64,          // dimensionless zero-angle drag coefficient
    pub cd_alpha: f64,     // 1/rad², quadratic drag dependence
}

impl Default for FlapInputs {
    fn default() -> Self {
        Self {
            air_density: AIR_DENSITY_SEA_LEVEL,
            wing_area: 2e-4,
            chord: 0.004,
            frequency: 150.0,
            stroke_amp: 0.01,
            pitch_amp: 45.0_f64.to_radians(),
            pitch_phase: 180.0_f64.to_radians(),
            dt: 1e-4,
            t_end: 0.03,
            cl_alpha: 2.0 * PI,
            u_ref: 2.0,
            k_added_mass: 0.05,
            cd0: 0.1,
            cd_alpha: 1.5,
        }
    }
}

/// Baseline parameter set, constructed once per process.
///
/// Immutable by construction: callers clone it and apply their own overrides,
/// so concurrent evaluations can never observe each other's changes.
pub static DEFAULT_INPUTS: Lazy<FlapInputs> = Lazy::new(FlapInputs::default);

impl FlapInputs {
    /// Reject parameter sets that cannot be evaluated.
    ///
    /// A zero chord or non-positive time step is a caller error, not a
    /// recoverable numeric condition, and fails before any computation.
    pub fn validate(&self) -> Result<(), FlapError> {
        if self.chord == 0.0 {
            return Err("chord must be nonzero".into());
        }
        if self.dt <= 0.0 {
            return Err(format!("time step must be positive, got {}", self.dt).into());
        }
        if self.wing_area <= 0.0 {
            return Err(format!("wing area must be positive, got {}", self.wing_area).into());
        }
        if self.t_end < 0.0 {
            return Err(format!("end time must be non-negative, got {}", self.t_end).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_inputs_are_valid() {
        assert!(FlapInputs::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_chord() {
        let inputs = FlapInputs { chord: 0.0, ..Default::default() };
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_dt() {
        let inputs = FlapInputs { dt: 0.0, ..Default::default() };
        assert!(inputs.validate().is_err());
        let inputs = FlapInputs { dt: -1e-4, ..Default::default() };
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_end_time() {
        let inputs = FlapInputs { t_end: -0.01, ..Default::default() };
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn test_default_static_matches_default_impl() {
        assert_eq!(*DEFAULT_INPUTS, FlapInputs::default());
    }

    #[test]
    fn test_cloned_defaults_are_independent() {
        let mut a = DEFAULT_INPUTS.clone();
        a.frequency = 999.0;
        assert_eq!(DEFAULT_INPUTS.frequency, 150.0);
    }

    #[test]
    fn test_error_display_carries_message() {
        let err = FlapError::from("chord must be nonzero");
        assert_eq!(format!("{}", err), "chord must be nonzero");
    }
}

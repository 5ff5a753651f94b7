//! Five-point parameter sweeps around a baseline configuration.
//!
//! A sweep varies one axis across `base ± {0, 1, 2}·step` while holding every
//! other parameter fixed, producing one independent bundle per value. The
//! five evaluations share nothing and run in parallel.

use rayon::prelude::*;
use serde::Serialize;

use crate::cli_api::{FlapError, FlapInputs};
use crate::model::{quasi_steady_flap, TimeSeriesBundle};

/// Swept parameter axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepAxis {
    /// Pitch amplitude, values in degrees
    Pitch,
    /// Flapping frequency, values in Hz
    Frequency,
    /// Stroke amplitude, values in meters
    Stroke,
}

impl SweepAxis {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pitch" => Some(SweepAxis::Pitch),
            "frequency" => Some(SweepAxis::Frequency),
            "stroke" => Some(SweepAxis::Stroke),
            _ => None,
        }
    }

    /// Unit suffix used in sweep point labels
    pub fn unit(&self) -> &'static str {
        match self {
            SweepAxis::Pitch => "deg",
            SweepAxis::Frequency => "Hz",
            SweepAxis::Stroke => "m",
        }
    }
}

impl std::fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One evaluated sweep point
#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint {
    /// Axis value in the axis's own unit (degrees for pitch)
    pub value: f64,
    /// Display label, e.g. "45 deg" or "150 Hz"
    pub label: String,
    pub series: TimeSeriesBundle,
}

/// The five evaluation values `base − 2·step .. base + 2·step`
pub fn sweep_values(base: f64, step: f64) -> [f64; 5] {
    [
        base - 2.0 * step,
        base - step,
        base,
        base + step,
        base + 2.0 * step,
    ]
}

/// Apply one axis value onto a cloned input set.
///
/// Pitch values arrive in degrees and are converted here; the model itself
/// consumes radians only.
fn apply_axis(inputs: &mut FlapInputs, axis: SweepAxis, value: f64) {
    match axis {
        SweepAxis::Pitch => inputs.pitch_amp = value.to_radians(),
        SweepAxis::Frequency => inputs.frequency = value,
        SweepAxis::Stroke => inputs.stroke_amp = value,
    }
}

/// Evaluate a five-point sweep, one independent bundle per value.
///
/// Each evaluation gets its own owned copy of the baseline inputs, so the
/// parallel runs cannot observe each other's overrides. Results come back in
/// axis-value order regardless of completion order.
pub fn run_sweep(
    base_inputs: &FlapInputs,
    axis: SweepAxis,
    base: f64,
    step: f64,
) -> Result<Vec<SweepPoint>, FlapError> {
    let results: Vec<Result<SweepPoint, FlapError>> = sweep_values(base, step)
        .to_vec()
        .into_par_iter()
        .map(|value| {
            let mut inputs = base_inputs.clone();
            apply_axis(&mut inputs, axis, value);
            let series = quasi_steady_flap(&inputs)?;
            Ok(SweepPoint {
                value,
                label: format!("{} {}", value, axis.unit()),
                series,
            })
        })
        .collect();

    results.into_iter().collect()
}

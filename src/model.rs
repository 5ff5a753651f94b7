//! Quasi-steady evaluation of a prescribed flapping cycle.
//!
//! One call maps a parameter set onto the full set of time histories: stroke
//! kinematics, angle of attack, quasi-steady lift and drag, power and
//! lift-to-power efficiency. The evaluation is a single pass over a uniform
//! time grid; there is no integration state and no shared data between calls.

use serde::{Deserialize, Serialize};

use crate::added_mass::added_mass_lift;
use crate::cli_api::{FlapError, FlapInputs};
use crate::drag::{drag_coefficient, dynamic_pressure};
use crate::kinematics::{
    angular_frequency, flow_speed, pitch_accel, pitch_angle, pitch_rate, stroke_position,
    time_grid,
};
use crate::lift::{
    effective_lift_slope, rotational_lift_coefficient, translational_lift_coefficient,
};
use crate::power::{aerodynamic_power, efficiency};

/// Named equal-length time histories produced by one evaluation
///
/// Every channel has one sample per time grid point and all channels align by
/// index against `t`. The bundle is freshly allocated on each call and owned
/// entirely by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesBundle {
    /// Time grid (s)
    pub t: Vec<f64>,
    /// Stroke position (m)
    pub x_pos: Vec<f64>,
    /// Wing-frame relative flow speed (m/s)
    pub u: Vec<f64>,
    /// Angle of attack (rad)
    pub alpha: Vec<f64>,
    /// Angle of attack reported in degrees
    pub theta_deg: Vec<f64>,
    /// Total lift (N)
    pub lift: Vec<f64>,
    /// Drag (N)
    pub drag: Vec<f64>,
    /// Aerodynamic power, zero samples floored (W)
    pub power: Vec<f64>,
    /// Lift-to-power efficiency
    pub eta: Vec<f64>,
    /// Lift coefficient aggregate, translational + rotational
    pub cl: Vec<f64>,
    /// Drag coefficient
    pub cd: Vec<f64>,
}

impl TimeSeriesBundle {
    fn with_capacity(n: usize) -> Self {
        Self {
            t: Vec::with_capacity(n),
            x_pos: Vec::with_capacity(n),
            u: Vec::with_capacity(n),
            alpha: Vec::with_capacity(n),
            theta_deg: Vec::with_capacity(n),
            lift: Vec::with_capacity(n),
            drag: Vec::with_capacity(n),
            power: Vec::with_capacity(n),
            eta: Vec::with_capacity(n),
            cl: Vec::with_capacity(n),
            cd: Vec::with_capacity(n),
        }
    }

    /// Number of samples in every channel
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Derive headline figures for reporting.
    pub fn summarize(&self) -> FlapSummary {
        FlapSummary {
            samples: self.len(),
            peak_lift: peak(&self.lift),
            mean_lift: mean(&self.lift),
            peak_drag: peak(&self.drag),
            mean_drag: mean(&self.drag),
            peak_power: peak(&self.power),
            mean_power: mean(&self.power),
            mean_efficiency: mean(&self.eta),
            max_pitch_deg: peak(&self.theta_deg),
            min_pitch_deg: trough(&self.theta_deg),
        }
    }
}

/// Headline figures derived from a full set of time histories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlapSummary {
    pub samples: usize,
    pub peak_lift: f64,       // N
    pub mean_lift: f64,       // N
    pub peak_drag: f64,       // N
    pub mean_drag: f64,       // N
    pub peak_power: f64,      // W
    pub mean_power: f64,      // W
    pub mean_efficiency: f64,
    pub max_pitch_deg: f64,
    pub min_pitch_deg: f64,
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn peak(values: &[f64]) -> f64 {
    values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b))
}

fn trough(values: &[f64]) -> f64 {
    values.iter().fold(f64::INFINITY, |a, &b| a.min(b))
}

/// Evaluate the quasi-steady blade-element model over one time grid.
///
/// Pure function over its input: the same parameter set always produces the
/// same bundle, and nothing is cached or shared between calls. Returns an
/// error for parameter sets that fail [`FlapInputs::validate`].
pub fn quasi_steady_flap(inputs: &FlapInputs) -> Result<TimeSeriesBundle, FlapError> {
    inputs.validate()?;

    let t = time_grid(inputs.dt, inputs.t_end);
    let omega = angular_frequency(inputs.frequency);
    let lift_slope = effective_lift_slope(inputs.cl_alpha, inputs.wing_area, inputs.chord);

    let mut series = TimeSeriesBundle::with_capacity(t.len());

    for &ti in &t {
        let x = stroke_position(inputs.stroke_amp, omega, ti);
        let u = flow_speed(inputs.u_ref, inputs.stroke_amp, inputs.chord, omega, ti);
        let alpha = pitch_angle(inputs.pitch_amp, omega, inputs.pitch_phase, ti);
        let alpha_dot = pitch_rate(inputs.pitch_amp, omega, inputs.pitch_phase, ti);
        let alpha_ddot = pitch_accel(inputs.pitch_amp, omega, inputs.pitch_phase, ti);

        let cl_trans = translational_lift_coefficient(lift_slope, alpha);
        let cl_rot = rotational_lift_coefficient(inputs.chord, u, alpha_dot);
        let cd = drag_coefficient(inputs.cd0, inputs.cd_alpha, alpha);

        let q = dynamic_pressure(inputs.air_density, u);
        let lift = q * inputs.wing_area * (cl_trans + cl_rot)
            + added_mass_lift(
                inputs.k_added_mass,
                inputs.air_density,
                inputs.chord,
                inputs.wing_area,
                alpha_ddot,
            );
        let drag = q * inputs.wing_area * cd;
        let power = aerodynamic_power(drag, u);

        series.x_pos.push(x);
        series.u.push(u);
        series.alpha.push(alpha);
        series.theta_deg.push(alpha.to_degrees());
        series.lift.push(lift);
        series.drag.push(drag);
        series.power.push(power);
        series.eta.push(efficiency(lift, u, power));
        // Added mass carries no coefficient form and stays out of this sum
        series.cl.push(cl_trans + cl_rot);
        series.cd.push(cd);
    }

    series.t = t;
    Ok(series)
}

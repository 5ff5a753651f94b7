//! Prescribed stroke and pitch kinematics for a rigid flapping wing.
//!
//! All motion is closed-form sinusoidal: the stroke translates the wing along
//! its stroke plane while the pitch profile rocks the wing about its spanwise
//! axis. There is no state to integrate; every quantity is evaluated directly
//! at a grid time.

use crate::constants::NUMERICAL_TOLERANCE;
use std::f64::consts::PI;

/// Build the uniform time grid over the closed interval [0, t_end].
///
/// The grid has `floor(t_end/dt) + 1` points and always contains both
/// endpoints when `t_end` is a multiple of `dt`. The division is taken with a
/// small tolerance so that end times which are exact multiples of the step in
/// decimal do not lose their final sample to binary rounding.
///
/// # Arguments
/// * `dt` - Time step (s), must be positive
/// * `t_end` - End time (s), must be non-negative
pub fn time_grid(dt: f64, t_end: f64) -> Vec<f64> {
    let steps = (t_end / dt + NUMERICAL_TOLERANCE).floor() as usize;
    (0..=steps).map(|i| i as f64 * dt).collect()
}

/// Angular stroke frequency (rad/s) from the flapping frequency (Hz)
#[inline(always)]
pub fn angular_frequency(frequency_hz: f64) -> f64 {
    2.0 * PI * frequency_hz
}

/// Instantaneous stroke position (m)
#[inline(always)]
pub fn stroke_position(stroke_amp: f64, omega: f64, t: f64) -> f64 {
    stroke_amp * (omega * t).sin()
}

/// Wing-frame relative flow speed (m/s)
///
/// Reference free-stream speed plus the chord-scaled component induced by the
/// translational flapping motion. The result can be negative or pass through
/// zero near flow reversal at large stroke amplitude or frequency; downstream
/// divisions must tolerate that.
#[inline(always)]
pub fn flow_speed(u_ref: f64, stroke_amp: f64, chord: f64, omega: f64, t: f64) -> f64 {
    u_ref + stroke_amp * chord * omega * (omega * t).cos()
}

/// Geometric angle of attack (rad)
///
/// Half-sine-shifted profile: the wing pitches between 0 and `pitch_amp`
/// rather than oscillating symmetrically about zero. The range invariant
/// `0 <= α <= pitch_amp` holds for every real input.
#[inline(always)]
pub fn pitch_angle(pitch_amp: f64, omega: f64, pitch_phase: f64, t: f64) -> f64 {
    pitch_amp * ((omega * t + pitch_phase).sin() + 1.0) / 2.0
}

/// Pitch angular rate α̇ (rad/s)
#[inline(always)]
pub fn pitch_rate(pitch_amp: f64, omega: f64, pitch_phase: f64, t: f64) -> f64 {
    omega * pitch_amp * (omega * t + pitch_phase).cos()
}

/// Pitch angular acceleration α̈ (rad/s²)
#[inline(always)]
pub fn pitch_accel(pitch_amp: f64, omega: f64, pitch_phase: f64, t: f64) -> f64 {
    -omega * omega * pitch_amp * (omega * t + pitch_phase).sin()
}

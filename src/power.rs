//! Aerodynamic power and lift-to-power efficiency.

use crate::constants::POWER_FLOOR_W;

/// Instantaneous aerodynamic power spent against drag (W)
///
/// P = D·U. The product is exactly zero at flow reversal samples; those are
/// replaced with `POWER_FLOOR_W` so the efficiency division is always
/// defined. The substitution is per sample and touches exact zeros only.
#[inline(always)]
pub fn aerodynamic_power(drag: f64, flow_speed: f64) -> f64 {
    let p = drag * flow_speed;
    if p == 0.0 {
        POWER_FLOOR_W
    } else {
        p
    }
}

/// Lift-to-power transport efficiency η = L·U / P (dimensionless)
///
/// Callers pass the already-floored power, so the division cannot hit zero.
#[inline(always)]
pub fn efficiency(lift: f64, flow_speed: f64, power: f64) -> f64 {
    lift * flow_speed / power
}

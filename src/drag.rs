//! Quadratic drag polar and dynamic pressure.

/// Drag coefficient from the quadratic polar CD = CD0 + CD_α·α²
///
/// Non-negative whenever both coefficients are non-negative, since the angle
/// enters squared.
#[inline(always)]
pub fn drag_coefficient(cd0: f64, cd_alpha: f64, alpha: f64) -> f64 {
    cd0 + cd_alpha * alpha * alpha
}

/// Dynamic pressure q = ½·ρ·U² (Pa)
///
/// Quadratic in the flow speed, so reversed flow carries the same dynamic
/// pressure as forward flow of equal magnitude.
#[inline(always)]
pub fn dynamic_pressure(air_density: f64, flow_speed: f64) -> f64 {
    0.5 * air_density * flow_speed * flow_speed
}

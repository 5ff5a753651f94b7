/// Physical and numerical constants used in flapping-wing load calculations

/// Standard air density at sea level (kg/m³)
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225;

/// Leading-edge-vortex lift enhancement gain
///
/// Multiplies the translational lift coefficient through the enhancement
/// factor S_d = 1 + k·sin(|α|)².
///
/// Physical meaning: a stable leading-edge vortex on a rapidly flapping wing
/// raises lift above the attached-flow prediction, with the strongest gain
/// near 90° incidence where the vortex is largest.
///
/// Value: 0.5, an empirical fit in the range reported for insect-scale wings
/// at Reynolds numbers of order 10²–10⁴.
pub const LEV_ENHANCEMENT_GAIN: f64 = 0.5;

/// Rotational-circulation lift gain
///
/// Scales the pitch-rate-driven circulation term
/// CL_rot = k_rot·(π/2)·(c/U)·α̇. The theoretical value for rotation about
/// the three-quarter-chord point is 1; measured flapping wings sit well
/// below it because the rotation axis lies forward of that point.
pub const ROTATIONAL_LIFT_GAIN: f64 = 0.1;

// Numerical stability constants
/// General numerical tolerance for floating point comparisons
pub const NUMERICAL_TOLERANCE: f64 = 1e-9;

/// Minimum threshold for preventing division by zero in general calculations
pub const MIN_DIVISION_THRESHOLD: f64 = 1e-12;

/// Floor substituted for exactly-zero aerodynamic power (W)
///
/// Instantaneous power passes through zero at every flow reversal. Samples
/// where it is exactly zero are replaced with this floor before the
/// efficiency division; all other samples are left untouched.
pub const POWER_FLOOR_W: f64 = 1e-12;

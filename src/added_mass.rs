//! Added-mass reaction force from pitch acceleration.

use std::f64::consts::PI;

/// Added-mass lift (N)
///
/// Inertial reaction of the fluid accelerated along with the pitching wing,
/// modeled as a quarter-circle virtual mass per unit span and scaled by the
/// dimensionless coefficient `k_added_mass`:
///
/// L_added = K_am · 0.25π · ρ · c² · S · α̈
///
/// This contribution has no coefficient form and is excluded from the
/// reported lift-coefficient aggregate.
#[inline(always)]
pub fn added_mass_lift(
    k_added_mass: f64,
    air_density: f64,
    chord: f64,
    wing_area: f64,
    pitch_accel: f64,
) -> f64 {
    k_added_mass * 0.25 * PI * air_density * chord * chord * wing_area * pitch_accel
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_acceleration_gives_zero_force() {
        assert_eq!(added_mass_lift(0.05, 1.225, 0.004, 2e-4, 0.0), 0.0);
    }

    #[test]
    fn test_force_is_linear_in_acceleration() {
        let f1 = added_mass_lift(0.05, 1.225, 0.004, 2e-4, 100.0);
        let f2 = added_mass_lift(0.05, 1.225, 0.004, 2e-4, 200.0);
        assert_relative_eq!(f2, 2.0 * f1);
    }

    #[test]
    fn test_force_scales_with_chord_squared() {
        let f1 = added_mass_lift(0.05, 1.225, 0.004, 2e-4, 100.0);
        let f2 = added_mass_lift(0.05, 1.225, 0.008, 2e-4, 100.0);
        assert_relative_eq!(f2, 4.0 * f1);
    }

    #[test]
    fn test_deceleration_reverses_sign() {
        let f = added_mass_lift(0.05, 1.225, 0.004, 2e-4, -100.0);
        assert!(f < 0.0);
    }
}

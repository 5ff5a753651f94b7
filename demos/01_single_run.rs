/// Single Configuration Example
///
/// This example evaluates the baseline flapping-wing configuration and
/// reports the headline load figures.

use flapwing_engine::{quasi_steady_flap, FlapInputs};

fn main() {
    println!("=== Single Configuration Example ===\n");

    let inputs = FlapInputs::default();

    println!("Configuration:");
    println!("  Frequency: {} Hz", inputs.frequency);
    println!("  Stroke amplitude: {} m", inputs.stroke_amp);
    println!("  Pitch amplitude: {:.1}°", inputs.pitch_amp.to_degrees());
    println!("  Chord: {} m", inputs.chord);
    println!("  Wing area: {} m²", inputs.wing_area);
    println!("  Duration: {} s at dt = {} s", inputs.t_end, inputs.dt);
    println!();

    let bundle = quasi_steady_flap(&inputs).expect("baseline inputs are valid");
    let summary = bundle.summarize();

    println!("Results over {} samples:", summary.samples);
    println!("  Peak lift:  {:.4e} N", summary.peak_lift);
    println!("  Mean lift:  {:.4e} N", summary.mean_lift);
    println!("  Peak drag:  {:.4e} N", summary.peak_drag);
    println!("  Peak power: {:.4e} W", summary.peak_power);
    println!("  Mean power: {:.4e} W", summary.mean_power);
    println!("  Mean efficiency: {:.4}", summary.mean_efficiency);
    println!("  Pitch range: {:.2}° to {:.2}°", summary.min_pitch_deg, summary.max_pitch_deg);
    println!();

    println!("Key samples:");
    println!("  Time (s) | Lift (N)   | Power (W)  | Pitch (°)");
    println!("  ---------|------------|------------|----------");
    let step = bundle.len() / 6;
    for i in (0..bundle.len()).step_by(step.max(1)) {
        println!(
            "  {:8.4} | {:10.3e} | {:10.3e} | {:8.2}",
            bundle.t[i], bundle.lift[i], bundle.power[i], bundle.theta_deg[i]
        );
    }
}

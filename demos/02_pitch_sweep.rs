/// Pitch Amplitude Sweep Example
///
/// This example sweeps the pitch amplitude across five values around a 45°
/// base and compares the resulting loads.

use flapwing_engine::{run_sweep, FlapInputs, SweepAxis};

fn main() {
    println!("=== Pitch Amplitude Sweep Example ===\n");

    let base_inputs = FlapInputs::default();
    let points = run_sweep(&base_inputs, SweepAxis::Pitch, 45.0, 15.0)
        .expect("sweep over valid baseline inputs");

    println!("Swept values: 15°, 30°, 45°, 60°, 75°\n");
    println!("  Pitch   | Peak Lift (N) | Mean Power (W) | Mean Efficiency");
    println!("  --------|---------------|----------------|----------------");

    for point in &points {
        let summary = point.series.summarize();
        println!(
            "  {:7} | {:13.4e} | {:14.4e} | {:14.4}",
            point.label, summary.peak_lift, summary.mean_power, summary.mean_efficiency
        );
    }

    println!();
    println!("Each point is an independent evaluation of the same baseline");
    println!("with only the pitch amplitude changed.");
}

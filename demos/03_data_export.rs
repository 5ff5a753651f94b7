/// Data Export Example
///
/// This example evaluates a short run and prints the presentation channels
/// as CSV and the full bundle as JSON, the two formats downstream tools
/// consume.

use flapwing_engine::{quasi_steady_flap, FlapInputs};

fn main() {
    println!("=== Data Export Example ===\n");

    let inputs = FlapInputs {
        t_end: 0.002,
        ..Default::default()
    };
    let bundle = quasi_steady_flap(&inputs).expect("inputs are valid");

    println!("CSV (presentation channels):");
    println!("t,lift,drag,power,eta,theta_deg,x_pos");
    for i in 0..bundle.len() {
        println!(
            "{:.4},{:.4e},{:.4e},{:.4e},{:.4e},{:.2},{:.4e}",
            bundle.t[i],
            bundle.lift[i],
            bundle.drag[i],
            bundle.power[i],
            bundle.eta[i],
            bundle.theta_deg[i],
            bundle.x_pos[i]
        );
    }

    println!();
    println!("JSON (full bundle, truncated run):");
    let json = serde_json::to_string_pretty(&bundle).expect("bundle serializes");
    println!("{}", json);
}

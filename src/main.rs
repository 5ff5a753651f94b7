//! Default entry point for the flapping-wing engine

fn main() {
    println!("Flapwing Engine v0.1.0");
    println!();
    println!("This is a quasi-steady aerodynamic load engine for flapping-wing MAV design.");
    println!("The full command-line interface lives in the flapwing-cli binary.");
    println!();
    println!("To run a single configuration:");
    println!("  flapwing-cli simulate --frequency 150 --pitch-deg 45 --t-end 0.03");
    println!();
    println!("To sweep one parameter across five values:");
    println!("  flapwing-cli sweep --axis pitch --base 45 --step 15");
    println!();
    println!("To use as a Rust library:");
    println!("  Add to Cargo.toml: flapwing-engine = \"0.1\"");
}

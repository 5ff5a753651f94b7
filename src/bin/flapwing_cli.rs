use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;

use flapwing_engine::{
    quasi_steady_flap, run_sweep, FlapError, FlapInputs, SweepAxis, SweepPoint, TimeSeriesBundle,
    DEFAULT_INPUTS,
};

#[derive(Parser)]
#[command(name = "flapwing")]
#[command(author = "Flapwing Engine Team")]
#[command(version = "0.1.0")]
#[command(about = "Quasi-steady flapping-wing aerodynamic load calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single flapping configuration
    Simulate {
        /// Flapping frequency (Hz)
        #[arg(short = 'f', long, default_value = "150.0")]
        frequency: f64,

        /// Pitch amplitude (degrees)
        #[arg(short = 'p', long, default_value = "45.0")]
        pitch_deg: f64,

        /// Simulation end time (seconds)
        #[arg(short = 't', long, default_value = "0.03")]
        t_end: f64,

        /// Stroke amplitude (meters)
        #[arg(long, default_value = "0.01")]
        stroke_amp: f64,

        /// Pitch phase offset relative to stroke (degrees)
        #[arg(long, default_value = "180.0")]
        pitch_phase_deg: f64,

        /// Reference flow speed (m/s)
        #[arg(long, default_value = "2.0")]
        uref: f64,

        /// Mean chord length (meters)
        #[arg(long, default_value = "0.004")]
        chord: f64,

        /// Wing planform area (m²)
        #[arg(long, default_value = "2e-4")]
        wing_area: f64,

        /// Time step (seconds)
        #[arg(long, default_value = "1e-4")]
        dt: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Full output (print every sample in table mode)
        #[arg(long)]
        full: bool,
    },

    /// Sweep one parameter across five evenly spaced values
    Sweep {
        /// Sweep axis: pitch, frequency, or stroke
        #[arg(short = 'x', long)]
        axis: String,

        /// Base value (degrees for pitch, Hz for frequency, meters for stroke)
        #[arg(short = 'b', long)]
        base: f64,

        /// Step between adjacent sweep values
        #[arg(short = 's', long)]
        step: f64,

        /// Flapping frequency for non-frequency axes (Hz)
        #[arg(short = 'f', long, default_value = "150.0")]
        frequency: f64,

        /// Pitch amplitude for non-pitch axes (degrees)
        #[arg(short = 'p', long, default_value = "45.0")]
        pitch_deg: f64,

        /// Simulation end time (seconds)
        #[arg(short = 't', long, default_value = "0.03")]
        t_end: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Display engine information
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
    Table,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            frequency,
            pitch_deg,
            t_end,
            stroke_amp,
            pitch_phase_deg,
            uref,
            chord,
            wing_area,
            dt,
            output,
            full,
        } => {
            if frequency == 0.0 {
                eprintln!("Warning: zero flapping frequency, motion degenerates to constant velocity");
            }

            // Degrees are a CLI convenience; the engine consumes radians
            let inputs = FlapInputs {
                frequency,
                pitch_amp: pitch_deg.to_radians(),
                pitch_phase: pitch_phase_deg.to_radians(),
                t_end,
                stroke_amp,
                u_ref: uref,
                chord,
                wing_area,
                dt,
                ..DEFAULT_INPUTS.clone()
            };

            let bundle = quasi_steady_flap(&inputs)?;
            display_simulation(&bundle, output, full)?;
        }

        Commands::Sweep {
            axis,
            base,
            step,
            frequency,
            pitch_deg,
            t_end,
            output,
        } => {
            let axis = SweepAxis::from_str(&axis).ok_or_else(|| {
                FlapError::from(format!(
                    "Unknown sweep axis: {}. Expected pitch, frequency, or stroke.",
                    axis
                ))
            })?;

            let base_inputs = FlapInputs {
                frequency,
                pitch_amp: pitch_deg.to_radians(),
                t_end,
                ..DEFAULT_INPUTS.clone()
            };

            let points = run_sweep(&base_inputs, axis, base, step)?;
            display_sweep(&points, axis, output)?;
        }

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║        FLAPWING ENGINE v0.1.0          ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Quasi-steady aerodynamic loads for     ║");
            println!("║ flapping-wing MAV design studies.      ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Features:                              ║");
            println!("║ • Blade-element lift and drag          ║");
            println!("║ • LEV and rotational circulation       ║");
            println!("║ • Added-mass reaction forces           ║");
            println!("║ • Five-point parameter sweeps          ║");
            println!("║ • Multiple output formats              ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn display_simulation(
    bundle: &TimeSeriesBundle,
    format: OutputFormat,
    full: bool,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(bundle)?);
        }

        OutputFormat::Csv => {
            println!("t,lift,drag,power,eta,theta_deg,x_pos");
            for i in 0..bundle.len() {
                println!(
                    "{:.6},{:.6e},{:.6e},{:.6e},{:.6e},{:.4},{:.6e}",
                    bundle.t[i],
                    bundle.lift[i],
                    bundle.drag[i],
                    bundle.power[i],
                    bundle.eta[i],
                    bundle.theta_deg[i],
                    bundle.x_pos[i]
                );
            }
        }

        OutputFormat::Table => {
            let summary = bundle.summarize();
            println!("╔════════════════════════════════════════╗");
            println!("║          SIMULATION RESULTS            ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Samples:           {:>8}            ║", summary.samples);
            println!("║ Peak Lift:         {:>10.4e} N     ║", summary.peak_lift);
            println!("║ Mean Lift:         {:>10.4e} N     ║", summary.mean_lift);
            println!("║ Peak Drag:         {:>10.4e} N     ║", summary.peak_drag);
            println!("║ Peak Power:        {:>10.4e} W     ║", summary.peak_power);
            println!("║ Mean Power:        {:>10.4e} W     ║", summary.mean_power);
            println!("║ Mean Efficiency:   {:>10.4}       ║", summary.mean_efficiency);
            println!("║ Pitch Range:  {:>6.1}° to {:>6.1}°      ║", summary.min_pitch_deg, summary.max_pitch_deg);
            println!("╚════════════════════════════════════════╝");

            println!();
            println!("┌──────────┬────────────┬────────────┬────────────┬──────────┐");
            println!("│ Time (s) │  Lift (N)  │  Drag (N)  │ Power (W)  │ Pitch(°) │");
            println!("├──────────┼────────────┼────────────┼────────────┼──────────┤");

            let step = if full { 1 } else { (bundle.len() / 10).max(1) };
            for i in (0..bundle.len()).step_by(step) {
                println!(
                    "│ {:>8.4} │ {:>10.3e} │ {:>10.3e} │ {:>10.3e} │ {:>8.2} │",
                    bundle.t[i],
                    bundle.lift[i],
                    bundle.drag[i],
                    bundle.power[i],
                    bundle.theta_deg[i]
                );
            }
            println!("└──────────┴────────────┴────────────┴────────────┴──────────┘");
        }
    }

    Ok(())
}

fn display_sweep(
    points: &[SweepPoint],
    axis: SweepAxis,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(points)?);
        }

        OutputFormat::Csv => {
            println!("axis_value,t,lift,drag,power,eta,theta_deg,x_pos");
            for point in points {
                let s = &point.series;
                for i in 0..s.len() {
                    println!(
                        "{},{:.6},{:.6e},{:.6e},{:.6e},{:.6e},{:.4},{:.6e}",
                        point.value,
                        s.t[i],
                        s.lift[i],
                        s.drag[i],
                        s.power[i],
                        s.eta[i],
                        s.theta_deg[i],
                        s.x_pos[i]
                    );
                }
            }
        }

        OutputFormat::Table => {
            println!("╔══════════════════════════════════════════════════════════════╗");
            println!("║                     {:<9} SWEEP RESULTS                      ║", axis.to_string().to_uppercase());
            println!("╠══════════════════════════════════════════════════════════════╣");
            println!("║  Value      Peak Lift (N)   Mean Power (W)   Mean Efficiency ║");
            println!("╠══════════════════════════════════════════════════════════════╣");
            for point in points {
                let summary = point.series.summarize();
                println!(
                    "║  {:<9} {:>13.4e} {:>16.4e} {:>17.4} ║",
                    point.label, summary.peak_lift, summary.mean_power, summary.mean_efficiency
                );
            }
            println!("╚══════════════════════════════════════════════════════════════╝");
        }
    }

    Ok(())
}

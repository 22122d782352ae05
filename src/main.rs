// src/main.rs

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};

use tickertape_gravity::bodies::Body;
use tickertape_gravity::constants::{DEFAULT_INTERVAL_S, DEFAULT_ITERATIONS, DEFAULT_OUTPUT_FILE};
use tickertape_gravity::crate_version;
use tickertape_gravity::data_analysis::gravity::calculate_gravity;
use tickertape_gravity::data_analysis::kinematics::calculate_kinematics;
use tickertape_gravity::data_output::table::{format_banner, format_gravity, print_table};
use tickertape_gravity::plot_functions::plot_tickertape::plot_tickertape;

/// Tickertape gravity experiment: prints the kinematics of a mass falling from
/// rest for 16 seconds and draws the tickertape it would leave.
#[derive(Parser, Debug)]
#[command(version = crate_version(), about)]
struct Args {
    /// PNG file the tickertape plot is written to
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Skip rendering the tickertape plot
    #[arg(long)]
    no_plot: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    debug!("{:?}", args);

    let body = Body::default();
    println!("{}", format_banner(body));

    let samples = calculate_kinematics(body.gravity(), DEFAULT_INTERVAL_S, DEFAULT_ITERATIONS);

    print_table(&samples);

    let g = calculate_gravity(&samples)?;
    println!("\n{}\n", format_gravity(g));

    if args.no_plot {
        info!("Skipping tickertape plot (--no-plot).");
        return Ok(());
    }

    plot_tickertape(&samples, &args.output)?;
    println!("Tickertape plot saved as '{}'.", args.output.display());

    Ok(())
}

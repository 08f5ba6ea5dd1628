//! cutplan - CLI tool to compute cutting plans for profile stock bars.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use cutplan_rs::{
    expand_openings, load_openings, pack_pieces, render_plan, validate_openings, PlannerConfig,
    DEFAULT_BAR_LENGTH_CM,
};

/// Compute a cutting plan for window/door profile pieces from stock bars.
#[derive(Parser, Debug)]
#[command(name = "cutplan")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input JSON file with the opening list
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for the cut sheet (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stock bar length in centimeters
    #[arg(short, long, default_value_t = DEFAULT_BAR_LENGTH_CM)]
    bar_length: u32,

    /// Validate only, don't compute a plan
    #[arg(long)]
    validate: bool,

    /// Output the plan as JSON instead of a cut sheet
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if args.bar_length == 0 {
        anyhow::bail!("Bar length must be positive");
    }

    let config = PlannerConfig::new(args.bar_length);

    info!("Processing: {}", args.input.display());

    let openings = load_openings(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    info!("Loaded {} opening(s)", openings.len());

    // Validate
    let validation = validate_openings(&openings, &config)?;

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    // Expand and pack
    let pieces = expand_openings(&openings);
    let plan = pack_pieces(&pieces, config.bar_length)?;

    info!(
        "Plan ready: {} bar(s), {} cm waste, {:.1}% utilization",
        plan.bar_count(),
        plan.total_waste(),
        plan.utilization_percent()
    );

    // JSON output
    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let report = render_plan(&plan);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &report)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Written: {}", path.display());
        }
        None => print!("{}", report),
    }

    Ok(())
}

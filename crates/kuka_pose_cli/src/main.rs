//! KUKA Pose Chain Report
//!
//! Headless stand-in for the pose viewer: loads a pose list, chains it and
//! prints each frame, the resulting pose and the scene framing.

mod input;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use report::Report;

#[derive(Parser)]
#[command(name = "kuka_pose")]
#[command(about = "Chain KUKA XYZ-ABC poses and report the resulting frames")]
struct Cli {
    /// Pose list, one `{X .., Y .., Z .., A .., B .., C ..}` per line,
    /// optionally followed by `(Inverted)`
    #[arg(short, long)]
    poses: Option<PathBuf>,

    /// Scene settings as JSON
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let sequence = input::load_poses(cli.poses.as_deref())?;
    let settings = input::load_settings(cli.settings.as_deref())?;

    let report = Report::build(&sequence, &settings).context("Failed to chain poses")?;
    info!("Chained {} poses", report.chain.len());

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{}", json);
    } else {
        print!("{}", report.render());
    }

    Ok(())
}

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cropcast",
    version,
    about = "Crop recommendations and yield outlook for Indian locations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend crops and estimate yield for a location
    Predict {
        #[command(flatten)]
        location: LocationArgs,

        /// Score a specific crop instead of the region's common crops
        #[arg(long)]
        crop: Option<String>,
    },
    /// Show the assembled weather, soil and regional inputs
    Estimate {
        #[command(flatten)]
        location: LocationArgs,
    },
    /// List the built-in agricultural regions
    Regions {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct LocationArgs {
    /// Latitude in decimal degrees (with --lon and --name)
    #[arg(long, allow_hyphen_values = true, requires_all = ["lon", "name"])]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees (with --lat and --name)
    #[arg(long, allow_hyphen_values = true, requires_all = ["lat", "name"])]
    pub lon: Option<f64>,

    /// Place name, e.g. "Ludhiana, Punjab" (with --lat and --lon)
    #[arg(long, requires_all = ["lat", "lon"])]
    pub name: Option<String>,

    /// Date to predict for (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Captured provider readings (JSON or YAML)
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

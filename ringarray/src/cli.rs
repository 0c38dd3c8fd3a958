//! Command line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use ringarray_core::allocator::{DEFAULT_MAX_GAP_DEG, DEFAULT_PENETRATION, DEFAULT_TOTAL_STATIONS};
use ringarray_core::estimator::DEFAULT_WINDOW;
use ringarray_core::layout_file::DEFAULT_FILE_NAME;

#[derive(Parser, Debug)]
#[command(name = "ringarray", version, about = "Design two-ring sensor arrays and estimate their depth range", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Design a station layout for a target depth range
    Design(DesignArgs),
    /// Estimate the depth range of an existing station layout
    Estimate(EstimateArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable summary, rounded
    #[default]
    Text,
    /// Full precision JSON
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct DesignArgs {
    /// Shallowest target depth in meters
    #[arg(long)]
    pub zmin: f64,

    /// Deepest target depth in meters
    #[arg(long)]
    pub zmax: f64,

    /// Assumed ratio of penetration depth to station spacing
    #[arg(short, long = "penetration", default_value_t = DEFAULT_PENETRATION)]
    pub penetration: f64,

    /// Maximum azimuthal gap of the inner ring in degrees
    #[arg(long, default_value_t = DEFAULT_MAX_GAP_DEG)]
    pub max_gap: f64,

    /// Total number of available stations
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOTAL_STATIONS)]
    pub stations: usize,

    /// Where to write the station coordinate list
    #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct EstimateArgs {
    /// Station coordinate list, x and y in meters
    #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
    pub input: PathBuf,

    /// Assumed ratio of penetration depth to station spacing
    #[arg(short, long = "penetration", default_value_t = DEFAULT_PENETRATION)]
    pub penetration: f64,

    /// Number of smallest gaps and closest/farthest pairs to average
    #[arg(short, long, default_value_t = DEFAULT_WINDOW)]
    pub window: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

//! Subcommand handlers
//!
//! The handlers own all file access. Geometry is delegated to
//! `ringarray-core`, rendering to [`crate::report`].

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use ringarray_core::{assess, design, format_layout, parse_layout, DesignParameters, EstimatorConfig};

use crate::cli::{Cli, Command, DesignArgs, EstimateArgs};
use crate::report;

/// Run the selected subcommand, writing the report to `out`
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Command::Design(args) => run_design(args, out),
        Command::Estimate(args) => run_estimate(args, out),
    }
}

pub fn run_design(args: &DesignArgs, out: &mut dyn Write) -> Result<()> {
    let params = DesignParameters {
        zmin: args.zmin,
        zmax: args.zmax,
        penetration: args.penetration,
        max_azimuthal_gap_deg: args.max_gap,
        total_stations: args.stations,
    };
    log::debug!("design parameters: {:?}", params);

    let array = design(&params).context("Array design failed")?;

    fs::write(&args.output, format_layout(&array.layout))
        .with_context(|| format!("Failed to write layout to {}", args.output.display()))?;
    log::info!(
        "wrote {} station locations to {}",
        array.layout.len(),
        args.output.display()
    );

    report::write_design(out, &array, &args.output, args.format)
}

pub fn run_estimate(args: &EstimateArgs, out: &mut dyn Write) -> Result<()> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read layout from {}", args.input.display()))?;
    let layout = parse_layout(&text)
        .with_context(|| format!("Invalid layout file {}", args.input.display()))?;
    log::debug!("read {} stations from {}", layout.len(), args.input.display());

    if layout.len() < 6 {
        log::warn!(
            "{} stations is too few for a meaningful estimate, expect a rough approximation",
            layout.len()
        );
    }

    let config = EstimatorConfig {
        window: args.window,
    };
    let assessment = assess(&layout, args.penetration, &config).context("Depth estimation failed")?;

    report::write_assessment(out, &assessment, &args.input, args.format)
}

//! Report rendering for the command line
//!
//! Text reports round for display (gaps to 0.1°, lengths to millimeters);
//! JSON reports carry the full precision values.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use ringarray_core::{ArrayDesign, DepthAssessment};
use serde::Serialize;

use crate::cli::OutputFormat;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DesignReport<'a> {
    output: &'a Path,
    #[serde(flatten)]
    design: &'a ArrayDesign,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EstimateReport<'a> {
    input: &'a Path,
    #[serde(flatten)]
    assessment: &'a DepthAssessment,
}

pub fn write_design(
    out: &mut dyn Write,
    design: &ArrayDesign,
    output: &Path,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &DesignReport { output, design })?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(
                out,
                "Array design: {} stations ({} inner, {} outer)",
                design.layout.len(),
                design.inner.station_count,
                design.outer.station_count
            )?;
            writeln!(out, "  achieved azimuthal gap: {:.1}°", design.achieved_gap_deg)?;
            writeln!(out, "  r_min: {:.3} m", design.rmin())?;
            writeln!(out, "  r_max: {:.3} m", design.rmax())?;
            writeln!(out, "  layout written to {}", output.display())?;
        }
    }
    Ok(())
}

pub fn write_assessment(
    out: &mut dyn Write,
    assessment: &DepthAssessment,
    input: &Path,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &EstimateReport { input, assessment })?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let estimate = &assessment.estimate;
            writeln!(
                out,
                "Depth estimate for {} stations in {} (p = {}, window = {})",
                assessment.station_count,
                input.display(),
                assessment.penetration,
                assessment.window
            )?;
            writeln!(out, "  azimuthal gap: {:.1}°", assessment.gap_deg)?;
            writeln!(out, "  r_min: {:.3} m, r_max: {:.3} m", estimate.rmin, estimate.rmax)?;
            writeln!(out, "  z_min: {:.3} m, z_max: {:.3} m", estimate.zmin, estimate.zmax)?;
        }
    }
    Ok(())
}

//! Depth range estimation for an existing layout
//!
//! Inverts the ring relations of [`crate::allocator`]:
//!
//! ```text
//! zmin = rmin · 4·p · sin(gap)
//! zmax = rmax · 4·p / π
//! ```
//!
//! with `gap` the mean of the smallest angular gaps, `rmin` the mean of the
//! smallest station spacings and `rmax` half the mean of the largest ones.
//!
//! # Assumptions
//!
//! The inversion presumes a roughly two-ring array: the closest pairs stand
//! in for inner-ring neighbours and the farthest pairs for outer-ring
//! diameters. Taking `rmin` as the neighbour spacing is only exact for a
//! six-station inner ring, where the chord between neighbours equals the
//! radius. For other inner-ring sizes, for arrays of fewer than about six
//! stations, or for irregular geometries the result is an approximation.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::coverage::CoverageMetrics;
use crate::error::{ConfigurationError, DegenerateGeometryError, Result};
use crate::geometry::{mean_of_largest, mean_of_smallest};

/// Number of smallest gaps / closest / farthest pairs averaged by default
pub const DEFAULT_WINDOW: usize = 3;

/// Tuning of the inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// How many of the smallest gaps, closest pairs and farthest pairs are
    /// averaged. Uses all available values when there are fewer.
    pub window: usize,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        EstimatorConfig {
            window: DEFAULT_WINDOW,
        }
    }
}

/// Estimated depth range together with the quantities it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthEstimate {
    /// Shallowest resolvable depth in meters
    pub zmin: f64,
    /// Deepest resolvable depth in meters
    pub zmax: f64,
    /// Effective inner radius in meters (approximate unless the inner ring has 6 stations)
    pub rmin: f64,
    /// Effective outer radius in meters
    pub rmax: f64,
    /// Representative azimuthal gap in radians
    pub gap: f64,
    /// Representative closest spacing in meters
    pub dmin: f64,
    /// Representative farthest spacing in meters
    pub dmax: f64,
}

/// Estimate the depth range with the default window of three
pub fn estimate(metrics: &CoverageMetrics, penetration: f64) -> Result<DepthEstimate> {
    estimate_with(metrics, penetration, &EstimatorConfig::default())
}

/// Estimate the depth range averaging `config.window` values per statistic
pub fn estimate_with(
    metrics: &CoverageMetrics,
    penetration: f64,
    config: &EstimatorConfig,
) -> Result<DepthEstimate> {
    if !penetration.is_finite() || penetration <= 0.0 {
        return Err(ConfigurationError::invalid(
            "penetration",
            format!("must be a positive finite number, got {penetration}"),
        )
        .into());
    }
    if config.window == 0 {
        return Err(ConfigurationError::invalid("window", "must be at least 1").into());
    }

    let window = config.window;
    let (Some(gap), Some(dmin), Some(dmax)) = (
        metrics.mean_smallest_gaps(window),
        mean_of_smallest(&metrics.pairwise_distances, window),
        mean_of_largest(&metrics.pairwise_distances, window),
    ) else {
        return Err(DegenerateGeometryError::CoincidentStations.into());
    };

    if metrics.pairwise_distances.len() < 2 * window {
        log::warn!(
            "only {} station spacings for a window of {}, closest and farthest pairs overlap",
            metrics.pairwise_distances.len(),
            window
        );
    }

    let rmax = 0.5 * dmax;
    let rmin = dmin;

    let zmin = rmin * 4.0 * penetration * gap.sin();
    let zmax = rmax * 4.0 * penetration / PI;

    log::debug!(
        "estimate: gap {:.4} rad, dmin {:.3} m, dmax {:.3} m -> z [{:.3}, {:.3}] m",
        gap,
        dmin,
        dmax,
        zmin,
        zmax
    );

    Ok(DepthEstimate {
        zmin,
        zmax,
        rmin,
        rmax,
        gap,
        dmin,
        dmax,
    })
}

//! Forward design and inverse assessment drivers
//!
//! [`design`] turns a target depth range into a station layout;
//! [`assess`] estimates the depth range an existing layout can resolve.

use serde::{Deserialize, Serialize};

use crate::allocator::{DesignParameters, RingSpec};
use crate::coverage::analyze;
use crate::error::{InputDataError, Result};
use crate::estimator::{estimate_with, DepthEstimate, EstimatorConfig};
use crate::geometry::rad_to_deg;
use crate::layout::{generate, Layout};

/// Result of a forward design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayDesign {
    pub parameters: DesignParameters,
    pub inner: RingSpec,
    /// Outer ring including its half-step stagger
    pub outer: RingSpec,
    pub layout: Layout,
    /// Smallest azimuthal gap of the generated layout, in degrees
    pub achieved_gap_deg: f64,
}

impl ArrayDesign {
    /// Inner ring radius in meters
    pub fn rmin(&self) -> f64 {
        self.inner.radius
    }

    /// Outer ring radius in meters
    pub fn rmax(&self) -> f64 {
        self.outer.radius
    }
}

/// Result of an inverse assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthAssessment {
    pub station_count: usize,
    pub penetration: f64,
    pub window: usize,
    /// Representative azimuthal gap in degrees
    pub gap_deg: f64,
    pub estimate: DepthEstimate,
}

/// Allocate rings, place the stations and measure the achieved gap
pub fn design(parameters: &DesignParameters) -> Result<ArrayDesign> {
    let (inner, outer) = parameters.allocate()?;
    let layout = generate(&inner, &outer);
    let metrics = analyze(&layout)?;
    let achieved_gap_deg = metrics
        .min_gap_deg()
        .ok_or(InputDataError::TooFewStations { count: layout.len() })?;

    let design = ArrayDesign {
        parameters: *parameters,
        inner,
        outer: outer.staggered(),
        layout,
        achieved_gap_deg,
    };
    log::info!(
        "designed {} stations ({} inner, {} outer), achieved gap {:.1}°",
        design.layout.len(),
        inner.station_count,
        outer.station_count,
        design.achieved_gap_deg
    );
    Ok(design)
}

/// Measure coverage of `layout` and estimate its depth range
pub fn assess(
    layout: &Layout,
    penetration: f64,
    config: &EstimatorConfig,
) -> Result<DepthAssessment> {
    let metrics = analyze(layout)?;
    let estimate = estimate_with(&metrics, penetration, config)?;

    log::info!(
        "{} stations resolve depths between {:.3} m and {:.3} m",
        layout.len(),
        estimate.zmin,
        estimate.zmax
    );
    Ok(DepthAssessment {
        station_count: layout.len(),
        penetration,
        window: config.window,
        gap_deg: rad_to_deg(estimate.gap),
        estimate,
    })
}

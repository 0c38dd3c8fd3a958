//! Azimuthal coverage and inter-station spacing
//!
//! Works on any layout, designed or measured. Azimuths are taken from the
//! array center (the coordinate origin) using the compass convention of
//! [`crate::geometry`].

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::error::{DegenerateGeometryError, InputDataError, Result};
use crate::geometry::{mean_of_smallest, rad_to_deg, Station};
use crate::layout::Layout;

/// Stations closer than this to the center have no usable azimuth
const ORIGIN_TOLERANCE: f64 = 1e-9;

/// Azimuths within this many radians (modulo π) lie on the same center line
const COLLINEAR_TOLERANCE: f64 = 1e-9;

/// Coverage summary of a layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageMetrics {
    /// Gaps between azimuthally adjacent stations in radians, ascending.
    /// Includes the wraparound gap and sums to 2π.
    pub sorted_angular_gaps: Vec<f64>,
    /// Distance of every unordered pair of non-coincident stations in
    /// meters, ascending.
    pub pairwise_distances: Vec<f64>,
}

impl CoverageMetrics {
    /// Smallest angular gap in radians, reported as the achieved gap of a design
    pub fn min_gap(&self) -> Option<f64> {
        self.sorted_angular_gaps.first().copied()
    }

    /// Mean of the `k` smallest gaps in radians, used for depth estimation
    pub fn mean_smallest_gaps(&self, k: usize) -> Option<f64> {
        mean_of_smallest(&self.sorted_angular_gaps, k)
    }

    pub fn min_gap_deg(&self) -> Option<f64> {
        self.min_gap().map(rad_to_deg)
    }
}

/// Compute gaps and spacings for `layout`.
///
/// # Errors
///
/// - [`InputDataError::TooFewStations`] for fewer than 2 stations
/// - [`InputDataError::NonFiniteCoordinate`] for NaN or infinite coordinates
/// - [`DegenerateGeometryError::StationAtOrigin`] when a station sits on the
///   center and has no azimuth
/// - [`DegenerateGeometryError::CoincidentStations`] when every station is
///   at the same position
/// - [`DegenerateGeometryError::CollinearThroughOrigin`] when all stations
///   lie on one line through the center, leaving at most two bearings
pub fn analyze(layout: &Layout) -> Result<CoverageMetrics> {
    validate(layout)?;

    let sorted_angular_gaps = angular_gaps(layout.stations());
    let pairwise_distances = pairwise_distances(layout.stations());
    if pairwise_distances.is_empty() {
        return Err(DegenerateGeometryError::CoincidentStations.into());
    }

    log::debug!(
        "coverage of {} stations: min gap {:.1}°, {} distances in [{:.3}, {:.3}] m",
        layout.len(),
        rad_to_deg(sorted_angular_gaps[0]),
        pairwise_distances.len(),
        pairwise_distances[0],
        pairwise_distances[pairwise_distances.len() - 1]
    );

    Ok(CoverageMetrics {
        sorted_angular_gaps,
        pairwise_distances,
    })
}

fn validate(layout: &Layout) -> Result<()> {
    if layout.len() < 2 {
        return Err(InputDataError::TooFewStations {
            count: layout.len(),
        }
        .into());
    }
    for (index, station) in layout.iter().enumerate() {
        if !station.is_finite() {
            return Err(InputDataError::NonFiniteCoordinate { index }.into());
        }
    }
    for (index, station) in layout.iter().enumerate() {
        if station.radius() < ORIGIN_TOLERANCE {
            return Err(DegenerateGeometryError::StationAtOrigin { index }.into());
        }
    }
    let first = layout[0];
    if layout.iter().all(|s| *s == first) {
        return Err(DegenerateGeometryError::CoincidentStations.into());
    }
    if on_one_center_line(layout.stations()) {
        return Err(DegenerateGeometryError::CollinearThroughOrigin.into());
    }
    Ok(())
}

/// True when every azimuth equals the first one modulo π
fn on_one_center_line(stations: &[Station]) -> bool {
    let reference = stations[0].azimuth().rem_euclid(PI);
    stations.iter().all(|s| {
        let diff = (s.azimuth().rem_euclid(PI) - reference).abs();
        diff.min(PI - diff) < COLLINEAR_TOLERANCE
    })
}

/// Circular gaps between sorted station azimuths, ascending.
///
/// The wraparound gap is the arc from the largest azimuth back through north
/// to the smallest one, `2π − (largest − smallest)`.
fn angular_gaps(stations: &[Station]) -> Vec<f64> {
    let mut azimuths: Vec<f64> = stations.iter().map(Station::azimuth).collect();
    azimuths.sort_by(f64::total_cmp);

    let first = azimuths[0];
    let last = azimuths[azimuths.len() - 1];

    let mut gaps: Vec<f64> = azimuths.windows(2).map(|w| w[1] - w[0]).collect();
    gaps.push(TAU - (last - first));
    gaps.sort_by(f64::total_cmp);
    gaps
}

/// Distances of all unordered station pairs, zero distances dropped, ascending
fn pairwise_distances(stations: &[Station]) -> Vec<f64> {
    let n = stations.len();
    let mut distances = Vec::with_capacity(n * (n - 1) / 2);
    for (i, a) in stations.iter().enumerate() {
        for b in &stations[i + 1..] {
            let d = a.distance_to(b);
            if d > 0.0 {
                distances.push(d);
            }
        }
    }
    distances.sort_by(f64::total_cmp);
    distances
}

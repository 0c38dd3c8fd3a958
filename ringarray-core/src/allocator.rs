//! Ring allocation
//!
//! Splits a station budget between an inner and an outer ring and derives
//! both radii from the target depth range and the penetration factor `p`:
//!
//! ```text
//! rmin = zmin / (4·p·sin(π / n_inner))
//! rmax = π·zmax / (4·p)
//! ```
//!
//! The outer radius depends only on the deepest target, never on how many
//! stations end up on the outer ring.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};

/// Default assumed ratio of penetration depth to station spacing
pub const DEFAULT_PENETRATION: f64 = 0.25;

/// Default maximum azimuthal gap of the inner ring, in degrees
pub const DEFAULT_MAX_GAP_DEG: f64 = 60.0;

/// Default total station budget
pub const DEFAULT_TOTAL_STATIONS: usize = 12;

/// One concentric ring of stations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingSpec {
    pub station_count: usize,
    /// Radius in meters
    pub radius: f64,
    /// Azimuth of the first station in radians
    pub phase_offset: f64,
}

impl RingSpec {
    /// Angle between neighbouring stations on this ring, in radians
    pub fn angular_step(&self) -> f64 {
        2.0 * PI / self.station_count as f64
    }

    /// The same ring rotated by half a step
    pub fn staggered(self) -> Self {
        RingSpec {
            phase_offset: 0.5 * self.angular_step(),
            ..self
        }
    }
}

/// Inputs of a forward design
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignParameters {
    /// Shallowest target depth in meters
    pub zmin: f64,
    /// Deepest target depth in meters
    pub zmax: f64,
    /// Penetration depth factor `p`
    pub penetration: f64,
    /// Maximum azimuthal gap allowed on the inner ring, in degrees
    pub max_azimuthal_gap_deg: f64,
    pub total_stations: usize,
}

impl DesignParameters {
    /// Parameters for a depth range, everything else at the defaults
    pub fn new(zmin: f64, zmax: f64) -> Self {
        DesignParameters {
            zmin,
            zmax,
            penetration: DEFAULT_PENETRATION,
            max_azimuthal_gap_deg: DEFAULT_MAX_GAP_DEG,
            total_stations: DEFAULT_TOTAL_STATIONS,
        }
    }

    pub fn with_penetration(mut self, p: f64) -> Self {
        self.penetration = p;
        self
    }

    pub fn with_max_gap(mut self, max_azimuthal_gap_deg: f64) -> Self {
        self.max_azimuthal_gap_deg = max_azimuthal_gap_deg;
        self
    }

    pub fn with_total_stations(mut self, total_stations: usize) -> Self {
        self.total_stations = total_stations;
        self
    }

    pub fn allocate(&self) -> Result<(RingSpec, RingSpec)> {
        allocate(
            self.zmin,
            self.zmax,
            self.penetration,
            self.max_azimuthal_gap_deg,
            self.total_stations,
        )
    }
}

/// Split `total_stations` over two rings and compute their radii.
///
/// Returns `(inner, outer)`, both with a zero phase offset; the outer ring's
/// stagger is applied by [`crate::layout::generate`].
///
/// # Errors
///
/// [`ConfigurationError::InsufficientStations`] when the inner ring needed
/// for `max_azimuthal_gap_deg` leaves no station for the outer ring, and
/// [`ConfigurationError::InvalidParameter`] for out-of-range inputs.
pub fn allocate(
    zmin: f64,
    zmax: f64,
    penetration: f64,
    max_azimuthal_gap_deg: f64,
    total_stations: usize,
) -> Result<(RingSpec, RingSpec)> {
    validate_positive("zmin", zmin)?;
    validate_positive("zmax", zmax)?;
    if zmax <= zmin {
        return Err(ConfigurationError::invalid(
            "zmax",
            format!("must be greater than zmin ({zmax} <= {zmin})"),
        )
        .into());
    }
    validate_positive("penetration", penetration)?;
    if !max_azimuthal_gap_deg.is_finite()
        || max_azimuthal_gap_deg <= 0.0
        || max_azimuthal_gap_deg >= 360.0
    {
        return Err(ConfigurationError::invalid(
            "max_azimuthal_gap_deg",
            format!("must lie in (0, 360), got {max_azimuthal_gap_deg}"),
        )
        .into());
    }
    if total_stations == 0 {
        return Err(ConfigurationError::invalid("total_stations", "must be positive").into());
    }

    let inner_count = (360.0 / max_azimuthal_gap_deg).floor() as usize;
    // A single inner station has no neighbour, sin(π/1) would blow rmin up
    if inner_count < 2 {
        return Err(ConfigurationError::invalid(
            "max_azimuthal_gap_deg",
            format!("{max_azimuthal_gap_deg}° leaves fewer than 2 stations on the inner ring"),
        )
        .into());
    }
    if total_stations <= inner_count {
        return Err(ConfigurationError::InsufficientStations {
            inner: inner_count,
            total: total_stations,
            max_gap_deg: max_azimuthal_gap_deg,
        }
        .into());
    }
    let outer_count = total_stations - inner_count;

    let rmin = zmin / (4.0 * penetration * (PI / inner_count as f64).sin());
    let rmax = (PI * zmax) / (4.0 * penetration);

    log::debug!(
        "allocated {} inner stations at {:.3} m, {} outer stations at {:.3} m",
        inner_count,
        rmin,
        outer_count,
        rmax
    );

    Ok((
        RingSpec {
            station_count: inner_count,
            radius: rmin,
            phase_offset: 0.0,
        },
        RingSpec {
            station_count: outer_count,
            radius: rmax,
            phase_offset: 0.0,
        },
    ))
}

fn validate_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigurationError::invalid(
            name,
            format!("must be a positive finite number, got {value}"),
        )
        .into());
    }
    Ok(())
}

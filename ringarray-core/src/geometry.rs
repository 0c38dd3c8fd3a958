//! Shared geometry for ring arrays
//!
//! All azimuths in this crate follow the compass convention: measured
//! clockwise from the +y axis (north), so a station at azimuth φ and
//! radius r sits at `x = r·sin φ`, `y = r·cos φ`. The inverse is
//! `atan2(x, y)`, not the mathematical `atan2(y, x)`. Persisted layouts rely
//! on this, keep it consistent everywhere.

use std::f64::consts::{PI, TAU};

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A sensor station position in meters, relative to the array center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub x: f64,
    pub y: f64,
}

impl Station {
    pub fn new(x: f64, y: f64) -> Self {
        Station { x, y }
    }

    /// Place a station on a circle of `radius` at compass azimuth `azimuth_rad`
    pub fn from_polar(radius: f64, azimuth_rad: f64) -> Self {
        Station {
            x: radius * azimuth_rad.sin(),
            y: radius * azimuth_rad.cos(),
        }
    }

    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Distance from the array center
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Compass azimuth in `[0, 2π)`
    ///
    /// Meaningless for a station on the origin; callers check for that first.
    pub fn azimuth(&self) -> f64 {
        normalize_azimuth(self.x.atan2(self.y))
    }

    pub fn distance_to(&self, other: &Station) -> f64 {
        nalgebra::distance(&self.position(), &other.position())
    }
}

impl From<Point2<f64>> for Station {
    fn from(p: Point2<f64>) -> Self {
        Station { x: p.x, y: p.y }
    }
}

impl From<(f64, f64)> for Station {
    fn from((x, y): (f64, f64)) -> Self {
        Station { x, y }
    }
}

/// Map any angle in radians into `[0, 2π)`
pub fn normalize_azimuth(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU {
        0.0
    } else {
        a
    }
}

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Mean of the first `k` values of an ascending slice.
///
/// Uses every value when fewer than `k` are available. Returns `None` for an
/// empty slice or `k == 0`.
pub fn mean_of_smallest(sorted: &[f64], k: usize) -> Option<f64> {
    let n = k.min(sorted.len());
    if n == 0 {
        return None;
    }
    Some(sorted[..n].iter().sum::<f64>() / n as f64)
}

/// Mean of the last `k` values of an ascending slice, see [`mean_of_smallest`]
pub fn mean_of_largest(sorted: &[f64], k: usize) -> Option<f64> {
    let n = k.min(sorted.len());
    if n == 0 {
        return None;
    }
    Some(sorted[sorted.len() - n..].iter().sum::<f64>() / n as f64)
}

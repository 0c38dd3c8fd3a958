//! Station layout generation
//!
//! Places stations evenly on each ring. The outer ring is rotated by half of
//! its own angular step so its stations fall between inner-ring bearings
//! instead of directly behind them.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::allocator::RingSpec;
use crate::geometry::Station;

/// An ordered set of stations, inner ring first when generated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    stations: Vec<Station>,
}

impl Layout {
    /// Wrap an arbitrary station list, as read back from a layout file
    pub fn from_stations(stations: Vec<Station>) -> Self {
        Layout { stations }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Station> {
        self.stations.iter()
    }

    /// Largest station distance from the center
    pub fn max_radius(&self) -> f64 {
        self.stations
            .iter()
            .map(Station::radius)
            .fold(0.0, f64::max)
    }
}

impl Index<usize> for Layout {
    type Output = Station;

    fn index(&self, index: usize) -> &Station {
        &self.stations[index]
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a Station;
    type IntoIter = std::slice::Iter<'a, Station>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.iter()
    }
}

impl FromIterator<Station> for Layout {
    fn from_iter<I: IntoIterator<Item = Station>>(iter: I) -> Self {
        Layout {
            stations: iter.into_iter().collect(),
        }
    }
}

/// Stations of one ring, by increasing index, starting at its phase offset
pub fn ring_stations(ring: &RingSpec) -> impl Iterator<Item = Station> + '_ {
    let step = ring.angular_step();
    (0..ring.station_count)
        .map(move |k| Station::from_polar(ring.radius, k as f64 * step + ring.phase_offset))
}

/// Build the two-ring layout.
///
/// The inner ring is used as given; the outer ring always gets the half-step
/// stagger, whatever phase offset it carries on input.
pub fn generate(inner: &RingSpec, outer: &RingSpec) -> Layout {
    let outer = outer.staggered();
    let layout: Layout = ring_stations(inner).chain(ring_stations(&outer)).collect();

    log::trace!(
        "generated layout with {} + {} stations",
        inner.station_count,
        outer.station_count
    );
    layout
}

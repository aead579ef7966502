//! Candidate routes returned by a routing service.

use std::time::Duration;

use geo::{Coord, LineString};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single path between two points with the service's travel estimate.
///
/// Only [`Route::expected_travel_time`] drives route selection; the
/// remaining fields are carried through for display.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use geo::Coord;
/// use waymark_core::Route;
///
/// let route = Route::new(Duration::from_secs(600), 4_200.0)
///     .with_path(vec![Coord { x: -118.3, y: 34.08 }, Coord { x: -118.38, y: 34.08 }])
///     .with_summary("Melrose Avenue");
///
/// assert_eq!(route.expected_travel_time.as_secs(), 600);
/// assert_eq!(route.geometry.0.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Route {
    /// Estimated time to traverse the route.
    pub expected_travel_time: Duration,
    /// Route length in metres.
    pub distance_metres: f64,
    /// Path as longitude/latitude pairs.
    pub geometry: LineString<f64>,
    /// Short label naming the main roads, when the service provides one.
    pub summary: Option<String>,
}

impl Route {
    /// Construct a route with an empty path and no summary.
    #[must_use]
    pub fn new(expected_travel_time: Duration, distance_metres: f64) -> Self {
        Self {
            expected_travel_time,
            distance_metres,
            geometry: LineString::new(Vec::new()),
            summary: None,
        }
    }

    /// Replace the route path.
    #[must_use]
    pub fn with_path(mut self, path: Vec<Coord<f64>>) -> Self {
        self.geometry = LineString::new(path);
        self
    }

    /// Attach a summary label.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

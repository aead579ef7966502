//! OSRM API response types for the Route service.
//!
//! The Route service finds the fastest route between coordinates, optionally
//! with alternatives. Only the fields needed to build
//! [`waymark_core::Route`] values are decoded.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service>

use serde::Deserialize;

/// Status code OSRM uses when no route connects the coordinates.
pub const NO_ROUTE_CODE: &str = "NoRoute";

/// OSRM Route API response.
///
/// The `code` field indicates the response status; `routes` is present on
/// success.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    /// Status code from OSRM.
    ///
    /// Common values:
    /// - `"Ok"` - Request was successful
    /// - `"NoRoute"` - No route between the coordinates
    /// - `"InvalidQuery"` - Invalid query parameters
    /// - `"InvalidValue"` - A parameter value is out of range
    pub code: String,

    /// Optional error message when `code` is not `"Ok"`.
    pub message: Option<String>,

    /// Candidate routes, primary route first.
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

impl RouteResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }

    /// Check if OSRM reported that no route exists.
    #[must_use]
    pub fn is_no_route(&self) -> bool {
        self.code == NO_ROUTE_CODE
    }
}

/// A single OSRM route.
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Estimated travel time in seconds.
    pub duration: f64,
    /// Route length in metres.
    pub distance: f64,
    /// Route path, present when `geometries=geojson` was requested.
    pub geometry: Option<GeoJsonLineString>,
    /// Route legs between consecutive waypoints.
    #[serde(default)]
    pub legs: Vec<OsrmLeg>,
}

/// GeoJSON `LineString` geometry.
#[derive(Debug, Deserialize)]
pub struct GeoJsonLineString {
    /// `[longitude, latitude]` pairs.
    pub coordinates: Vec<[f64; 2]>,
}

/// A leg of an OSRM route.
#[derive(Debug, Deserialize)]
pub struct OsrmLeg {
    /// Names of the most prominent roads on the leg.
    #[serde(default)]
    pub summary: String,
}

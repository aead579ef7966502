//! HTTP-based `DirectionsProvider` using OSRM's Route API.
//!
//! # Example
//!
//! ```no_run
//! use geo::Coord;
//! use waymark_core::{DirectionsRequest, find_fastest_route};
//! use waymark_data::routing::HttpDirectionsProvider;
//!
//! let provider = HttpDirectionsProvider::new("http://localhost:5000")?;
//! let request = DirectionsRequest::new(
//!     Coord { x: -118.32, y: 34.09 },
//!     Coord { x: -118.37, y: 34.08 },
//! );
//! let route = find_fastest_route(&provider, &request)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use geo::Coord;
use url::Url;
use waymark_core::{
    DirectionsError, DirectionsProvider, DirectionsRequest, Route, ServiceError, TransportType,
};

use super::osrm::{OsrmRoute, RouteResponse};
use crate::http::{BlockingJsonClient, HttpProviderConfig, ProviderBuildError};

/// Default OSRM base URL.
pub const DEFAULT_OSRM_BASE_URL: &str = "http://localhost:5000";

/// OSRM routing profile for a transport type.
const fn profile(transport: TransportType) -> &'static str {
    match transport {
        TransportType::Automobile => "driving",
        TransportType::Walking => "foot",
    }
}

/// Directions provider backed by an OSRM server.
///
/// Every candidate OSRM returns is converted to a [`Route`] in the service's
/// order; a `NoRoute` answer becomes an empty list.
#[derive(Debug)]
pub struct HttpDirectionsProvider {
    http: BlockingJsonClient,
}

impl HttpDirectionsProvider {
    /// Create a provider with default configuration.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for the OSRM service (e.g., `"http://localhost:5000"`)
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(&HttpProviderConfig::new(base_url))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn with_config(config: &HttpProviderConfig) -> Result<Self, ProviderBuildError> {
        Ok(Self {
            http: BlockingJsonClient::new(config)?,
        })
    }

    /// Build the OSRM Route API URL for `request`.
    ///
    /// The URL format is:
    /// `{base_url}/route/v1/{profile}/{lon},{lat};{lon},{lat}?alternatives=…&overview=full&geometries=geojson`.
    fn build_route_url(&self, request: &DirectionsRequest) -> Result<Url, ServiceError> {
        let raw = format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.http.base_url(),
            profile(request.transport),
            request.origin.x,
            request.origin.y,
            request.destination.x,
            request.destination.y,
        );
        let mut url = Url::parse(&raw).map_err(|err| ServiceError::Parse {
            message: format!("invalid request URL {raw}: {err}"),
        })?;
        url.query_pairs_mut()
            .append_pair("alternatives", &request.alternatives.to_string())
            .append_pair("overview", "full")
            .append_pair("geometries", "geojson");
        Ok(url)
    }

    /// Convert an OSRM response into candidate routes.
    fn convert_response(response: RouteResponse) -> Result<Vec<Route>, ServiceError> {
        if response.is_no_route() {
            log::info!(
                "OSRM found no route: {}",
                response.message.unwrap_or_default()
            );
            return Ok(Vec::new());
        }
        if !response.is_ok() {
            return Err(ServiceError::Rejected {
                code: response.code,
                message: response.message.unwrap_or_default(),
            });
        }
        response.routes.into_iter().map(convert_route).collect()
    }
}

/// Convert one OSRM route, rejecting durations `Duration` cannot hold.
fn convert_route(route: OsrmRoute) -> Result<Route, ServiceError> {
    let travel_time =
        Duration::try_from_secs_f64(route.duration).map_err(|err| ServiceError::Parse {
            message: format!("invalid route duration {}: {err}", route.duration),
        })?;
    let path = route
        .geometry
        .map(|geometry| {
            geometry
                .coordinates
                .into_iter()
                .map(|[x, y]| Coord { x, y })
                .collect()
        })
        .unwrap_or_default();
    let summaries: Vec<String> = route
        .legs
        .into_iter()
        .map(|leg| leg.summary)
        .filter(|summary| !summary.is_empty())
        .collect();

    let converted = Route::new(travel_time, route.distance).with_path(path);
    Ok(if summaries.is_empty() {
        converted
    } else {
        converted.with_summary(summaries.join("; "))
    })
}

impl DirectionsProvider for HttpDirectionsProvider {
    fn get_routes(&self, request: &DirectionsRequest) -> Result<Vec<Route>, DirectionsError> {
        let url = self.build_route_url(request)?;
        let response: RouteResponse = self.http.get_json(&url)?;
        let routes = Self::convert_response(response)?;
        log::debug!("OSRM returned {} candidate routes", routes.len());
        Ok(routes)
    }
}

//! `PlaceSearchProvider` using the Nominatim search API.

use geo::Coord;
use url::Url;
use waymark_core::{
    AddressComponents, GeocodingError, PlaceSearchProvider, Placemark, SearchQuery, ServiceError,
};

use super::nominatim::{SearchAddress, SearchResult};
use crate::http::{BlockingJsonClient, HttpProviderConfig, ProviderBuildError};

/// Default Nominatim base URL.
pub const DEFAULT_NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Half-width in degrees of the viewbox used to bias results.
const BIAS_HALF_WIDTH_DEGREES: f64 = 0.5;

/// Place search backed by a Nominatim server.
#[derive(Debug)]
pub struct NominatimSearchProvider {
    http: BlockingJsonClient,
}

impl NominatimSearchProvider {
    /// Create a provider with default configuration.
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

    /// Build the search URL for `query`.
    ///
    /// A location bias becomes a `viewbox` around the point; results outside
    /// it are still allowed.
    fn build_search_url(&self, query: &SearchQuery) -> Result<Url, ServiceError> {
        let raw = format!("{}/search", self.http.base_url());
        let mut url = Url::parse(&raw).map_err(|err| ServiceError::Parse {
            message: format!("invalid request URL {raw}: {err}"),
        })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("q", query.text())
                .append_pair("format", "jsonv2")
                .append_pair("addressdetails", "1")
                .append_pair("limit", &query.limit().to_string());
            if let Some(near) = query.bias() {
                pairs.append_pair("viewbox", &viewbox(near));
            }
        }
        Ok(url)
    }
}

/// `left,top,right,bottom` box centred on `near`.
fn viewbox(near: Coord<f64>) -> String {
    format!(
        "{},{},{},{}",
        near.x - BIAS_HALF_WIDTH_DEGREES,
        near.y + BIAS_HALF_WIDTH_DEGREES,
        near.x + BIAS_HALF_WIDTH_DEGREES,
        near.y - BIAS_HALF_WIDTH_DEGREES,
    )
}

fn convert_address(address: SearchAddress) -> AddressComponents {
    AddressComponents {
        street_number: address.house_number,
        street_name: address.road,
        city: address.city.or(address.town).or(address.village),
        sub_region: address.county,
        region: address.state,
    }
}

/// Parse decimal degrees within `-limit..=limit`.
fn parse_degrees(field: &str, value: &str, limit: f64) -> Result<f64, ServiceError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|degrees| (-limit..=limit).contains(degrees))
        .ok_or_else(|| ServiceError::Parse {
            message: format!("invalid {field} {value:?}"),
        })
}

fn convert_result(result: SearchResult) -> Result<Placemark, ServiceError> {
    let location = Coord {
        x: parse_degrees("longitude", &result.lon, 180.0)?,
        y: parse_degrees("latitude", &result.lat, 90.0)?,
    };
    let address = result.address.map(convert_address).unwrap_or_default();
    let placemark = Placemark::new(location, address);
    let name = result
        .name
        .filter(|name| !name.is_empty())
        .or(result.display_name);
    Ok(match name {
        Some(name) => placemark.with_name(name),
        None => placemark,
    })
}

impl PlaceSearchProvider for NominatimSearchProvider {
    fn search(&self, query: &SearchQuery) -> Result<Vec<Placemark>, GeocodingError> {
        let url = self.build_search_url(query)?;
        let results: Vec<SearchResult> = self.http.get_json(&url)?;
        let placemarks = results
            .into_iter()
            .map(convert_result)
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("Nominatim returned {} places", placemarks.len());
        Ok(placemarks)
    }
}

//! Nominatim search API response types.
//!
//! Requests use `format=jsonv2&addressdetails=1`, so every result carries a
//! structured `address` object alongside the display name.
//!
//! See: <https://nominatim.org/release-docs/latest/api/Search/>

use serde::Deserialize;

/// One entry of a Nominatim search response.
///
/// Coordinates are transmitted as decimal strings.
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    /// Latitude in decimal degrees.
    pub lat: String,
    /// Longitude in decimal degrees.
    pub lon: String,
    /// Short name of the place, empty for bare addresses.
    #[serde(default)]
    pub name: Option<String>,
    /// Full comma-separated description.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Structured address fields.
    #[serde(default)]
    pub address: Option<SearchAddress>,
}

/// Structured address of a Nominatim result.
///
/// Nominatim picks the settlement key by place size, so at most one of
/// `city`, `town` and `village` is normally present.
#[derive(Debug, Default, Deserialize)]
pub struct SearchAddress {
    /// House number.
    pub house_number: Option<String>,
    /// Street name.
    pub road: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// Town name.
    pub town: Option<String>,
    /// Village name.
    pub village: Option<String>,
    /// County name.
    pub county: Option<String>,
    /// State or province.
    pub state: Option<String>,
}

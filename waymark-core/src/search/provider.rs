//! Place search trait and query type.

use std::num::NonZeroU8;

use geo::Coord;

use crate::Placemark;

use super::error::GeocodingError;

/// Number of results requested when the caller does not choose.
pub const DEFAULT_SEARCH_LIMIT: NonZeroU8 = match NonZeroU8::new(10) {
    Some(limit) => limit,
    None => NonZeroU8::MIN,
};

/// Free-text place query, optionally biased towards a location.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::{GeocodingError, SearchQuery};
///
/// let query = SearchQuery::new("coffee")?.near(Coord { x: -0.12, y: 51.5 });
/// assert_eq!(query.text(), "coffee");
/// assert!(query.bias().is_some());
///
/// assert_eq!(SearchQuery::new("   ").unwrap_err(), GeocodingError::EmptyQuery);
/// # Ok::<(), GeocodingError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    text: String,
    near: Option<Coord<f64>>,
    limit: NonZeroU8,
}

impl SearchQuery {
    /// Validate and construct a query.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodingError::EmptyQuery`] when `text` is blank.
    pub fn new(text: impl AsRef<str>) -> Result<Self, GeocodingError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(GeocodingError::EmptyQuery);
        }
        Ok(Self {
            text: trimmed.to_owned(),
            near: None,
            limit: DEFAULT_SEARCH_LIMIT,
        })
    }

    /// Prefer results close to `location`.
    #[must_use]
    pub const fn near(mut self, location: Coord<f64>) -> Self {
        self.near = Some(location);
        self
    }

    /// Cap the number of results.
    #[must_use]
    pub const fn with_limit(mut self, limit: NonZeroU8) -> Self {
        self.limit = limit;
        self
    }

    /// Query text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Location the results should be biased towards.
    #[must_use]
    pub const fn bias(&self) -> Option<Coord<f64>> {
        self.near
    }

    /// Maximum number of results.
    #[must_use]
    pub const fn limit(&self) -> NonZeroU8 {
        self.limit
    }
}

/// Search for places matching a [`SearchQuery`].
///
/// Implementations return at most [`SearchQuery::limit`] placemarks in the
/// service's ranking order. No match is `Ok(vec![])`.
pub trait PlaceSearchProvider {
    /// Return placemarks matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodingError::Service`] when the service cannot be reached
    /// or its response cannot be decoded.
    fn search(&self, query: &SearchQuery) -> Result<Vec<Placemark>, GeocodingError>;
}

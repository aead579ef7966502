use thiserror::Error;

use crate::ServiceError;

/// Errors from [`crate::search::PlaceSearchProvider::search`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodingError {
    /// The query text was empty or whitespace.
    #[error("search query must not be blank")]
    EmptyQuery,
    /// The geocoding service request failed.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

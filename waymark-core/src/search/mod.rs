//! Look up places by free-text query.
//!
//! The [`PlaceSearchProvider`] trait abstracts the external geocoding service.
//! Results come back as [`Placemark`](crate::Placemark) values whose address
//! fields are passed through exactly as the service supplied them.

mod error;
mod provider;

pub use error::GeocodingError;
pub use provider::{DEFAULT_SEARCH_LIMIT, PlaceSearchProvider, SearchQuery};

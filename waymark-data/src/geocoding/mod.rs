//! HTTP-based place search against a Nominatim geocoder.
//!
//! This module provides [`NominatimSearchProvider`], an implementation of
//! [`waymark_core::PlaceSearchProvider`]. Address fields are mapped onto
//! [`waymark_core::AddressComponents`] without normalisation.
//!
//! # Example
//!
//! ```no_run
//! use waymark_core::{PlaceSearchProvider, SearchQuery};
//! use waymark_data::geocoding::NominatimSearchProvider;
//!
//! let provider = NominatimSearchProvider::new("https://nominatim.openstreetmap.org")?;
//! for place in provider.search(&SearchQuery::new("Melrose Place")?)? {
//!     println!("{}: {}", place.title(), place.formatted_address());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod nominatim;
mod provider;

pub use provider::{DEFAULT_NOMINATIM_BASE_URL, NominatimSearchProvider};

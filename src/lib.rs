//! Facade crate for the Waymark mapping helpers.
//!
//! This crate re-exports the core domain types and exposes the network-backed
//! routing and geocoding providers behind the `http` feature.

#![forbid(unsafe_code)]

pub use waymark_core::{
    AddressComponents, DirectionsError, DirectionsProvider, DirectionsRequest, GeocodingError,
    MapSession, OverlayPolicy, PinAnnotation, PlaceSearchProvider, Placemark, Route,
    RouteOverlay, RouteSelectionError, SearchQuery, ServiceError, SessionError, TransportType,
    TravelTime, fastest, find_fastest_route, format_address, pin_subtitle,
};

#[cfg(feature = "test-support")]
pub use waymark_core::test_support;

#[cfg(feature = "http")]
pub use waymark_data::geocoding::NominatimSearchProvider;
#[cfg(feature = "http")]
pub use waymark_data::routing::HttpDirectionsProvider;
#[cfg(feature = "http")]
pub use waymark_data::{HttpProviderConfig, ProviderBuildError};

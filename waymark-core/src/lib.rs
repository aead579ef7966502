//! Core domain types for the Waymark mapping tools.
//!
//! The crate holds the two pure utilities the rest of the workspace is built
//! around, [`format_address`] and [`fastest`], together with the traits that
//! stand in for external routing and geocoding services and the
//! [`MapSession`] that ties them together.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod address;
pub mod directions;
pub mod placemark;
pub mod route;
pub mod search;
pub mod selection;
pub mod service;
pub mod session;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use address::{AddressComponents, format_address, pin_subtitle};
pub use directions::{
    DirectionsError, DirectionsProvider, DirectionsRequest, TransportType, find_fastest_route,
};
pub use placemark::Placemark;
pub use route::Route;
pub use search::{GeocodingError, PlaceSearchProvider, SearchQuery};
pub use selection::{RouteSelectionError, TravelTime, fastest};
pub use service::ServiceError;
pub use session::{MapSession, OverlayPolicy, PinAnnotation, RouteOverlay, SessionError};

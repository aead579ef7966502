//! Network-backed providers for the Waymark core traits.
//!
//! - [`routing`]: directions from an OSRM server.
//! - [`geocoding`]: place search against a Nominatim server.
//!
//! Both providers share the blocking HTTP plumbing in [`http`].

#![forbid(unsafe_code)]

pub mod geocoding;
pub mod http;
pub mod routing;

pub use http::{HttpProviderConfig, ProviderBuildError};

//! HTTP-based directions from an OSRM routing service.
//!
//! This module provides [`HttpDirectionsProvider`], an implementation of
//! [`waymark_core::DirectionsProvider`] that asks the OSRM Route API for a
//! primary route plus alternatives.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use geo::Coord;
//! use waymark_core::{DirectionsProvider, DirectionsRequest};
//! use waymark_data::HttpProviderConfig;
//! use waymark_data::routing::HttpDirectionsProvider;
//!
//! let config = HttpProviderConfig::new("http://localhost:5000")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("my-app/1.0");
//! let provider = HttpDirectionsProvider::with_config(&config)?;
//!
//! let request = DirectionsRequest::new(Coord { x: -0.1, y: 51.5 }, Coord { x: -0.2, y: 51.6 });
//! for route in provider.get_routes(&request)? {
//!     println!("{:?}", route.expected_travel_time);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod osrm;
mod provider;

pub use provider::{DEFAULT_OSRM_BASE_URL, HttpDirectionsProvider};

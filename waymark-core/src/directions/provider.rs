//! Routing service trait and the request it answers.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Route;

use super::error::DirectionsError;

/// How the traveller moves along the route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TransportType {
    /// Driving on public roads.
    #[default]
    Automobile,
    /// Walking.
    Walking,
}

/// Origin and destination for a directions lookup.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::{DirectionsRequest, TransportType};
///
/// let request = DirectionsRequest::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 })
///     .with_transport(TransportType::Walking)
///     .with_alternatives(false);
/// assert_eq!(request.transport, TransportType::Walking);
/// assert!(!request.alternatives);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DirectionsRequest {
    /// Start of the journey.
    pub origin: Coord<f64>,
    /// End of the journey.
    pub destination: Coord<f64>,
    /// Mode of travel.
    pub transport: TransportType,
    /// Ask the service for alternative routes as well as the primary one.
    pub alternatives: bool,
}

impl DirectionsRequest {
    /// Driving request with alternatives enabled.
    #[must_use]
    pub const fn new(origin: Coord<f64>, destination: Coord<f64>) -> Self {
        Self {
            origin,
            destination,
            transport: TransportType::Automobile,
            alternatives: true,
        }
    }

    /// Choose the mode of travel.
    #[must_use]
    pub const fn with_transport(mut self, transport: TransportType) -> Self {
        self.transport = transport;
        self
    }

    /// Enable or disable alternative routes.
    #[must_use]
    pub const fn with_alternatives(mut self, alternatives: bool) -> Self {
        self.alternatives = alternatives;
        self
    }
}

/// Fetch candidate routes for a [`DirectionsRequest`].
///
/// Implementations return every route the service offers, in the service's
/// order. When the service reports that no route exists they must return
/// `Ok(vec![])` rather than an error, so callers can tell "unreachable" apart
/// from a failed request.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use geo::Coord;
/// use waymark_core::{DirectionsError, DirectionsProvider, DirectionsRequest, Route};
///
/// struct StraightLine;
///
/// impl DirectionsProvider for StraightLine {
///     fn get_routes(&self, request: &DirectionsRequest) -> Result<Vec<Route>, DirectionsError> {
///         Ok(vec![Route::new(Duration::from_secs(60), 100.0)
///             .with_path(vec![request.origin, request.destination])])
///     }
/// }
///
/// let request = DirectionsRequest::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 });
/// let routes = StraightLine.get_routes(&request)?;
/// assert_eq!(routes.len(), 1);
/// # Ok::<(), DirectionsError>(())
/// ```
pub trait DirectionsProvider {
    /// Return the candidate routes for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectionsError::Service`] when the service cannot be
    /// reached or rejects the request.
    fn get_routes(&self, request: &DirectionsRequest) -> Result<Vec<Route>, DirectionsError>;
}

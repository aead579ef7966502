//! Fetch candidate routes between two points and pick the fastest.
//!
//! The [`DirectionsProvider`] trait abstracts the external routing service.
//! Callers build a [`DirectionsRequest`] and receive every candidate route the
//! service offers; [`find_fastest_route`] layers route selection on top and
//! turns an empty answer into [`DirectionsError::NoRoutes`].

mod error;
mod provider;

pub use error::DirectionsError;
pub use provider::{DirectionsProvider, DirectionsRequest, TransportType};

use crate::{Route, fastest};

/// Ask `provider` for routes and return the fastest one.
///
/// An empty candidate list is reported as [`DirectionsError::NoRoutes`]
/// before selection is attempted; service failures are returned unchanged.
///
/// # Errors
///
/// Returns [`DirectionsError::NoRoutes`] when the service offers no route and
/// [`DirectionsError::Service`] when the request itself fails.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use geo::Coord;
/// use waymark_core::{
///     DirectionsError, DirectionsProvider, DirectionsRequest, Route, find_fastest_route,
/// };
///
/// struct TwoRoutes;
///
/// impl DirectionsProvider for TwoRoutes {
///     fn get_routes(&self, _request: &DirectionsRequest) -> Result<Vec<Route>, DirectionsError> {
///         Ok(vec![
///             Route::new(Duration::from_secs(900), 12_000.0),
///             Route::new(Duration::from_secs(720), 14_000.0),
///         ])
///     }
/// }
///
/// let request = DirectionsRequest::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 });
/// let route = find_fastest_route(&TwoRoutes, &request)?;
/// assert_eq!(route.expected_travel_time.as_secs(), 720);
/// # Ok::<(), DirectionsError>(())
/// ```
pub fn find_fastest_route<P>(
    provider: &P,
    request: &DirectionsRequest,
) -> Result<Route, DirectionsError>
where
    P: DirectionsProvider + ?Sized,
{
    let routes = provider.get_routes(request)?;
    if routes.is_empty() {
        log::warn!(
            "no routes from {:?} to {:?}",
            request.origin,
            request.destination
        );
        return Err(DirectionsError::NoRoutes);
    }
    let candidates = routes.len();
    let route = fastest(routes)?;
    log::info!(
        "fastest route takes {}s ({candidates} candidates)",
        route.expected_travel_time.as_secs()
    );
    Ok(route)
}

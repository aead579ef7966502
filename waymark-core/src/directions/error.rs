use thiserror::Error;

use crate::{RouteSelectionError, ServiceError};

/// Errors from [`crate::directions::DirectionsProvider::get_routes`] and
/// [`crate::find_fastest_route`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionsError {
    /// The routing service found no route between the two points.
    ///
    /// Typically the destination cannot be reached with the requested
    /// transport type.
    #[error("no route found between origin and destination")]
    NoRoutes,
    /// The routing service request failed.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl From<RouteSelectionError> for DirectionsError {
    fn from(err: RouteSelectionError) -> Self {
        match err {
            RouteSelectionError::EmptyInput => Self::NoRoutes,
        }
    }
}

//! Pick the fastest of several candidate routes.
//!
//! Selection is order-sensitive only for ties: among routes sharing the
//! minimum travel time, the one listed first wins, exactly as if the input
//! had been stably sorted by travel time and the head taken.

use std::time::Duration;

use thiserror::Error;

use crate::Route;

/// Errors from [`fastest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RouteSelectionError {
    /// No candidate routes were supplied.
    ///
    /// An empty list usually means the routing service found no path; callers
    /// should report that upstream rather than invent a default route.
    #[error("at least one candidate route is required")]
    EmptyInput,
}

/// Anything carrying an expected travel time.
pub trait TravelTime {
    /// Estimated time to traverse this candidate.
    fn expected_travel_time(&self) -> Duration;
}

impl TravelTime for Route {
    fn expected_travel_time(&self) -> Duration {
        self.expected_travel_time
    }
}

impl TravelTime for Duration {
    fn expected_travel_time(&self) -> Duration {
        *self
    }
}

impl<T: TravelTime + ?Sized> TravelTime for &T {
    fn expected_travel_time(&self) -> Duration {
        (**self).expected_travel_time()
    }
}

/// Return the candidate with the smallest expected travel time.
///
/// Accepts anything iterable: a slice yields a reference to the winning
/// route, a `Vec` yields the route itself. Ties resolve to the earliest
/// candidate in input order. Inputs are never modified.
///
/// # Errors
///
/// Returns [`RouteSelectionError::EmptyInput`] when `routes` yields nothing.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use waymark_core::{Route, RouteSelectionError, fastest};
///
/// let routes = vec![
///     Route::new(Duration::from_secs(600), 9_000.0),
///     Route::new(Duration::from_secs(300), 7_000.0),
///     Route::new(Duration::from_secs(300), 6_500.0),
/// ];
/// let best = fastest(&routes)?;
/// assert!(std::ptr::eq(best, &routes[1]));
///
/// let none: Vec<Route> = Vec::new();
/// assert_eq!(fastest(none), Err(RouteSelectionError::EmptyInput));
/// # Ok::<(), RouteSelectionError>(())
/// ```
pub fn fastest<I>(routes: I) -> Result<I::Item, RouteSelectionError>
where
    I: IntoIterator,
    I::Item: TravelTime,
{
    // `min_by_key` keeps the first of several equal minimums.
    routes
        .into_iter()
        .min_by_key(TravelTime::expected_travel_time)
        .ok_or(RouteSelectionError::EmptyInput)
}

//! Deterministic providers used by unit and behaviour tests.
//!
//! The stubs answer from canned data and remember the last request they
//! received, so tests can check both sides of a provider call without a
//! running routing or geocoding service.

use std::cell::RefCell;
use std::time::Duration;

use geo::Coord;

use crate::{
    DirectionsError, DirectionsProvider, DirectionsRequest, GeocodingError, PlaceSearchProvider,
    Placemark, Route, SearchQuery, ServiceError,
};

#[derive(Debug, Clone)]
enum StubResponse<T> {
    Items(Vec<T>),
    Error(ServiceError),
}

impl<T: Clone> StubResponse<T> {
    fn answer(&self) -> Result<Vec<T>, ServiceError> {
        match self {
            Self::Items(items) => Ok(items.clone()),
            Self::Error(error) => Err(error.clone()),
        }
    }
}

/// `DirectionsProvider` returning a fixed list of routes or a fixed error.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::test_support::StubDirectionsProvider;
/// use waymark_core::{DirectionsProvider, DirectionsRequest};
///
/// let provider = StubDirectionsProvider::with_travel_times(&[600, 300]);
/// let request = DirectionsRequest::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 });
/// let routes = provider.get_routes(&request).unwrap();
/// assert_eq!(routes.len(), 2);
/// assert_eq!(provider.last_request(), Some(request));
/// ```
#[derive(Debug, Clone)]
pub struct StubDirectionsProvider {
    response: StubResponse<Route>,
    last_request: RefCell<Option<DirectionsRequest>>,
}

impl StubDirectionsProvider {
    /// Provider answering every request with `routes`.
    #[must_use]
    pub const fn with_routes(routes: Vec<Route>) -> Self {
        Self {
            response: StubResponse::Items(routes),
            last_request: RefCell::new(None),
        }
    }

    /// Provider answering with one route per travel time, in order.
    ///
    /// Route `i` is labelled `"candidate {i}"` and is `i + 1` kilometres
    /// long so tests can tell equal-time routes apart.
    #[must_use]
    pub fn with_travel_times(seconds: &[u64]) -> Self {
        let routes = seconds
            .iter()
            .zip(1_u32..)
            .map(|(&secs, km)| {
                Route::new(Duration::from_secs(secs), f64::from(km * 1_000))
                    .with_path(vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }])
                    .with_summary(format!("candidate {}", km - 1))
            })
            .collect();
        Self::with_routes(routes)
    }

    /// Provider failing every request with `error`.
    #[must_use]
    pub const fn with_error(error: ServiceError) -> Self {
        Self {
            response: StubResponse::Error(error),
            last_request: RefCell::new(None),
        }
    }

    /// Most recent request seen by the provider.
    #[must_use]
    pub fn last_request(&self) -> Option<DirectionsRequest> {
        *self.last_request.borrow()
    }
}

impl DirectionsProvider for StubDirectionsProvider {
    fn get_routes(&self, request: &DirectionsRequest) -> Result<Vec<Route>, DirectionsError> {
        self.last_request.replace(Some(*request));
        Ok(self.response.answer()?)
    }
}

/// `PlaceSearchProvider` returning fixed placemarks or a fixed error.
#[derive(Debug, Clone)]
pub struct StubPlaceSearchProvider {
    response: StubResponse<Placemark>,
    last_query: RefCell<Option<SearchQuery>>,
}

impl StubPlaceSearchProvider {
    /// Provider answering every query with `placemarks`.
    ///
    /// Results are truncated to the query's limit.
    #[must_use]
    pub const fn with_placemarks(placemarks: Vec<Placemark>) -> Self {
        Self {
            response: StubResponse::Items(placemarks),
            last_query: RefCell::new(None),
        }
    }

    /// Provider failing every query with `error`.
    #[must_use]
    pub const fn with_error(error: ServiceError) -> Self {
        Self {
            response: StubResponse::Error(error),
            last_query: RefCell::new(None),
        }
    }

    /// Most recent query seen by the provider.
    #[must_use]
    pub fn last_query(&self) -> Option<SearchQuery> {
        self.last_query.borrow().clone()
    }
}

impl PlaceSearchProvider for StubPlaceSearchProvider {
    fn search(&self, query: &SearchQuery) -> Result<Vec<Placemark>, GeocodingError> {
        self.last_query.replace(Some(query.clone()));
        let mut placemarks = self.response.answer()?;
        placemarks.truncate(usize::from(query.limit().get()));
        Ok(placemarks)
    }
}

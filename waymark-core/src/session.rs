//! Explicit state for a "drop a pin, show the fastest route" session.
//!
//! [`MapSession`] owns everything a map screen would otherwise keep in
//! scattered mutable fields: the traveller's last known location, the pin the
//! user selected and the route overlays drawn so far. Rendering is left to the
//! caller, which reads [`MapSession::annotation`] and
//! [`MapSession::overlays`].

use geo::Coord;
use thiserror::Error;

use crate::{
    DirectionsError, DirectionsProvider, DirectionsRequest, Placemark, Route, find_fastest_route,
    pin_subtitle,
};

/// Errors from [`MapSession`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No location fix has been recorded yet.
    #[error("current location is unknown")]
    NoCurrentLocation,
    /// No pin has been dropped yet.
    #[error("no destination pin is selected")]
    NoSelectedPin,
    /// Fetching or selecting a route failed.
    #[error(transparent)]
    Directions(#[from] DirectionsError),
}

/// What happens to earlier route overlays when a new route is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayPolicy {
    /// Remove earlier overlays so only the latest route is drawn.
    #[default]
    Replace,
    /// Keep every route drawn so far.
    Retain,
}

/// Presentation data for a dropped pin.
#[derive(Debug, Clone, PartialEq)]
pub struct PinAnnotation {
    /// Pin position.
    pub coordinate: Coord<f64>,
    /// Placemark name, if any.
    pub title: Option<String>,
    /// `"{city}, {region}"` when both are known.
    pub subtitle: Option<String>,
}

impl PinAnnotation {
    fn for_placemark(placemark: &Placemark) -> Self {
        Self {
            coordinate: placemark.location,
            title: placemark.name.clone(),
            subtitle: pin_subtitle(&placemark.address),
        }
    }
}

/// A route drawn on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOverlay {
    /// Pin the route leads to.
    pub destination: Coord<f64>,
    /// The route itself.
    pub route: Route,
}

/// Mutable state behind a single map view.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use geo::Coord;
/// use waymark_core::{
///     AddressComponents, DirectionsError, DirectionsProvider, DirectionsRequest, MapSession,
///     Placemark, Route,
/// };
///
/// struct OneRoute;
///
/// impl DirectionsProvider for OneRoute {
///     fn get_routes(&self, _request: &DirectionsRequest) -> Result<Vec<Route>, DirectionsError> {
///         Ok(vec![Route::new(Duration::from_secs(480), 3_100.0)])
///     }
/// }
///
/// let mut session = MapSession::new();
/// session.update_location(Coord { x: -118.32, y: 34.09 });
/// session.drop_pin(
///     Placemark::new(
///         Coord { x: -118.37, y: 34.08 },
///         AddressComponents::new().with_city("Los Angeles").with_region("CA"),
///     )
///     .with_name("Melrose Place"),
/// );
///
/// let overlay = session.show_fastest_route(&OneRoute)?;
/// assert_eq!(overlay.route.expected_travel_time.as_secs(), 480);
/// assert_eq!(session.overlays().len(), 1);
/// # Ok::<(), waymark_core::SessionError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapSession {
    current_location: Option<Coord<f64>>,
    selected_pin: Option<Placemark>,
    annotation: Option<PinAnnotation>,
    overlays: Vec<RouteOverlay>,
    overlay_policy: OverlayPolicy,
}

impl MapSession {
    /// Empty session using [`OverlayPolicy::Replace`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty session using the given overlay policy.
    #[must_use]
    pub fn with_overlay_policy(overlay_policy: OverlayPolicy) -> Self {
        Self {
            overlay_policy,
            ..Self::default()
        }
    }

    /// Record a new location fix.
    pub fn update_location(&mut self, location: Coord<f64>) {
        log::debug!("location updated to {location:?}");
        self.current_location = Some(location);
    }

    /// Last known location.
    #[must_use]
    pub const fn current_location(&self) -> Option<Coord<f64>> {
        self.current_location
    }

    /// Select `placemark` as the destination and annotate it.
    ///
    /// Any earlier pin is removed; at most one pin is shown at a time.
    pub fn drop_pin(&mut self, placemark: Placemark) -> &PinAnnotation {
        let annotation = PinAnnotation::for_placemark(&placemark);
        self.selected_pin = Some(placemark);
        self.annotation.insert(annotation)
    }

    /// Currently selected destination.
    #[must_use]
    pub const fn selected_pin(&self) -> Option<&Placemark> {
        self.selected_pin.as_ref()
    }

    /// Annotation for the selected pin.
    #[must_use]
    pub const fn annotation(&self) -> Option<&PinAnnotation> {
        self.annotation.as_ref()
    }

    /// Driving request from the current location to the selected pin.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoSelectedPin`] or
    /// [`SessionError::NoCurrentLocation`] when the session lacks either end
    /// of the journey.
    pub fn directions_request(&self) -> Result<DirectionsRequest, SessionError> {
        let destination = self
            .selected_pin
            .as_ref()
            .ok_or(SessionError::NoSelectedPin)?
            .location;
        let origin = self
            .current_location
            .ok_or(SessionError::NoCurrentLocation)?;
        Ok(DirectionsRequest::new(origin, destination))
    }

    /// Fetch routes to the selected pin and draw the fastest one.
    ///
    /// Earlier overlays are cleared first under [`OverlayPolicy::Replace`].
    /// On failure the overlays are left as they were.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`MapSession::directions_request`], and
    /// [`SessionError::Directions`] when the provider fails or finds no
    /// route.
    pub fn show_fastest_route<P>(&mut self, provider: &P) -> Result<&RouteOverlay, SessionError>
    where
        P: DirectionsProvider + ?Sized,
    {
        let request = self.directions_request()?;
        let route = find_fastest_route(provider, &request)?;
        if self.overlay_policy == OverlayPolicy::Replace {
            self.overlays.clear();
        }
        let overlays = &mut self.overlays;
        overlays.push(RouteOverlay {
            destination: request.destination,
            route,
        });
        // Non-empty after the push.
        Ok(&overlays[overlays.len() - 1])
    }

    /// Route overlays in the order they were drawn.
    #[must_use]
    pub fn overlays(&self) -> &[RouteOverlay] {
        &self.overlays
    }

    /// Remove every route overlay.
    pub fn clear_overlays(&mut self) {
        self.overlays.clear();
    }

    /// Policy applied by [`MapSession::show_fastest_route`].
    #[must_use]
    pub const fn overlay_policy(&self) -> OverlayPolicy {
        self.overlay_policy
    }
}

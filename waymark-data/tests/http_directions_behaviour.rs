//! Behavioural tests for [`HttpDirectionsProvider`] against a canned server.

mod support;

use std::cell::RefCell;
use std::time::Duration;

use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use waymark_core::{DirectionsError, DirectionsRequest, Route, ServiceError, find_fastest_route};
use waymark_data::routing::HttpDirectionsProvider;

use support::CannedServer;

const THREE_ROUTES: &str = r#"{
    "code": "Ok",
    "routes": [
        {"duration": 600.0, "distance": 5200.0,
         "geometry": {"type": "LineString", "coordinates": [[-118.32, 34.09], [-118.37, 34.08]]},
         "legs": [{"summary": "Santa Monica Boulevard"}]},
        {"duration": 540.0, "distance": 6100.0,
         "geometry": {"type": "LineString", "coordinates": [[-118.32, 34.09], [-118.37, 34.08]]},
         "legs": [{"summary": "Melrose Avenue"}]},
        {"duration": 540.0, "distance": 5900.0,
         "geometry": {"type": "LineString", "coordinates": [[-118.32, 34.09], [-118.37, 34.08]]},
         "legs": [{"summary": "Beverly Boulevard"}]}
    ]
}"#;

/// Scenario state shared by every step.
#[derive(Debug, Default)]
struct DirectionsWorld {
    server: RefCell<Option<CannedServer>>,
    result: RefCell<Option<Result<Route, DirectionsError>>>,
}

impl DirectionsWorld {
    fn serve(&self, status: &str, body: &str) {
        *self.server.borrow_mut() = Some(CannedServer::start(status, body));
    }

    fn result(&self) -> Result<Route, DirectionsError> {
        self.result
            .borrow()
            .clone()
            .expect("directions should have been requested")
    }
}

#[fixture]
fn world() -> DirectionsWorld {
    DirectionsWorld::default()
}

// --- Given steps ---

#[given("an OSRM server returning three routes")]
fn server_with_routes(#[from(world)] world: &DirectionsWorld) {
    world.serve("200 OK", THREE_ROUTES);
}

#[given("an OSRM server reporting no route")]
fn server_without_route(#[from(world)] world: &DirectionsWorld) {
    world.serve(
        "400 Bad Request",
        r#"{"code": "NoRoute", "message": "Impossible route between points"}"#,
    );
}

#[given("an OSRM server rejecting the query")]
fn server_rejecting(#[from(world)] world: &DirectionsWorld) {
    world.serve(
        "400 Bad Request",
        r#"{"code": "InvalidQuery", "message": "Query string malformed close to position 28"}"#,
    );
}

#[given("a server failing with an internal error")]
fn server_failing(#[from(world)] world: &DirectionsWorld) {
    world.serve("500 Internal Server Error", "<html>oops</html>");
}

#[given("an OSRM server returning an oversized duration")]
fn server_with_oversized_duration(#[from(world)] world: &DirectionsWorld) {
    world.serve(
        "200 OK",
        r#"{"code": "Ok", "routes": [{"duration": 1e20, "distance": 5200.0, "legs": []}]}"#,
    );
}

// --- When steps ---

#[when("I request driving directions")]
fn request_directions(#[from(world)] world: &DirectionsWorld) {
    let guard = world.server.borrow();
    let server = guard.as_ref().expect("server must be started");
    let provider =
        HttpDirectionsProvider::new(server.base_url()).expect("provider should build");
    let request = DirectionsRequest::new(
        Coord { x: -118.32, y: 34.09 },
        Coord { x: -118.37, y: 34.08 },
    );
    *world.result.borrow_mut() = Some(find_fastest_route(&provider, &request));
}

// --- Then steps ---

#[then("the fastest route takes 540 seconds")]
fn then_fastest(#[from(world)] world: &DirectionsWorld) {
    let route = world.result().expect("expected a route");
    assert_eq!(route.expected_travel_time, Duration::from_secs(540));
    assert_eq!(route.summary.as_deref(), Some("Melrose Avenue"));
    assert_eq!(route.geometry.0.len(), 2);
}

#[then("the request asked for alternatives")]
fn then_alternatives(#[from(world)] world: &DirectionsWorld) {
    let guard = world.server.borrow();
    let server = guard.as_ref().expect("server must be started");
    let requests = server.requests();
    assert_eq!(requests.len(), 1, "expected a single request");
    assert_eq!(
        requests[0],
        "/route/v1/driving/-118.32,34.09;-118.37,34.08\
         ?alternatives=true&overview=full&geometries=geojson"
    );
}

#[then("a no routes error is returned")]
fn then_no_routes(#[from(world)] world: &DirectionsWorld) {
    assert_eq!(world.result(), Err(DirectionsError::NoRoutes));
}

#[then("a rejected request error is returned")]
fn then_rejected(#[from(world)] world: &DirectionsWorld) {
    let result = world.result();
    assert!(
        matches!(
            &result,
            Err(DirectionsError::Service(ServiceError::Rejected { code, .. })) if code == "InvalidQuery"
        ),
        "expected Rejected error, got {result:?}"
    );
}

#[then("an HTTP 500 error is returned")]
fn then_http_error(#[from(world)] world: &DirectionsWorld) {
    let result = world.result();
    assert!(
        matches!(
            &result,
            Err(DirectionsError::Service(ServiceError::Http { status: 500, .. }))
        ),
        "expected HTTP error, got {result:?}"
    );
}

#[then("a parse error is returned")]
fn then_parse_error(#[from(world)] world: &DirectionsWorld) {
    let result = world.result();
    assert!(
        matches!(
            &result,
            Err(DirectionsError::Service(ServiceError::Parse { .. }))
        ),
        "expected parse error, got {result:?}"
    );
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/http_directions.feature", name = $title)]
        fn $fn_name(world: DirectionsWorld) {
            let _ = world;
        }
    };
}

register_scenario!(
    selecting_fastest_route,
    "selecting the fastest of the returned routes"
);
register_scenario!(
    reporting_unreachable_destination,
    "reporting an unreachable destination"
);
register_scenario!(handling_rejected_request, "handling a rejected request");
register_scenario!(handling_server_failure, "handling a server failure");
register_scenario!(
    rejecting_oversized_duration,
    "rejecting an unrepresentable travel time"
);

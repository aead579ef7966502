//! Focused unit tests covering search CLI configuration and output.

use std::num::NonZeroU8;

use super::helpers::{StubSearchBuilder, utf8};
use super::*;
use crate::search::{SearchConfig, config_from_layers_for_test, run_search_with};
use rstest::{fixture, rstest};
use waymark_core::test_support::StubPlaceSearchProvider;
use waymark_core::{AddressComponents, GeocodingError, Placemark, ServiceError};

#[fixture]
fn placemarks() -> Vec<Placemark> {
    let melrose = AddressComponents::new()
        .with_street_number("4")
        .with_street_name("Melrose Place")
        .with_city("Los Angeles")
        .with_region("CA");
    let capitol = AddressComponents::new()
        .with_city("Washington")
        .with_region("DC");
    vec![
        Placemark::new(Coord { x: -118.37, y: 34.08 }, melrose).with_name("Melrose Place"),
        Placemark::new(Coord { x: -77.0, y: 38.9 }, capitol),
    ]
}

fn args(query: &str) -> SearchArgs {
    SearchArgs {
        query: Some(query.to_owned()),
        ..SearchArgs::default()
    }
}

#[rstest]
fn converting_search_without_query_errors() {
    let err = SearchConfig::try_from(SearchArgs::default()).expect_err("missing query");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_SEARCH_QUERY);
            assert_eq!(env, ENV_SEARCH_QUERY);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_blank_query_errors() {
    let err = SearchConfig::try_from(args("   ")).expect_err("blank query");
    match err {
        CliError::Search(GeocodingError::EmptyQuery) => {}
        other => panic!("expected EmptyQuery, found {other:?}"),
    }
}

#[rstest]
fn search_config_applies_defaults() {
    let config = SearchConfig::try_from(args(" coffee ")).expect("config should build");

    assert_eq!(config.query.text(), "coffee");
    assert_eq!(config.query.bias(), None);
    assert_eq!(config.query.limit().get(), 10);
    assert_eq!(
        config.nominatim_base_url,
        "https://nominatim.openstreetmap.org"
    );
}

#[rstest]
fn search_config_applies_bias_and_limit() {
    let args = SearchArgs {
        near: Some("-0.12,51.5".to_owned()),
        limit: Some(3),
        ..args("coffee")
    };

    let config = SearchConfig::try_from(args).expect("config should build");

    assert_eq!(config.query.bias(), Some(Coord { x: -0.12, y: 51.5 }));
    assert_eq!(config.query.limit(), NonZeroU8::new(3).expect("non-zero"));
}

#[rstest]
fn search_config_rejects_zero_limit() {
    let args = SearchArgs {
        limit: Some(0),
        ..args("coffee")
    };

    let err = SearchConfig::try_from(args).expect_err("zero limit should error");
    match err {
        CliError::InvalidLimit => {}
        other => panic!("expected InvalidLimit, found {other:?}"),
    }
}

#[rstest]
fn search_config_rejects_bad_bias() {
    let args = SearchArgs {
        near: Some("somewhere".to_owned()),
        ..args("coffee")
    };

    let err = SearchConfig::try_from(args).expect_err("bad bias should error");
    match err {
        CliError::InvalidCoordinate { field, .. } => assert_eq!(field, ARG_SEARCH_NEAR),
        other => panic!("expected InvalidCoordinate, found {other:?}"),
    }
}

#[rstest]
fn run_search_prints_title_and_address(placemarks: Vec<Placemark>) {
    let builder = StubSearchBuilder::new(StubPlaceSearchProvider::with_placemarks(placemarks));
    let mut stdout = Vec::new();

    run_search_with(args("melrose"), &builder, &mut stdout).expect("search should succeed");

    assert_eq!(
        utf8(stdout),
        "Melrose Place\t4 Melrose Place, Los Angeles CA\nWashington DC\tWashington DC\n"
    );
}

#[rstest]
fn run_search_respects_limit(placemarks: Vec<Placemark>) {
    let builder = StubSearchBuilder::new(StubPlaceSearchProvider::with_placemarks(placemarks));
    let args = SearchArgs {
        limit: Some(1),
        ..args("melrose")
    };
    let mut stdout = Vec::new();

    run_search_with(args, &builder, &mut stdout).expect("search should succeed");

    assert_eq!(utf8(stdout).lines().count(), 1);
}

#[rstest]
fn run_search_prints_nothing_for_no_matches() {
    let builder = StubSearchBuilder::new(StubPlaceSearchProvider::with_placemarks(Vec::new()));
    let mut stdout = Vec::new();

    run_search_with(args("nowhere"), &builder, &mut stdout).expect("search should succeed");

    assert!(stdout.is_empty());
}

#[rstest]
fn run_search_surfaces_service_errors() {
    let failure = ServiceError::Http {
        url: "https://nominatim.openstreetmap.org/search".to_owned(),
        status: 503,
        message: "unavailable".to_owned(),
    };
    let builder = StubSearchBuilder::new(StubPlaceSearchProvider::with_error(failure.clone()));

    let err = run_search_with(args("coffee"), &builder, &mut Vec::new()).expect_err("fail");

    match err {
        CliError::Search(GeocodingError::Service(source)) => assert_eq!(source, failure),
        other => panic!("expected service error, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_prefers_cli_over_environment() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_environment(json!({
        "query": "tea",
        "limit": 2,
        "nominatim_base_url": "http://geo.example.com",
    }));
    composer.push_cli(json!({ "query": "coffee" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.query.text(), "coffee");
    assert_eq!(config.query.limit().get(), 2);
    assert_eq!(config.nominatim_base_url, "http://geo.example.com");
}

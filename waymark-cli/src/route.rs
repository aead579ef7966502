//! Route command implementation for the Waymark CLI.

use std::io::Write;

use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waymark_core::{
    DirectionsProvider, DirectionsRequest, Route, TransportType, find_fastest_route,
};
use waymark_data::routing::{DEFAULT_OSRM_BASE_URL, HttpDirectionsProvider};

use crate::{
    ARG_ROUTE_FROM, ARG_ROUTE_OSRM_BASE_URL, ARG_ROUTE_TO, ARG_ROUTE_TRANSPORT, CliError,
    ENV_ROUTE_FROM, ENV_ROUTE_TO, parse_coordinate,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Ask an OSRM server for a route and its alternatives between \
                 two points, then print the candidate with the shortest \
                 expected travel time as JSON.",
    about = "Find the fastest route"
)]
#[ortho_config(prefix = "WAYMARK")]
pub(crate) struct RouteArgs {
    /// Start point as "longitude,latitude".
    #[arg(long = ARG_ROUTE_FROM, value_name = "lon,lat", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) from: Option<String>,
    /// End point as "longitude,latitude".
    #[arg(long = ARG_ROUTE_TO, value_name = "lon,lat", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) to: Option<String>,
    /// Travel mode: "driving" (default) or "walking".
    #[arg(long = ARG_ROUTE_TRANSPORT, value_name = "mode")]
    #[serde(default)]
    pub(crate) transport: Option<String>,
    /// Base URL for the OSRM server (e.g. "http://localhost:5000").
    #[arg(long = ARG_ROUTE_OSRM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) osrm_base_url: Option<String>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RouteConfig {
    pub(crate) origin: Coord<f64>,
    pub(crate) destination: Coord<f64>,
    pub(crate) transport: TransportType,
    pub(crate) osrm_base_url: String,
}

impl RouteConfig {
    pub(crate) const fn request(&self) -> DirectionsRequest {
        DirectionsRequest::new(self.origin, self.destination).with_transport(self.transport)
    }
}

fn parse_transport(value: &str) -> Result<TransportType, CliError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "driving" | "automobile" | "car" => Ok(TransportType::Automobile),
        "walking" | "foot" => Ok(TransportType::Walking),
        _ => Err(CliError::InvalidTransport {
            value: value.to_owned(),
        }),
    }
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let from = args.from.ok_or(CliError::MissingArgument {
            field: ARG_ROUTE_FROM,
            env: ENV_ROUTE_FROM,
        })?;
        let to = args.to.ok_or(CliError::MissingArgument {
            field: ARG_ROUTE_TO,
            env: ENV_ROUTE_TO,
        })?;
        let transport = args
            .transport
            .as_deref()
            .map(parse_transport)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            origin: parse_coordinate(ARG_ROUTE_FROM, &from)?,
            destination: parse_coordinate(ARG_ROUTE_TO, &to)?,
            transport,
            osrm_base_url: args
                .osrm_base_url
                .unwrap_or_else(|| DEFAULT_OSRM_BASE_URL.to_owned()),
        })
    }
}

/// Builds the directions provider for the current route invocation.
pub(super) trait RouteProviderBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn DirectionsProvider>, CliError>;
}

pub(super) struct OsrmProviderBuilder;

impl RouteProviderBuilder for OsrmProviderBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn DirectionsProvider>, CliError> {
        let provider = HttpDirectionsProvider::new(config.osrm_base_url.clone()).map_err(
            |source| CliError::BuildProvider {
                base_url: config.osrm_base_url.clone(),
                source,
            },
        )?;
        Ok(Box::new(provider))
    }
}

/// JSON shape printed for the chosen route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RouteOutput {
    pub(crate) expected_travel_time_secs: f64,
    pub(crate) distance_metres: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) summary: Option<String>,
    /// `[longitude, latitude]` pairs along the route.
    pub(crate) path: Vec<[f64; 2]>,
}

impl From<&Route> for RouteOutput {
    fn from(route: &Route) -> Self {
        Self {
            expected_travel_time_secs: route.expected_travel_time.as_secs_f64(),
            distance_metres: route.distance_metres,
            summary: route.summary.clone(),
            path: route.geometry.coords().map(|c| [c.x, c.y]).collect(),
        }
    }
}

pub(super) fn run_route(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    run_route_with(args, &OsrmProviderBuilder, writer)
}

pub(super) fn run_route_with(
    args: RouteArgs,
    builder: &dyn RouteProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let provider = builder.build(&config)?;
    let route = find_fastest_route(provider.as_ref(), &config.request())?;
    log::info!(
        "fastest route takes {}s over {:.0}m",
        route.expected_travel_time.as_secs(),
        route.distance_metres
    );
    write_route(writer, &RouteOutput::from(&route))
}

fn write_route(writer: &mut dyn Write, output: &RouteOutput) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(output).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RouteConfig::try_from(merged)
}

//! Command-line interface for the Waymark mapping tools.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use geo::Coord;

mod address;
mod error;
mod route;
mod search;

pub use error::CliError;

use address::{AddressArgs, run_address};
use route::{RouteArgs, run_route};
use search::{SearchArgs, run_search};

pub(crate) const ARG_ROUTE_FROM: &str = "from";
pub(crate) const ARG_ROUTE_TO: &str = "to";
pub(crate) const ARG_ROUTE_TRANSPORT: &str = "transport";
pub(crate) const ARG_ROUTE_OSRM_BASE_URL: &str = "osrm-base-url";
pub(crate) const ARG_SEARCH_QUERY: &str = "query";
pub(crate) const ARG_SEARCH_NEAR: &str = "near";
pub(crate) const ARG_SEARCH_LIMIT: &str = "limit";
pub(crate) const ARG_SEARCH_NOMINATIM_BASE_URL: &str = "nominatim-base-url";
pub(crate) const ENV_ROUTE_FROM: &str = "WAYMARK_CMDS_ROUTE_FROM";
pub(crate) const ENV_ROUTE_TO: &str = "WAYMARK_CMDS_ROUTE_TO";
pub(crate) const ENV_SEARCH_QUERY: &str = "WAYMARK_CMDS_SEARCH_QUERY";

/// Run the Waymark CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments or configuration are invalid, a
/// provider cannot be built, the remote service fails, or output cannot be
/// written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Address(args) => run_address(&args, &mut stdout),
        Command::Route(args) => run_route(args, &mut stdout),
        Command::Search(args) => run_search(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "waymark",
    about = "Format addresses, search for places and find the fastest route",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Format address components as a single line.
    Address(AddressArgs),
    /// Fetch routes from an OSRM server and print the fastest.
    Route(RouteArgs),
    /// Search for places with a Nominatim server.
    Search(SearchArgs),
}

/// Parse a `longitude,latitude` pair in decimal degrees.
pub(crate) fn parse_coordinate(field: &'static str, value: &str) -> Result<Coord<f64>, CliError> {
    let invalid = || CliError::InvalidCoordinate {
        field,
        value: value.to_owned(),
    };
    let (lon, lat) = value.split_once(',').ok_or_else(invalid)?;
    let x: f64 = lon.trim().parse().map_err(|_| invalid())?;
    let y: f64 = lat.trim().parse().map_err(|_| invalid())?;
    if !(-180.0..=180.0).contains(&x) || !(-90.0..=90.0).contains(&y) {
        return Err(invalid());
    }
    Ok(Coord { x, y })
}

#[cfg(test)]
mod tests;

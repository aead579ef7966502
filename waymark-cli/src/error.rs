//! Error types emitted by the Waymark CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use thiserror::Error;
use waymark_core::{DirectionsError, GeocodingError};
use waymark_data::ProviderBuildError;

/// Errors emitted by the Waymark CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A coordinate option was not a valid `longitude,latitude` pair.
    #[error("invalid {field} coordinate {value:?}: expected \"longitude,latitude\" in degrees")]
    InvalidCoordinate {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Value as supplied.
        value: String,
    },
    /// The transport option named an unknown mode.
    #[error("unknown transport {value:?}: expected \"driving\" or \"walking\"")]
    InvalidTransport {
        /// Value as supplied.
        value: String,
    },
    /// The search result limit was zero.
    #[error("limit must be at least 1")]
    InvalidLimit,
    /// Constructing an HTTP provider failed.
    #[error("failed to build provider for {base_url:?}: {source}")]
    BuildProvider {
        /// Configured service URL.
        base_url: String,
        /// Underlying construction failure.
        #[source]
        source: ProviderBuildError,
    },
    /// The search query was rejected or the search failed.
    #[error("search failed: {0}")]
    Search(#[from] GeocodingError),
    /// Fetching directions failed or found no route.
    #[error("directions failed: {0}")]
    Directions(#[from] DirectionsError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

//! Search command implementation for the Waymark CLI.

use std::io::Write;
use std::num::NonZeroU8;

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waymark_core::{PlaceSearchProvider, Placemark, SearchQuery};
use waymark_data::geocoding::{DEFAULT_NOMINATIM_BASE_URL, NominatimSearchProvider};

use crate::{
    ARG_SEARCH_LIMIT, ARG_SEARCH_NEAR, ARG_SEARCH_NOMINATIM_BASE_URL, ARG_SEARCH_QUERY, CliError,
    ENV_SEARCH_QUERY, parse_coordinate,
};

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Look up places matching free text with a Nominatim server \
                 and print one line per result: the place title, a tab, then \
                 its formatted address.",
    about = "Search for places"
)]
#[ortho_config(prefix = "WAYMARK")]
pub(crate) struct SearchArgs {
    /// Free-text query, e.g. "coffee".
    #[arg(value_name = "query")]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Bias results towards "longitude,latitude".
    #[arg(long = ARG_SEARCH_NEAR, value_name = "lon,lat", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) near: Option<String>,
    /// Maximum number of results (1-255, default 10).
    #[arg(long = ARG_SEARCH_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<u8>,
    /// Base URL for the Nominatim server.
    #[arg(long = ARG_SEARCH_NOMINATIM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) nominatim_base_url: Option<String>,
}

impl SearchArgs {
    pub(crate) fn into_config(self) -> Result<SearchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SearchConfig::try_from(merged)
    }
}

/// Resolved `search` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchConfig {
    pub(crate) query: SearchQuery,
    pub(crate) nominatim_base_url: String,
}

impl TryFrom<SearchArgs> for SearchConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        let text = args.query.ok_or(CliError::MissingArgument {
            field: ARG_SEARCH_QUERY,
            env: ENV_SEARCH_QUERY,
        })?;
        let mut query = SearchQuery::new(text)?;
        if let Some(near) = args.near {
            query = query.near(parse_coordinate(ARG_SEARCH_NEAR, &near)?);
        }
        if let Some(limit) = args.limit {
            query = query.with_limit(NonZeroU8::new(limit).ok_or(CliError::InvalidLimit)?);
        }

        Ok(Self {
            query,
            nominatim_base_url: args
                .nominatim_base_url
                .unwrap_or_else(|| DEFAULT_NOMINATIM_BASE_URL.to_owned()),
        })
    }
}

/// Builds the place search provider for the current search invocation.
pub(super) trait SearchProviderBuilder {
    fn build(&self, config: &SearchConfig) -> Result<Box<dyn PlaceSearchProvider>, CliError>;
}

pub(super) struct NominatimProviderBuilder;

impl SearchProviderBuilder for NominatimProviderBuilder {
    fn build(&self, config: &SearchConfig) -> Result<Box<dyn PlaceSearchProvider>, CliError> {
        let provider = NominatimSearchProvider::new(config.nominatim_base_url.clone()).map_err(
            |source| CliError::BuildProvider {
                base_url: config.nominatim_base_url.clone(),
                source,
            },
        )?;
        Ok(Box::new(provider))
    }
}

pub(super) fn run_search(args: SearchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    run_search_with(args, &NominatimProviderBuilder, writer)
}

pub(super) fn run_search_with(
    args: SearchArgs,
    builder: &dyn SearchProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let provider = builder.build(&config)?;
    let placemarks = provider.search(&config.query)?;
    log::info!(
        "{} places matched {:?}",
        placemarks.len(),
        config.query.text()
    );
    write_placemarks(writer, &placemarks)
}

fn write_placemarks(writer: &mut dyn Write, placemarks: &[Placemark]) -> Result<(), CliError> {
    for placemark in placemarks {
        writeln!(
            writer,
            "{}\t{}",
            placemark.title(),
            placemark.formatted_address()
        )
        .map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SearchConfig, CliError> {
    let merged = SearchArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SearchConfig::try_from(merged)
}

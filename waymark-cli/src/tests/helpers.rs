//! Provider builders handing canned stubs to the command runners.

use std::cell::RefCell;

use waymark_core::test_support::{StubDirectionsProvider, StubPlaceSearchProvider};
use waymark_core::{DirectionsProvider, PlaceSearchProvider};

use crate::CliError;
use crate::route::{RouteConfig, RouteProviderBuilder};
use crate::search::{SearchConfig, SearchProviderBuilder};

/// Hands out clones of a stub directions provider and records the resolved
/// configuration it was asked to build for.
pub(super) struct StubRouteBuilder {
    provider: StubDirectionsProvider,
    pub(super) config: RefCell<Option<RouteConfig>>,
}

impl StubRouteBuilder {
    pub(super) const fn new(provider: StubDirectionsProvider) -> Self {
        Self {
            provider,
            config: RefCell::new(None),
        }
    }
}

impl RouteProviderBuilder for StubRouteBuilder {
    fn build(&self, config: &RouteConfig) -> Result<Box<dyn DirectionsProvider>, CliError> {
        self.config.replace(Some(config.clone()));
        Ok(Box::new(self.provider.clone()))
    }
}

/// Search counterpart of [`StubRouteBuilder`].
pub(super) struct StubSearchBuilder {
    provider: StubPlaceSearchProvider,
    pub(super) config: RefCell<Option<SearchConfig>>,
}

impl StubSearchBuilder {
    pub(super) const fn new(provider: StubPlaceSearchProvider) -> Self {
        Self {
            provider,
            config: RefCell::new(None),
        }
    }
}

impl SearchProviderBuilder for StubSearchBuilder {
    fn build(&self, config: &SearchConfig) -> Result<Box<dyn PlaceSearchProvider>, CliError> {
        self.config.replace(Some(config.clone()));
        Ok(Box::new(self.provider.clone()))
    }
}

/// Collect writer output as UTF-8.
pub(super) fn utf8(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).expect("stdout utf-8")
}

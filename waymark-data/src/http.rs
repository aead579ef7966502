//! Blocking JSON-over-HTTP client shared by the providers.
//!
//! The core provider traits are synchronous so the domain crate stays
//! embeddable in synchronous contexts. [`BlockingJsonClient`] bridges the
//! async `reqwest` client to that interface by blocking on a Tokio runtime it
//! owns.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;
use waymark_core::ServiceError;

/// Error type for provider construction failures.
#[derive(Debug)]
pub enum ProviderBuildError {
    /// The configured base URL is not a valid absolute URL.
    InvalidBaseUrl(url::ParseError),
    /// Failed to build the HTTP client.
    HttpClient(reqwest::Error),
    /// Failed to build the Tokio runtime.
    Runtime(std::io::Error),
}

impl std::fmt::Display for ProviderBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBaseUrl(err) => write!(f, "invalid base URL: {err}"),
            Self::HttpClient(err) => write!(f, "failed to build HTTP client: {err}"),
            Self::Runtime(err) => write!(f, "failed to build Tokio runtime: {err}"),
        }
    }
}

impl std::error::Error for ProviderBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidBaseUrl(err) => Some(err),
            Self::HttpClient(err) => Some(err),
            Self::Runtime(err) => Some(err),
        }
    }
}

/// Default user agent for outgoing requests.
///
/// Public Nominatim instances reject requests without an identifying agent.
pub const DEFAULT_USER_AGENT: &str = "waymark/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for an HTTP provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpProviderConfig {
    /// Base URL of the service (e.g., `"http://localhost:5000"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl HttpProviderConfig {
    /// Create a configuration for the service at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Synchronous JSON `GET` client.
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime the client blocks on its own current-thread
/// runtime. Inside a multi-threaded runtime it uses that runtime's handle via
/// [`tokio::task::block_in_place`]. Inside a `current_thread` runtime it
/// falls back to its own runtime, which may deadlock if the caller's runtime
/// drives IO this request depends on.
pub(crate) struct BlockingJsonClient {
    client: Client,
    runtime: Runtime,
    base_url: Url,
    timeout: Duration,
}

impl std::fmt::Debug for BlockingJsonClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingJsonClient")
            .field("client", &self.client)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl BlockingJsonClient {
    pub(crate) fn new(config: &HttpProviderConfig) -> Result<Self, ProviderBuildError> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))
            .map_err(ProviderBuildError::InvalidBaseUrl)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            runtime,
            base_url,
            timeout: config.timeout,
        })
    }

    /// Base URL without a trailing slash.
    pub(crate) fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Fetch `url` and decode the body as `T`.
    ///
    /// Non-success responses whose body still decodes as `T` are returned as
    /// `Ok`, since some services (OSRM) report failures inside a JSON
    /// envelope with a 4xx status.
    pub(crate) fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ServiceError> {
        let future = self.get_json_async(url);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }

    async fn get_json_async<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ServiceError> {
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?;

        match serde_json::from_slice::<T>(&body) {
            Ok(decoded) => Ok(decoded),
            Err(_) if !status.is_success() => Err(ServiceError::Http {
                url: url.to_string(),
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_owned(),
            }),
            Err(err) => Err(ServiceError::Parse {
                message: err.to_string(),
            }),
        }
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &Url) -> ServiceError {
        if error.is_timeout() {
            return ServiceError::Timeout {
                url: url.to_string(),
                timeout_secs: self.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return ServiceError::Http {
                url: url.to_string(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        ServiceError::Network {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

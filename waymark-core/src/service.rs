//! Failures reported by external routing and geocoding services.

use thiserror::Error;

/// A request to an external service failed.
///
/// Shared by [`DirectionsError`](crate::DirectionsError) and
/// [`GeocodingError`](crate::GeocodingError); the core never retries or
/// interprets these, it only passes them to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The service could not be reached.
    #[error("network error contacting {url}: {message}")]
    Network {
        /// Request URL.
        url: String,
        /// Underlying transport message.
        message: String,
    },
    /// The request did not complete in time.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL.
        url: String,
        /// Configured timeout in whole seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}: {message}")]
    Http {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Status description.
        message: String,
    },
    /// The service understood the request but refused it.
    #[error("service rejected request ({code}): {message}")]
    Rejected {
        /// Service-specific status code, e.g. `"InvalidQuery"`.
        code: String,
        /// Human-readable explanation.
        message: String,
    },
    /// The response body could not be interpreted.
    #[error("failed to parse service response: {message}")]
    Parse {
        /// Description of the decoding failure.
        message: String,
    },
}

//! Error types for the internal rate-fetching paths.
//!
//! [`RateError`] is the currency of the fallible fetch functions inside this
//! crate. It never crosses the public [`RateProvider`](crate::RateProvider)
//! boundary: resolution absorbs every failure into the static fallback.

use thiserror::Error;

/// Errors that can occur while fetching a rate from a remote endpoint.
#[derive(Error, Debug)]
pub enum RateError {
    /// The request to the endpoint timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The endpoint answered, but the payload was not usable.
    /// A missing, non-numeric, or non-positive rate lands here.
    #[error("Malformed response: {provider} - {message}")]
    MalformedResponse {
        /// The provider that returned the payload
        provider: String,
        /// Description of what was wrong with it
        message: String,
    },

    /// The endpoint answered with a non-success HTTP status.
    #[error("Unexpected status {status}: {provider}")]
    UnexpectedStatus {
        /// The provider that returned the status
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// A transport-level error occurred while talking to the endpoint.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl RateError {
    /// Whether the secondary latest-rates lookup should be attempted.
    ///
    /// Only an answered-but-unusable response is worth a second endpoint:
    /// the service is reachable, the convert payload just wasn't usable.
    /// Transport errors and timeouts skip straight to the static fallback -
    /// each attempt is already bounded by the request timeout and there is
    /// no retry loop.
    pub fn triggers_secondary_lookup(&self) -> bool {
        matches!(
            self,
            Self::MalformedResponse { .. } | Self::UnexpectedStatus { .. }
        )
    }
}

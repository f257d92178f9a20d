//! Rate provider trait definition.

use async_trait::async_trait;

use crate::models::{ExchangeRate, RatesSnapshot};

/// Trait for exchange-rate sources.
///
/// Implementations are infallible by contract: a caller always gets a
/// rate back, and the [`RateSource`](crate::RateSource) on the returned
/// record says whether it came from the network or the fallback table.
/// Currency codes are treated as opaque strings; an unknown code is a
/// degraded lookup, not an error.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Used for logging and diagnostics.
    fn id(&self) -> &'static str;

    /// Resolve the rate for one unit of `base` expressed in `target`.
    ///
    /// Equal codes short-circuit to an exact identity rate without
    /// performing any I/O.
    async fn resolve_rate(&self, base: &str, target: &str) -> ExchangeRate;

    /// Fetch the full latest-rates table for `base`.
    async fn latest_rates(&self, base: &str) -> RatesSnapshot;
}

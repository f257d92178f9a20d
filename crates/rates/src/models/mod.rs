//! Rate domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where a rate came from.
///
/// The live/estimated signal travels with the data instead of being
/// reconstructed by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateSource {
    /// Fetched from a remote endpoint during this resolution.
    Live,
    /// Read off the static fallback table; an estimate, not a quote.
    Static,
    /// Base and target are the same currency; the rate is exactly one.
    Identity,
}

impl RateSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateSource::Live => "LIVE",
            RateSource::Static => "STATIC",
            RateSource::Identity => "IDENTITY",
        }
    }

    /// Whether the rate reflects the market rather than the fallback table.
    pub fn is_live(&self) -> bool {
        !matches!(self, RateSource::Static)
    }
}

/// A single exchange rate between two currencies.
///
/// Transient: fetched per calculation request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub base: String,
    pub target: String,
    pub rate: Decimal,
    pub timestamp: DateTime<Utc>,
    pub date: NaiveDate,
    pub source: RateSource,
}

impl ExchangeRate {
    /// The exact rate-1 record for a currency against itself.
    pub fn identity(currency: &str) -> Self {
        let now = Utc::now();
        Self {
            base: currency.to_string(),
            target: currency.to_string(),
            rate: Decimal::ONE,
            timestamp: now,
            date: now.date_naive(),
            source: RateSource::Identity,
        }
    }
}

/// A full latest-rates table for one base currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatesSnapshot {
    pub base: String,
    pub rates: HashMap<String, Decimal>,
    pub timestamp: DateTime<Utc>,
    pub date: NaiveDate,
    pub source: RateSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_rate_is_exactly_one() {
        let rate = ExchangeRate::identity("USD");
        assert_eq!(rate.base, "USD");
        assert_eq!(rate.target, "USD");
        assert_eq!(rate.rate, Decimal::ONE);
        assert_eq!(rate.source, RateSource::Identity);
    }

    #[test]
    fn test_rate_source_liveness() {
        assert!(RateSource::Live.is_live());
        assert!(RateSource::Identity.is_live());
        assert!(!RateSource::Static.is_live());
    }

    #[test]
    fn test_rate_source_as_str() {
        assert_eq!(RateSource::Live.as_str(), "LIVE");
        assert_eq!(RateSource::Static.as_str(), "STATIC");
        assert_eq!(RateSource::Identity.as_str(), "IDENTITY");
    }
}

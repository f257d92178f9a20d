//! HTTP rate provider for an exchangerate.host-style API.
//!
//! Two endpoints are used:
//! - `/convert?from={base}&to={target}` returning `{"result": 1.08, "date": "..."}`
//! - `/latest?base={base}&symbols={target}` returning `{"rates": {...}, "base": "...", "date": "..."}`
//!
//! The convert endpoint is tried first. A response that arrives but is not
//! usable (missing or non-positive result, non-success status) moves the
//! lookup to the latest-rates endpoint; transport errors and timeouts do
//! not, since each attempt is already bounded by the request timeout and
//! there is no retry loop. Whatever remains unresolved is read off the
//! static table.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::{error, warn};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::RateError;
use crate::fallback::StaticRateTable;
use crate::models::{ExchangeRate, RateSource, RatesSnapshot};
use crate::provider::RateProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "EXCHANGE_RATE_HOST";

/// Default API base URL
const DEFAULT_BASE_URL: &str = "https://api.exchangerate.host";

/// Each network attempt is bounded by this; on expiry the lookup moves on
/// instead of blocking further.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Response from the convert endpoint.
#[derive(Debug, Deserialize)]
struct ConvertResponse {
    result: Option<f64>,
    date: Option<NaiveDate>,
}

/// Response from the latest-rates endpoint.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    #[serde(default)]
    rates: HashMap<String, f64>,
    #[allow(dead_code)]
    base: Option<String>,
    date: Option<NaiveDate>,
}

/// HTTP rate provider with a deterministic offline floor.
///
/// # Example
///
/// ```ignore
/// use pipcalc_rates::{ExchangeHostProvider, RateProvider};
///
/// let provider = ExchangeHostProvider::new();
/// let rate = provider.resolve_rate("JPY", "USD").await;
/// ```
pub struct ExchangeHostProvider {
    client: Client,
    base_url: String,
    access_key: Option<String>,
    fallback: StaticRateTable,
}

impl Default for ExchangeHostProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ExchangeHostProvider {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            access_key: None,
            fallback: StaticRateTable::new(),
        }
    }

    /// Point the provider at a different API host. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Attach an API access key, sent as the `access_key` query parameter.
    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    fn classify(err: reqwest::Error) -> RateError {
        if err.is_timeout() {
            RateError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            RateError::Network(err)
        }
    }

    fn malformed(message: impl Into<String>) -> RateError {
        RateError::MalformedResponse {
            provider: PROVIDER_ID.to_string(),
            message: message.into(),
        }
    }

    fn query_params<'a>(&'a self, params: &[(&'a str, &'a str)]) -> Vec<(&'a str, String)> {
        let mut query: Vec<(&str, String)> = params
            .iter()
            .map(|(name, value)| (*name, (*value).to_string()))
            .collect();
        if let Some(key) = &self.access_key {
            query.push(("access_key", key.clone()));
        }
        query
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, RateError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(&self.query_params(params))
            .send()
            .await
            .map_err(Self::classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::UnexpectedStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Self::malformed(e.to_string()))
    }

    fn parse_rate(raw: f64) -> Result<Decimal, RateError> {
        let rate =
            Decimal::try_from(raw).map_err(|_| Self::malformed(format!("unusable rate {raw}")))?;
        if rate <= Decimal::ZERO {
            return Err(Self::malformed(format!("non-positive rate {raw}")));
        }
        Ok(rate)
    }

    /// Direct conversion quote for `base` -> `target`.
    async fn fetch_convert(&self, base: &str, target: &str) -> Result<ExchangeRate, RateError> {
        let payload: ConvertResponse = self
            .get_json("convert", &[("from", base), ("to", target)])
            .await?;

        let raw = payload
            .result
            .ok_or_else(|| Self::malformed("missing result"))?;
        let rate = Self::parse_rate(raw)?;

        let now = Utc::now();
        Ok(ExchangeRate {
            base: base.to_string(),
            target: target.to_string(),
            rate,
            timestamp: now,
            date: payload.date.unwrap_or_else(|| now.date_naive()),
            source: RateSource::Live,
        })
    }

    /// Secondary lookup: latest rates for `base`, filtered to `target`.
    async fn fetch_latest_rate(&self, base: &str, target: &str) -> Result<ExchangeRate, RateError> {
        let payload: LatestRatesResponse = self
            .get_json("latest", &[("base", base), ("symbols", target)])
            .await?;

        let raw = payload
            .rates
            .get(target)
            .copied()
            .ok_or_else(|| Self::malformed(format!("rate for {target} missing")))?;
        let rate = Self::parse_rate(raw)?;

        let now = Utc::now();
        Ok(ExchangeRate {
            base: base.to_string(),
            target: target.to_string(),
            rate,
            timestamp: now,
            date: payload.date.unwrap_or_else(|| now.date_naive()),
            source: RateSource::Live,
        })
    }

    /// Full latest-rates table for `base`.
    async fn fetch_latest_snapshot(&self, base: &str) -> Result<RatesSnapshot, RateError> {
        let payload: LatestRatesResponse = self.get_json("latest", &[("base", base)]).await?;

        if payload.rates.is_empty() {
            return Err(Self::malformed("empty rates table"));
        }

        let mut rates = HashMap::with_capacity(payload.rates.len());
        for (code, raw) in payload.rates {
            match Self::parse_rate(raw) {
                Ok(rate) => {
                    rates.insert(code, rate);
                }
                Err(e) => warn!("dropping unusable rate for {}: {}", code, e),
            }
        }
        if rates.is_empty() {
            return Err(Self::malformed("no usable rates in table"));
        }

        let now = Utc::now();
        Ok(RatesSnapshot {
            base: base.to_string(),
            rates,
            timestamp: now,
            date: payload.date.unwrap_or_else(|| now.date_naive()),
            source: RateSource::Live,
        })
    }

    fn fall_back(&self, base: &str, target: &str, err: RateError) -> ExchangeRate {
        error!(
            "exchange rate lookup for {}/{} failed ({}), using static table",
            base, target, err
        );
        self.fallback.exchange_rate(base, target)
    }
}

#[async_trait]
impl RateProvider for ExchangeHostProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn resolve_rate(&self, base: &str, target: &str) -> ExchangeRate {
        if base == target {
            return ExchangeRate::identity(base);
        }

        match self.fetch_convert(base, target).await {
            Ok(rate) => rate,
            Err(err) if err.triggers_secondary_lookup() => {
                warn!(
                    "convert lookup for {}/{} unusable ({}), trying latest-rates endpoint",
                    base, target, err
                );
                match self.fetch_latest_rate(base, target).await {
                    Ok(rate) => rate,
                    Err(err) => self.fall_back(base, target, err),
                }
            }
            Err(err) => self.fall_back(base, target, err),
        }
    }

    async fn latest_rates(&self, base: &str) -> RatesSnapshot {
        match self.fetch_latest_snapshot(base).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                error!(
                    "latest rates lookup for {} failed ({}), using static table",
                    base, err
                );
                self.fallback.snapshot(base)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// Connection-refused without touching the network.
    const UNROUTABLE_URL: &str = "http://127.0.0.1:9";

    #[test]
    fn test_provider_id() {
        let provider = ExchangeHostProvider::new();
        assert_eq!(provider.id(), "EXCHANGE_RATE_HOST");
    }

    #[test]
    fn test_convert_response_deserializes() {
        let json = r#"{"result": 1.0834, "date": "2024-03-08"}"#;
        let payload: ConvertResponse = serde_json::from_str(json).unwrap();
        assert_eq!(payload.result, Some(1.0834));
        assert_eq!(
            payload.date,
            Some(NaiveDate::from_ymd_opt(2024, 3, 8).unwrap())
        );
    }

    #[test]
    fn test_convert_response_tolerates_missing_fields() {
        let payload: ConvertResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.result, None);
        assert_eq!(payload.date, None);
    }

    #[test]
    fn test_latest_response_deserializes() {
        let json = r#"{"rates": {"USD": 0.0091, "EUR": 0.0084}, "base": "JPY", "date": "2024-03-08"}"#;
        let payload: LatestRatesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(payload.rates.len(), 2);
        assert_eq!(payload.rates["USD"], 0.0091);
        assert_eq!(payload.base.as_deref(), Some("JPY"));
    }

    #[test]
    fn test_parse_rate_rejects_non_positive() {
        assert!(ExchangeHostProvider::parse_rate(0.0).is_err());
        assert!(ExchangeHostProvider::parse_rate(-1.2).is_err());
        assert!(ExchangeHostProvider::parse_rate(f64::NAN).is_err());
        assert_eq!(
            ExchangeHostProvider::parse_rate(1.25).unwrap(),
            dec!(1.25)
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_degrades_to_static_table() {
        let provider = ExchangeHostProvider::new().with_base_url(UNROUTABLE_URL);

        let rate = provider.resolve_rate("USD", "EUR").await;
        assert_eq!(rate.source, RateSource::Static);
        assert_eq!(rate.rate, dec!(0.85));
    }

    #[tokio::test]
    async fn test_fallback_is_deterministic() {
        let provider = ExchangeHostProvider::new().with_base_url(UNROUTABLE_URL);

        let first = provider.resolve_rate("JPY", "USD").await;
        let second = provider.resolve_rate("JPY", "USD").await;
        assert_eq!(first.rate, second.rate);
        assert!(first.rate > Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_identity_short_circuit_performs_no_io() {
        // An unroutable host would fail any attempted request; identity
        // resolution must not make one.
        let provider = ExchangeHostProvider::new().with_base_url(UNROUTABLE_URL);

        let rate = provider.resolve_rate("USD", "USD").await;
        assert_eq!(rate.rate, Decimal::ONE);
        assert_eq!(rate.source, RateSource::Identity);
    }

    #[tokio::test]
    async fn test_latest_rates_degrades_to_static_table() {
        let provider = ExchangeHostProvider::new().with_base_url(UNROUTABLE_URL);

        let snapshot = provider.latest_rates("USD").await;
        assert_eq!(snapshot.source, RateSource::Static);
        assert_eq!(snapshot.rates["EUR"], dec!(0.85));
    }
}

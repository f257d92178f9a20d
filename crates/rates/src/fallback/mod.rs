//! Static fallback rate table.
//!
//! A fixed USD-anchored snapshot that stands in when both network paths
//! fail. Rebasing is plain arithmetic: every entry is divided by the
//! table's value for the requested base, then the target is read off.
//! The same (base, target) always yields the same value, which keeps
//! degraded-mode behavior reproducible in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use lazy_static::lazy_static;
use log::warn;
use rust_decimal::Decimal;

use crate::models::{ExchangeRate, RateSource, RatesSnapshot};
use crate::provider::RateProvider;

const PROVIDER_ID: &str = "STATIC";

lazy_static! {
    /// USD-anchored snapshot: how many units of each currency one USD buys.
    static ref USD_ANCHORED: HashMap<&'static str, Decimal> = HashMap::from([
        ("USD", Decimal::new(100, 2)),
        ("EUR", Decimal::new(85, 2)),
        ("GBP", Decimal::new(73, 2)),
        ("JPY", Decimal::new(11033, 2)),
        ("AUD", Decimal::new(135, 2)),
        ("CAD", Decimal::new(125, 2)),
        ("CHF", Decimal::new(92, 2)),
        ("NZD", Decimal::new(142, 2)),
    ]);
}

/// Deterministic offline rate source.
///
/// Unknown currency codes degrade to a rate of one rather than erroring;
/// every such degradation is logged so operators can see when the default
/// kicked in.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRateTable;

impl StaticRateTable {
    pub fn new() -> Self {
        Self
    }

    /// The table's value for `code`, or one for codes the snapshot
    /// does not carry.
    fn anchored_value(code: &str) -> Decimal {
        match USD_ANCHORED.get(code) {
            Some(value) => *value,
            None => {
                warn!("currency {} not in static rate table, defaulting to 1", code);
                Decimal::ONE
            }
        }
    }

    /// Rate for one unit of `base` expressed in `target`.
    pub fn rate(&self, base: &str, target: &str) -> Decimal {
        if base == target {
            return Decimal::ONE;
        }

        let base_value = Self::anchored_value(base);
        match USD_ANCHORED.get(target) {
            Some(target_value) => *target_value / base_value,
            None => {
                warn!(
                    "currency {} not in static rate table, defaulting {}/{} to 1",
                    target, base, target
                );
                Decimal::ONE
            }
        }
    }

    /// The full table rebased to `base`.
    pub fn snapshot(&self, base: &str) -> RatesSnapshot {
        let base_value = Self::anchored_value(base);
        let now = Utc::now();

        let rates = USD_ANCHORED
            .iter()
            .map(|(code, value)| ((*code).to_string(), *value / base_value))
            .collect();

        RatesSnapshot {
            base: base.to_string(),
            rates,
            timestamp: now,
            date: now.date_naive(),
            source: RateSource::Static,
        }
    }

    /// An [`ExchangeRate`] record read off the table.
    pub fn exchange_rate(&self, base: &str, target: &str) -> ExchangeRate {
        let now = Utc::now();
        ExchangeRate {
            base: base.to_string(),
            target: target.to_string(),
            rate: self.rate(base, target),
            timestamp: now,
            date: now.date_naive(),
            source: RateSource::Static,
        }
    }
}

#[async_trait]
impl RateProvider for StaticRateTable {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn resolve_rate(&self, base: &str, target: &str) -> ExchangeRate {
        if base == target {
            return ExchangeRate::identity(base);
        }
        self.exchange_rate(base, target)
    }

    async fn latest_rates(&self, base: &str) -> RatesSnapshot {
        self.snapshot(base)
    }
}

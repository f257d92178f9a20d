use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use pipcalc_rates::{RateProvider, RatesSnapshot};
use rust_decimal::Decimal;

use crate::errors::{Error, Result};
use crate::lots::{LotSizeStoreTrait, LotType};
use crate::reference;

use super::valuation_model::PipCalculationResult;
use super::valuation_traits::PipValuationServiceTrait;

/// Pip valuation service.
///
/// Holds the rate provider and the lot-size store behind trait objects;
/// both are injected so callers (and tests) decide where rates and lot
/// sizes come from.
pub struct PipValuationService {
    rate_provider: Arc<dyn RateProvider>,
    lot_store: Arc<dyn LotSizeStoreTrait>,
}

impl PipValuationService {
    pub fn new(rate_provider: Arc<dyn RateProvider>, lot_store: Arc<dyn LotSizeStoreTrait>) -> Self {
        Self {
            rate_provider,
            lot_store,
        }
    }

    /// A snapshot value for `code`, defaulting to one when the snapshot
    /// does not carry it.
    fn snapshot_value(snapshot: &RatesSnapshot, code: &str) -> Decimal {
        match snapshot.rates.get(code) {
            Some(value) => *value,
            None => {
                warn!(
                    "currency {} missing from {} snapshot, defaulting to 1",
                    code, snapshot.base
                );
                Decimal::ONE
            }
        }
    }
}

#[async_trait]
impl PipValuationServiceTrait for PipValuationService {
    async fn calculate_pip_value(
        &self,
        pair_symbol: &str,
        position_size: Decimal,
        pip_amount: Decimal,
        account_currency: &str,
    ) -> Result<PipCalculationResult> {
        let pair = reference::get_pair(pair_symbol)
            .ok_or_else(|| Error::PairNotFound(pair_symbol.to_string()))?;

        let pip_value_in_quote_currency = position_size * pair.pip_value;
        let total_value_in_quote_currency = pip_value_in_quote_currency * pip_amount;

        // Account currency equal to the quote currency needs no
        // conversion and must not cost a network round-trip.
        if account_currency == pair.quote_currency {
            return Ok(PipCalculationResult {
                pip_value_in_quote_currency,
                pip_value_in_account_currency: pip_value_in_quote_currency,
                total_value_in_quote_currency,
                total_value_in_account_currency: total_value_in_quote_currency,
                exchange_rate: Decimal::ONE,
                rate_source: pipcalc_rates::RateSource::Identity,
            });
        }

        let rate = self
            .rate_provider
            .resolve_rate(&pair.quote_currency, account_currency)
            .await;
        debug!(
            "resolved {}/{} at {} ({})",
            pair.quote_currency,
            account_currency,
            rate.rate,
            rate.source.as_str()
        );

        Ok(PipCalculationResult {
            pip_value_in_quote_currency,
            pip_value_in_account_currency: pip_value_in_quote_currency * rate.rate,
            total_value_in_quote_currency,
            total_value_in_account_currency: total_value_in_quote_currency * rate.rate,
            exchange_rate: rate.rate,
            rate_source: rate.source,
        })
    }

    async fn pair_rates_snapshot(&self) -> HashMap<String, Decimal> {
        let snapshot = self.rate_provider.latest_rates("USD").await;

        let mut pair_rates = HashMap::new();
        for pair in reference::all_pairs() {
            let rate = if pair.base_currency == snapshot.base {
                Self::snapshot_value(&snapshot, &pair.quote_currency)
            } else if pair.quote_currency == snapshot.base {
                Decimal::ONE / Self::snapshot_value(&snapshot, &pair.base_currency)
            } else {
                Self::snapshot_value(&snapshot, &pair.quote_currency)
                    / Self::snapshot_value(&snapshot, &pair.base_currency)
            };
            pair_rates.insert(pair.symbol.clone(), rate);
        }
        pair_rates
    }

    fn convert_lot_to_units(&self, lot_type: LotType, lot_count: Decimal) -> Decimal {
        Decimal::from(self.lot_store.units_for(lot_type)) * lot_count
    }

    fn calculate_position_size(
        &self,
        account_balance: Decimal,
        risk_percentage: Decimal,
        stop_loss_pips: Decimal,
        pip_value: Decimal,
    ) -> Result<Decimal> {
        if stop_loss_pips <= Decimal::ZERO {
            return Err(Error::NonPositiveDivisor(format!(
                "stop loss pips must be positive, got {stop_loss_pips}"
            )));
        }
        if pip_value <= Decimal::ZERO {
            return Err(Error::NonPositiveDivisor(format!(
                "pip value must be positive, got {pip_value}"
            )));
        }

        let risk_amount = account_balance * risk_percentage / Decimal::ONE_HUNDRED;
        Ok(risk_amount / (stop_loss_pips * pip_value))
    }
}

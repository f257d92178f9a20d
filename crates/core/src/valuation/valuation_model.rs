//! Pip valuation domain models.

use pipcalc_rates::RateSource;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The monetary figures for one valuation request.
///
/// Created per calculation, held by the caller for display, discarded on
/// the next calculation. `rate_source` says whether `exchange_rate` came
/// from the network, the static fallback, or the same-currency
/// short-circuit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipCalculationResult {
    pub pip_value_in_quote_currency: Decimal,
    pub pip_value_in_account_currency: Decimal,
    pub total_value_in_quote_currency: Decimal,
    pub total_value_in_account_currency: Decimal,
    pub exchange_rate: Decimal,
    pub rate_source: RateSource,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_serializes_camel_case() {
        let result = PipCalculationResult {
            pip_value_in_quote_currency: dec!(10),
            pip_value_in_account_currency: dec!(10),
            total_value_in_quote_currency: dec!(10),
            total_value_in_account_currency: dec!(10),
            exchange_rate: Decimal::ONE,
            rate_source: RateSource::Identity,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("pipValueInQuoteCurrency").is_some());
        assert!(json.get("totalValueInAccountCurrency").is_some());
        assert_eq!(json["rateSource"], "IDENTITY");
    }
}

//! Property-based integration tests for pip valuation.
//!
//! These tests verify that universal properties hold across all valid
//! inputs, using the `proptest` crate for random test case generation.
//! Rates come from the deterministic static table so every run is
//! reproducible.

use std::sync::Arc;

use pipcalc_core::valuation::{PipCalculationResult, PipValuationService, PipValuationServiceTrait};
use pipcalc_core::{reference, InMemoryLotSizeStore, LotType};
use pipcalc_rates::{RateSource, StaticRateTable};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Generates a registered pair symbol.
fn arb_pair_symbol() -> impl Strategy<Value = &'static str> {
    let count = reference::all_pairs().len();
    (0..count).prop_map(|index| reference::all_pairs()[index].symbol.as_str())
}

/// Generates a catalog account currency.
fn arb_account_currency() -> impl Strategy<Value = &'static str> {
    let count = reference::all_currency_codes().len();
    (0..count).prop_map(|index| reference::all_currency_codes()[index])
}

/// Generates a position size in whole units.
fn arb_position_size() -> impl Strategy<Value = Decimal> {
    (1u64..=10_000_000).prop_map(Decimal::from)
}

/// Generates a pip count.
fn arb_pip_amount() -> impl Strategy<Value = Decimal> {
    (0u64..=1_000).prop_map(Decimal::from)
}

fn calculate(
    pair_symbol: &str,
    position_size: Decimal,
    pip_amount: Decimal,
    account_currency: &str,
) -> PipCalculationResult {
    let service = PipValuationService::new(
        Arc::new(StaticRateTable::new()),
        Arc::new(InMemoryLotSizeStore::new()),
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime must build");
    runtime
        .block_on(service.calculate_pip_value(
            pair_symbol,
            position_size,
            pip_amount,
            account_currency,
        ))
        .expect("registered pairs must value")
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The quote-currency total is always the pip figure scaled by the
    /// pip count.
    #[test]
    fn prop_totals_scale_with_pip_amount(
        symbol in arb_pair_symbol(),
        position_size in arb_position_size(),
        pip_amount in arb_pip_amount(),
        account_currency in arb_account_currency(),
    ) {
        let result = calculate(symbol, position_size, pip_amount, account_currency);

        prop_assert_eq!(
            result.total_value_in_quote_currency,
            result.pip_value_in_quote_currency * pip_amount
        );
    }

    /// The account-currency figures are the quote-currency figures scaled
    /// by the resolved rate.
    #[test]
    fn prop_account_figures_scale_by_rate(
        symbol in arb_pair_symbol(),
        position_size in arb_position_size(),
        pip_amount in arb_pip_amount(),
        account_currency in arb_account_currency(),
    ) {
        let result = calculate(symbol, position_size, pip_amount, account_currency);

        prop_assert!(result.exchange_rate > Decimal::ZERO);
        prop_assert_eq!(
            result.pip_value_in_account_currency,
            result.pip_value_in_quote_currency * result.exchange_rate
        );
        prop_assert_eq!(
            result.total_value_in_account_currency,
            result.total_value_in_quote_currency * result.exchange_rate
        );
    }

    /// An account currency equal to the pair's quote currency yields an
    /// exact identity rate and pairwise-equal figures.
    #[test]
    fn prop_quote_currency_account_is_identity(
        symbol in arb_pair_symbol(),
        position_size in arb_position_size(),
        pip_amount in arb_pip_amount(),
    ) {
        let quote = reference::get_pair(symbol).unwrap().quote_currency.clone();
        let result = calculate(symbol, position_size, pip_amount, &quote);

        prop_assert_eq!(result.exchange_rate, Decimal::ONE);
        prop_assert_eq!(result.rate_source, RateSource::Identity);
        prop_assert_eq!(
            result.pip_value_in_account_currency,
            result.pip_value_in_quote_currency
        );
        prop_assert_eq!(
            result.total_value_in_account_currency,
            result.total_value_in_quote_currency
        );
    }

    /// Degraded-mode valuation is reproducible: the same request against
    /// the static table always lands on the same figures.
    #[test]
    fn prop_static_fallback_is_deterministic(
        symbol in arb_pair_symbol(),
        position_size in arb_position_size(),
        pip_amount in arb_pip_amount(),
        account_currency in arb_account_currency(),
    ) {
        let first = calculate(symbol, position_size, pip_amount, account_currency);
        let second = calculate(symbol, position_size, pip_amount, account_currency);

        prop_assert_eq!(first.exchange_rate, second.exchange_rate);
        prop_assert_eq!(
            first.total_value_in_account_currency,
            second.total_value_in_account_currency
        );
    }

    /// Lot conversion is the store multiplier scaled by the lot count.
    #[test]
    fn prop_lot_conversion_scales_linearly(lot_count in 1u64..=500) {
        let service = PipValuationService::new(
            Arc::new(StaticRateTable::new()),
            Arc::new(InMemoryLotSizeStore::new()),
        );
        let count = Decimal::from(lot_count);

        prop_assert_eq!(
            service.convert_lot_to_units(LotType::Standard, count),
            Decimal::from(100_000u64) * count
        );
        prop_assert_eq!(
            service.convert_lot_to_units(LotType::Nano, count),
            Decimal::from(100u64) * count
        );
    }
}

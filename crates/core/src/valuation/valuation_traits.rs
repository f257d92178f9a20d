use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::lots::LotType;

use super::valuation_model::PipCalculationResult;

/// Trait defining the contract for pip valuation operations.
#[async_trait]
pub trait PipValuationServiceTrait: Send + Sync {
    /// Value one position's pips in the pair's quote currency and the
    /// trader's account currency.
    ///
    /// Fails only when `pair_symbol` has no entry in the reference
    /// table; rate acquisition degrades internally and never errors.
    async fn calculate_pip_value(
        &self,
        pair_symbol: &str,
        position_size: Decimal,
        pip_amount: Decimal,
        account_currency: &str,
    ) -> Result<PipCalculationResult>;

    /// Current rate for every registered pair, derived from one
    /// USD-based snapshot.
    async fn pair_rates_snapshot(&self) -> HashMap<String, Decimal>;

    /// Units for `lot_count` lots of `lot_type`.
    fn convert_lot_to_units(&self, lot_type: LotType, lot_count: Decimal) -> Decimal;

    /// Position size in units from risk parameters:
    /// `(balance * risk% / 100) / (stop_loss_pips * pip_value)`.
    ///
    /// Fails with a non-positive-divisor error instead of dividing by
    /// zero.
    fn calculate_position_size(
        &self,
        account_balance: Decimal,
        risk_percentage: Decimal,
        stop_loss_pips: Decimal,
        pip_value: Decimal,
    ) -> Result<Decimal>;
}

//! Pipcalc Core - domain entities, services, and traits.
//!
//! This crate contains the pip valuation logic for pipcalc: reference
//! tables for currencies and currency pairs, the lot-size store, the
//! valuation service, and position sizing. Exchange rates come in through
//! the [`RateProvider`](pipcalc_rates::RateProvider) boundary of the
//! `pipcalc-rates` crate; callers hand the service plain strings and
//! numbers and get plain data records back.

pub mod errors;
pub mod lots;
pub mod reference;
pub mod utils;
pub mod valuation;

// Re-export common types
pub use lots::{InMemoryLotSizeStore, LotSizeStoreTrait, LotType};
pub use valuation::{PipCalculationResult, PipValuationService, PipValuationServiceTrait};

// Re-export error types
pub use errors::Error;
pub use errors::Result;

//! Static reference data: currencies and currency pairs.
//!
//! Both tables ship as JSON, parsed at compile time via `include_str!`
//! and indexed once via `lazy_static`. They are read-only for the core;
//! unknown codes and symbols are lookup misses, not parse errors.

mod currencies;
mod pairs;

pub use currencies::{all_currency_codes, get_currency, Currency};
pub use pairs::{all_pairs, get_pair, pip_decimal_place, CurrencyPair};

//! Currency pair reference table.
//!
//! The table spans the majors and common crosses. Pip values are carried
//! as strings in the JSON so `Decimal` parses them exactly.

use std::collections::HashMap;

use lazy_static::lazy_static;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry of the pair table.
///
/// In "BASE/QUOTE", the rate expresses how many units of QUOTE equal one
/// unit of BASE; `pip_value` is the numeric size of one pip (0.0001 for
/// most pairs, 0.01 for JPY-quoted ones).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyPair {
    pub symbol: String,
    pub base_currency: String,
    pub quote_currency: String,
    pub pip_decimal_place: u32,
    pub pip_value: Decimal,
}

#[derive(Debug, Deserialize)]
struct PairCatalog {
    pairs: Vec<CurrencyPair>,
}

struct PairRegistry {
    pairs: Vec<CurrencyPair>,
    by_symbol: HashMap<String, usize>,
}

impl PairRegistry {
    fn load() -> Self {
        let json = include_str!("data/pairs.json");
        let catalog: PairCatalog = serde_json::from_str(json).expect("pairs.json must be valid");

        let by_symbol = catalog
            .pairs
            .iter()
            .enumerate()
            .map(|(index, pair)| (pair.symbol.clone(), index))
            .collect();

        Self {
            pairs: catalog.pairs,
            by_symbol,
        }
    }
}

lazy_static! {
    static ref REGISTRY: PairRegistry = PairRegistry::load();
}

/// Look up a pair by its "BASE/QUOTE" symbol.
pub fn get_pair(symbol: &str) -> Option<&'static CurrencyPair> {
    REGISTRY
        .by_symbol
        .get(symbol)
        .map(|&index| &REGISTRY.pairs[index])
}

/// The full pair table, in catalog order.
pub fn all_pairs() -> &'static [CurrencyPair] {
    &REGISTRY.pairs
}

/// Pip decimal place for a pair symbol; 4 for symbols not in the table.
pub fn pip_decimal_place(symbol: &str) -> u32 {
    get_pair(symbol).map(|pair| pair.pip_decimal_place).unwrap_or(4)
}

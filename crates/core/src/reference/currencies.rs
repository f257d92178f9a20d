//! Major currency catalog.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// One entry of the currency catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub symbol: String,
}

#[derive(Debug, Deserialize)]
struct CurrencyCatalog {
    currencies: Vec<Currency>,
}

lazy_static! {
    static ref CATALOG: CurrencyCatalog = {
        let json = include_str!("data/currencies.json");
        serde_json::from_str(json).expect("currencies.json must be valid")
    };
}

/// Look up a currency by its 3-letter code.
pub fn get_currency(code: &str) -> Option<&'static Currency> {
    CATALOG.currencies.iter().find(|c| c.code == code)
}

/// All catalog currency codes, in catalog order.
pub fn all_currency_codes() -> Vec<&'static str> {
    CATALOG.currencies.iter().map(|c| c.code.as_str()).collect()
}

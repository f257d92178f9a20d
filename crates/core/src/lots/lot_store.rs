//! Editable lot-size store.
//!
//! The lot-size table is the one piece of shared mutable state in the
//! core. It is injected into the valuator rather than reached as a
//! global, and reads are read-through: a reader observes whatever value
//! is current at lookup time, with no snapshot guarantee across an
//! external update.

use std::collections::HashMap;
use std::sync::RwLock;

use log::warn;

use crate::errors::{Error, Result};

use super::lot_model::{LotType, DEFAULT_LOT_SIZES};

/// Contract for lot-size lookup and maintenance.
pub trait LotSizeStoreTrait: Send + Sync {
    /// Units for one lot of `lot_type`.
    ///
    /// A lot type without a table entry (notably `Custom`) resolves to 0
    /// units; the degradation is logged rather than raised.
    fn units_for(&self, lot_type: LotType) -> u64;

    /// Replace the unit count for `lot_type`. `Custom` is not updatable.
    fn update_units(&self, lot_type: LotType, units: u64) -> Result<()>;

    /// Current table contents.
    fn lot_sizes(&self) -> Vec<(LotType, u64)>;
}

/// In-memory store seeded with the standard forex table.
pub struct InMemoryLotSizeStore {
    units: RwLock<HashMap<LotType, u64>>,
}

impl Default for InMemoryLotSizeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLotSizeStore {
    pub fn new() -> Self {
        Self {
            units: RwLock::new(DEFAULT_LOT_SIZES.iter().copied().collect()),
        }
    }
}

impl LotSizeStoreTrait for InMemoryLotSizeStore {
    fn units_for(&self, lot_type: LotType) -> u64 {
        if let Ok(table) = self.units.read() {
            match table.get(&lot_type) {
                Some(units) => *units,
                None => {
                    warn!(
                        "lot type {} has no unit mapping, defaulting to 0 units",
                        lot_type.as_str()
                    );
                    0
                }
            }
        } else {
            warn!("lot size table lock poisoned, defaulting to 0 units");
            0
        }
    }

    fn update_units(&self, lot_type: LotType, units: u64) -> Result<()> {
        if lot_type == LotType::Custom {
            return Err(Error::InvalidLotType(
                "CUSTOM carries caller-supplied units and has no table entry".to_string(),
            ));
        }

        let mut table = self
            .units
            .write()
            .map_err(|e| Error::LotTable(e.to_string()))?;
        table.insert(lot_type, units);
        Ok(())
    }

    fn lot_sizes(&self) -> Vec<(LotType, u64)> {
        match self.units.read() {
            Ok(table) => {
                let mut sizes: Vec<(LotType, u64)> =
                    table.iter().map(|(lot_type, units)| (*lot_type, *units)).collect();
                sizes.sort_by(|a, b| b.1.cmp(&a.1));
                sizes
            }
            Err(_) => Vec::new(),
        }
    }
}

//! Lot sizes - domain model and the editable lot-size store.

mod lot_model;
mod lot_store;

pub use lot_model::{LotType, DEFAULT_LOT_SIZES};
pub use lot_store::{InMemoryLotSizeStore, LotSizeStoreTrait};

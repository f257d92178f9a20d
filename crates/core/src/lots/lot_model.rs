//! Lot type domain model.

use serde::{Deserialize, Serialize};

/// Standardized position-size units.
///
/// `Custom` has no table entry: custom positions carry a caller-supplied
/// raw unit count instead of a multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LotType {
    Standard,
    Mini,
    Micro,
    Nano,
    Custom,
}

/// Default units per lot: the standard forex table.
pub const DEFAULT_LOT_SIZES: &[(LotType, u64)] = &[
    (LotType::Standard, 100_000),
    (LotType::Mini, 10_000),
    (LotType::Micro, 1_000),
    (LotType::Nano, 100),
];

impl LotType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LotType::Standard => "STANDARD",
            LotType::Mini => "MINI",
            LotType::Micro => "MICRO",
            LotType::Nano => "NANO",
            LotType::Custom => "CUSTOM",
        }
    }

    /// Display label with the unit count spelled out.
    pub fn label(&self) -> &'static str {
        match self {
            LotType::Standard => "Standard (100,000)",
            LotType::Mini => "Mini (10,000)",
            LotType::Micro => "Micro (1,000)",
            LotType::Nano => "Nano (100)",
            LotType::Custom => "Custom",
        }
    }
}

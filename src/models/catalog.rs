use serde::{Deserialize, Serialize};

use super::period::CurrencyUnit;
use super::text::Localized;
use crate::config::{DRACHMAI_PER_DENARIUS, OBOLS_PER_DRACHMA};

// ---------------------------------------------------------------------------
// Occupation — Reference occupation for social comparison
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occupation {
    pub id: String,
    pub name: Localized,
    pub description_zh: Option<String>,
    pub social_class: SocialClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialClass {
    Lower,
    MiddleLower,
    Middle,
    MiddleUpper,
    Upper,
}

// ---------------------------------------------------------------------------
// Item — Everyday good with a typical price
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: Localized,
    pub description_zh: Option<String>,
    pub category: String,
    #[serde(default)]
    pub typical_prices: Vec<ItemPrice>,
}

impl Item {
    /// Typical price of the item expressed in `unit`, if the dataset records
    /// one in a compatible coinage.
    pub fn price_in(&self, unit: CurrencyUnit) -> Option<f64> {
        self.typical_prices
            .iter()
            .find_map(|p| p.unit.to_base(p.value, unit))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemPrice {
    pub value: f64,
    pub unit: MoneyUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoneyUnit {
    Obols,
    Drachmai,
    Denarii,
    Solidi,
}

impl MoneyUnit {
    fn to_base(self, value: f64, unit: CurrencyUnit) -> Option<f64> {
        match (self, unit) {
            (MoneyUnit::Obols, CurrencyUnit::Denarii) => {
                Some(value / OBOLS_PER_DRACHMA / DRACHMAI_PER_DENARIUS)
            }
            (MoneyUnit::Drachmai, CurrencyUnit::Denarii) => Some(value / DRACHMAI_PER_DENARIUS),
            (MoneyUnit::Denarii, CurrencyUnit::Denarii) => Some(value),
            (MoneyUnit::Solidi, CurrencyUnit::Solidi) => Some(value),
            _ => None,
        }
    }
}

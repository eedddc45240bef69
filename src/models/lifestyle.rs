use serde::{Deserialize, Serialize};

use super::period::CurrencyUnit;
use super::text::{Language, Localized};

// ---------------------------------------------------------------------------
// LifestyleTier — Ordinal social class, poorest first
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifestyleTier {
    Poor,
    LowerMiddle,
    Middle,
    UpperMiddle,
    Elite,
}

impl LifestyleTier {
    /// 1-based level, 1 = poor, 5 = elite.
    pub fn level(self) -> u8 {
        match self {
            LifestyleTier::Poor => 1,
            LifestyleTier::LowerMiddle => 2,
            LifestyleTier::Middle => 3,
            LifestyleTier::UpperMiddle => 4,
            LifestyleTier::Elite => 5,
        }
    }
}

// ---------------------------------------------------------------------------
// Lifestyle — Classified tier with its display text
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lifestyle {
    pub tier: LifestyleTier,
    pub unit: CurrencyUnit,
    pub title: Localized,
    pub description: Localized,
    pub icon: String,
}

impl Lifestyle {
    pub fn title(&self, lang: Language) -> &str {
        self.title.get(lang)
    }

    pub fn description(&self, lang: Language) -> &str {
        self.description.get(lang)
    }
}

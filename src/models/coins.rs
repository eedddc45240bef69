use serde::{Deserialize, Serialize};
use std::fmt;

use super::period::{Coinage, CurrencyUnit};
use super::text::Language;
use crate::format::compact_number;

// ---------------------------------------------------------------------------
// Denomination
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Denomination {
    Aureus,
    Denarius,
    Sestertius,
    Antoninianus,
    Solidus,
    Tremissis,
    Siliqua,
}

impl Denomination {
    pub fn metal(self) -> Metal {
        match self {
            Denomination::Aureus | Denomination::Solidus | Denomination::Tremissis => Metal::Gold,
            Denomination::Denarius | Denomination::Antoninianus | Denomination::Siliqua => {
                Metal::Silver
            }
            Denomination::Sestertius => Metal::Brass,
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Denomination::Aureus => "aureus",
            Denomination::Denarius => "denarius",
            Denomination::Sestertius => "sestertius",
            Denomination::Antoninianus => "antoninianus",
            Denomination::Solidus => "solidus",
            Denomination::Tremissis => "tremissis",
            Denomination::Siliqua => "siliqua",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metal {
    Gold,
    Silver,
    Brass,
}

// ---------------------------------------------------------------------------
// CoinCount — One line of a coin bundle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoinCount {
    pub denomination: Denomination,
    pub count: f64,
    /// Metal content of a single coin, in grams.
    pub grams_each: f64,
}

// ---------------------------------------------------------------------------
// CoinBundle — Coins a quantity of metal buys in a period
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinBundle {
    pub period: String,
    pub coinage: Coinage,
    pub coins: Vec<CoinCount>,
    /// Set for denarius-standard periods only.
    pub total_denarii_equivalent: Option<f64>,
    /// Set for solidus-standard periods only.
    pub total_solidi_equivalent: Option<f64>,
}

impl CoinBundle {
    /// Count of a denomination, `0.0` when the bundle does not mint it.
    pub fn count(&self, denomination: Denomination) -> f64 {
        self.coins
            .iter()
            .find(|c| c.denomination == denomination)
            .map(|c| c.count)
            .unwrap_or(0.0)
    }

    /// The total in the period's base unit.
    pub fn total(&self) -> (f64, CurrencyUnit) {
        match (self.total_solidi_equivalent, self.total_denarii_equivalent) {
            (Some(solidi), _) => (solidi, CurrencyUnit::Solidi),
            (None, Some(denarii)) => (denarii, CurrencyUnit::Denarii),
            (None, None) => (0.0, self.coinage.unit()),
        }
    }

    /// Grams of `metal` held in the minted coins.
    pub fn grams_of(&self, metal: Metal) -> f64 {
        self.coins
            .iter()
            .filter(|c| c.denomination.metal() == metal)
            .map(|c| c.count * c.grams_each)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.iter().all(|c| c.count == 0.0)
    }

    /// One-line summary such as `"2 aurei + 160 denarii"`.
    pub fn describe(&self, lang: Language) -> String {
        let n = |d: Denomination| compact_number(self.count(d), 0);
        match (self.coinage, lang) {
            (Coinage::Denarius, Language::En) => format!(
                "{} aurei + {} denarii",
                n(Denomination::Aureus),
                n(Denomination::Denarius)
            ),
            (Coinage::Denarius, Language::Zh) => format!(
                "{} 奥里斯金币 + {} 第纳里银币",
                n(Denomination::Aureus),
                n(Denomination::Denarius)
            ),
            (Coinage::Antoninianus, Language::En) => format!(
                "{} aurei + {} antoniniani (heavily debased)",
                n(Denomination::Aureus),
                n(Denomination::Antoninianus)
            ),
            (Coinage::Antoninianus, Language::Zh) => format!(
                "{} 奥里斯金币 + {} 安东尼尼银币（已严重贬值）",
                n(Denomination::Aureus),
                n(Denomination::Antoninianus)
            ),
            (Coinage::Solidus, Language::En) => format!(
                "{} solidi + {} tremisses + {} siliquae",
                n(Denomination::Solidus),
                n(Denomination::Tremissis),
                n(Denomination::Siliqua)
            ),
            (Coinage::Solidus, Language::Zh) => format!(
                "{} 索里杜斯金币 + {} 特雷米西斯 + {} 西里夸银币",
                n(Denomination::Solidus),
                n(Denomination::Tremissis),
                n(Denomination::Siliqua)
            ),
        }
    }
}

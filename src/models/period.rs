use serde::{Deserialize, Serialize};
use std::fmt;

use super::text::Localized;

// ---------------------------------------------------------------------------
// CurrencySystem — Monetary regime of a period
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencySystem {
    SilverDenarius,
    SilverDenariusDebased,
    Antoninianus,
    SolidusTransition,
    SolidusGold,
}

impl CurrencySystem {
    /// The coin-mapping algorithm used for this regime.
    pub fn coinage(self) -> Coinage {
        match self {
            CurrencySystem::SilverDenarius | CurrencySystem::SilverDenariusDebased => {
                Coinage::Denarius
            }
            CurrencySystem::Antoninianus => Coinage::Antoninianus,
            CurrencySystem::SolidusTransition | CurrencySystem::SolidusGold => Coinage::Solidus,
        }
    }

    /// The unit wealth is totalled in under this regime.
    pub fn unit(self) -> CurrencyUnit {
        self.coinage().unit()
    }

    /// How wheat prices are quoted in this regime's observations.
    pub fn wheat_quote(self) -> WheatQuote {
        match self {
            CurrencySystem::SilverDenarius
            | CurrencySystem::SilverDenariusDebased
            | CurrencySystem::Antoninianus => WheatQuote::DrachmaiPerArtaba,
            CurrencySystem::SolidusTransition => WheatQuote::DenariiPerArtaba,
            CurrencySystem::SolidusGold => WheatQuote::ArtabaePerSolidus,
        }
    }
}

// ---------------------------------------------------------------------------
// Coinage — Coin-mapping algorithm
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coinage {
    /// Aureus / denarius / sestertius (Julio-Claudian through Severan).
    Denarius,
    /// Aureus / debased antoninianus (third-century crisis).
    Antoninianus,
    /// Solidus / tremissis / siliqua (Tetrarchy onwards).
    Solidus,
}

impl Coinage {
    pub fn unit(self) -> CurrencyUnit {
        match self {
            Coinage::Denarius | Coinage::Antoninianus => CurrencyUnit::Denarii,
            Coinage::Solidus => CurrencyUnit::Solidi,
        }
    }
}

// ---------------------------------------------------------------------------
// CurrencyUnit — Base unit of a wealth total
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyUnit {
    Denarii,
    Solidi,
}

impl fmt::Display for CurrencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyUnit::Denarii => f.write_str("denarii"),
            CurrencyUnit::Solidi => f.write_str("solidi"),
        }
    }
}

// ---------------------------------------------------------------------------
// WheatQuote — Convention a period's wheat prices are recorded in
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheatQuote {
    DrachmaiPerArtaba,
    /// Denarii communes of the fourth-century inflation.
    DenariiPerArtaba,
    /// Late antique yield convention: how many artabae one solidus buys.
    ArtabaePerSolidus,
}

// ---------------------------------------------------------------------------
// Period — One of the seven historical eras
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub id: String,
    pub name: Localized,
    pub name_alt: Option<String>,
    /// First year of the era; BCE years are negative.
    pub start_year: i32,
    pub end_year: i32,
    pub currency_system: CurrencySystem,
    #[serde(default)]
    pub primary_coins: Vec<String>,
    pub description: Localized,
    #[serde(default)]
    pub historical_events: Vec<String>,

    // -- Coin metal content --
    pub gold_content_aureus_g: Option<f64>,
    pub silver_content_denarius_g: Option<f64>,
    pub denarii_per_aureus: Option<u32>,
    pub gold_content_solidus_g: Option<f64>,
    pub silver_content_follis_g: Option<f64>,
    pub solidus_introduced: Option<i32>,

    // -- Fallback averages used when a period has no observations --
    pub avg_wheat_price_dr_art: Option<f64>,
    pub avg_wheat_price_den_art: Option<f64>,
    pub avg_wheat_art_per_sol: Option<f64>,
    pub avg_daily_wage_obols: Option<f64>,

    pub icon: String,
    pub color: Option<String>,
}

impl Period {
    pub fn coinage(&self) -> Coinage {
        self.currency_system.coinage()
    }

    pub fn unit(&self) -> CurrencyUnit {
        self.currency_system.unit()
    }

    /// Human-readable range such as `"69-192 CE"` or `"27 BCE-68 CE"`.
    pub fn year_range(&self) -> String {
        if self.start_year < 0 {
            format!("{} BCE-{} CE", -self.start_year, self.end_year)
        } else {
            format!("{}-{} CE", self.start_year, self.end_year)
        }
    }

    pub fn contains_year(&self, year: f64) -> bool {
        year >= f64::from(self.start_year) && year <= f64::from(self.end_year)
    }

    /// Fallback wheat price in this period's quote convention.
    pub fn wheat_fallback(&self) -> Option<f64> {
        match self.currency_system.wheat_quote() {
            WheatQuote::DrachmaiPerArtaba => self.avg_wheat_price_dr_art,
            WheatQuote::DenariiPerArtaba => self.avg_wheat_price_den_art,
            WheatQuote::ArtabaePerSolidus => self.avg_wheat_art_per_sol,
        }
    }
}

// ---------------------------------------------------------------------------
// PeriodSummary — List view of a period
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub id: String,
    pub name: Localized,
    pub name_alt: Option<String>,
    pub year_range: String,
    pub icon: String,
    pub color: Option<String>,
    pub description: Localized,
}

impl From<&Period> for PeriodSummary {
    fn from(p: &Period) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            name_alt: p.name_alt.clone(),
            year_range: p.year_range(),
            icon: p.icon.clone(),
            color: p.color.clone(),
            description: p.description.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// PeriodInfo — Display metadata echoed with a conversion
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodInfo {
    pub id: String,
    pub name: Localized,
    pub year_range: String,
    pub description: Localized,
    pub icon: String,
}

impl From<&Period> for PeriodInfo {
    fn from(p: &Period) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            year_range: p.year_range(),
            description: p.description.clone(),
            icon: p.icon.clone(),
        }
    }
}

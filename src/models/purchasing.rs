use serde::{Deserialize, Serialize};

use super::lifestyle::Lifestyle;
use super::observation::{Citation, ObservedAverage};
use super::period::CurrencyUnit;
use super::text::{Language, Localized};

// ---------------------------------------------------------------------------
// Availability — A figure that may be missing for lack of data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// The period has no matching observations and no fallback constant.
    NoObservations,
    /// Prices are quoted in a unit the wealth total cannot be converted to.
    UnitMismatch,
    /// There is no wealth to spend.
    NoWealth,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Availability<T> {
    Available(T),
    Unavailable { reason: UnavailableReason },
}

impl<T> Availability<T> {
    pub fn unavailable(reason: UnavailableReason) -> Self {
        Availability::Unavailable { reason }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Availability::Available(v) => Some(v),
            Availability::Unavailable { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<UnavailableReason> {
        match self {
            Availability::Available(_) => None,
            Availability::Unavailable { reason } => Some(*reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Availability<U> {
        match self {
            Availability::Available(v) => Availability::Available(f(v)),
            Availability::Unavailable { reason } => Availability::Unavailable { reason },
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Availability<U>) -> Availability<U> {
        match self {
            Availability::Available(v) => f(v),
            Availability::Unavailable { reason } => Availability::Unavailable { reason },
        }
    }
}

fn not_available(lang: Language) -> String {
    match lang {
        Language::En => "Data not available".to_string(),
        Language::Zh => "数据不可用".to_string(),
    }
}

// ---------------------------------------------------------------------------
// WheatPurchase
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheatPurchase {
    pub artabae: f64,
    pub kg_equivalent: u64,
    /// Person-months of bread grain.
    pub months_food: f64,
    pub price: ObservedAverage,
}

impl WheatPurchase {
    pub fn describe(&self, lang: Language) -> String {
        let artabae = self.artabae.round();
        let months = self.months_food.round();
        match lang {
            Language::En => format!(
                "{} artabae of wheat (≈{} months' food)",
                artabae, months
            ),
            Language::Zh => format!("{} 阿塔巴小麦（约{}个月口粮）", artabae, months),
        }
    }
}

// ---------------------------------------------------------------------------
// LandRent
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandRent {
    /// Arourai of land that can be leased for one year.
    pub aroura_years: f64,
    pub rent_per_aroura: ObservedAverage,
}

impl LandRent {
    pub fn describe(&self, lang: Language) -> String {
        let years = crate::format::round_to(self.aroura_years, 1);
        match lang {
            Language::En => format!("Can pay rent for {} aroura-years", years),
            Language::Zh => format!("可支付约 {} 亩地一年租金", years),
        }
    }
}

// ---------------------------------------------------------------------------
// LaborEquivalent
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborEquivalent {
    /// Working days of an average wage.
    pub days: u64,
    /// Working years of an average wage.
    pub years: f64,
    pub wage: ObservedAverage,
}

impl LaborEquivalent {
    pub fn describe(&self, lang: Language, unit: CurrencyUnit) -> String {
        match (unit, lang) {
            (CurrencyUnit::Denarii, Language::En) => {
                format!("Equals {} days of common labor", self.days)
            }
            (CurrencyUnit::Denarii, Language::Zh) => {
                format!("相当于普通工人 {} 天工资", self.days)
            }
            (CurrencyUnit::Solidi, Language::En) => format!(
                "Equals {} years of common labor income",
                crate::format::round_to(self.years, 1)
            ),
            (CurrencyUnit::Solidi, Language::Zh) => format!(
                "相当于普通工人 {} 年收入",
                crate::format::round_to(self.years, 1)
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// GoodsPurchase — Quantity of an everyday item affordable
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodsPurchase {
    pub item_id: String,
    pub name: Localized,
    pub quantity: f64,
    /// Typical price in the wealth unit.
    pub unit_price: f64,
}

// ---------------------------------------------------------------------------
// WageComparison — Wealth measured in one occupation's annual wage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageComparison {
    pub occupation: Localized,
    pub year: f64,
    pub annual_wage: f64,
    pub years_of_wages: f64,
}

// ---------------------------------------------------------------------------
// PurchasingResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchasingResult {
    pub period: String,
    pub unit: CurrencyUnit,
    /// Active wealth scalar, unrounded.
    pub wealth: f64,
    pub wheat: Availability<WheatPurchase>,
    pub land: Availability<LandRent>,
    /// Rent paid in wheat out of the wheat the wealth buys.
    pub land_in_kind: Availability<LandRent>,
    pub labor: Availability<LaborEquivalent>,
    #[serde(default)]
    pub goods: Vec<GoodsPurchase>,
    #[serde(default)]
    pub wage_comparisons: Vec<WageComparison>,
    pub lifestyle: Lifestyle,
    #[serde(default)]
    pub citations: Vec<Citation>,
}

impl PurchasingResult {
    pub fn wheat_text(&self, lang: Language) -> String {
        self.wheat
            .as_ref()
            .map(|w| w.describe(lang))
            .unwrap_or_else(|| not_available(lang))
    }

    pub fn land_text(&self, lang: Language) -> String {
        self.land
            .as_ref()
            .map(|l| l.describe(lang))
            .unwrap_or_else(|| not_available(lang))
    }

    pub fn labor_text(&self, lang: Language) -> String {
        self.labor
            .as_ref()
            .map(|l| l.describe(lang, self.unit))
            .unwrap_or_else(|| not_available(lang))
    }
}

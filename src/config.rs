use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};
use crate::models::Language;

/// Reference dataset compiled into the crate.
pub const BUILTIN_DATASET: &str = include_str!("../data/harper.json");

// -- Coin specifications ----------------------------------------------------

/// Gold in a late Roman tremissis (one third of a solidus).
pub const TREMISSIS_GOLD_G: f64 = 1.5;
pub const TREMISSES_PER_SOLIDUS: f64 = 3.0;
/// Silver in a siliqua.
pub const SILIQUA_SILVER_G: f64 = 2.0;
pub const SILIQUAE_PER_SOLIDUS: f64 = 24.0;
pub const SESTERTII_PER_DENARIUS: f64 = 4.0;
/// Orichalcum (brass) weight of a sestertius.
pub const SESTERTIUS_BRASS_G: f64 = 25.0;

// -- Purchasing power constants -------------------------------------------

pub const KG_PER_ARTABA: f64 = 30.0;
/// One artaba of wheat feeds one person for one month.
pub const PERSON_MONTHS_PER_ARTABA: f64 = 1.0;
pub const OBOLS_PER_DRACHMA: f64 = 6.0;
pub const WORKING_DAYS_PER_YEAR: f64 = 250.0;
/// An Egyptian drachma is counted as one denarius in every calculation.
pub const DRACHMAI_PER_DENARIUS: f64 = 1.0;

pub const DEFAULT_GOLD_RATIO: f64 = 0.5;

// ---------------------------------------------------------------------------
// MetalPrices
// ---------------------------------------------------------------------------

/// Modern exchange rates and bullion prices used to turn money into metal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetalPrices {
    pub gold_usd_per_gram: f64,
    pub silver_usd_per_gram: f64,
    pub cny_per_usd: f64,
    pub eur_per_usd: f64,
}

impl Default for MetalPrices {
    fn default() -> Self {
        Self {
            gold_usd_per_gram: 65.0,
            silver_usd_per_gram: 0.8,
            cny_per_usd: 7.2,
            eur_per_usd: 0.92,
        }
    }
}

impl MetalPrices {
    /// Every price and rate must be a finite, positive number.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("gold_usd_per_gram", self.gold_usd_per_gram),
            ("silver_usd_per_gram", self.silver_usd_per_gram),
            ("cny_per_usd", self.cny_per_usd),
            ("eur_per_usd", self.eur_per_usd),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::InvalidArgument(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// RemainderPolicy
// ---------------------------------------------------------------------------

/// How fractional counts of the small "remainder" denominations (sestertius,
/// tremissis) become whole coins. Primary coins are always floored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderPolicy {
    #[default]
    Floor,
    Round,
}

impl RemainderPolicy {
    pub fn apply(self, count: f64) -> f64 {
        match self {
            RemainderPolicy::Floor => count.floor(),
            RemainderPolicy::Round => count.round(),
        }
    }
}

// ---------------------------------------------------------------------------
// CalculatorConfig
// ---------------------------------------------------------------------------

/// Tunable settings shared by every conversion a [`Calculator`](crate::Calculator) runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub metal_prices: MetalPrices,
    pub remainder_policy: RemainderPolicy,
    pub default_language: Language,
    /// Maximum number of occupations listed in wage comparisons.
    pub wage_comparison_limit: usize,
    /// Maximum number of citations returned per commodity.
    pub citation_limit: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            metal_prices: MetalPrices::default(),
            remainder_policy: RemainderPolicy::default(),
            default_language: Language::default(),
            wage_comparison_limit: 5,
            citation_limit: 5,
        }
    }
}

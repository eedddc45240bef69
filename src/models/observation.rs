use serde::{Deserialize, Serialize};
use std::fmt;

use super::text::Localized;
use crate::config::{DRACHMAI_PER_DENARIUS, OBOLS_PER_DRACHMA};

// ---------------------------------------------------------------------------
// Commodity — What a price observation measures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Commodity {
    Wheat,
    RentCash,
    RentKind,
    RentSolidi,
    WageDaily,
    WageYearly,
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Commodity::Wheat => "wheat",
            Commodity::RentCash => "rent_cash",
            Commodity::RentKind => "rent_kind",
            Commodity::RentSolidi => "rent_solidi",
            Commodity::WageDaily => "wage_daily",
            Commodity::WageYearly => "wage_yearly",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// PriceUnit — Unit an observed value is recorded in
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    DrachmaiPerArtaba,
    DenariiPerArtaba,
    ArtabaePerSolidus,
    DrachmaiPerAroura,
    ArtabaePerAroura,
    SolidiPerAroura,
    ObolsPerDay,
    DrachmaiPerDay,
    DenariiPerDay,
    SolidiPerDay,
    SolidiPerYear,
}

impl PriceUnit {
    /// Express `value` (recorded in `self`) in `target`, or `None` when the
    /// two units cannot be related without an exchange rate.
    pub fn convert(self, value: f64, target: PriceUnit) -> Option<f64> {
        if self == target {
            return Some(value);
        }
        match (self, target) {
            (PriceUnit::ObolsPerDay, PriceUnit::DrachmaiPerDay) => Some(value / OBOLS_PER_DRACHMA),
            (PriceUnit::DenariiPerDay, PriceUnit::DrachmaiPerDay) => {
                Some(value * DRACHMAI_PER_DENARIUS)
            }
            (PriceUnit::DrachmaiPerDay, PriceUnit::ObolsPerDay) => Some(value * OBOLS_PER_DRACHMA),
            _ => None,
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            PriceUnit::DrachmaiPerArtaba => "dr/art",
            PriceUnit::DenariiPerArtaba => "den/art",
            PriceUnit::ArtabaePerSolidus => "art/sol",
            PriceUnit::DrachmaiPerAroura => "dr/ar",
            PriceUnit::ArtabaePerAroura => "art/ar",
            PriceUnit::SolidiPerAroura => "sol/ar",
            PriceUnit::ObolsPerDay => "ob/day",
            PriceUnit::DrachmaiPerDay => "dr/day",
            PriceUnit::DenariiPerDay => "den/day",
            PriceUnit::SolidiPerDay => "sol/day",
            PriceUnit::SolidiPerYear => "sol/yr",
        }
    }
}

impl fmt::Display for PriceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

// ---------------------------------------------------------------------------
// PriceObservation — One documented price, rent, or wage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub commodity: Commodity,
    /// May be fractional: the midpoint of an uncertain date range.
    pub year: f64,
    pub value: f64,
    pub unit: PriceUnit,
    /// Nome or region.
    pub location: Option<String>,
    pub citation: Option<String>,
    pub notes: Option<String>,
    /// Set on wage observations.
    pub occupation: Option<Localized>,
    /// Id of the period this observation is assigned to.
    pub period: String,
}

impl PriceObservation {
    pub fn to_citation(&self) -> Citation {
        Citation {
            commodity: self.commodity,
            citation: self.citation.clone(),
            year: self.year,
            location: self.location.clone(),
            value: self.value,
            unit: self.unit,
        }
    }
}

// ---------------------------------------------------------------------------
// Citation — Source reference returned alongside a result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub commodity: Commodity,
    pub citation: Option<String>,
    pub year: f64,
    pub location: Option<String>,
    pub value: f64,
    pub unit: PriceUnit,
}

// ---------------------------------------------------------------------------
// ObservedAverage — Period average with its provenance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum AverageSource {
    /// Mean of `count` matching observations.
    Observed { count: usize },
    /// Period-level constant; the period has no matching observations.
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservedAverage {
    pub value: f64,
    pub unit: PriceUnit,
    pub source: AverageSource,
}

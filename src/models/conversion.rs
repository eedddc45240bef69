use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::coins::CoinBundle;
use super::period::PeriodInfo;
use super::purchasing::PurchasingResult;
use super::text::Language;
use crate::config::{MetalPrices, DEFAULT_GOLD_RATIO};
use crate::format::round_to;

// ---------------------------------------------------------------------------
// CurrencyCode — What a single input amount is denominated in
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CurrencyCode {
    Cny,
    Eur,
    Usd,
    /// Amount is grams of gold.
    Gold,
    /// Amount is grams of silver.
    Silver,
    /// Separate gold and silver weights; see [`ConversionInput::Metal`].
    Metal,
    /// Any other code. Converted as if it were USD.
    Unrecognized(String),
}

impl CurrencyCode {
    pub fn parse(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "CNY" => CurrencyCode::Cny,
            "EUR" => CurrencyCode::Eur,
            "USD" => CurrencyCode::Usd,
            "GOLD" => CurrencyCode::Gold,
            "SILVER" => CurrencyCode::Silver,
            "METAL" => CurrencyCode::Metal,
            _ => CurrencyCode::Unrecognized(code.to_string()),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, CurrencyCode::Unrecognized(_))
    }
}

impl FromStr for CurrencyCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CurrencyCode::parse(s))
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        CurrencyCode::parse(s)
    }
}

impl From<String> for CurrencyCode {
    fn from(s: String) -> Self {
        CurrencyCode::parse(&s)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.to_string()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyCode::Cny => f.write_str("CNY"),
            CurrencyCode::Eur => f.write_str("EUR"),
            CurrencyCode::Usd => f.write_str("USD"),
            CurrencyCode::Gold => f.write_str("GOLD"),
            CurrencyCode::Silver => f.write_str("SILVER"),
            CurrencyCode::Metal => f.write_str("METAL"),
            CurrencyCode::Unrecognized(code) => f.write_str(code),
        }
    }
}

// ---------------------------------------------------------------------------
// ConversionInput
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversionInput {
    /// A money amount (or a single metal weight for GOLD/SILVER).
    Currency {
        amount: f64,
        currency: CurrencyCode,
        /// Share of the value held as gold, the rest as silver.
        gold_ratio: f64,
    },
    /// Raw metal weights in grams.
    Metal { gold_g: f64, silver_g: f64 },
}

// ---------------------------------------------------------------------------
// ConversionRequest — Immutable description of one conversion
// ---------------------------------------------------------------------------

/// Everything one conversion needs, built up front and handed to
/// [`Calculator::run`](crate::Calculator::run).
///
/// ```
/// use roman_egypt_calculator::models::{ConversionRequest, Language};
///
/// let request = ConversionRequest::currency(1000.0, "USD", "julio_claudian")
///     .with_gold_ratio(0.25)
///     .with_language(Language::En);
/// assert_eq!(request.period, "julio_claudian");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub input: ConversionInput,
    pub period: String,
    pub language: Option<Language>,
}

impl ConversionRequest {
    pub fn currency(
        amount: f64,
        currency: impl Into<CurrencyCode>,
        period: impl Into<String>,
    ) -> Self {
        Self {
            input: ConversionInput::Currency {
                amount,
                currency: currency.into(),
                gold_ratio: DEFAULT_GOLD_RATIO,
            },
            period: period.into(),
            language: None,
        }
    }

    pub fn metal(gold_g: f64, silver_g: f64, period: impl Into<String>) -> Self {
        Self {
            input: ConversionInput::Metal { gold_g, silver_g },
            period: period.into(),
            language: None,
        }
    }

    /// Set the gold share of a currency input. Ignored for metal input.
    pub fn with_gold_ratio(mut self, ratio: f64) -> Self {
        if let ConversionInput::Currency { gold_ratio, .. } = &mut self.input {
            *gold_ratio = ratio;
        }
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }
}

// ---------------------------------------------------------------------------
// MetalGrams
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetalGrams {
    pub gold_g: f64,
    pub silver_g: f64,
}

impl MetalGrams {
    /// Modern dollar value of the metal at current bullion prices.
    pub fn usd_equivalent(&self, prices: &MetalPrices) -> f64 {
        self.gold_g * prices.gold_usd_per_gram + self.silver_g * prices.silver_usd_per_gram
    }

    /// Both weights rounded to two decimals, for display.
    pub fn rounded(&self) -> Self {
        Self {
            gold_g: round_to(self.gold_g, 2),
            silver_g: round_to(self.silver_g, 2),
        }
    }
}

// ---------------------------------------------------------------------------
// ConversionResult
// ---------------------------------------------------------------------------

/// Input as the caller supplied it, echoed back for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EchoedInput {
    pub amount: f64,
    pub currency: CurrencyCode,
    pub period: String,
    pub gold_ratio: Option<f64>,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub input: EchoedInput,
    /// Metal weights rounded to two decimals.
    pub metal: MetalGrams,
    /// Modern value of the metal at current bullion prices.
    pub usd_equivalent: f64,
    pub coins: CoinBundle,
    pub purchasing: PurchasingResult,
    pub period_info: PeriodInfo,
}

impl ConversionResult {
    /// Short summary in the request's language.
    pub fn summary(&self) -> String {
        let lang = self.input.language;
        format!(
            "{} {} · {} · {} · {}",
            self.period_info.icon,
            self.period_info.name.get(lang),
            self.coins.describe(lang),
            self.purchasing.wheat_text(lang),
            self.purchasing.lifestyle.title(lang)
        )
    }
}

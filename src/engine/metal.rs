//! Modern money to gold and silver grams.

use tracing::{debug, warn};

use crate::config::MetalPrices;
use crate::error::{CalcError, Result};
use crate::models::{ConversionInput, CurrencyCode, MetalGrams};

/// Convert a money amount to US dollars.
///
/// Codes other than CNY and EUR are taken as dollars already. For an
/// unrecognized code this is a silent fallback, so a typo produces a
/// plausible but wrong figure; the fallback is logged at `warn`.
pub fn to_usd(amount: f64, currency: &CurrencyCode, prices: &MetalPrices) -> f64 {
    match currency {
        CurrencyCode::Cny => amount / prices.cny_per_usd,
        CurrencyCode::Eur => amount / prices.eur_per_usd,
        CurrencyCode::Unrecognized(code) => {
            warn!(currency = %code, "unrecognized currency code, treating amount as USD");
            amount
        }
        _ => amount,
    }
}

/// Split a dollar amount into gold and silver at current bullion prices.
/// `gold_ratio` is the share spent on gold; the rest buys silver.
pub fn usd_to_metal(usd: f64, gold_ratio: f64, prices: &MetalPrices) -> MetalGrams {
    MetalGrams {
        gold_g: usd * gold_ratio / prices.gold_usd_per_gram,
        silver_g: usd * (1.0 - gold_ratio) / prices.silver_usd_per_gram,
    }
}

/// Reduce any conversion input to gold and silver grams.
///
/// Negative or non-finite amounts and gold ratios outside `[0, 1]` are
/// rejected before anything is computed. GOLD and SILVER amounts are weights
/// attributed entirely to that metal; the gold ratio is ignored for them.
pub fn to_base_metal(input: &ConversionInput, prices: &MetalPrices) -> Result<MetalGrams> {
    let metal = match input {
        ConversionInput::Currency {
            amount,
            currency,
            gold_ratio,
        } => {
            check_non_negative("amount", *amount)?;
            match currency {
                CurrencyCode::Gold => MetalGrams {
                    gold_g: *amount,
                    silver_g: 0.0,
                },
                CurrencyCode::Silver => MetalGrams {
                    gold_g: 0.0,
                    silver_g: *amount,
                },
                CurrencyCode::Metal => {
                    return Err(CalcError::InvalidArgument(
                        "METAL input needs separate gold and silver weights".to_string(),
                    ))
                }
                _ => {
                    check_ratio(*gold_ratio)?;
                    let usd = to_usd(*amount, currency, prices);
                    usd_to_metal(usd, *gold_ratio, prices)
                }
            }
        }
        ConversionInput::Metal { gold_g, silver_g } => {
            check_non_negative("gold grams", *gold_g)?;
            check_non_negative("silver grams", *silver_g)?;
            MetalGrams {
                gold_g: *gold_g,
                silver_g: *silver_g,
            }
        }
    };

    debug!(gold_g = metal.gold_g, silver_g = metal.silver_g, "metal split");
    Ok(metal)
}

fn check_non_negative(what: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CalcError::InvalidArgument(format!(
            "{} must be a finite number, got {}",
            what, value
        )));
    }
    if value < 0.0 {
        return Err(CalcError::InvalidArgument(format!(
            "{} must not be negative, got {}",
            what, value
        )));
    }
    Ok(())
}

fn check_ratio(ratio: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&ratio) {
        return Err(CalcError::InvalidArgument(format!(
            "gold ratio must be between 0 and 1, got {}",
            ratio
        )));
    }
    Ok(())
}

//! Coin totals to purchasing power.
//!
//! The single wealth scalar (denarii or solidi) is measured against period
//! averages of wheat prices, land rents and wages. A figure the data cannot
//! support is reported as [`Availability::Unavailable`] rather than zero.

use tracing::debug;

use crate::config::{
    CalculatorConfig, DRACHMAI_PER_DENARIUS, KG_PER_ARTABA, OBOLS_PER_DRACHMA,
    PERSON_MONTHS_PER_ARTABA, WORKING_DAYS_PER_YEAR,
};
use crate::dataset::Dataset;
use crate::engine::lifestyle::classify;
use crate::format::round_to;
use crate::models::{
    Availability, CoinBundle, Commodity, CurrencyUnit, GoodsPurchase, LaborEquivalent, LandRent,
    ObservedAverage, Period, PriceUnit, PurchasingResult, UnavailableReason, WageComparison,
    WheatPurchase, WheatQuote,
};
use crate::queries::PriceQuery;

/// Evaluate what `bundle` buys in `period`.
///
/// The solidi total is used when positive, otherwise the denarii total. With
/// no wealth at all every purchasing figure is `NoWealth`, but the lifestyle
/// tier is still classified (as the poorest).
pub fn compute_purchasing(
    bundle: &CoinBundle,
    period: &Period,
    dataset: &Dataset,
    config: &CalculatorConfig,
) -> PurchasingResult {
    let (wealth, unit) = active_wealth(bundle, period);
    debug!(period = %period.id, wealth, %unit, "computing purchasing power");

    if wealth <= 0.0 {
        return empty(period, unit);
    }

    let prices = PriceQuery::new(dataset);

    let wheat = wheat(&prices, period, wealth, unit);
    let land = land(&prices, period, wealth, unit);
    let land_in_kind = wheat.as_ref().map_or_else(
        || Availability::unavailable(wheat.reason().unwrap_or(UnavailableReason::NoObservations)),
        |w| {
            prices
                .average(Commodity::RentKind, &period.id, PriceUnit::ArtabaePerAroura, None)
                .and_then(|rent| per_unit(w.artabae, rent))
        },
    );
    let labor = labor(&prices, period, wealth, unit);
    debug!(
        wheat = wheat.is_available(),
        land = land.is_available(),
        labor = labor.is_available(),
        "purchasing stages evaluated"
    );

    let goods = goods(dataset, wealth, unit);
    let mut wage_comparisons = wage_comparisons(dataset, period, wealth, unit);
    wage_comparisons.truncate(config.wage_comparison_limit);

    let rent_commodity = match unit {
        CurrencyUnit::Denarii => Commodity::RentCash,
        CurrencyUnit::Solidi => Commodity::RentSolidi,
    };
    let mut citations = prices.citations(Commodity::Wheat, &period.id, config.citation_limit);
    citations.extend(prices.citations(rent_commodity, &period.id, config.citation_limit));

    PurchasingResult {
        period: period.id.clone(),
        unit,
        wealth,
        wheat,
        land,
        land_in_kind,
        labor,
        goods,
        wage_comparisons,
        lifestyle: classify(wealth, unit),
        citations,
    }
}

fn active_wealth(bundle: &CoinBundle, period: &Period) -> (f64, CurrencyUnit) {
    match (bundle.total_solidi_equivalent, bundle.total_denarii_equivalent) {
        (Some(solidi), _) if solidi > 0.0 => (solidi, CurrencyUnit::Solidi),
        (_, Some(denarii)) if denarii > 0.0 => (denarii, CurrencyUnit::Denarii),
        _ => (0.0, period.unit()),
    }
}

fn empty(period: &Period, unit: CurrencyUnit) -> PurchasingResult {
    PurchasingResult {
        period: period.id.clone(),
        unit,
        wealth: 0.0,
        wheat: no_wealth(),
        land: no_wealth(),
        land_in_kind: no_wealth(),
        labor: no_wealth(),
        goods: Vec::new(),
        wage_comparisons: Vec::new(),
        lifestyle: classify(0.0, unit),
        citations: Vec::new(),
    }
}

fn no_wealth<T>() -> Availability<T> {
    Availability::unavailable(UnavailableReason::NoWealth)
}

fn wheat(
    prices: &PriceQuery<'_>,
    period: &Period,
    wealth: f64,
    unit: CurrencyUnit,
) -> Availability<WheatPurchase> {
    let quote = period.currency_system.wheat_quote();
    let price_unit = match (unit, quote) {
        (CurrencyUnit::Denarii, WheatQuote::DrachmaiPerArtaba) => PriceUnit::DrachmaiPerArtaba,
        (CurrencyUnit::Denarii, WheatQuote::DenariiPerArtaba) => PriceUnit::DenariiPerArtaba,
        (CurrencyUnit::Solidi, WheatQuote::ArtabaePerSolidus) => PriceUnit::ArtabaePerSolidus,
        _ => {
            debug!(period = %period.id, ?quote, %unit, "wheat quote does not match wealth unit");
            return Availability::unavailable(UnavailableReason::UnitMismatch);
        }
    };

    prices
        .average(Commodity::Wheat, &period.id, price_unit, period.wheat_fallback())
        .and_then(positive)
        .map(|price| {
            let artabae = match price_unit {
                // Yield convention: the price is artabae bought per solidus.
                PriceUnit::ArtabaePerSolidus => wealth * price.value,
                PriceUnit::DrachmaiPerArtaba => wealth * DRACHMAI_PER_DENARIUS / price.value,
                _ => wealth / price.value,
            };
            WheatPurchase {
                artabae: round_to(artabae, 2),
                kg_equivalent: (artabae * KG_PER_ARTABA).round() as u64,
                months_food: round_to(artabae * PERSON_MONTHS_PER_ARTABA, 2),
                price,
            }
        })
}

fn land(
    prices: &PriceQuery<'_>,
    period: &Period,
    wealth: f64,
    unit: CurrencyUnit,
) -> Availability<LandRent> {
    let (commodity, price_unit) = match unit {
        CurrencyUnit::Denarii => (Commodity::RentCash, PriceUnit::DrachmaiPerAroura),
        CurrencyUnit::Solidi => (Commodity::RentSolidi, PriceUnit::SolidiPerAroura),
    };
    let spend = match unit {
        CurrencyUnit::Denarii => wealth * DRACHMAI_PER_DENARIUS,
        CurrencyUnit::Solidi => wealth,
    };
    prices
        .average(commodity, &period.id, price_unit, None)
        .and_then(|rent| per_unit(spend, rent))
}

fn labor(
    prices: &PriceQuery<'_>,
    period: &Period,
    wealth: f64,
    unit: CurrencyUnit,
) -> Availability<LaborEquivalent> {
    match unit {
        CurrencyUnit::Denarii => {
            let fallback = period.avg_daily_wage_obols.map(|o| o / OBOLS_PER_DRACHMA);
            prices
                .average(Commodity::WageDaily, &period.id, PriceUnit::DrachmaiPerDay, fallback)
                .and_then(positive)
                .map(|wage| {
                    let days = wealth * DRACHMAI_PER_DENARIUS / wage.value;
                    LaborEquivalent {
                        days: days.round() as u64,
                        years: round_to(days / WORKING_DAYS_PER_YEAR, 2),
                        wage,
                    }
                })
        }
        CurrencyUnit::Solidi => prices
            .average(Commodity::WageYearly, &period.id, PriceUnit::SolidiPerYear, None)
            .and_then(positive)
            .map(|wage| {
                let years = wealth / wage.value;
                LaborEquivalent {
                    days: (years * WORKING_DAYS_PER_YEAR).round() as u64,
                    years: round_to(years, 2),
                    wage,
                }
            }),
    }
}

fn goods(dataset: &Dataset, wealth: f64, unit: CurrencyUnit) -> Vec<GoodsPurchase> {
    dataset
        .items
        .iter()
        .filter_map(|item| {
            let price = item.price_in(unit).filter(|p| *p > 0.0)?;
            Some(GoodsPurchase {
                item_id: item.id.clone(),
                name: item.name.clone(),
                quantity: round_to(wealth / price, 2),
                unit_price: price,
            })
        })
        .collect()
}

/// Wealth measured against each documented occupation's annual wage,
/// best-paid occupation first.
fn wage_comparisons(
    dataset: &Dataset,
    period: &Period,
    wealth: f64,
    unit: CurrencyUnit,
) -> Vec<WageComparison> {
    let annual = |commodity: Commodity| {
        dataset.observations(commodity, &period.id).filter_map(move |o| {
            let occupation = o.occupation.clone()?;
            let annual_wage = match (unit, commodity) {
                (CurrencyUnit::Denarii, Commodity::WageDaily) => {
                    o.unit.convert(o.value, PriceUnit::DrachmaiPerDay)? * WORKING_DAYS_PER_YEAR
                        / DRACHMAI_PER_DENARIUS
                }
                (CurrencyUnit::Solidi, Commodity::WageDaily) => {
                    o.unit.convert(o.value, PriceUnit::SolidiPerDay)? * WORKING_DAYS_PER_YEAR
                }
                (CurrencyUnit::Solidi, Commodity::WageYearly) => {
                    o.unit.convert(o.value, PriceUnit::SolidiPerYear)?
                }
                _ => return None,
            };
            (annual_wage > 0.0).then(|| WageComparison {
                occupation,
                year: o.year,
                annual_wage: round_to(annual_wage, 2),
                years_of_wages: round_to(wealth / annual_wage, 2),
            })
        })
    };

    let mut comparisons: Vec<WageComparison> = match unit {
        CurrencyUnit::Denarii => annual(Commodity::WageDaily).collect(),
        CurrencyUnit::Solidi => annual(Commodity::WageYearly)
            .chain(annual(Commodity::WageDaily))
            .collect(),
    };
    comparisons.sort_by(|a, b| b.annual_wage.total_cmp(&a.annual_wage));
    comparisons
}

fn positive(average: ObservedAverage) -> Availability<ObservedAverage> {
    if average.value > 0.0 {
        Availability::Available(average)
    } else {
        Availability::unavailable(UnavailableReason::NoObservations)
    }
}

fn per_unit(amount: f64, rent: ObservedAverage) -> Availability<LandRent> {
    positive(rent).map(|rent| LandRent {
        aroura_years: round_to(amount / rent.value, 2),
        rent_per_aroura: rent,
    })
}

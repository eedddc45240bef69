//! Gold and silver grams to period coinage.
//!
//! Whole coins are always floored so a bundle never claims more metal than
//! was supplied. The base-unit totals are summed from the floored counts,
//! which makes conversion non-additive: two small purses can total less than
//! one purse holding the same metal.

use tracing::debug;

use crate::config::{
    RemainderPolicy, SESTERTII_PER_DENARIUS, SESTERTIUS_BRASS_G, SILIQUAE_PER_SOLIDUS,
    SILIQUA_SILVER_G, TREMISSES_PER_SOLIDUS, TREMISSIS_GOLD_G,
};
use crate::error::{CalcError, Result};
use crate::models::{CoinBundle, CoinCount, Coinage, Denomination, Period};

/// Mint `gold_g` and `silver_g` into the coinage of `period`.
///
/// Dispatches on the period's currency system: the aureus/denarius standard,
/// the debased antoninianus, or the late solidus standard. `policy` governs
/// the small remainder denominations only.
pub fn map_to_coins(
    gold_g: f64,
    silver_g: f64,
    period: &Period,
    policy: RemainderPolicy,
) -> Result<CoinBundle> {
    let coinage = period.coinage();
    debug!(period = %period.id, ?coinage, gold_g, silver_g, "mapping metal to coins");

    match coinage {
        Coinage::Denarius | Coinage::Antoninianus => {
            denarius_standard(gold_g, silver_g, period, policy)
        }
        Coinage::Solidus => solidus_standard(gold_g, silver_g, period, policy),
    }
}

fn denarius_standard(
    gold_g: f64,
    silver_g: f64,
    period: &Period,
    policy: RemainderPolicy,
) -> Result<CoinBundle> {
    let aureus_g = constant(period, "gold_content_aureus_g", period.gold_content_aureus_g)?;
    let denarius_g = constant(
        period,
        "silver_content_denarius_g",
        period.silver_content_denarius_g,
    )?;
    let per_aureus = constant(
        period,
        "denarii_per_aureus",
        period.denarii_per_aureus.map(f64::from),
    )?;

    let aurei = (gold_g / aureus_g).floor();
    let leftover_gold = (gold_g - aurei * aureus_g).max(0.0);

    let gold_as_denarii = leftover_gold / aureus_g * per_aureus;
    let silver_as_denarii = silver_g / denarius_g;
    let denarii = gold_as_denarii.floor() + silver_as_denarii.floor();

    let total = aurei * per_aureus + denarii;

    let mut coins = vec![CoinCount {
        denomination: Denomination::Aureus,
        count: aurei,
        grams_each: aureus_g,
    }];

    if period.coinage() == Coinage::Antoninianus {
        coins.push(CoinCount {
            denomination: Denomination::Antoninianus,
            count: denarii,
            grams_each: denarius_g,
        });
    } else {
        // Small change for display; not part of the total. The gold and
        // silver remainders together can exceed a denarius, so the count is
        // capped below one denarius' worth.
        let fraction = gold_as_denarii.fract() + silver_as_denarii.fract();
        let sestertii = policy
            .apply(fraction * SESTERTII_PER_DENARIUS)
            .min(SESTERTII_PER_DENARIUS - 1.0);
        coins.push(CoinCount {
            denomination: Denomination::Denarius,
            count: denarii,
            grams_each: denarius_g,
        });
        coins.push(CoinCount {
            denomination: Denomination::Sestertius,
            count: sestertii,
            grams_each: SESTERTIUS_BRASS_G,
        });
    }

    Ok(CoinBundle {
        period: period.id.clone(),
        coinage: period.coinage(),
        coins,
        total_denarii_equivalent: Some(total),
        total_solidi_equivalent: None,
    })
}

fn solidus_standard(
    gold_g: f64,
    silver_g: f64,
    period: &Period,
    policy: RemainderPolicy,
) -> Result<CoinBundle> {
    let solidus_g = constant(period, "gold_content_solidus_g", period.gold_content_solidus_g)?;

    let solidi = (gold_g / solidus_g).floor();
    let leftover_gold = (gold_g - solidi * solidus_g).max(0.0);
    let whole_tremisses = (leftover_gold / TREMISSIS_GOLD_G).floor();
    let siliquae = (silver_g / SILIQUA_SILVER_G).floor();

    // The policy only changes the displayed tremissis count; the total
    // always counts whole tremisses.
    let total =
        solidi + whole_tremisses / TREMISSES_PER_SOLIDUS + siliquae / SILIQUAE_PER_SOLIDUS;
    let tremisses = policy.apply(leftover_gold / TREMISSIS_GOLD_G);

    Ok(CoinBundle {
        period: period.id.clone(),
        coinage: Coinage::Solidus,
        coins: vec![
            CoinCount {
                denomination: Denomination::Solidus,
                count: solidi,
                grams_each: solidus_g,
            },
            CoinCount {
                denomination: Denomination::Tremissis,
                count: tremisses,
                grams_each: TREMISSIS_GOLD_G,
            },
            CoinCount {
                denomination: Denomination::Siliqua,
                count: siliquae,
                grams_each: SILIQUA_SILVER_G,
            },
        ],
        total_denarii_equivalent: None,
        total_solidi_equivalent: Some(total),
    })
}

fn constant(period: &Period, name: &str, value: Option<f64>) -> Result<f64> {
    value.filter(|v| *v > 0.0).ok_or_else(|| {
        CalcError::Dataset(format!("period '{}' has no usable {}", period.id, name))
    })
}

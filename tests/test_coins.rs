//! Coin mapper tests, including randomized property checks over every
//! period of the embedded dataset.

mod common;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roman_egypt_calculator::config::{SILIQUAE_PER_SOLIDUS, SILIQUA_SILVER_G};
use roman_egypt_calculator::engine::map_to_coins;
use roman_egypt_calculator::models::{Coinage, CoinBundle, Denomination, Language, Metal, Period};
use roman_egypt_calculator::{Dataset, RemainderPolicy};

fn periods() -> Vec<Period> {
    Dataset::builtin().unwrap().periods.clone()
}

fn mint(gold_g: f64, silver_g: f64, period: &Period) -> CoinBundle {
    map_to_coins(gold_g, silver_g, period, RemainderPolicy::Floor).unwrap()
}

/// Exact (unfloored) worth of the metal in the period's base unit.
fn metal_worth(gold_g: f64, silver_g: f64, period: &Period) -> f64 {
    match period.coinage() {
        Coinage::Denarius | Coinage::Antoninianus => {
            let per_aureus = f64::from(period.denarii_per_aureus.unwrap());
            gold_g / period.gold_content_aureus_g.unwrap() * per_aureus
                + silver_g / period.silver_content_denarius_g.unwrap()
        }
        Coinage::Solidus => {
            gold_g / period.gold_content_solidus_g.unwrap()
                + silver_g / (SILIQUA_SILVER_G * SILIQUAE_PER_SOLIDUS)
        }
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn flooring_never_overstates_wealth() {
    let mut rng = StdRng::seed_from_u64(27);
    for period in periods() {
        for _ in 0..500 {
            let gold = rng.gen_range(0.0..500.0);
            let silver = rng.gen_range(0.0..20_000.0);
            for policy in [RemainderPolicy::Floor, RemainderPolicy::Round] {
                let bundle = map_to_coins(gold, silver, &period, policy).unwrap();
                let (total, _) = bundle.total();
                assert!(
                    total <= metal_worth(gold, silver, &period) + 1e-9,
                    "{} ({:?}): {} g gold + {} g silver minted to {}",
                    period.id,
                    policy,
                    gold,
                    silver,
                    total
                );
            }
        }
    }
}

#[test]
fn totals_are_monotonic_in_each_metal() {
    let mut rng = StdRng::seed_from_u64(641);
    for period in periods() {
        for _ in 0..300 {
            let gold = rng.gen_range(0.0..100.0);
            let silver = rng.gen_range(0.0..5_000.0);
            let base = mint(gold, silver, &period).total().0;

            let more_gold = mint(gold + rng.gen_range(0.0..20.0), silver, &period).total().0;
            let more_silver = mint(gold, silver + rng.gen_range(0.0..500.0), &period).total().0;
            assert!(more_gold >= base, "{}: more gold lowered the total", period.id);
            assert!(more_silver >= base, "{}: more silver lowered the total", period.id);
        }
    }
}

#[test]
fn zero_metal_mints_nothing() {
    for period in periods() {
        let bundle = mint(0.0, 0.0, &period);
        assert!(bundle.is_empty(), "{} minted coins from nothing", period.id);
        assert_eq!(bundle.total().0, 0.0);
    }
}

#[test]
fn exactly_one_total_per_coinage() {
    for period in periods() {
        let bundle = mint(12.0, 300.0, &period);
        match period.coinage() {
            Coinage::Solidus => {
                assert!(bundle.total_solidi_equivalent.is_some());
                assert!(bundle.total_denarii_equivalent.is_none());
            }
            Coinage::Denarius | Coinage::Antoninianus => {
                assert!(bundle.total_denarii_equivalent.is_some());
                assert!(bundle.total_solidi_equivalent.is_none());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn gold_remainder_becomes_denarii() {
    let ds = Dataset::builtin().unwrap();
    let julio = ds.period("julio_claudian").unwrap();

    // 1000 USD at an even split: 500/65 g gold, 625 g silver.
    let bundle = mint(500.0 / 65.0, 625.0, julio);
    assert_eq!(bundle.count(Denomination::Aureus), 0.0);
    assert_eq!(bundle.count(Denomination::Denarius), 184.0);
    assert_eq!(bundle.total_denarii_equivalent, Some(184.0));
    assert_eq!(bundle.describe(Language::En), "0 aurei + 184 denarii");
}

#[test]
fn whole_aurei_count_at_the_exchange_rate() {
    let ds = Dataset::builtin().unwrap();
    let flavian = ds.period("flavian_antonine").unwrap();

    let bundle = mint(14.7, 0.0, flavian);
    assert_eq!(bundle.count(Denomination::Aureus), 2.0);
    assert_eq!(bundle.total_denarii_equivalent, Some(50.0));
}

#[test]
fn five_grams_of_gold_is_one_solidus() {
    let ds = Dataset::builtin().unwrap();
    let byzantine = ds.period("byzantine_early").unwrap();

    let bundle = mint(5.0, 0.0, byzantine);
    assert_eq!(bundle.count(Denomination::Solidus), 1.0);
    assert_eq!(bundle.count(Denomination::Tremissis), 0.0);
    assert_eq!(bundle.total_solidi_equivalent, Some(1.0));
}

#[test]
fn siliquae_count_toward_the_solidus_total() {
    let ds = Dataset::builtin().unwrap();
    let late = ds.period("late_roman").unwrap();

    let bundle = mint(7.5, 48.0, late);
    assert_eq!(bundle.count(Denomination::Solidus), 1.0);
    assert_eq!(bundle.count(Denomination::Tremissis), 2.0);
    assert_eq!(bundle.count(Denomination::Siliqua), 24.0);
    common::assert_close(bundle.total_solidi_equivalent.unwrap(), 1.0 + 2.0 / 3.0 + 1.0, 1e-9);
}

#[test]
fn crisis_mints_antoniniani_without_small_change() {
    let ds = Dataset::builtin().unwrap();
    let crisis = ds.period("crisis_3c").unwrap();

    let bundle = mint(0.0, 15.7, crisis);
    assert_eq!(bundle.coinage, Coinage::Antoninianus);
    assert_eq!(bundle.count(Denomination::Antoninianus), 10.0);
    assert_eq!(bundle.count(Denomination::Denarius), 0.0);
    assert_eq!(bundle.count(Denomination::Sestertius), 0.0);
    assert!(bundle.describe(Language::En).contains("antoniniani"));
}

#[test]
fn conversion_is_not_additive() {
    let ds = Dataset::builtin().unwrap();
    let julio = ds.period("julio_claudian").unwrap();

    let half = mint(0.0, 2.0, julio).total().0;
    let whole = mint(0.0, 4.0, julio).total().0;
    assert_eq!(half + half, 0.0);
    assert_eq!(whole, 1.0);
}

#[test]
fn round_policy_only_touches_remainders() {
    let ds = Dataset::builtin().unwrap();
    let julio = ds.period("julio_claudian").unwrap();

    // 2.5 g silver is 0.641 of a denarius: 2.56 sestertii.
    let floor = map_to_coins(0.0, 2.5, julio, RemainderPolicy::Floor).unwrap();
    let round = map_to_coins(0.0, 2.5, julio, RemainderPolicy::Round).unwrap();
    assert_eq!(floor.count(Denomination::Sestertius), 2.0);
    assert_eq!(round.count(Denomination::Sestertius), 3.0);
    assert_eq!(floor.count(Denomination::Denarius), 0.0);
    assert_eq!(round.count(Denomination::Denarius), 0.0);
    assert_eq!(floor.total(), round.total());
}

#[test]
fn sestertii_never_reach_a_denarius() {
    let ds = Dataset::builtin().unwrap();
    let julio = ds.period("julio_claudian").unwrap();

    // 3.5 g silver (0.897 denarius) rounds to four sestertii, a whole denarius.
    let round = map_to_coins(0.0, 3.5, julio, RemainderPolicy::Round).unwrap();
    assert_eq!(round.count(Denomination::Sestertius), 3.0);

    let mut rng = StdRng::seed_from_u64(68);
    for _ in 0..500 {
        let gold = rng.gen_range(0.0..50.0);
        let silver = rng.gen_range(0.0..500.0);
        for policy in [RemainderPolicy::Floor, RemainderPolicy::Round] {
            let bundle = map_to_coins(gold, silver, julio, policy).unwrap();
            assert!(bundle.count(Denomination::Sestertius) <= 3.0);
        }
    }
}

#[test]
fn minted_gold_never_exceeds_the_gold_supplied() {
    let mut rng = StdRng::seed_from_u64(476);
    for period in periods() {
        for _ in 0..200 {
            let gold = rng.gen_range(0.0..200.0);
            let bundle = mint(gold, 0.0, &period);
            assert!(
                bundle.grams_of(Metal::Gold) <= gold + 1e-9,
                "{}: {} g gold minted into {} g of gold coins",
                period.id,
                gold,
                bundle.grams_of(Metal::Gold)
            );
            assert_eq!(
                bundle.grams_of(Metal::Brass),
                bundle.count(Denomination::Sestertius) * 25.0
            );
        }
    }
}

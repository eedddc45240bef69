//! Period, price and catalogue query tests.

mod common;

use roman_egypt_calculator::models::{
    AverageSource, Coinage, Commodity, PriceUnit, SocialClass, UnavailableReason,
};
use roman_egypt_calculator::queries::{CatalogQuery, PeriodQuery, PriceQuery};

// ---------------------------------------------------------------------------
// PeriodQuery
// ---------------------------------------------------------------------------

#[test]
fn list_keeps_dataset_order() {
    let calc = common::calculator();
    let ids: Vec<String> = calc.get_periods().into_iter().map(|p| p.id).collect();
    assert_eq!(
        ids,
        [
            "julio_claudian",
            "flavian_antonine",
            "severan",
            "crisis_3c",
            "tetrarchy_constantine",
            "late_roman",
            "byzantine_early"
        ]
    );
}

#[test]
fn summaries_render_bce_years() {
    let calc = common::calculator();
    let periods = calc.get_periods();
    assert_eq!(periods[0].year_range, "27 BCE-68 CE");
    assert_eq!(periods[1].year_range, "69-192 CE");
}

#[test]
fn for_year_prefers_the_later_period_at_a_boundary() {
    let calc = common::calculator();
    let pq = calc.periods();

    assert_eq!(pq.for_year(-10).unwrap().id, "julio_claudian");
    assert_eq!(pq.for_year(234).unwrap().id, "severan");
    assert_eq!(pq.for_year(235).unwrap().id, "crisis_3c");
    assert_eq!(pq.for_year(476).unwrap().id, "byzantine_early");
    assert!(pq.for_year(700).is_none());
}

#[test]
fn require_unknown_period_fails() {
    let calc = common::calculator();
    let err = calc.periods().require("hellenistic").unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn periods_by_coinage() {
    let ds = common::sample_dataset();
    let pq = PeriodQuery::new(&ds);
    let solidus: Vec<&str> = pq
        .with_coinage(Coinage::Solidus)
        .into_iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(solidus, ["omega"]);
}

// ---------------------------------------------------------------------------
// PriceQuery
// ---------------------------------------------------------------------------

#[test]
fn average_converts_obols_to_drachmai() {
    let ds = common::sample_dataset();
    let prices = PriceQuery::new(&ds);

    let wage = prices.average(Commodity::WageDaily, "alpha", PriceUnit::DrachmaiPerDay, None);
    let wage = wage.as_ref().unwrap();
    assert_eq!(wage.value, 2.0);
    assert_eq!(wage.source, AverageSource::Observed { count: 1 });
}

#[test]
fn average_skips_unconvertible_units() {
    let ds = common::sample_dataset();
    let prices = PriceQuery::new(&ds);

    // Solidi-per-year wages cannot be expressed per day.
    let wage = prices.average(Commodity::WageYearly, "omega", PriceUnit::DrachmaiPerDay, None);
    assert_eq!(wage.reason(), Some(UnavailableReason::NoObservations));
}

#[test]
fn average_falls_back_only_without_observations() {
    let ds = common::sample_dataset();
    let prices = PriceQuery::new(&ds);

    let observed =
        prices.average(Commodity::Wheat, "omega", PriceUnit::ArtabaePerSolidus, Some(99.0));
    assert_eq!(observed.as_ref().unwrap().value, 10.0);

    let fallback =
        prices.average(Commodity::Wheat, "alpha", PriceUnit::DrachmaiPerArtaba, Some(7.0));
    let fallback = fallback.as_ref().unwrap();
    assert_eq!(fallback.value, 7.0);
    assert_eq!(fallback.source, AverageSource::Fallback);
}

#[test]
fn citations_are_capped() {
    let calc = common::calculator();
    let citations = calc.prices().citations(Commodity::Wheat, "byzantine_early", 3);
    assert_eq!(citations.len(), 3);
    assert!(citations.iter().all(|c| c.commodity == Commodity::Wheat));
}

#[test]
fn year_span_of_observations() {
    let ds = common::sample_dataset();
    let prices = PriceQuery::new(&ds);
    assert_eq!(prices.year_span(Commodity::Wheat, "omega"), Some((150.0, 160.0)));
    assert_eq!(prices.year_span(Commodity::Wheat, "alpha"), None);
}

// ---------------------------------------------------------------------------
// CatalogQuery
// ---------------------------------------------------------------------------

#[test]
fn occupations_and_items() {
    let ds = common::sample_dataset();
    let catalog = CatalogQuery::new(&ds);

    assert_eq!(catalog.occupations_in(SocialClass::MiddleLower).len(), 1);
    assert!(catalog.occupations_in(SocialClass::Upper).is_empty());
    assert_eq!(catalog.item("mule").unwrap().category, "animal");
    assert_eq!(catalog.items_in("food").len(), 1);
    assert!(catalog.item("chariot").is_none());
}

#[test]
fn calculator_exposes_catalogues() {
    let calc = common::calculator();
    assert!(!calc.get_occupations().is_empty());
    assert!(calc.get_items().iter().any(|i| i.id == "slave_adult"));
    assert!(calc.to_string().starts_with("Calculator(periods=7"));
    assert_eq!(calc.config().citation_limit, 5);
}

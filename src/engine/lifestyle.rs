//! Wealth to social tier.

use crate::models::{CurrencyUnit, Lifestyle, LifestyleTier, Localized};

/// Lower bounds, wealthiest tier first. Anything below the last is `Poor`.
const SOLIDI_THRESHOLDS: [(f64, LifestyleTier); 4] = [
    (100.0, LifestyleTier::Elite),
    (20.0, LifestyleTier::UpperMiddle),
    (5.0, LifestyleTier::Middle),
    (1.0, LifestyleTier::LowerMiddle),
];

const DENARII_THRESHOLDS: [(f64, LifestyleTier); 4] = [
    (10_000.0, LifestyleTier::Elite),
    (2_000.0, LifestyleTier::UpperMiddle),
    (400.0, LifestyleTier::Middle),
    (100.0, LifestyleTier::LowerMiddle),
];

/// Classify `wealth` (in `unit`) into a lifestyle tier.
///
/// A step function: non-decreasing in `wealth`, with each bound inclusive.
pub fn classify(wealth: f64, unit: CurrencyUnit) -> Lifestyle {
    let thresholds = match unit {
        CurrencyUnit::Solidi => &SOLIDI_THRESHOLDS,
        CurrencyUnit::Denarii => &DENARII_THRESHOLDS,
    };
    let tier = thresholds
        .iter()
        .find(|(bound, _)| wealth >= *bound)
        .map(|(_, tier)| *tier)
        .unwrap_or(LifestyleTier::Poor);

    let (title, description) = texts(tier, unit);
    Lifestyle {
        tier,
        unit,
        title,
        description,
        icon: icon(tier).to_string(),
    }
}

fn icon(tier: LifestyleTier) -> &'static str {
    match tier {
        LifestyleTier::Elite => "👑",
        LifestyleTier::UpperMiddle => "🏛️",
        LifestyleTier::Middle => "🔨",
        LifestyleTier::LowerMiddle => "⛏️",
        LifestyleTier::Poor => "🥣",
    }
}

fn texts(tier: LifestyleTier, unit: CurrencyUnit) -> (Localized, Localized) {
    use LifestyleTier::*;

    match (unit, tier) {
        (CurrencyUnit::Solidi, Elite) => (
            Localized::new("Elite/High Official", "贵族/高级官员"),
            Localized::new(
                "You have wealth equivalent to a major landowner or high official. \
                 You could buy multiple properties and employ many servants.",
                "你拥有相当于大地主或高级官员的财富。可以购置多处房产，雇佣众多仆人。",
            ),
        ),
        (CurrencyUnit::Solidi, UpperMiddle) => (
            Localized::new("Wealthy Merchant/Medium Landowner", "富裕商人/中级地主"),
            Localized::new(
                "Equivalent to a successful merchant or medium landowner. \
                 Comfortable life with surplus for investment.",
                "相当于成功商人或中等规模地主。生活舒适，有余力投资。",
            ),
        ),
        (CurrencyUnit::Solidi, Middle) => (
            Localized::new("Craftsman/Small Merchant", "工匠/小商人"),
            Localized::new(
                "Can maintain a decent life, support a family comfortably, with some savings.",
                "可以维持体面生活，养家糊口绰绰有余，略有积蓄。",
            ),
        ),
        (CurrencyUnit::Solidi, LowerMiddle) => (
            Localized::new("Common Laborer", "普通劳工"),
            Localized::new(
                "Can sustain basic living for a few months, but needs continuous work.",
                "可以维持基本生活几个月，但需要持续工作。",
            ),
        ),
        (CurrencyUnit::Solidi, Poor) => (
            Localized::new("Poor", "贫民"),
            Localized::new(
                "Barely subsisting, needs to find work immediately.",
                "勉强糊口，需要立即找到工作。",
            ),
        ),
        (CurrencyUnit::Denarii, Elite) => (
            Localized::new("Equestrian Class/Wealthy Merchant", "骑士阶层/富商"),
            Localized::new(
                "You have equestrian-level wealth! Could participate in politics, \
                 own extensive land and slaves.",
                "你拥有骑士阶层的财富！可以参与政治，拥有大量土地和奴隶。",
            ),
        ),
        (CurrencyUnit::Denarii, UpperMiddle) => (
            Localized::new("Successful Craftsman/Merchant", "成功工匠/商人"),
            Localized::new(
                "Equivalent to a successful craftsman or merchant, \
                 wealthy life with higher social status.",
                "相当于成功的工匠或商人，生活富裕，社会地位较高。",
            ),
        ),
        (CurrencyUnit::Denarii, Middle) => (
            Localized::new("Medium Craftsman/Smallholder", "中等工匠/自耕农"),
            Localized::new(
                "Can maintain stable middle-class life, support a family without worry.",
                "可以维持稳定的中产生活，养活全家无忧。",
            ),
        ),
        (CurrencyUnit::Denarii, LowerMiddle) => (
            Localized::new("Common Farmer/Hired Worker", "普通农民/雇工"),
            Localized::new(
                "Equals a few months' income for a common farmer, can maintain basic living.",
                "相当于普通农民几个月的收入，可以维持基本生活。",
            ),
        ),
        (CurrencyUnit::Denarii, Poor) => (
            Localized::new("Poor Laborer", "贫苦劳工"),
            Localized::new(
                "Only enough for short-term survival, need to find work quickly.",
                "只够维持短期生活，需要尽快找到工作。",
            ),
        ),
    }
}

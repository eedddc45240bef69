//! Shared test fixtures for the calculator integration tests.
//!
//! Provides the embedded-dataset calculator plus a small two-period sample
//! dataset: `alpha` (denarius standard, no wheat observations and no wheat
//! fallback) and `omega` (solidus standard with a handful of observations).

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use flate2::write::GzEncoder;
use flate2::Compression;
use roman_egypt_calculator::{Calculator, Dataset};
use serde_json::{json, Value};

/// Calculator over the embedded dataset with default configuration.
pub fn calculator() -> Calculator {
    Calculator::builder().build().unwrap()
}

/// Calculator over [`sample_dataset`].
pub fn sample_calculator() -> Calculator {
    Calculator::builder().dataset(sample_dataset()).build().unwrap()
}

pub fn sample_dataset() -> Dataset {
    Dataset::from_json_str(&sample_json().to_string()).unwrap()
}

pub fn sample_json() -> Value {
    json!({
        "metadata": {
            "source": "test fixture",
            "citation": "none"
        },
        "periods": [
            {
                "id": "alpha",
                "name": { "en": "Alpha", "zh": "甲" },
                "start_year": 1,
                "end_year": 100,
                "currency_system": "silver_denarius",
                "description": { "en": "First test era" },
                "gold_content_aureus_g": 8.0,
                "silver_content_denarius_g": 4.0,
                "denarii_per_aureus": 25,
                "avg_daily_wage_obols": 6,
                "icon": "A"
            },
            {
                "id": "omega",
                "name": { "en": "Omega", "zh": "乙" },
                "start_year": 101,
                "end_year": 200,
                "currency_system": "solidus_gold",
                "description": { "en": "Second test era" },
                "gold_content_solidus_g": 4.5,
                "avg_wheat_art_per_sol": 10,
                "icon": "O"
            }
        ],
        "observations": [
            { "commodity": "rent_cash", "year": 50, "value": 10, "unit": "drachmai_per_aroura",
              "citation": "P. Test 1", "period": "alpha" },
            { "commodity": "rent_cash", "year": 60, "value": 30, "unit": "drachmai_per_aroura",
              "citation": "P. Test 2", "period": "alpha" },
            { "commodity": "wage_daily", "year": 70, "value": 12, "unit": "obols_per_day",
              "occupation": { "en": "mason", "zh": "石匠" }, "period": "alpha" },
            { "commodity": "wheat", "year": 150, "value": 12, "unit": "artabae_per_solidus",
              "citation": "P. Test 3", "period": "omega" },
            { "commodity": "wheat", "year": 160, "value": 8, "unit": "artabae_per_solidus",
              "citation": "P. Test 4", "period": "omega" },
            { "commodity": "wage_yearly", "year": 170, "value": 2, "unit": "solidi_per_year",
              "occupation": { "en": "guard", "zh": "护卫" }, "period": "omega" },
            { "commodity": "wage_yearly", "year": 180, "value": 4, "unit": "solidi_per_year",
              "occupation": { "en": "scribe", "zh": "书记" }, "period": "omega" }
        ],
        "occupations": [
            { "id": "mason", "name": { "en": "Mason", "zh": "石匠" }, "social_class": "middle_lower" }
        ],
        "items": [
            { "id": "loaf", "name": { "en": "Loaf", "zh": "面包" }, "category": "food",
              "typical_prices": [ { "value": 3, "unit": "obols" } ] },
            { "id": "mule", "name": { "en": "Mule", "zh": "骡" }, "category": "animal",
              "typical_prices": [ { "value": 2, "unit": "solidi" } ] }
        ]
    })
}

/// Write `value` as a plain JSON file inside `dir`.
pub fn write_json(dir: &tempfile::TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, value.to_string()).unwrap();
    path
}

/// Write `value` as a gzipped JSON file inside `dir`.
pub fn write_gz(dir: &tempfile::TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    let file = fs::File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(value.to_string().as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}

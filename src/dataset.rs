//! The reference dataset of periods, price observations, occupations and items.
//!
//! The crate ships the Harper database of prices, wages and rents for Roman
//! Egypt as embedded JSON. A replacement dataset with the same schema can be
//! loaded from a `.json` or `.json.gz` file. Every dataset is validated on
//! load and never mutated afterwards.

use std::collections::HashSet;
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config;
use crate::error::{CalcError, Result};
use crate::models::{Coinage, Commodity, Item, Occupation, Period, PriceObservation};

static BUILTIN: OnceLock<Arc<Dataset>> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub source: String,
    pub citation: String,
    pub original_article: Option<String>,
}

/// Static tables of periods, observations and catalogue entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub metadata: DatasetMetadata,
    pub periods: Vec<Period>,
    pub observations: Vec<PriceObservation>,
    #[serde(default)]
    pub occupations: Vec<Occupation>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Dataset {
    /// The embedded Harper dataset, parsed once per process and shared.
    pub fn builtin() -> Result<Arc<Dataset>> {
        if let Some(ds) = BUILTIN.get() {
            return Ok(Arc::clone(ds));
        }
        let parsed = Arc::new(Dataset::from_json_str(config::BUILTIN_DATASET)?);
        debug!(
            periods = parsed.periods.len(),
            observations = parsed.observations.len(),
            "parsed builtin dataset"
        );
        Ok(Arc::clone(BUILTIN.get_or_init(|| parsed)))
    }

    /// Parse and validate a dataset from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load and validate a dataset file (handles `.gz` transparently).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let contents = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
            let file = fs::File::open(path)?;
            let mut decoder = BufReader::new(GzDecoder::new(BufReader::new(file)));
            let mut contents = String::new();
            decoder.read_to_string(&mut contents)?;
            contents
        } else {
            fs::read_to_string(path)?
        };

        let dataset = match Dataset::from_json_str(&contents) {
            Ok(ds) => ds,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "rejected dataset file");
                return Err(e);
            }
        };

        info!(
            path = %path.display(),
            periods = dataset.periods.len(),
            observations = dataset.observations.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Check the invariants the conversion pipeline relies on.
    ///
    /// - period ids are unique and every period's coin constants match its
    ///   currency system
    /// - periods, ordered by start year, leave no gap between them
    /// - every observation is tagged with a known period and carries a finite,
    ///   non-negative value
    pub fn validate(&self) -> Result<()> {
        if self.periods.is_empty() {
            return Err(CalcError::Dataset("dataset has no periods".to_string()));
        }

        let mut ids = HashSet::new();
        for p in &self.periods {
            if !ids.insert(p.id.as_str()) {
                return Err(CalcError::Dataset(format!("duplicate period id '{}'", p.id)));
            }
            if p.start_year > p.end_year {
                return Err(CalcError::Dataset(format!(
                    "period '{}' starts after it ends ({} > {})",
                    p.id, p.start_year, p.end_year
                )));
            }
            validate_coin_constants(p)?;
        }

        let mut ordered: Vec<&Period> = self.periods.iter().collect();
        ordered.sort_by_key(|p| p.start_year);
        for pair in ordered.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if next.start_year > prev.end_year + 1 {
                return Err(CalcError::Dataset(format!(
                    "gap between '{}' (ends {}) and '{}' (starts {})",
                    prev.id, prev.end_year, next.id, next.start_year
                )));
            }
        }

        for (i, obs) in self.observations.iter().enumerate() {
            if !ids.contains(obs.period.as_str()) {
                return Err(CalcError::Dataset(format!(
                    "observation #{} ({}) references unknown period '{}'",
                    i, obs.commodity, obs.period
                )));
            }
            if !obs.value.is_finite() || obs.value < 0.0 || !obs.year.is_finite() {
                return Err(CalcError::Dataset(format!(
                    "observation #{} ({}) has invalid year/value {}/{}",
                    i, obs.commodity, obs.year, obs.value
                )));
            }
        }

        Ok(())
    }

    pub fn period(&self, id: &str) -> Option<&Period> {
        self.periods.iter().find(|p| p.id == id)
    }

    /// Like [`period`](Self::period), but an unknown id is a validation error.
    pub fn require_period(&self, id: &str) -> Result<&Period> {
        self.period(id)
            .ok_or_else(|| CalcError::UnknownPeriod(id.to_string()))
    }

    /// Observations of one commodity assigned to one period, in dataset order.
    pub fn observations<'a>(
        &'a self,
        commodity: Commodity,
        period_id: &'a str,
    ) -> impl Iterator<Item = &'a PriceObservation> + 'a {
        self.observations
            .iter()
            .filter(move |o| o.commodity == commodity && o.period == period_id)
    }
}

fn validate_coin_constants(p: &Period) -> Result<()> {
    let positive = |v: Option<f64>| v.is_some_and(|g| g.is_finite() && g > 0.0);
    let ok = match p.coinage() {
        Coinage::Denarius | Coinage::Antoninianus => {
            positive(p.gold_content_aureus_g)
                && positive(p.silver_content_denarius_g)
                && p.denarii_per_aureus.is_some_and(|n| n > 0)
        }
        Coinage::Solidus => positive(p.gold_content_solidus_g),
    };
    if ok {
        Ok(())
    } else {
        Err(CalcError::Dataset(format!(
            "period '{}' lacks the coin metal constants its {:?} coinage needs",
            p.id,
            p.coinage()
        )))
    }
}

//! Period lookups.

use crate::dataset::Dataset;
use crate::error::Result;
use crate::models::{Coinage, Period, PeriodSummary};

// ---------------------------------------------------------------------------
// PeriodQuery
// ---------------------------------------------------------------------------

/// Query interface for the historical periods.
pub struct PeriodQuery<'a> {
    dataset: &'a Dataset,
}

impl<'a> PeriodQuery<'a> {
    /// Create a new `PeriodQuery` bound to the given dataset.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Summaries for a period picker.
    pub fn list(&self) -> Vec<PeriodSummary> {
        self.dataset.periods.iter().map(PeriodSummary::from).collect()
    }

    /// Get a period by id, or `None` if there is no such period.
    pub fn get(&self, id: &str) -> Option<&'a Period> {
        self.dataset.period(id)
    }

    /// Get a period by id, failing with [`CalcError::UnknownPeriod`](crate::CalcError::UnknownPeriod).
    pub fn require(&self, id: &str) -> Result<&'a Period> {
        self.dataset.require_period(id)
    }

    /// The period covering `year` (BCE years negative).
    ///
    /// Where two periods share a boundary year the later one wins, so 235
    /// belongs to the third-century crisis rather than the Severans.
    pub fn for_year(&self, year: i32) -> Option<&'a Period> {
        self.dataset
            .periods
            .iter()
            .filter(|p| p.contains_year(f64::from(year)))
            .max_by_key(|p| p.start_year)
    }

    /// Periods minted under the given coinage.
    pub fn with_coinage(&self, coinage: Coinage) -> Vec<&'a Period> {
        self.dataset
            .periods
            .iter()
            .filter(|p| p.coinage() == coinage)
            .collect()
    }
}

//! Price, rent and wage observation queries.

use tracing::debug;

use crate::dataset::Dataset;
use crate::models::{
    AverageSource, Availability, Citation, Commodity, ObservedAverage, PriceObservation,
    PriceUnit, UnavailableReason,
};

// ---------------------------------------------------------------------------
// PriceQuery
// ---------------------------------------------------------------------------

/// Query interface for the documented price observations.
pub struct PriceQuery<'a> {
    dataset: &'a Dataset,
}

impl<'a> PriceQuery<'a> {
    /// Create a new `PriceQuery` bound to the given dataset.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Average of a commodity's observations for a period, expressed in `unit`.
    ///
    /// Observations recorded in a unit that cannot be converted to `unit` are
    /// skipped. When nothing matches, `fallback` (a period-level constant
    /// already in `unit`) is used; with no fallback either the figure is
    /// [`UnavailableReason::NoObservations`].
    pub fn average(
        &self,
        commodity: Commodity,
        period_id: &str,
        unit: PriceUnit,
        fallback: Option<f64>,
    ) -> Availability<ObservedAverage> {
        let values: Vec<f64> = self
            .dataset
            .observations(commodity, period_id)
            .filter_map(|o| o.unit.convert(o.value, unit))
            .collect();

        if !values.is_empty() {
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            return Availability::Available(ObservedAverage {
                value: mean,
                unit,
                source: AverageSource::Observed {
                    count: values.len(),
                },
            });
        }

        match fallback {
            Some(value) => {
                debug!(%commodity, period = period_id, value, "using period fallback constant");
                Availability::Available(ObservedAverage {
                    value,
                    unit,
                    source: AverageSource::Fallback,
                })
            }
            None => Availability::unavailable(UnavailableReason::NoObservations),
        }
    }

    /// Up to `limit` source references for a commodity in a period.
    pub fn citations(&self, commodity: Commodity, period_id: &str, limit: usize) -> Vec<Citation> {
        self.dataset
            .observations(commodity, period_id)
            .take(limit)
            .map(PriceObservation::to_citation)
            .collect()
    }

    /// Earliest and latest observation year for a commodity in a period.
    pub fn year_span(&self, commodity: Commodity, period_id: &str) -> Option<(f64, f64)> {
        self.dataset
            .observations(commodity, period_id)
            .fold(None, |span, o| match span {
                None => Some((o.year, o.year)),
                Some((lo, hi)) => Some((f64::min(lo, o.year), f64::max(hi, o.year))),
            })
    }
}

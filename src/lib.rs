//! Roman Egypt economic calculator.
//!
//! Converts a modern money amount, or raw gold and silver weights, into the
//! coinage of one of seven periods of Roman and Byzantine Egypt (27 BCE to
//! 641 CE), then measures what that coinage would buy against the documented
//! wheat prices, land rents and wages of the period.
//!
//! # Quick start
//!
//! ```
//! use roman_egypt_calculator::Calculator;
//!
//! let calc = Calculator::builder().build().unwrap();
//!
//! let result = calc.convert(1000.0, "USD", "julio_claudian", None).unwrap();
//! assert_eq!(result.coins.total_denarii_equivalent, Some(184.0));
//!
//! for period in calc.get_periods() {
//!     println!("{} {}", period.id, period.year_range);
//! }
//! ```

pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod format;
pub mod models;
pub mod queries;

pub use config::{CalculatorConfig, MetalPrices, RemainderPolicy};
pub use dataset::Dataset;
pub use error::{CalcError, Result};
pub use models::{ConversionRequest, ConversionResult, Language};

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use models::{
    ConversionInput, CurrencyCode, EchoedInput, Item, Occupation, PeriodInfo, PeriodSummary,
};

// ---------------------------------------------------------------------------
// CalculatorBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Calculator`].
///
/// Use [`Calculator::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CalculatorBuilder::build) to create the
/// calculator.
#[derive(Default)]
pub struct CalculatorBuilder {
    dataset: Option<Dataset>,
    dataset_path: Option<PathBuf>,
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Use an already-loaded dataset instead of the embedded one.
    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(dataset);
        self.dataset_path = None;
        self
    }

    /// Load the dataset from a `.json` or `.json.gz` file at build time.
    pub fn dataset_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.dataset_path = Some(path.as_ref().to_path_buf());
        self.dataset = None;
        self
    }

    /// Override the bullion prices and exchange rates.
    pub fn metal_prices(mut self, prices: MetalPrices) -> Self {
        self.config.metal_prices = prices;
        self
    }

    /// How the sestertius and tremissis remainders become whole coins.
    ///
    /// Defaults to [`RemainderPolicy::Floor`].
    pub fn remainder_policy(mut self, policy: RemainderPolicy) -> Self {
        self.config.remainder_policy = policy;
        self
    }

    /// Language used when a request does not name one. Defaults to Chinese.
    pub fn language(mut self, language: Language) -> Self {
        self.config.default_language = language;
        self
    }

    /// Replace the whole configuration at once.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the calculator, checking the metal prices and loading and
    /// validating the dataset.
    ///
    /// With neither [`dataset`](Self::dataset) nor
    /// [`dataset_path`](Self::dataset_path) the embedded dataset is shared.
    pub fn build(self) -> Result<Calculator> {
        self.config.metal_prices.validate()?;
        let dataset = match (self.dataset, self.dataset_path) {
            (Some(ds), _) => {
                ds.validate()?;
                Arc::new(ds)
            }
            (None, Some(path)) => Arc::new(Dataset::from_path(path)?),
            (None, None) => Dataset::builtin()?,
        };
        Ok(Calculator {
            dataset,
            config: self.config,
        })
    }
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

/// The main entry point: runs conversions and exposes the reference data.
///
/// Holds a shared, immutable [`Dataset`] and a [`CalculatorConfig`]. Every
/// conversion is independent, so one calculator can serve any number of
/// requests (and threads).
///
/// Created via [`Calculator::builder()`].
#[derive(Debug, Clone)]
pub struct Calculator {
    dataset: Arc<Dataset>,
    config: CalculatorConfig,
}

impl Calculator {
    /// Create a new builder for configuring the calculator.
    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::default()
    }

    // -- Conversions -------------------------------------------------------

    /// Convert a money amount into period coinage and purchasing power.
    ///
    /// `currency` is CNY, EUR or USD, or GOLD/SILVER for a weight in grams of
    /// that metal. Unrecognized codes are treated as USD. `gold_ratio`
    /// defaults to 0.5.
    pub fn convert(
        &self,
        amount: f64,
        currency: &str,
        period_id: &str,
        gold_ratio: Option<f64>,
    ) -> Result<ConversionResult> {
        let mut request = ConversionRequest::currency(amount, currency, period_id);
        if let Some(ratio) = gold_ratio {
            request = request.with_gold_ratio(ratio);
        }
        self.run(&request)
    }

    /// Convert raw gold and silver weights, skipping the currency stage.
    pub fn convert_from_metal(
        &self,
        gold_g: f64,
        silver_g: f64,
        period_id: &str,
    ) -> Result<ConversionResult> {
        self.run(&ConversionRequest::metal(gold_g, silver_g, period_id))
    }

    /// Run a prepared request through the whole pipeline.
    ///
    /// Input is validated before any computation, and a rejected request
    /// yields no partial result.
    pub fn run(&self, request: &ConversionRequest) -> Result<ConversionResult> {
        let period = self.dataset.require_period(&request.period)?;
        let language = request.language.unwrap_or(self.config.default_language);
        let prices = &self.config.metal_prices;

        let metal = engine::to_base_metal(&request.input, prices)?;
        let coins = engine::map_to_coins(
            metal.gold_g,
            metal.silver_g,
            period,
            self.config.remainder_policy,
        )?;
        let purchasing = engine::compute_purchasing(&coins, period, &self.dataset, &self.config);
        debug!(
            period = %period.id,
            tier = ?purchasing.lifestyle.tier,
            "conversion complete"
        );

        let input = match &request.input {
            ConversionInput::Currency {
                amount,
                currency,
                gold_ratio,
            } => EchoedInput {
                amount: *amount,
                currency: currency.clone(),
                period: request.period.clone(),
                gold_ratio: Some(*gold_ratio),
                language,
            },
            ConversionInput::Metal { gold_g, silver_g } => EchoedInput {
                amount: gold_g + silver_g,
                currency: CurrencyCode::Metal,
                period: request.period.clone(),
                gold_ratio: None,
                language,
            },
        };

        Ok(ConversionResult {
            input,
            metal: metal.rounded(),
            usd_equivalent: format::round_to(metal.usd_equivalent(prices), 2),
            coins,
            purchasing,
            period_info: PeriodInfo::from(period),
        })
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the period query interface.
    pub fn periods(&self) -> queries::PeriodQuery<'_> {
        queries::PeriodQuery::new(&self.dataset)
    }

    /// Access the price, rent and wage observation query interface.
    pub fn prices(&self) -> queries::PriceQuery<'_> {
        queries::PriceQuery::new(&self.dataset)
    }

    /// Access the occupation and item catalogue query interface.
    pub fn catalog(&self) -> queries::CatalogQuery<'_> {
        queries::CatalogQuery::new(&self.dataset)
    }

    // -- Reference data ----------------------------------------------------

    /// Summaries of every period, in dataset order.
    pub fn get_periods(&self) -> Vec<PeriodSummary> {
        self.periods().list()
    }

    /// Documented occupations, in dataset order.
    pub fn get_occupations(&self) -> &[Occupation] {
        self.catalog().occupations()
    }

    /// Priced goods for the purchasing basket.
    pub fn get_items(&self) -> &[Item] {
        self.catalog().items()
    }

    /// Return the shared dataset for advanced usage.
    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// The configuration this calculator was built with.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Calculator(periods={}, observations={}, remainder_policy={:?}, language={})",
            self.dataset.periods.len(),
            self.dataset.observations.len(),
            self.config.remainder_policy,
            self.config.default_language
        )
    }
}

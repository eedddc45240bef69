//! Read-only query modules over the reference dataset.
//!
//! Each module provides a query struct that borrows a [`Dataset`](crate::dataset::Dataset)
//! and exposes typed lookups. None of them transform data beyond filtering and
//! averaging.

pub mod catalog;
pub mod periods;
pub mod prices;

pub use catalog::CatalogQuery;
pub use periods::PeriodQuery;
pub use prices::PriceQuery;

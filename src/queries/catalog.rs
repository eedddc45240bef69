//! Occupation and purchasable-item catalogue queries.

use crate::dataset::Dataset;
use crate::models::{Item, Occupation, SocialClass};

// ---------------------------------------------------------------------------
// CatalogQuery
// ---------------------------------------------------------------------------

/// Query interface for the occupation and item catalogues.
pub struct CatalogQuery<'a> {
    dataset: &'a Dataset,
}

impl<'a> CatalogQuery<'a> {
    /// Create a new `CatalogQuery` bound to the given dataset.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    pub fn occupations(&self) -> &'a [Occupation] {
        &self.dataset.occupations
    }

    pub fn occupations_in(&self, class: SocialClass) -> Vec<&'a Occupation> {
        self.dataset
            .occupations
            .iter()
            .filter(|o| o.social_class == class)
            .collect()
    }

    pub fn items(&self) -> &'a [Item] {
        &self.dataset.items
    }

    pub fn item(&self, id: &str) -> Option<&'a Item> {
        self.dataset.items.iter().find(|i| i.id == id)
    }

    /// Items in a category such as `"food"` or `"animal"`.
    pub fn items_in(&self, category: &str) -> Vec<&'a Item> {
        self.dataset
            .items
            .iter()
            .filter(|i| i.category == category)
            .collect()
    }
}

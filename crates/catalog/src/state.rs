//! Catalog fetch outcome as seen by the display.

use shopcart_core::ProductId;

use crate::product::Product;
use crate::source::CatalogSource;

/// Result of the one-shot catalog fetch.
///
/// `Failed` carries no detail: whatever went wrong (network, status, malformed
/// body) is logged at the fetch site and the display shows one generic message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Loading,
    Loaded(Vec<Product>),
    Failed,
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed)
    }

    /// Products of a loaded catalog; `None` while loading or after a failure.
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            FetchState::Loaded(products) => Some(products),
            FetchState::Loading | FetchState::Failed => None,
        }
    }

    /// First product with the given id in a loaded catalog.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products()?.iter().find(|p| p.id == id)
    }
}

/// Fetch the catalog once and collapse the outcome into a `FetchState`.
pub async fn fetch_catalog(source: &dyn CatalogSource) -> FetchState {
    match source.fetch_products().await {
        Ok(products) => FetchState::Loaded(products),
        Err(err) => {
            tracing::error!(error = %err, "catalog fetch failed");
            FetchState::Failed
        }
    }
}

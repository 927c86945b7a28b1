use async_trait::async_trait;

use crate::error::CatalogError;
use crate::product::Product;

/// Where the product catalog comes from.
///
/// One call, two outcomes: the full product list or a failure. Callers do not
/// retry; see `fetch_catalog` for how a failure is surfaced.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

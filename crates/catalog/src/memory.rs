//! In-memory catalog source (tests, offline demos).

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::product::Product;
use crate::source::CatalogSource;

/// Catalog backed by a fixed product list, or one that always fails.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Option<Vec<Product>>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Some(products),
        }
    }

    /// A source whose every fetch fails with `CatalogError::Unavailable`.
    pub fn failing() -> Self {
        Self { products: None }
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.products.clone().ok_or(CatalogError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopcart_core::{Money, ProductId};

    #[tokio::test]
    async fn returns_products_in_order() {
        let products = vec![
            Product::new(ProductId::new(2), "B", Money::from_cents(200)),
            Product::new(ProductId::new(1), "A", Money::from_cents(100)),
        ];
        let catalog = InMemoryCatalog::new(products.clone());

        assert_eq!(catalog.fetch_products().await.unwrap(), products);
    }

    #[tokio::test]
    async fn failing_source_reports_unavailable() {
        let err = InMemoryCatalog::failing().fetch_products().await.unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable));
    }
}

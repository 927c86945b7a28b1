//! HTTP catalog source.

use async_trait::async_trait;
use reqwest::Url;

use crate::error::CatalogError;
use crate::product::Product;
use crate::source::CatalogSource;

/// Public demo store the client talks to unless configured otherwise.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Fetches the catalog with a single `GET` against a JSON endpoint.
///
/// The endpoint must answer with a JSON array of products. No retry, no
/// timeout beyond the client defaults.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(endpoint: &str) -> Result<Self, CatalogError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| CatalogError::InvalidEndpoint(endpoint.to_string(), e.to_string()))?;

        Ok(Self {
            endpoint,
            client: reqwest::Client::new(),
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching catalog");

        let resp = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Status(
                status.as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        let products: Vec<Product> =
            serde_json::from_str(&body).map_err(|e| CatalogError::Decode(e.to_string()))?;

        tracing::info!(endpoint = %self.endpoint, count = products.len(), "catalog fetched");
        Ok(products)
    }
}

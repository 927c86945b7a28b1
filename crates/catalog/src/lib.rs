//! Product catalog: the product model and the sources it can be fetched from.
//!
//! The cart never talks to the network itself; it only sees the `Product` values a
//! `CatalogSource` hands over, and the display only sees a `FetchState`.

pub mod error;
pub mod http;
pub mod memory;
pub mod product;
pub mod source;
pub mod state;

pub use error::CatalogError;
pub use http::{HttpCatalog, DEFAULT_CATALOG_URL};
pub use memory::InMemoryCatalog;
pub use product::Product;
pub use source::CatalogSource;
pub use state::{fetch_catalog, FetchState};

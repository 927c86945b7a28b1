//! Text rendering of the storefront: catalog grid, cart badge, cart panel.
//!
//! Renderers are pure functions of the catalog fetch state, the cart ledger and the
//! panel flag; they return strings and never print.

pub mod cart_view;
pub mod catalog_view;
pub mod page;
pub mod panel;

pub use cart_view::{render_badge, CartRow, CartView};
pub use catalog_view::{render_catalog, render_product, ERROR_MESSAGE, LOADING_MESSAGE};
pub use page::render_page;
pub use panel::CartPanel;

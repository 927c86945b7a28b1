//! Whole-screen rendering.

use shopcart_cart::CartLedger;
use shopcart_catalog::FetchState;

use crate::cart_view::{render_badge, CartView};
use crate::catalog_view::render_catalog;
use crate::panel::CartPanel;

/// The full storefront screen.
///
/// While the catalog is loading or has failed, only the status message is shown.
/// Otherwise: badge, product grid, and the cart panel when it is open.
pub fn render_page(catalog: &FetchState, ledger: &CartLedger, panel: CartPanel) -> String {
    if !matches!(catalog, FetchState::Loaded(_)) {
        return format!("{}\n", render_catalog(catalog));
    }

    let mut out = format!("{}\n{}\n", render_badge(ledger), render_catalog(catalog));
    if panel.is_open() {
        out.push('\n');
        out.push_str(&CartView::from_ledger(ledger).render());
    }
    out
}

//! Cart panel view model and its text rendering.

use shopcart_cart::CartLedger;
use shopcart_core::{Entity, Money, ProductId};

pub const CART_HEADING: &str = "Your shopping cart";
pub const EMPTY_CART_MESSAGE: &str = "No items in cart";

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub price: Money,
    pub amount: u32,
    pub subtotal: Money,
}

/// Everything the cart panel shows, derived from a ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    pub item_count: u64,
    pub total: Money,
}

impl CartView {
    pub fn from_ledger(ledger: &CartLedger) -> Self {
        let rows = ledger
            .iter()
            .map(|item| CartRow {
                id: item.id(),
                title: item.title().to_string(),
                image: item.image().to_string(),
                price: item.price(),
                amount: item.amount(),
                subtotal: item.subtotal(),
            })
            .collect();

        Self {
            rows,
            item_count: ledger.total_item_count(),
            total: ledger.total_price(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(CART_HEADING);
        out.push('\n');

        if self.is_empty() {
            out.push_str(EMPTY_CART_MESSAGE);
            out.push('\n');
        }

        for row in &self.rows {
            out.push_str(&format!("#{} {}\n", row.id, row.title));
            if !row.image.is_empty() {
                out.push_str(&format!("    {}\n", row.image));
            }
            out.push_str(&format!(
                "    Price: ${}  Total: ${}\n",
                row.price, row.subtotal
            ));
            out.push_str(&format!("    [-] {} [+]\n", row.amount));
        }

        out.push_str(&format!("Total: ${}\n", self.total));
        out
    }
}

/// Cart button badge: total number of units in the cart.
pub fn render_badge(ledger: &CartLedger) -> String {
    format!("Cart ({})", ledger.total_item_count())
}

//! The cart ledger: line items and the add/remove transitions over them.

use serde::Serialize;

use shopcart_catalog::Product;
use shopcart_core::{Entity, Money, ProductId};

/// A product in the cart together with how many of it are in there.
///
/// `amount` is at least 1; a line whose amount would drop to 0 leaves the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    #[serde(flatten)]
    product: Product,
    amount: u32,
}

impl LineItem {
    fn first(product: &Product) -> Self {
        Self {
            product: product.clone(),
            amount: 1,
        }
    }

    fn incremented(&self) -> Self {
        Self {
            product: self.product.clone(),
            amount: self.amount.saturating_add(1),
        }
    }

    /// One fewer, or `None` when this was the last one.
    fn decremented(&self) -> Option<Self> {
        if self.amount <= 1 {
            return None;
        }
        Some(Self {
            product: self.product.clone(),
            amount: self.amount - 1,
        })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn title(&self) -> &str {
        &self.product.title
    }

    pub fn image(&self) -> &str {
        &self.product.image
    }

    pub fn price(&self) -> Money {
        self.product.price
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// `price × amount`.
    pub fn subtotal(&self) -> Money {
        self.product.price.times(self.amount)
    }
}

impl Entity for LineItem {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.product.id
    }
}

/// The cart contents: line items in insertion order, at most one per product id.
///
/// Transitions take `&self` and return the next ledger; the receiver is left as it
/// was, so callers can keep or compare previous states.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct CartLedger {
    items: Vec<LineItem>,
}

impl CartLedger {
    /// Empty ledger (session start).
    pub fn new() -> Self {
        Self::default()
    }

    /// Put one more of `product` in the cart.
    ///
    /// Bumps the amount of an existing line in place (order kept) or appends a new
    /// line with amount 1.
    pub fn add(&self, product: &Product) -> CartLedger {
        let items = if self.contains(product.id) {
            self.items
                .iter()
                .map(|item| {
                    if item.id() == product.id {
                        item.incremented()
                    } else {
                        item.clone()
                    }
                })
                .collect()
        } else {
            let mut items = self.items.clone();
            items.push(LineItem::first(product));
            items
        };

        let next = CartLedger { items };
        tracing::debug!(
            product_id = %product.id,
            amount = next.amount_of(product.id),
            "cart: item added"
        );
        next
    }

    /// Take one of product `id` out of the cart.
    ///
    /// Drops the line when its amount was 1. An id that is not in the cart leaves
    /// the ledger unchanged.
    pub fn remove(&self, id: ProductId) -> CartLedger {
        if !self.contains(id) {
            tracing::debug!(product_id = %id, "cart: remove of absent item ignored");
            return self.clone();
        }

        let items = self
            .items
            .iter()
            .filter_map(|item| {
                if item.id() == id {
                    item.decremented()
                } else {
                    Some(item.clone())
                }
            })
            .collect();

        let next = CartLedger { items };
        tracing::debug!(
            product_id = %id,
            amount = next.amount_of(id),
            "cart: item removed"
        );
        next
    }

    /// Number of units across all lines (the badge figure).
    pub fn total_item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.amount)).sum()
    }

    /// Σ price × amount over all lines, exact; only its display rounds to the cent.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }

    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Amount of product `id` in the cart, 0 when absent.
    pub fn amount_of(&self, id: ProductId) -> u32 {
        self.get(id).map_or(0, LineItem::amount)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a CartLedger {
    type Item = &'a LineItem;
    type IntoIter = core::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

//! Catalog grid rendering.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use shopcart_catalog::{FetchState, Product};

pub const LOADING_MESSAGE: &str = "Loading...";
pub const ERROR_MESSAGE: &str = "Something went wrong";
pub const EMPTY_CATALOG_MESSAGE: &str = "No products available";

const TITLE_WIDTH: usize = 40;

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    price: String,
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Catalog as a table, or the loading/failure message.
pub fn render_catalog(state: &FetchState) -> String {
    let products = match state {
        FetchState::Loading => return LOADING_MESSAGE.to_string(),
        FetchState::Failed => return ERROR_MESSAGE.to_string(),
        FetchState::Loaded(products) => products,
    };

    if products.is_empty() {
        return EMPTY_CATALOG_MESSAGE.to_string();
    }

    let rows: Vec<ProductRow> = products
        .iter()
        .map(|p| ProductRow {
            id: p.id.to_string(),
            title: truncate(&p.title, TITLE_WIDTH),
            category: p.category.clone(),
            price: format!("${}", p.price),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Detail card for one product.
pub fn render_product(product: &Product) -> String {
    let mut out = format!("#{} {}\n", product.id, product.title);
    if !product.category.is_empty() {
        out.push_str(&format!("Category: {}\n", product.category));
    }
    if !product.image.is_empty() {
        out.push_str(&format!("Image: {}\n", product.image));
    }
    if !product.description.is_empty() {
        out.push_str(&format!("{}\n", product.description));
    }
    out.push_str(&format!("Price: ${}\n", product.price));
    out
}

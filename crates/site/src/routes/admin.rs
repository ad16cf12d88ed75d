//! Admin panel: the product table, in-place row re-fetch, and delete.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tower_sessions::Session;

use pompom_boutique_core::{PriceTag, ProductKey, format_thb};

use crate::db::products::ProductRepository;
use crate::error::AppError;
use crate::filters;
use crate::middleware::auth::RequireAdminAuth;
use crate::models::{PageContext, Product};
use crate::routes::page_context;
use crate::state::AppState;

/// Placeholder thumbnail for products without photos.
const ROW_PLACEHOLDER_URL: &str = "https://via.placeholder.com/100x100.png?text=No+Img";

/// Product display data for admin table rows.
#[derive(Debug, Clone)]
pub struct ProductRow {
    pub key: String,
    pub name: String,
    /// "breed (gender, color)" summary line.
    pub details: String,
    pub thumb_url: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub price: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        let tag = PriceTag::new(product.price, product.discount_price);

        Self {
            key: product.id.to_string(),
            name: product.name.clone(),
            details: format!(
                "{} ({}, {})",
                product.breed, product.gender, product.color
            ),
            thumb_url: product
                .cover_url()
                .unwrap_or(ROW_PLACEHOLDER_URL)
                .to_owned(),
            status_label: product.status.table_label(),
            status_class: product.status.css_class(),
            price: format!("{} บาท", format_thb(tag.current)),
        }
    }
}

/// Table rows fragment template. Rendered standalone for the HTMX re-fetch
/// and included by the full page.
#[derive(Template, WebTemplate)]
#[template(path = "admin/rows.html")]
pub struct RowsTemplate {
    pub rows: Vec<ProductRow>,
    pub load_failed: bool,
}

/// Admin product table page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/index.html")]
pub struct AdminIndexTemplate {
    pub ctx: PageContext,
    pub rows: Vec<ProductRow>,
    pub load_failed: bool,
}

/// Run the table query and map it for display.
async fn fetch_rows(state: &AppState) -> (Vec<ProductRow>, bool) {
    match ProductRepository::new(state.pool()).list_all().await {
        Ok(products) => (products.iter().map(ProductRow::from).collect(), false),
        Err(error) => {
            tracing::error!(%error, "failed to fetch products for the admin table");
            (Vec::new(), true)
        }
    }
}

/// Admin product table page.
pub async fn index(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
) -> AdminIndexTemplate {
    let ctx = page_context(&state, &session, true).await;
    let (rows, load_failed) = fetch_rows(&state).await;

    AdminIndexTemplate {
        ctx,
        rows,
        load_failed,
    }
}

/// Table rows fragment for the in-place re-fetch affordance.
///
/// Re-clicking the manage entry re-runs the same query without a page
/// navigation, so in-memory page state survives.
pub async fn rows(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> RowsTemplate {
    let (rows, load_failed) = fetch_rows(&state).await;

    RowsTemplate { rows, load_failed }
}

/// Delete one product.
///
/// Responds with an empty body on success and the client swaps the row
/// away; on failure the row stays put. Deleting a key that no longer
/// resolves (or never could) is still success - the row is gone either way.
pub async fn delete_product(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, AppError> {
    let Ok(key) = key.parse::<ProductKey>() else {
        return Ok(StatusCode::OK);
    };

    let deleted = ProductRepository::new(state.pool()).delete(key).await?;
    if deleted {
        tracing::info!(%key, "product deleted");
    } else {
        tracing::debug!(%key, "delete for a key that no longer exists");
    }

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pompom_boutique_core::ProductStatus;
    use rust_decimal::Decimal;

    fn product() -> Product {
        Product {
            id: ProductKey::generate(),
            name: "น้องลาเต้".to_owned(),
            description: String::new(),
            price: Decimal::from(12_000),
            discount_price: None,
            status: ProductStatus::Preordered,
            breed: "ปอมเมอเรเนียน".to_owned(),
            gender: "ผู้".to_owned(),
            age: "2 เดือน".to_owned(),
            color: "ส้ม".to_owned(),
            eye_color: "น้ำตาล".to_owned(),
            vaccine: "1 เข็ม".to_owned(),
            image_urls: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_details_line() {
        let row = ProductRow::from(&product());
        assert_eq!(row.details, "ปอมเมอเรเนียน (ผู้, ส้ม)");
    }

    #[test]
    fn test_row_placeholder_thumb_without_images() {
        let row = ProductRow::from(&product());
        assert_eq!(row.thumb_url, ROW_PLACEHOLDER_URL);
    }

    #[test]
    fn test_row_uses_table_labels() {
        let mut source = product();
        source.status = ProductStatus::Available;
        let row = ProductRow::from(&source);
        assert_eq!(row.status_label, "พร้อมขาย");
        assert_eq!(row.status_class, "available");
    }

    #[test]
    fn test_row_price_formatting() {
        let row = ProductRow::from(&product());
        assert_eq!(row.price, "12,000 บาท");
    }

    #[test]
    fn test_row_unknown_status_empty_badge() {
        let mut source = product();
        source.status = ProductStatus::Other("hidden".to_owned());
        let row = ProductRow::from(&source);
        assert_eq!(row.status_label, "");
        assert_eq!(row.status_class, "");
    }
}

//! Home page: the public product grid.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tower_sessions::Session;

use pompom_boutique_core::{PriceTag, format_thb};

use crate::db::products::ProductRepository;
use crate::filters;
use crate::middleware::auth::OptionalAdminAuth;
use crate::models::{PageContext, Product};
use crate::routes::page_context;
use crate::state::AppState;

/// Products shown per page.
pub const PAGE_SIZE: u32 = 6;

/// Placeholder cover for products without photos.
const CARD_PLACEHOLDER_URL: &str = "https://via.placeholder.com/400x250.png?text=No+Image";

/// Pagination query parameters. The URL is the source of truth for the
/// current page, so browser history navigation works with no extra state.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

/// Product display data for grid cards.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub key: String,
    pub name: String,
    pub gender: String,
    pub age: String,
    pub cover_url: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub sold: bool,
    /// Rendered price the buyer pays, suffix included.
    pub price: String,
    /// Struck-through original price, present only for a real discount.
    pub original_price: Option<String>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        let tag = PriceTag::new(product.price, product.discount_price);

        Self {
            key: product.id.to_string(),
            name: product.name.clone(),
            gender: product.gender.clone(),
            age: product.age.clone(),
            cover_url: product
                .cover_url()
                .unwrap_or(CARD_PLACEHOLDER_URL)
                .to_owned(),
            status_label: product.status.card_label(),
            status_class: product.status.css_class(),
            sold: product.status.is_sold(),
            price: format!("{} บาท", format_thb(tag.current)),
            original_price: tag.original.map(format_thb),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub cards: Vec<ProductCard>,
    pub load_failed: bool,
    pub current_page: u32,
    pub total_pages: u32,
}

/// Display the product grid.
///
/// A fetch failure renders the generic error placeholder in place of the
/// grid; an empty catalog renders its own distinct placeholder.
pub async fn home(
    OptionalAdminAuth(admin): OptionalAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> HomeTemplate {
    let ctx = page_context(&state, &session, admin.is_some()).await;
    let current_page = query.page.unwrap_or(1).max(1);

    let repo = ProductRepository::new(state.pool());
    match repo.list_page(current_page, PAGE_SIZE).await {
        Ok(page) => HomeTemplate {
            ctx,
            cards: page.items.iter().map(ProductCard::from).collect(),
            load_failed: false,
            current_page,
            total_pages: page.total_pages(PAGE_SIZE),
        },
        Err(error) => {
            tracing::error!(%error, "failed to fetch products for the home page");
            HomeTemplate {
                ctx,
                cards: Vec::new(),
                load_failed: true,
                current_page,
                total_pages: 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pompom_boutique_core::{ProductKey, ProductStatus};
    use rust_decimal::Decimal;

    fn product() -> Product {
        Product {
            id: ProductKey::generate(),
            name: "น้องโมจิ".to_owned(),
            description: "ปอมหน้าหมี".to_owned(),
            price: Decimal::from(4500),
            discount_price: None,
            status: ProductStatus::Available,
            breed: "ปอมเมอเรเนียน".to_owned(),
            gender: "เมีย".to_owned(),
            age: "3 เดือน".to_owned(),
            color: "ขาว".to_owned(),
            eye_color: "ดำ".to_owned(),
            vaccine: "2 เข็ม".to_owned(),
            image_urls: vec!["https://img.example/mochi.jpg".to_owned()],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_card_uses_cover_image() {
        let card = ProductCard::from(&product());
        assert_eq!(card.cover_url, "https://img.example/mochi.jpg");
    }

    #[test]
    fn test_card_placeholder_without_images() {
        let mut source = product();
        source.image_urls.clear();
        let card = ProductCard::from(&source);
        assert_eq!(card.cover_url, CARD_PLACEHOLDER_URL);
    }

    #[test]
    fn test_card_single_price_without_discount() {
        let card = ProductCard::from(&product());
        assert_eq!(card.price, "4,500 บาท");
        assert_eq!(card.original_price, None);
    }

    #[test]
    fn test_card_shows_discount_when_below_price() {
        let mut source = product();
        source.discount_price = Some(Decimal::from(3500));
        let card = ProductCard::from(&source);
        assert_eq!(card.price, "3,500 บาท");
        assert_eq!(card.original_price.as_deref(), Some("4,500"));
    }

    #[test]
    fn test_card_ignores_discount_at_or_above_price() {
        let mut source = product();
        source.discount_price = Some(Decimal::from(4500));
        let card = ProductCard::from(&source);
        assert_eq!(card.price, "4,500 บาท");
        assert_eq!(card.original_price, None);

        source.discount_price = Some(Decimal::from(5000));
        let card = ProductCard::from(&source);
        assert_eq!(card.price, "4,500 บาท");
        assert_eq!(card.original_price, None);
    }

    #[test]
    fn test_card_unknown_status_renders_empty_badge() {
        let mut source = product();
        source.status = ProductStatus::Other("adopted".to_owned());
        let card = ProductCard::from(&source);
        assert_eq!(card.status_label, "");
        assert_eq!(card.status_class, "");
        assert!(!card.sold);
    }

    #[test]
    fn test_card_sold_status() {
        let mut source = product();
        source.status = ProductStatus::Sold;
        let card = ProductCard::from(&source);
        assert!(card.sold);
        assert_eq!(card.status_label, "ขายแล้ว");
    }
}

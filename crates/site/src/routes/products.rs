//! Product detail page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use pompom_boutique_core::{PriceTag, ProductKey, format_thb};

use crate::db::products::ProductRepository;
use crate::filters;
use crate::middleware::auth::OptionalAdminAuth;
use crate::models::{PageContext, Product};
use crate::routes::page_context;
use crate::state::AppState;

/// Placeholder main image for products without photos.
const DETAIL_PLACEHOLDER_URL: &str = "https://via.placeholder.com/800x600.png?text=No+Image";

/// Detail view query parameters: the product key, and the selected gallery
/// image. Both live in the URL; nothing about the gallery is persisted.
#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub id: Option<String>,
    pub img: Option<usize>,
}

/// A gallery thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub url: String,
    pub index: usize,
    pub active: bool,
}

/// Assembled gallery state: the selected main image plus thumbnails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    pub main_url: String,
    pub thumbnails: Vec<Thumbnail>,
}

/// Descriptive fields for the detail page.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    pub name: String,
    pub description: String,
    pub price: String,
    pub original_price: Option<String>,
    pub breed: String,
    pub age: String,
    pub gender: String,
    pub color: String,
    pub eye_color: String,
    pub vaccine: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        let tag = PriceTag::new(product.price, product.discount_price);

        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: format!("{} บาท", format_thb(tag.current)),
            original_price: tag.original.map(format_thb),
            breed: product.breed.clone(),
            age: product.age.clone(),
            gender: product.gender.clone(),
            color: product.color.clone(),
            eye_color: product.eye_color.clone(),
            vaccine: product.vaccine.clone(),
            status_label: product.status.card_label(),
            status_class: product.status.css_class(),
        }
    }
}

/// Build the gallery from the ordered image URLs and the selected index.
///
/// The index comes from the URL and is clamped into range.
fn build_gallery(image_urls: &[String], selected: usize) -> Gallery {
    let Some(last) = image_urls.len().checked_sub(1) else {
        return Gallery {
            main_url: DETAIL_PLACEHOLDER_URL.to_owned(),
            thumbnails: Vec::new(),
        };
    };

    let active = selected.min(last);
    let thumbnails = image_urls
        .iter()
        .enumerate()
        .map(|(index, url)| Thumbnail {
            url: url.clone(),
            index,
            active: index == active,
        })
        .collect();
    let main_url = image_urls
        .get(active)
        .cloned()
        .unwrap_or_else(|| DETAIL_PLACEHOLDER_URL.to_owned());

    Gallery {
        main_url,
        thumbnails,
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct DetailTemplate {
    pub ctx: PageContext,
    pub key: String,
    pub product: ProductDetail,
    pub gallery: Gallery,
}

/// Placeholder page for keys that resolve to nothing.
#[derive(Template, WebTemplate)]
#[template(path = "products/not_found.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
}

/// Placeholder page for a failed detail fetch.
#[derive(Template, WebTemplate)]
#[template(path = "products/load_error.html")]
pub struct LoadErrorTemplate {
    pub ctx: PageContext,
}

/// Display the product detail page.
///
/// A missing `id` parameter is a malformed link, recovered by redirecting
/// home without touching the store. An unknown (or unparseable) key renders
/// the distinct not-found placeholder with a working link home.
pub async fn show(
    OptionalAdminAuth(admin): OptionalAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<DetailQuery>,
) -> Response {
    let Some(raw_key) = query.id else {
        return Redirect::to("/").into_response();
    };

    let ctx = page_context(&state, &session, admin.is_some()).await;

    let Ok(key) = raw_key.parse::<ProductKey>() else {
        return NotFoundTemplate { ctx }.into_response();
    };

    let repo = ProductRepository::new(state.pool());
    match repo.get(key).await {
        Ok(Some(product)) => {
            let gallery = build_gallery(&product.image_urls, query.img.unwrap_or(0));
            DetailTemplate {
                ctx,
                key: key.to_string(),
                product: ProductDetail::from(&product),
                gallery,
            }
            .into_response()
        }
        Ok(None) => NotFoundTemplate { ctx }.into_response(),
        Err(error) => {
            tracing::error!(%error, %key, "failed to fetch product details");
            LoadErrorTemplate { ctx }.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(count: usize) -> Vec<String> {
        (0..count)
            .map(|i| format!("https://img.example/{i}.jpg"))
            .collect()
    }

    #[test]
    fn test_gallery_first_image_is_default_main() {
        let gallery = build_gallery(&urls(3), 0);
        assert_eq!(gallery.main_url, "https://img.example/0.jpg");
        assert_eq!(gallery.thumbnails.len(), 3);
        assert!(gallery.thumbnails.iter().any(|t| t.active && t.index == 0));
    }

    #[test]
    fn test_gallery_selection_moves_active_marker() {
        let gallery = build_gallery(&urls(3), 2);
        assert_eq!(gallery.main_url, "https://img.example/2.jpg");
        let active: Vec<usize> = gallery
            .thumbnails
            .iter()
            .filter(|t| t.active)
            .map(|t| t.index)
            .collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn test_gallery_clamps_out_of_range_selection() {
        let gallery = build_gallery(&urls(2), 99);
        assert_eq!(gallery.main_url, "https://img.example/1.jpg");
    }

    #[test]
    fn test_gallery_placeholder_without_images() {
        let gallery = build_gallery(&[], 0);
        assert_eq!(gallery.main_url, DETAIL_PLACEHOLDER_URL);
        assert!(gallery.thumbnails.is_empty());
    }
}

//! Product documents.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use pompom_boutique_core::{ProductKey, ProductStatus};

/// A catalog product as stored in the products collection.
///
/// `created_at` is the sole sort key; every listing reads the collection
/// newest first.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Product {
    pub id: ProductKey,
    pub name: String,
    pub description: String,
    /// Regular price, positive.
    pub price: Decimal,
    /// Optional discount price; only meaningful below `price` (display
    /// logic guards this).
    pub discount_price: Option<Decimal>,
    pub status: ProductStatus,
    pub breed: String,
    pub gender: String,
    pub age: String,
    pub color: String,
    pub eye_color: String,
    pub vaccine: String,
    /// Ordered photo URLs; the first one is the cover.
    pub image_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Cover image: the first of the ordered photo URLs, if any.
    #[must_use]
    pub fn cover_url(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }
}

/// Fields for creating or replacing a product document.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub status: ProductStatus,
    pub breed: String,
    pub gender: String,
    pub age: String,
    pub color: String,
    pub eye_color: String,
    pub vaccine: String,
    pub image_urls: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_images(image_urls: Vec<String>) -> Product {
        Product {
            id: ProductKey::generate(),
            name: "น้องโมจิ".to_owned(),
            description: String::new(),
            price: Decimal::from(4500),
            discount_price: None,
            status: ProductStatus::Available,
            breed: "ปอมเมอเรเนียน".to_owned(),
            gender: "เมีย".to_owned(),
            age: "3 เดือน".to_owned(),
            color: "ขาว".to_owned(),
            eye_color: "ดำ".to_owned(),
            vaccine: "2 เข็ม".to_owned(),
            image_urls,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_cover_is_first_image() {
        let product = product_with_images(vec![
            "https://img.example/a.jpg".to_owned(),
            "https://img.example/b.jpg".to_owned(),
        ]);
        assert_eq!(product.cover_url(), Some("https://img.example/a.jpg"));
    }

    #[test]
    fn test_cover_absent_without_images() {
        let product = product_with_images(Vec::new());
        assert_eq!(product.cover_url(), None);
    }
}

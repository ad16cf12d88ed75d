//! Product repository.
//!
//! The catalog is a flat collection of product documents, always read in
//! `created_at` descending order (newest first). Pagination is a naive
//! LIMIT/OFFSET slice of that single ordering.

use sqlx::PgPool;

use pompom_boutique_core::ProductKey;

use crate::db::RepositoryError;
use crate::models::{NewProduct, Product};

/// Columns selected for [`Product`] rows.
const PRODUCT_COLUMNS: &str = "id, name, description, price, discount_price, status, \
     breed, gender, age, color, eye_color, vaccine, image_urls, created_at";

/// One page of the ordered catalog.
#[derive(Debug, Clone)]
pub struct ProductPage {
    /// Products on this page, newest first.
    pub items: Vec<Product>,
    /// Total products in the catalog.
    pub total: i64,
}

impl ProductPage {
    /// Number of pages at the given page size. Always at least 1 so the
    /// current page is well-defined even for an empty catalog.
    #[must_use]
    pub fn total_pages(&self, per_page: u32) -> u32 {
        let total = u32::try_from(self.total.max(0)).unwrap_or(u32::MAX);
        total.div_ceil(per_page.max(1)).max(1)
    }
}

/// Repository for product documents.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch every product, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Fetch one page of products, newest first.
    ///
    /// Pages are 1-based; a page past the end simply comes back empty.
    ///
    /// # Errors
    ///
    /// Returns an error if either query fails.
    pub async fn list_page(&self, page: u32, per_page: u32) -> Result<ProductPage, RepositoryError> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(per_page);

        let items = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(i64::from(per_page))
        .bind(offset)
        .fetch_all(self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool)
            .await?;

        Ok(ProductPage { items, total })
    }

    /// Fetch a single product by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get(&self, key: ProductKey) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(key)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Insert a new product and return its generated key.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn insert(&self, product: &NewProduct) -> Result<ProductKey, RepositoryError> {
        let key = ProductKey::generate();

        sqlx::query(
            "INSERT INTO products \
             (id, name, description, price, discount_price, status, \
              breed, gender, age, color, eye_color, vaccine, image_urls) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
        )
        .bind(key)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.discount_price)
        .bind(&product.status)
        .bind(&product.breed)
        .bind(&product.gender)
        .bind(&product.age)
        .bind(&product.color)
        .bind(&product.eye_color)
        .bind(&product.vaccine)
        .bind(&product.image_urls)
        .execute(self.pool)
        .await?;

        Ok(key)
    }

    /// Replace a product's fields. Returns `false` when the key no longer
    /// resolves to a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn update(
        &self,
        key: ProductKey,
        product: &NewProduct,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            "UPDATE products SET \
             name = $2, description = $3, price = $4, discount_price = $5, status = $6, \
             breed = $7, gender = $8, age = $9, color = $10, eye_color = $11, vaccine = $12, \
             image_urls = $13 \
             WHERE id = $1",
        )
        .bind(key)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.discount_price)
        .bind(&product.status)
        .bind(&product.breed)
        .bind(&product.gender)
        .bind(&product.age)
        .bind(&product.color)
        .bind(&product.eye_color)
        .bind(&product.vaccine)
        .bind(&product.image_urls)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a product by key. Returns `false` when nothing was deleted;
    /// deleting an already-missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn delete(&self, key: ProductKey) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(key)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_total(total: i64) -> ProductPage {
        ProductPage {
            items: Vec::new(),
            total,
        }
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(page_with_total(13).total_pages(6), 3);
        assert_eq!(page_with_total(12).total_pages(6), 2);
        assert_eq!(page_with_total(1).total_pages(6), 1);
    }

    #[test]
    fn test_total_pages_empty_catalog_still_has_one_page() {
        assert_eq!(page_with_total(0).total_pages(6), 1);
    }

    #[test]
    fn test_total_pages_guards_zero_page_size() {
        assert_eq!(page_with_total(10).total_pages(0), 10);
    }
}

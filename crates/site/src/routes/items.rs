//! Admin item form: create and edit products, uploading photos on the way.
//!
//! Submissions are multipart because the form carries photo files alongside
//! the text fields. Files go through the image host client first (batch,
//! skip-and-log), and the surviving URLs are appended after any URLs kept
//! from the edited product.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use tower_sessions::Session;

use pompom_boutique_core::{ProductKey, ProductStatus};

use crate::db::products::ProductRepository;
use crate::error::AppError;
use crate::filters;
use crate::middleware::auth::RequireAdminAuth;
use crate::middleware::session::set_flash;
use crate::models::{NewProduct, PageContext, Product};
use crate::routes::page_context;
use crate::state::AppState;

const NEW_ITEM_HEADING: &str = "เพิ่มน้องหมา";
const EDIT_ITEM_HEADING: &str = "แก้ไขข้อมูลน้องหมา";

/// Item form template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/item_form.html")]
pub struct ItemFormTemplate {
    pub ctx: PageContext,
    pub heading: &'static str,
    pub action: String,
    pub values: ItemFormValues,
    pub error: Option<String>,
}

/// Entered (or prefilled) form values, echoed back on validation errors so
/// nothing typed is lost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFormValues {
    pub name: String,
    pub description: String,
    pub price: String,
    pub discount_price: String,
    pub status: String,
    pub breed: String,
    pub gender: String,
    pub age: String,
    pub color: String,
    pub eye_color: String,
    pub vaccine: String,
    /// Already-hosted photo URLs kept with the product (one per line in the
    /// form).
    pub image_urls: Vec<String>,
}

impl ItemFormValues {
    fn set(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "description" => self.description = value,
            "price" => self.price = value,
            "discount_price" => self.discount_price = value,
            "status" => self.status = value,
            "breed" => self.breed = value,
            "gender" => self.gender = value,
            "age" => self.age = value,
            "color" => self.color = value,
            "eye_color" => self.eye_color = value,
            "vaccine" => self.vaccine = value,
            // Unknown fields are ignored
            _ => {}
        }
    }
}

impl From<&Product> for ItemFormValues {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            discount_price: product
                .discount_price
                .map(|discount| discount.to_string())
                .unwrap_or_default(),
            status: product.status.as_str().to_owned(),
            breed: product.breed.clone(),
            gender: product.gender.clone(),
            age: product.age.clone(),
            color: product.color.clone(),
            eye_color: product.eye_color.clone(),
            vaccine: product.vaccine.clone(),
            image_urls: product.image_urls.clone(),
        }
    }
}

/// A parsed multipart submission: entered fields plus attached photo files.
struct ItemSubmission {
    values: ItemFormValues,
    files: Vec<(String, Vec<u8>)>,
}

/// Drain the multipart body into field values and photo files.
async fn read_submission(multipart: &mut Multipart) -> Result<ItemSubmission, AppError> {
    let mut values = ItemFormValues::default();
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(name) = field.name().map(ToOwned::to_owned) else {
            continue;
        };

        if name == "images" {
            let filename = field.file_name().unwrap_or("upload").to_owned();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            // Browsers submit an empty part when no file is chosen
            if !bytes.is_empty() {
                files.push((filename, bytes.to_vec()));
            }
        } else {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            if name == "image_urls" {
                values.image_urls = text
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(ToOwned::to_owned)
                    .collect();
            } else {
                values.set(&name, text);
            }
        }
    }

    Ok(ItemSubmission { values, files })
}

/// Presence checks and numeric parsing; anything beyond that is accepted
/// as entered.
fn parse_item(values: &ItemFormValues) -> Result<NewProduct, String> {
    let name = values.name.trim();
    if name.is_empty() {
        return Err("กรุณากรอกชื่อ".to_owned());
    }

    let price: Decimal = values
        .price
        .trim()
        .parse()
        .map_err(|_| "ราคาไม่ถูกต้อง".to_owned())?;
    if price <= Decimal::ZERO {
        return Err("ราคาไม่ถูกต้อง".to_owned());
    }

    let discount_entry = values.discount_price.trim();
    let discount_price = if discount_entry.is_empty() {
        None
    } else {
        Some(
            discount_entry
                .parse::<Decimal>()
                .map_err(|_| "ราคาส่วนลดไม่ถูกต้อง".to_owned())?,
        )
    };

    let status = match values.status.trim() {
        "" => ProductStatus::Available,
        raw => ProductStatus::from(raw.to_owned()),
    };

    Ok(NewProduct {
        name: name.to_owned(),
        description: values.description.trim().to_owned(),
        price,
        discount_price,
        status,
        breed: values.breed.trim().to_owned(),
        gender: values.gender.trim().to_owned(),
        age: values.age.trim().to_owned(),
        color: values.color.trim().to_owned(),
        eye_color: values.eye_color.trim().to_owned(),
        vaccine: values.vaccine.trim().to_owned(),
        image_urls: values.image_urls.clone(),
    })
}

/// Blank item form.
pub async fn new_item(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
) -> ItemFormTemplate {
    let ctx = page_context(&state, &session, true).await;

    ItemFormTemplate {
        ctx,
        heading: NEW_ITEM_HEADING,
        action: "/admin/items".to_owned(),
        values: ItemFormValues::default(),
        error: None,
    }
}

/// Prefilled form for an existing product.
///
/// A key that no longer resolves bounces back to the table.
pub async fn edit_item(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(key): Path<String>,
) -> Result<Response, AppError> {
    let Ok(key) = key.parse::<ProductKey>() else {
        return Ok(Redirect::to("/admin").into_response());
    };

    match ProductRepository::new(state.pool()).get(key).await? {
        Some(product) => {
            let ctx = page_context(&state, &session, true).await;
            Ok(ItemFormTemplate {
                ctx,
                heading: EDIT_ITEM_HEADING,
                action: format!("/admin/items/{key}"),
                values: ItemFormValues::from(&product),
                error: None,
            }
            .into_response())
        }
        None => Ok(Redirect::to("/admin").into_response()),
    }
}

/// Create a product from a multipart submission.
pub async fn create(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let ItemSubmission { values, files } = read_submission(&mut multipart).await?;

    match parse_item(&values) {
        Ok(mut item) => {
            let uploaded = state.images().upload_all(files).await;
            item.image_urls.extend(uploaded);

            let key = ProductRepository::new(state.pool()).insert(&item).await?;
            tracing::info!(%key, name = %item.name, "product created");

            let _ = set_flash(&session, "บันทึกรายการสำเร็จ").await;
            Ok(Redirect::to("/admin").into_response())
        }
        Err(message) => {
            let ctx = page_context(&state, &session, true).await;
            Ok(ItemFormTemplate {
                ctx,
                heading: NEW_ITEM_HEADING,
                action: "/admin/items".to_owned(),
                values,
                error: Some(message),
            }
            .into_response())
        }
    }
}

/// Update an existing product from a multipart submission.
pub async fn update(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Path(key): Path<String>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let Ok(key) = key.parse::<ProductKey>() else {
        return Ok(Redirect::to("/admin").into_response());
    };

    let ItemSubmission { values, files } = read_submission(&mut multipart).await?;

    match parse_item(&values) {
        Ok(mut item) => {
            let uploaded = state.images().upload_all(files).await;
            item.image_urls.extend(uploaded);

            let updated = ProductRepository::new(state.pool()).update(key, &item).await?;
            if updated {
                tracing::info!(%key, "product updated");
                let _ = set_flash(&session, "บันทึกรายการสำเร็จ").await;
            } else {
                let _ = set_flash(&session, "ไม่พบรายการที่แก้ไข").await;
            }
            Ok(Redirect::to("/admin").into_response())
        }
        Err(message) => {
            let ctx = page_context(&state, &session, true).await;
            Ok(ItemFormTemplate {
                ctx,
                heading: EDIT_ITEM_HEADING,
                action: format!("/admin/items/{key}"),
                values,
                error: Some(message),
            }
            .into_response())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_values() -> ItemFormValues {
        ItemFormValues {
            name: "น้องโมจิ".to_owned(),
            price: "4500".to_owned(),
            status: "available".to_owned(),
            ..ItemFormValues::default()
        }
    }

    #[test]
    fn test_parse_item_requires_name() {
        let mut values = valid_values();
        values.name = "   ".to_owned();
        assert_eq!(parse_item(&values).unwrap_err(), "กรุณากรอกชื่อ");
    }

    #[test]
    fn test_parse_item_rejects_bad_price() {
        let mut values = valid_values();
        values.price = "four thousand".to_owned();
        assert_eq!(parse_item(&values).unwrap_err(), "ราคาไม่ถูกต้อง");

        values.price = "0".to_owned();
        assert_eq!(parse_item(&values).unwrap_err(), "ราคาไม่ถูกต้อง");
    }

    #[test]
    fn test_parse_item_optional_discount() {
        let mut values = valid_values();
        values.discount_price = "  ".to_owned();
        assert_eq!(parse_item(&values).unwrap().discount_price, None);

        values.discount_price = "3500".to_owned();
        assert_eq!(
            parse_item(&values).unwrap().discount_price,
            Some(Decimal::from(3500))
        );

        values.discount_price = "cheap".to_owned();
        assert_eq!(parse_item(&values).unwrap_err(), "ราคาส่วนลดไม่ถูกต้อง");
    }

    #[test]
    fn test_parse_item_blank_status_defaults_to_available() {
        let mut values = valid_values();
        values.status = String::new();
        assert_eq!(parse_item(&values).unwrap().status, ProductStatus::Available);
    }

    #[test]
    fn test_parse_item_preserves_unknown_status() {
        let mut values = valid_values();
        values.status = "adopted".to_owned();
        assert_eq!(
            parse_item(&values).unwrap().status,
            ProductStatus::Other("adopted".to_owned())
        );
    }

    #[test]
    fn test_set_routes_known_fields() {
        let mut values = ItemFormValues::default();
        values.set("breed", "ปอมเมอเรเนียน".to_owned());
        values.set("nonsense", "ignored".to_owned());
        assert_eq!(values.breed, "ปอมเมอเรเนียน");
    }
}

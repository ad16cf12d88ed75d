//! Shop settings page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::db::settings::{get_settings, save_settings};
use crate::error::AppError;
use crate::filters;
use crate::middleware::auth::RequireAdminAuth;
use crate::middleware::session::set_flash;
use crate::models::{PageContext, ShopSettings};
use crate::routes::page_context;
use crate::state::AppState;

/// Settings form template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/settings.html")]
pub struct SettingsTemplate {
    pub ctx: PageContext,
    pub settings: ShopSettings,
}

/// Settings form body. Every field submits as text; blanks mean "unset".
#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    #[serde(default)]
    pub logo_text: String,
    #[serde(default)]
    pub shop_name: String,
    #[serde(default)]
    pub marquee_text: String,
    #[serde(default)]
    pub cover_image_url: String,
    #[serde(default)]
    pub footer_text: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub facebook_url: String,
    #[serde(default)]
    pub instagram_url: String,
    #[serde(default)]
    pub line_url: String,
}

impl SettingsForm {
    /// Convert the submitted text fields into the stored document; blank
    /// entries clear their field.
    fn into_settings(self) -> ShopSettings {
        ShopSettings {
            logo_text: normalize(self.logo_text),
            shop_name: normalize(self.shop_name),
            marquee_text: normalize(self.marquee_text),
            cover_image_url: normalize(self.cover_image_url),
            footer_text: normalize(self.footer_text),
            contact_phone: normalize(self.contact_phone),
            contact_email: normalize(self.contact_email),
            facebook_url: normalize(self.facebook_url),
            instagram_url: normalize(self.instagram_url),
            line_url: normalize(self.line_url),
        }
    }
}

/// Trim an entry; empty means unset.
fn normalize(entry: String) -> Option<String> {
    let trimmed = entry.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Show the settings form.
pub async fn show(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
) -> SettingsTemplate {
    let ctx = page_context(&state, &session, true).await;

    let settings = match get_settings(state.pool()).await {
        Ok(settings) => settings.unwrap_or_default(),
        Err(error) => {
            tracing::error!(%error, "failed to load settings for the settings page");
            ShopSettings::default()
        }
    };

    SettingsTemplate { ctx, settings }
}

/// Save the settings document.
pub async fn update(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SettingsForm>,
) -> Result<Redirect, AppError> {
    let settings = form.into_settings();
    save_settings(state.pool(), &settings).await?;

    let _ = set_flash(&session, "บันทึกการตั้งค่าแล้ว").await;
    Ok(Redirect::to("/admin/settings"))
}

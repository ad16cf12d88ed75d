//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Product grid (home), ?page=N
//! GET  /health                    - Health check
//! GET  /product?id={key}&img={n}  - Product detail with gallery
//!
//! # Auth
//! GET  /auth/login                - Login page
//! POST /auth/login                - Login action
//! POST /auth/logout               - Logout action
//!
//! # Admin (session-gated)
//! GET    /admin                   - Product table
//! GET    /admin/products/rows     - Table rows fragment (HTMX re-fetch)
//! DELETE /admin/products/{key}    - Delete one product (HTMX row swap)
//! GET    /admin/items/new         - Blank item form
//! POST   /admin/items             - Create item (multipart, uploads photos)
//! GET    /admin/items/{key}/edit  - Prefilled item form
//! POST   /admin/items/{key}       - Update item (multipart)
//! GET    /admin/settings          - Shop settings form
//! POST   /admin/settings          - Save shop settings
//! ```

pub mod admin;
pub mod auth;
pub mod home;
pub mod items;
pub mod products;
pub mod settings;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_sessions::Session;

use crate::middleware::session::take_flash;
use crate::models::PageContext;
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the admin routes router.
///
/// Every handler in here takes `RequireAdminAuth`, so the whole subtree is
/// behind the session gate.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::index))
        .route("/products/rows", get(admin::rows))
        .route("/products/{key}", delete(admin::delete_product))
        .route("/items/new", get(items::new_item))
        .route("/items", post(items::create))
        .route("/items/{key}/edit", get(items::edit_item))
        .route("/items/{key}", post(items::update))
        .route("/settings", get(settings::show).post(settings::update))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Public pages
        .route("/", get(home::home))
        .route("/product", get(products::show))
        // Auth routes
        .nest("/auth", auth_routes())
        // Admin panel
        .nest("/admin", admin_routes())
}

/// Assemble the page chrome shared by every rendered view.
///
/// A settings read failure degrades to the fixed defaults; it never breaks
/// the page being rendered.
pub(crate) async fn page_context(
    state: &AppState,
    session: &Session,
    is_admin: bool,
) -> PageContext {
    let flash = take_flash(session).await;

    let settings = match crate::db::settings::get_settings(state.pool()).await {
        Ok(settings) => settings.unwrap_or_default(),
        Err(error) => {
            tracing::warn!(%error, "failed to load shop settings, using defaults");
            crate::models::ShopSettings::default()
        }
    };

    PageContext::assemble(is_admin, flash, settings)
}

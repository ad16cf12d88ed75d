//! Authentication routes: login page, login, and logout.
//!
//! The session-gate helpers in `middleware::auth` are the only writers of
//! the session's admin entry; both handlers here go through them so the
//! gate keeps a single source of truth.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::AppError;
use crate::filters;
use crate::middleware::auth::{OptionalAdminAuth, clear_current_admin, set_current_admin};
use crate::middleware::session::set_flash;
use crate::models::{CurrentAdmin, PageContext};
use crate::routes::page_context;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub ctx: PageContext,
    pub error: Option<String>,
}

/// Login form body.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Render the login page.
///
/// GET /auth/login
///
/// Already-authenticated admins go straight to the panel.
pub async fn login_page(
    OptionalAdminAuth(admin): OptionalAdminAuth,
    State(state): State<AppState>,
    session: Session,
) -> Response {
    if admin.is_some() {
        return Redirect::to("/admin").into_response();
    }

    let ctx = page_context(&state, &session, false).await;
    LoginTemplate { ctx, error: None }.into_response()
}

/// Log in with email and password.
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let service = AuthService::new(state.pool());

    match service.login_with_password(&form.email, &form.password).await {
        Ok(admin) => {
            let current = CurrentAdmin {
                id: admin.id,
                email: admin.email.into_inner(),
            };
            set_current_admin(&session, &current)
                .await
                .map_err(|e| AppError::Internal(format!("failed to store session: {e}")))?;

            tracing::info!(admin = %current.email, "admin logged in");
            Ok(Redirect::to("/admin").into_response())
        }
        Err(AuthError::InvalidCredentials | AuthError::InvalidEmail(_)) => {
            let ctx = page_context(&state, &session, false).await;
            Ok(LoginTemplate {
                ctx,
                error: Some("อีเมลหรือรหัสผ่านไม่ถูกต้อง".to_owned()),
            }
            .into_response())
        }
        Err(other) => Err(AppError::Auth(other)),
    }
}

/// Log out and clear the session's admin entry.
///
/// POST /auth/logout
///
/// If the session store fails, the admin entry is left untouched and the
/// error surfaces - the user still appears logged in until the store
/// confirms otherwise.
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    clear_current_admin(&session)
        .await
        .map_err(|e| AppError::Internal(format!("logout failed: {e}")))?;

    let _ = set_flash(&session, "คุณออกจากระบบแล้ว").await;
    Ok(Redirect::to("/"))
}

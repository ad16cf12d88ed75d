//! Admin login management commands.

use secrecy::SecretString;

use pompom_boutique_site::db;
use pompom_boutique_site::services::auth::AuthService;

/// Create a new admin login.
///
/// # Errors
///
/// Returns an error if the database is unreachable, the email is invalid,
/// the password is too weak, or the email is already registered.
pub async fn create(email: &str, password: &str) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = SecretString::from(super::migrate::database_url()?);
    let pool = db::create_pool(&database_url).await?;

    let service = AuthService::new(&pool);
    let admin = service.create_admin(email, password).await?;

    tracing::info!(id = %admin.id, email = %admin.email, "admin created");
    Ok(())
}

//! Admin login storage.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use pompom_boutique_core::{AdminUserId, Email};

use crate::db::RepositoryError;
use crate::models::AdminUser;

/// Row shape for login lookups; the password hash never leaves this module
/// except through [`AdminRepository::get_with_password`].
#[derive(sqlx::FromRow)]
struct AdminAuthRow {
    id: AdminUserId,
    email: Email,
    password_hash: String,
    created_at: DateTime<Utc>,
}

/// Repository for admin logins.
pub struct AdminRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminRepository<'a> {
    /// Create a new admin repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Look up an admin together with their password hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_with_password(
        &self,
        email: &Email,
    ) -> Result<Option<(AdminUser, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminAuthRow>(
            "SELECT id, email, password_hash, created_at FROM admin_users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|row| {
            (
                AdminUser {
                    id: row.id,
                    email: row.email,
                    created_at: row.created_at,
                },
                row.password_hash,
            )
        }))
    }

    /// Create a new admin login.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` when the email is already
    /// registered, or a database error otherwise.
    pub async fn create(
        &self,
        email: &Email,
        password_hash: &str,
    ) -> Result<AdminUser, RepositoryError> {
        let id = AdminUserId::generate();

        let created_at: DateTime<Utc> = sqlx::query_scalar(
            "INSERT INTO admin_users (id, email, password_hash) VALUES ($1, $2, $3) \
             RETURNING created_at",
        )
        .bind(id)
        .bind(email)
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::Conflict("admin email already registered".to_string())
            }
            _ => RepositoryError::from(e),
        })?;

        Ok(AdminUser {
            id,
            email: email.clone(),
            created_at,
        })
    }
}

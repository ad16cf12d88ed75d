//! Authentication error types.

use pompom_boutique_core::EmailError;

use crate::db::RepositoryError;

/// Errors from the authentication service.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Email unknown or password mismatch; deliberately indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An admin with this email already exists.
    #[error("admin already exists")]
    AdminAlreadyExists,

    /// The password does not meet requirements.
    #[error("weak password: {0}")]
    WeakPassword(String),

    /// The email address is malformed.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Password hashing failed.
    #[error("password hashing failed")]
    PasswordHash,

    /// Database operation failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

//! Admin login model.

use chrono::{DateTime, Utc};

use pompom_boutique_core::{AdminUserId, Email};

/// An administrator login (the only kind of account the site has).
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub id: AdminUserId,
    pub email: Email,
    pub created_at: DateTime<Utc>,
}

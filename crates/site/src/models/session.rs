//! Session-scoped state.

use serde::{Deserialize, Serialize};

use pompom_boutique_core::AdminUserId;

/// Keys under which values are stored in the session.
pub mod session_keys {
    /// The authenticated admin. Written only by the session-gate helpers in
    /// `middleware::auth`; every other reader goes through the extractors.
    pub const CURRENT_ADMIN: &str = "current_admin";
    /// One-shot notice shown on the next rendered page.
    pub const FLASH: &str = "flash";
}

/// The authenticated admin mirrored into the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentAdmin {
    pub id: AdminUserId,
    pub email: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_current_admin_roundtrip() {
        let admin = CurrentAdmin {
            id: AdminUserId::generate(),
            email: "admin@example.com".to_owned(),
        };
        let json = serde_json::to_string(&admin).unwrap();
        let back: CurrentAdmin = serde_json::from_str(&json).unwrap();
        assert_eq!(back, admin);
    }
}

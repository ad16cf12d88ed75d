//! Product availability status.

use serde::{Deserialize, Serialize};

/// Availability status of a catalog product.
///
/// The store persists statuses as plain text, so values outside the known
/// set can come back at any time. Those are preserved in [`Self::Other`] and
/// render with empty display labels instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductStatus {
    /// Ready to move to a new home.
    Available,
    /// Reserved by a buyer.
    Preordered,
    /// Already sold.
    Sold,
    /// Unrecognized stored value, kept verbatim.
    Other(String),
}

impl ProductStatus {
    /// Canonical storage value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "available",
            Self::Preordered => "preordered",
            Self::Sold => "sold",
            Self::Other(raw) => raw,
        }
    }

    /// Badge label shown on public product cards.
    #[must_use]
    pub const fn card_label(&self) -> &'static str {
        match self {
            Self::Available => "พร้อมย้ายบ้าน",
            Self::Preordered => "ติดจอง",
            Self::Sold => "ขายแล้ว",
            Self::Other(_) => "",
        }
    }

    /// Badge label shown in the admin table.
    #[must_use]
    pub const fn table_label(&self) -> &'static str {
        match self {
            Self::Available => "พร้อมขาย",
            Self::Preordered => "ติดจอง",
            Self::Sold => "ขายแล้ว",
            Self::Other(_) => "",
        }
    }

    /// CSS class for the status badge.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Preordered => "preordered",
            Self::Sold => "sold",
            Self::Other(_) => "",
        }
    }

    /// Whether the product should be presented as already sold.
    #[must_use]
    pub const fn is_sold(&self) -> bool {
        matches!(self, Self::Sold)
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "available" => Self::Available,
            "preordered" => Self::Preordered,
            "sold" => Self::Sold,
            other => Self::Other(other.to_owned()),
        })
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for ProductStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "available" => Self::Available,
            "preordered" => Self::Preordered,
            "sold" => Self::Sold,
            _ => Self::Other(s),
        }
    }
}

impl From<ProductStatus> for String {
    fn from(status: ProductStatus) -> Self {
        match status {
            ProductStatus::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

// SQLx support (with postgres feature): statuses are stored as TEXT
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for ProductStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for ProductStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self::from(raw))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for ProductStatus {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!(
            "available".parse::<ProductStatus>().unwrap(),
            ProductStatus::Available
        );
        assert_eq!(
            "preordered".parse::<ProductStatus>().unwrap(),
            ProductStatus::Preordered
        );
        assert_eq!("sold".parse::<ProductStatus>().unwrap(), ProductStatus::Sold);
    }

    #[test]
    fn test_parse_unknown_value_never_fails() {
        let status: ProductStatus = "adopted".parse().unwrap();
        assert_eq!(status, ProductStatus::Other("adopted".to_owned()));
        assert_eq!(status.as_str(), "adopted");
    }

    #[test]
    fn test_unknown_value_renders_empty_labels() {
        let status = ProductStatus::Other("mystery".to_owned());
        assert_eq!(status.card_label(), "");
        assert_eq!(status.table_label(), "");
        assert_eq!(status.css_class(), "");
    }

    #[test]
    fn test_card_labels() {
        assert_eq!(ProductStatus::Available.card_label(), "พร้อมย้ายบ้าน");
        assert_eq!(ProductStatus::Preordered.card_label(), "ติดจอง");
        assert_eq!(ProductStatus::Sold.card_label(), "ขายแล้ว");
    }

    #[test]
    fn test_table_labels_differ_for_available() {
        assert_eq!(ProductStatus::Available.table_label(), "พร้อมขาย");
    }

    #[test]
    fn test_is_sold() {
        assert!(ProductStatus::Sold.is_sold());
        assert!(!ProductStatus::Available.is_sold());
        assert!(!ProductStatus::Other("sold?".to_owned()).is_sold());
    }

    #[test]
    fn test_serde_roundtrip_preserves_unknown() {
        let status = ProductStatus::Other("adopted".to_owned());
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, "\"adopted\"");

        let back: ProductStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
    }
}

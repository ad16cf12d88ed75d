//! Shop chrome settings.

use serde::{Deserialize, Serialize};

/// Singleton shop settings, stored as one JSONB document under a fixed key.
///
/// Every field is optional: absent values fall back to a hardcoded default
/// or hide their page element entirely (social links in particular render
/// nothing when unset).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopSettings {
    pub logo_text: Option<String>,
    pub shop_name: Option<String>,
    pub marquee_text: Option<String>,
    pub cover_image_url: Option<String>,
    pub footer_text: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub line_url: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_partial_document() {
        // Older saved documents may miss newer fields entirely
        let settings: ShopSettings =
            serde_json::from_str(r#"{"shop_name": "ปอมปอม บูทีค"}"#).unwrap();
        assert_eq!(settings.shop_name.as_deref(), Some("ปอมปอม บูทีค"));
        assert_eq!(settings.facebook_url, None);
    }

    #[test]
    fn test_roundtrip() {
        let settings = ShopSettings {
            shop_name: Some("ปอมปอม บูทีค".to_owned()),
            contact_phone: Some("081-234-5678".to_owned()),
            ..ShopSettings::default()
        };
        let json = serde_json::to_value(&settings).unwrap();
        let back: ShopSettings = serde_json::from_value(json).unwrap();
        assert_eq!(back, settings);
    }
}

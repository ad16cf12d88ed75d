//! Per-request page chrome.

use crate::models::ShopSettings;

/// Default shop name used when settings are absent.
const DEFAULT_SHOP_NAME: &str = "ปอมปอม บูทีค";

/// Default footer line.
const DEFAULT_FOOTER_TEXT: &str = "ปอมปอม บูทีค - เพื่อนขนปุยที่คุณไว้ใจ";

/// Chrome shared by every rendered page: navigation state, a one-shot flash
/// notice, and the settings-driven shop identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// Drives the auth link label and destination in the navigation.
    pub is_admin: bool,
    pub flash: Option<String>,
    pub shop_name: String,
    pub logo_text: String,
    pub marquee_text: Option<String>,
    pub cover_image_url: Option<String>,
    pub footer_text: String,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub line_url: Option<String>,
}

impl PageContext {
    /// Merge the stored settings over the fixed defaults.
    ///
    /// Required chrome falls back to a default; optional chrome stays `None`
    /// and its page element is hidden entirely by the templates.
    #[must_use]
    pub fn assemble(is_admin: bool, flash: Option<String>, settings: ShopSettings) -> Self {
        Self {
            is_admin,
            flash,
            shop_name: settings
                .shop_name
                .unwrap_or_else(|| DEFAULT_SHOP_NAME.to_owned()),
            logo_text: settings
                .logo_text
                .unwrap_or_else(|| DEFAULT_SHOP_NAME.to_owned()),
            marquee_text: settings.marquee_text,
            cover_image_url: settings.cover_image_url,
            footer_text: settings
                .footer_text
                .unwrap_or_else(|| DEFAULT_FOOTER_TEXT.to_owned()),
            contact_phone: settings.contact_phone,
            contact_email: settings.contact_email,
            facebook_url: settings.facebook_url,
            instagram_url: settings.instagram_url,
            line_url: settings.line_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_settings_empty() {
        let ctx = PageContext::assemble(false, None, ShopSettings::default());
        assert_eq!(ctx.shop_name, DEFAULT_SHOP_NAME);
        assert_eq!(ctx.footer_text, DEFAULT_FOOTER_TEXT);
        assert_eq!(ctx.facebook_url, None);
        assert!(!ctx.is_admin);
    }

    #[test]
    fn test_settings_override_defaults() {
        let settings = ShopSettings {
            shop_name: Some("ร้านใหม่".to_owned()),
            footer_text: Some("ขอบคุณที่แวะมา".to_owned()),
            facebook_url: Some("https://facebook.com/pompom".to_owned()),
            ..ShopSettings::default()
        };
        let ctx = PageContext::assemble(true, Some("บันทึกแล้ว".to_owned()), settings);
        assert_eq!(ctx.shop_name, "ร้านใหม่");
        assert_eq!(ctx.footer_text, "ขอบคุณที่แวะมา");
        assert_eq!(
            ctx.facebook_url.as_deref(),
            Some("https://facebook.com/pompom")
        );
        assert!(ctx.is_admin);
        assert_eq!(ctx.flash.as_deref(), Some("บันทึกแล้ว"));
    }
}

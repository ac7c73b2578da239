//! Social share links for a committed idea.

use urlencoding::encode;

/// Platforms the commitment dialog can share to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SharePlatform {
    Twitter,
    Facebook,
    WhatsApp,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 3] = [SharePlatform::Facebook, SharePlatform::Twitter, SharePlatform::WhatsApp];

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            SharePlatform::Twitter => "Tweet",
            SharePlatform::Facebook => "Share",
            SharePlatform::WhatsApp => "WhatsApp",
        }
    }

    /// Share intent URL for `text`. `page_url` is only used by Facebook.
    pub fn url(&self, text: &str, page_url: &str) -> String {
        let text = encode(text);
        match self {
            SharePlatform::Twitter => format!("https://twitter.com/intent/tweet?text={}", text),
            SharePlatform::Facebook => format!(
                "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
                encode(page_url),
                text
            ),
            SharePlatform::WhatsApp => format!("https://wa.me/?text={}", text),
        }
    }
}

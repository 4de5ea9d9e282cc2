//! Site-wide settings that are not language specific.

use dioxus::prelude::*;
use tracing::{info, warn};

use crate::i18n::Language;

/// Environment variable that overrides the starting language (native shells only).
pub const LANGUAGE_ENV: &str = "MESO_LANG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub initial_language: Language,
    /// Target of every "order now" button.
    pub order_url: &'static str,
    pub franchise_email: &'static str,
    pub social: &'static [SocialLink],
}

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Instagram",
        href: "https://www.instagram.com/mesogdansk/",
    },
    SocialLink {
        label: "Facebook",
        href: "https://www.facebook.com/RamenGdansk/",
    },
    SocialLink {
        label: "TikTok",
        href: "https://www.tiktok.com/@meso.food",
    },
];

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            initial_language: Language::default(),
            order_url: "https://order.mesofood.pl",
            franchise_email: "franchise@meso.pl",
            social: SOCIAL_LINKS,
        }
    }
}

impl SiteConfig {
    /// Defaults, with the starting language taken from `MESO_LANG` when set.
    ///
    /// An unsupported value is logged and ignored.
    pub fn from_env() -> Self {
        Self::default().with_language_override(std::env::var(LANGUAGE_ENV).ok().as_deref())
    }

    fn with_language_override(mut self, tag: Option<&str>) -> Self {
        match tag.map(Language::from_tag) {
            Some(Ok(lang)) => {
                info!("[config] starting language {lang} (from {LANGUAGE_ENV})");
                self.initial_language = lang;
            }
            Some(Err(err)) => warn!("[config] ignoring {LANGUAGE_ENV}: {err}"),
            None => {}
        }
        self
    }
}

/// The [`SiteConfig`] provided by the platform shell, or the defaults.
pub fn use_site_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_in_polish() {
        let config = SiteConfig::default();
        assert_eq!(config.initial_language, Language::Pl);
        assert_eq!(config.social.len(), 3);
    }

    #[test]
    fn override_accepts_regional_tags() {
        let config = SiteConfig::default().with_language_override(Some("en-GB"));
        assert_eq!(config.initial_language, Language::En);
    }

    #[test]
    fn override_ignores_unsupported_tags() {
        let config = SiteConfig::default().with_language_override(Some("de"));
        assert_eq!(config.initial_language, Language::Pl);

        let config = SiteConfig::default().with_language_override(None);
        assert_eq!(config, SiteConfig::default());
    }
}

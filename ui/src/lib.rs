//! Shared UI crate for the MESO site. Content, language selection and every view live here;
//! the platform crates only add routing and window chrome.

pub mod config;
pub mod core;
pub mod i18n;
pub mod sections;
pub mod views;

pub mod components {
    // Router-agnostic links to the site's pages (components/page_link.rs)
    pub mod page_link;
    pub use page_link::{page_link, register_page_links, Page, PageLinks};

    // Config + language provider + error boundary (components/site_root.rs)
    mod site_root;
    pub use site_root::SiteRoot;
}

use dioxus::prelude::*;

/// Shared theme stylesheet (web serves it as an asset; desktop inlines [`THEME_CSS_INLINE`]).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

//! Internationalization (i18n) support for `meso-ui`.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of the per-language `.json` content files)
//! - `serde` / `serde_json` (typed [`Translations`] tree + structural parity check)
//! - `unic-langid` (parsing of BCP-47 tags into a supported [`Language`])
//! - a Dioxus context carrying the active language selection
//!
//! Folder layout (relative to this crate root):
//! ```text
//! content/
//!   pl.json   (default language)
//!   en.json
//! ```
//!
//! Usage in a component (somewhere below a `LanguageProvider`):
//! ```ignore
//! use crate::i18n::use_language;
//! let mut lang = use_language();
//! let t = lang.translations()?;
//! rsx! {
//!     a { href: "#menu", "{t.nav.menu}" }
//!     button { onclick: move |_| lang.toggle_language(), "{lang.language()}" }
//! }
//! ```
//!
//! To add a content key:
//! 1. Add the field to the matching struct in [`content`].
//! 2. Add the value to *both* `content/pl.json` and `content/en.json`.
//! 3. Run tests; loading rejects branches whose key structure differs.
//!
//! Public API surface:
//! - [`Language`] – the two supported languages (`pl` default, `en`).
//! - [`ContentDictionary`] – embedded, parity-checked dictionary (`ContentDictionary::embedded()`).
//! - [`LanguageSelector`] – platform-agnostic active selection + locale side effect.
//! - [`LanguageProvider`] / [`use_language`] – Dioxus binding used by every view.

pub mod content;
mod context;
mod error;
mod language;
mod selector;

pub use content::{ContentDictionary, Translations};
pub use context::{try_use_language, use_language, DocumentLocale, LanguageContext, LanguageProvider};
pub use error::ContentError;
pub use language::Language;
pub use selector::{LanguageSelector, LocaleSink};

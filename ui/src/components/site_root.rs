use dioxus::prelude::*;
use tracing::error;

use crate::config::SiteConfig;
use crate::i18n::LanguageProvider;

/// Everything a page needs above it: site config, language selection, and an error
/// boundary catching content integrity failures.
///
/// Platforms render their router inside it.
#[component]
pub fn SiteRoot(#[props(default)] config: SiteConfig, children: Element) -> Element {
    let initial = config.initial_language;
    use_context_provider(|| config);

    rsx! {
        ErrorBoundary {
            handle_error: |errors: ErrorContext| {
                for err in errors.errors().iter() {
                    error!("[ui] render failed: {err}");
                }
                rsx! {
                    section { class: "page page-error",
                        h1 { "MESO" }
                        p { "Coś poszło nie tak. Spróbuj odświeżyć stronę." }
                        p { lang: "en", "Something went wrong. Please reload the page." }
                    }
                }
            },
            LanguageProvider { initial, {children} }
        }
    }
}

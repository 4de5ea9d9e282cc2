use dioxus::prelude::*;
use tracing::debug;

use super::{ContentDictionary, ContentError, Language, LanguageSelector, LocaleSink, Translations};

/// Writes `document.documentElement.lang` through the platform's JS bridge.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentLocale;

impl LocaleSink for DocumentLocale {
    fn apply_locale(&mut self, language: Language) {
        // Fire and forget: nothing is sent back from the page.
        let _ = document::eval(&format!(
            "document.documentElement.lang = \"{}\";",
            language.code()
        ));
    }
}

/// Handle to the active language selection, provided by [`LanguageProvider`].
///
/// Reading through it subscribes the calling component, so every view that renders
/// text re-renders when the language changes.
#[derive(Clone, Copy)]
pub struct LanguageContext {
    selector: Signal<LanguageSelector<'static>>,
}

impl LanguageContext {
    pub fn language(&self) -> Language {
        self.selector.read().active()
    }

    pub fn set_language(&mut self, language: Language) {
        debug!("[i18n] set_language {language}");
        self.selector.write().set_language(language);
    }

    pub fn toggle_language(&mut self) {
        let next = self.language().toggled();
        self.set_language(next);
    }

    pub fn translations(&self) -> Result<&'static Translations, ContentError> {
        self.selector.read().translations()
    }
}

/// Owns the language selection for everything rendered inside it.
///
/// The embedded dictionary is validated on first use; a broken dictionary is raised
/// as a render error for the surrounding `ErrorBoundary`.
#[component]
pub fn LanguageProvider(#[props(default)] initial: Language, children: Element) -> Element {
    let dictionary = ContentDictionary::embedded()?;

    let selector =
        use_signal(move || LanguageSelector::new(dictionary, initial).with_sink(DocumentLocale));
    use_context_provider(|| LanguageContext { selector });

    // Sync the document attribute with the starting language once mounted.
    use_effect(move || DocumentLocale.apply_locale(initial));

    rsx! { {children} }
}

/// The language context of the nearest [`LanguageProvider`].
///
/// # Panics
/// When called from a component that is not rendered inside a `LanguageProvider`.
pub fn use_language() -> LanguageContext {
    require_provider(try_use_language())
}

fn require_provider(context: Option<LanguageContext>) -> LanguageContext {
    context.unwrap_or_else(|| {
        panic!("use_language() called outside of a LanguageProvider; wrap the app root in LanguageProvider {{ .. }}")
    })
}

/// Like [`use_language`], but `None` outside a provider.
pub fn try_use_language() -> Option<LanguageContext> {
    try_use_context::<LanguageContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "outside of a LanguageProvider")]
    fn missing_provider_panics_with_a_hint() {
        require_provider(None);
    }
}

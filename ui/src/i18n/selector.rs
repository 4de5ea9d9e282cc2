use std::fmt;

use super::{ContentDictionary, ContentError, Language, Translations};

/// Receives the active language every time it is set.
///
/// The web/desktop binding writes the document `lang` attribute; tests record calls.
pub trait LocaleSink {
    fn apply_locale(&mut self, language: Language);
}

impl<F: FnMut(Language)> LocaleSink for F {
    fn apply_locale(&mut self, language: Language) {
        self(language)
    }
}

/// Active language selection over a [`ContentDictionary`].
///
/// Platform agnostic: no Dioxus types in here. The component-tree binding lives in
/// [`LanguageContext`](super::LanguageContext), which keeps one selector inside a signal.
pub struct LanguageSelector<'d> {
    dictionary: &'d ContentDictionary,
    active: Language,
    sink: Option<Box<dyn LocaleSink + 'd>>,
}

impl<'d> LanguageSelector<'d> {
    pub fn new(dictionary: &'d ContentDictionary, initial: Language) -> Self {
        Self {
            dictionary,
            active: initial,
            sink: None,
        }
    }

    /// Attach the sink that mirrors every [`set_language`](Self::set_language) call.
    pub fn with_sink(mut self, sink: impl LocaleSink + 'd) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn active(&self) -> Language {
        self.active
    }

    /// Switch to `language` and push it to the locale sink.
    ///
    /// Setting the current language again is allowed and re-applies the locale.
    pub fn set_language(&mut self, language: Language) {
        self.active = language;
        if let Some(sink) = self.sink.as_mut() {
            sink.apply_locale(language);
        }
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.active.toggled());
    }

    /// The dictionary branch for the active language.
    pub fn translations(&self) -> Result<&'d Translations, ContentError> {
        self.dictionary.branch(self.active)
    }
}

impl fmt::Debug for LanguageSelector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageSelector")
            .field("active", &self.active)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}

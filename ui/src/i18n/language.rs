use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use super::ContentError;

/// The languages the site content is authored in.
///
/// Polish is the default; the whole site starts in Polish unless the
/// platform shell picks something else at launch.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pl,
    En,
}

impl Language {
    /// Every supported language, in switcher order.
    pub const ALL: [Language; 2] = [Language::Pl, Language::En];

    /// Two-letter code, as written to the document `lang` attribute.
    pub const fn code(self) -> &'static str {
        match self {
            Language::Pl => "pl",
            Language::En => "en",
        }
    }

    /// Name of the language in the language itself.
    pub const fn native_name(self) -> &'static str {
        match self {
            Language::Pl => "Polski",
            Language::En => "English",
        }
    }

    /// The other language. Only meaningful while exactly two languages exist.
    pub const fn toggled(self) -> Self {
        match self {
            Language::Pl => Language::En,
            Language::En => Language::Pl,
        }
    }

    /// Parse a BCP-47 tag (`"pl"`, `"en-US"`, `"PL"`) by its primary language subtag.
    pub fn from_tag(tag: &str) -> Result<Self, ContentError> {
        let unsupported = || ContentError::UnsupportedLanguage(tag.to_string());
        let id: LanguageIdentifier = tag.trim().parse().map_err(|_| unsupported())?;

        Self::ALL
            .into_iter()
            .find(|lang| id.language.as_str() == lang.code())
            .ok_or_else(unsupported)
    }

    /// Embedded content file backing this language.
    pub(crate) fn content_file(self) -> String {
        format!("{}.json", self.code())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("pl", Language::Pl)]
    #[case("pl-PL", Language::Pl)]
    #[case("PL", Language::Pl)]
    #[case("en", Language::En)]
    #[case("en-US", Language::En)]
    #[case(" en-GB ", Language::En)]
    fn parses_supported_tags(#[case] tag: &str, #[case] expected: Language) {
        assert_eq!(Language::from_tag(tag), Ok(expected));
    }

    #[rstest]
    #[case("de")]
    #[case("fr-FR")]
    #[case("not a tag")]
    fn rejects_other_tags(#[case] tag: &str) {
        assert_eq!(
            Language::from_tag(tag),
            Err(ContentError::UnsupportedLanguage(tag.to_string()))
        );
    }

    #[test]
    fn toggled_is_an_involution() {
        for lang in Language::ALL {
            assert_ne!(lang.toggled(), lang);
            assert_eq!(lang.toggled().toggled(), lang);
        }
    }

    #[test]
    fn default_is_polish() {
        assert_eq!(Language::default(), Language::Pl);
    }

    #[test]
    fn display_and_serde_use_the_code() {
        assert_eq!(Language::En.to_string(), "en");
        assert_eq!(serde_json::to_string(&Language::Pl).unwrap(), "\"pl\"");
        assert_eq!(
            serde_json::from_str::<Language>("\"en\"").unwrap(),
            Language::En
        );
    }
}

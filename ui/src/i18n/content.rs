//! The static content dictionary: every user-visible string on the site, per language.
//!
//! Each language branch lives in `content/<code>.json` and is embedded into the binary.
//! Branches are validated in two steps when loading:
//!
//! 1. **Shape parity** – the set of leaf key paths must be identical across branches
//!    (see [`key_paths`] / [`check_parity`]). List positions count as part of the path,
//!    so a benefit list with three items in one language and four in the other is
//!    rejected as well.
//! 2. **Typed decode** – every branch deserializes into [`Translations`]. Unknown keys are
//!    rejected, missing keys fail, so views can only reference content that exists.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

use super::{ContentError, Language};

/// Embed all language branches under `content/`.
#[derive(Embed)]
#[folder = "content"]
struct EmbeddedContent;

static EMBEDDED: Lazy<Result<ContentDictionary, ContentError>> = Lazy::new(|| {
    let loaded = ContentDictionary::load_embedded();
    if let Err(err) = &loaded {
        error!("[i18n] embedded content rejected: {err}");
    }
    loaded
});

/// Language-keyed dictionary of [`Translations`] branches.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDictionary {
    branches: BTreeMap<Language, Translations>,
}

impl ContentDictionary {
    /// The dictionary compiled into this binary (loaded and validated once).
    pub fn embedded() -> Result<&'static ContentDictionary, ContentError> {
        EMBEDDED.as_ref().map_err(Clone::clone)
    }

    /// Load every [`Language::ALL`] branch from the embedded `content/` folder.
    pub fn load_embedded() -> Result<Self, ContentError> {
        let mut sources = Vec::with_capacity(Language::ALL.len());
        for lang in Language::ALL {
            let path = lang.content_file();
            let file = EmbeddedContent::get(&path).ok_or(ContentError::MissingSource(path))?;
            let text = decode_source(lang, &file.data)?.to_owned();
            sources.push((lang, text));
        }
        Self::from_sources(sources.iter().map(|(lang, text)| (*lang, text.as_str())))
    }

    /// Build a dictionary from raw JSON branches. The first branch is the parity reference.
    pub fn from_sources<'a, I>(sources: I) -> Result<Self, ContentError>
    where
        I: IntoIterator<Item = (Language, &'a str)>,
    {
        let mut raw: Vec<(Language, Value)> = Vec::new();
        for (language, text) in sources {
            let value = serde_json::from_str(text).map_err(|err| ContentError::Parse {
                language,
                message: err.to_string(),
            })?;
            raw.push((language, value));
        }

        if let Some(((reference_lang, reference), rest)) = raw.split_first() {
            for (lang, value) in rest {
                check_parity((*reference_lang, reference), (*lang, value))?;
            }
        }

        let mut branches = BTreeMap::new();
        for (language, value) in raw {
            let branch = Translations::deserialize(value).map_err(|err| ContentError::Parse {
                language,
                message: err.to_string(),
            })?;
            debug!("[i18n] loaded content branch `{language}`");
            branches.insert(language, branch);
        }

        Ok(Self { branches })
    }

    /// The branch for `language`.
    pub fn branch(&self, language: Language) -> Result<&Translations, ContentError> {
        self.branches
            .get(&language)
            .ok_or(ContentError::MissingBranch(language))
    }

    /// Languages that have a branch, in [`Language`] order.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.branches.keys().copied()
    }
}

/// Content files must be valid UTF-8; nothing is replaced silently.
fn decode_source(language: Language, bytes: &[u8]) -> Result<&str, ContentError> {
    std::str::from_utf8(bytes).map_err(|err| ContentError::Parse {
        language,
        message: err.to_string(),
    })
}

/// All leaf key paths of a JSON tree: object keys joined by `.`, list positions as `[i]`.
///
/// Empty objects and lists count as leaves so that they still take part in comparisons.
pub fn key_paths(value: &Value) -> BTreeSet<String> {
    let mut paths = BTreeSet::new();
    collect_paths(value, String::new(), &mut paths);
    paths
}

fn collect_paths(value: &Value, prefix: String, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect_paths(child, path, out);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                collect_paths(child, format!("{prefix}[{index}]"), out);
            }
        }
        _ => {
            out.insert(prefix);
        }
    }
}

/// Compare two branches key path by key path, in both directions.
pub fn check_parity(left: (Language, &Value), right: (Language, &Value)) -> Result<(), ContentError> {
    let left_paths = key_paths(left.1);
    let right_paths = key_paths(right.1);

    let only_left: Vec<String> = left_paths.difference(&right_paths).cloned().collect();
    let only_right: Vec<String> = right_paths.difference(&left_paths).cloned().collect();

    if only_left.is_empty() && only_right.is_empty() {
        Ok(())
    } else {
        Err(ContentError::ShapeMismatch {
            left: left.0,
            right: right.0,
            only_left,
            only_right,
        })
    }
}

// ---------------------------------------------------------------------------
// Typed branch
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Translations {
    pub nav: NavText,
    pub hero: HeroText,
    pub ticker: TickerText,
    pub about: AboutText,
    pub menu: MenuText,
    pub location: LocationText,
    pub team: TeamText,
    pub cta: CtaText,
    pub footer: FooterText,
    pub franchise: FranchiseText,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NavText {
    pub home: String,
    pub about: String,
    pub menu: String,
    pub location: String,
    pub team: String,
    pub order: String,
    pub switch_language: String,
    pub open_menu: String,
    pub close_menu: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeroText {
    pub subtitle: String,
    pub tagline: String,
    pub cta: String,
    pub scroll: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TickerText {
    pub items: Vec<TickerItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TickerItem {
    pub text: String,
    pub accent: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AboutText {
    pub title: String,
    pub subtitle: String,
    /// May contain `**emphasis**` markers.
    pub description: String,
    pub values_title: String,
    pub stats: AboutStats,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AboutStats {
    pub affordability: StatText,
    pub taste: StatText,
    pub innovation: StatText,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StatText {
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MenuText {
    pub title: String,
    pub subtitle: String,
    pub full_menu: String,
    pub categories: MenuCategories,
    pub items: MenuItems,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MenuCategories {
    pub ramen: String,
    pub gyoza: String,
    pub karaage: String,
    pub sides: String,
}

impl MenuCategories {
    /// Category labels in display order. `sides` has no items yet.
    pub fn labels(&self) -> [&str; 4] {
        [
            self.ramen.as_str(),
            self.gyoza.as_str(),
            self.karaage.as_str(),
            self.sides.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MenuItems {
    pub spicy_miso: MenuItem,
    pub shoyu: MenuItem,
    pub tonkotsu: MenuItem,
    pub vege: MenuItem,
    pub gyoza_chicken: MenuItem,
    pub gyoza_shrimp: MenuItem,
    pub gyoza_pork: MenuItem,
    pub gyoza_vege: MenuItem,
    pub karaage_rice_spicy: MenuItem,
    pub karaage_rice_teriyaki: MenuItem,
    pub karaage_fries_spicy: MenuItem,
    pub karaage_fries_teriyaki: MenuItem,
}

impl MenuItems {
    pub fn ramen(&self) -> [&MenuItem; 4] {
        [&self.spicy_miso, &self.shoyu, &self.tonkotsu, &self.vege]
    }

    pub fn gyoza(&self) -> [&MenuItem; 4] {
        [
            &self.gyoza_chicken,
            &self.gyoza_shrimp,
            &self.gyoza_pork,
            &self.gyoza_vege,
        ]
    }

    pub fn karaage(&self) -> [&MenuItem; 4] {
        [
            &self.karaage_rice_spicy,
            &self.karaage_rice_teriyaki,
            &self.karaage_fries_spicy,
            &self.karaage_fries_teriyaki,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: String,
    #[serde(default)]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LocationText {
    pub title: String,
    pub subtitle: String,
    /// May contain `**emphasis**` markers.
    pub lead: String,
    pub mobile_points: String,
    pub pickup: PickupText,
    pub delivery: DeliveryText,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PickupText {
    pub title: String,
    pub subtitle: String,
    pub app_name: String,
    pub app_cta: String,
    pub app_url: String,
    pub address: String,
    pub more_soon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeliveryText {
    pub title: String,
    pub subtitle: String,
    pub wolt_url: String,
    pub pyszne_url: String,
    pub glovo_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TeamText {
    pub title: String,
    pub subtitle: String,
    pub click_to_watch: String,
    pub founder: ProfileText,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfileText {
    pub name: String,
    pub role: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CtaText {
    pub title: String,
    pub subtitle: String,
    pub button: String,
    pub app: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FooterText {
    pub tagline: String,
    pub navigation_title: String,
    pub links: FooterLinks,
    pub contact: ContactText,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FooterLinks {
    pub menu: String,
    pub franchise: String,
    pub contact: String,
    pub privacy: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactText {
    pub title: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FranchiseText {
    pub title: String,
    pub subtitle: String,
    pub back: String,
    pub hero: FranchiseHero,
    pub benefits: BenefitsText,
    pub investment: InvestmentText,
    pub cta: FranchiseCta,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FranchiseHero {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BenefitsText {
    pub title: String,
    pub items: Vec<BenefitItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BenefitItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InvestmentText {
    pub title: String,
    pub amount: String,
    pub description: String,
    pub includes_title: String,
    pub includes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FranchiseCta {
    pub title: String,
    pub description: String,
    pub button: String,
    pub or_write: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const PL: &str = include_str!("../../content/pl.json");
    const EN: &str = include_str!("../../content/en.json");

    #[test]
    fn embedded_dictionary_loads_both_languages() {
        let dict = ContentDictionary::embedded().expect("embedded content is valid");
        assert_eq!(dict.languages().collect::<Vec<_>>(), Language::ALL.to_vec());
    }

    #[test]
    fn embedded_branches_have_identical_key_paths() {
        let pl: Value = serde_json::from_str(PL).unwrap();
        let en: Value = serde_json::from_str(EN).unwrap();
        assert_eq!(key_paths(&pl), key_paths(&en));
    }

    #[test]
    fn key_paths_cover_nested_objects_and_lists() {
        let value = json!({
            "nav": { "home": "Home" },
            "items": [{ "title": "a" }, "b"],
            "empty": {}
        });
        let paths: Vec<String> = key_paths(&value).into_iter().collect();
        assert_eq!(
            paths,
            vec!["empty", "items[0].title", "items[1]", "nav.home"]
        );
    }

    #[test]
    fn parity_reports_missing_keys_in_both_directions() {
        let pl = json!({ "nav": { "home": "Strona", "team": "Zespół" } });
        let en = json!({ "nav": { "home": "Home", "order": "Order" } });

        let err = check_parity((Language::Pl, &pl), (Language::En, &en)).unwrap_err();
        assert_eq!(
            err,
            ContentError::ShapeMismatch {
                left: Language::Pl,
                right: Language::En,
                only_left: vec!["nav.team".into()],
                only_right: vec!["nav.order".into()],
            }
        );
    }

    #[test]
    fn parity_reports_list_length_differences() {
        let pl = json!({ "includes": ["a", "b", "c"] });
        let en = json!({ "includes": ["a", "b"] });

        match check_parity((Language::Pl, &pl), (Language::En, &en)) {
            Err(ContentError::ShapeMismatch {
                only_left,
                only_right,
                ..
            }) => {
                assert_eq!(only_left, vec!["includes[2]".to_string()]);
                assert!(only_right.is_empty());
            }
            other => panic!("expected shape mismatch, got {other:?}"),
        }
    }

    #[test]
    fn loading_rejects_a_branch_with_a_dropped_key() {
        let mut en: Value = serde_json::from_str(EN).unwrap();
        en["nav"].as_object_mut().unwrap().remove("home");
        let en = en.to_string();

        let err = ContentDictionary::from_sources([(Language::Pl, PL), (Language::En, en.as_str())])
            .unwrap_err();
        assert!(
            matches!(&err, ContentError::ShapeMismatch { only_left, .. } if only_left == &vec!["nav.home".to_string()]),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn loading_rejects_unknown_keys_even_when_both_branches_have_them() {
        let mut pl: Value = serde_json::from_str(PL).unwrap();
        let mut en: Value = serde_json::from_str(EN).unwrap();
        pl["nav"]["blog"] = json!("Blog");
        en["nav"]["blog"] = json!("Blog");
        let (pl, en) = (pl.to_string(), en.to_string());

        let err = ContentDictionary::from_sources([(Language::Pl, pl.as_str()), (Language::En, en.as_str())])
            .unwrap_err();
        assert!(matches!(err, ContentError::Parse { language: Language::Pl, .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ContentDictionary::from_sources([(Language::En, "{ nope")]).unwrap_err();
        assert!(matches!(err, ContentError::Parse { language: Language::En, .. }));
    }

    #[test]
    fn missing_branch_is_reported() {
        let dict = ContentDictionary::from_sources([(Language::Pl, PL)]).unwrap();
        assert!(dict.branch(Language::Pl).is_ok());
        assert_eq!(
            dict.branch(Language::En).unwrap_err(),
            ContentError::MissingBranch(Language::En)
        );
    }

    #[test]
    fn branches_carry_their_language_text() {
        let dict = ContentDictionary::embedded().unwrap();
        let pl = dict.branch(Language::Pl).unwrap();
        let en = dict.branch(Language::En).unwrap();

        assert_eq!(pl.nav.home, "Strona Główna");
        assert_eq!(en.nav.home, "Home");
        assert_eq!(pl.franchise.benefits.items.len(), 4);
        assert_eq!(en.franchise.investment.includes.len(), 4);
        assert_eq!(en.menu.items.tonkotsu.tag.as_deref(), Some("Premium"));
        assert_eq!(pl.menu.items.shoyu.tag, None);
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let err = decode_source(Language::Pl, b"{\"nav\": \"\xff\"}").unwrap_err();
        assert!(matches!(err, ContentError::Parse { language: Language::Pl, .. }));
        assert_eq!(decode_source(Language::En, b"{}").unwrap(), "{}");
    }

    #[test]
    fn menu_lists_every_category_including_sides() {
        let dict = ContentDictionary::embedded().unwrap();
        assert_eq!(
            dict.branch(Language::Pl).unwrap().menu.categories.labels(),
            ["Ramen", "Gyoza", "Karaage", "Dodatki"]
        );
        assert_eq!(dict.branch(Language::En).unwrap().menu.categories.sides, "Sides");
    }
}

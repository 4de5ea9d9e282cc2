use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use serde_json::Value;
use ui::i18n::content::key_paths;

/// Content completeness test.
///
/// Both language branches must describe exactly the same tree: every key path present
/// in `pl.json` has to exist in `en.json` and the other way round. Loading enforces the
/// same rule at startup; this test reports the full difference at once.
///
/// If you add a content key:
/// 1. Add it to both `ui/content/pl.json` and `ui/content/en.json`.
/// 2. Add the field to the matching struct in `ui/src/i18n/content.rs`.
/// 3. Run `cargo test -p meso-ui`.
#[test]
fn both_branches_have_the_same_key_paths() {
    const PL: &str = include_str!("../content/pl.json");
    const EN: &str = include_str!("../content/en.json");

    let pl = parse("pl", PL);
    let en = parse("en", EN);

    let pl_paths = key_paths(&pl);
    let en_paths = key_paths(&en);
    assert!(!pl_paths.is_empty(), "pl.json contains no keys");

    let only_pl: BTreeSet<_> = pl_paths.difference(&en_paths).collect();
    let only_en: BTreeSet<_> = en_paths.difference(&pl_paths).collect();
    assert_eq!(only_pl, BTreeSet::new(), "keys missing from en.json");
    assert_eq!(only_en, BTreeSet::new(), "keys missing from pl.json");
}

#[test]
fn no_branch_contains_empty_strings() {
    for (code, src) in [
        ("pl", include_str!("../content/pl.json")),
        ("en", include_str!("../content/en.json")),
    ] {
        let mut empty = Vec::new();
        find_empty(&parse(code, src), String::new(), &mut empty);
        assert!(
            empty.is_empty(),
            "{code}.json has empty values at:\n  {}",
            empty.join("\n  ")
        );
    }
}

fn parse(code: &str, src: &str) -> Value {
    serde_json::from_str(src).unwrap_or_else(|err| panic!("{code}.json is not valid JSON: {err}"))
}

fn find_empty(value: &Value, path: String, out: &mut Vec<String>) {
    match value {
        Value::String(s) if s.trim().is_empty() => out.push(path),
        Value::Object(map) => {
            for (key, child) in map {
                find_empty(child, format!("{path}.{key}"), out);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                find_empty(child, format!("{path}[{i}]"), out);
            }
        }
        _ => {}
    }
}

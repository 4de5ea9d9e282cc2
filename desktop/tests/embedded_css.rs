#![cfg(test)]
//! The desktop shell inlines `ui/assets/theme/main.css` at compile time. A truncated or
//! moved theme would only show up as an unstyled window, so check it here.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded theme is empty"
    );
}

#[test]
fn embedded_css_matches_the_ui_constant() {
    assert_eq!(EMBEDDED_CSS, ui::THEME_CSS_INLINE);
}

#[test]
fn embedded_css_defines_brand_palette() {
    for token in ["--color-bg", "--color-blue", "--color-pink", "--color-green"] {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected custom property `{token}` missing from embedded CSS"
        );
    }
}

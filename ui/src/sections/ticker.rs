use dioxus::prelude::*;

use crate::i18n::use_language;

/// Infinite marquee of short brand claims.
///
/// The item list is rendered twice back to back so the CSS loop can wrap seamlessly.
#[component]
pub fn Ticker() -> Element {
    let lang = use_language();
    let t = lang.translations()?;
    let items = &t.ticker.items;

    rsx! {
        div { class: "ticker", aria_hidden: "true",
            div { class: "ticker__fade ticker__fade--left" }
            div { class: "ticker__fade ticker__fade--right" }
            div { class: "ticker__track",
                for (i, item) in items.iter().chain(items.iter()).enumerate() {
                    span { key: "{i}", class: "ticker__item",
                        span {
                            class: if item.accent { "ticker__text ticker__text--accent" } else { "ticker__text" },
                            "{item.text}"
                        }
                        span { class: "ticker__separator", "✦" }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::config::use_site_config;
use crate::i18n::use_language;
use crate::sections::split_heading;

#[component]
pub fn Cta() -> Element {
    let lang = use_language();
    let config = use_site_config();
    let t = lang.translations()?;

    rsx! {
        section { id: "order", class: "section cta",
            div { class: "cta__backdrop", aria_hidden: "true" }
            div { class: "section__inner cta__inner reveal",
                h2 { class: "cta__title", {split_heading(&t.cta.title)} }
                p { class: "cta__subtitle", "{t.cta.subtitle}" }
                div { class: "cta__actions",
                    a {
                        class: "button button--neon",
                        href: config.order_url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{t.cta.button}"
                    }
                    a {
                        class: "button button--ghost",
                        href: "{t.location.pickup.app_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{t.cta.app}"
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use tracing::debug;

use crate::components::{page_link, Page};
use crate::config::use_site_config;
use crate::core::scroll::use_scroll_reveal;
use crate::i18n::use_language;
use crate::sections::{split_heading, BRAND};

const BENEFIT_ICONS: [&str; 4] = ["🚚", "👤", "📈", "🛠"];

fn benefit_icon(index: usize) -> &'static str {
    BENEFIT_ICONS.get(index).copied().unwrap_or("✦")
}

/// Franchise pitch: benefits, investment, contact.
#[component]
pub fn FranchisePage() -> Element {
    let mut lang = use_language();
    let config = use_site_config();
    use_scroll_reveal();
    let t = lang.translations()?;
    let f = &t.franchise;

    debug!("[i18n] FranchisePage render (lang={})", lang.language());

    rsx! {
        main { class: "page page-franchise",
            header { class: "franchise-bar",
                {page_link(Page::Home, "franchise-bar__back", &format!("← {}", f.back))}
                {page_link(Page::Home, "franchise-bar__brand", BRAND)}
                button {
                    r#type: "button",
                    class: "site-nav__lang",
                    aria_label: "{t.nav.switch_language}",
                    onclick: move |_| lang.toggle_language(),
                    span { class: "site-nav__lang-code", "{lang.language()}" }
                }
            }

            section { class: "section franchise-hero",
                div { class: "section__inner reveal",
                    h1 { class: "section__title", "{f.title}" }
                    p { class: "section__subtitle", "{f.subtitle}" }
                    h2 { class: "franchise-hero__title", "{f.hero.title}" }
                    p { class: "franchise-hero__description", "{f.hero.description}" }
                }
            }

            section { class: "section franchise-benefits",
                div { class: "section__inner",
                    h2 { class: "franchise-benefits__title reveal", {split_heading(&f.benefits.title)} }
                    div { class: "franchise-benefits__grid",
                        for (i, benefit) in f.benefits.items.iter().enumerate() {
                            article { key: "{i}", class: "benefit-card reveal",
                                span { class: "benefit-card__icon", aria_hidden: "true", "{benefit_icon(i)}" }
                                h3 { class: "benefit-card__title", "{benefit.title}" }
                                p { class: "benefit-card__description", "{benefit.description}" }
                            }
                        }
                    }
                }
            }

            section { class: "section franchise-investment",
                div { class: "section__inner investment reveal",
                    h2 { class: "investment__title", "{f.investment.title}" }
                    p { class: "investment__amount", "{f.investment.amount}" }
                    p { class: "investment__description", "{f.investment.description}" }
                    h3 { class: "investment__includes-title", "{f.investment.includes_title}" }
                    ul { class: "investment__includes",
                        for item in f.investment.includes.iter() {
                            li { key: "{item}", class: "investment__include", "{item}" }
                        }
                    }
                }
            }

            section { class: "section franchise-cta",
                div { class: "section__inner reveal",
                    h3 { class: "franchise-cta__title", "{f.cta.title}" }
                    p { class: "franchise-cta__description", "{f.cta.description}" }
                    a {
                        class: "button button--neon",
                        href: "mailto:{config.franchise_email}",
                        "{f.cta.button}"
                    }
                    p { class: "franchise-cta__alt",
                        "{f.cta.or_write} "
                        a { href: "mailto:{config.franchise_email}", "{config.franchise_email}" }
                    }
                }
            }

            footer { class: "franchise-footer",
                p { "{t.footer.copyright}" }
            }
        }
    }
}

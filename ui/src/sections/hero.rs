use dioxus::prelude::*;

use crate::config::use_site_config;
use crate::i18n::use_language;
use crate::sections::BRAND;

const HERO_IMAGE: &str = "/images/hero-ramen.jpg";
const PARTICLE_COUNT: usize = 20;

#[component]
pub fn Hero() -> Element {
    let lang = use_language();
    let config = use_site_config();
    let t = lang.translations()?;

    rsx! {
        section { id: "hero", class: "hero cyber-grid",
            div { class: "hero__particles", aria_hidden: "true",
                for i in 0..PARTICLE_COUNT {
                    span {
                        key: "{i}",
                        class: if i % 2 == 0 { "hero__particle" } else { "hero__particle hero__particle--pink" },
                        style: "--particle-index: {i}",
                    }
                }
            }

            div { class: "hero__grid",
                div { class: "hero__copy",
                    h1 { class: "hero__title glitch", aria_label: BRAND,
                        for (i, ch) in BRAND.chars().enumerate() {
                            span {
                                key: "{i}",
                                class: "hero__char",
                                style: "--char-index: {i}",
                                aria_hidden: "true",
                                "{ch}"
                            }
                        }
                    }
                    p { class: "hero__subtitle reveal", "{t.hero.subtitle}" }
                    p { class: "hero__kana", lang: "ja", aria_hidden: "true", "メソ" }
                    p { class: "hero__tagline reveal", "{t.hero.tagline}" }
                    a {
                        class: "button button--neon hero__cta",
                        href: config.order_url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{t.hero.cta}"
                    }
                }

                div { class: "hero__media reveal",
                    div { class: "hero__frame neon-border",
                        img { class: "hero__image", src: HERO_IMAGE, alt: "MESO Ramen" }
                        div { class: "hero__hud",
                            div { class: "hero__hud-status",
                                span { "SYS.STATUS: ONLINE" }
                                span { "TEMP: 98.6°C" }
                            }
                            span { class: "hero__hud-version", "v2.0.25" }
                        }
                    }
                    span { class: "hero__badge", "SMART FOOD" }
                }
            }

            a { class: "hero__scroll", href: "#about",
                span { "{t.hero.scroll}" }
                span { class: "hero__chevron", aria_hidden: "true", "⌄" }
            }
        }
    }
}

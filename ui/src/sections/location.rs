use dioxus::prelude::*;

use crate::i18n::use_language;
use crate::sections::emphasized;

#[component]
pub fn Location() -> Element {
    let lang = use_language();
    let t = lang.translations()?;
    let pickup = &t.location.pickup;
    let delivery = &t.location.delivery;

    let platforms = [
        ("Wolt", delivery.wolt_url.as_str(), "platform--wolt"),
        ("Pyszne.pl", delivery.pyszne_url.as_str(), "platform--pyszne"),
        ("Glovo", delivery.glovo_url.as_str(), "platform--glovo"),
    ];

    rsx! {
        section { id: "location", class: "section location",
            div { class: "section__inner",
                div { class: "section__header reveal",
                    h2 { class: "section__title", "{t.location.title}" }
                    p { class: "section__subtitle", "{t.location.subtitle}" }
                }
                p { class: "location__lead reveal", {emphasized(&t.location.lead)} }

                div { class: "location__cards",
                    article { class: "location-card reveal",
                        h3 { class: "location-card__title", "{pickup.title}" }
                        p { class: "location-card__subtitle", "{pickup.subtitle}" }
                        div { class: "location-card__app",
                            span { class: "location-card__app-name", "{pickup.app_name}" }
                            a {
                                class: "button button--primary",
                                href: "{pickup.app_url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{pickup.app_cta}"
                            }
                        }
                        p { class: "location-card__address", "📍 {pickup.address}" }
                        p { class: "location-card__note", "{pickup.more_soon}" }
                    }

                    article { class: "location-card reveal",
                        h3 { class: "location-card__title", "{delivery.title}" }
                        p { class: "location-card__subtitle", "{delivery.subtitle}" }
                        div { class: "location-card__platforms",
                            for (name, url, modifier) in platforms {
                                a {
                                    key: "{name}",
                                    class: "platform {modifier}",
                                    href: url,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{name}"
                                }
                            }
                        }
                    }
                }

                p { class: "location__mobile-points reveal", "{t.location.mobile_points}" }
            }
        }
    }
}

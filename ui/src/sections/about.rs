use dioxus::prelude::*;

use crate::i18n::use_language;
use crate::sections::emphasized;

const ABOUT_IMAGE: &str = "/images/about-food.jpg";

#[component]
pub fn About() -> Element {
    let lang = use_language();
    let t = lang.translations()?;
    let stats = &t.about.stats;

    let values = [
        (&stats.affordability, "✦", "about-stat--blue"),
        (&stats.taste, "❖", "about-stat--pink"),
        (&stats.innovation, "⚡", "about-stat--green"),
    ];

    rsx! {
        section { id: "about", class: "section about",
            div { class: "section__inner about__grid",
                div { class: "about__copy reveal",
                    h2 { class: "section__title", "{t.about.title}" }
                    h3 { class: "section__subtitle", "{t.about.subtitle}" }
                    p { class: "about__description", {emphasized(&t.about.description)} }
                }

                div { class: "about__media reveal",
                    img { class: "about__image", src: ABOUT_IMAGE, alt: "{t.about.subtitle}" }
                }
            }

            div { class: "section__inner about__values",
                h3 { class: "about__values-title reveal", "{t.about.values_title}" }
                div { class: "about__stats",
                    for (stat, icon, modifier) in values {
                        article { key: "{modifier}", class: "about-stat {modifier} reveal",
                            span { class: "about-stat__icon", aria_hidden: "true", "{icon}" }
                            h4 { class: "about-stat__label", "{stat.label}" }
                            p { class: "about-stat__description", "{stat.description}" }
                        }
                    }
                }
            }
        }
    }
}

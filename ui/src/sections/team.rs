use dioxus::prelude::*;

use crate::i18n::use_language;

const FOUNDER_PORTRAIT: &str = "/images/maciej.jpg";
const FOUNDER_VIDEO: &str = "/videos/Animacja_Postaci_Do_Gry.mp4";

#[component]
pub fn Team() -> Element {
    let lang = use_language();
    let mut show_video = use_signal(|| false);
    let t = lang.translations()?;
    let founder = &t.team.founder;

    rsx! {
        section { id: "team", class: "section team",
            div { class: "section__inner",
                div { class: "section__header reveal",
                    h2 { class: "section__title", "{t.team.title}" }
                    p { class: "section__subtitle", "{t.team.subtitle}" }
                }

                div { class: "team__profile reveal",
                    div { class: "team__media",
                        if show_video() {
                            video {
                                class: "team__video",
                                src: FOUNDER_VIDEO,
                                autoplay: true,
                                controls: true,
                                playsinline: true,
                            }
                        } else {
                            button {
                                r#type: "button",
                                class: "team__portrait",
                                onclick: move |_| show_video.set(true),
                                img { src: FOUNDER_PORTRAIT, alt: "{founder.name}" }
                                span { class: "team__play", "▶ {t.team.click_to_watch}" }
                            }
                        }
                    }
                    div { class: "team__bio",
                        h3 { class: "team__name", "{founder.name}" }
                        p { class: "team__role", "{founder.role}" }
                        p { class: "team__description", "{founder.description}" }
                    }
                }
            }
        }
    }
}

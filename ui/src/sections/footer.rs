use dioxus::prelude::*;

use crate::components::{page_link, Page};
use crate::config::use_site_config;
use crate::core::markup::tel_href;
use crate::i18n::use_language;
use crate::sections::BRAND;

#[component]
pub fn Footer() -> Element {
    let lang = use_language();
    let config = use_site_config();
    let t = lang.translations()?;
    let links = &t.footer.links;
    let contact = &t.footer.contact;
    let phone_href = tel_href(&contact.phone);

    rsx! {
        footer { id: "contact", class: "site-footer",
            div { class: "site-footer__grid",
                div { class: "site-footer__brand",
                    span { class: "site-footer__logo", "{BRAND}" }
                    p { class: "site-footer__tagline", "{t.footer.tagline}" }
                    div { class: "site-footer__social",
                        for social in config.social.iter() {
                            a {
                                key: "{social.label}",
                                class: "site-footer__social-link",
                                href: social.href,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                aria_label: social.label,
                                "{social.label}"
                            }
                        }
                    }
                }

                nav { class: "site-footer__nav",
                    h4 { class: "site-footer__heading", "{t.footer.navigation_title}" }
                    ul {
                        li { a { class: "site-footer__link", href: "#menu", "{links.menu}" } }
                        li { {page_link(Page::Franchise, "site-footer__link", &links.franchise)} }
                        li { a { class: "site-footer__link", href: "#contact", "{links.contact}" } }
                        li { a { class: "site-footer__link", href: "#", "{links.privacy}" } }
                    }
                }

                div { class: "site-footer__contact",
                    h4 { class: "site-footer__heading", "{contact.title}" }
                    a { class: "site-footer__link", href: "mailto:{contact.email}", "{contact.email}" }
                    a { class: "site-footer__link", href: "{phone_href}", "{contact.phone}" }
                }
            }

            p { class: "site-footer__copyright", "{t.footer.copyright}" }
        }
    }
}

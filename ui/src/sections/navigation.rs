use dioxus::prelude::*;

use crate::config::use_site_config;
use crate::core::scroll::use_nav_condensed;
use crate::i18n::use_language;
use crate::sections::BRAND;

#[component]
pub fn Navigation() -> Element {
    let mut lang = use_language();
    let config = use_site_config();
    let condensed = use_nav_condensed();
    let mut menu_open = use_signal(|| false);
    let t = lang.translations()?;

    let links = [
        (t.nav.about.as_str(), "#about"),
        (t.nav.menu.as_str(), "#menu"),
        (t.nav.location.as_str(), "#location"),
        (t.nav.team.as_str(), "#team"),
    ];

    let bar_class = if condensed() {
        "site-nav site-nav--condensed"
    } else {
        "site-nav"
    };
    let (overlay_class, burger_label, burger_icon) = if menu_open() {
        ("mobile-menu mobile-menu--open", t.nav.close_menu.as_str(), "✕")
    } else {
        ("mobile-menu", t.nav.open_menu.as_str(), "☰")
    };
    let next_language = lang.language().toggled();

    rsx! {
        nav { class: bar_class,
            div { class: "site-nav__inner",
                a {
                    class: "site-nav__brand",
                    href: "#hero",
                    title: "{t.nav.home}",
                    aria_label: "{t.nav.home}",
                    "{BRAND}"
                }

                div { class: "site-nav__links",
                    for (label, href) in links {
                        a { key: "{href}", class: "site-nav__link", href: href, "{label}" }
                    }
                }

                div { class: "site-nav__actions",
                    button {
                        r#type: "button",
                        class: "site-nav__lang",
                        title: "{t.nav.switch_language}: {next_language.native_name()}",
                        aria_label: "{t.nav.switch_language}",
                        onclick: move |_| lang.toggle_language(),
                        span { class: "site-nav__globe", aria_hidden: "true", "🌐" }
                        span { class: "site-nav__lang-code", "{lang.language()}" }
                    }
                    a {
                        class: "button button--primary site-nav__order",
                        href: config.order_url,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{t.nav.order}"
                    }
                    button {
                        r#type: "button",
                        class: "site-nav__burger",
                        aria_label: "{burger_label}",
                        aria_expanded: "{menu_open()}",
                        onclick: move |_| {
                            let open = menu_open();
                            menu_open.set(!open);
                        },
                        "{burger_icon}"
                    }
                }
            }
        }

        div { class: overlay_class,
            div {
                class: "mobile-menu__backdrop",
                onclick: move |_| menu_open.set(false),
            }
            div { class: "mobile-menu__content",
                for (index, (label, href)) in links.into_iter().enumerate() {
                    a {
                        key: "{href}",
                        class: "mobile-menu__link",
                        style: "--item-index: {index}",
                        href: href,
                        onclick: move |_| menu_open.set(false),
                        "{label}"
                    }
                }
                a {
                    class: "button button--neon mobile-menu__order",
                    href: config.order_url,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{t.nav.order}"
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::i18n::content::{MenuItem, Translations};
use crate::i18n::use_language;

/// A featured dish on the signature carousel.
struct Signature {
    id: &'static str,
    image: &'static str,
    item: &'static MenuItem,
}

fn signatures(t: &'static Translations) -> [Signature; 4] {
    let items = &t.menu.items;
    [
        Signature {
            id: "spicy-miso",
            image: "/images/spicy-miso.jpg",
            item: &items.spicy_miso,
        },
        Signature {
            id: "tonkotsu",
            image: "/images/tonkotsu.jpg",
            item: &items.tonkotsu,
        },
        Signature {
            id: "karaage",
            image: "/images/karaage.jpg",
            item: &items.karaage_rice_spicy,
        },
        Signature {
            id: "gyoza",
            image: "/images/gyoza.jpg",
            item: &items.gyoza_pork,
        },
    ]
}

#[component]
pub fn Menu() -> Element {
    let lang = use_language();
    let mut active = use_signal(|| 0usize);
    let t = lang.translations()?;

    let categories = [
        (t.menu.categories.ramen.as_str(), t.menu.items.ramen()),
        (t.menu.categories.gyoza.as_str(), t.menu.items.gyoza()),
        (t.menu.categories.karaage.as_str(), t.menu.items.karaage()),
    ];

    rsx! {
        section { id: "menu", class: "section menu",
            div { class: "section__inner",
                div { class: "section__header reveal",
                    h2 { class: "section__title", "{t.menu.title}" }
                    p { class: "section__subtitle", "{t.menu.subtitle}" }
                }

                div { class: "menu__cards",
                    for (index, signature) in signatures(t).into_iter().enumerate() {
                        article {
                            key: "{signature.id}",
                            class: if active() == index { "menu-card menu-card--active reveal" } else { "menu-card reveal" },
                            onclick: move |_| active.set(index),
                            div { class: "menu-card__media",
                                img { class: "menu-card__image", src: signature.image, alt: "{signature.item.name}" }
                                if let Some(tag) = signature.item.tag.as_ref() {
                                    span { class: "menu-card__tag", "{tag}" }
                                }
                            }
                            div { class: "menu-card__body",
                                h3 { class: "menu-card__name", "{signature.item.name}" }
                                p { class: "menu-card__description", "{signature.item.description}" }
                                span { class: "menu-card__price", "{signature.item.price}" }
                            }
                        }
                    }
                }

                div { class: "menu__full reveal",
                    h3 { class: "menu__full-title", "{t.menu.full_menu}" }
                    div { class: "menu__categories",
                        for (title, items) in categories {
                            {menu_category(title, items)}
                        }
                    }
                }

                ul { class: "menu__chips reveal",
                    for label in t.menu.categories.labels() {
                        li { key: "{label}", class: "menu-chip", "{label}" }
                    }
                }
            }
        }
    }
}

fn menu_category(title: &str, items: [&MenuItem; 4]) -> Element {
    rsx! {
        div { key: "{title}", class: "menu-category",
            h4 { class: "menu-category__title", "{title}" }
            ul { class: "menu-category__items",
                for item in items {
                    li { key: "{item.name}", class: "menu-category__item",
                        div { class: "menu-category__row",
                            span { class: "menu-category__name", "{item.name}" }
                            span { class: "menu-category__price", "{item.price}" }
                        }
                        p { class: "menu-category__description", "{item.description}" }
                        if let Some(tag) = item.tag.as_ref() {
                            span { class: "menu-category__tag", "{tag}" }
                        }
                    }
                }
            }
        }
    }
}

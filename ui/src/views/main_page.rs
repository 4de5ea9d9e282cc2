use dioxus::prelude::*;
use tracing::debug;

use crate::core::scroll::use_scroll_reveal;
use crate::i18n::use_language;
use crate::sections::{About, Cta, Footer, Hero, Location, Menu, Navigation, Team, Ticker};

/// The single-page site: every section in scroll order.
#[component]
pub fn MainPage() -> Element {
    let lang = use_language();
    use_scroll_reveal();

    debug!("[i18n] MainPage render (lang={})", lang.language());

    rsx! {
        main { class: "page page-main",
            Navigation {}
            Hero {}
            Ticker {}
            About {}
            Menu {}
            Location {}
            Team {}
            Cta {}
            Footer {}
        }
    }
}

//! Sections of the main page, top to bottom, plus shared render helpers.

mod about;
mod cta;
mod footer;
mod hero;
mod location;
mod menu;
mod navigation;
mod team;
mod ticker;

pub use about::About;
pub use cta::Cta;
pub use footer::Footer;
pub use hero::Hero;
pub use location::Location;
pub use menu::Menu;
pub use navigation::Navigation;
pub use team::Team;
pub use ticker::Ticker;

use dioxus::prelude::*;

use crate::core::markup::{emphasis_runs, split_first_word};

/// Brand mark shown in the navbar, hero and footer.
pub(crate) const BRAND: &str = "MESO";

/// Dictionary text with `**emphasis**` markers rendered as `strong` runs.
pub(crate) fn emphasized(text: &str) -> Element {
    let runs = emphasis_runs(text);
    rsx! {
        for run in runs {
            if run.strong {
                strong { "{run.text}" }
            } else {
                "{run.text}"
            }
        }
    }
}

/// Section heading: first word plain, the rest in the accent gradient.
pub(crate) fn split_heading(text: &str) -> Element {
    let (first, rest) = split_first_word(text);
    rsx! {
        span { class: "heading__plain", "{first}" }
        if !rest.is_empty() {
            " "
            span { class: "heading__accent", "{rest}" }
        }
    }
}

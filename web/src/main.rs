use dioxus::prelude::*;
use tracing::info;

use ui::components::page_link::{register_page_links, PageLinks};
use ui::components::SiteRoot;
use ui::config::SiteConfig;
use ui::views::{FranchisePage, MainPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/franchise")]
    Franchise {},
    // Unknown paths show the main page instead of a 404.
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}


fn link_home(class: &str, label: &str) -> Element {
    rsx!(Link { class: class.to_string(), to: Route::Home {}, "{label}" })
}
fn link_franchise(class: &str, label: &str) -> Element {
    rsx!(Link { class: class.to_string(), to: Route::Franchise {}, "{label}" })
}

fn main() {
    dioxus::logger::initialize_default();
    info!("[web] starting v{}", env!("CARGO_PKG_VERSION"));
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_page_links(PageLinks {
        home: link_home,
        franchise: link_franchise,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        SiteRoot { config: SiteConfig::default(),
            Router::<Route> {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { MainPage {} }
}

#[component]
fn Franchise() -> Element {
    rsx! { FranchisePage {} }
}

#[component]
fn Fallback(segments: Vec<String>) -> Element {
    tracing::debug!("[web] unknown path /{}, showing main page", segments.join("/"));
    rsx! { MainPage {} }
}

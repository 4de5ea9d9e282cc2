#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;
use tracing::info;

use ui::components::page_link::{register_page_links, PageLinks};
use ui::components::SiteRoot;
use ui::config::SiteConfig;
use ui::views::{FranchisePage, MainPage};
use ui::THEME_CSS_INLINE;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/franchise")]
    Franchise {},
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::initialize_default();
    let resource_dir = resolve_resource_dir();
    info!("[desktop] media directory {}", resource_dir.display());

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("MESO – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::initialize_default();
    LaunchBuilder::server().launch(App);
}

fn link_home(class: &str, label: &str) -> Element {
    rsx!(Link { class: class.to_string(), to: Route::Home {}, "{label}" })
}
fn link_franchise(class: &str, label: &str) -> Element {
    rsx!(Link { class: class.to_string(), to: Route::Franchise {}, "{label}" })
}

#[component]
fn App() -> Element {
    // Read once; the env var does not change while running.
    let config = use_hook(SiteConfig::from_env);

    register_page_links(PageLinks {
        home: link_home,
        franchise: link_franchise,
    });

    rsx! {
        // The theme is compiled in; desktop builds ship no stylesheet file.
        document::Style { "{THEME_CSS_INLINE}" }

        SiteRoot { config,
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
    info!("[desktop] unknown route /{}", segments.join("/"));
    rsx! { MainPage {} }
}

/// Directory holding `images/` and `videos/` for the webview.
#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/public"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("public")))
            .unwrap_or_else(|| PathBuf::from("public"))
    }
}

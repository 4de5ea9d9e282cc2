use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Pages that have their own route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Franchise,
}

impl Page {
    pub const fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Franchise => "/franchise",
        }
    }
}

/// Platform-supplied link builders.
///
/// `ui` does not know the platforms' `Route` enums, so the web and desktop crates
/// register one builder per page; each receives the CSS class and the localized label
/// and returns a router `Link` wrapping that label.
///
/// Example (in a platform crate):
/// ```ignore
/// fn link_home(class: &str, label: &str) -> Element {
///     rsx!(Link { class: class.to_string(), to: Route::Home {}, "{label}" })
/// }
/// register_page_links(PageLinks { home: link_home, franchise: link_franchise });
/// ```
///
/// Without a registered builder, [`page_link`] falls back to a plain anchor with the
/// page path (full page load), which is also what server-side rendering produces.
pub struct PageLinks {
    pub home: fn(class: &str, label: &str) -> Element,
    pub franchise: fn(class: &str, label: &str) -> Element,
}

static PAGE_LINKS: OnceCell<PageLinks> = OnceCell::new();

/// First registration wins; later calls are ignored.
pub fn register_page_links(links: PageLinks) {
    let _ = PAGE_LINKS.set(links);
}

/// A link to `page` labelled `label`.
pub fn page_link(page: Page, class: &str, label: &str) -> Element {
    match PAGE_LINKS.get() {
        Some(links) => match page {
            Page::Home => (links.home)(class, label),
            Page::Franchise => (links.franchise)(class, label),
        },
        None => rsx! {
            a { class: "{class}", href: page.path(), "{label}" }
        },
    }
}

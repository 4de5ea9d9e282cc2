//! Scroll-driven behaviour: condensed navbar and reveal-on-scroll.
//!
//! The page reports scroll positions through `document::eval`; all decisions are made
//! in Rust. Reveal animations only toggle the `reveal--visible` class, the transitions
//! themselves live in the theme stylesheet.

use dioxus::prelude::*;

/// Scroll offset after which the navbar switches to its condensed style.
pub const NAV_CONDENSE_THRESHOLD_PX: f64 = 100.0;

const SCROLL_LISTENER_JS: &str = r#"
const report = () => dioxus.send(window.scrollY);
window.addEventListener("scroll", report, { passive: true });
report();
await new Promise(() => {});
"#;

const REVEAL_JS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/scripts/reveal.js"
));

pub fn nav_is_condensed(scroll_y: f64) -> bool {
    scroll_y > NAV_CONDENSE_THRESHOLD_PX
}

/// Tracks whether the page is scrolled past [`NAV_CONDENSE_THRESHOLD_PX`].
pub fn use_nav_condensed() -> Signal<bool> {
    let mut condensed = use_signal(|| false);

    use_future(move || async move {
        let mut listener = document::eval(SCROLL_LISTENER_JS);
        while let Ok(scroll_y) = listener.recv::<f64>().await {
            let next = nav_is_condensed(scroll_y);
            if *condensed.peek() != next {
                condensed.set(next);
            }
        }
    });

    condensed
}

/// Install the reveal observer once the calling view is mounted.
pub fn use_scroll_reveal() {
    use_effect(|| {
        let _ = document::eval(REVEAL_JS);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condenses_only_past_the_threshold() {
        assert!(!nav_is_condensed(0.0));
        assert!(!nav_is_condensed(NAV_CONDENSE_THRESHOLD_PX));
        assert!(nav_is_condensed(NAV_CONDENSE_THRESHOLD_PX + 1.0));
    }

    #[test]
    fn reveal_script_targets_reveal_blocks() {
        assert!(REVEAL_JS.contains(".reveal"));
        assert!(REVEAL_JS.contains("reveal--visible"));
    }
}

//! Floating sparkles behind the page. Purely decorative.

use dioxus::prelude::*;
use greeting_deck::PageState;

#[component]
pub fn SparkleBackdrop(state: Signal<PageState>) -> Element {
    // Scattered once at mount; peeking keeps scroll ticks from re-rendering
    // the field.
    let styles: Vec<String> = state.peek().sparkles.iter().map(|s| s.style()).collect();

    rsx! {
        div {
            class: "sparkle-backdrop",
            for (i, style) in styles.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "sparkle",
                    style: "{style}",
                    "\u{2728}"
                }
            }
        }
    }
}

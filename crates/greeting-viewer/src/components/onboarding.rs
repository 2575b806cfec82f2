//! One-shot prompt telling the visitor the cards play music.

use dioxus::prelude::*;
use greeting_deck::{OverlayState, PageState};

#[component]
pub fn OnboardingPrompt(state: Signal<PageState>) -> Element {
    if !state.read().overlay.is_visible() {
        return rsx! {};
    }
    let message = OverlayState::MESSAGE;

    rsx! {
        div {
            class: "onboarding-overlay",
            div {
                class: "onboarding-dialog",
                p { class: "onboarding-text", "{message}" }
                div {
                    class: "onboarding-actions",
                    button {
                        class: "onboarding-ok",
                        onclick: move |_| {
                            state.write().dismiss_overlay();
                        },
                        "OK"
                    }
                }
            }
        }
    }
}

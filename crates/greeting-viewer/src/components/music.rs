//! The looping audio element and the music badge.

use dioxus::prelude::*;

use crate::player::AUDIO_ELEMENT_ID;

/// Native audio controls. The source is bound by the player script on mount
/// and on every card click.
#[component]
pub fn MusicPlayer() -> Element {
    rsx! {
        audio {
            id: AUDIO_ELEMENT_ID,
            class: "music-player",
            r#loop: true,
            controls: true,
        }
    }
}

#[component]
pub fn MusicBadge() -> Element {
    rsx! {
        div {
            class: "music-badge",
            "\u{1f3b5}"
        }
    }
}

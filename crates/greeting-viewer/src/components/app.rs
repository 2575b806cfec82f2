//! Root component of the greeting page.

use std::path::PathBuf;

use dioxus::prelude::*;
use greeting_deck::{
    load_image, Deck, LoadState, PageState, PageTimer, PlayRequest, PlaybackOutcome, ViewerConfig,
};

use crate::player;
use crate::timers::{PageTimers, SharedTimers};

use super::{CardStrip, MusicBadge, MusicPlayer, OnboardingPrompt, SparkleBackdrop};

/// Hands `request` to the player and records what it reported.
///
/// Requests may settle in any order. One replaced by a newer request while
/// its track was loading never reaches the audio element.
pub fn start_playback(mut state: Signal<PageState>, request: PlayRequest, asset_dir: PathBuf) {
    spawn(async move {
        let outcome = match player::load_track(&request, &asset_dir).await {
            Ok(src) if state.peek().audio.is_current(request.generation) => {
                player::play(&request, src).await
            }
            Ok(_) => PlaybackOutcome::Superseded,
            Err(reason) => PlaybackOutcome::Failed(reason),
        };
        tracing::debug!(
            track = request.track.path,
            generation = request.generation,
            ?outcome,
            "Playback request settled"
        );
        state.write().audio.record(&request, &outcome);
    });
}

/// Root application component.
#[component]
pub fn App(config: ViewerConfig) -> Element {
    let mut state = use_signal(|| PageState::mount(Deck::birthday(), &mut rand::rng()));

    let image_dir = config.asset_dir.clone();
    let images = use_signal(move || {
        state
            .peek()
            .deck
            .cards()
            .iter()
            .map(|card| load_image(&image_dir, card.image))
            .collect::<Vec<LoadState>>()
    });

    let timers: SharedTimers = use_context_provider(PageTimers::shared);

    // Start the mount timers once.
    use_hook({
        let timers = timers.clone();
        move || {
            let mut guard = timers.borrow_mut();
            for timer in PageTimer::ON_MOUNT {
                guard.start(timer, state);
            }
        }
    });

    // Bind the default track, starting it when autoplay is on.
    let autoplay = config.autoplay;
    let audio_dir = config.asset_dir.clone();
    use_effect(move || {
        let request = if autoplay {
            state.write().autoplay()
        } else {
            state.write().preload()
        };
        if let Some(request) = request {
            start_playback(state, request, audio_dir.clone());
        }
    });

    // Release every timer on unmount.
    use_drop({
        let timers = timers.clone();
        move || {
            tracing::info!("Tearing down greeting page");
            timers.borrow_mut().stop_all();
        }
    });

    rsx! {
        div {
            class: "greeting-page",

            SparkleBackdrop { state }

            MusicPlayer {}
            MusicBadge {}

            main {
                class: "greeting-main",

                OnboardingPrompt { state }

                h1 {
                    class: "greeting-title",
                    "{config.title}"
                }

                CardStrip {
                    state,
                    images,
                    asset_dir: config.asset_dir.clone(),
                }
            }
        }
    }
}

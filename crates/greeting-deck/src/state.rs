//! View state of a mounted greeting page.

use rand::Rng;

use crate::audio::{AudioController, PlayRequest};
use crate::carousel::{Carousel, RenderedCard, ScrollDirection};
use crate::deck::Deck;
use crate::overlay::OverlayState;
use crate::rotator::HighlightRotator;
use crate::sparkles::{self, Sparkle};
use crate::timers::{PageTimer, TimerCommand};

/// Everything the page mutates while it is mounted.
#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub deck: Deck,
    pub carousel: Carousel,
    pub highlight: HighlightRotator,
    pub overlay: OverlayState,
    pub audio: AudioController,
    pub sparkles: Vec<Sparkle>,
}

impl PageState {
    /// Fresh state for a new mount. Sparkles are scattered once here.
    pub fn mount<R: Rng>(deck: Deck, rng: &mut R) -> Self {
        let len = deck.len();
        Self {
            carousel: Carousel::new(len),
            highlight: HighlightRotator::new(len),
            overlay: OverlayState::default(),
            audio: AudioController::new(&deck),
            sparkles: sparkles::scatter(rng),
            deck,
        }
    }

    /// Applies one firing of `timer`. Returns whether anything visible changed.
    pub fn apply(&mut self, timer: PageTimer) -> bool {
        match timer {
            PageTimer::OverlayReveal => {
                let changed = self.overlay.reveal();
                if changed {
                    tracing::debug!("Onboarding prompt shown");
                }
                changed
            }
            PageTimer::HighlightRotation => {
                let index = self.highlight.advance();
                tracing::trace!(index, "Highlight advanced");
                false
            }
            PageTimer::AutoScroll => self.carousel.auto_scroll_tick(),
            PageTimer::GlideFrame => {
                let gliding = self.carousel.is_gliding();
                self.carousel.advance_glides(timer.period_ms());
                gliding
            }
        }
    }

    /// Whether `timer` should keep firing after its latest firing.
    pub fn keeps_running(&self, timer: PageTimer) -> bool {
        match timer {
            PageTimer::GlideFrame => self.carousel.is_gliding(),
            other => other.is_repeating(),
        }
    }

    /// Takes a fresh reading of the carousel's visible width. `None` keeps
    /// the previous width.
    pub fn measure_viewport(&mut self, width: Option<f64>) {
        let Some(width) = width else {
            return;
        };
        if width != self.carousel.viewport_width() {
            tracing::debug!(width, "Carousel viewport resized");
            self.carousel.set_viewport_width(width);
        }
    }

    /// Mount-time playback attempt.
    pub fn autoplay(&mut self) -> Option<PlayRequest> {
        self.audio.autoplay(&self.deck)
    }

    /// Mount-time binding of the default track when autoplay is off.
    pub fn preload(&mut self) -> Option<PlayRequest> {
        self.audio.preload(&self.deck)
    }

    /// Handles a click on the card at `flat_index` in the tripled strip.
    pub fn click_card(&mut self, flat_index: usize) -> Option<PlayRequest> {
        if self.deck.is_empty() {
            return None;
        }
        let card = RenderedCard::from_flat(flat_index, self.deck.len());
        let request = self.audio.activate(&self.deck, card.index)?;
        tracing::info!(
            flat_index,
            card = card.index,
            track = request.track.path,
            "Card selected"
        );
        Some(request)
    }

    pub fn dismiss_overlay(&mut self) -> bool {
        let changed = self.overlay.dismiss();
        if changed {
            tracing::debug!("Onboarding prompt dismissed");
        }
        changed
    }

    /// Pointer entering or leaving the carousel. Entering stops the
    /// auto-scroll timer; leaving restarts it with a fresh phase.
    pub fn set_hovering(&mut self, hovering: bool) -> Option<TimerCommand> {
        if self.carousel.is_hovering() == hovering {
            return None;
        }
        self.carousel.set_hovering(hovering);
        Some(if hovering {
            TimerCommand::Stop(PageTimer::AutoScroll)
        } else {
            TimerCommand::Start(PageTimer::AutoScroll)
        })
    }

    /// Starts a manual glide. The glide-frame timer is requested only when
    /// no glide was already in flight.
    pub fn scroll(&mut self, direction: ScrollDirection) -> Option<TimerCommand> {
        let was_gliding = self.carousel.is_gliding();
        self.carousel.scroll(direction);
        (!was_gliding).then_some(TimerCommand::Start(PageTimer::GlideFrame))
    }
}

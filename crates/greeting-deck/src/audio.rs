//! The single audio binding shared by the page.
//!
//! The controller only decides which track is bound and records what the
//! player reported back; actually loading and starting playback is done by
//! the viewer.

use crate::deck::{Deck, Track, TrackId};

/// What asked for the player to change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayTrigger {
    /// Mount-time binding of the default track when autoplay is off.
    Preload,
    /// Attempt made on mount, without a user gesture.
    Autoplay,
    /// A card was clicked.
    CardClick,
}

impl PlayTrigger {
    pub fn starts_playback(&self) -> bool {
        !matches!(self, Self::Preload)
    }
}

/// A request to load `track` into the player and, unless preloading, start it.
///
/// `generation` grows with every request; the player ignores a request once
/// a newer one has been issued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayRequest {
    pub track: Track,
    pub trigger: PlayTrigger,
    pub generation: u64,
}

/// Result reported by the player for a play request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// The source was bound without starting playback.
    Bound,
    Started,
    /// The platform refused to start without a user gesture.
    Blocked(String),
    Failed(String),
    /// A newer request replaced this one before it settled.
    Superseded,
}

impl PlaybackOutcome {
    /// Parses the report string produced by the player script:
    /// `bound`, `started`, `superseded`, `blocked:<reason>` or
    /// `failed:<reason>`.
    pub fn from_report(report: &str) -> Self {
        match report.split_once(':') {
            None if report == "bound" => Self::Bound,
            None if report == "started" => Self::Started,
            None if report == "superseded" => Self::Superseded,
            Some(("blocked", reason)) => Self::Blocked(reason.to_string()),
            Some(("failed", reason)) => Self::Failed(reason.to_string()),
            _ => Self::Failed(report.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    Requested,
    Playing,
    Blocked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioController {
    bound: Option<TrackId>,
    state: PlaybackState,
    generation: u64,
}

impl AudioController {
    /// Binds the deck's default track without starting it.
    pub fn new(deck: &Deck) -> Self {
        Self {
            bound: deck.default_track().map(|t| t.id),
            state: PlaybackState::Idle,
            generation: 0,
        }
    }

    pub fn bound_track(&self) -> Option<TrackId> {
        self.bound
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether `generation` belongs to the most recent request.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Hands the bound track to the player without starting it.
    pub fn preload(&mut self, deck: &Deck) -> Option<PlayRequest> {
        let track = self.bound.and_then(|id| deck.track(id))?.clone();
        Some(self.issue(track, PlayTrigger::Preload))
    }

    /// Mount-time attempt on whatever track is bound.
    pub fn autoplay(&mut self, deck: &Deck) -> Option<PlayRequest> {
        let track = self.bound.and_then(|id| deck.track(id))?.clone();
        self.state = PlaybackState::Requested;
        Some(self.issue(track, PlayTrigger::Autoplay))
    }

    /// Binds the track of card `index` and asks for it to start.
    pub fn activate(&mut self, deck: &Deck, index: usize) -> Option<PlayRequest> {
        let track = deck.track_for_card(index)?.clone();
        self.bound = Some(track.id);
        self.state = PlaybackState::Requested;
        Some(self.issue(track, PlayTrigger::CardClick))
    }

    fn issue(&mut self, track: Track, trigger: PlayTrigger) -> PlayRequest {
        self.generation += 1;
        PlayRequest {
            track,
            trigger,
            generation: self.generation,
        }
    }

    /// Applies what the player reported for `request`. Outcomes of requests
    /// that have since been replaced are dropped. Returns whether the outcome
    /// was applied.
    pub fn record(&mut self, request: &PlayRequest, outcome: &PlaybackOutcome) -> bool {
        let trigger = request.trigger;
        if !self.is_current(request.generation) || *outcome == PlaybackOutcome::Superseded {
            tracing::debug!(
                ?trigger,
                generation = request.generation,
                latest = self.generation,
                "Dropping outcome of replaced play request"
            );
            return false;
        }
        match outcome {
            PlaybackOutcome::Bound => self.state = PlaybackState::Idle,
            PlaybackOutcome::Started => self.state = PlaybackState::Playing,
            PlaybackOutcome::Blocked(reason) => {
                tracing::info!(?trigger, %reason, "Audio autoplay blocked");
                self.state = PlaybackState::Blocked;
            }
            PlaybackOutcome::Failed(reason) => {
                tracing::warn!(?trigger, %reason, "Audio playback failed");
                self.state = PlaybackState::Idle;
            }
            PlaybackOutcome::Superseded => {}
        }
        true
    }
}

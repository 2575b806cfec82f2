//! Headless page driver on a virtual clock.
//!
//! `PageSession` owns a `PageState` plus the schedule of its timers and
//! replays them in time order, so page behavior over seconds of wall time can
//! be checked instantly.

use rand::Rng;

use crate::audio::PlayRequest;
use crate::carousel::ScrollDirection;
use crate::deck::Deck;
use crate::state::PageState;
use crate::timers::{PageTimer, Schedule};

#[derive(Clone, Debug)]
pub struct PageSession {
    state: PageState,
    schedule: Schedule,
    now_ms: u64,
    requests: Vec<PlayRequest>,
    viewport_width: f64,
    mounted: bool,
}

impl PageSession {
    /// Mounts the page: starts the mount timers and either attempts autoplay
    /// or preloads the default track.
    pub fn mount<R: Rng>(deck: Deck, viewport_width: f64, autoplay: bool, rng: &mut R) -> Self {
        let mut state = PageState::mount(deck, rng);
        state.carousel.set_viewport_width(viewport_width);

        let mut schedule = Schedule::new();
        for timer in PageTimer::ON_MOUNT {
            schedule.start(timer, 0);
        }

        let request = if autoplay {
            state.autoplay()
        } else {
            state.preload()
        };

        Self {
            state,
            schedule,
            now_ms: 0,
            requests: request.into_iter().collect(),
            viewport_width,
            mounted: true,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_timer_active(&self, timer: PageTimer) -> bool {
        self.schedule.is_active(timer)
    }

    /// Play requests issued so far, oldest first.
    pub fn play_requests(&self) -> &[PlayRequest] {
        &self.requests
    }

    /// Runs every timer due within the next `ms` milliseconds.
    pub fn advance(&mut self, ms: u64) {
        let target = self.now_ms + ms;
        while let Some((due_ms, timer)) = self.schedule.pop_due(target) {
            self.now_ms = due_ms;
            if timer.measures_viewport() {
                self.state.measure_viewport(Some(self.viewport_width));
            }
            self.state.apply(timer);
            if !self.state.keeps_running(timer) {
                self.schedule.cancel(timer);
            }
        }
        self.now_ms = target;
    }

    pub fn click_card(&mut self, flat_index: usize) {
        if !self.mounted {
            return;
        }
        if let Some(request) = self.state.click_card(flat_index) {
            self.requests.push(request);
        }
    }

    pub fn dismiss_overlay(&mut self) {
        if !self.mounted {
            return;
        }
        self.state.dismiss_overlay();
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        if !self.mounted {
            return;
        }
        if let Some(command) = self.state.set_hovering(hovering) {
            self.schedule.run(command, self.now_ms);
        }
    }

    pub fn scroll(&mut self, direction: ScrollDirection) {
        if !self.mounted {
            return;
        }
        if let Some(command) = self.state.scroll(direction) {
            self.schedule.run(command, self.now_ms);
        }
    }

    /// Changes the carousel's real visible width. The page picks it up on the
    /// next auto-scroll tick.
    pub fn resize(&mut self, viewport_width: f64) {
        self.viewport_width = viewport_width;
    }

    /// Tears the page down. Every pending timer is released.
    pub fn unmount(&mut self) {
        self.schedule.cancel_all();
        self.mounted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{PlayTrigger, PlaybackState};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> PageSession {
        PageSession::mount(Deck::birthday(), 1280.0, true, &mut StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_mount_starts_timers_and_autoplay() {
        let s = session();
        for timer in PageTimer::ON_MOUNT {
            assert!(s.is_timer_active(timer));
        }
        assert!(!s.is_timer_active(PageTimer::GlideFrame));
        assert_eq!(s.play_requests().len(), 1);
    }

    #[test]
    fn test_without_autoplay_default_track_is_preloaded() {
        let s = PageSession::mount(Deck::birthday(), 1280.0, false, &mut StdRng::seed_from_u64(3));
        let requests = s.play_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].trigger, PlayTrigger::Preload);
        assert_eq!(requests[0].track.path, "happybirthday1.mp3");
        assert_eq!(s.state().audio.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_glide_timer_stops_when_idle() {
        let mut s = session();
        s.set_hovering(true);
        s.scroll(ScrollDirection::Right);
        assert!(s.is_timer_active(PageTimer::GlideFrame));

        s.advance(1000);
        assert!(!s.is_timer_active(PageTimer::GlideFrame));
        assert!((s.state().carousel.offset() - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_unmount_releases_timers() {
        let mut s = session();
        s.scroll(ScrollDirection::Right);
        s.unmount();
        for timer in PageTimer::ON_MOUNT {
            assert!(!s.is_timer_active(timer));
        }
        assert!(!s.is_timer_active(PageTimer::GlideFrame));

        let before = s.state().clone();
        s.advance(10_000);
        assert_eq!(s.state(), &before);
    }

    #[test]
    fn test_dismiss_after_unmount_is_ignored() {
        let mut s = session();
        s.advance(1000);
        s.unmount();
        s.dismiss_overlay();
        assert!(s.state().overlay.is_visible());
    }
}

//! Timers driving the page and a virtual-clock schedule for them.

use std::time::Duration;

/// Every timer the page runs while mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageTimer {
    /// Shows the onboarding prompt once.
    OverlayReveal,
    /// Advances the highlight index.
    HighlightRotation,
    /// Nudges the carousel while the pointer is elsewhere.
    AutoScroll,
    /// Animates in-flight glides.
    GlideFrame,
}

impl PageTimer {
    /// Timers started on mount, in start order.
    pub const ON_MOUNT: [PageTimer; 3] = [
        PageTimer::HighlightRotation,
        PageTimer::OverlayReveal,
        PageTimer::AutoScroll,
    ];

    pub fn period_ms(&self) -> u64 {
        match self {
            Self::OverlayReveal => 1000,
            Self::HighlightRotation => 3000,
            Self::AutoScroll => 30,
            Self::GlideFrame => 16,
        }
    }

    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms())
    }

    pub fn is_repeating(&self) -> bool {
        !matches!(self, Self::OverlayReveal)
    }

    /// Whether the carousel's visible width is read before each firing.
    pub fn measures_viewport(&self) -> bool {
        matches!(self, Self::AutoScroll)
    }
}

/// A change to the set of running timers requested by a page input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerCommand {
    /// Start the timer, restarting its phase if it is already running.
    Start(PageTimer),
    Stop(PageTimer),
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry {
    timer: PageTimer,
    due_ms: u64,
}

/// Pending timers on a millisecond clock.
///
/// Each timer is registered at most once; starting it again restarts its
/// phase, like clearing and re-creating an interval.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    entries: Vec<Entry>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, timer: PageTimer, now_ms: u64) {
        self.cancel(timer);
        self.entries.push(Entry {
            timer,
            due_ms: now_ms + timer.period_ms(),
        });
    }

    pub fn cancel(&mut self, timer: PageTimer) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.timer != timer);
        self.entries.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_active(&self, timer: PageTimer) -> bool {
        self.entries.iter().any(|e| e.timer == timer)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn run(&mut self, command: TimerCommand, now_ms: u64) {
        match command {
            TimerCommand::Start(timer) => self.start(timer, now_ms),
            TimerCommand::Stop(timer) => {
                self.cancel(timer);
            }
        }
    }

    /// Earliest pending firing. Ties are broken by queue order.
    pub fn next_due(&self) -> Option<(u64, PageTimer)> {
        self.entries
            .iter()
            .min_by_key(|e| e.due_ms)
            .map(|e| (e.due_ms, e.timer))
    }

    /// Takes the earliest firing due at or before `now_ms`, rescheduling
    /// repeating timers and dropping one-shots.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(u64, PageTimer)> {
        let (due_ms, timer) = self.next_due()?;
        if due_ms > now_ms {
            return None;
        }
        let pos = self.entries.iter().position(|e| e.timer == timer)?;
        if timer.is_repeating() {
            let entry = self.entries.remove(pos);
            self.entries.push(Entry {
                timer,
                due_ms: entry.due_ms + timer.period_ms(),
            });
        } else {
            self.entries.remove(pos);
        }
        Some((due_ms, timer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(schedule: &mut Schedule, now_ms: u64) -> Vec<(u64, PageTimer)> {
        std::iter::from_fn(|| schedule.pop_due(now_ms)).collect()
    }

    #[test]
    fn test_one_shot_fires_once() {
        let mut schedule = Schedule::new();
        schedule.start(PageTimer::OverlayReveal, 0);

        assert!(drain(&mut schedule, 999).is_empty());
        assert_eq!(drain(&mut schedule, 5000), vec![(1000, PageTimer::OverlayReveal)]);
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_interval_repeats() {
        let mut schedule = Schedule::new();
        schedule.start(PageTimer::HighlightRotation, 0);

        let fired = drain(&mut schedule, 9000);
        assert_eq!(fired.len(), 3);
        assert_eq!(fired.last(), Some(&(9000, PageTimer::HighlightRotation)));
        assert!(schedule.is_active(PageTimer::HighlightRotation));
    }

    #[test]
    fn test_restart_resets_phase() {
        let mut schedule = Schedule::new();
        schedule.start(PageTimer::AutoScroll, 0);
        schedule.start(PageTimer::AutoScroll, 20);
        assert_eq!(schedule.next_due(), Some((50, PageTimer::AutoScroll)));
    }

    #[test]
    fn test_firings_come_in_time_order() {
        let mut schedule = Schedule::new();
        for timer in PageTimer::ON_MOUNT {
            schedule.start(timer, 0);
        }

        let fired = drain(&mut schedule, 1000);
        assert!(fired.windows(2).all(|w| w[0].0 <= w[1].0));
        assert_eq!(fired.iter().filter(|(_, t)| *t == PageTimer::AutoScroll).count(), 33);
        assert_eq!(fired.last(), Some(&(1000, PageTimer::OverlayReveal)));
    }

    #[test]
    fn test_commands_start_and_stop() {
        let mut schedule = Schedule::new();
        schedule.run(TimerCommand::Start(PageTimer::GlideFrame), 100);
        assert_eq!(schedule.next_due(), Some((116, PageTimer::GlideFrame)));

        schedule.run(TimerCommand::Stop(PageTimer::GlideFrame), 110);
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_cancel_all() {
        let mut schedule = Schedule::new();
        for timer in PageTimer::ON_MOUNT {
            schedule.start(timer, 0);
        }
        schedule.cancel_all();
        assert!(drain(&mut schedule, 100_000).is_empty());
    }
}

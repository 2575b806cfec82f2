//! Page timers as owned tasks.
//!
//! Every timer runs as a Dioxus task whose handle is held in `PageTimers`.
//! The root component releases all of them when it unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;
use greeting_deck::{PageState, PageTimer, TimerCommand};
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};

use crate::player;

/// Handles of the running timer tasks, at most one per timer.
#[derive(Default)]
pub struct PageTimers {
    tasks: Vec<(PageTimer, Task)>,
}

/// Shared handle used by event handlers and the drop hook.
pub type SharedTimers = Rc<RefCell<PageTimers>>;

impl PageTimers {
    pub fn shared() -> SharedTimers {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Starts `timer`, replacing a previous task for it.
    pub fn start(&mut self, timer: PageTimer, state: Signal<PageState>) {
        self.stop(timer);
        let task = spawn_timer(timer, state);
        self.tasks.push((timer, task));
    }

    /// Carries out a timer change requested by the page state.
    pub fn run(&mut self, command: TimerCommand, state: Signal<PageState>) {
        match command {
            TimerCommand::Start(timer) => self.start(timer, state),
            TimerCommand::Stop(timer) => self.stop(timer),
        }
    }

    pub fn stop(&mut self, timer: PageTimer) {
        self.tasks.retain(|(t, task)| {
            if *t == timer {
                task.cancel();
                false
            } else {
                true
            }
        });
    }

    pub fn stop_all(&mut self) {
        for (timer, task) in self.tasks.drain(..) {
            tracing::debug!(?timer, "Stopping timer");
            task.cancel();
        }
    }
}

fn spawn_timer(timer: PageTimer, mut state: Signal<PageState>) -> Task {
    spawn(async move {
        if !timer.is_repeating() {
            sleep(timer.period()).await;
            state.write().apply(timer);
            return;
        }

        let mut ticker = interval_at(Instant::now() + timer.period(), timer.period());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            // The window may have been resized since the last tick.
            if timer.measures_viewport() {
                let width = player::measure_viewport().await;
                state.write().measure_viewport(width);
            }
            state.write().apply(timer);
            if !state.peek().keeps_running(timer) {
                break;
            }
        }
    })
}

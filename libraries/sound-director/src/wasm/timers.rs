//! `setInterval`/`setTimeout` scheduler

use crate::scheduler::{Scheduler, TaskHandle};
use gloo_timers::callback::{Interval, Timeout};
use std::time::Duration;

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// Scheduler backed by the global browser timers
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

/// A registered interval; dropping the inner `Interval` clears it
pub struct IntervalHandle(Option<Interval>);

impl TaskHandle for IntervalHandle {
    fn cancel(&mut self) {
        self.0.take();
    }

    fn is_cancelled(&self) -> bool {
        self.0.is_none()
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = IntervalHandle;

    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> IntervalHandle {
        IntervalHandle(Some(Interval::new(millis(period), task)))
    }

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        // Forgotten timeouts still fire and free their callback afterwards
        let _ = Timeout::new(millis(delay), task).forget();
    }
}

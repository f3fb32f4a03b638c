//! Timer scheduling
//!
//! The poller and the delayed submit-clear run through [`Scheduler`] so the
//! same wiring drives browser timers and a virtual clock.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Handle to a repeating task
pub trait TaskHandle {
    /// Stop the task; further ticks never run
    fn cancel(&mut self);

    /// Whether `cancel` has been called
    fn is_cancelled(&self) -> bool;
}

/// Single-threaded timer host
pub trait Scheduler {
    /// Handle type for repeating tasks
    type Handle: TaskHandle;

    /// Run `task` every `period` until the handle is cancelled
    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> Self::Handle;

    /// Run `task` once after `delay`
    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

enum Job {
    Once(Box<dyn FnOnce()>),
    Repeating {
        period: Duration,
        task: Box<dyn FnMut()>,
    },
}

struct Scheduled {
    due: Duration,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    job: Job,
}

#[derive(Default)]
struct Timeline {
    now: Duration,
    next_seq: u64,
    tasks: Vec<Scheduled>,
}

impl Timeline {
    fn push(&mut self, due: Duration, cancelled: Rc<Cell<bool>>, job: Job) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.push(Scheduled {
            due,
            seq,
            cancelled,
            job,
        });
    }

    /// Remove the earliest live task due at or before `until`
    fn pop_due(&mut self, until: Duration) -> Option<Scheduled> {
        self.tasks.retain(|task| !task.cancelled.get());

        let index = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due <= until)
            .min_by_key(|(_, task)| (task.due, task.seq))
            .map(|(index, _)| index)?;

        Some(self.tasks.swap_remove(index))
    }
}

/// Deterministic virtual-time scheduler
///
/// Nothing runs until [`advance`](Self::advance) is called. Tasks fire in
/// due-time order, ties broken by scheduling order, and tasks may schedule
/// further tasks while running. Clones share one timeline.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    timeline: Rc<RefCell<Timeline>>,
}

/// Handle returned by [`ManualScheduler::every`]
#[derive(Debug, Clone)]
pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TaskHandle for ManualHandle {
    fn cancel(&mut self) {
        self.cancelled.set(true);
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

impl ManualScheduler {
    /// Create a scheduler at virtual time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.timeline.borrow().now
    }

    /// Number of live scheduled tasks
    pub fn pending(&self) -> usize {
        self.timeline
            .borrow()
            .tasks
            .iter()
            .filter(|task| !task.cancelled.get())
            .count()
    }

    /// Move virtual time forward by `by`, running everything that falls due
    ///
    /// Returns the number of task runs.
    pub fn advance(&self, by: Duration) -> usize {
        let until = self.now() + by;
        let mut runs = 0;

        loop {
            // The borrow must end before the task runs; tasks reschedule
            let next = self.timeline.borrow_mut().pop_due(until);
            let Some(scheduled) = next else { break };

            self.timeline.borrow_mut().now = scheduled.due;
            runs += 1;

            match scheduled.job {
                Job::Once(task) => task(),
                Job::Repeating { period, mut task } => {
                    task();
                    if !scheduled.cancelled.get() {
                        self.timeline.borrow_mut().push(
                            scheduled.due + period,
                            scheduled.cancelled,
                            Job::Repeating { period, task },
                        );
                    }
                }
            }
        }

        self.timeline.borrow_mut().now = until;
        runs
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn every(&self, period: Duration, task: Box<dyn FnMut()>) -> ManualHandle {
        // A zero period would never let virtual time move past `now`
        let period = period.max(Duration::from_millis(1));
        let cancelled = Rc::new(Cell::new(false));

        let mut timeline = self.timeline.borrow_mut();
        let due = timeline.now + period;
        timeline.push(due, Rc::clone(&cancelled), Job::Repeating { period, task });

        ManualHandle { cancelled }
    }

    fn after(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let mut timeline = self.timeline.borrow_mut();
        let due = timeline.now + delay;
        timeline.push(due, Rc::new(Cell::new(false)), Job::Once(task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> (Rc<Cell<usize>>, Box<dyn FnMut()>) {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        (count, Box::new(move || inner.set(inner.get() + 1)))
    }

    #[test]
    fn repeating_task_fires_each_period() {
        let scheduler = ManualScheduler::new();
        let (count, task) = counter();
        let _handle = scheduler.every(Duration::from_millis(200), task);

        scheduler.advance(Duration::from_millis(199));
        assert_eq!(count.get(), 0);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(count.get(), 1);

        scheduler.advance(Duration::from_millis(1000));
        assert_eq!(count.get(), 6);
        assert_eq!(scheduler.now(), Duration::from_millis(1200));
    }

    #[test]
    fn cancel_stops_repeating_task() {
        let scheduler = ManualScheduler::new();
        let (count, task) = counter();
        let mut handle = scheduler.every(Duration::from_millis(100), task);

        scheduler.advance(Duration::from_millis(250));
        assert_eq!(count.get(), 2);

        handle.cancel();
        assert!(handle.is_cancelled());
        scheduler.advance(Duration::from_millis(1000));
        assert_eq!(count.get(), 2);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn once_task_fires_once_at_delay() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let inner = Rc::clone(&fired);
        scheduler.after(Duration::from_millis(50), Box::new(move || inner.set(true)));

        scheduler.advance(Duration::from_millis(49));
        assert!(!fired.get());
        scheduler.advance(Duration::from_millis(1));
        assert!(fired.get());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn tasks_run_in_due_order() {
        let scheduler = ManualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for (delay, label) in [(30, "c"), (10, "a"), (20, "b"), (10, "a2")] {
            let order = Rc::clone(&order);
            scheduler.after(
                Duration::from_millis(delay),
                Box::new(move || order.borrow_mut().push(label)),
            );
        }

        assert_eq!(scheduler.advance(Duration::from_millis(100)), 4);
        assert_eq!(*order.borrow(), vec!["a", "a2", "b", "c"]);
    }

    #[test]
    fn task_can_schedule_more_work() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));

        let inner_scheduler = scheduler.clone();
        let inner_fired = Rc::clone(&fired);
        scheduler.after(
            Duration::from_millis(10),
            Box::new(move || {
                let fired = Rc::clone(&inner_fired);
                inner_scheduler.after(Duration::from_millis(10), Box::new(move || fired.set(true)));
            }),
        );

        scheduler.advance(Duration::from_millis(15));
        assert!(!fired.get());
        scheduler.advance(Duration::from_millis(5));
        assert!(fired.get());
    }
}

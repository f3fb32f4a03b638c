//! Session wiring: event handlers plus the directive poller
//!
//! A session shares one director between the page event handlers and the
//! recurring poll task. Everything runs on the host's single event loop, so
//! sharing is `Rc<RefCell<_>>`.

use crate::{
    audio::AudioFactory,
    director::SoundDirector,
    platform::{ClickTarget, DirectiveFeed, EventSource, SubmittedForm, TextInput},
    scheduler::{Scheduler, TaskHandle},
};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};

/// Director shared between handlers and timers
pub type SharedDirector<F> = Rc<RefCell<SoundDirector<F>>>;

/// A running sound director
///
/// Stopping (or dropping) the session cancels the poller and unregisters
/// the event handlers. The director, with its cache and played set, lives on
/// in any other `Rc` clones.
pub struct Session<F: AudioFactory, E: EventSource, S: Scheduler> {
    director: SharedDirector<F>,
    events: E,
    poller: Option<S::Handle>,
}

impl<F, E, S> Session<F, E, S>
where
    F: AudioFactory + 'static,
    E: EventSource,
    S: Scheduler + Clone + 'static,
{
    /// Register handlers on `events` and start polling `feed`
    pub fn start<D>(director: SharedDirector<F>, mut events: E, feed: D, scheduler: &S) -> Self
    where
        D: DirectiveFeed + 'static,
    {
        let (poll_interval, clear_delay) = {
            let director = director.borrow();
            (
                director.config().poll_interval(),
                director.config().clear_delay(),
            )
        };

        {
            let director = Rc::clone(&director);
            events.on_click(Box::new(move |target: &mut dyn ClickTarget| {
                if let Ok(mut director) = director.try_borrow_mut() {
                    director.handle_click(target);
                }
            }));
        }

        {
            let director = Rc::clone(&director);
            events.on_input(Box::new(move |input: &mut dyn TextInput| {
                if let Ok(mut director) = director.try_borrow_mut() {
                    director.handle_input(input);
                }
            }));
        }

        {
            let director = Rc::clone(&director);
            let timers = scheduler.clone();
            events.on_submit(Box::new(move |mut form: Box<dyn SubmittedForm>| {
                let director = Rc::clone(&director);
                // Let the submission read the values before they are cleared
                timers.after(
                    clear_delay,
                    Box::new(move || {
                        if let Ok(director) = director.try_borrow() {
                            director.clear_submitted(form.as_mut());
                        } else {
                            debug!("Director busy, skipping submit clear");
                        }
                    }),
                );
            }));
        }

        let poller = {
            let director = Rc::clone(&director);
            scheduler.every(
                poll_interval,
                Box::new(move || {
                    if let Ok(mut director) = director.try_borrow_mut() {
                        director.poll(&feed);
                    } else {
                        debug!("Director busy, skipping poll");
                    }
                }),
            )
        };

        info!(
            poll_interval_ms = poll_interval.as_millis() as u64,
            "Sound director started"
        );

        Self {
            director,
            events,
            poller: Some(poller),
        }
    }
}

impl<F: AudioFactory, E: EventSource, S: Scheduler> Session<F, E, S> {
    /// Shared director
    pub fn director(&self) -> &SharedDirector<F> {
        &self.director
    }

    /// Whether the poller is still scheduled
    pub fn is_running(&self) -> bool {
        self.poller
            .as_ref()
            .is_some_and(|poller| !poller.is_cancelled())
    }

    /// Cancel the poller and unregister event handlers (idempotent)
    pub fn stop(&mut self) {
        if let Some(mut poller) = self.poller.take() {
            poller.cancel();
            self.events.clear();
            info!("Sound director stopped");
        }
    }
}

impl<F: AudioFactory, E: EventSource, S: Scheduler> Drop for Session<F, E, S> {
    fn drop(&mut self) {
        self.stop();
    }
}

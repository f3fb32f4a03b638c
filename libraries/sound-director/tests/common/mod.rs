//! Shared fakes for integration tests
//!
//! Fake page elements share state through `Rc<RefCell<_>>` so tests can
//! inspect them after the director has handled an event.

#![allow(dead_code)]

use sound_director::platform::{ClickHandler, InputHandler, SubmitHandler};
use sound_director::{
    AudioFactory, ClickTarget, DirectiveFeed, EventSource, PlayableAudio, SubmittedForm,
    TextInput, Volume,
};
use std::cell::RefCell;
use std::rc::Rc;

// ===== Audio =====

#[derive(Debug, Default)]
pub struct AudioLog {
    /// Asset URLs passed to the factory, in order
    pub allocations: Vec<String>,
    /// (asset URL, volume) for each playback
    pub plays: Vec<(String, Volume)>,
}

impl AudioLog {
    pub fn plays_of(&self, sound: &str) -> usize {
        let suffix = format!("/{sound}.mp3");
        self.plays.iter().filter(|(src, _)| src.ends_with(&suffix)).count()
    }
}

pub struct MockAudio {
    src: String,
    volume: Volume,
    log: Rc<RefCell<AudioLog>>,
}

impl PlayableAudio for MockAudio {
    fn rewind(&mut self) {}

    fn set_volume(&mut self, volume: Volume) {
        self.volume = volume;
    }

    fn play(&mut self) {
        self.log
            .borrow_mut()
            .plays
            .push((self.src.clone(), self.volume));
    }
}

#[derive(Clone, Default)]
pub struct MockFactory {
    pub log: Rc<RefCell<AudioLog>>,
}

impl AudioFactory for MockFactory {
    type Audio = MockAudio;

    fn create(&mut self, src: &str) -> sound_director::Result<MockAudio> {
        self.log.borrow_mut().allocations.push(src.to_string());
        Ok(MockAudio {
            src: src.to_string(),
            volume: Volume::FULL,
            log: Rc::clone(&self.log),
        })
    }
}

// ===== Feed =====

/// Feed element whose text tests rewrite between ticks
#[derive(Clone, Default)]
pub struct MockFeed {
    pub text: Rc<RefCell<Option<String>>>,
}

impl MockFeed {
    pub fn set(&self, text: &str) {
        *self.text.borrow_mut() = Some(text.to_string());
    }

    pub fn remove(&self) {
        *self.text.borrow_mut() = None;
    }
}

impl DirectiveFeed for MockFeed {
    fn read(&self) -> Option<String> {
        self.text.borrow().clone()
    }
}

// ===== Elements =====

pub struct MockButton {
    pub is_button: bool,
    pub blurred: bool,
}

impl MockButton {
    pub fn button() -> Self {
        Self {
            is_button: true,
            blurred: false,
        }
    }

    pub fn div() -> Self {
        Self {
            is_button: false,
            blurred: false,
        }
    }
}

impl ClickTarget for MockButton {
    fn is_button(&self) -> bool {
        self.is_button
    }

    fn blur(&mut self) {
        self.blurred = true;
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockInput {
    pub text: bool,
    pub value: String,
    pub pattern: Option<String>,
    pub attributes: Vec<(String, String)>,
}

impl MockInput {
    pub fn text(value: &str) -> Self {
        Self {
            text: true,
            value: value.to_string(),
            ..Self::default()
        }
    }

    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(pattern.to_string());
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    /// Simulate a keystroke: append then return the element for dispatch
    pub fn type_char(&mut self, c: char) -> &mut Self {
        self.value.push(c);
        self
    }
}

impl TextInput for MockInput {
    fn is_text_input(&self) -> bool {
        self.text
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn pattern(&self) -> Option<String> {
        self.pattern.clone().filter(|p| !p.is_empty())
    }
}

/// Form whose inputs stay observable after it is handed off
#[derive(Clone, Default)]
pub struct MockForm {
    pub inputs: Rc<RefCell<Vec<MockInput>>>,
}

impl MockForm {
    pub fn with_inputs(inputs: Vec<MockInput>) -> Self {
        Self {
            inputs: Rc::new(RefCell::new(inputs)),
        }
    }

    pub fn values(&self) -> Vec<String> {
        self.inputs.borrow().iter().map(|i| i.value.clone()).collect()
    }
}

impl SubmittedForm for MockForm {
    fn clear_marked(&mut self, attribute: &str) -> usize {
        let mut cleared = 0;
        for input in self.inputs.borrow_mut().iter_mut() {
            let marked = input
                .attributes
                .iter()
                .any(|(name, value)| name == attribute && value == "true");
            if marked {
                input.value.clear();
                cleared += 1;
            }
        }
        cleared
    }
}

// ===== Event source =====

#[derive(Default)]
struct Handlers {
    click: Vec<ClickHandler>,
    input: Vec<InputHandler>,
    submit: Vec<SubmitHandler>,
}

/// Event source that tests dispatch into by hand
#[derive(Clone, Default)]
pub struct MockEvents {
    handlers: Rc<RefCell<Handlers>>,
}

impl MockEvents {
    pub fn click(&self, target: &mut dyn ClickTarget) {
        for handler in self.handlers.borrow_mut().click.iter_mut() {
            handler(&mut *target);
        }
    }

    pub fn input(&self, target: &mut dyn TextInput) {
        for handler in self.handlers.borrow_mut().input.iter_mut() {
            handler(&mut *target);
        }
    }

    pub fn submit(&self, form: &MockForm) {
        for handler in self.handlers.borrow_mut().submit.iter_mut() {
            handler(Box::new(form.clone()));
        }
    }

    pub fn handler_count(&self) -> usize {
        let handlers = self.handlers.borrow();
        handlers.click.len() + handlers.input.len() + handlers.submit.len()
    }
}

impl EventSource for MockEvents {
    fn on_click(&mut self, handler: ClickHandler) {
        self.handlers.borrow_mut().click.push(handler);
    }

    fn on_input(&mut self, handler: InputHandler) {
        self.handlers.borrow_mut().input.push(handler);
    }

    fn on_submit(&mut self, handler: SubmitHandler) {
        self.handlers.borrow_mut().submit.push(handler);
    }

    fn clear(&mut self) {
        *self.handlers.borrow_mut() = Handlers::default();
    }
}

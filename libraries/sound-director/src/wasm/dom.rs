//! DOM-backed implementations of the platform traits

use crate::{
    audio::{AudioFactory, PlayableAudio},
    error::{DirectorError, Result},
    platform::{
        ClickHandler, ClickTarget, DirectiveFeed, EventSource, InputHandler, SubmitHandler,
        SubmittedForm, TextInput,
    },
    types::Volume,
};
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlAudioElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlMediaElement,
};

/// Input types that accept typed text
const TEXT_INPUT_TYPES: &[&str] = &[
    "text", "search", "url", "tel", "email", "password", "number",
];

fn js_error(context: &str, value: &JsValue) -> DirectorError {
    DirectorError::Platform(format!("{context}: {value:?}"))
}

// ===== Audio =====

/// `<audio>` element created with `new Audio(src)`
pub struct DomAudio(HtmlAudioElement);

impl PlayableAudio for DomAudio {
    fn rewind(&mut self) {
        self.0.set_current_time(0.0);
    }

    fn set_volume(&mut self, volume: Volume) {
        HtmlMediaElement::set_volume(&self.0, f64::from(volume.gain()));
    }

    fn play(&mut self) {
        // Autoplay rejections surface on the promise; nothing to do with them
        let _ = HtmlMediaElement::play(&self.0);
    }
}

/// Factory producing detached `<audio>` elements
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlAudioFactory;

impl AudioFactory for HtmlAudioFactory {
    type Audio = DomAudio;

    fn create(&mut self, src: &str) -> Result<DomAudio> {
        HtmlAudioElement::new_with_src(src)
            .map(DomAudio)
            .map_err(|e| js_error("Failed to create audio element", &e))
    }
}

// ===== Event targets =====

struct DomClickTarget(Element);

impl ClickTarget for DomClickTarget {
    fn is_button(&self) -> bool {
        self.0.tag_name().eq_ignore_ascii_case("button")
            || self.0.get_attribute("role").as_deref() == Some("button")
    }

    fn blur(&mut self) {
        if let Some(element) = self.0.dyn_ref::<HtmlElement>() {
            let _ = element.blur();
        }
    }
}

struct DomTextInput(HtmlInputElement);

impl TextInput for DomTextInput {
    fn is_text_input(&self) -> bool {
        let kind = self.0.type_();
        kind.is_empty() || TEXT_INPUT_TYPES.contains(&kind.as_str())
    }

    fn value(&self) -> String {
        self.0.value()
    }

    fn set_value(&mut self, value: &str) {
        self.0.set_value(value);
    }

    fn pattern(&self) -> Option<String> {
        Some(self.0.pattern()).filter(|pattern| !pattern.is_empty())
    }
}

struct DomForm(HtmlFormElement);

impl SubmittedForm for DomForm {
    fn clear_marked(&mut self, attribute: &str) -> usize {
        let selector = format!("[{attribute}=\"true\"]");
        let Ok(nodes) = self.0.query_selector_all(&selector) else {
            return 0;
        };

        let mut cleared = 0;
        for index in 0..nodes.length() {
            if let Some(input) = nodes
                .get(index)
                .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
            {
                input.set_value("");
                cleared += 1;
            }
        }
        cleared
    }
}

// ===== Feed =====

/// Directive feed read from an element's text content
#[derive(Debug, Clone)]
pub struct ElementFeed {
    document: Document,
    element_id: String,
}

impl ElementFeed {
    /// Read the element with `element_id` on every poll
    pub fn new(document: Document, element_id: impl Into<String>) -> Self {
        Self {
            document,
            element_id: element_id.into(),
        }
    }
}

impl DirectiveFeed for ElementFeed {
    fn read(&self) -> Option<String> {
        self.document
            .get_element_by_id(&self.element_id)
            .map(|element| element.text_content().unwrap_or_default())
    }
}

// ===== Event source =====

struct Listener {
    event: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
}

/// Document-level listeners
///
/// Closures live here until [`EventSource::clear`] or drop removes them.
pub struct DocumentEvents {
    document: Document,
    listeners: Vec<Listener>,
}

impl DocumentEvents {
    /// Attach future listeners to `document`
    pub fn new(document: Document) -> Self {
        Self {
            document,
            listeners: Vec::new(),
        }
    }

    fn listen(&mut self, event: &'static str, capture: bool, callback: Closure<dyn FnMut(Event)>) {
        let added = self.document.add_event_listener_with_callback_and_bool(
            event,
            callback.as_ref().unchecked_ref(),
            capture,
        );

        match added {
            Ok(()) => self.listeners.push(Listener {
                event,
                capture,
                callback,
            }),
            Err(e) => warn!(
                event,
                error = %js_error("Failed to add listener", &e),
                "Listener not registered"
            ),
        }
    }
}

impl EventSource for DocumentEvents {
    fn on_click(&mut self, mut handler: ClickHandler) {
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                handler(&mut DomClickTarget(element));
            }
        });
        self.listen("click", false, callback);
    }

    fn on_input(&mut self, mut handler: InputHandler) {
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(input) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                handler(&mut DomTextInput(input));
            }
        });
        self.listen("input", false, callback);
    }

    fn on_submit(&mut self, mut handler: SubmitHandler) {
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(form) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
            {
                handler(Box::new(DomForm(form)));
            }
        });
        // Capture phase: runs even when a form handler stops propagation
        self.listen("submit", true, callback);
    }

    fn clear(&mut self) {
        for listener in self.listeners.drain(..) {
            let _ = self.document.remove_event_listener_with_callback_and_bool(
                listener.event,
                listener.callback.as_ref().unchecked_ref(),
                listener.capture,
            );
        }
    }
}

impl Drop for DocumentEvents {
    fn drop(&mut self) {
        self.clear();
    }
}

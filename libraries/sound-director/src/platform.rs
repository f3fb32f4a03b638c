//! Capability traits for the host page
//!
//! The director never touches a DOM directly. Hosts hand it these views of
//! event targets and of the directive feed; tests hand it fakes.

/// Target of a click event
pub trait ClickTarget {
    /// Whether the element acts as a button
    fn is_button(&self) -> bool;

    /// Drop keyboard focus from the element
    fn blur(&mut self);
}

/// Target of an input event
pub trait TextInput {
    /// Whether the element is a text-entry input
    fn is_text_input(&self) -> bool;

    /// Current value
    fn value(&self) -> String;

    /// Replace the current value
    fn set_value(&mut self, value: &str);

    /// Pattern constraint, if the element declares a non-empty one
    fn pattern(&self) -> Option<String>;
}

/// A form that has just been submitted
pub trait SubmittedForm {
    /// Empty every input in the form whose `attribute` is `"true"`
    ///
    /// Returns the number of inputs cleared.
    fn clear_marked(&mut self, attribute: &str) -> usize;
}

/// Source of pending timed directives
pub trait DirectiveFeed {
    /// Current feed text, or `None` when the feed element is absent
    fn read(&self) -> Option<String>;
}

/// Click handler callback
pub type ClickHandler = Box<dyn FnMut(&mut dyn ClickTarget)>;

/// Input handler callback
pub type InputHandler = Box<dyn FnMut(&mut dyn TextInput)>;

/// Submit handler callback; receives ownership so clearing can be deferred
pub type SubmitHandler = Box<dyn FnMut(Box<dyn SubmittedForm>)>;

/// Page-wide event registration
pub trait EventSource {
    /// Register a handler for every click on the page
    fn on_click(&mut self, handler: ClickHandler);

    /// Register a handler for every input event on the page
    fn on_input(&mut self, handler: InputHandler);

    /// Register a handler for every form submission on the page
    fn on_submit(&mut self, handler: SubmitHandler);

    /// Unregister everything registered through this source
    fn clear(&mut self);
}

impl DirectiveFeed for Option<String> {
    fn read(&self) -> Option<String> {
        self.clone()
    }
}

impl DirectiveFeed for String {
    fn read(&self) -> Option<String> {
        Some(self.clone())
    }
}

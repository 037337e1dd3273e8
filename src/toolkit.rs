//! The primitives a windowing toolkit provides to host a
//! [`ClickCounterWidget`](crate::ClickCounterWidget).
//!
//! A toolkit only needs to create two elements: a display whose text can be
//! replaced, and a trigger that invokes subscribed handlers when the user
//! activates it. Where those elements end up on screen is decided by the
//! toolkit when the widget is mounted.

use std::fmt::Debug;

/// A toolkit capable of creating the elements of a click counter.
pub trait Toolkit {
    /// The handle to a text display element.
    type Display: TextDisplay;
    /// The handle to an activatable element.
    type Trigger: Trigger;

    /// Returns a new display element showing `initial_text`.
    fn create_display(&mut self, initial_text: &str) -> Self::Display;

    /// Returns a new trigger element labeled `label`.
    fn create_trigger(&mut self, label: &str) -> Self::Trigger;
}

/// A handle to an element that renders a single string.
///
/// Clones of a handle refer to the same element.
pub trait TextDisplay: Clone + Send + 'static {
    /// Replaces the displayed text.
    fn set_text(&self, text: String);

    /// Returns the currently displayed text.
    fn text(&self) -> String;
}

/// A handle to an element the user can activate.
pub trait Trigger {
    /// Returns the label shown on the trigger.
    fn label(&self) -> String;

    /// Subscribes `handler` to this trigger's activations.
    ///
    /// Handlers are invoked in the order they were subscribed.
    fn on_activate(&mut self, handler: ActivationHandler);
}

/// A function invoked each time a [`Trigger`] is activated.
pub struct ActivationHandler(Box<dyn HandlerFunction>);

impl Debug for ActivationHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ActivationHandler")
            .field(&(self as *const Self))
            .finish()
    }
}

impl ActivationHandler {
    /// Returns a handler that calls `function` on each activation.
    pub fn new<F>(function: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        Self(Box::new(function))
    }

    /// Invokes the wrapped function.
    pub fn invoke(&mut self) {
        self.0.invoke();
    }
}

trait HandlerFunction: Send {
    fn invoke(&mut self);
}

impl<F> HandlerFunction for F
where
    F: FnMut() + Send,
{
    fn invoke(&mut self) {
        self();
    }
}

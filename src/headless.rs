//! A toolkit that keeps its elements in memory.
//!
//! Nothing is rendered. Activations are dispatched synchronously by calling
//! [`HeadlessTrigger::activate`], which makes this toolkit suitable for
//! driving a [`ClickCounterWidget`](crate::ClickCounterWidget) from tests or
//! scripts.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::toolkit::{ActivationHandler, TextDisplay, Toolkit, Trigger};

/// An in-memory [`Toolkit`].
#[derive(Debug, Default)]
pub struct Headless {
    elements_created: usize,
}

impl Headless {
    /// Returns the number of displays and triggers created by this toolkit.
    #[must_use]
    pub const fn elements_created(&self) -> usize {
        self.elements_created
    }
}

impl Toolkit for Headless {
    type Display = HeadlessDisplay;
    type Trigger = HeadlessTrigger;

    fn create_display(&mut self, initial_text: &str) -> Self::Display {
        self.elements_created += 1;
        HeadlessDisplay(Arc::new(Mutex::new(String::from(initial_text))))
    }

    fn create_trigger(&mut self, label: &str) -> Self::Trigger {
        self.elements_created += 1;
        HeadlessTrigger {
            label: String::from(label),
            handlers: Vec::new(),
            activations: 0,
        }
    }
}

/// A display element stored in memory.
#[derive(Debug, Clone)]
pub struct HeadlessDisplay(Arc<Mutex<String>>);

impl TextDisplay for HeadlessDisplay {
    fn set_text(&self, text: String) {
        *self.0.lock() = text;
    }

    fn text(&self) -> String {
        self.0.lock().clone()
    }
}

/// A trigger element activated by calling [`HeadlessTrigger::activate`].
#[derive(Debug)]
pub struct HeadlessTrigger {
    label: String,
    handlers: Vec<ActivationHandler>,
    activations: u64,
}

impl HeadlessTrigger {
    /// Activates this trigger, invoking every subscribed handler in order.
    pub fn activate(&mut self) {
        self.activations += 1;
        tracing::trace!(
            label = %self.label,
            handlers = self.handlers.len(),
            "dispatching activation"
        );
        for handler in &mut self.handlers {
            handler.invoke();
        }
    }

    /// Returns the number of times this trigger has been activated.
    #[must_use]
    pub const fn activations(&self) -> u64 {
        self.activations
    }
}

impl Trigger for HeadlessTrigger {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn on_activate(&mut self, handler: ActivationHandler) {
        self.handlers.push(handler);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::Headless;
    use crate::toolkit::{ActivationHandler, TextDisplay, Toolkit, Trigger};

    #[test]
    fn display_clones_share_text() {
        let mut toolkit = Headless::default();
        let display = toolkit.create_display("before");
        let clone = display.clone();

        clone.set_text(String::from("after"));

        assert_eq!(display.text(), "after");
        assert_eq!(toolkit.elements_created(), 1);
    }

    #[test]
    fn handlers_run_in_subscription_order() {
        // given
        let mut trigger = Headless::default().create_trigger("go");
        let order = Arc::new(Mutex::new(Vec::new()));
        for id in 0..3 {
            let order = order.clone();
            trigger.on_activate(ActivationHandler::new(move || order.lock().push(id)));
        }

        // when
        trigger.activate();
        trigger.activate();

        // then
        assert_eq!(*order.lock(), [0, 1, 2, 0, 1, 2]);
        assert_eq!(trigger.activations(), 2);
        assert_eq!(trigger.label(), "go");
    }

    #[test]
    fn activating_without_handlers_is_harmless() {
        let mut trigger = Headless::default().create_trigger("idle");

        trigger.activate();

        assert_eq!(trigger.activations(), 1);
    }
}

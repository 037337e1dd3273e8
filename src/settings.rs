//! The fixed strings and window geometry of a click counter.

/// The greeting shown before the first click.
pub const GREETING: &str = "Hello World from Cushy!";

/// The label shown on the button.
pub const TRIGGER_LABEL: &str = "Click Me!";

/// The title of the window hosting the counter.
pub const WINDOW_TITLE: &str = "Cushy Hello World";

/// Settings used when constructing a
/// [`ClickCounterWidget`](crate::ClickCounterWidget) and its window.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CounterSettings {
    /// The window title.
    pub title: String,
    /// The text displayed until the button is clicked.
    pub greeting: String,
    /// The text on the button.
    pub trigger_label: String,
    /// The minimum width of the window, in points.
    pub min_width: i32,
    /// The minimum height of the window, in points.
    pub min_height: i32,
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self {
            title: String::from(WINDOW_TITLE),
            greeting: String::from(GREETING),
            trigger_label: String::from(TRIGGER_LABEL),
            min_width: 400,
            min_height: 300,
        }
    }
}

impl CounterSettings {
    /// Sets the window title and returns self.
    #[must_use]
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the greeting and returns self.
    #[must_use]
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    /// Sets the button label and returns self.
    #[must_use]
    pub fn with_trigger_label(mut self, label: impl Into<String>) -> Self {
        self.trigger_label = label.into();
        self
    }
}

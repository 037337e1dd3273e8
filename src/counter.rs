//! The click count and the caption shown for it.

/// The number of activations a [`ClickCounterWidget`](crate::ClickCounterWidget)
/// has received since it was constructed.
///
/// The count starts at zero, only ever increases by one at a time, and is never
/// reset.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ClickCounter(u64);

impl ClickCounter {
    /// Returns a counter that has not been clicked.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Returns the number of recorded clicks.
    #[must_use]
    pub const fn count(self) -> u64 {
        self.0
    }

    /// Records one click and returns the new count.
    pub fn increment(&mut self) -> u64 {
        self.0 = self.0.saturating_add(1);
        self.0
    }

    /// Returns the caption for the current count, or `None` if no clicks have
    /// been recorded yet and the greeting should remain visible.
    #[must_use]
    pub fn caption(self) -> Option<String> {
        (self.0 > 0).then(|| caption_for(self.0))
    }
}

/// Formats the caption displayed after `count` clicks.
///
/// ```rust
/// use click_counter::caption_for;
///
/// assert_eq!(caption_for(1), "Button clicked 1 time!");
/// assert_eq!(caption_for(3), "Button clicked 3 times!");
/// ```
#[must_use]
pub fn caption_for(count: u64) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("Button clicked {count} time{suffix}!")
}

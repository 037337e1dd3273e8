//! The click counter widget.

use std::fmt::Debug;

use cushy::value::{Dynamic, Source};

use crate::counter::ClickCounter;
use crate::settings::CounterSettings;
use crate::toolkit::{ActivationHandler, TextDisplay, Toolkit, Trigger};

/// A text display and a trigger that counts its activations.
///
/// Until the trigger is first activated, the display shows the greeting.
/// Afterwards it shows `"Button clicked {n} time{s}!"` for the number of
/// activations received since construction.
///
/// Both elements are owned by the widget and released when it is dropped.
pub struct ClickCounterWidget<K>
where
    K: Toolkit,
{
    counter: Dynamic<ClickCounter>,
    display: K::Display,
    trigger: K::Trigger,
}

impl<K> ClickCounterWidget<K>
where
    K: Toolkit,
{
    /// Returns a new widget using the default [`CounterSettings`].
    pub fn new(toolkit: &mut K) -> Self {
        Self::with_settings(toolkit, &CounterSettings::default())
    }

    /// Returns a new widget using the greeting and trigger label from
    /// `settings`.
    pub fn with_settings(toolkit: &mut K, settings: &CounterSettings) -> Self {
        let counter = Dynamic::new(ClickCounter::new());
        let display = toolkit.create_display(&settings.greeting);
        let mut trigger = toolkit.create_trigger(&settings.trigger_label);
        trigger.on_activate(ActivationHandler::new({
            let counter = counter.clone();
            let display = display.clone();
            move || activated(&counter, &display)
        }));

        Self {
            counter,
            display,
            trigger,
        }
    }

    /// Returns the number of activations received so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.counter.get().count()
    }

    /// Returns the currently displayed text.
    #[must_use]
    pub fn text(&self) -> String {
        self.display.text()
    }

    /// Returns the display element.
    #[must_use]
    pub fn display(&self) -> &K::Display {
        &self.display
    }

    /// Returns the trigger element.
    #[must_use]
    pub fn trigger(&self) -> &K::Trigger {
        &self.trigger
    }

    /// Returns an exclusive reference to the trigger element.
    #[must_use]
    pub fn trigger_mut(&mut self) -> &mut K::Trigger {
        &mut self.trigger
    }

    /// Returns the display and trigger elements, consuming the widget.
    ///
    /// The activation handler stays subscribed to the trigger.
    #[must_use]
    pub fn into_parts(self) -> (K::Display, K::Trigger) {
        (self.display, self.trigger)
    }
}

impl<K> Debug for ClickCounterWidget<K>
where
    K: Toolkit,
    K::Display: Debug,
    K::Trigger: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickCounterWidget")
            .field("counter", &self.counter.get())
            .field("display", &self.display)
            .field("trigger", &self.trigger)
            .finish()
    }
}

fn activated<D>(counter: &Dynamic<ClickCounter>, display: &D)
where
    D: TextDisplay,
{
    let caption = {
        let mut counter = counter.lock();
        let count = counter.increment();
        tracing::debug!(count, "trigger activated");
        counter.caption()
    };
    if let Some(caption) = caption {
        display.set_text(caption);
    }
}

#[cfg(test)]
mod tests {
    use super::ClickCounterWidget;
    use crate::headless::Headless;
    use crate::settings::{CounterSettings, GREETING, TRIGGER_LABEL};
    use crate::toolkit::{TextDisplay, Trigger};

    fn widget_after(clicks: u64) -> ClickCounterWidget<Headless> {
        let mut widget = ClickCounterWidget::new(&mut Headless::default());
        for _ in 0..clicks {
            widget.trigger_mut().activate();
        }
        widget
    }

    #[test]
    fn shows_greeting_when_constructed() {
        let widget = widget_after(0);

        assert_eq!(widget.text(), GREETING);
        assert_eq!(widget.trigger().label(), TRIGGER_LABEL);
        assert_eq!(widget.count(), 0);
    }

    #[test]
    fn one_click_is_singular() {
        let widget = widget_after(1);

        assert_eq!(widget.text(), "Button clicked 1 time!");
        assert_eq!(widget.count(), 1);
    }

    #[test]
    fn two_clicks_are_plural() {
        let widget = widget_after(2);

        assert_eq!(widget.text(), "Button clicked 2 times!");
        assert_eq!(widget.count(), 2);
    }

    #[test]
    fn reading_does_not_change_text() {
        // given
        let widget = widget_after(0);

        // when
        let reads = (0..10).map(|_| widget.text()).collect::<Vec<_>>();

        // then
        assert!(reads.iter().all(|text| text == GREETING));
        assert_eq!(widget.count(), 0);

        // and
        let widget = widget_after(3);
        assert_eq!(widget.text(), widget.text());
        assert_eq!(widget.count(), 3);
    }

    #[test]
    fn every_activation_increments_once() {
        // given
        let mut widget = widget_after(0);

        for expected in 1..=50_u64 {
            // when
            widget.trigger_mut().activate();

            // then
            assert_eq!(widget.count(), expected);
            let suffix = if expected == 1 { "" } else { "s" };
            assert_eq!(
                widget.text(),
                format!("Button clicked {expected} time{suffix}!")
            );
        }
    }

    #[test]
    fn custom_settings_are_displayed() {
        let settings = CounterSettings::default()
            .with_greeting("Welcome")
            .with_trigger_label("Press");
        let mut widget = ClickCounterWidget::with_settings(&mut Headless::default(), &settings);

        assert_eq!(widget.text(), "Welcome");
        assert_eq!(widget.trigger().label(), "Press");

        widget.trigger_mut().activate();
        assert_eq!(widget.text(), "Button clicked 1 time!");
    }

    #[test]
    fn handler_outlives_widget() {
        // given
        let widget = widget_after(1);

        // when
        let (display, mut trigger) = widget.into_parts();
        trigger.activate();

        // then
        assert_eq!(display.text(), "Button clicked 2 times!");
    }

    #[test]
    fn debug_reports_count() {
        let widget = widget_after(2);

        let debug = format!("{widget:?}");

        assert!(debug.contains("ClickCounter(2)"), "{debug}");
    }

    #[test]
    fn widgets_count_independently() {
        let mut toolkit = Headless::default();
        let mut first = ClickCounterWidget::new(&mut toolkit);
        let second = ClickCounterWidget::new(&mut toolkit);

        first.trigger_mut().activate();

        assert_eq!(first.count(), 1);
        assert_eq!(second.count(), 0);
        assert_eq!(second.text(), GREETING);
        assert_eq!(toolkit.elements_created(), 4);
    }
}

//! Mounts a [`ClickCounterWidget`] into a Cushy window.

use std::panic::AssertUnwindSafe;

use cushy::figures::units::Lp;
use cushy::kludgine::cosmic_text::Weight;
use cushy::kludgine::shapes::CornerRadii;
use cushy::kludgine::Color;
use cushy::styles::components::{CornerRadius, FontWeight, IntrinsicPadding, TextColor, TextSize};
use cushy::styles::{Dimension, Edges};
use cushy::value::{Destination, Dynamic, Source};
use cushy::widget::{MakeWidget, WidgetInstance};
use cushy::widgets::button::{ButtonBackground, ButtonForeground};
use cushy::widgets::Label;
use cushy::window::Window;

use crate::settings::CounterSettings;
use crate::toolkit::{ActivationHandler, TextDisplay, Toolkit, Trigger};
use crate::widget::ClickCounterWidget;

// Sizes are in points.
const LABEL_TEXT_SIZE: i32 = 24;
const LABEL_COLOR: Color = Color::new(0x2c, 0x3e, 0x50, 255);
const LABEL_MARGIN: i32 = 20;
const BUTTON_TEXT_SIZE: i32 = 16;
const BUTTON_BACKGROUND: Color = Color::new(0x34, 0x98, 0xdb, 255);
const BUTTON_PADDING: ButtonPadding = ButtonPadding {
    vertical: 10,
    horizontal: 20,
};
const BUTTON_CORNER_RADIUS: i32 = 5;
const BUTTON_MAX_WIDTH: i32 = 200;

/// Padding between a button's edge and its label, in points.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct ButtonPadding {
    vertical: i32,
    horizontal: i32,
}

impl ButtonPadding {
    /// Returns the padding shared by every side, in points.
    const fn uniform(self) -> i32 {
        if self.vertical < self.horizontal {
            self.vertical
        } else {
            self.horizontal
        }
    }

    /// Returns the `(vertical, horizontal)` padding beyond
    /// [`uniform`](Self::uniform), in points.
    const fn remainder(self) -> (i32, i32) {
        let uniform = self.uniform();
        (self.vertical - uniform, self.horizontal - uniform)
    }

    /// The uniform part, applied through [`IntrinsicPadding`].
    fn intrinsic(self) -> Dimension {
        Dimension::Lp(Lp::points(self.uniform()))
    }

    /// The remainder, applied around the button's label.
    fn content(self) -> Edges<Dimension> {
        let (vertical, horizontal) = self.remainder();
        let vertical = Dimension::Lp(Lp::points(vertical));
        let horizontal = Dimension::Lp(Lp::points(horizontal));
        Edges::default()
            .with_top(vertical)
            .with_bottom(vertical)
            .with_left(horizontal)
            .with_right(horizontal)
    }
}

/// A [`Toolkit`] whose elements are Cushy widgets.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cushy;

impl Toolkit for Cushy {
    type Display = CushyDisplay;
    type Trigger = CushyTrigger;

    fn create_display(&mut self, initial_text: &str) -> Self::Display {
        CushyDisplay(Dynamic::new(String::from(initial_text)))
    }

    fn create_trigger(&mut self, label: &str) -> Self::Trigger {
        CushyTrigger {
            label: String::from(label),
            handlers: Vec::new(),
        }
    }
}

/// A label whose text is stored in a [`Dynamic`].
///
/// Setting the text from the activation handler causes the mounted label to
/// redraw.
#[derive(Debug, Clone)]
pub struct CushyDisplay(Dynamic<String>);

impl CushyDisplay {
    /// Returns the dynamic holding the displayed text.
    #[must_use]
    pub const fn dynamic(&self) -> &Dynamic<String> {
        &self.0
    }
}

impl TextDisplay for CushyDisplay {
    fn set_text(&self, text: String) {
        self.0.set(text);
    }

    fn text(&self) -> String {
        self.0.get()
    }
}

impl MakeWidget for CushyDisplay {
    fn make_widget(self) -> WidgetInstance {
        let margin = Dimension::Lp(Lp::points(LABEL_MARGIN));
        let margin: Edges<Dimension> = Edges::default()
            .with_top(margin)
            .with_bottom(margin)
            .with_left(margin)
            .with_right(margin);
        Label::<String>::new(self.0)
            .with(&TextSize, Dimension::Lp(Lp::points(LABEL_TEXT_SIZE)))
            .with(&FontWeight, Weight::BOLD)
            .with(&TextColor, LABEL_COLOR)
            .pad_by(margin)
            .transparent()
            .make_widget()
    }
}

/// A button that invokes its subscribed handlers when clicked.
///
/// The Cushy button is created when the trigger is mounted, so handlers must be
/// subscribed before calling [`MakeWidget::make_widget`].
#[derive(Debug)]
pub struct CushyTrigger {
    label: String,
    handlers: Vec<ActivationHandler>,
}

impl Trigger for CushyTrigger {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn on_activate(&mut self, handler: ActivationHandler) {
        self.handlers.push(handler);
    }
}

impl MakeWidget for CushyTrigger {
    fn make_widget(self) -> WidgetInstance {
        let mut handlers = AssertUnwindSafe(self.handlers);
        let corners = Dimension::Lp(Lp::points(BUTTON_CORNER_RADIUS));
        self.label
            .with(&TextSize, Dimension::Lp(Lp::points(BUTTON_TEXT_SIZE)))
            .pad_by(BUTTON_PADDING.content())
            .transparent()
            .into_button()
            .on_click(move |_| dispatch(&mut handlers))
            .with(&IntrinsicPadding, BUTTON_PADDING.intrinsic())
            .with(
                &CornerRadius,
                CornerRadii {
                    top_left: corners,
                    top_right: corners,
                    bottom_right: corners,
                    bottom_left: corners,
                },
            )
            .with(&ButtonBackground, BUTTON_BACKGROUND)
            .with(&ButtonForeground, Color::WHITE)
            .width(..Lp::points(BUTTON_MAX_WIDTH))
            .make_widget()
    }
}

fn dispatch(handlers: &mut [ActivationHandler]) {
    tracing::trace!(handlers = handlers.len(), "button clicked");
    for handler in handlers {
        handler.invoke();
    }
}

impl MakeWidget for ClickCounterWidget<Cushy> {
    fn make_widget(self) -> WidgetInstance {
        let (display, trigger) = self.into_parts();
        display
            .centered()
            .and(trigger.centered())
            .into_rows()
            .centered()
            .make_widget()
    }
}

/// Returns a window hosting `widget`, titled and sized according to
/// `settings`.
#[must_use]
pub fn window(
    widget: ClickCounterWidget<Cushy>,
    settings: &CounterSettings,
) -> Window<WidgetInstance> {
    widget
        .width(Lp::points(settings.min_width)..)
        .height(Lp::points(settings.min_height)..)
        .into_window()
        .titled(settings.title.clone())
}

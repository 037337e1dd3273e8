//! A window containing a label and a button. Each click of the button
//! increments a counter and updates the label to read
//! `"Button clicked {n} time{s}!"`.
//!
//! The behavior lives in [`ClickCounterWidget`], which is generic over the
//! [`Toolkit`] that provides its elements. [`Cushy`] mounts the widget into a
//! native window, while [`Headless`] keeps everything in memory:
//!
//! ```rust
//! use click_counter::{ClickCounterWidget, Headless, GREETING};
//!
//! let mut widget = ClickCounterWidget::new(&mut Headless::default());
//! assert_eq!(widget.text(), GREETING);
//!
//! widget.trigger_mut().activate();
//! assert_eq!(widget.text(), "Button clicked 1 time!");
//! ```
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::module_name_repetitions)]

mod counter;
pub mod frontend;
pub mod headless;
mod settings;
pub mod toolkit;
mod widget;

pub use counter::{caption_for, ClickCounter};
pub use frontend::Cushy;
pub use headless::Headless;
pub use settings::{CounterSettings, GREETING, TRIGGER_LABEL, WINDOW_TITLE};
pub use toolkit::{ActivationHandler, TextDisplay, Toolkit, Trigger};
pub use widget::ClickCounterWidget;

/// A result alias for running the application.
pub type Result<T = ()> = cushy::Result<T>;

/// Installs a `tracing` subscriber that writes to standard output.
///
/// Debug builds log at `INFO` and above, release builds only log errors. The
/// `RUST_LOG` environment variable overrides the default level. Calling this
/// more than once has no effect.
pub fn initialize_tracing() {
    #[cfg(feature = "tracing-output")]
    {
        use tracing::Level;
        use tracing_subscriber::filter::LevelFilter;
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;
        use tracing_subscriber::EnvFilter;

        #[cfg(debug_assertions)]
        const MAX_LEVEL: Level = Level::INFO;
        #[cfg(not(debug_assertions))]
        const MAX_LEVEL: Level = Level::ERROR;

        let _result = tracing_subscriber::fmt::fmt()
            .with_max_level(MAX_LEVEL)
            .finish()
            .with(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::from_level(MAX_LEVEL).into())
                    .from_env_lossy(),
            )
            .try_init();
    }
}

use click_counter::{frontend, ClickCounterWidget, CounterSettings, Cushy};
use cushy::Run;

fn main() -> click_counter::Result {
    click_counter::initialize_tracing();

    let settings = CounterSettings::default();
    let widget = ClickCounterWidget::with_settings(&mut Cushy, &settings);
    tracing::info!(title = %settings.title, "opening window");
    frontend::window(widget, &settings).run()
}

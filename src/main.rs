use iced_banner::app::{App, Flags};
use pico_args;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    init_logging();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        duration_secs: args.opt_value_from_str("--duration").unwrap_or(None),
    };

    iced::application(move || App::new(&flags), App::update, App::view)
        .title("iced_banner demo")
        .subscription(App::subscription)
        .window_size(iced::Size::new(420.0, 640.0))
        .run()
}

/// Initialise logging. The default level is `info`; it can be overridden
/// via the `RUST_LOG` environment variable.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

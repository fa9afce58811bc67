mod app;
mod cli;
mod event;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use echocart::assistant::{self, EndpointProbe, PollPolicy, WidgetStatus};
use echocart::config;
use tokio::sync::{oneshot, watch};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = config::init_app_config();
    let mut app = App::new(config);

    // Without a terminal there is nothing to draw; print the report instead.
    if args.headless || !is_terminal() {
        return event::run_headless(&mut app, args.json);
    }

    app.load_catalog();

    // The assistant bootstrap runs beside the UI so a slow or dead endpoint
    // never delays the first frame.
    let widget_config = app.config.widget_config();
    let (status_tx, status_rx) = watch::channel(WidgetStatus::Waiting);
    let (widget_tx, widget_rx) = oneshot::channel();
    let probe = EndpointProbe::for_host(&widget_config.host);
    tokio::spawn(async move {
        if let Some(widget) =
            assistant::bootstrap(probe, widget_config, PollPolicy::default(), status_tx).await
        {
            let _ = widget_tx.send(widget);
        }
    });

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app, status_rx, widget_rx).await;

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}

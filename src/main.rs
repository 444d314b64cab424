// Entrypoint for the CLI application.
// - Keeps `main` small: read the configuration, build the HTTP source and
//   hand the service to the menu.
// - Failures to fetch or an invalid menu choice are reported by the UI and
//   still exit normally.

use anyhow::Context;
use books_cli::api::ApiClient;
use books_cli::config::Config;
use books_cli::service::BookService;
use books_cli::ui::{self, main_menu, LinePrompter, TermPrompter};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the table on stdout stays clean. RUST_LOG
    // overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("Invalid configuration")?;
    let api = ApiClient::new(&config)?;
    tracing::debug!(url = api.url(), output = ?config.output, "starting");

    let service = BookService::new(api);
    if ui::is_interactive() {
        main_menu(&service, &config, &mut TermPrompter)?;
    } else {
        let stdin = std::io::stdin();
        main_menu(
            &service,
            &config,
            &mut LinePrompter::new(stdin.lock(), std::io::stdout()),
        )?;
    }
    Ok(())
}

use artic_browser::logging::init_logging;
use artic_browser::{ArtBrowser, ArtworkClient, Config};
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging needs the configured level, so config errors are reported after init
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    init_logging(&config.log_level);
    if let Some(err) = config_error {
        warn!(%err, "using default configuration");
    }

    info!(
        api = %config.api_base_url,
        page_size = config.page_size,
        version = env!("CARGO_PKG_VERSION"),
        "starting artic-browser"
    );

    let client = ArtworkClient::new(&config)?;
    let rows = config.page_size;

    iced::application(
        "Art Institute of Chicago",
        ArtBrowser::update,
        ArtBrowser::view,
    )
    .theme(ArtBrowser::theme)
    .centered()
    .run_with(move || ArtBrowser::new(client, rows))?;

    Ok(())
}

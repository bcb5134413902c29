use clap::Parser;
use panorama_client::cli::{self, Cli};
use panorama_client::{config::Settings, logger, PanoramaApiClient, Result};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let mut settings = Settings::load(&cli.config)?;
    if let Some(base_url) = cli.base_url {
        settings.api.base_url = base_url;
    }

    // Initialize logging
    logger::init(&settings.logging)?;

    info!("Starting panorama-client v{}", env!("CARGO_PKG_VERSION"));
    info!("Using backend at {}", settings.api.base_url);

    let client = PanoramaApiClient::from_config(&settings.api)?;
    cli::run(cli.command, &client, &mut std::io::stdout()).await
}

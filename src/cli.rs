use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::api::PanoramaApiClient;
use crate::Result;

#[derive(Debug, Parser)]
#[command(name = "panorama-client")]
#[command(about = "Fetch panorama photos and their metadata from the panorama backend")]
pub struct Cli {
    #[arg(short, long, default_value = "config/config.toml")]
    pub config: String,

    /// Overrides `api.base_url` from the configuration
    #[arg(short, long)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List photo locations
    Locations,
    /// Download the panorama image of a photo
    Pano {
        id: String,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Show the detail record of a photo
    Detail { id: String },
}

/// Runs one subcommand, printing JSON results to `out`.
pub async fn run(command: Command, client: &PanoramaApiClient, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Locations => {
            let locations = client.get_photo_data_list().await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&locations)?)?;
        }
        Command::Pano { id, output } => {
            let image = client.get_pano(id).await?;
            tokio::fs::write(&output, image.as_bytes()).await?;
            info!("Wrote {} bytes to {}", image.len(), output.display());
        }
        Command::Detail { id } => {
            let detail = client.get_pano_detail(id).await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&detail)?)?;
        }
    }

    Ok(())
}

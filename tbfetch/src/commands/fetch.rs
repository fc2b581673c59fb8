use crate::ui;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tbfetch_lib::config::{Config, DEFAULT_VERSION};
use tbfetch_lib::dist::DistClient;
use tbfetch_lib::mirror::mirror_release;

#[derive(Args)]
pub struct FetchCommand {
    /// Tor Browser version to download (e.g., 14.5.1)
    #[arg(long, default_value = DEFAULT_VERSION)]
    pub version: String,

    /// Directory in which the per-version directory is created (defaults to the current directory)
    #[arg(long)]
    pub dest: Option<PathBuf>,
}

impl FetchCommand {
    pub async fn run(self) -> Result<()> {
        let config = Config::setup(&self.version, self.dest.as_deref())?;
        let client = DistClient::new()?;

        ui::info(&format!(
            "Fetching Tor Browser {} from {}",
            config.version,
            config.listing_url()
        ));

        let report = mirror_release(&client, &config).await;

        if !report.listing_available {
            ui::warning("The release listing could not be retrieved; nothing was downloaded.");
        }
        ui::info(&format!(
            "{} downloaded, {} skipped, {} failed",
            report.downloaded.len(),
            report.skipped.len(),
            report.failed.len()
        ));
        ui::success(&report.summary());

        if !report.failed.is_empty() {
            ui::tip("Run the same command again to retry; files already on disk are skipped.");
        }

        Ok(())
    }
}

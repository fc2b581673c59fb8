use anyhow::Result;
use clap::Parser;

use crate::commands::fetch::FetchCommand;

#[derive(Parser)]
#[command(name = "tbfetch")]
#[command(about = "Download every artifact of a Tor Browser release from dist.torproject.org")]
// `--version` names the release to download
#[command(disable_version_flag = true)]
pub struct Cli {
    #[command(flatten)]
    pub fetch: FetchCommand,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        self.fetch.run().await
    }
}

use crate::download_client::{ArtifactBody, DownloadClient};
use anyhow::{Context, Result, bail};
use bytes::Bytes;
use futures_util::StreamExt;
use reqwest::Client;

const USER_AGENT: &str = concat!("tbfetch/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Tor Browser distribution server.
pub struct DistClient {
    client: Client,
}

impl DownloadClient for DistClient {
    async fn fetch_page(&self, url: &str) -> Result<Bytes> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {url}"))?;

        if !response.status().is_success() {
            bail!("Failed to fetch {}: {}", url, response.status());
        }

        response
            .bytes()
            .await
            .with_context(|| format!("Failed to read response body of {url}"))
    }

    async fn open_artifact(&self, url: &str) -> Result<ArtifactBody> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;

        if !response.status().is_success() {
            bail!("{} returned {}", url, response.status());
        }

        let content_length = response.content_length();
        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(anyhow::Error::from))
            .boxed();

        Ok(ArtifactBody {
            content_length,
            stream,
        })
    }
}

impl DistClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }
}

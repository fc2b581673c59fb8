use crate::download_client::{ArtifactBody, DownloadClient};
use anyhow::{Result, anyhow};
use bytes::Bytes;
use futures_util::StreamExt;
use futures_util::stream;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory stand-in for the distribution server.
///
/// Any URL that was not registered behaves like an unreachable host. Every call is
/// recorded so tests can assert which requests were made.
#[derive(Default)]
pub struct MockDownloadClient {
    pages: HashMap<String, Bytes>,
    artifacts: HashMap<String, Bytes>,
    broken_artifacts: HashMap<String, Bytes>,
    requests: Mutex<Vec<String>>,
}

impl MockDownloadClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, body: &[u8]) -> Self {
        self.pages
            .insert(url.to_string(), Bytes::copy_from_slice(body));
        self
    }

    pub fn with_artifact(mut self, url: &str, body: &[u8]) -> Self {
        self.artifacts
            .insert(url.to_string(), Bytes::copy_from_slice(body));
        self
    }

    /// Registers an artifact whose stream fails after delivering `prefix`.
    pub fn with_broken_artifact(mut self, url: &str, prefix: &[u8]) -> Self {
        self.broken_artifacts
            .insert(url.to_string(), Bytes::copy_from_slice(prefix));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, url: &str) {
        self.requests.lock().unwrap().push(url.to_string());
    }
}

impl DownloadClient for MockDownloadClient {
    async fn fetch_page(&self, url: &str) -> Result<Bytes> {
        self.record(url);
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("Failed to fetch {url}: connection refused"))
    }

    async fn open_artifact(&self, url: &str) -> Result<ArtifactBody> {
        self.record(url);

        if let Some(body) = self.artifacts.get(url) {
            // Split in two so the writer sees more than one chunk
            let mid = body.len() / 2;
            let chunks = vec![Ok(body.slice(..mid)), Ok(body.slice(mid..))];
            return Ok(ArtifactBody {
                content_length: Some(body.len() as u64),
                stream: stream::iter(chunks).boxed(),
            });
        }

        if let Some(prefix) = self.broken_artifacts.get(url) {
            let chunks = vec![Ok(prefix.clone()), Err(anyhow!("connection reset by peer"))];
            return Ok(ArtifactBody {
                content_length: None,
                stream: stream::iter(chunks).boxed(),
            });
        }

        Err(anyhow!("{url} returned 404 Not Found"))
    }
}

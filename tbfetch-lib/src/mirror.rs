use crate::config::Config;
use crate::download_client::DownloadClient;
use crate::downloader::{DownloadOutcome, download_file};
use crate::error::DownloadError;
use crate::listing;
use std::path::PathBuf;

/// What happened to each link of one release listing.
#[derive(Debug)]
pub struct MirrorReport {
    pub version: String,
    pub output_dir: PathBuf,
    /// False when the listing page could not be fetched or parsed
    pub listing_available: bool,
    pub downloaded: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<DownloadError>,
}

impl MirrorReport {
    fn new(config: &Config) -> Self {
        Self {
            version: config.version.clone(),
            output_dir: config.output_dir.clone(),
            listing_available: false,
            downloaded: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "All files for version {} have been downloaded into {}/",
            self.version,
            self.output_dir.display()
        )
    }
}

/// Fetches the release listing and downloads every allowed artifact, one after another.
///
/// Nothing in here is fatal: a missing listing means no links, and per-file failures are
/// logged as they happen and collected in the report.
pub async fn mirror_release<D: DownloadClient>(client: &D, config: &Config) -> MirrorReport {
    let mut report = MirrorReport::new(config);
    let listing_url = config.listing_url();

    // The parsed tree is not Send; it is dropped before the download loop
    let links = {
        let document = listing::fetch_document(client, &listing_url).await;
        report.listing_available = document.is_some();
        listing::extract_links(document.as_ref())
    };

    let files = listing::filter_files(&links);
    tracing::debug!(
        "{} links on {}, {} candidate files",
        links.len(),
        listing_url,
        files.len()
    );

    for file_name in files {
        match download_file(client, config, &file_name).await {
            Ok(DownloadOutcome::Downloaded { .. }) => report.downloaded.push(file_name),
            Ok(_) => report.skipped.push(file_name),
            Err(e) => {
                tracing::error!("{}", e);
                report.failed.push(e);
            }
        }
    }

    report
}

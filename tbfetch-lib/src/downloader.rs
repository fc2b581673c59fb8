use crate::artifact;
use crate::config::Config;
use crate::download_client::{ArtifactBody, DownloadClient};
use crate::error::DownloadError;
use crate::logging::{byte_counter_style, progress_bar_style};
use anyhow::Result;
use futures_util::StreamExt;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::instrument;
use tracing_indicatif::span_ext::IndicatifSpanExt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Downloaded { path: PathBuf, bytes: u64 },
    /// Skipped because the extension is not on the allowlist
    DisallowedExtension { extension: String },
    /// Skipped because a regular file already exists at the target path
    AlreadyPresent { path: PathBuf },
}

/// Downloads one artifact from the release listing into the output directory.
///
/// Disallowed extensions and files already on disk are skipped before any network access.
/// An existing file is never overwritten.
pub async fn download_file<D: DownloadClient>(
    client: &D,
    config: &Config,
    file_name: &str,
) -> Result<DownloadOutcome, DownloadError> {
    let extension = artifact::extension_of(file_name);
    if !artifact::is_allowed(&extension) {
        tracing::info!("Skipping {} (disallowed extension {})", file_name, extension);
        return Ok(DownloadOutcome::DisallowedExtension { extension });
    }

    let path = config.artifact_path(file_name);
    if path.is_file() {
        tracing::info!(
            "File {} already exists, skipping download.",
            path.display()
        );
        return Ok(DownloadOutcome::AlreadyPresent { path });
    }

    let url = config.artifact_url(file_name);
    let body = client
        .open_artifact(&url)
        .await
        .map_err(|source| DownloadError::Request {
            file: file_name.to_string(),
            source,
        })?;

    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .map_err(|source| DownloadError::CreateDir {
            file: file_name.to_string(),
            path: config.output_dir.clone(),
            source,
        })?;

    let mut file = tokio::fs::File::create(&path)
        .await
        .map_err(|source| DownloadError::CreateFile {
            file: file_name.to_string(),
            path: path.clone(),
            source,
        })?;

    let bytes = match stream_to_file(file_name, body, &mut file).await {
        Ok(bytes) => bytes,
        Err(source) => {
            drop(file);
            remove_partial_file(&path).await;
            return Err(DownloadError::Save {
                file: file_name.to_string(),
                path,
                source,
            });
        }
    };

    tracing::info!("Downloaded {}", file_name);
    Ok(DownloadOutcome::Downloaded { path, bytes })
}

#[instrument(skip_all)]
async fn stream_to_file(
    file_name: &str,
    body: ArtifactBody,
    file: &mut tokio::fs::File,
) -> Result<u64> {
    let current_span = tracing::Span::current();
    match body.content_length {
        Some(length) => {
            if let Ok(style) = progress_bar_style() {
                current_span.pb_set_style(&style);
            }
            current_span.pb_set_length(length);
        }
        None => {
            if let Ok(style) = byte_counter_style() {
                current_span.pb_set_style(&style);
            }
        }
    }
    current_span.pb_set_message(&format!("Downloading {file_name}..."));

    let mut written = 0u64;
    let mut stream = body.stream;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
        current_span.pb_set_position(written);
    }

    file.flush().await?;
    Ok(written)
}

/// Deletes a partially written artifact.
async fn remove_partial_file(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::warn!(
            "Failed to remove partial download {}: {}",
            path.display(),
            e
        );
    }
}

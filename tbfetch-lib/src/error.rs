use std::path::PathBuf;
use thiserror::Error;

/// Failure to download one artifact. Never aborts the rest of the run.
#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("failed to download {file}: {source:#}")]
    Request {
        file: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to create directory {} for {file}: {source}", .path.display())]
    CreateDir {
        file: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create file {}: {source}", .path.display())]
    CreateFile {
        file: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error saving {}: {source:#}", .path.display())]
    Save {
        file: String,
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl DownloadError {
    /// Name of the artifact the error belongs to.
    pub fn file_name(&self) -> &str {
        match self {
            DownloadError::Request { file, .. }
            | DownloadError::CreateDir { file, .. }
            | DownloadError::CreateFile { file, .. }
            | DownloadError::Save { file, .. } => file,
        }
    }
}

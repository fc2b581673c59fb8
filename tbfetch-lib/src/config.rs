use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Tor Browser release fetched when no version is given on the command line.
pub const DEFAULT_VERSION: &str = "14.5.1";

/// Root of the Tor Browser distribution tree; each release lives in `<root>/<version>/`.
pub const DIST_ROOT: &str = "https://dist.torproject.org/torbrowser";

#[derive(Debug, Clone)]
pub struct Config {
    /// Release version, used for both the remote listing and the local directory name
    pub version: String,

    /// Distribution root without a trailing slash
    pub dist_root: String,

    /// Directory the release artifacts are written into (`<dest>/<version>`)
    pub output_dir: PathBuf,
}

impl Config {
    /// Config for `version` on the official distribution server, downloading into
    /// `<dest>/<version>`, or a relative `<version>` directory when no `dest` is given.
    pub fn new(version: &str, dest: Option<&Path>) -> Self {
        match dest {
            Some(dest) => Self::with_dist_root(DIST_ROOT, version, dest),
            None => Self {
                output_dir: PathBuf::from(version),
                ..Self::with_dist_root(DIST_ROOT, version, Path::new(""))
            },
        }
    }

    pub fn with_dist_root(dist_root: &str, version: &str, dest: &Path) -> Self {
        Self {
            version: version.to_string(),
            dist_root: dist_root.trim_end_matches('/').to_string(),
            output_dir: dest.join(version),
        }
    }

    /// Builds the config and creates the output directory.
    /// This is the only step whose failure aborts a run.
    pub fn setup(version: &str, dest: Option<&Path>) -> Result<Self> {
        let config = Self::new(version, dest);

        std::fs::create_dir_all(&config.output_dir).with_context(|| {
            format!(
                "Failed to create output directory {}",
                config.output_dir.display()
            )
        })?;

        Ok(config)
    }

    /// URL of the release's directory listing, always ending in `/`.
    pub fn listing_url(&self) -> String {
        format!("{}/{}/", self.dist_root, self.version)
    }

    pub fn artifact_url(&self, file_name: &str) -> String {
        format!("{}{}", self.listing_url(), file_name)
    }

    pub fn artifact_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

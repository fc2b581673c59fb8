pub mod artifact;
pub mod config;
pub mod dist;
pub mod download_client;
pub mod downloader;
pub mod error;
pub mod listing;
pub mod logging;
pub mod mirror;

#[cfg(test)]
pub mod test_helpers;

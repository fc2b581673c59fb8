use anyhow::Result;
use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_indicatif::IndicatifLayer;
use tracing_indicatif::style::ProgressStyle;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"];

/// Bar for downloads whose size is known up front.
pub fn progress_bar_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::with_template(
        "{spinner:.green} {msg} [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})",
    )?
    .progress_chars("#>-")
    .tick_strings(TICKS))
}

/// Spinner for downloads without a `Content-Length`.
pub fn byte_counter_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::with_template("{spinner:.green} {msg} {bytes} ({bytes_per_sec})")?
        .tick_strings(TICKS))
}

/// Installs the global subscriber: bare messages, progress bars for instrumented downloads,
/// warnings and errors on stderr, everything else on stdout.
///
/// The level defaults to `info` and can be changed through `RUST_LOG`.
pub fn initialize_logging() {
    let progress_bar_layer = IndicatifLayer::new();
    let writer = progress_bar_layer
        .get_stderr_writer()
        .with_max_level(Level::WARN)
        .or_else(progress_bar_layer.get_stdout_writer());

    // Events are only logged outside spans, so no span context is printed either
    let fmt_layer = fmt::layer()
        .without_time()
        .with_target(false)
        .with_level(false)
        .with_writer(writer);

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(progress_bar_layer)
        .init();
}

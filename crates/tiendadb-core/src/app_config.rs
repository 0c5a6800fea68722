use std::path::PathBuf;

/// Runtime configuration shared by the CLI commands.
///
/// Everything has a default; the toolkit runs with no environment set up
/// at all, which is how the batch scripts are usually invoked.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Log filter passed to the tracing subscriber, e.g. `"info"`.
    pub log_level: String,
    /// GS1 country prefix used when minting EAN-13 codes.
    pub country_prefix: String,
    /// Currency attached to records that lack one.
    pub default_currency: String,
    /// Products JSON file consumed by batch commands when no path is
    /// given on the command line.
    pub products_path: PathBuf,
}

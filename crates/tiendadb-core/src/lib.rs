//! Shared domain types for the tiendadb toolkit: scraped product records,
//! the barcode enrichment pass over them, and application configuration.

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod products;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{ensure_barcodes, EnrichOutcome, FieldAction, ProductRecord};

/// Errors from loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

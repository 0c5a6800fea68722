//! `tiendadb` — barcode validation and enrichment for the scraped retail
//! product catalogs.
//!
//! Every command is flag-driven and non-interactive so runs can be
//! scripted and scheduled. Batch commands default to the products file
//! named by `TIENDADB_PRODUCTS_PATH`.

mod catalog;
mod enrich;
mod extract;
mod report;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use tiendadb_barcode::{
    ean13_from_seed_with_prefix, is_valid_ean13, is_valid_upca, upca_from_ean13, upca_from_seed,
    EAN13_LEN, UPCA_LEN,
};
use tiendadb_core::load_app_config_from_env;

#[derive(Debug, Parser)]
#[command(name = "tiendadb")]
#[command(about = "Barcode toolkit for scraped retail product catalogs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check a single code: 12 digits is UPC-A, 13 digits is EAN-13
    Validate {
        /// Candidate barcode
        code: String,
    },
    /// Mint a deterministic barcode from a SKU or other seed identifier
    Derive {
        /// Seed identifier, typically the product SKU
        #[arg(long)]
        sku: String,

        /// Symbology to mint
        #[arg(long, value_enum, default_value_t = SymbologyArg::Ean13)]
        symbology: SymbologyArg,

        /// Override the configured GS1 country prefix (EAN-13 only)
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Re-express an EAN-13 as UPC-A via the leading-zero convention
    Convert {
        /// Well-formed 13-digit EAN-13 code
        ean13: String,
    },
    /// Normalize the barcode fields of every record in a products file
    Enrich {
        /// Products JSON file; defaults to TIENDADB_PRODUCTS_PATH
        #[arg(long)]
        input: Option<PathBuf>,

        /// Write here instead of back over the input file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Validate a products file and write a per-record results file
    Report {
        /// Products JSON file; defaults to TIENDADB_PRODUCTS_PATH
        #[arg(long)]
        input: Option<PathBuf>,

        /// Where to write the per-record validation results
        #[arg(long, default_value = "barcode_validation_results.json")]
        output: PathBuf,
    },
    /// Dump all codes of one symbology to a text file, one per line
    Extract {
        /// Products JSON file; defaults to TIENDADB_PRODUCTS_PATH
        #[arg(long)]
        input: Option<PathBuf>,

        /// Which barcode field to extract
        #[arg(long, value_enum)]
        symbology: SymbologyArg,

        /// Output text file
        #[arg(long)]
        output: PathBuf,
    },
}

/// Symbology selector shared by `derive` and `extract`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SymbologyArg {
    Ean13,
    Upca,
}

impl std::fmt::Display for SymbologyArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbologyArg::Ean13 => write!(f, "ean13"),
            SymbologyArg::Upca => write!(f, "upca"),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = load_app_config_from_env()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Validate { code } => Ok(validate_one(&code)),
        Commands::Derive {
            sku,
            symbology,
            prefix,
        } => {
            let code = match symbology {
                SymbologyArg::Ean13 => {
                    let prefix = prefix.as_deref().unwrap_or(&config.country_prefix);
                    ean13_from_seed_with_prefix(&sku, prefix)?
                }
                SymbologyArg::Upca => {
                    if prefix.is_some() {
                        tracing::warn!("--prefix is ignored for UPC-A derivation");
                    }
                    upca_from_seed(&sku)
                }
            };
            println!("{code}");
            Ok(ExitCode::SUCCESS)
        }
        Commands::Convert { ean13 } => match upca_from_ean13(&ean13) {
            Some(upca) => {
                if !is_valid_upca(&upca) {
                    // The lossy truncation fallback: kept for compatibility
                    // with codes already persisted by the collectors.
                    tracing::warn!(
                        %ean13,
                        "no lossless UPC-A form; emitted code fails UPC-A validation"
                    );
                }
                println!("{upca}");
                Ok(ExitCode::SUCCESS)
            }
            None => anyhow::bail!("{ean13:?} is not a well-formed EAN-13 code"),
        },
        Commands::Enrich { input, output } => {
            enrich::run(&config, input.as_deref(), output.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Report { input, output } => {
            report::run(&config, input.as_deref(), &output)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Extract {
            input,
            symbology,
            output,
        } => {
            extract::run(&config, input.as_deref(), symbology, &output)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Classifies `code` by length and prints the verdict. Exit code 0 for a
/// valid code, 1 otherwise, so shell pipelines can branch on the result.
fn validate_one(code: &str) -> ExitCode {
    let verdict = match code.len() {
        UPCA_LEN if is_valid_upca(code) => Some("UPC-A"),
        EAN13_LEN if is_valid_ean13(code) => Some("EAN-13"),
        _ => None,
    };
    match verdict {
        Some(symbology) => {
            println!("{code}: valid {symbology}");
            ExitCode::SUCCESS
        }
        None => {
            println!("{code}: invalid");
            ExitCode::FAILURE
        }
    }
}

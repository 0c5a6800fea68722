//! `extract` command: dump one barcode column to a plain text file, one
//! code per line, for feeding external lookup tooling.

use std::path::Path;

use anyhow::Context;

use tiendadb_core::AppConfig;

use crate::{catalog, SymbologyArg};

pub(crate) fn run(
    config: &AppConfig,
    input: Option<&Path>,
    symbology: SymbologyArg,
    output: &Path,
) -> anyhow::Result<()> {
    let input = input.unwrap_or(&config.products_path);
    let records = catalog::read_products(input)?;

    let codes: Vec<&str> = records
        .iter()
        .filter_map(|record| match symbology {
            SymbologyArg::Ean13 => record.ean13.as_deref(),
            SymbologyArg::Upca => record.upc.as_deref(),
        })
        .filter(|code| !code.is_empty())
        .collect();

    let mut content = codes.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    std::fs::write(output, content).with_context(|| format!("writing {}", output.display()))?;

    tracing::info!(count = codes.len(), output = %output.display(), "codes extracted");
    println!("Extracted {} codes to {}", codes.len(), output.display());
    Ok(())
}
